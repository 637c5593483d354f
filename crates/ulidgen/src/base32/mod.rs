//! Crockford base32 codec for the 16-byte ULID layout.
//!
//! The timestamp and random fields are encoded separately (10 + 16
//! characters) so that the string splits at a fixed character boundary.

mod crockford;
mod formatter;

pub use crockford::*;
pub use formatter::*;
