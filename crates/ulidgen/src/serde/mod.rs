//! Serde adapters for [`Ulid`](crate::Ulid).
//!
//! Use them with `#[serde(with = "...")]`:
//!
//! - [`as_base32_ulid`]: the canonical 26-character string
//! - [`as_bytes_ulid`]: the 16-byte big-endian layout

mod ulid;

pub use ulid::*;
