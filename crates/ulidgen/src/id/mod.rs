mod parse;
mod ulid;

pub use parse::*;
pub use ulid::*;
