use super::{ENCODED_LEN, encode};
use crate::id::Ulid;
use core::fmt;

/// A stack-allocated view over the canonical 26-character encoding of a
/// [`Ulid`].
///
/// Produced by [`Ulid::encode`]. Implements [`fmt::Display`] and
/// [`AsRef<str>`] without allocating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Base32Formatter {
    buf: [u8; ENCODED_LEN],
}

impl Base32Formatter {
    #[must_use]
    pub fn new(id: &Ulid) -> Self {
        Self {
            buf: encode(id.as_bytes()),
        }
    }

    /// Returns a `&str` view of the base32 encoding.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: `self.buf` holds only Crockford alphabet bytes, which are
        // ASCII
        unsafe { core::str::from_utf8_unchecked(&self.buf) }
    }

    /// Consumes the formatter and returns the raw buffer.
    #[must_use]
    pub const fn into_inner(self) -> [u8; ENCODED_LEN] {
        self.buf
    }
}

impl fmt::Display for Base32Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Base32Formatter {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Base32Formatter {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Base32Formatter {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<String> for Base32Formatter {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == other.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatter_compares_with_string_forms() {
        let id = Ulid::from_u128(42);
        let formatted = Base32Formatter::new(&id);

        assert_eq!(formatted, "0000000000000000000000001A");
        assert_eq!(formatted, *"0000000000000000000000001A");
        assert_eq!(formatted, String::from("0000000000000000000000001A"));
        assert_eq!(formatted.to_string(), formatted.as_str());
        assert_eq!(&formatted.into_inner(), b"0000000000000000000000001A");
    }
}
