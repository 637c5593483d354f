/// A result type defaulting to the crate-wide [`enum@Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that `ulidgen` can emit.
///
/// Every variant is a caller-reachable condition: out-of-range input, a
/// malformed string, or exhaustion of the random field within a single
/// millisecond. Nothing is retried internally, so the retry policy (if any)
/// belongs to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The timestamp does not fit in the 48-bit timestamp field.
    ///
    /// Raised when generating with a timestamp above [`crate::MAX_TIMESTAMP`]
    /// and when decoding a string whose first character is above `7`.
    #[error("invalid timestamp: {timestamp} exceeds the 48-bit range")]
    InvalidTimestamp {
        /// The offending timestamp in milliseconds. For decoded strings this
        /// is the full 50-bit value carried by the first ten characters.
        timestamp: u64,
    },

    /// All 2^80 random values for the current millisecond have been used.
    ///
    /// Wrapping would produce an identifier that sorts before its
    /// predecessor, so the generation fails instead and the generator state
    /// is left untouched.
    #[error("random field overflow: the 80-bit space for this millisecond is exhausted")]
    RandomOverflow,

    /// The encoded string is not exactly 26 bytes long.
    #[error("invalid length: expected 26, got {len}")]
    InvalidLength {
        /// The length of the rejected input, in bytes.
        len: usize,
    },

    /// The encoded string contains a byte outside the Crockford alphabet.
    #[error("invalid character '{}' at index {index}", .byte.escape_ascii())]
    InvalidCharacter {
        /// The rejected byte.
        byte: u8,
        /// Its position in the input.
        index: usize,
    },

    /// The generator lock was poisoned by a thread that panicked while
    /// holding it.
    ///
    /// Only the std mutex poisons; with the `parking-lot` feature enabled this
    /// variant does not exist.
    #[cfg_attr(docsrs, doc(cfg(not(feature = "parking-lot"))))]
    #[cfg(not(feature = "parking-lot"))]
    #[error("generator lock poisoned")]
    LockPoisoned,
}

#[cfg(not(feature = "parking-lot"))]
use crate::generator::{MutexGuard, PoisonError};
#[cfg(not(feature = "parking-lot"))]
impl<T> From<PoisonError<MutexGuard<'_, T>>> for Error {
    fn from(_: PoisonError<MutexGuard<'_, T>>) -> Self {
        Self::LockPoisoned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_input() {
        let err = Error::InvalidCharacter {
            byte: b'U',
            index: 3,
        };
        assert_eq!(err.to_string(), "invalid character 'U' at index 3");

        let err = Error::InvalidLength { len: 25 };
        assert_eq!(err.to_string(), "invalid length: expected 26, got 25");
    }
}
