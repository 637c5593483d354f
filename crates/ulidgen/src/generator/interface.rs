use crate::{Result, Ulid};

/// A minimal interface for minting ULIDs
pub trait UlidGenerator {
    /// Mints an identifier for the given millisecond timestamp.
    ///
    /// # Errors
    /// - [`crate::Error::InvalidTimestamp`] if `timestamp` exceeds 48 bits
    /// - [`crate::Error::RandomOverflow`] if the random field for this
    ///   millisecond is exhausted
    fn generate(&self, timestamp: u64) -> Result<Ulid>;

    /// Mints an identifier for the generator's current time.
    ///
    /// # Errors
    /// Same as [`UlidGenerator::generate`].
    fn generate_now(&self) -> Result<Ulid>;
}
