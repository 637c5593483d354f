use crate::id::RANDOM_LEN;

/// A source of the 80-bit random field.
///
/// This abstraction allows you to plug in a real random source or a mocked
/// random source in tests. Sources are only ever called while the generator
/// lock is held, so they may keep mutable state without synchronizing
/// themselves.
///
/// # Example
/// ```
/// use ulidgen::RandSource;
///
/// struct FixedRand;
/// impl RandSource for FixedRand {
///     fn rand(&mut self) -> [u8; 10] {
///         [7; 10]
///     }
/// }
///
/// let mut rng = FixedRand;
/// assert_eq!(rng.rand(), [7; 10]);
/// ```
pub trait RandSource {
    /// Returns 10 fresh random bytes.
    fn rand(&mut self) -> [u8; RANDOM_LEN];
}
