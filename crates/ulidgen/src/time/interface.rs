/// A trait for time sources that return a wall-clock timestamp in
/// milliseconds since the Unix epoch.
///
/// This abstraction allows you to plug in the system clock or a mocked time
/// source in tests.
///
/// # Example
///
/// ```
/// use ulidgen::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_millis(&self) -> u64 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_millis(), 1234);
/// ```
pub trait TimeSource {
    /// Returns the current time in milliseconds since the Unix epoch.
    fn current_millis(&self) -> u64;
}

/// A clock stopped at a fixed instant.
///
/// Handy for reproducible output together with [`crate::SeededRandom`], and
/// for minting identifiers for a caller-chosen time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock {
    millis: u64,
}

impl FixedClock {
    #[must_use]
    pub const fn new(millis: u64) -> Self {
        Self { millis }
    }
}

impl TimeSource for FixedClock {
    fn current_millis(&self) -> u64 {
        self.millis
    }
}
