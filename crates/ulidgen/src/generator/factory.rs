use std::sync::Arc;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    error::Result,
    generator::{MonotonicRandom, UlidGenerator},
    id::{Ulid, encode_timestamp},
    rand::{RandSource, SeededRandom, ThreadRandom},
    time::{SystemClock, TimeSource},
};

/// Mints complete identifiers from a clock and a shared
/// [`MonotonicRandom`].
///
/// Both capabilities are injected: the [`TimeSource`] only matters for
/// [`UlidFactory::generate_now`], and the generator is held by [`Arc`] so
/// cloned factories (or factories built with
/// [`UlidFactory::with_generator`]) keep a single monotonic sequence.
///
/// # Example
/// ```
/// use ulidgen::{FixedClock, UlidFactory};
///
/// let factory = UlidFactory::seeded(FixedClock::new(1_649_293_350_045), 42);
///
/// let a = factory.generate_now().unwrap();
/// let b = factory.generate_now().unwrap();
/// assert_eq!(a.timestamp(), 1_649_293_350_045);
/// assert!(a < b);
/// assert_eq!(a.to_string()[..10], b.to_string()[..10]);
/// ```
pub struct UlidFactory<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    generator: Arc<MonotonicRandom<R>>,
    time: T,
}

impl<T, R> UlidFactory<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    /// Creates a factory that owns a fresh [`MonotonicRandom`] over `rng`.
    ///
    /// # Parameters
    /// - `time`: A [`TimeSource`] used by [`Self::generate_now`]
    /// - `rng`: A [`RandSource`] used to draw fresh random fields
    pub fn new(time: T, rng: R) -> Self {
        Self::with_generator(time, Arc::new(MonotonicRandom::new(rng)))
    }

    /// Creates a factory over an existing, possibly shared, generator.
    pub fn with_generator(time: T, generator: Arc<MonotonicRandom<R>>) -> Self {
        Self { generator, time }
    }

    /// The generator backing this factory.
    pub fn generator(&self) -> &Arc<MonotonicRandom<R>> {
        &self.generator
    }

    /// Mints an identifier for `timestamp` milliseconds since the Unix epoch.
    ///
    /// The timestamp is validated before the generator is touched, so a
    /// failed call never advances the monotonic state.
    ///
    /// # Errors
    /// - [`Error::InvalidTimestamp`] if `timestamp > 2^48 - 1`
    /// - [`Error::RandomOverflow`] if the random field for this millisecond is
    ///   exhausted
    /// - [`Error::LockPoisoned`] if the generator lock is poisoned (std mutex
    ///   only)
    ///
    /// [`Error::InvalidTimestamp`]: crate::Error::InvalidTimestamp
    /// [`Error::RandomOverflow`]: crate::Error::RandomOverflow
    /// [`Error::LockPoisoned`]: crate::Error::LockPoisoned
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate(&self, timestamp: u64) -> Result<Ulid> {
        encode_timestamp(timestamp)?;
        let random = self.generator.next_random(timestamp)?;
        Ulid::from_parts(timestamp, random)
    }

    /// Mints an identifier for the current time of the injected clock.
    ///
    /// # Errors
    /// Same as [`Self::generate`].
    pub fn generate_now(&self) -> Result<Ulid> {
        self.generate(self.time.current_millis())
    }
}

impl UlidFactory<SystemClock, ThreadRandom> {
    /// A factory over the system wall clock and the thread-local RNG.
    #[must_use]
    pub fn system() -> Self {
        Self::new(SystemClock, ThreadRandom)
    }
}

impl Default for UlidFactory<SystemClock, ThreadRandom> {
    fn default() -> Self {
        Self::system()
    }
}

impl<T> UlidFactory<T, SeededRandom>
where
    T: TimeSource,
{
    /// A factory whose random fields are reproducible from `seed`.
    pub fn seeded(time: T, seed: u64) -> Self {
        Self::new(time, SeededRandom::new(seed))
    }
}

impl<T, R> Clone for UlidFactory<T, R>
where
    T: TimeSource + Clone,
    R: RandSource,
{
    fn clone(&self) -> Self {
        Self {
            generator: Arc::clone(&self.generator),
            time: self.time.clone(),
        }
    }
}

impl<T, R> UlidGenerator for UlidFactory<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    fn generate(&self, timestamp: u64) -> Result<Ulid> {
        self.generate(timestamp)
    }

    fn generate_now(&self) -> Result<Ulid> {
        self.generate_now()
    }
}
