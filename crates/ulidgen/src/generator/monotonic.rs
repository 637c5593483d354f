#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    error::{Error, Result},
    generator::Mutex,
    id::RANDOM_LEN,
    rand::RandSource,
};

struct State<R> {
    last_timestamp: Option<u64>,
    last_random: [u8; RANDOM_LEN],
    rng: R,
}

/// The stateful source of the 80-bit random field.
///
/// For a timestamp it has not seen last, it draws fresh bytes from its
/// [`RandSource`]. For a repeat of the last timestamp it returns the previous
/// field plus one, so identifiers minted within one millisecond are strictly
/// increasing. The whole read-decide-commit step, including the entropy draw,
/// runs under one mutex, which makes concurrent callers linearizable: no two
/// calls observe the same prior state.
///
/// ## Features
/// - ✅ Thread-safe
/// - ✅ Probabilistically unique (no coordination required)
/// - ✅ Time-ordered (strictly increasing within a millisecond)
///
/// Share one instance between factories through an [`Arc`] when they must
/// not mint colliding identifiers for the same millisecond.
///
/// [`Arc`]: std::sync::Arc
pub struct MonotonicRandom<R>
where
    R: RandSource,
{
    state: Mutex<State<R>>,
}

impl<R> MonotonicRandom<R>
where
    R: RandSource,
{
    /// Creates a generator with no history. The first request always draws
    /// fresh randomness, whatever its timestamp.
    pub fn new(rng: R) -> Self {
        Self {
            state: Mutex::new(State {
                last_timestamp: None,
                last_random: [0; RANDOM_LEN],
                rng,
            }),
        }
    }

    /// Creates a generator that behaves as if it had just produced
    /// `last_random` for `last_timestamp`.
    ///
    /// This constructor is primarily useful for resuming a sequence or for
    /// driving the generator to the edge of its random space in tests.
    pub fn from_state(last_timestamp: u64, last_random: [u8; RANDOM_LEN], rng: R) -> Self {
        Self {
            state: Mutex::new(State {
                last_timestamp: Some(last_timestamp),
                last_random,
                rng,
            }),
        }
    }

    /// Returns the random field for `timestamp` and records it as the latest
    /// state.
    ///
    /// # Errors
    /// - [`Error::RandomOverflow`] if `timestamp` repeats and the previous
    ///   field is already `0xFFFF_FFFF_FFFF_FFFF_FFFF`. The state is left
    ///   unchanged.
    /// - [`Error::LockPoisoned`] if another thread panicked while holding the
    ///   lock (std mutex only).
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn next_random(&self, timestamp: u64) -> Result<[u8; RANDOM_LEN]> {
        #[cfg(feature = "parking-lot")]
        let mut state = self.state.lock();
        #[cfg(not(feature = "parking-lot"))]
        let mut state = self.state.lock()?;

        let random = if state.last_timestamp == Some(timestamp) {
            match increment_random(&state.last_random) {
                Some(next) => next,
                None => return Err(Self::cold_overflow(timestamp)),
            }
        } else {
            state.rng.rand()
        };

        state.last_timestamp = Some(timestamp);
        state.last_random = random;
        Ok(random)
    }

    #[cold]
    #[inline(never)]
    fn cold_overflow(_timestamp: u64) -> Error {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            timestamp = _timestamp,
            "random field exhausted for this millisecond"
        );
        Error::RandomOverflow
    }
}

/// Adds one to an 80-bit big-endian integer.
///
/// The field is handled as a 16-bit high part (bytes 0..2) and a 64-bit low
/// part (bytes 2..10); the low part carries into the high part. Returns
/// `None` instead of wrapping when the high part would overflow too.
#[must_use]
pub fn increment_random(random: &[u8; RANDOM_LEN]) -> Option<[u8; RANDOM_LEN]> {
    let (hi_bytes, lo_bytes) = random.split_at(2);
    let mut hi = u16::from_be_bytes([hi_bytes[0], hi_bytes[1]]);
    let mut lo_buf = [0_u8; 8];
    lo_buf.copy_from_slice(lo_bytes);
    let mut lo = u64::from_be_bytes(lo_buf);

    lo = lo.wrapping_add(1);
    if lo == 0 {
        hi = hi.checked_add(1)?;
    }

    let mut out = [0_u8; RANDOM_LEN];
    out[..2].copy_from_slice(&hi.to_be_bytes());
    out[2..].copy_from_slice(&lo.to_be_bytes());
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_low_part() {
        assert_eq!(
            increment_random(&[0; 10]),
            Some([0, 0, 0, 0, 0, 0, 0, 0, 0, 1])
        );
        assert_eq!(
            increment_random(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 0xFF]),
            Some([0, 0, 0, 0, 0, 0, 0, 0, 1, 0])
        );
    }

    #[test]
    fn increment_carries_into_high_part() {
        let low_full = [0, 0, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF];
        assert_eq!(
            increment_random(&low_full),
            Some([0, 1, 0, 0, 0, 0, 0, 0, 0, 0])
        );

        let low_full = [0x12, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF];
        assert_eq!(
            increment_random(&low_full),
            Some([0x13, 0, 0, 0, 0, 0, 0, 0, 0, 0])
        );
    }

    #[test]
    fn increment_refuses_to_wrap() {
        assert_eq!(increment_random(&[0xFF; 10]), None);
    }

    #[test]
    fn increment_matches_u128_arithmetic() {
        for start in [0_u128, 41, 0xFFFF_FFFF_FFFF_FFFF, (1 << 80) - 2] {
            let bytes: [u8; 10] = start.to_be_bytes()[6..].try_into().unwrap();
            let next = increment_random(&bytes).unwrap();
            let mut wide = [0_u8; 16];
            wide[6..].copy_from_slice(&next);
            assert_eq!(u128::from_be_bytes(wide), start + 1);
        }
    }
}
