use super::RandSource;
use crate::id::RANDOM_LEN;
use ::rand::{Rng, rng};

/// A `RandSource` that uses the thread-local RNG (`rand::rng()`).
///
/// This RNG is fast, cryptographically secure (ChaCha-based), and automatically
/// reseeded periodically.
///
/// This type does **not** store the RNG itself; it accesses the thread-local
/// generator on each call, so it is `Send` and `Sync` and can live inside a
/// shared generator.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource for ThreadRandom {
    fn rand(&mut self) -> [u8; RANDOM_LEN] {
        let mut buf = [0_u8; RANDOM_LEN];
        rng().fill(&mut buf);
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successive_draws_differ() {
        let mut rng = ThreadRandom;
        // 2^-80 chance of a false failure
        assert_ne!(rng.rand(), rng.rand());
    }
}
