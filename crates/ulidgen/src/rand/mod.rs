mod interface;
mod seeded;
mod thread_random;

pub use interface::*;
pub use seeded::*;
pub use thread_random::*;
