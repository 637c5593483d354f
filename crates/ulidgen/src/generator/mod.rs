mod factory;
mod interface;
mod monotonic;
mod mutex;

pub use factory::*;
pub use interface::*;
pub use monotonic::*;
pub(crate) use mutex::*;
