mod bus;
mod types;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use bus::*;
pub use types::*;
