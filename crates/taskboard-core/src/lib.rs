pub mod clock;
pub mod config;
pub mod error;
pub mod result;

pub use clock::{Clock, SystemClock};
pub use config::AppConfig;
pub use error::BoardError;
pub use result::BoardResult;

#[cfg(any(test, feature = "mock"))]
pub use clock::MockClock;
