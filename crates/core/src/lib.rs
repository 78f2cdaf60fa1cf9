#![forbid(unsafe_code)]

pub mod error;
pub mod metrics;
pub mod model;
pub mod time;

pub use error::ParseKeyError;
pub use time::Clock;
