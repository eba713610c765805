//! Attack assembly and process-wide setup.

pub mod attack;
pub mod telemetry;

pub use attack::*;
pub use telemetry::*;
