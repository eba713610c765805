//! The simulated user classes, each a goose scenario of weighted transactions.

pub mod admin;
pub mod standard;

pub use admin::*;
pub use standard::*;
