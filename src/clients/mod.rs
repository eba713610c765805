//! Named requests against the shop API and its actuator endpoints.

#[macro_use]
mod macros;
pub mod shop_api;

pub use shop_api::*;
