pub mod catalog;
pub mod favorite;
pub mod order;
pub mod payment;

pub use catalog::*;
pub use favorite::*;
pub use order::*;
pub use payment::*;
