pub mod asset;
pub mod vulnerability;

pub use asset::*;
pub use vulnerability::*;
