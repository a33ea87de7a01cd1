pub mod api;
pub mod cli;
pub mod errors;
pub mod generator;
pub mod models;
pub mod store;
pub mod utils;
