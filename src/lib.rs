pub mod config;
pub mod discount;
pub mod handlers;
pub mod models;
pub mod utils;
