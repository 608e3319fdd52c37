// Library exports for the binary and integration tests

pub mod api;
pub mod app_data;
pub mod authz;
pub mod cli;
pub mod config;
pub mod coordinators;
pub mod errors;
pub mod seed;
pub mod services;
pub mod stores;
pub mod types;

pub use app_data::AppData;
