//! ServiceLogger library root.
//! Exposes the application facade plus the internal store modules.

pub mod app;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod storage;
pub mod utils;

pub use app::App;
pub use config::Config;
pub use errors::{AppError, AppResult};
