//! Library lending reports
//!
//! Computes an operational snapshot of a library's lending activity
//! (outstanding and overdue loans, catalogue and reader totals, most borrowed
//! books, books per category) and serves it over a REST JSON API.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
