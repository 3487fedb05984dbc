//! Bookery Book Catalog Server
//!
//! A Rust implementation of the Bookery book catalog service, providing a
//! REST JSON API for managing categories, genres and books, with token-based
//! authentication for mutating routes.

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
