//! Equipment inventory administration panel
//!
//! Hosts the equipment tab as a server-driven component over a REST JSON API:
//! searchable, filterable, sortable and paginated listing of equipment joined
//! with personnel data, spreadsheet export, and equipment type management.

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
