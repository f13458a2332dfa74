//! Bookshelf
//!
//! A small REST JSON server exposing CRUD operations over an in-memory
//! collection of books.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::Repository;
use services::Services;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<Services>,
}

impl AppState {
    pub fn new(repository: Repository) -> Self {
        Self {
            services: Arc::new(Services::new(repository)),
        }
    }
}
