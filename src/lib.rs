//! DataVision
//!
//! A small dashboard server: server-rendered HTML pages plus read-only JSON
//! endpoints over an in-memory sample dataset (sales and users).

pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod web;

pub use error::{AppError, Result};

use std::time::Instant;

use data::Dataset;

/// Application state shared across all handlers.
///
/// Everything in here is immutable after startup, so the state is shared
/// behind a plain `Arc` with no locking.
pub struct AppState {
    pub settings: config::Settings,
    pub dataset: Dataset,
    pub started_at: Instant,
}

impl AppState {
    /// Build the state used in production: sample dataset, clock started now.
    pub fn new(settings: config::Settings) -> Self {
        Self {
            settings,
            dataset: Dataset::sample(),
            started_at: Instant::now(),
        }
    }
}
