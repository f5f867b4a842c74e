//! API response models

use serde::{Deserialize, Serialize};

/// JSON envelope wrapping every data endpoint response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataEnvelope<T> {
    pub success: bool,
    pub data: Vec<T>,
}

impl<T> DataEnvelope<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthResponse {
    /// Always "OK" while the process is serving requests
    pub status: String,
    /// Current time, ISO 8601
    pub timestamp: String,
    /// Process uptime in seconds
    pub uptime: f64,
}
