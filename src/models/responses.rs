//! Response DTOs for the note service API
//!
//! Notes are returned as-is; only the health endpoint has its own body.

use serde::Serialize;

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    /// Whether the primary store is registered
    pub primary_configured: bool,
    /// Whether the cache store is registered
    pub cache_configured: bool,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(primary_configured: bool, cache_configured: bool) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            primary_configured,
            cache_configured,
        }
    }
}
