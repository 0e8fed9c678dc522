//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Persistence status: `memory`, `connected` or `unavailable`.
    pub database: String,
}

/// Result of granting a menu to a role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrantResponse {
    /// Role id.
    pub role_id: i64,
    /// Menu id.
    pub menu_id: i64,
    /// `false` when the grant already existed.
    pub granted: bool,
}
