//! Data Transfer Objects - response bodies for the API.

use serde::{Deserialize, Serialize};

/// Body of a successful create: the generated identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: i64,
}

/// Acknowledgement for a successful update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatedResponse {
    pub updated: bool,
}

/// Acknowledgement for a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub deleted: bool,
}
