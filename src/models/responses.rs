use serde::{Deserialize, Serialize};
use crate::models::domain::FighterRecord;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub store: bool,
    pub oracle: bool,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Full fighter record plus the weight classes the fighter has fought at
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FighterDetailResponse {
    #[serde(flatten)]
    pub record: FighterRecord,
    #[serde(rename = "weightClasses")]
    pub weight_classes: Vec<String>,
}
