use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to predict a matchup outcome
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PredictRequest {
    #[validate(length(min = 1))]
    pub fighter1: String,
    #[validate(length(min = 1))]
    pub fighter2: String,
    #[serde(default)]
    #[serde(alias = "autoselect_corner", rename = "autoSelectCorner")]
    pub auto_select_corner: bool,
}

/// Query parameters for fighter name autocomplete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}
