use serde::{Deserialize, Serialize};

/// Fighter attribute record, one active row per named fighter
///
/// Every numeric attribute consumed by the feature vector is a required
/// field. A NULL column in the store is rejected when the record is built
/// (zero is a valid stat value, so defaulting would silently corrupt a
/// prediction).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FighterRecord {
    pub name: String,
    pub gender: String,
    pub stance: Option<String>,
    pub rating: f64,
    pub current_win_streak: i64,
    pub current_lose_streak: i64,
    pub avg_sig_str_landed: f64,
    pub avg_sig_str_pct: f64,
    pub avg_sub_att: f64,
    pub avg_td_landed: f64,
    pub avg_td_pct: f64,
    pub wins: i64,
    pub losses: i64,
    pub draws: i64,
    pub wins_by_decision: i64,
    pub wins_by_ko: i64,
    pub wins_by_submission: i64,
    pub total_rounds_fought: i64,
    pub total_title_bouts: i64,
    pub height_cm: f64,
    pub reach_cm: f64,
    pub weight_lb: i64,
    pub age: i64,
    pub days_since_last_fight: i64,
    pub last_fight_date: Option<chrono::NaiveDate>,
}

/// Red/blue corner assignment for one matchup
///
/// Produced by the corner assignment policy; never persisted.
#[derive(Debug, Clone)]
pub struct OrderedPair {
    pub red: FighterRecord,
    pub blue: FighterRecord,
}

/// Fixed-order numeric input to the scoring oracle
///
/// Exactly 24 values in the order the model was trained against. Built
/// fresh per request and never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector(pub(crate) [f64; 24]);

impl FeatureVector {
    pub fn values(&self) -> &[f64; 24] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Client-facing prediction payload
///
/// Carries both corner names alongside the winner so a caller can render
/// "A vs B" regardless of any corner reordering. Probabilities are rounded
/// to 4 decimals for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FightPrediction {
    pub winner: String,
    #[serde(rename = "rprob")]
    pub red_prob: f64,
    #[serde(rename = "bprob")]
    pub blue_prob: f64,
    #[serde(rename = "rcorner")]
    pub red_corner: String,
    #[serde(rename = "bcorner")]
    pub blue_corner: String,
}
