use crate::core::{corners::assign_corners, features::build_features, outcome::synthesize};
use crate::models::FightPrediction;
use crate::services::{FighterStore, OracleError, ScoringClient, StoreError};
use std::sync::Arc;
use thiserror::Error;

/// Errors a prediction request can surface
///
/// All variants are recoverable per-request failures; none abort the
/// process. No partial result is ever produced alongside one of these.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("unknown fighter: {0}")]
    UnknownFighter(String),

    #[error("cannot match a fighter against themselves")]
    IdenticalFighters,

    #[error("incomplete record for {fighter}: {attribute} is missing")]
    IncompleteRecord {
        fighter: String,
        attribute: &'static str,
    },

    #[error("scoring oracle unavailable: {0}")]
    OracleUnavailable(#[from] OracleError),

    #[error("store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for PredictError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::IncompleteRecord { fighter, attribute } => {
                PredictError::IncompleteRecord { fighter, attribute }
            }
            other => PredictError::Store(other),
        }
    }
}

/// Matchup prediction orchestrator
///
/// Holds the store and oracle handles injected at startup; the pipeline
/// itself keeps no per-request state, so one predictor serves all requests
/// concurrently.
#[derive(Clone)]
pub struct Predictor {
    store: Arc<FighterStore>,
    oracle: Arc<ScoringClient>,
}

impl Predictor {
    pub fn new(store: Arc<FighterStore>, oracle: Arc<ScoringClient>) -> Self {
        Self { store, oracle }
    }

    /// Predict the winner of a matchup between two named fighters
    ///
    /// Pipeline: validate -> resolve both records -> assign corners ->
    /// build the feature vector -> score -> synthesize. Identical names are
    /// rejected before any store access; an unknown name is rejected before
    /// any vector is built or the oracle is called.
    pub async fn predict(
        &self,
        fighter1: &str,
        fighter2: &str,
        auto_select_corner: bool,
    ) -> Result<FightPrediction, PredictError> {
        let first = fighter1.trim();
        let second = fighter2.trim();

        if first == second {
            return Err(PredictError::IdenticalFighters);
        }

        let first_record = self
            .store
            .lookup(first)
            .await?
            .ok_or_else(|| PredictError::UnknownFighter(first.to_string()))?;

        let second_record = self
            .store
            .lookup(second)
            .await?
            .ok_or_else(|| PredictError::UnknownFighter(second.to_string()))?;

        let pair = assign_corners(first_record, second_record, auto_select_corner);

        tracing::debug!(
            "Corners assigned: red={} ({}), blue={} ({})",
            pair.red.name,
            pair.red.rating,
            pair.blue.name,
            pair.blue.rating
        );

        let features = build_features(&pair);
        let score = self.oracle.score(&features).await?;

        tracing::debug!(
            "Oracle scored {} vs {}: label={}, probabilities={:?}",
            pair.red.name,
            pair.blue.name,
            score.label,
            score.probabilities
        );

        Ok(synthesize(&pair, score.label, score.probabilities))
    }
}
