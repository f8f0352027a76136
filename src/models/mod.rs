// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{FighterRecord, OrderedPair, FeatureVector, FightPrediction};
pub use requests::{PredictRequest, SearchQuery};
pub use responses::{HealthResponse, ErrorResponse, FighterDetailResponse};
