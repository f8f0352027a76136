// Core pipeline exports
pub mod corners;
pub mod features;
pub mod outcome;
pub mod predictor;
pub mod search;

pub use corners::assign_corners;
pub use features::{build_features, FEATURE_COUNT, FEATURE_NAMES};
pub use outcome::{round_probability, synthesize};
pub use predictor::{PredictError, Predictor};
pub use search::NameIndex;
