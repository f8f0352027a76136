// Service exports
pub mod oracle;
pub mod store;

pub use oracle::{OracleError, OracleScore, ScoringClient};
pub use store::{FighterStore, StoreError};
