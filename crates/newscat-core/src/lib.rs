//! NewsCat Core
//!
//! Types and errors shared across NewsCat components.
//!
//! This crate provides:
//! - Request and result types for a single classification call
//! - The dense feature vector passed between transformer and classifier
//! - The typed failure taxonomy returned by the dispatcher
//! - Load-time error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, PredictionError, Result};
pub use types::{ClassIndex, FeatureVector, Prediction, PredictionRequest, PredictionResult};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, PredictionError, Result};
    pub use crate::types::{
        ClassIndex, FeatureVector, Prediction, PredictionRequest, PredictionResult,
    };
}
