//! Core types for NewsCat

use crate::error::PredictionError;
use serde::{Deserialize, Serialize};

/// Numeric class produced by a classifier, resolved to a name by a label map
pub type ClassIndex = usize;

/// Outcome of a single classification call
pub type PredictionResult = std::result::Result<Prediction, PredictionError>;

/// Dense, fixed-length numeric representation of a piece of text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector(Vec<f32>);

impl FeatureVector {
    /// Create a vector of `dimension` zeros
    pub fn zeros(dimension: usize) -> Self {
        Self(vec![0.0; dimension])
    }

    /// Number of features
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the vector has no features at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Feature values
    pub fn values(&self) -> &[f32] {
        &self.0
    }

    /// Mutable feature values
    pub fn values_mut(&mut self) -> &mut [f32] {
        &mut self.0
    }

    /// Dot product with a weight row of the same length
    pub fn dot(&self, weights: &[f32]) -> f32 {
        self.0.iter().zip(weights).map(|(x, w)| x * w).sum()
    }

    /// Count of non-zero features
    pub fn nnz(&self) -> usize {
        self.0.iter().filter(|v| **v != 0.0).count()
    }
}

impl From<Vec<f32>> for FeatureVector {
    fn from(values: Vec<f32>) -> Self {
        Self(values)
    }
}

/// A user's request to classify some text with a named model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Raw article text
    pub text: String,

    /// Registered model name
    #[serde(alias = "model")]
    pub model_name: String,
}

impl PredictionRequest {
    /// Create a new prediction request
    pub fn new(text: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model_name: model_name.into(),
        }
    }

    /// Whether the text is empty once surrounding whitespace is removed
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A successful classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// Human-readable category, or the label map's unknown sentinel
    pub category: String,

    /// Raw class index returned by the classifier
    pub class_index: ClassIndex,

    /// Model that produced the prediction
    pub model: String,
}

impl Prediction {
    /// Create a new prediction
    pub fn new(
        category: impl Into<String>,
        class_index: ClassIndex,
        model: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            class_index,
            model: model.into(),
        }
    }
}
