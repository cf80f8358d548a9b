//! Model-selection inference dispatcher

use crate::config::ClassifierConfig;
use crate::label_map::LabelMap;
use crate::registry::ModelRegistry;
use crate::transformer::FeatureTransformer;
use newscat_core::{Prediction, PredictionError, PredictionRequest, PredictionResult, Result};
use std::path::Path;
use std::sync::Arc;

/// Resolves a model name to a classifier and drives
/// transform, predict and label lookup for one request.
///
/// Everything it owns is read-only after construction, so a dispatcher can be
/// shared behind an `Arc` and called from any number of threads.
pub struct InferenceDispatcher {
    transformer: Arc<dyn FeatureTransformer>,
    registry: ModelRegistry,
    labels: LabelMap,
}

impl InferenceDispatcher {
    pub fn new(
        transformer: Arc<dyn FeatureTransformer>,
        registry: ModelRegistry,
        labels: LabelMap,
    ) -> Self {
        Self {
            transformer,
            registry,
            labels,
        }
    }

    /// Load the vectorizer and every configured model
    pub fn from_config(config: &ClassifierConfig) -> Result<Self> {
        crate::loader::load_dispatcher(config)
    }

    /// Load a YAML configuration file and build the dispatcher from it
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let config = ClassifierConfig::from_file(path)?;
        Self::from_config(&config)
    }

    /// Classify `request.text` with the model named in the request.
    ///
    /// Blank text is rejected before the model lookup, and neither check
    /// touches the transformer or any classifier.
    pub fn classify(&self, request: &PredictionRequest) -> PredictionResult {
        if request.is_blank() {
            return Err(PredictionError::EmptyInput);
        }

        let classifier =
            self.registry
                .get(&request.model_name)
                .ok_or_else(|| PredictionError::UnknownModel {
                    model: request.model_name.clone(),
                })?;

        let features = self.transformer.transform(&request.text).map_err(|e| {
            PredictionError::TransformFailure {
                reason: e.to_string(),
            }
        })?;

        let index =
            classifier
                .predict(&features)
                .map_err(|e| PredictionError::ClassifierFailure {
                    model: request.model_name.clone(),
                    reason: e.to_string(),
                })?;

        Ok(Prediction::new(
            self.labels.resolve(index),
            index,
            request.model_name.as_str(),
        ))
    }

    /// Shorthand for [`classify`](Self::classify) without building a request first
    pub fn classify_text(&self, text: &str, model_name: &str) -> PredictionResult {
        self.classify(&PredictionRequest::new(text, model_name))
    }

    /// Model names in configuration order
    pub fn model_names(&self) -> &[String] {
        self.registry.names()
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    pub fn labels(&self) -> &LabelMap {
        &self.labels
    }

    /// Length of the feature vectors the shared transformer produces
    pub fn feature_dimension(&self) -> usize {
        self.transformer.dimension()
    }
}

impl std::fmt::Debug for InferenceDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceDispatcher")
            .field("registry", &self.registry)
            .field("labels", &self.labels)
            .field("feature_dimension", &self.transformer.dimension())
            .finish()
    }
}
