//! Loading fitted artifacts from disk
//!
//! Artifacts are JSON documents. Classifier artifacts carry a `kind` tag
//! selecting the model family:
//!
//! ```json
//! { "kind": "linear", "classes": [0, 1], "coef": [[0.4, -1.2]], "intercept": [0.1] }
//! ```

use crate::classifier::Classifier;
use crate::config::ClassifierConfig;
use crate::dispatcher::InferenceDispatcher;
use crate::models::{
    GradientBoostingClassifier, GradientBoostingSpec, LinearClassifier, LinearSpec,
    NaiveBayesClassifier, NaiveBayesSpec,
};
use crate::registry::ModelRegistry;
use crate::transformer::{FeatureTransformer, TfidfVectorizer, VectorizerSpec};
use newscat_core::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Serialized classifier of any supported family
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierArtifact {
    #[serde(alias = "logistic_regression")]
    Linear(LinearSpec),
    #[serde(alias = "naive_bayes")]
    MultinomialNb(NaiveBayesSpec),
    GradientBoosting(GradientBoostingSpec),
}

impl ClassifierArtifact {
    /// Validate the artifact and build a classifier named `name`
    pub fn build(self, name: &str) -> Result<Arc<dyn Classifier>> {
        let classifier: Arc<dyn Classifier> = match self {
            Self::Linear(spec) => Arc::new(LinearClassifier::new(name, spec)?),
            Self::MultinomialNb(spec) => Arc::new(NaiveBayesClassifier::new(name, spec)?),
            Self::GradientBoosting(spec) => {
                Arc::new(GradientBoostingClassifier::new(name, spec)?)
            }
        };
        Ok(classifier)
    }
}

/// Read and deserialize a JSON artifact
pub fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| newscat_core::Error::artifact(path, e.to_string()))?;
    serde_json::from_str(&contents).map_err(|e| newscat_core::Error::artifact(path, e.to_string()))
}

/// Load the fitted vectorizer
pub fn load_vectorizer(path: impl AsRef<Path>) -> Result<TfidfVectorizer> {
    let path = path.as_ref();
    let spec: VectorizerSpec = read_artifact(path)?;
    TfidfVectorizer::from_spec(spec).map_err(|e| newscat_core::Error::artifact(path, e.to_string()))
}

/// Load a single classifier artifact and name it `name`
pub fn load_classifier(name: &str, path: impl AsRef<Path>) -> Result<Arc<dyn Classifier>> {
    let path = path.as_ref();
    let artifact: ClassifierArtifact = read_artifact(path)?;
    artifact
        .build(name)
        .map_err(|e| newscat_core::Error::artifact(path, e.to_string()))
}

/// Load every configured model.
///
/// A model that fails to load is logged and skipped; the registry must end up
/// with at least one model. Models fitted on a different number of features
/// than `feature_dimension` are kept but logged, and will report a classifier
/// failure on every request.
pub fn load_registry(config: &ClassifierConfig, feature_dimension: usize) -> Result<ModelRegistry> {
    let mut registry = ModelRegistry::new();

    info!("Loading {} models", config.models.len());

    for entry in &config.models {
        let path = config.resolve(&entry.path);
        debug!("Loading model '{}' from {}", entry.name, path.display());

        match load_classifier(&entry.name, &path) {
            Ok(classifier) => {
                if let Some(n) = classifier.n_features() {
                    if n != feature_dimension {
                        warn!(
                            "Model '{}' expects {} features but the vectorizer produces {}",
                            entry.name, n, feature_dimension
                        );
                    }
                }
                info!("✓ Loaded model: {} ({})", entry.name, classifier.kind());
                registry.register(entry.name.clone(), classifier)?;
            }
            Err(e) => {
                warn!("✗ Failed to load model {}: {}", entry.name, e);
            }
        }
    }

    if registry.is_empty() {
        return Err(newscat_core::Error::config("none of the configured models could be loaded"));
    }

    info!(
        "Model registry initialized with {}/{} models",
        registry.len(),
        config.models.len()
    );

    Ok(registry)
}

/// Build a dispatcher from configuration
pub fn load_dispatcher(config: &ClassifierConfig) -> Result<InferenceDispatcher> {
    let vectorizer_path = config.vectorizer_path();
    info!("Loading vectorizer from {}", vectorizer_path.display());

    let vectorizer = load_vectorizer(&vectorizer_path)?;
    let dimension = vectorizer.dimension();
    info!("Vectorizer ready ({} features, {:?})", dimension, vectorizer.kind());

    let registry = load_registry(config, dimension)?;

    Ok(InferenceDispatcher::new(
        Arc::new(vectorizer),
        registry,
        config.label_map(),
    ))
}
