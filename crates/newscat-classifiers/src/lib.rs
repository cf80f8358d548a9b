//! NewsCat Classifiers
//!
//! Pre-fitted text classification for news articles.
//!
//! A single [`FeatureTransformer`] turns raw text into a dense feature vector,
//! and any number of named [`Classifier`]s turn that vector into a class
//! index. The [`InferenceDispatcher`] ties them together with a [`LabelMap`]
//! and reports failures as a closed set of typed variants.
//!
//! Fitted artifacts are JSON files referenced from a YAML configuration; see
//! [`ClassifierConfig`] and the [`loader`] module.

pub mod classifier;
pub mod config;
pub mod dispatcher;
pub mod label_map;
pub mod loader;
pub mod models;
pub mod registry;
pub mod transformer;

pub use classifier::Classifier;
pub use config::{ClassifierConfig, ModelEntry};
pub use dispatcher::InferenceDispatcher;
pub use label_map::{LabelMap, UNKNOWN_LABEL};
pub use loader::{load_classifier, load_dispatcher, load_registry, load_vectorizer, ClassifierArtifact};
pub use models::{GradientBoostingClassifier, LinearClassifier, NaiveBayesClassifier};
pub use registry::{ModelRegistry, ModelRegistryBuilder};
pub use transformer::{FeatureTransformer, Norm, TfidfVectorizer, VectorizerKind, VectorizerSpec};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::Classifier;
    pub use crate::dispatcher::InferenceDispatcher;
    pub use crate::label_map::LabelMap;
    pub use crate::registry::ModelRegistry;
    pub use crate::transformer::FeatureTransformer;
    pub use newscat_core::{FeatureVector, Prediction, PredictionError, PredictionRequest};
}
