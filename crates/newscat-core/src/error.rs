//! Error types for NewsCat

use std::path::PathBuf;

/// Result type alias using NewsCat's load-time Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for loading, configuration and model execution
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// A model or vectorizer artifact could not be read or is malformed
    #[error("artifact error ({path}): {reason}")]
    Artifact { path: PathBuf, reason: String },

    /// Feature extraction errors
    #[error("transform error: {0}")]
    Transform(String),

    /// Classifier execution errors
    #[error("classifier error: {0}")]
    Classifier(String),

    /// Filesystem errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML configuration parse errors
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new artifact error for the given file
    pub fn artifact(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Artifact {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a new transform error
    pub fn transform(msg: impl Into<String>) -> Self {
        Self::Transform(msg.into())
    }

    /// Create a new classifier error
    pub fn classifier(msg: impl Into<String>) -> Self {
        Self::Classifier(msg.into())
    }
}

/// Why a single classification call failed.
///
/// This is a closed set: the dispatcher never reports anything else, and the
/// presentation layer keys its user-facing message off [`PredictionError::kind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PredictionError {
    /// The text was empty after trimming whitespace
    #[error("no text provided")]
    EmptyInput,

    /// The requested model name is not registered
    #[error("unknown model '{model}'")]
    UnknownModel { model: String },

    /// Feature extraction could not process the text
    #[error("feature extraction failed: {reason}")]
    TransformFailure { reason: String },

    /// The selected classifier failed, e.g. on a feature dimension mismatch
    #[error("model '{model}' failed: {reason}")]
    ClassifierFailure { model: String, reason: String },
}

impl PredictionError {
    /// Stable snake_case identifier for this failure kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::UnknownModel { .. } => "unknown_model",
            Self::TransformFailure { .. } => "transform_failure",
            Self::ClassifierFailure { .. } => "classifier_failure",
        }
    }
}
