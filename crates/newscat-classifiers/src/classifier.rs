//! Classifier trait and shared scoring helpers

use newscat_core::{ClassIndex, FeatureVector, Result};

/// Trait for all pre-fitted classifiers
///
/// Implementations are immutable after construction, so a single instance can
/// be shared across threads behind an `Arc`.
pub trait Classifier: Send + Sync {
    /// Predict the class index for a feature vector
    fn predict(&self, features: &FeatureVector) -> Result<ClassIndex>;

    /// Get the classifier name
    fn name(&self) -> &str;

    /// Short identifier for the model family (e.g. `linear`)
    fn kind(&self) -> &str;

    /// Number of features the classifier was fitted on, if known
    fn n_features(&self) -> Option<usize> {
        None
    }
}

/// Reject a feature vector whose length differs from what the model expects
pub(crate) fn check_dimension(
    model: &str,
    expected: usize,
    features: &FeatureVector,
) -> Result<()> {
    if features.len() != expected {
        return Err(newscat_core::Error::classifier(format!(
            "model '{}' expects {} features, got {}",
            model,
            expected,
            features.len()
        )));
    }
    Ok(())
}

/// Index of the highest score; ties go to the lowest index, NaN never wins
pub(crate) fn argmax(scores: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (idx, &score) in scores.iter().enumerate() {
        if score.is_nan() {
            continue;
        }
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((idx, score)),
        }
    }
    best.map(|(idx, _)| idx)
}
