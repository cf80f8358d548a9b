//! Mock transformers and classifiers for testing
//!
//! Provides configurable mock implementations of the transformer and
//! classifier traits for testing dispatch, failure reporting and call counts.

#![allow(dead_code)]

use newscat_classifiers::{Classifier, FeatureTransformer};
use newscat_core::{ClassIndex, FeatureVector, Result};
use std::sync::atomic::{AtomicU32, Ordering};

/// A transformer producing a fixed-size vector and counting its calls
pub struct MockTransformer {
    dimension: usize,
    fail_with: Option<String>,
    call_count: AtomicU32,
}

impl MockTransformer {
    /// Create a new mock transformer with the given output dimension
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            fail_with: None,
            call_count: AtomicU32::new(0),
        }
    }

    /// Make every call fail with `message`
    pub fn failing(mut self, message: &str) -> Self {
        self.fail_with = Some(message.to_string());
        self
    }

    /// Get the number of times transform was called
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

impl FeatureTransformer for MockTransformer {
    fn transform(&self, text: &str) -> Result<FeatureVector> {
        self.call_count.fetch_add(1, Ordering::Relaxed);

        if let Some(message) = &self.fail_with {
            return Err(newscat_core::Error::transform(message));
        }

        // Deterministic features derived from the text
        let mut features = FeatureVector::zeros(self.dimension);
        for (i, byte) in text.bytes().enumerate() {
            features.values_mut()[i % self.dimension] += byte as f32;
        }
        Ok(features)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

/// A configurable mock classifier for testing
pub struct MockClassifier {
    name: String,
    index: ClassIndex,
    n_features: Option<usize>,
    call_count: AtomicU32,
}

impl MockClassifier {
    /// Create a new mock classifier that always predicts `index`
    pub fn new(name: &str, index: ClassIndex) -> Self {
        Self {
            name: name.to_string(),
            index,
            n_features: None,
            call_count: AtomicU32::new(0),
        }
    }

    /// Require feature vectors of exactly `n` elements
    pub fn with_n_features(mut self, n: usize) -> Self {
        self.n_features = Some(n);
        self
    }

    /// Get the number of times predict was called
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

impl Classifier for MockClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<ClassIndex> {
        self.call_count.fetch_add(1, Ordering::Relaxed);

        if let Some(n) = self.n_features {
            if features.len() != n {
                return Err(newscat_core::Error::classifier(format!(
                    "expected {} features, got {}",
                    n,
                    features.len()
                )));
            }
        }
        Ok(self.index)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &str {
        "mock"
    }

    fn n_features(&self) -> Option<usize> {
        self.n_features
    }
}

/// A classifier that always fails - for testing error paths
pub struct FailingClassifier {
    name: String,
    error_message: String,
}

impl FailingClassifier {
    /// Create a new failing classifier
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            error_message: "Simulated classifier failure".to_string(),
        }
    }

    /// Set a custom error message
    pub fn with_error(mut self, message: &str) -> Self {
        self.error_message = message.to_string();
        self
    }
}

impl Classifier for FailingClassifier {
    fn predict(&self, _features: &FeatureVector) -> Result<ClassIndex> {
        Err(newscat_core::Error::classifier(&self.error_message))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &str {
        "failing"
    }
}
