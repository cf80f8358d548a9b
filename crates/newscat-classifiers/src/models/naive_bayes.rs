//! Multinomial naive Bayes

use super::{class_at, validate_classes};
use crate::classifier::{argmax, check_dimension, Classifier};
use newscat_core::{ClassIndex, FeatureVector, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NaiveBayesSpec {
    pub classes: Vec<ClassIndex>,
    pub class_log_prior: Vec<f32>,
    /// One row of per-feature log probabilities for each class
    pub feature_log_prob: Vec<Vec<f32>>,
}

pub struct NaiveBayesClassifier {
    name: String,
    classes: Vec<ClassIndex>,
    class_log_prior: Vec<f32>,
    feature_log_prob: Vec<Vec<f32>>,
    n_features: usize,
}

impl NaiveBayesClassifier {
    pub fn new(name: impl Into<String>, spec: NaiveBayesSpec) -> Result<Self> {
        validate_classes(&spec.classes)?;

        let n_classes = spec.classes.len();
        if spec.class_log_prior.len() != n_classes || spec.feature_log_prob.len() != n_classes {
            return Err(newscat_core::Error::config(format!(
                "expected {} priors and probability rows, got {} and {}",
                n_classes,
                spec.class_log_prior.len(),
                spec.feature_log_prob.len()
            )));
        }

        let n_features = spec.feature_log_prob[0].len();
        if n_features == 0 || spec.feature_log_prob.iter().any(|row| row.len() != n_features) {
            return Err(newscat_core::Error::config(
                "feature_log_prob rows must be non-empty and of equal length",
            ));
        }

        Ok(Self {
            name: name.into(),
            classes: spec.classes,
            class_log_prior: spec.class_log_prior,
            feature_log_prob: spec.feature_log_prob,
            n_features,
        })
    }

    /// Unnormalized posterior log probability per class
    pub fn joint_log_likelihood(&self, features: &FeatureVector) -> Result<Vec<f32>> {
        check_dimension(&self.name, self.n_features, features)?;
        Ok(self
            .feature_log_prob
            .iter()
            .zip(&self.class_log_prior)
            .map(|(row, prior)| features.dot(row) + prior)
            .collect())
    }
}

impl Classifier for NaiveBayesClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<ClassIndex> {
        let jll = self.joint_log_likelihood(features)?;
        class_at(&self.name, &self.classes, argmax(&jll))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &str {
        "multinomial_nb"
    }

    fn n_features(&self) -> Option<usize> {
        Some(self.n_features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> NaiveBayesClassifier {
        let ln = |p: f32| p.ln();
        NaiveBayesClassifier::new(
            "Naive Bayes",
            NaiveBayesSpec {
                classes: vec![0, 2],
                class_log_prior: vec![ln(0.5), ln(0.5)],
                feature_log_prob: vec![
                    vec![ln(0.8), ln(0.1), ln(0.1)],
                    vec![ln(0.1), ln(0.1), ln(0.8)],
                ],
            },
        )
        .unwrap()
    }

    #[test]
    fn test_predicts_class_labels() {
        let clf = classifier();
        assert_eq!(clf.predict(&vec![3.0, 0.0, 1.0].into()).unwrap(), 0);
        assert_eq!(clf.predict(&vec![0.0, 1.0, 2.0].into()).unwrap(), 2);
    }

    #[test]
    fn test_prior_decides_empty_document() {
        let ln = |p: f32| p.ln();
        let clf = NaiveBayesClassifier::new(
            "skewed",
            NaiveBayesSpec {
                classes: vec![0, 1],
                class_log_prior: vec![ln(0.2), ln(0.8)],
                feature_log_prob: vec![vec![ln(0.5), ln(0.5)], vec![ln(0.5), ln(0.5)]],
            },
        )
        .unwrap();
        assert_eq!(clf.predict(&FeatureVector::zeros(2)).unwrap(), 1);
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = classifier().predict(&FeatureVector::zeros(2)).unwrap_err();
        assert!(err.to_string().contains("expects 3 features"));
    }

    #[test]
    fn test_rejects_missing_prior() {
        let result = NaiveBayesClassifier::new(
            "bad",
            NaiveBayesSpec {
                classes: vec![0, 1],
                class_log_prior: vec![0.0],
                feature_log_prob: vec![vec![0.0], vec![0.0]],
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_single_class() {
        let result = NaiveBayesClassifier::new(
            "One",
            NaiveBayesSpec {
                classes: vec![2],
                class_log_prior: vec![0.0],
                feature_log_prob: vec![vec![-0.7, -0.7]],
            },
        );
        assert!(result.is_err());
    }
}
