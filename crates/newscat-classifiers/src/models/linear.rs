//! Linear decision function classifier (logistic regression, linear SVM)

use super::{binary_column, class_at, validate_classes};
use crate::classifier::{argmax, check_dimension, Classifier};
use newscat_core::{ClassIndex, FeatureVector, Result};
use serde::{Deserialize, Serialize};

/// Serialized weights of a fitted linear model
///
/// Binary models carry a single coefficient row; the positive side of the
/// decision function selects `classes[1]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearSpec {
    pub classes: Vec<ClassIndex>,
    pub coef: Vec<Vec<f32>>,
    pub intercept: Vec<f32>,
}

pub struct LinearClassifier {
    name: String,
    classes: Vec<ClassIndex>,
    coef: Vec<Vec<f32>>,
    intercept: Vec<f32>,
    n_features: usize,
}

impl LinearClassifier {
    pub fn new(name: impl Into<String>, spec: LinearSpec) -> Result<Self> {
        validate_classes(&spec.classes)?;

        let binary = spec.classes.len() == 2 && spec.coef.len() == 1;
        if !binary && spec.coef.len() != spec.classes.len() {
            return Err(newscat_core::Error::config(format!(
                "coef has {} rows for {} classes",
                spec.coef.len(),
                spec.classes.len()
            )));
        }
        if spec.intercept.len() != spec.coef.len() {
            return Err(newscat_core::Error::config(format!(
                "intercept has {} entries for {} coef rows",
                spec.intercept.len(),
                spec.coef.len()
            )));
        }

        let n_features = spec.coef.first().map(Vec::len).unwrap_or(0);
        if n_features == 0 || spec.coef.iter().any(|row| row.len() != n_features) {
            return Err(newscat_core::Error::config(
                "coef rows must be non-empty and of equal length",
            ));
        }

        Ok(Self {
            name: name.into(),
            classes: spec.classes,
            coef: spec.coef,
            intercept: spec.intercept,
            n_features,
        })
    }

    /// Raw decision function, one score per coef row
    pub fn decision_function(&self, features: &FeatureVector) -> Result<Vec<f32>> {
        check_dimension(&self.name, self.n_features, features)?;
        Ok(self
            .coef
            .iter()
            .zip(&self.intercept)
            .map(|(row, b)| features.dot(row) + b)
            .collect())
    }
}

impl Classifier for LinearClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<ClassIndex> {
        let scores = self.decision_function(features)?;
        if scores.len() == 1 {
            return class_at(&self.name, &self.classes, binary_column(scores[0]));
        }
        class_at(&self.name, &self.classes, argmax(&scores))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &str {
        "linear"
    }

    fn n_features(&self) -> Option<usize> {
        Some(self.n_features)
    }
}
