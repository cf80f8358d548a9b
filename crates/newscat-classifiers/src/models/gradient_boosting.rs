//! Gradient-boosted regression tree ensemble
//!
//! Each boosting stage holds one regression tree per score column: one column
//! for binary problems, one per class otherwise. The raw score of a column is
//! `init + learning_rate * sum(tree outputs)`, and the predicted class is the
//! column with the highest score (binary: positive score selects `classes[1]`).

use super::{binary_column, class_at, validate_classes};
use crate::classifier::{argmax, check_dimension, Classifier};
use newscat_core::{ClassIndex, FeatureVector, Result};
use serde::{Deserialize, Serialize};

/// One node of a flattened regression tree
///
/// A node without a `feature` is a leaf and yields `value`. Otherwise samples
/// with `x[feature] <= threshold` continue at `left`, the rest at `right`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeNode {
    #[serde(default)]
    pub feature: Option<usize>,
    #[serde(default)]
    pub threshold: f32,
    #[serde(default)]
    pub left: usize,
    #[serde(default)]
    pub right: usize,
    #[serde(default)]
    pub value: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionTree {
    pub nodes: Vec<TreeNode>,
}

impl RegressionTree {
    /// Check the tree is well formed for `n_features` inputs.
    ///
    /// Children must point strictly forward, which rules out cycles.
    fn validate(&self, n_features: usize) -> Result<()> {
        if self.nodes.is_empty() {
            return Err(newscat_core::Error::config("tree has no nodes"));
        }
        for (idx, node) in self.nodes.iter().enumerate() {
            let Some(feature) = node.feature else {
                continue;
            };
            if feature >= n_features {
                return Err(newscat_core::Error::config(format!(
                    "node {} splits on feature {} but the model has {} features",
                    idx, feature, n_features
                )));
            }
            for child in [node.left, node.right] {
                if child <= idx || child >= self.nodes.len() {
                    return Err(newscat_core::Error::config(format!(
                        "node {} has invalid child index {}",
                        idx, child
                    )));
                }
            }
        }
        Ok(())
    }

    fn evaluate(&self, x: &[f32]) -> f32 {
        let mut idx = 0;
        loop {
            let node = &self.nodes[idx];
            match node.feature {
                None => return node.value,
                Some(feature) => {
                    idx = if x[feature] <= node.threshold {
                        node.left
                    } else {
                        node.right
                    };
                }
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientBoostingSpec {
    pub classes: Vec<ClassIndex>,
    pub n_features: usize,
    pub learning_rate: f32,
    /// Initial raw score per column
    pub init: Vec<f32>,
    /// `estimators[stage][column]`
    pub estimators: Vec<Vec<RegressionTree>>,
}

pub struct GradientBoostingClassifier {
    name: String,
    classes: Vec<ClassIndex>,
    n_features: usize,
    learning_rate: f32,
    init: Vec<f32>,
    estimators: Vec<Vec<RegressionTree>>,
}

impl GradientBoostingClassifier {
    pub fn new(name: impl Into<String>, spec: GradientBoostingSpec) -> Result<Self> {
        validate_classes(&spec.classes)?;
        if spec.n_features == 0 {
            return Err(newscat_core::Error::config("n_features must be positive"));
        }

        let columns = if spec.classes.len() == 2 { 1 } else { spec.classes.len() };
        if spec.init.len() != columns {
            return Err(newscat_core::Error::config(format!(
                "init has {} scores, expected {}",
                spec.init.len(),
                columns
            )));
        }

        for (stage, trees) in spec.estimators.iter().enumerate() {
            if trees.len() != columns {
                return Err(newscat_core::Error::config(format!(
                    "stage {} has {} trees, expected {}",
                    stage,
                    trees.len(),
                    columns
                )));
            }
            for tree in trees {
                tree.validate(spec.n_features).map_err(|e| {
                    newscat_core::Error::config(format!("stage {}: {}", stage, e))
                })?;
            }
        }

        Ok(Self {
            name: name.into(),
            classes: spec.classes,
            n_features: spec.n_features,
            learning_rate: spec.learning_rate,
            init: spec.init,
            estimators: spec.estimators,
        })
    }

    /// Number of boosting stages
    pub fn n_stages(&self) -> usize {
        self.estimators.len()
    }

    /// Raw additive score per column
    pub fn decision_function(&self, features: &FeatureVector) -> Result<Vec<f32>> {
        check_dimension(&self.name, self.n_features, features)?;

        let x = features.values();
        let mut scores = self.init.clone();
        for stage in &self.estimators {
            for (score, tree) in scores.iter_mut().zip(stage) {
                *score += self.learning_rate * tree.evaluate(x);
            }
        }
        Ok(scores)
    }
}

impl Classifier for GradientBoostingClassifier {
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
        "gradient_boosting"
    }

    fn n_features(&self) -> Option<usize> {
        Some(self.n_features)
    }
}
