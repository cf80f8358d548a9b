//! Concrete classifier families loadable from artifacts

pub mod gradient_boosting;
pub mod linear;
pub mod naive_bayes;

pub use gradient_boosting::{GradientBoostingClassifier, GradientBoostingSpec, RegressionTree, TreeNode};
pub use linear::{LinearClassifier, LinearSpec};
pub use naive_bayes::{NaiveBayesClassifier, NaiveBayesSpec};

use newscat_core::{ClassIndex, Result};

/// Map the winning score column back to the class label it stands for
pub(crate) fn class_at(model: &str, classes: &[ClassIndex], column: Option<usize>) -> Result<ClassIndex> {
    column
        .and_then(|c| classes.get(c).copied())
        .ok_or_else(|| {
            newscat_core::Error::classifier(format!("model '{}' produced no finite score", model))
        })
}

/// Score column picked by a single binary decision value; NaN picks nothing
pub(crate) fn binary_column(score: f32) -> Option<usize> {
    if score.is_nan() {
        None
    } else if score > 0.0 {
        Some(1)
    } else {
        Some(0)
    }
}

/// Ensure there are at least two classes and no duplicates
pub(crate) fn validate_classes(classes: &[ClassIndex]) -> Result<()> {
    if classes.len() < 2 {
        return Err(newscat_core::Error::config(format!(
            "a classifier needs at least 2 classes, got {}",
            classes.len()
        )));
    }
    let mut sorted = classes.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    if sorted.len() != classes.len() {
        return Err(newscat_core::Error::config("classes contain duplicates"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_classes() {
        assert!(validate_classes(&[0, 1, 2]).is_ok());
        assert!(validate_classes(&[]).is_err());
        assert!(validate_classes(&[3]).is_err());
        assert!(validate_classes(&[1, 1]).is_err());
    }

    #[test]
    fn test_binary_column() {
        assert_eq!(binary_column(0.3), Some(1));
        assert_eq!(binary_column(0.0), Some(0));
        assert_eq!(binary_column(-2.0), Some(0));
        assert_eq!(binary_column(f32::NAN), None);
    }
}
