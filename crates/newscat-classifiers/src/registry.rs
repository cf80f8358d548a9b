//! Named classifier registry

use crate::classifier::Classifier;
use newscat_core::Result;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry mapping model names to loaded classifiers
///
/// Names are unique. Registration order is remembered only so that model
/// pickers can list entries the way the configuration declares them.
#[derive(Default, Clone)]
pub struct ModelRegistry {
    classifiers: HashMap<String, Arc<dyn Classifier>>,
    order: Vec<String>,
}

impl ModelRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a classifier under `name`
    pub fn register(
        &mut self,
        name: impl Into<String>,
        classifier: Arc<dyn Classifier>,
    ) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(newscat_core::Error::config("model name must not be empty"));
        }
        if self.classifiers.contains_key(&name) {
            return Err(newscat_core::Error::config(format!(
                "model '{}' is already registered",
                name
            )));
        }
        self.order.push(name.clone());
        self.classifiers.insert(name, classifier);
        Ok(())
    }

    /// Get a classifier by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Classifier>> {
        self.classifiers.get(name).cloned()
    }

    /// Check if a model is registered
    pub fn contains(&self, name: &str) -> bool {
        self.classifiers.contains_key(name)
    }

    /// Registered names in registration order
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Iterate `(name, classifier)` in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn Classifier>)> {
        self.order
            .iter()
            .filter_map(|name| self.classifiers.get(name).map(|c| (name.as_str(), c)))
    }

    pub fn len(&self) -> usize {
        self.classifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classifiers.is_empty()
    }
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("models", &self.order)
            .finish()
    }
}

/// Fluent builder for a [`ModelRegistry`]
#[derive(Default)]
pub struct ModelRegistryBuilder {
    entries: Vec<(String, Arc<dyn Classifier>)>,
}

impl ModelRegistryBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a classifier under `name`
    pub fn with_classifier(
        mut self,
        name: impl Into<String>,
        classifier: Arc<dyn Classifier>,
    ) -> Self {
        self.entries.push((name.into(), classifier));
        self
    }

    /// Build the registry, rejecting duplicate names
    pub fn build(self) -> Result<ModelRegistry> {
        let mut registry = ModelRegistry::new();
        for (name, classifier) in self.entries {
            registry.register(name, classifier)?;
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newscat_core::{ClassIndex, FeatureVector};

    struct Fixed(ClassIndex);

    impl Classifier for Fixed {
        fn predict(&self, _features: &FeatureVector) -> Result<ClassIndex> {
            Ok(self.0)
        }

        fn name(&self) -> &str {
            "fixed"
        }

        fn kind(&self) -> &str {
            "fixed"
        }
    }

    #[test]
    fn test_registry_keeps_registration_order() {
        let registry = ModelRegistryBuilder::new()
            .with_classifier("Naive Bayes", Arc::new(Fixed(1)))
            .with_classifier("Logistic Regression", Arc::new(Fixed(0)))
            .build()
            .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), ["Naive Bayes", "Logistic Regression"]);
        assert!(registry.contains("Naive Bayes"));
        assert!(!registry.contains("naive bayes"));

        let names: Vec<_> = registry.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["Naive Bayes", "Logistic Regression"]);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result = ModelRegistryBuilder::new()
            .with_classifier("LR", Arc::new(Fixed(0)))
            .with_classifier("LR", Arc::new(Fixed(1)))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut registry = ModelRegistry::new();
        assert!(registry.register("  ", Arc::new(Fixed(0))).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_get_returns_shared_instance() {
        let mut registry = ModelRegistry::new();
        registry.register("LR", Arc::new(Fixed(3))).unwrap();

        let clf = registry.get("LR").unwrap();
        assert_eq!(clf.predict(&FeatureVector::zeros(1)).unwrap(), 3);
        assert!(registry.get("XGBoost").is_none());
    }
}
