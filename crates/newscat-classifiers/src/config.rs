//! Configuration for the vectorizer, models and labels

use crate::label_map::{LabelMap, UNKNOWN_LABEL};
use newscat_core::{ClassIndex, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

/// Configuration for all classifiers
///
/// Relative artifact paths are resolved against the directory holding the
/// configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Fitted vectorizer artifact shared by every model
    pub vectorizer: PathBuf,

    /// Models in the order they should be offered to users
    pub models: Vec<ModelEntry>,

    /// Class index to category name
    #[serde(default = "default_labels")]
    pub labels: BTreeMap<ClassIndex, String>,

    /// Category reported for indices missing from `labels`
    #[serde(default = "default_unknown_label")]
    pub unknown_label: String,

    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

/// A single model declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Registry name, shown in the model picker
    pub name: String,

    /// Fitted classifier artifact
    pub path: PathBuf,

    /// Model description
    #[serde(default)]
    pub description: Option<String>,
}

fn default_labels() -> BTreeMap<ClassIndex, String> {
    LabelMap::news_categories().as_map().clone()
}

fn default_unknown_label() -> String {
    UNKNOWN_LABEL.to_string()
}

impl ClassifierConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            newscat_core::Error::config(format!(
                "failed to read classifier config {}: {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_yaml_str(&contents)?;
        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(config.with_base_dir(base_dir))
    }

    /// Parse configuration from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve relative artifact paths against `dir`
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Check model declarations are usable
    pub fn validate(&self) -> Result<()> {
        if self.models.is_empty() {
            return Err(newscat_core::Error::config("no models configured"));
        }

        let mut seen = HashSet::new();
        for model in &self.models {
            if model.name.trim().is_empty() {
                return Err(newscat_core::Error::config("model name must not be empty"));
            }
            if !seen.insert(model.name.as_str()) {
                return Err(newscat_core::Error::config(format!(
                    "model '{}' is declared more than once",
                    model.name
                )));
            }
        }
        Ok(())
    }

    /// Absolute or base-relative location of an artifact
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Resolved vectorizer path
    pub fn vectorizer_path(&self) -> PathBuf {
        self.resolve(&self.vectorizer)
    }

    /// Look up a model declaration by name
    pub fn model(&self, name: &str) -> Option<&ModelEntry> {
        self.models.iter().find(|m| m.name == name)
    }

    /// Label map built from `labels` and `unknown_label`
    pub fn label_map(&self) -> LabelMap {
        LabelMap::new(self.labels.clone()).with_unknown(self.unknown_label.clone())
    }
}
