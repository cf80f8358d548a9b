//! Class index to category name lookup

use newscat_core::ClassIndex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category returned when a classifier emits an index with no label
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Fixed mapping from class index to human-readable category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelMap {
    labels: BTreeMap<ClassIndex, String>,
    #[serde(default = "default_unknown")]
    unknown: String,
}

fn default_unknown() -> String {
    UNKNOWN_LABEL.to_string()
}

impl LabelMap {
    /// Create a label map with the default unknown sentinel
    pub fn new(labels: BTreeMap<ClassIndex, String>) -> Self {
        Self {
            labels,
            unknown: default_unknown(),
        }
    }

    /// The five news categories the bundled models are trained on
    pub fn news_categories() -> Self {
        [
            (0, "Business"),
            (1, "Technology"),
            (2, "Sports"),
            (3, "Education"),
            (4, "Entertainment"),
        ]
        .into_iter()
        .collect()
    }

    /// Replace the sentinel used for unmapped indices
    pub fn with_unknown(mut self, unknown: impl Into<String>) -> Self {
        self.unknown = unknown.into();
        self
    }

    /// Resolve an index to its category, falling back to the sentinel
    pub fn resolve(&self, index: ClassIndex) -> &str {
        self.labels
            .get(&index)
            .map(String::as_str)
            .unwrap_or(&self.unknown)
    }

    /// Category for an index, if mapped
    pub fn get(&self, index: ClassIndex) -> Option<&str> {
        self.labels.get(&index).map(String::as_str)
    }

    /// The unknown sentinel
    pub fn unknown(&self) -> &str {
        &self.unknown
    }

    /// Whether `category` is a mapped category or the sentinel
    pub fn is_known_output(&self, category: &str) -> bool {
        category == self.unknown || self.labels.values().any(|l| l == category)
    }

    /// Mapped categories in index order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.labels.values().map(String::as_str)
    }

    /// Underlying index to category map
    pub fn as_map(&self) -> &BTreeMap<ClassIndex, String> {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for LabelMap {
    fn default() -> Self {
        Self::news_categories()
    }
}

impl<S: Into<String>> FromIterator<(ClassIndex, S)> for LabelMap {
    fn from_iter<I: IntoIterator<Item = (ClassIndex, S)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(i, s)| (i, s.into())).collect())
    }
}
