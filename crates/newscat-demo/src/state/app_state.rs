use crate::config::DemoConfig;
use crate::state::PredictionStats;
use newscat_classifiers::{ClassifierConfig, InferenceDispatcher};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Demo configuration
    pub config: Arc<DemoConfig>,

    /// Loaded models; read-only for the life of the server
    pub dispatcher: Arc<InferenceDispatcher>,

    /// Model descriptions from the classifier configuration
    pub descriptions: Arc<HashMap<String, String>>,

    /// Outcome counters for the stats endpoint
    pub stats: Arc<PredictionStats>,
}

impl AppState {
    pub fn new(
        config: DemoConfig,
        dispatcher: InferenceDispatcher,
        descriptions: HashMap<String, String>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher: Arc::new(dispatcher),
            descriptions: Arc::new(descriptions),
            stats: Arc::new(PredictionStats::new()),
        }
    }

    /// Load the classifier configuration named by `config` and every model in it
    pub fn load(config: DemoConfig) -> newscat_core::Result<Self> {
        info!(
            "Loading classifiers from {}",
            config.classifiers_path.display()
        );
        let classifier_config = ClassifierConfig::from_file(&config.classifiers_path)?;
        let dispatcher = InferenceDispatcher::from_config(&classifier_config)?;

        let descriptions = classifier_config
            .models
            .into_iter()
            .filter_map(|m| m.description.map(|d| (m.name, d)))
            .collect();

        Ok(Self::new(config, dispatcher, descriptions))
    }

    /// Timeout applied to each classification
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.config.request_timeout_ms)
    }
}
