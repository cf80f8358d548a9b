//! Demo configuration

use crate::cli::ConfigArgs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file read when `--config` is not given; may be absent
pub const DEFAULT_CONFIG_PATH: &str = "newscat.yaml";

/// Web page and model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Classifier configuration (vectorizer, models, labels)
    #[serde(default = "default_classifiers_path")]
    pub classifiers_path: PathBuf,

    /// Directory served under `/assets` (logo, EDA images)
    #[serde(default)]
    pub assets_dir: Option<PathBuf>,

    /// Upper bound on a single classification, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Static page content
    #[serde(default)]
    pub site: SiteContent,
}

impl DemoConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(args: &ConfigArgs) -> anyhow::Result<Self> {
        // Only the default file may be missing; a named one is a user mistake
        if args.config != Path::new(DEFAULT_CONFIG_PATH) && !args.config.exists() {
            anyhow::bail!("config file {} does not exist", args.config.display());
        }

        let mut config = Self::from_file_or_default(&args.config)?;

        if let Some(classifiers) = &args.classifiers {
            config.classifiers_path = classifiers.clone();
        }

        Ok(config)
    }

    /// Read `path` if it exists, otherwise fall back to defaults
    pub fn from_file_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            classifiers_path: default_classifiers_path(),
            assets_dir: None,
            request_timeout_ms: default_timeout_ms(),
            site: SiteContent::default(),
        }
    }
}

/// Text and images shown on the Home, About Us, Prediction and EDA pages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_tagline")]
    pub tagline: String,

    /// Markdown-lite text for the About Us page
    #[serde(default)]
    pub about: String,

    /// Logo file name inside the assets directory
    #[serde(default)]
    pub logo: Option<String>,

    /// Banner file name shown on the Prediction page
    #[serde(default)]
    pub prediction_image: Option<String>,

    #[serde(default = "default_eda_intro")]
    pub eda_intro: String,

    #[serde(default = "default_eda_charts")]
    pub eda_charts: Vec<ChartSpec>,

    /// Initial content of the article text box
    #[serde(default = "default_text")]
    pub default_text: String,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            title: default_title(),
            tagline: default_tagline(),
            about: String::new(),
            logo: None,
            prediction_image: None,
            eda_intro: default_eda_intro(),
            eda_charts: default_eda_charts(),
            default_text: default_text(),
        }
    }
}

/// A pre-rendered chart on the EDA page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// File name inside the assets directory
    pub file: String,
    pub caption: String,
}

impl ChartSpec {
    pub fn new(file: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            caption: caption.into(),
        }
    }
}

fn default_classifiers_path() -> PathBuf {
    PathBuf::from("artifacts/classifiers.yaml")
}

fn default_timeout_ms() -> u64 {
    5_000
}

fn default_title() -> String {
    "NewsCat".to_string()
}

fn default_tagline() -> String {
    "Your one-stop app for news article categorization".to_string()
}

fn default_eda_intro() -> String {
    "EDA is done to gain insights into the dataset and understand its characteristics.".to_string()
}

fn default_eda_charts() -> Vec<ChartSpec> {
    vec![
        ChartSpec::new("bar.png", "Bar Chart"),
        ChartSpec::new("cm.png", "Confusion Matrix"),
        ChartSpec::new("dh.png", "Data Heatmap"),
        ChartSpec::new("dl.png", "Data Lineplot"),
    ]
}

fn default_text() -> String {
    "Type here...".to_string()
}
