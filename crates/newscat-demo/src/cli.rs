use crate::config::DEFAULT_CONFIG_PATH;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "newscat")]
#[command(author, version, about = "Classify news articles with pre-trained models")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Demo configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH, env = "NEWSCAT_CONFIG")]
    pub config: PathBuf,

    /// Classifier configuration file (overrides the demo config)
    #[arg(long, env = "NEWSCAT_CLASSIFIERS")]
    pub classifiers: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web UI
    Start {
        #[command(flatten)]
        config: ConfigArgs,

        /// Listen port
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Listen address
        #[arg(short, long, default_value = "127.0.0.1")]
        address: String,

        /// Directory holding the logo and EDA images (overrides the demo config)
        #[arg(long, env = "NEWSCAT_ASSETS")]
        assets: Option<PathBuf>,
    },

    /// Classify a single text and print the category
    Classify {
        #[command(flatten)]
        config: ConfigArgs,

        /// Model to use
        #[arg(short, long, default_value = "Logistic Regression")]
        model: String,

        /// Article text
        text: String,
    },

    /// List the available models
    Models {
        #[command(flatten)]
        config: ConfigArgs,
    },
}

impl Commands {
    /// Shared configuration options of the selected subcommand
    pub fn config_args(&self) -> &ConfigArgs {
        match self {
            Self::Start { config, .. } => config,
            Self::Classify { config, .. } => config,
            Self::Models { config } => config,
        }
    }
}
