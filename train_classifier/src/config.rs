use anyhow::Result;
use clap::Parser;
use serde::Deserialize;
use stratlab::models::logistic::FitOptions;

/// Configuration for the up/down classifier training pipeline
#[derive(Debug, Clone, Deserialize, Parser)]
#[command(name = "train_classifier")]
#[command(about = "Train a logistic up/down classifier on candle returns")]
pub struct Config {
    /// Path to candle data (CSV with timestamp and close columns)
    #[arg(long)]
    pub data: String,

    /// Symbol recorded in the emitted strategy config
    #[arg(long, default_value = "BTCUSDT")]
    pub symbol: String,

    /// Number of trailing returns in each feature window
    #[arg(long, default_value_t = 20)]
    pub lookback: usize,

    /// Path the model weights are written to
    #[arg(long)]
    pub output: String,

    /// Gradient-descent step size
    #[arg(long, default_value_t = 0.1)]
    pub learning_rate: f64,

    /// Maximum gradient-descent iterations
    #[arg(long, default_value_t = 1000)]
    pub max_iterations: usize,

    /// Convergence tolerance on the largest parameter update
    #[arg(long, default_value_t = 1e-6)]
    pub tolerance: f64,
}

impl Config {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.lookback == 0 {
            anyhow::bail!("lookback must be greater than 0");
        }
        if self.learning_rate <= 0.0 {
            anyhow::bail!("learning_rate must be positive, got {}", self.learning_rate);
        }
        if self.max_iterations == 0 {
            anyhow::bail!("max_iterations must be greater than 0");
        }
        if self.tolerance <= 0.0 {
            anyhow::bail!("tolerance must be positive, got {}", self.tolerance);
        }
        Ok(())
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Gradient-descent settings for the trainer
    pub fn fit_options(&self) -> FitOptions {
        FitOptions {
            learning_rate: self.learning_rate,
            max_iterations: self.max_iterations,
            tolerance: self.tolerance,
        }
    }
}
