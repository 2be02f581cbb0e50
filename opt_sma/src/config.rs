use anyhow::Result;
use clap::Parser;
use serde::Deserialize;

use crate::evaluation::SmaGrid;

/// Configuration for the SMA crossover parameter search
#[derive(Debug, Clone, Deserialize, Parser)]
#[command(name = "opt_sma")]
#[command(about = "Grid search for moving-average crossover windows")]
pub struct Config {
    /// Path to candle data (CSV with timestamp and close columns)
    #[arg(long)]
    pub data: String,

    /// Symbol recorded in the emitted strategy config
    #[arg(long, default_value = "BTCUSDT")]
    pub symbol: String,

    /// Path the winning strategy config is written to
    #[arg(long, default_value = "strategies/sma_cross_optimal.toml")]
    pub output: String,

    /// Candidate fast windows
    #[arg(long, value_delimiter = ',', default_value = "5,10,15,20")]
    pub fast: Vec<usize>,

    /// Candidate slow windows
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "10,15,20,25,30,35,40,45,50,55"
    )]
    pub slow: Vec<usize>,
}

impl Config {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.fast.is_empty() {
            anyhow::bail!("at least one fast window is required");
        }
        if self.slow.is_empty() {
            anyhow::bail!("at least one slow window is required");
        }
        if self.fast.iter().chain(&self.slow).any(|&w| w == 0) {
            anyhow::bail!("window lengths must be greater than 0");
        }
        Ok(())
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Candidate window sets handed to the grid search
    pub fn grid(&self) -> SmaGrid {
        SmaGrid {
            fast: self.fast.clone(),
            slow: self.slow.clone(),
        }
    }
}
