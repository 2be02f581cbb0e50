use anyhow::Result;
use clap::Parser;
use serde::Deserialize;

use crate::evaluation::RsiGrid;

/// Configuration for the RSI threshold parameter search
#[derive(Debug, Clone, Deserialize, Parser)]
#[command(name = "opt_rsi")]
#[command(about = "Grid search for RSI period and reversion thresholds")]
pub struct Config {
    /// Path to candle data (CSV with timestamp and close columns)
    #[arg(long)]
    pub data: String,

    /// Symbol recorded in the emitted strategy config
    #[arg(long, default_value = "BTCUSDT")]
    pub symbol: String,

    /// Path the winning strategy config is written to
    #[arg(long, default_value = "strategies/rsi_reversion_optimal.toml")]
    pub output: String,

    /// Candidate RSI periods
    #[arg(long, value_delimiter = ',', default_value = "8,14,21,28")]
    pub periods: Vec<usize>,

    /// Candidate oversold thresholds
    #[arg(long, value_delimiter = ',', default_value = "20,25,30,35")]
    pub oversold: Vec<f64>,

    /// Candidate overbought thresholds
    #[arg(long, value_delimiter = ',', default_value = "65,70,75,80")]
    pub overbought: Vec<f64>,

    /// Candle history the live strategy keeps, recorded in the config
    #[arg(long, default_value_t = 400)]
    pub lookback: usize,
}

impl Config {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.periods.is_empty() {
            anyhow::bail!("at least one RSI period is required");
        }
        if self.periods.iter().any(|&p| p == 0) {
            anyhow::bail!("RSI periods must be greater than 0");
        }
        if self.oversold.is_empty() || self.overbought.is_empty() {
            anyhow::bail!("at least one oversold and one overbought threshold are required");
        }
        if self.lookback == 0 {
            anyhow::bail!("lookback must be greater than 0");
        }
        Ok(())
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Candidate threshold sets handed to the grid search
    pub fn grid(&self) -> RsiGrid {
        RsiGrid {
            periods: self.periods.clone(),
            oversold: self.oversold.clone(),
            overbought: self.overbought.clone(),
        }
    }
}
