use std::path::Path;

use serde::Serialize;
use stratlab::io::write::{StrategyConfig, WriteError, write_toml};

use crate::evaluation::RsiPoint;

/// Parameter block consumed by the downstream RsiReversion strategy.
#[derive(Debug, Clone, Serialize)]
pub struct RsiReversionParams {
    pub symbol: String,
    pub period: usize,
    pub oversold: f64,
    pub overbought: f64,
    pub lookback: usize,
}

/// Render the winning point as a strategy config and persist it.
pub fn write_strategy<P: AsRef<Path>>(
    path: P,
    symbol: &str,
    point: &RsiPoint,
    lookback: usize,
) -> Result<(), WriteError> {
    let config = StrategyConfig {
        strategy_name: "RsiReversion".to_string(),
        params: RsiReversionParams {
            symbol: symbol.to_string(),
            period: point.period,
            oversold: point.oversold,
            overbought: point.overbought,
            lookback,
        },
    };
    write_toml(path, &config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_strategy() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("strategies/rsi_reversion_optimal.toml");

        let point = RsiPoint {
            period: 21,
            oversold: 25.0,
            overbought: 75.0,
        };
        write_strategy(&path, "BTCUSDT", &point, 400).unwrap();

        let rendered = std::fs::read_to_string(&path).unwrap();
        assert!(rendered.contains("strategy_name = \"RsiReversion\""));
        assert!(rendered.contains("period = 21"));
        assert!(rendered.contains("oversold = 25.0"));
        assert!(rendered.contains("overbought = 75.0"));
        assert!(rendered.contains("lookback = 400"));
    }
}
