use std::path::Path;

use serde::Serialize;
use stratlab::io::write::{StrategyConfig, WriteError, write_toml};

use crate::evaluation::SmaPoint;

/// Parameter block consumed by the downstream SmaCross strategy.
#[derive(Debug, Clone, Serialize)]
pub struct SmaCrossParams {
    pub symbol: String,
    pub fast_period: usize,
    pub slow_period: usize,
    pub min_samples: usize,
}

/// Render the winning point as a strategy config and persist it. The
/// strategy needs a little history beyond the slow window before it emits
/// signals, hence the `min_samples` margin.
pub fn write_strategy<P: AsRef<Path>>(
    path: P,
    symbol: &str,
    point: &SmaPoint,
) -> Result<(), WriteError> {
    let config = StrategyConfig {
        strategy_name: "SmaCross".to_string(),
        params: SmaCrossParams {
            symbol: symbol.to_string(),
            fast_period: point.fast,
            slow_period: point.slow,
            min_samples: point.slow + 5,
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
        let path = dir.path().join("strategies/sma_cross_optimal.toml");

        let point = SmaPoint { fast: 10, slow: 40 };
        write_strategy(&path, "BTCUSDT", &point).unwrap();

        let rendered = std::fs::read_to_string(&path).unwrap();
        assert!(rendered.contains("strategy_name = \"SmaCross\""));
        assert!(rendered.contains("fast_period = 10"));
        assert!(rendered.contains("slow_period = 40"));
        assert!(rendered.contains("min_samples = 45"));
    }
}
