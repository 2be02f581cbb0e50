use std::path::{Path, PathBuf};

use serde::Serialize;
use stratlab::io::write::{StrategyConfig, WriteError, write_toml};
use stratlab::models::logistic::LogisticModel;

/// Signal thresholds on the model's decision value baked into the emitted
/// strategy config.
const THRESHOLD_LONG: f64 = 0.1;
const THRESHOLD_SHORT: f64 = -0.1;

/// Parameter block consumed by the downstream MlClassifier strategy.
#[derive(Debug, Clone, Serialize)]
pub struct MlClassifierParams {
    pub symbol: String,
    pub model_path: String,
    pub lookback: usize,
    pub threshold_long: f64,
    pub threshold_short: f64,
}

/// Persist the trained weights as a flat bias + weight-list mapping.
pub fn write_model<P: AsRef<Path>>(path: P, model: &LogisticModel) -> Result<(), WriteError> {
    write_toml(path, model)
}

/// Companion strategy config path: `model.toml` → `model.strategy.toml`.
pub fn strategy_config_path(model_path: &Path) -> PathBuf {
    model_path.with_extension("strategy.toml")
}

/// Render the strategy config pointing at the persisted model.
pub fn write_strategy<P: AsRef<Path>>(
    path: P,
    symbol: &str,
    model_path: &str,
    lookback: usize,
) -> Result<(), WriteError> {
    let config = StrategyConfig {
        strategy_name: "MlClassifier".to_string(),
        params: MlClassifierParams {
            symbol: symbol.to_string(),
            model_path: model_path.to_string(),
            lookback,
            threshold_long: THRESHOLD_LONG,
            threshold_short: THRESHOLD_SHORT,
        },
    };
    write_toml(path, &config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_model_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("models/updown.toml");

        let model = LogisticModel {
            bias: -0.25,
            weights: vec![0.5, -0.125, 2.0],
        };
        write_model(&path, &model).unwrap();

        let parsed: LogisticModel =
            toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.bias, model.bias);
        assert_eq!(parsed.weights, model.weights);
    }

    #[test]
    fn test_strategy_config_path() {
        let path = strategy_config_path(Path::new("models/updown.toml"));
        assert_eq!(path, PathBuf::from("models/updown.strategy.toml"));
    }

    #[test]
    fn test_write_strategy() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("updown.strategy.toml");

        write_strategy(&path, "BTCUSDT", "models/updown.toml", 20).unwrap();

        let rendered = std::fs::read_to_string(&path).unwrap();
        assert!(rendered.contains("strategy_name = \"MlClassifier\""));
        assert!(rendered.contains("model_path = \"models/updown.toml\""));
        assert!(rendered.contains("lookback = 20"));
        assert!(rendered.contains("threshold_long = 0.1"));
        assert!(rendered.contains("threshold_short = -0.1"));
    }
}
