use std::fs;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

/// Failure variants surfaced while persisting artifacts.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Strategy config artifact consumed by the downstream execution system: a
/// strategy name plus one nested parameter table.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyConfig<P> {
    pub strategy_name: String,
    pub params: P,
}

/// Serialize `value` as TOML to `path`, creating parent directories if they
/// don't exist.
pub fn write_toml<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<(), WriteError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let rendered = toml::to_string(value)?;
    fs::write(path, rendered)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::tempdir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Params {
        symbol: String,
        period: usize,
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("strategies/nested/config.toml");

        let config = StrategyConfig {
            strategy_name: "RsiReversion".to_string(),
            params: Params {
                symbol: "BTCUSDT".to_string(),
                period: 14,
            },
        };
        write_toml(&path, &config).unwrap();

        let rendered = fs::read_to_string(&path).unwrap();
        assert!(rendered.contains("strategy_name = \"RsiReversion\""));
        assert!(rendered.contains("[params]"));
    }

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let params = Params {
            symbol: "ETHUSDT".to_string(),
            period: 21,
        };
        write_toml(&path, &params).unwrap();

        let parsed: Params = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, params);
    }
}
