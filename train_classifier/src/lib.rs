pub mod artifact;
pub mod config;

pub use artifact::{MlClassifierParams, strategy_config_path, write_model, write_strategy};
pub use config::Config;
