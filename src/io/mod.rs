pub mod read;
pub mod write;

pub use read::{LoadError, load_close_series};
pub use write::{StrategyConfig, WriteError, write_toml};
