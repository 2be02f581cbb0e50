pub mod artifact;
pub mod config;
pub mod evaluation;

pub use artifact::{SmaCrossParams, write_strategy};
pub use config::Config;
pub use evaluation::{SmaGrid, SmaPoint, contributions, evaluate};
