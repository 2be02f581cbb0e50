pub mod metrics;
pub mod score;
pub mod signal;

pub use score::{equity_curve, lagged_return_score, strategy_returns};
pub use signal::{Position, crossover_signal, threshold_signal};
