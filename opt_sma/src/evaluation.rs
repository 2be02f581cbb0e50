use backtesting::{crossover_signal, lagged_return_score, strategy_returns};
use indicators::trend::ma::moving_average;

/// One candidate crossover parameterization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmaPoint {
    pub fast: usize,
    pub slow: usize,
}

/// Candidate window sets for the crossover search.
#[derive(Debug, Clone)]
pub struct SmaGrid {
    pub fast: Vec<usize>,
    pub slow: Vec<usize>,
}

impl SmaGrid {
    /// Enumerate the fast-major Cartesian product, keeping only points where
    /// the fast window is strictly shorter than the slow one.
    pub fn points(&self) -> Vec<SmaPoint> {
        let mut points = Vec::new();
        for &fast in &self.fast {
            for &slow in &self.slow {
                if fast < slow {
                    points.push(SmaPoint { fast, slow });
                }
            }
        }
        points
    }
}

/// Score one crossover parameterization against a close series: fast and
/// slow SMA, crossover signal, lagged cumulative return.
pub fn evaluate(closes: &[f64], returns: &[f64], point: &SmaPoint) -> f64 {
    let fast_ma = moving_average(closes, point.fast);
    let slow_ma = moving_average(closes, point.slow);
    let signals = crossover_signal(&fast_ma, &slow_ma);
    lagged_return_score(&signals, returns)
}

/// Per-bar contributions of one parameterization, for the summary report.
pub fn contributions(closes: &[f64], returns: &[f64], point: &SmaPoint) -> Vec<f64> {
    let fast_ma = moving_average(closes, point.fast);
    let slow_ma = moving_average(closes, point.slow);
    let signals = crossover_signal(&fast_ma, &slow_ma);
    strategy_returns(&signals, returns)
}
