use backtesting::{lagged_return_score, strategy_returns, threshold_signal};
use indicators::oscillator::rsi::rsi;

/// One candidate period/threshold parameterization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RsiPoint {
    pub period: usize,
    pub oversold: f64,
    pub overbought: f64,
}

/// Candidate threshold sets for the reversion search.
#[derive(Debug, Clone)]
pub struct RsiGrid {
    pub periods: Vec<usize>,
    pub oversold: Vec<f64>,
    pub overbought: Vec<f64>,
}

impl RsiGrid {
    /// Enumerate period → oversold → overbought, keeping only points where
    /// the oversold threshold lies strictly below the overbought one.
    pub fn points(&self) -> Vec<RsiPoint> {
        let mut points = Vec::new();
        for &period in &self.periods {
            for &oversold in &self.oversold {
                for &overbought in &self.overbought {
                    if oversold < overbought {
                        points.push(RsiPoint {
                            period,
                            oversold,
                            overbought,
                        });
                    }
                }
            }
        }
        points
    }
}

/// Score one reversion parameterization against a close series: RSI,
/// threshold signal, lagged cumulative return.
pub fn evaluate(closes: &[f64], returns: &[f64], point: &RsiPoint) -> f64 {
    let oscillator = rsi(closes, point.period);
    let signals = threshold_signal(&oscillator, point.oversold, point.overbought);
    lagged_return_score(&signals, returns)
}

/// Per-bar contributions of one parameterization, for the summary report.
pub fn contributions(closes: &[f64], returns: &[f64], point: &RsiPoint) -> Vec<f64> {
    let oscillator = rsi(closes, point.period);
    let signals = threshold_signal(&oscillator, point.oversold, point.overbought);
    strategy_returns(&signals, returns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratlab::search::{SearchError, maximize};
    use stratlab::series::{returns, synthetic_walk};

    #[test]
    fn test_grid_enumeration_and_pruning() {
        let grid = RsiGrid {
            periods: vec![8, 14, 21, 28],
            oversold: vec![20.0, 25.0, 30.0, 35.0],
            overbought: vec![65.0, 70.0, 75.0, 80.0],
        };
        let points = grid.points();

        // Every default pair is valid, so the full product survives.
        assert_eq!(points.len(), 64);
        assert_eq!(
            points[0],
            RsiPoint {
                period: 8,
                oversold: 20.0,
                overbought: 65.0,
            }
        );
        assert!(points.iter().all(|p| p.oversold < p.overbought));
    }

    #[test]
    fn test_fully_pruned_grid_surfaces_empty_space() {
        let grid = RsiGrid {
            periods: vec![14],
            oversold: vec![70.0, 80.0],
            overbought: vec![30.0, 40.0],
        };
        assert!(grid.points().is_empty());

        let result = maximize(grid.points(), |_| 0.0);
        assert_eq!(result.unwrap_err(), SearchError::EmptySearchSpace);
    }

    #[test]
    fn test_evaluate_direction() {
        let series = synthetic_walk(300, 0.5, 0.1, 9);
        let rets = returns(series.closes());

        // A steady uptrend pins the RSI at 100. Thresholds above it keep
        // the stance long; thresholds below keep it short.
        let long_point = RsiPoint {
            period: 14,
            oversold: 100.5,
            overbought: 101.0,
        };
        let short_point = RsiPoint {
            period: 14,
            oversold: -1.0,
            overbought: 0.5,
        };

        assert!(evaluate(series.closes(), &rets, &long_point) > 0.0);
        assert!(evaluate(series.closes(), &rets, &short_point) < 0.0);
    }

    #[test]
    fn test_search_on_single_point_matches_direct_call() {
        let series = synthetic_walk(250, 0.0, 2.0, 17);
        let rets = returns(series.closes());
        let point = RsiPoint {
            period: 14,
            oversold: 30.0,
            overbought: 70.0,
        };

        let direct = evaluate(series.closes(), &rets, &point);
        let report = maximize(vec![point], |p| evaluate(series.closes(), &rets, p)).unwrap();
        assert_eq!(report.score, direct);
    }

    #[test]
    fn test_contributions_sum_to_score() {
        let series = synthetic_walk(250, 0.0, 2.0, 23);
        let rets = returns(series.closes());
        let point = RsiPoint {
            period: 8,
            oversold: 35.0,
            overbought: 65.0,
        };

        let total: f64 = contributions(series.closes(), &rets, &point).iter().sum();
        assert!((total - evaluate(series.closes(), &rets, &point)).abs() < 1e-12);
    }
}
