use rustc_hash::FxHashMap;

use crate::signal::Position;

/// Summary statistics over per-bar strategy returns. Reporting only; the
/// optimizer ranks points by the cumulative score alone.
pub fn summarize(contributions: &[f64]) -> FxHashMap<String, f64> {
    let mut metrics = FxHashMap::default();
    let n = contributions.len();
    if n == 0 {
        return metrics;
    }

    let total: f64 = contributions.iter().sum();
    metrics.insert("Total Return".to_string(), total);

    let mean = total / n as f64;
    metrics.insert("Mean Bar Return".to_string(), mean);

    let variance = contributions
        .iter()
        .map(|r| (r - mean).powi(2))
        .sum::<f64>()
        / n as f64;
    metrics.insert("Bar Volatility".to_string(), variance.sqrt());

    // Max drawdown on the additive equity curve, same convention as the
    // score itself (no compounding).
    let mut peak = 0.0_f64;
    let mut max_drawdown = 0.0_f64;
    let mut equity = 0.0_f64;
    for r in contributions {
        equity += r;
        if equity > peak {
            peak = equity;
        }
        let drawdown = peak - equity;
        if drawdown > max_drawdown {
            max_drawdown = drawdown;
        }
    }
    metrics.insert("Max Drawdown".to_string(), max_drawdown);

    metrics
}

/// Fraction of bars holding a long or short stance.
pub fn time_in_market(signals: &[Option<Position>]) -> f64 {
    if signals.is_empty() {
        return 0.0;
    }
    let active = signals
        .iter()
        .filter(|s| matches!(s, Some(Position::Long) | Some(Position::Short)))
        .count();
    active as f64 / signals.len() as f64
}
