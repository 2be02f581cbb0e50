use crate::signal::Position;

/// Per-bar strategy returns with the mandatory one-bar lag: the stance
/// taken at the previous bar's close earns the current bar's return.
///
/// Bar 0 has no prior stance and warmup bars carry no stance, so both
/// contribute zero. A length mismatch between the two inputs is not an
/// error; the overhang contributes nothing.
pub fn strategy_returns(signals: &[Option<Position>], returns: &[f64]) -> Vec<f64> {
    let n = signals.len().min(returns.len());
    let mut out = vec![0.0; n];
    for i in 1..n {
        if let Some(position) = signals[i - 1] {
            out[i] = position.direction() * returns[i];
        }
    }
    out
}

/// Total realized return over the whole series: the scalar score the grid
/// search maximizes. Cumulative sum of the lagged per-bar contributions,
/// not the path.
pub fn lagged_return_score(signals: &[Option<Position>], returns: &[f64]) -> f64 {
    let n = signals.len().min(returns.len());
    let mut total = 0.0;
    for i in 1..n {
        if let Some(position) = signals[i - 1] {
            total += position.direction() * returns[i];
        }
    }
    total
}

/// Running cumulative sum of per-bar contributions, for reports.
pub fn equity_curve(contributions: &[f64]) -> Vec<f64> {
    let mut curve = Vec::with_capacity(contributions.len());
    let mut acc = 0.0;
    for c in contributions {
        acc += c;
        curve.push(acc);
    }
    curve
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::Position::{Flat, Long, Short};

    #[test]
    fn test_one_bar_lag() {
        // The stance observed at close i earns the return of bar i+1.
        let signals = vec![Some(Long), Some(Long), Some(Short), Some(Short)];
        let returns = vec![0.0, 0.02, -0.01, 0.03];

        let score = lagged_return_score(&signals, &returns);
        assert!((score - (0.02 - 0.01 - 0.03)).abs() < 1e-12);

        let contribs = strategy_returns(&signals, &returns);
        assert_eq!(contribs.len(), 4);
        assert_eq!(contribs[0], 0.0);
        assert!((contribs[1] - 0.02).abs() < 1e-12);
        assert!((contribs[2] - -0.01).abs() < 1e-12);
        assert!((contribs[3] - -0.03).abs() < 1e-12);
    }

    #[test]
    fn test_all_flat_scores_zero() {
        let signals = vec![Some(Flat); 6];
        let returns = vec![0.0, 0.1, -0.2, 0.3, 0.05, -0.07];
        assert_eq!(lagged_return_score(&signals, &returns), 0.0);
    }

    #[test]
    fn test_warmup_bars_contribute_nothing() {
        let signals = vec![None, None, Some(Long), Some(Long)];
        let returns = vec![0.0, 0.5, 0.5, 0.25];

        // Only the bars whose previous stance exists are counted.
        assert!((lagged_return_score(&signals, &returns) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_length_mismatch_is_tolerated() {
        let signals = vec![Some(Long), Some(Long)];
        let returns = vec![0.0, 0.1, 0.9, 0.9];
        assert!((lagged_return_score(&signals, &returns) - 0.1).abs() < 1e-12);

        let signals = vec![Some(Long); 4];
        let returns = vec![0.0, 0.1];
        assert!((lagged_return_score(&signals, &returns) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_score_matches_contribution_sum() {
        let signals = vec![Some(Long), Some(Short), None, Some(Long), Some(Flat)];
        let returns = vec![0.0, 0.01, -0.02, 0.04, -0.03];

        let total: f64 = strategy_returns(&signals, &returns).iter().sum();
        assert!((lagged_return_score(&signals, &returns) - total).abs() < 1e-12);
    }

    #[test]
    fn test_equity_curve() {
        let curve = equity_curve(&[0.0, 0.1, -0.05]);
        assert_eq!(curve.len(), 3);
        assert!((curve[2] - 0.05).abs() < 1e-12);
    }
}
