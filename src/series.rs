use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Time-indexed close prices, strictly increasing in time.
///
/// Built once per run by the loader (or a test helper) and read-only
/// afterwards; every evaluation during a search borrows the same series.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    timestamps: Vec<i64>,
    closes: Vec<f64>,
}

impl PriceSeries {
    /// Build a series from parallel timestamp/close vectors. Timestamps must
    /// already be strictly increasing; the loader sorts and deduplicates
    /// before calling this.
    pub fn new(timestamps: Vec<i64>, closes: Vec<f64>) -> Self {
        debug_assert_eq!(timestamps.len(), closes.len());
        debug_assert!(timestamps.windows(2).all(|w| w[0] < w[1]));
        Self { timestamps, closes }
    }

    /// Number of bars.
    pub fn len(&self) -> usize {
        self.closes.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    /// Epoch-millisecond timestamps, one per bar.
    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    /// Close prices, one per bar.
    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    /// Simple returns, index-aligned with the series.
    pub fn returns(&self) -> Vec<f64> {
        returns(&self.closes)
    }
}

/// Simple returns of a close series: `(p[i] - p[i-1]) / p[i-1]`, with 0.0 in
/// the first slot (no prior close) so the output stays index-aligned with
/// the input.
pub fn returns(closes: &[f64]) -> Vec<f64> {
    if closes.is_empty() {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(closes.len());
    out.push(0.0);
    for w in closes.windows(2) {
        out.push((w[1] - w[0]) / w[0]);
    }
    out
}

/// Seeded random-walk close series for tests and experiments. Each bar moves
/// by `trend` plus uniform noise in `[-volatility, volatility]`, floored so
/// the price stays positive. Identical arguments always produce the
/// identical series.
pub fn synthetic_walk(n: usize, trend: f64, volatility: f64, seed: u64) -> PriceSeries {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut closes = Vec::with_capacity(n);
    let mut price = 100.0;
    for _ in 0..n {
        closes.push(price);
        let step = trend + rng.gen_range(-volatility..=volatility);
        price = (price + step).max(1.0);
    }
    let timestamps = (0..n as i64).map(|i| i * 60_000).collect();
    PriceSeries::new(timestamps, closes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_alignment() {
        let prices = vec![100.0, 110.0, 105.0, 115.5];
        let rets = returns(&prices);

        assert_eq!(rets.len(), prices.len());
        assert_eq!(rets[0], 0.0);
        assert!((rets[1] - 0.1).abs() < 1e-10); // (110-100)/100
        assert!((rets[2] - (-0.045454545)).abs() < 1e-6); // (105-110)/110
        assert!((rets[3] - 0.1).abs() < 1e-10); // (115.5-105)/105
    }

    #[test]
    fn test_returns_empty_and_single() {
        assert!(returns(&[]).is_empty());
        assert_eq!(returns(&[42.0]), vec![0.0]);
    }

    #[test]
    fn test_synthetic_walk_deterministic() {
        let a = synthetic_walk(64, 0.1, 1.0, 7);
        let b = synthetic_walk(64, 0.1, 1.0, 7);

        assert_eq!(a.len(), 64);
        assert_eq!(a.closes(), b.closes());
        assert!(a.closes().iter().all(|&p| p > 0.0));
        assert!(a.timestamps().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_synthetic_walk_trend() {
        let series = synthetic_walk(500, 0.5, 0.1, 3);
        assert!(series.closes().last().unwrap() > &series.closes()[0]);
    }
}
