/// Calculates the Simple Moving Average (SMA) for a given data slice and
/// window size.
///
/// # Arguments
///
/// * `data` - A slice of f64 values.
/// * `window` - The lookback length for the moving average.
///
/// # Returns
///
/// A Vec<Option<f64>> containing the SMA values. The first `window - 1`
/// entries are `None` because the trailing window is not yet complete.
pub fn moving_average(data: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 || window > data.len() {
        return vec![None; data.len()];
    }

    let mut sma = Vec::with_capacity(data.len());

    for _ in 0..window - 1 {
        sma.push(None);
    }

    let mut sum: f64 = data.iter().take(window).sum();
    sma.push(Some(sum / window as f64));

    for i in window..data.len() {
        sum = sum - data[i - window] + data[i];
        sma.push(Some(sum / window as f64));
    }

    sma
}
