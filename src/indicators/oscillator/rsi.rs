/// Compute the Relative Strength Index over a trailing window of price
/// changes.
///
/// Per-step gain is `max(delta, 0)` and loss is `max(-delta, 0)`; the step
/// at index 0 has no prior close and counts as zero change. Average gain and
/// average loss are the trailing-`period` arithmetic means, maintained as
/// rolling sums. RS = avg_gain / avg_loss and RSI = 100 - 100/(1 + RS).
/// A window with zero average loss saturates to 100 instead of dividing by
/// zero, so the output is always in [0, 100].
///
/// The first `period - 1` entries are `None`.
pub fn rsi(data: &[f64], period: usize) -> Vec<Option<f64>> {
    let n = data.len();
    if period == 0 || period > n {
        return vec![None; n];
    }

    let mut gains = Vec::with_capacity(n);
    let mut losses = Vec::with_capacity(n);
    gains.push(0.0);
    losses.push(0.0);
    for i in 1..n {
        let change = data[i] - data[i - 1];
        gains.push(change.max(0.0));
        losses.push((-change).max(0.0));
    }

    let mut out = vec![None; n];
    let mut gain_sum: f64 = gains.iter().take(period).sum();
    let mut loss_sum: f64 = losses.iter().take(period).sum();

    for i in period - 1..n {
        if i >= period {
            gain_sum += gains[i] - gains[i - period];
            loss_sum += losses[i] - losses[i - period];
        }
        // Rolling subtraction can drift a hair below zero; clamp before the
        // exact-zero saturation check.
        let avg_gain = (gain_sum / period as f64).max(0.0);
        let avg_loss = (loss_sum / period as f64).max(0.0);

        let value = if avg_loss == 0.0 {
            100.0
        } else {
            let rs = avg_gain / avg_loss;
            100.0 - 100.0 / (1.0 + rs)
        };
        out[i] = Some(value);
    }

    out
}
