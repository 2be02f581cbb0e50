/// Discrete per-bar trading stance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Long,
    Short,
    Flat,
}

impl Position {
    /// Signed exposure used by the scorer: +1, -1 or 0.
    pub fn direction(self) -> f64 {
        match self {
            Position::Long => 1.0,
            Position::Short => -1.0,
            Position::Flat => 0.0,
        }
    }
}

/// Fast/slow moving-average crossover signal: long while the fast line is
/// above the slow line, short otherwise. Bars where either line is still
/// warming up carry no signal at all and must not be scored.
pub fn crossover_signal(fast: &[Option<f64>], slow: &[Option<f64>]) -> Vec<Option<Position>> {
    fast.iter()
        .zip(slow.iter())
        .map(|(f, s)| match (f, s) {
            (Some(f), Some(s)) => Some(if f > s {
                Position::Long
            } else {
                Position::Short
            }),
            _ => None,
        })
        .collect()
}

/// Oscillator mean-reversion signal: long at or below `oversold`, short at
/// or above `overbought`, flat in between. The default is flat, not a
/// carry-forward of the previous stance. Warmup bars carry no signal.
///
/// `oversold < overbought` is a grid-validity constraint; candidate points
/// violating it are pruned before ever reaching this function.
pub fn threshold_signal(
    values: &[Option<f64>],
    oversold: f64,
    overbought: f64,
) -> Vec<Option<Position>> {
    values
        .iter()
        .map(|value| {
            value.map(|v| {
                if v <= oversold {
                    Position::Long
                } else if v >= overbought {
                    Position::Short
                } else {
                    Position::Flat
                }
            })
        })
        .collect()
}
