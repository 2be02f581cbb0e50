use thiserror::Error;

/// Failure variants surfaced while building a training set.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    /// The return series is too short for the requested lookback.
    #[error("need at least {needed} returns for lookback {lookback}, got {len}")]
    InsufficientData {
        lookback: usize,
        needed: usize,
        len: usize,
    },
}

/// Supervised training set: one trailing return window per row, labeled by
/// the direction of the next return.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub features: Vec<Vec<f64>>,
    pub labels: Vec<u8>,
}

impl Dataset {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Build feature windows and up/down labels from a return series.
///
/// For each end index `e` in `[lookback, len - 2]` the window is
/// `returns[e - lookback .. e]` and the label is 1 when the next return
/// after the window, `returns[e]`, is positive. Indices without a full
/// window or a following return are excluded rather than zero-filled, so a
/// series of length N yields exactly `N - lookback - 1` rows.
pub fn build_dataset(returns: &[f64], lookback: usize) -> Result<Dataset, DatasetError> {
    let needed = lookback + 2;
    if lookback == 0 || returns.len() < needed {
        return Err(DatasetError::InsufficientData {
            lookback,
            needed,
            len: returns.len(),
        });
    }

    let mut features = Vec::with_capacity(returns.len() - lookback - 1);
    let mut labels = Vec::with_capacity(returns.len() - lookback - 1);
    for end in lookback..=returns.len() - 2 {
        features.push(returns[end - lookback..end].to_vec());
        labels.push(u8::from(returns[end] > 0.0));
    }

    Ok(Dataset { features, labels })
}
