use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure variants surfaced when fitting the classifier.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FitError {
    /// No feature rows or no labels to fit on.
    #[error("training set is empty")]
    EmptyTrainingSet,
    /// Features and labels disagree in length.
    #[error("got {features} feature rows but {labels} labels")]
    LengthMismatch { features: usize, labels: usize },
    /// A feature row differs in width from the first row.
    #[error("feature row {row} has {got} values, expected {expected}")]
    RaggedFeatures {
        row: usize,
        expected: usize,
        got: usize,
    },
}

/// Linear decision boundary for the up/down classifier: a bias plus one
/// weight per feature-window position. Written once by the training
/// pipeline and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    pub bias: f64,
    pub weights: Vec<f64>,
}

impl LogisticModel {
    /// Affine score before the sigmoid.
    pub fn decision(&self, features: &[f64]) -> f64 {
        self.bias
            + self
                .weights
                .iter()
                .zip(features)
                .map(|(w, x)| w * x)
                .sum::<f64>()
    }

    /// Probability that the next return is positive.
    pub fn predict_proba(&self, features: &[f64]) -> f64 {
        sigmoid(self.decision(features))
    }
}

/// Gradient-descent settings for [`fit`].
#[derive(Debug, Clone)]
pub struct FitOptions {
    pub learning_rate: f64,
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            max_iterations: 1000,
            tolerance: 1e-6,
        }
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Fit a logistic decision boundary with batch gradient descent on the
/// log-loss.
///
/// Parameters start at zero and the updates are deterministic, so identical
/// inputs always produce the identical model. Stops early once the largest
/// parameter update falls below `tolerance`.
pub fn fit(
    features: &[Vec<f64>],
    labels: &[u8],
    opts: &FitOptions,
) -> Result<LogisticModel, FitError> {
    if features.is_empty() || labels.is_empty() {
        return Err(FitError::EmptyTrainingSet);
    }
    if features.len() != labels.len() {
        return Err(FitError::LengthMismatch {
            features: features.len(),
            labels: labels.len(),
        });
    }
    let width = features[0].len();
    for (row, x) in features.iter().enumerate() {
        if x.len() != width {
            return Err(FitError::RaggedFeatures {
                row,
                expected: width,
                got: x.len(),
            });
        }
    }

    let n = features.len() as f64;
    let mut model = LogisticModel {
        bias: 0.0,
        weights: vec![0.0; width],
    };

    for _ in 0..opts.max_iterations {
        let mut grad_bias = 0.0;
        let mut grad_weights = vec![0.0; width];

        for (x, &y) in features.iter().zip(labels) {
            let err = sigmoid(model.decision(x)) - f64::from(y);
            grad_bias += err;
            for (g, &xi) in grad_weights.iter_mut().zip(x) {
                *g += err * xi;
            }
        }

        let step_bias = opts.learning_rate * grad_bias / n;
        model.bias -= step_bias;
        let mut max_step = step_bias.abs();
        for (w, g) in model.weights.iter_mut().zip(&grad_weights) {
            let step = opts.learning_rate * g / n;
            *w -= step;
            max_step = max_step.max(step.abs());
        }

        if max_step < opts.tolerance {
            break;
        }
    }

    Ok(model)
}

/// Fraction of rows where the thresholded probability agrees with the label.
pub fn accuracy(model: &LogisticModel, features: &[Vec<f64>], labels: &[u8]) -> f64 {
    if labels.is_empty() {
        return 0.0;
    }
    let hits = features
        .iter()
        .zip(labels)
        .filter(|(x, y)| u8::from(model.predict_proba(x) > 0.5) == **y)
        .count();
    hits as f64 / labels.len() as f64
}
