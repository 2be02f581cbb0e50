pub mod logistic;

pub use logistic::{FitError, FitOptions, LogisticModel, fit};
