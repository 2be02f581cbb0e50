//! Shared core for the strategy parameter research pipelines: price series
//! handling, grid search, dataset construction, classifier fitting, and
//! artifact I/O.

pub mod dataset;
pub mod io;
pub mod models;
pub mod search;
pub mod series;

pub use dataset::{Dataset, DatasetError, build_dataset};
pub use search::{SearchError, SearchReport, maximize, maximize_with_deadline};
pub use series::{PriceSeries, returns};
