use std::time::Instant;

use thiserror::Error;

/// Failure variants surfaced by the grid search.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// After validity pruning there was nothing left to evaluate.
    #[error("parameter space contains no valid points")]
    EmptySearchSpace,
}

/// Outcome of a grid search over one parameter space.
#[derive(Debug, Clone)]
pub struct SearchReport<P> {
    /// First point in enumeration order attaining the maximum score.
    pub best: P,
    /// Score of the winning point.
    pub score: f64,
    /// Number of points that were evaluated.
    pub evaluated: usize,
    /// True when a deadline stopped the search before the space was
    /// exhausted; `best` is then only the best point seen so far.
    pub truncated: bool,
}

/// Exhaustively evaluate every point and return the first one attaining the
/// maximum score.
///
/// Only a strictly greater score replaces the current best, so ties keep the
/// point seen earlier in enumeration order. Identical inputs always produce
/// the identical report.
pub fn maximize<P, I, F>(points: I, evaluate: F) -> Result<SearchReport<P>, SearchError>
where
    I: IntoIterator<Item = P>,
    F: FnMut(&P) -> f64,
{
    maximize_with_deadline(points, evaluate, None)
}

/// Like [`maximize`], but stop early once `deadline` has passed.
///
/// The first point is always evaluated so a result exists, and a cut-short
/// search is flagged via `truncated` rather than passing for an exhaustive
/// one.
pub fn maximize_with_deadline<P, I, F>(
    points: I,
    mut evaluate: F,
    deadline: Option<Instant>,
) -> Result<SearchReport<P>, SearchError>
where
    I: IntoIterator<Item = P>,
    F: FnMut(&P) -> f64,
{
    let mut points = points.into_iter();
    let mut best = match points.next() {
        Some(point) => point,
        None => return Err(SearchError::EmptySearchSpace),
    };
    let mut best_score = evaluate(&best);
    let mut evaluated = 1;
    let mut truncated = false;

    for point in points {
        if let Some(deadline) = deadline {
            if Instant::now() >= deadline {
                truncated = true;
                break;
            }
        }
        let score = evaluate(&point);
        evaluated += 1;
        if score > best_score {
            best_score = score;
            best = point;
        }
    }

    Ok(SearchReport {
        best,
        score: best_score,
        evaluated,
        truncated,
    })
}
