use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::DateTime;
use thiserror::Error;

use crate::series::PriceSeries;

/// Failure variants surfaced while loading market data.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Extension or cell contents this loader cannot read.
    #[error("unsupported data format: {0}")]
    UnsupportedFormat(String),
    /// The header lacks a required column.
    #[error("data file is missing required column `{0}`")]
    MissingColumn(&'static str),
    /// Two rows share the same timestamp.
    #[error("duplicate timestamp {0} in data file")]
    DuplicateTimestamp(i64),
}

/// Load a time-sorted close series from a candle file.
///
/// Only CSV input is readable; columnar formats surface as
/// [`LoadError::UnsupportedFormat`]. The file must carry `timestamp` and
/// `close` header columns. Timestamps may be integer epoch seconds or
/// milliseconds, or RFC 3339 strings; rows may arrive in any order and are
/// sorted here. Duplicate timestamps are rejected.
pub fn load_close_series<P: AsRef<Path>>(path: P) -> Result<PriceSeries, LoadError> {
    let path = path.as_ref();
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => load_csv(path),
        other => Err(LoadError::UnsupportedFormat(format!(
            "extension `{}` (only .csv is supported)",
            other.unwrap_or("")
        ))),
    }
}

fn load_csv(path: &Path) -> Result<PriceSeries, LoadError> {
    let reader = BufReader::new(File::open(path)?);
    let mut lines = reader.lines();

    let header = lines
        .next()
        .ok_or_else(|| LoadError::UnsupportedFormat("empty file".to_string()))??;
    let columns: Vec<&str> = header.split(',').map(str::trim).collect();
    let ts_col = columns
        .iter()
        .position(|c| *c == "timestamp")
        .ok_or(LoadError::MissingColumn("timestamp"))?;
    let close_col = columns
        .iter()
        .position(|c| *c == "close")
        .ok_or(LoadError::MissingColumn("close"))?;

    let mut rows: Vec<(i64, f64)> = Vec::new();
    for (line_no, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let ts_field = fields.get(ts_col).copied().unwrap_or("");
        let close_field = fields.get(close_col).copied().unwrap_or("");

        let timestamp = parse_timestamp(ts_field).ok_or_else(|| {
            LoadError::UnsupportedFormat(format!(
                "unreadable timestamp `{}` on line {}",
                ts_field,
                line_no + 2
            ))
        })?;
        let close: f64 = close_field.parse().map_err(|_| {
            LoadError::UnsupportedFormat(format!(
                "unreadable close `{}` on line {}",
                close_field,
                line_no + 2
            ))
        })?;

        rows.push((timestamp, close));
    }

    if rows.is_empty() {
        return Err(LoadError::UnsupportedFormat(
            "no data rows in file".to_string(),
        ));
    }

    rows.sort_by_key(|&(ts, _)| ts);
    for pair in rows.windows(2) {
        if pair[0].0 == pair[1].0 {
            return Err(LoadError::DuplicateTimestamp(pair[0].0));
        }
    }

    let (timestamps, closes) = rows.into_iter().unzip();
    Ok(PriceSeries::new(timestamps, closes))
}

/// Normalize a timestamp cell to epoch milliseconds. Integer values below
/// 1e11 are epoch seconds, larger ones already milliseconds; anything else
/// is tried as RFC 3339.
fn parse_timestamp(field: &str) -> Option<i64> {
    if let Ok(raw) = field.parse::<i64>() {
        return Some(if raw.abs() < 100_000_000_000 {
            raw * 1000
        } else {
            raw
        });
    }
    DateTime::parse_from_rfc3339(field)
        .ok()
        .map(|dt| dt.timestamp_millis())
}
