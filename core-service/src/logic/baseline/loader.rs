//! Reference Dataset Loader
//!
//! Reads the reference CSV once at startup: per-feature statistics for the
//! contribution ranker and the first rows as a history cache.

use std::io::Read;
use std::path::Path;

use serde_json::{Map, Number, Value};

use super::types::{FeatureStat, StatKey, StatsCache, STAT_KEYS};
use crate::error::{CoreResult, ScoringError};

/// Rows kept in the history cache
pub const HISTORY_ROWS: usize = 100;

/// One dataset row, column name → value, in file column order
pub type HistoryRecord = Map<String, Value>;

/// Everything derived from the reference dataset
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub stats: StatsCache,
    pub history: Vec<HistoryRecord>,
}

impl ReferenceData {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the reference dataset, degrading to an empty result on failure.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(data) => {
                log::info!(
                    "Dataset statistics and history cache initialized ({} features, {} rows)",
                    data.stats.len(),
                    data.history.len()
                );
                data
            }
            Err(e) => {
                log::warn!("Could not initialize dataset data: {}", e);
                Self::empty()
            }
        }
    }

    pub fn load(path: &Path) -> CoreResult<Self> {
        let reader = csv::Reader::from_path(path)
            .map_err(|e| unavailable(path, e))?;
        Self::from_reader(reader)
    }

    pub fn from_reader<R: Read>(mut reader: csv::Reader<R>) -> CoreResult<Self> {
        let headers = reader.headers()
            .map_err(|e| ScoringError::StatsUnavailable(e.to_string()))?
            .clone();

        let mut columns = Vec::with_capacity(STAT_KEYS.len());
        for key in STAT_KEYS {
            let index = headers.iter().position(|h| h == key.column()).ok_or_else(|| {
                ScoringError::StatsUnavailable(format!("missing column '{}'", key.column()))
            })?;
            columns.push((key, index));
        }

        let mut samples: Vec<Vec<f64>> = vec![Vec::new(); columns.len()];
        let mut history = Vec::with_capacity(HISTORY_ROWS);

        for row in reader.records() {
            let row = row.map_err(|e| ScoringError::StatsUnavailable(e.to_string()))?;

            if history.len() < HISTORY_ROWS {
                history.push(to_record(&headers, &row));
            }

            for (slot, (_, index)) in samples.iter_mut().zip(&columns) {
                if let Some(v) = row.get(*index).and_then(parse_number) {
                    slot.push(v);
                }
            }
        }

        let mut stats = Vec::with_capacity(columns.len());
        for ((key, _), values) in columns.iter().zip(&samples) {
            let stat = FeatureStat::from_samples(values).ok_or_else(|| {
                ScoringError::StatsUnavailable(format!("column '{}' has no numeric values", key.column()))
            })?;
            stats.push((*key, stat));
        }

        Ok(Self {
            stats: StatsCache::from_stats(stats),
            history,
        })
    }
}

/// Read up to `limit` rows of the dataset without computing statistics.
pub fn read_history(path: &Path, limit: usize) -> CoreResult<Vec<HistoryRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| unavailable(path, e))?;
    let headers = reader.headers()
        .map_err(|e| ScoringError::StatsUnavailable(e.to_string()))?
        .clone();

    reader.records()
        .take(limit)
        .map(|row| {
            row.map(|r| to_record(&headers, &r))
                .map_err(|e| ScoringError::StatsUnavailable(e.to_string()))
        })
        .collect()
}

// ============================================================================
// HELPERS
// ============================================================================

fn unavailable(path: &Path, err: csv::Error) -> ScoringError {
    ScoringError::StatsUnavailable(format!("{}: {}", path.display(), err))
}

fn parse_number(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Numbers stay numbers, empty cells become "", anything else a string
fn cell_value(cell: &str) -> Value {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Value::String(String::new());
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Value::Number(i.into());
    }
    if let Some(n) = parse_number(trimmed).and_then(Number::from_f64) {
        return Value::Number(n);
    }
    Value::String(cell.to_string())
}

fn to_record(headers: &csv::StringRecord, row: &csv::StringRecord) -> HistoryRecord {
    headers.iter()
        .zip(row.iter())
        .map(|(h, cell)| (h.to_string(), cell_value(cell)))
        .collect()
}
