//! Baseline Module - Reference Statistics
//!
//! Statistics computed once from the reference dataset, used to measure how
//! far a live reading sits from normal operation.
//!
//! # Architecture
//! - `types.rs`: `StatKey`, `FeatureStat`, `StatsCache`
//! - `loader.rs`: CSV reader building `ReferenceData` (stats + history cache)
//!
//! # Failure Strategy
//! Missing or malformed dataset -> empty cache for the whole process
//! lifetime. No retry, no lazy refresh.

pub mod types;
pub mod loader;

pub use types::{FeatureStat, StatKey, StatsCache, STAT_KEYS};
pub use loader::{read_history, HistoryRecord, ReferenceData, HISTORY_ROWS};
