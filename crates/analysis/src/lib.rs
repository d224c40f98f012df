//! Collaborators around the code bitmap: record ingestion, PUSH0 statistics, listings and the
//! appended result file.

pub mod config;
pub mod ingest;
pub mod listing;
pub mod pipeline;
pub mod report;
pub mod stats;

pub use config::{GasSchedule, ScanConfig};
pub use ingest::{CodeRecord, parse_records, read_records};
pub use pipeline::{ScanSummary, ScannedRecord, run_scan, scan_record};
pub use stats::{Push0Savings, StreamStats, analyze};
