//! Batch scan: records in, one appended result line per record out.

use crate::config::ScanConfig;
use crate::ingest::{CodeRecord, read_records};
use crate::listing;
use crate::report::ResultSink;
use crate::stats::StreamStats;
use pushscan_core::code_bitmap;
use pushscan_utils::errors::{ReportError, ScanError};
use serde::Serialize;

/// Totals over every record of a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    /// Records scanned.
    pub records: usize,
    /// Opcode positions across all records.
    pub code_bytes: usize,
    /// PUSH data positions across all records.
    pub data_bytes: usize,
    /// `PUSH1 0x00` occurrences at code positions.
    pub push0_count: u64,
    /// Deployment gas `PUSH0` would have saved.
    pub deploy_gas_saved: u64,
    /// Execution gas `PUSH0` would have saved.
    pub runtime_gas_saved: u64,
}

impl ScanSummary {
    fn add(&mut self, stats: &StreamStats) {
        let s = &stats.savings;
        self.records += 1;
        self.code_bytes += stats.code_bytes;
        self.data_bytes += stats.data_bytes;
        self.push0_count += s.push0_count;
        self.deploy_gas_saved += s.deploy_cost_without.saturating_sub(s.deploy_cost_with);
        self.runtime_gas_saved += s.runtime_cost_without.saturating_sub(s.runtime_cost_with);
    }
}

/// Result of scanning one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedRecord {
    /// Statistics written to the result file.
    pub stats: StreamStats,
    /// Annotated listing, present when the config asks for one.
    pub listing: Option<String>,
}

/// Scans one record, rendering its listing when `cfg.listing` is set.
pub fn scan_record(record: &CodeRecord, cfg: &ScanConfig) -> ScannedRecord {
    let bitmap = code_bitmap(&record.code);
    let listing = cfg
        .listing
        .then(|| listing::render(&record.address, &record.code, &bitmap));
    ScannedRecord {
        stats: StreamStats::from_bitmap(&record.address, &record.code, &bitmap, &cfg.gas),
        listing,
    }
}

/// Scans every record of `cfg.input`, appending results to `cfg.output`.
///
/// `on_record` sees each scanned record after its line has been written; an error from it
/// stops the scan.
pub async fn run_scan<F>(cfg: &ScanConfig, mut on_record: F) -> Result<ScanSummary, ScanError>
where
    F: FnMut(&ScannedRecord) -> Result<(), ReportError>,
{
    let records = read_records(&cfg.input).await?;
    let mut sink = ResultSink::open(&cfg.output).await?;
    let mut summary = ScanSummary::default();

    for record in &records {
        let scanned = scan_record(record, cfg);
        let stats = &scanned.stats;
        tracing::debug!(
            address = %stats.address,
            len = stats.len,
            push0 = stats.savings.push0_count,
            "record scanned"
        );
        sink.write_record(stats).await?;
        summary.add(stats);
        on_record(&scanned)?;
    }
    sink.flush().await?;

    tracing::info!(
        records = summary.records,
        push0 = summary.push0_count,
        output = %cfg.output.display(),
        "scan complete"
    );
    Ok(summary)
}
