//! Append-only result file.
//!
//! Each scanned blob contributes one line; existing content is preserved so repeated runs
//! accumulate into the same file.

use crate::stats::StreamStats;
use pushscan_utils::errors::ReportError;
use std::path::{Path, PathBuf};
use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncWriteExt, BufWriter};

/// Buffered, append-mode writer for result lines.
#[derive(Debug)]
pub struct ResultSink {
    path: PathBuf,
    out: BufWriter<File>,
    written: usize,
}

impl ResultSink {
    /// Opens `path` for appending, creating it (mode `0600` on Unix) if needed.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let path = path.as_ref().to_path_buf();
        let mut opts = OpenOptions::new();
        opts.append(true).create(true);
        #[cfg(unix)]
        opts.mode(0o600);

        let file = opts.open(&path).await.map_err(|source| ReportError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self {
            path,
            out: BufWriter::new(file),
            written: 0,
        })
    }

    /// Appends the result line for `stats`.
    pub async fn write_record(&mut self, stats: &StreamStats) -> Result<(), ReportError> {
        let line = stats.csv_line();
        self.out
            .write_all(line.as_bytes())
            .await
            .map_err(|source| self.io_error(source))?;
        self.written += 1;
        Ok(())
    }

    /// Number of lines appended through this sink.
    pub const fn written(&self) -> usize {
        self.written
    }

    /// Flushes buffered lines to disk.
    pub async fn flush(&mut self) -> Result<(), ReportError> {
        self.out.flush().await.map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: std::io::Error) -> ReportError {
        ReportError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}
