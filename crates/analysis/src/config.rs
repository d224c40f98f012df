//! Scan configuration and the PUSH0 gas schedule.

use pushscan_utils::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Gas charged per `PUSH1 0x00` occurrence, with and without `PUSH0` available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GasSchedule {
    /// Deployment cost of the two-byte `PUSH1 0x00` (200 gas per code byte).
    pub deploy_without_push0: u64,
    /// Deployment cost of the one-byte `PUSH0`.
    pub deploy_with_push0: u64,
    /// Execution cost of `PUSH1`.
    pub runtime_without_push0: u64,
    /// Execution cost of `PUSH0`.
    pub runtime_with_push0: u64,
}

impl Default for GasSchedule {
    fn default() -> Self {
        Self {
            deploy_without_push0: 2 * 200,
            deploy_with_push0: 200,
            runtime_without_push0: 3,
            runtime_with_push0: 2,
        }
    }
}

/// Settings for a batch scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Delimited input file: one `identifier,base64-bytecode` record per line.
    pub input: PathBuf,
    /// Result file; records are appended, never truncated.
    pub output: PathBuf,
    /// Log an annotated listing of every blob at debug level.
    pub listing: bool,
    /// Print per-record statistics as JSON lines on stdout.
    pub json: bool,
    /// Gas costs used for the savings counters.
    pub gas: GasSchedule,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("accounts-with-code.csv"),
            output: PathBuf::from("result.csv"),
            listing: false,
            json: false,
            gas: GasSchedule::default(),
        }
    }
}

impl ScanConfig {
    /// Loads a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}
