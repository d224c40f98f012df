//! Per-blob statistics computed from the code bitmap.
//!
//! The headline counter is `PUSH1 0x00` at code positions: every occurrence could be the
//! one-byte `PUSH0`, which is cheaper both to deploy and to execute. Data bytes that happen to
//! spell `60 00` are not counted.

use crate::config::GasSchedule;
use crate::ingest::CodeRecord;
use pushscan_core::opcode::{JUMPDEST, PUSH1};
use pushscan_core::{CodeBitmap, code_bitmap};
use serde::Serialize;
use tiny_keccak::{Hasher, Keccak};

/// `PUSH1 0x00` occurrences and their gas cost with and without `PUSH0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Push0Savings {
    /// `PUSH1 0x00` occurrences at code positions.
    pub push0_count: u64,
    /// Deployment gas for those occurrences as `PUSH1 0x00`.
    pub deploy_cost_without: u64,
    /// Deployment gas had they been `PUSH0`.
    pub deploy_cost_with: u64,
    /// Execution gas as `PUSH1 0x00`.
    pub runtime_cost_without: u64,
    /// Execution gas as `PUSH0`.
    pub runtime_cost_with: u64,
}

impl Push0Savings {
    fn record(&mut self, gas: &GasSchedule) {
        self.push0_count += 1;
        self.deploy_cost_without += gas.deploy_without_push0;
        self.deploy_cost_with += gas.deploy_with_push0;
        self.runtime_cost_without += gas.runtime_without_push0;
        self.runtime_cost_with += gas.runtime_with_push0;
    }
}

/// Returns the offsets of every `PUSH1 0x00` whose opcode byte is at a code position.
pub fn push1_zero_offsets<'a>(
    code: &'a [u8],
    bitmap: &'a CodeBitmap,
) -> impl Iterator<Item = usize> + 'a {
    code.windows(2)
        .enumerate()
        .filter(move |&(pc, w)| w == [PUSH1, 0x00] && bitmap.is_code(pc))
        .map(|(pc, _)| pc)
}

/// Counts `PUSH1 0x00` at code positions and accumulates their gas costs.
pub fn push0_savings(code: &[u8], bitmap: &CodeBitmap, gas: &GasSchedule) -> Push0Savings {
    let mut savings = Push0Savings::default();
    for _ in push1_zero_offsets(code, bitmap) {
        savings.record(gas);
    }
    savings
}

/// Summary of one bytecode blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamStats {
    /// Record identifier.
    pub address: String,
    /// Bytecode length in bytes.
    pub len: usize,
    /// Keccak-256 of the bytecode, hex encoded.
    pub code_hash: String,
    /// Number of opcode positions.
    pub code_bytes: usize,
    /// Number of PUSH data positions.
    pub data_bytes: usize,
    /// `JUMPDEST` bytes at code positions.
    pub jumpdests: usize,
    /// PUSH0 savings counters.
    #[serde(flatten)]
    pub savings: Push0Savings,
}

impl StreamStats {
    /// Computes statistics for `code` using a bitmap already built for it.
    pub fn from_bitmap(address: &str, code: &[u8], bitmap: &CodeBitmap, gas: &GasSchedule) -> Self {
        let code_bytes = (0..code.len()).filter(|&pc| bitmap.is_code(pc)).count();
        let jumpdests = code
            .iter()
            .enumerate()
            .filter(|&(pc, &op)| op == JUMPDEST && bitmap.is_code(pc))
            .count();

        Self {
            address: address.to_string(),
            len: code.len(),
            code_hash: hex::encode(keccak256(code)),
            code_bytes,
            data_bytes: code.len() - code_bytes,
            jumpdests,
            savings: push0_savings(code, bitmap, gas),
        }
    }

    /// One result-file line: identifier followed by the five savings counters.
    pub fn csv_line(&self) -> String {
        let s = &self.savings;
        format!(
            "{}, {}, {}, {}, {}, {}\n",
            self.address,
            s.push0_count,
            s.deploy_cost_without,
            s.deploy_cost_with,
            s.runtime_cost_without,
            s.runtime_cost_with
        )
    }
}

/// Builds the bitmap for `record` and computes its statistics.
pub fn analyze(record: &CodeRecord, gas: &GasSchedule) -> StreamStats {
    let bitmap = code_bitmap(&record.code);
    StreamStats::from_bitmap(&record.address, &record.code, &bitmap, gas)
}

fn keccak256(bytes: &[u8]) -> [u8; 32] {
    let mut keccak = Keccak::v256();
    keccak.update(bytes);
    let mut hash = [0u8; 32];
    keccak.finalize(&mut hash);
    hash
}
