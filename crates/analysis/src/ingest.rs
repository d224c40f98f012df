//! Reads `identifier,base64-bytecode` records from a line-oriented dump.
//!
//! Each line is split on `,`; the first field is the identifier (an account address in the
//! usual dumps) and the second the standard-alphabet base64 bytecode. Extra fields are ignored.
//! Ingestion stops at the first line with fewer than two fields, which also absorbs the empty
//! line after a trailing newline.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use pushscan_utils::errors::IngestError;
use std::path::Path;

/// One decoded bytecode blob and its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeRecord {
    /// Identifier field, trimmed.
    pub address: String,
    /// Raw bytecode decoded from the payload field.
    pub code: Vec<u8>,
}

/// Parses every record in `text`.
pub fn parse_records(text: &str) -> Result<Vec<CodeRecord>, IngestError> {
    let mut records = Vec::new();
    for (idx, line) in text.split('\n').enumerate() {
        let mut fields = line.split(',');
        let (Some(address), Some(payload)) = (fields.next(), fields.next()) else {
            tracing::debug!(line = idx + 1, "short record, stopping ingestion");
            break;
        };

        let address = address.trim();
        let code = STANDARD
            .decode(payload.trim())
            .map_err(|source| IngestError::Base64 {
                line: idx + 1,
                address: address.to_string(),
                source,
            })?;

        records.push(CodeRecord {
            address: address.to_string(),
            code,
        });
    }
    Ok(records)
}

/// Reads and parses the record file at `path`.
pub async fn read_records(path: impl AsRef<Path>) -> Result<Vec<CodeRecord>, IngestError> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| IngestError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
    let records = parse_records(&text)?;
    tracing::info!(path = %path.display(), records = records.len(), "records loaded");
    Ok(records)
}
