use thiserror::Error;

/// Errors raised while turning a delimited bytecode dump into records.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The input file could not be read.
    #[error("could not read file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The payload field of a record is not valid standard base64.
    #[error("base64 decode failed on line {line} ('{address}'): {source}")]
    Base64 {
        line: usize,
        address: String,
        #[source]
        source: base64::DecodeError,
    },
}

/// Errors raised while appending result records.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The result file could not be opened or written.
    #[error("could not write result file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// JSON serialization error.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors raised while reading a single bytecode argument.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("hex decode failed: {0}")]
    HexDecode(#[from] hex::FromHexError),

    #[error("could not read file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while loading a scan configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised by a batch scan.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("ingest failed: {0}")]
    Ingest(#[from] IngestError),
    #[error("report failed: {0}")]
    Report(#[from] ReportError),
}
