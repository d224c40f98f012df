/// Module for the `map` subcommand, which prints the code/data listing of one bytecode.
use async_trait::async_trait;
use clap::Args;
use hex::FromHex;
use pushscan_analysis::listing::Listing;
use pushscan_analysis::{GasSchedule, StreamStats};
use pushscan_core::code_bitmap;
use pushscan_utils::errors::DecodeError;
use std::error::Error;
use std::{fs, path::Path};

/// Arguments for the `map` subcommand.
#[derive(Args)]
pub struct MapArgs {
    /// Bytecode as a hex string (0x...) or a file of hex text prefixed with @
    pub input: String,
}

/// Strips whitespace and an optional `0x` prefix. Odd-length input is left as is and rejected
/// by the hex decoder rather than padded, which would shift every nibble.
pub fn normalize_hex_string(input: &str) -> String {
    let clean: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    match clean.strip_prefix("0x") {
        Some(rest) => rest.to_string(),
        None => clean,
    }
}

/// Reads bytecode from a hex argument or, with a leading `@`, from a file of hex text.
pub fn input_to_bytes(input: &str) -> Result<Vec<u8>, DecodeError> {
    let text = match input.strip_prefix('@') {
        Some(path) => {
            let path = Path::new(path);
            fs::read_to_string(path).map_err(|source| DecodeError::FileRead {
                path: path.display().to_string(),
                source,
            })?
        }
        None => input.to_string(),
    };
    Ok(Vec::from_hex(normalize_hex_string(&text))?)
}

#[async_trait]
impl super::Command for MapArgs {
    async fn execute(self) -> Result<(), Box<dyn Error>> {
        let code = input_to_bytes(&self.input)?;
        let bitmap = code_bitmap(&code);

        for line in Listing::new(&code, &bitmap) {
            println!("{line}");
            if line.push0_candidate {
                println!(">>> PUSH0");
            }
        }

        let stats = StreamStats::from_bitmap("input", &code, &bitmap, &GasSchedule::default());
        tracing::info!(
            len = stats.len,
            code = stats.code_bytes,
            data = stats.data_bytes,
            jumpdests = stats.jumpdests,
            push0 = stats.savings.push0_count,
            "bytecode mapped"
        );
        Ok(())
    }
}
