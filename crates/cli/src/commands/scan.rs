/// Module for the `scan` subcommand, which computes PUSH0 savings for a bytecode dump.
///
/// Every `identifier,base64-bytecode` record is segmented into code and data, its
/// `PUSH1 0x00` occurrences at code positions are counted, and one line per record is appended
/// to the result file.
use async_trait::async_trait;
use clap::Args;
use pushscan_analysis::{ScanConfig, run_scan};
use std::error::Error;
use std::path::PathBuf;

/// Arguments for the `scan` subcommand.
#[derive(Args)]
pub struct ScanArgs {
    /// Delimited dump, one `identifier,base64-bytecode` record per line.
    pub input: PathBuf,
    /// Result file to append to (default: result.csv).
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Print the annotated listing of every record on stdout.
    #[arg(long)]
    listing: bool,
    /// Print per-record statistics as JSON lines on stdout.
    #[arg(long)]
    json: bool,
    /// JSON config file; command-line flags override its fields.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl ScanArgs {
    /// Merges the config file (if any) with the command-line flags.
    pub fn to_config(&self) -> Result<ScanConfig, Box<dyn Error>> {
        let mut cfg = match &self.config {
            Some(path) => ScanConfig::from_file(path)?,
            None => ScanConfig::default(),
        };
        cfg.input = self.input.clone();
        if let Some(output) = &self.output {
            cfg.output = output.clone();
        }
        cfg.listing |= self.listing;
        cfg.json |= self.json;
        Ok(cfg)
    }
}

#[async_trait]
impl super::Command for ScanArgs {
    async fn execute(self) -> Result<(), Box<dyn Error>> {
        let cfg = self.to_config()?;
        tracing::debug!(?cfg, "scan config");

        let summary = run_scan(&cfg, |scanned| {
            if let Some(listing) = &scanned.listing {
                print!("{listing}");
            }
            if cfg.json {
                println!("{}", serde_json::to_string(&scanned.stats)?);
            }
            Ok(())
        })
        .await?;

        println!(
            "{} records, {} PUSH1 0x00 → PUSH0 candidates, {} deploy gas / {} runtime gas saved",
            summary.records,
            summary.push0_count,
            summary.deploy_gas_saved,
            summary.runtime_gas_saved
        );
        Ok(())
    }
}
