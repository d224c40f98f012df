use async_trait::async_trait;
use clap::Subcommand;
use std::error::Error;

pub mod map;
pub mod scan;

#[derive(Subcommand)]
pub enum Cmd {
    /// Scan a `identifier,base64-bytecode` dump and append PUSH0 savings per record
    Scan(scan::ScanArgs),

    /// Print the code/data listing of a single hex bytecode
    Map(map::MapArgs),
}

#[async_trait]
pub trait Command {
    async fn execute(self) -> Result<(), Box<dyn Error>>;
}

#[async_trait]
impl Command for Cmd {
    async fn execute(self) -> Result<(), Box<dyn Error>> {
        match self {
            Cmd::Scan(args) => args.execute().await,
            Cmd::Map(args) => args.execute().await,
        }
    }
}
