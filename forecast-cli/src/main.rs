//! Binary crate for the `forecast` command-line tool.
//!
//! This crate focuses on:
//! - Parsing and range-checking CLI arguments
//! - Interactive configuration
//! - Human-friendly output formatting

use clap::Parser;

mod cli;
mod logger;
mod output;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    logger::init_cli_logger(cmd.verbose);
    cmd.run().await
}
