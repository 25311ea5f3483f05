//! SymptoScan Control - CLI client for SymptoScan
//!
//! Sends symptoms to symptoscand and renders the possible related topics.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use symptoscan_common::FallbackTable;
use symptoscanctl::check::{self, CheckArgs, OutputFormat};
use symptoscanctl::client::DEFAULT_SERVER;

#[derive(Parser)]
#[command(name = "symptoscanctl")]
#[command(about = "SymptoScan - symptom checker", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up possible related health topics
    Check {
        /// Comma-separated symptoms (e.g. "fever, sore throat")
        symptoms: String,

        /// How long the symptoms have lasted ("<1", "1-2", "2+")
        #[arg(long)]
        duration: Option<String>,

        /// symptoscand base URL
        #[arg(long, default_value = DEFAULT_SERVER)]
        server: String,

        /// Skip the proxy and use the built-in symptom table
        #[arg(long)]
        offline: bool,

        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List symptoms known to the built-in table
    Symptoms,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    symptoscanctl::logging::init();

    match cli.command {
        Commands::Check {
            symptoms,
            duration,
            server,
            offline,
            format,
        } => {
            check::run(CheckArgs {
                symptoms,
                duration,
                server,
                offline,
                format,
            })
            .await
        }
        Commands::Symptoms => {
            for key in FallbackTable::builtin().keys() {
                println!("{}", key.replace('_', " "));
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
