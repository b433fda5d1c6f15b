//! RangeSeek host harness entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rangeseek_core::RangeSeekConfig;

#[derive(Parser)]
#[command(name = "rangeseek", about = "RangeSeek dual-thumb slider host harness")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a JSON pointer script and print the selection reports.
    Replay {
        /// Path to the script.
        script: PathBuf,

        /// JSON configuration replacing the script's own.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the report as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Replay { script, config, json } => {
            let config = match config.map(RangeSeekConfig::load).transpose() {
                Ok(config) => config,
                Err(e) => {
                    log::error!("Failed to load config: {}", e);
                    return ExitCode::FAILURE;
                }
            };

            let report = match rangeseek_app::replay_file(&script, config) {
                Ok(report) => report,
                Err(e) => {
                    log::error!("Replay of {} failed: {}", script.display(), e);
                    return ExitCode::FAILURE;
                }
            };

            if json {
                match serde_json::to_string_pretty(&report) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        log::error!("Failed to encode report: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                for width in &report.slides {
                    println!("slide width={:.6}", width);
                }
                println!(
                    "left={:.6} right={:.6} width={:.6} consumed={}",
                    report.left,
                    report.right,
                    report.selection().width(),
                    report.consumed
                );
            }
            ExitCode::SUCCESS
        }
    }
}
