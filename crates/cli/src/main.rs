//! warden CLI — the main entry point.
//!
//! Commands:
//! - `check`   — Statically verify a candidate guard source file
//! - `doctor`  — Diagnose checker and runtime availability

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(
    name = "warden",
    about = "warden — policy-guard verification for agent tool calls",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Statically verify a candidate guard source file
    Check {
        /// Path to the candidate source
        file: PathBuf,

        /// Path to the static-checker binary
        #[arg(long, env = "WARDEN_CHECKER")]
        checker: PathBuf,

        /// Path to the interpreter/runtime defining the symbol universe
        #[arg(long, env = "WARDEN_RUNTIME")]
        runtime: PathBuf,

        /// Wall-clock budget for the checker run, in seconds
        #[arg(long, default_value_t = 60)]
        timeout_secs: u64,

        /// Emit the result as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Diagnose checker and runtime availability
    Doctor {
        /// Path to the static-checker binary
        #[arg(long, env = "WARDEN_CHECKER")]
        checker: PathBuf,

        /// Path to the interpreter/runtime defining the symbol universe
        #[arg(long, env = "WARDEN_RUNTIME")]
        runtime: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Check {
            file,
            checker,
            runtime,
            timeout_secs,
            json,
        } => commands::check::run(file, checker, runtime, timeout_secs, json).await?,
        Commands::Doctor { checker, runtime } => commands::doctor::run(checker, runtime)?,
    }

    Ok(())
}
