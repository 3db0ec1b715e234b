//! Front desk: interactive hotel front-desk simulator.
//!
//! # Usage
//!
//! ```text
//! frontdesk                                   (same as `frontdesk run`)
//! frontdesk run [--config PATH] [--name NAME] [--room N]...
//! frontdesk config init [--force]
//! frontdesk config show [--config PATH] [--json]
//! ```
//!
//! Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`).

mod commands;
mod desk;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{config::ConfigCommand, run::RunArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "frontdesk",
    version,
    about = "Run an in-memory hotel front desk from a text menu",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the interactive front-desk menu.
    Run(RunArgs),

    /// Manage the hotel configuration file.
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command.unwrap_or_else(|| Commands::Run(RunArgs::default())) {
        Commands::Run(args) => args.run(),
        Commands::Config { command } => commands::config::run(command),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
