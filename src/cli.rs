//! CLI definitions and entry point

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::commands;

/// issue-mafia - Git hooks synchronized from a shared repository
#[derive(Parser, Debug)]
#[command(
    name = "issue-mafia",
    version,
    about = "Git hooks synchronized from a shared repository",
    long_about = "Share Git hooks across projects through a GitHub repository.\n\n\
                  `issue-mafia init` records the repository and branch hooks are\n\
                  fetched from in an .issue-mafia file."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize config file
    ///
    /// Runs the wizard that sets up the .issue-mafia file containing the
    /// hooks repository and branch.
    Init,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    match cli.command {
        Some(Command::Init) => commands::init(),
        Some(Command::Version) => {
            println!("issue-mafia v{}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        },
        None => {
            println!("issue-mafia v{}", env!("CARGO_PKG_VERSION"));
            println!("\nRun 'issue-mafia --help' for usage");
            println!("Run 'issue-mafia init' to get started");
            Ok(ExitCode::SUCCESS)
        },
    }
}
