//! oxo CLI - optimal Tic-Tac-Toe solver toolkit
//!
//! This CLI provides a unified interface for:
//! - Analyzing positions and exporting solved moves
//! - Playing interactive games against the solver
//! - Running batch self-play verification

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Optimal Tic-Tac-Toe solver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a position and report the solved move
    Analyze(oxo::cli::commands::analyze::AnalyzeArgs),

    /// Play an interactive game against the solver
    Play(oxo::cli::commands::play::PlayArgs),

    /// Run batch games to verify the solver never loses
    Selfplay(oxo::cli::commands::selfplay::SelfplayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => oxo::cli::commands::analyze::execute(args),
        Commands::Play(args) => oxo::cli::commands::play::execute(args),
        Commands::Selfplay(args) => oxo::cli::commands::selfplay::execute(args),
    }
}
