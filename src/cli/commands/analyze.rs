//! Position analysis command
//!
//! Solves a single position and reports the chosen move alongside the
//! searched score of every candidate.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use super::SymbolArg;
use crate::{
    board::{Board, Symbol},
    cli::output,
    evaluator, search,
};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Board as 9 cells ('.', 'X', 'O'), row-major; whitespace is ignored
    #[arg(long)]
    board: String,

    /// Symbol the computer plays
    #[arg(long, value_enum, default_value = "x")]
    symbol: SymbolArg,

    /// Export the analysis as JSON
    #[arg(long)]
    export: Option<PathBuf>,
}

#[derive(Serialize)]
struct AnalysisExport {
    board: String,
    symbol: Symbol,
    best_move: usize,
    best_score: i32,
    move_scores: Vec<MoveScore>,
}

#[derive(Serialize)]
struct MoveScore {
    position: usize,
    score: i32,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    let symbol = Symbol::from(args.symbol);

    output::print_section(&format!("Position analysis (computer plays {symbol})"));
    println!("{board}");

    if let Some(winner) = evaluator::winner(&board) {
        println!("\nPosition is already won by {winner}.");
        return Ok(());
    }
    if evaluator::is_full(&board) {
        println!("\nPosition is a completed draw; there is no move to analyze.");
        return Ok(());
    }

    let scored = search::evaluate_moves(&board, symbol);
    let best = search::best_move(&board, symbol)?;
    let best_score = scored
        .iter()
        .find(|(pos, _)| *pos == best)
        .map(|(_, score)| *score)
        .unwrap_or(0);

    output::print_subsection("Immediate threats");
    output::print_kv(
        "Winning moves",
        &format_positions(&evaluator::winning_moves(&board, symbol)),
    );
    output::print_kv(
        "Must block",
        &format_positions(&evaluator::winning_moves(&board, symbol.opponent())),
    );

    output::print_subsection("Candidate moves");
    for (pos, score) in &scored {
        let marker = if *pos == best { " <- best" } else { "" };
        println!(
            "  position {} (row {}, col {}): score {}{}",
            pos,
            pos / 3,
            pos % 3,
            score,
            marker
        );
    }

    println!(
        "\nBest move: position {best} (row {}, col {})",
        best / 3,
        best % 3
    );

    if let Some(path) = &args.export {
        let export = AnalysisExport {
            board: board.encode(),
            symbol,
            best_move: best,
            best_score,
            move_scores: scored
                .into_iter()
                .map(|(position, score)| MoveScore { position, score })
                .collect(),
        };
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, &export)?;
        println!("Analysis exported to: {}", path.display());
    }

    Ok(())
}

fn format_positions(positions: &[usize]) -> String {
    if positions.is_empty() {
        "none".to_string()
    } else {
        positions
            .iter()
            .map(|pos| pos.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
