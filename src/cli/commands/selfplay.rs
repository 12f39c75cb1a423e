//! Batch self-play verification
//!
//! Runs whole games with the solver on one side and either the solver or a
//! seeded random player on the other, then reports the win/draw/loss tally.
//! The command fails if the solver ever loses.

use anyhow::{ensure, Context, Result};
use clap::{Args, ValueEnum};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::{
    board::{Board, Symbol},
    cli::output,
    evaluator, search,
};

#[derive(Args)]
pub struct SelfplayArgs {
    /// Number of games to play
    #[arg(long, default_value_t = 100)]
    games: u64,

    /// Opponent strategy
    #[arg(long, value_enum, default_value = "optimal")]
    opponent: OpponentArg,

    /// Seed for the random opponent (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OpponentArg {
    /// The solver plays both sides
    Optimal,
    /// Uniformly random legal moves
    Random,
}

enum Outcome {
    ComputerWin,
    OpponentWin,
    Draw,
}

pub fn execute(args: SelfplayArgs) -> Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let pb = output::create_game_progress(args.games);
    let (mut wins, mut draws, mut losses) = (0u64, 0u64, 0u64);

    for game in 0..args.games {
        // Cycle through the four symbol/opener combinations
        let computer = if game % 2 == 0 { Symbol::X } else { Symbol::O };
        let computer_opens = (game / 2) % 2 == 0;

        match play_game(computer, computer_opens, args.opponent, &mut rng)? {
            Outcome::ComputerWin => wins += 1,
            Outcome::Draw => draws += 1,
            Outcome::OpponentWin => losses += 1,
        }

        pb.set_message(format!("W {wins} / D {draws} / L {losses}"));
        pb.inc(1);
    }
    pb.finish_with_message(format!("W {wins} / D {draws} / L {losses}"));

    output::print_section("Self-play results");
    output::print_kv("Games", &args.games.to_string());
    output::print_kv(
        "Opponent",
        match args.opponent {
            OpponentArg::Optimal => "optimal",
            OpponentArg::Random => "random",
        },
    );
    if args.opponent == OpponentArg::Random {
        output::print_kv("Seed", &seed.to_string());
    }
    output::print_kv("Solver wins", &wins.to_string());
    output::print_kv("Draws", &draws.to_string());
    output::print_kv("Solver losses", &losses.to_string());

    ensure!(
        losses == 0,
        "solver lost {losses} of {} games",
        args.games
    );
    if args.opponent == OpponentArg::Optimal {
        ensure!(
            wins == 0 && draws == args.games,
            "optimal-vs-optimal play must always draw (got {wins} wins)"
        );
    }

    Ok(())
}

/// Play one game to completion and classify the outcome for the solver
fn play_game(
    computer: Symbol,
    computer_opens: bool,
    opponent: OpponentArg,
    rng: &mut StdRng,
) -> Result<Outcome> {
    let mut board = Board::new();
    let mut computer_to_move = computer_opens;

    loop {
        if let Some(winner) = evaluator::winner(&board) {
            return Ok(if winner == computer {
                Outcome::ComputerWin
            } else {
                Outcome::OpponentWin
            });
        }
        if evaluator::is_full(&board) {
            return Ok(Outcome::Draw);
        }

        let side = if computer_to_move {
            computer
        } else {
            computer.opponent()
        };
        let position = if computer_to_move || opponent == OpponentArg::Optimal {
            search::best_move(&board, side)?
        } else {
            board
                .empty_positions()
                .choose(rng)
                .copied()
                .context("non-terminal board must have an empty cell")?
        };

        board = board.place(position, side)?;
        computer_to_move = !computer_to_move;
    }
}
