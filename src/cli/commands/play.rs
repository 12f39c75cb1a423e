//! Interactive terminal game against the solver

use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use clap::{Args, ValueEnum};

use crate::{
    cli::output,
    session::{GameSession, GameStatus, PlayerRole},
};

#[derive(Args)]
pub struct PlayArgs {
    /// Who moves first
    #[arg(long, value_enum, default_value = "user")]
    first: FirstArg,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum FirstArg {
    Computer,
    User,
}

impl From<FirstArg> for PlayerRole {
    fn from(arg: FirstArg) -> Self {
        match arg {
            FirstArg::Computer => PlayerRole::Computer,
            FirstArg::User => PlayerRole::User,
        }
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut session = GameSession::new();
    session.choose_first_player(args.first.into())?;

    output::print_section(&format!(
        "oxo — you play {}, the computer plays {}",
        session.user_symbol(),
        session.computer_symbol()
    ));
    println!("Cells are numbered 0-8, row by row from the top left.");

    let stdin = io::stdin();
    let mut line = String::new();

    while session.status() == GameStatus::Playing {
        println!("\n{}", session.board());
        print!("Your move (0-8): ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            bail!("input closed before the game finished");
        }

        let position: usize = match line.trim().parse() {
            Ok(position) => position,
            Err(_) => {
                println!("Enter a number between 0 and 8.");
                continue;
            }
        };

        if let Err(err) = session.apply_move(position) {
            println!("{err}");
        }
    }

    println!("\n{}", session.board());
    match session.winner() {
        Some(PlayerRole::Computer) => println!("The computer wins."),
        Some(PlayerRole::User) => println!("You win."),
        None => println!("Draw."),
    }
    output::print_kv("Moves played", &session.moves().to_string());

    Ok(())
}
