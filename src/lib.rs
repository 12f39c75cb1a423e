//! Optimal Tic-Tac-Toe solving
//!
//! This crate provides:
//! - An immutable 3x3 board model with parsing and display
//! - Pure position evaluation (winner, occupancy, and threat detection)
//! - Minimax move search with alpha-beta pruning
//! - A game session that sequences user and computer turns

pub mod board;
pub mod cli;
pub mod error;
pub mod evaluator;
pub mod search;
pub mod session;

pub use board::{Board, Cell, Symbol};
pub use error::{Error, Result};
pub use evaluator::{is_full, winner, winning_moves, WIN_PATTERNS};
pub use search::{best_move, evaluate_moves, minimax};
pub use session::{GameSession, GameStatus, PlayerRole};
