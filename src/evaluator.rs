//! Pure position classification: winner detection and occupancy
//!
//! These functions are total over any 9-cell board, including boards that
//! are not reachable under legal alternating play. They only pattern-match;
//! legality is the caller's responsibility.

use crate::board::{Board, Cell, Symbol};

/// Win patterns on the 3x3 board: rows, columns, diagonals
pub const WIN_PATTERNS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Find the winning symbol, if any pattern is fully matched.
///
/// Patterns are checked in a fixed order (rows, columns, diagonals), but
/// the order has no observable effect: at most one pattern can be satisfied
/// under legal alternating play.
pub fn winner(board: &Board) -> Option<Symbol> {
    for pattern in &WIN_PATTERNS {
        let [a, b, c] = *pattern;
        let first = board.cells[a];
        if first != Cell::Empty && first == board.cells[b] && first == board.cells[c] {
            return first.to_symbol();
        }
    }
    None
}

/// Check if every cell is occupied
pub fn is_full(board: &Board) -> bool {
    !board.cells.contains(&Cell::Empty)
}

/// Find all empty positions that would immediately win for the symbol
/// (two in a pattern with the third cell empty), in ascending order.
pub fn winning_moves(board: &Board, symbol: Symbol) -> Vec<usize> {
    let mut moves: Vec<usize> = WIN_PATTERNS
        .iter()
        .filter_map(|pattern| winning_move_in_pattern(board, symbol, pattern))
        .collect();
    moves.sort_unstable();
    moves.dedup();
    moves
}

/// Find the winning move position in a specific pattern, if one exists
fn winning_move_in_pattern(board: &Board, symbol: Symbol, pattern: &[usize; 3]) -> Option<usize> {
    let target = symbol.to_cell();
    let mut count = 0;
    let mut empty_pos = None;

    for &idx in pattern {
        match board.cells[idx] {
            Cell::Empty => {
                if empty_pos.is_some() {
                    // More than one empty cell, not a winning move
                    return None;
                }
                empty_pos = Some(idx);
            }
            c if c == target => count += 1,
            _ => return None, // Opponent piece in pattern
        }
    }

    if count == 2 { empty_pos } else { None }
}
