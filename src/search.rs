//! Minimax move search with alpha-beta pruning
//!
//! Depth-first search over the legal-move tree rooted at a given board.
//! The search is stateless and deterministic: every invocation operates on
//! its own short-lived board copies (one clone per candidate move), so it
//! may run on any calling thread without synchronization.

use crate::{
    board::{Board, Symbol},
    evaluator,
};

/// Magnitude of a terminal win score before depth shaping
const WIN_SCORE: i32 = 10;

/// Center index, the score-optimal opening on the empty board
const CENTER: usize = 4;

/// Recursively evaluate a position for `computer`.
///
/// Terminal boards score `WIN_SCORE - depth` for a computer win,
/// `depth - WIN_SCORE` for an opponent win, and `0` for a draw, so faster
/// wins and slower losses are preferred when outcomes tie.
///
/// `maximizing` attributes the next move to `computer`; otherwise it goes
/// to the opponent. `alpha` and `beta` are threaded down through recursive
/// calls, never reset per node; a branch is cut off once `beta <= alpha`.
/// Depth is used only for score shaping, never as a limit — the 9-cell
/// domain bounds the recursion naturally.
pub fn minimax(
    board: &Board,
    depth: i32,
    maximizing: bool,
    computer: Symbol,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    match evaluator::winner(board) {
        Some(symbol) if symbol == computer => return WIN_SCORE - depth,
        Some(_) => return depth - WIN_SCORE,
        None => {}
    }
    if evaluator::is_full(board) {
        return 0;
    }

    if maximizing {
        let mut max_score = i32::MIN;
        for pos in board.empty_positions() {
            let child = board
                .place(pos, computer)
                .expect("placement on an empty position should not fail");
            let score = minimax(&child, depth + 1, false, computer, alpha, beta);
            max_score = max_score.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        max_score
    } else {
        let opponent = computer.opponent();
        let mut min_score = i32::MAX;
        for pos in board.empty_positions() {
            let child = board
                .place(pos, opponent)
                .expect("placement on an empty position should not fail");
            let score = minimax(&child, depth + 1, true, computer, alpha, beta);
            min_score = min_score.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        min_score
    }
}

/// Score every empty position for `computer`, in ascending position order.
///
/// Each candidate is evaluated by placing `computer` there and searching
/// from the opponent's perspective with fresh alpha/beta bounds. Returns an
/// empty vector on a full board.
pub fn evaluate_moves(board: &Board, computer: Symbol) -> Vec<(usize, i32)> {
    board
        .empty_positions()
        .into_iter()
        .map(|pos| {
            let child = board
                .place(pos, computer)
                .expect("placement on an empty position should not fail");
            (pos, minimax(&child, 0, false, computer, i32::MIN, i32::MAX))
        })
        .collect()
}

/// Find the optimal move for `computer` on the given board.
///
/// The chosen move is the first empty position (in ascending order)
/// achieving the maximum search score — ties are broken by move order, not
/// board symmetry. Two fast paths preserve the same externally observable
/// choice as full search: a single remaining cell is returned directly, and
/// the empty board opens at the center.
///
/// # Errors
///
/// Returns [`crate::Error::BoardFull`] if the board has no empty cell; no
/// legal move exists, so no index would be meaningful.
pub fn best_move(board: &Board, computer: Symbol) -> Result<usize, crate::Error> {
    let moves = board.empty_positions();
    match moves.len() {
        0 => return Err(crate::Error::BoardFull),
        1 => return Ok(moves[0]),
        9 => return Ok(CENTER),
        _ => {}
    }

    let mut best_score = i32::MIN;
    let mut best = moves[0];
    for (pos, score) in evaluate_moves(board, computer) {
        if score > best_score {
            best_score = score;
            best = pos;
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    #[test]
    fn test_center_opening() {
        assert_eq!(best_move(&Board::new(), Symbol::X).unwrap(), CENTER);
        assert_eq!(best_move(&Board::new(), Symbol::O).unwrap(), CENTER);
    }

    #[test]
    fn test_single_empty_cell() {
        let b = board("XOXOXOOX.");
        assert_eq!(best_move(&b, Symbol::O).unwrap(), 8);
        assert_eq!(best_move(&b, Symbol::X).unwrap(), 8);
    }

    #[test]
    fn test_full_board_is_an_error() {
        let b = board("XOXOXOOXO");
        assert!(matches!(best_move(&b, Symbol::X), Err(Error::BoardFull)));
    }

    #[test]
    fn test_takes_immediate_win() {
        // OO.
        // XX.
        // ...
        let b = board("OO.XX....");
        assert_eq!(best_move(&b, Symbol::O).unwrap(), 2);
    }

    #[test]
    fn test_neutralizes_opponent_threat() {
        // XX.
        // OO.
        // ...
        // Completing the middle row at 5 wins outright, which dominates
        // the pure block at 2.
        let b = board("XX.OO....");
        assert_eq!(best_move(&b, Symbol::O).unwrap(), 5);
    }

    #[test]
    fn test_blocks_when_no_win_available() {
        // XX.
        // .O.
        // ...
        // O has no immediate win; the only non-losing move is the block at 2.
        let b = board("XX..O....");
        assert_eq!(best_move(&b, Symbol::O).unwrap(), 2);
    }

    #[test]
    fn test_terminal_scores() {
        // X already won; depth shaping applies
        let won = board("XXXOO....");
        assert_eq!(minimax(&won, 0, false, Symbol::X, i32::MIN, i32::MAX), 10);
        assert_eq!(minimax(&won, 2, false, Symbol::X, i32::MIN, i32::MAX), 8);
        assert_eq!(minimax(&won, 0, true, Symbol::O, i32::MIN, i32::MAX), -10);
        assert_eq!(minimax(&won, 3, true, Symbol::O, i32::MIN, i32::MAX), -7);

        // Full board, no winner
        let drawn = board("XOXOXOOXO");
        assert_eq!(minimax(&drawn, 4, true, Symbol::X, i32::MIN, i32::MAX), 0);
    }

    #[test]
    fn test_prefers_faster_win() {
        // O..
        // OXX
        // ...
        // O wins immediately at 6; any slower win scores lower.
        let b = board("O..OXX...");
        let scored = evaluate_moves(&b, Symbol::O);
        let (_, win_score) = scored.iter().find(|(pos, _)| *pos == 6).unwrap();
        assert_eq!(*win_score, 10);
        for (pos, score) in &scored {
            if *pos != 6 {
                assert!(
                    score < win_score,
                    "position {pos} scored {score}, matching the immediate win"
                );
            }
        }
        assert_eq!(best_move(&b, Symbol::O).unwrap(), 6);
    }

    #[test]
    fn test_evaluate_moves_covers_every_empty_cell() {
        let b = board("X...O....");
        let scored = evaluate_moves(&b, Symbol::X);
        let positions: Vec<usize> = scored.iter().map(|(pos, _)| *pos).collect();
        assert_eq!(positions, b.empty_positions());
    }

    #[test]
    fn test_search_does_not_mutate_input() {
        let b = board("X...O....");
        let snapshot = b;
        let _ = best_move(&b, Symbol::X).unwrap();
        assert_eq!(b, snapshot);
    }
}
