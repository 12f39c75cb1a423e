//! Turn sequencing between a user and the solver-driven computer player
//!
//! [`GameSession`] is an explicit, externally-owned state object: callers
//! create one, choose who moves first, and feed it the user's moves. The
//! session answers each live user move with the computer's searched reply
//! and keeps status, winner, and move accounting up to date. There is no
//! global state; pass the session wherever it is needed.

use serde::{Deserialize, Serialize};

use crate::{
    board::{Board, Symbol},
    evaluator, search,
};

/// Who owns a move, independent of which symbol they mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerRole {
    Computer,
    User,
}

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    NotStarted,
    Playing,
    Won,
    Draw,
}

/// A single game between the user and the computer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    current_player: Option<PlayerRole>,
    first_player: Option<PlayerRole>,
    computer_symbol: Symbol,
    status: GameStatus,
    winner: Option<PlayerRole>,
    moves: usize,
}

impl GameSession {
    /// Create a fresh session with no first player chosen
    pub fn new() -> Self {
        GameSession {
            board: Board::new(),
            current_player: None,
            first_player: None,
            computer_symbol: Symbol::X,
            status: GameStatus::NotStarted,
            winner: None,
            moves: 0,
        }
    }

    /// Discard the game in progress and return to the initial state
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<PlayerRole> {
        self.winner
    }

    /// Role that moves next, or `None` before the first-player choice and
    /// after the game has ended
    pub fn current_player(&self) -> Option<PlayerRole> {
        self.current_player
    }

    pub fn first_player(&self) -> Option<PlayerRole> {
        self.first_player
    }

    pub fn computer_symbol(&self) -> Symbol {
        self.computer_symbol
    }

    pub fn user_symbol(&self) -> Symbol {
        self.computer_symbol.opponent()
    }

    /// Number of marks placed so far by either side
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Choose who moves first and start the game.
    ///
    /// The first player takes X. When the computer goes first it plays its
    /// opening move immediately (the center, per the search fast path), and
    /// the turn passes to the user.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::AlreadyStarted`] unless the session is in
    /// [`GameStatus::NotStarted`].
    pub fn choose_first_player(&mut self, role: PlayerRole) -> Result<(), crate::Error> {
        if self.status != GameStatus::NotStarted {
            return Err(crate::Error::AlreadyStarted);
        }

        self.computer_symbol = match role {
            PlayerRole::Computer => Symbol::X,
            PlayerRole::User => Symbol::O,
        };
        self.first_player = Some(role);
        self.status = GameStatus::Playing;

        if role == PlayerRole::Computer {
            self.play_computer_move()?;
        }
        self.current_player = Some(PlayerRole::User);

        Ok(())
    }

    /// Apply the user's move, then — if the game is still live — the
    /// computer's searched reply.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in [`GameStatus::Playing`], or if
    /// the position is out of bounds or already occupied. Erroneous calls
    /// leave the session unchanged.
    pub fn apply_move(&mut self, position: usize) -> Result<(), crate::Error> {
        match self.status {
            GameStatus::NotStarted => return Err(crate::Error::GameNotStarted),
            GameStatus::Won | GameStatus::Draw => return Err(crate::Error::GameOver),
            GameStatus::Playing => {}
        }

        self.board = self.board.place(position, self.user_symbol())?;
        self.moves += 1;
        if self.finish_if_terminal() {
            return Ok(());
        }

        self.play_computer_move()?;
        if self.finish_if_terminal() {
            return Ok(());
        }

        self.current_player = Some(PlayerRole::User);
        Ok(())
    }

    /// Ask the solver for the computer's move and place it
    fn play_computer_move(&mut self) -> Result<(), crate::Error> {
        self.current_player = Some(PlayerRole::Computer);
        let position = search::best_move(&self.board, self.computer_symbol)?;
        self.board = self.board.place(position, self.computer_symbol)?;
        self.moves += 1;
        Ok(())
    }

    /// Settle status and winner if the board is terminal
    fn finish_if_terminal(&mut self) -> bool {
        if let Some(symbol) = evaluator::winner(&self.board) {
            self.status = GameStatus::Won;
            self.winner = Some(if symbol == self.computer_symbol {
                PlayerRole::Computer
            } else {
                PlayerRole::User
            });
            self.current_player = None;
            return true;
        }

        if evaluator::is_full(&self.board) {
            self.status = GameStatus::Draw;
            self.winner = None;
            self.current_player = None;
            return true;
        }

        false
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{board::Cell, Error};

    #[test]
    fn test_new_session() {
        let session = GameSession::new();
        assert_eq!(session.status(), GameStatus::NotStarted);
        assert_eq!(session.board(), Board::new());
        assert_eq!(session.current_player(), None);
        assert_eq!(session.first_player(), None);
        assert_eq!(session.computer_symbol(), Symbol::X);
        assert_eq!(session.winner(), None);
        assert_eq!(session.moves(), 0);
    }

    #[test]
    fn test_user_first_takes_x() {
        let mut session = GameSession::new();
        session.choose_first_player(PlayerRole::User).unwrap();

        assert_eq!(session.status(), GameStatus::Playing);
        assert_eq!(session.first_player(), Some(PlayerRole::User));
        assert_eq!(session.current_player(), Some(PlayerRole::User));
        assert_eq!(session.computer_symbol(), Symbol::O);
        assert_eq!(session.user_symbol(), Symbol::X);
        assert_eq!(session.moves(), 0);
    }

    #[test]
    fn test_computer_first_opens_at_center() {
        let mut session = GameSession::new();
        session.choose_first_player(PlayerRole::Computer).unwrap();

        assert_eq!(session.status(), GameStatus::Playing);
        assert_eq!(session.first_player(), Some(PlayerRole::Computer));
        assert_eq!(session.computer_symbol(), Symbol::X);
        assert_eq!(session.board().get(4), Cell::X);
        assert_eq!(session.current_player(), Some(PlayerRole::User));
        assert_eq!(session.moves(), 1);
    }

    #[test]
    fn test_choose_first_player_twice_is_rejected() {
        let mut session = GameSession::new();
        session.choose_first_player(PlayerRole::User).unwrap();
        let result = session.choose_first_player(PlayerRole::Computer);
        assert!(matches!(result, Err(Error::AlreadyStarted)));
    }

    #[test]
    fn test_move_before_start_is_rejected() {
        let mut session = GameSession::new();
        let result = session.apply_move(0);
        assert!(matches!(result, Err(Error::GameNotStarted)));
        assert_eq!(session.board(), Board::new());
    }

    #[test]
    fn test_move_on_occupied_cell_is_rejected() {
        let mut session = GameSession::new();
        session.choose_first_player(PlayerRole::User).unwrap();
        session.apply_move(0).unwrap();

        let snapshot = session.board();
        let result = session.apply_move(0);
        assert!(matches!(result, Err(Error::InvalidMove { position: 0 })));
        assert_eq!(session.board(), snapshot);
    }

    #[test]
    fn test_user_move_gets_a_computer_reply() {
        let mut session = GameSession::new();
        session.choose_first_player(PlayerRole::User).unwrap();
        session.apply_move(0).unwrap();

        assert_eq!(session.board().get(0), Cell::X);
        assert_eq!(session.board().occupied_count(), 2);
        assert_eq!(session.moves(), 2);
        assert_eq!(session.current_player(), Some(PlayerRole::User));
        assert_eq!(session.status(), GameStatus::Playing);
    }

    #[test]
    fn test_reset_clears_a_game_in_progress() {
        let mut session = GameSession::new();
        session.choose_first_player(PlayerRole::Computer).unwrap();
        session.apply_move(0).unwrap();

        session.reset();
        assert_eq!(session.status(), GameStatus::NotStarted);
        assert_eq!(session.board(), Board::new());
        assert_eq!(session.moves(), 0);
        assert_eq!(session.first_player(), None);
    }
}
