//! Game session with move history.
//!
//! [`Game`] is the string-facing entry point: squares and moves arrive as
//! algebraic text, positions leave as FEN.

use peerchess_core::{FenError, Move, MoveParseError, Piece, Square, SquareError};
use thiserror::Error;
use tracing::debug;

use crate::movegen::{self, MoveError};
use crate::Position;

/// Errors returned by [`Game`] operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Square(#[from] SquareError),

    #[error(transparent)]
    MoveParse(#[from] MoveParseError),

    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    Fen(#[from] FenError),

    #[error("no move to undo")]
    NothingToUndo,
}

/// A move played in the game together with the position it was played from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMove {
    pub mov: Move,
    pub before: Position,
}

/// A game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    start_pos: Position,
    position: Position,
    history: Vec<GameMove>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position.
    pub fn new() -> Self {
        Self::from_position(Position::startpos())
    }

    /// Creates a game starting from `position`.
    pub fn from_position(position: Position) -> Self {
        Game {
            start_pos: position.clone(),
            position,
            history: Vec::new(),
        }
    }

    /// Creates a game from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, GameError> {
        Ok(Self::from_position(Position::from_fen(fen)?))
    }

    /// Returns a reference to the current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns the starting position.
    pub fn start_position(&self) -> &Position {
        &self.start_pos
    }

    /// Returns the moves played so far, oldest first.
    pub fn move_history(&self) -> &[GameMove] {
        &self.history
    }

    /// Returns the number of plies played.
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// Returns the current position as FEN.
    pub fn to_fen(&self) -> String {
        self.position.to_fen()
    }

    /// Lists the squares the piece on `square` can move to, in ascending
    /// bit-index order (h1 first, a8 last).
    pub fn find_moves(&self, square: &str) -> Result<Vec<String>, GameError> {
        let sq: Square = square.parse()?;
        let targets = movegen::destinations(&self.position, sq)?;
        Ok(targets.into_iter().map(Square::to_algebraic).collect())
    }

    /// Returns true if moving `from` -> `to` is a pawn reaching its last rank.
    pub fn needs_promotion(&self, from: &str, to: &str) -> Result<bool, GameError> {
        let from: Square = from.parse()?;
        let to: Square = to.parse()?;
        Ok(movegen::is_promotion(&self.position, from, to))
    }

    /// Plays `from` -> `to` and returns the resulting FEN.
    pub fn make_move(
        &mut self,
        from: &str,
        to: &str,
        promotion: Option<Piece>,
    ) -> Result<String, GameError> {
        let m = Move {
            from: from.parse()?,
            to: to.parse()?,
            promotion,
        };
        self.apply(m)
    }

    /// Plays a move given in coordinate notation (e.g., "e2e4", "e7e8q").
    pub fn make_move_uci(&mut self, uci: &str) -> Result<String, GameError> {
        let m: Move = uci.parse()?;
        self.apply(m)
    }

    /// Takes back the last move and returns the restored FEN.
    pub fn undo(&mut self) -> Result<String, GameError> {
        let last = self.history.pop().ok_or(GameError::NothingToUndo)?;
        self.position = last.before;
        let fen = self.position.to_fen();
        debug!(mov = %last.mov, fen = %fen, "move undone");
        Ok(fen)
    }

    fn apply(&mut self, m: Move) -> Result<String, GameError> {
        match movegen::make_move(&self.position, m) {
            Ok(next) => {
                let before = std::mem::replace(&mut self.position, next);
                self.history.push(GameMove { mov: m, before });
                let fen = self.position.to_fen();
                debug!(mov = %m, fen = %fen, "move applied");
                Ok(fen)
            }
            Err(error) => {
                debug!(mov = %m, error = %error, "move rejected");
                Err(error.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peerchess_core::{Color, FenParser};

    #[test]
    fn new_game() {
        let game = Game::new();
        assert_eq!(game.to_fen(), FenParser::STARTPOS);
        assert_eq!(game.ply_count(), 0);
        assert_eq!(game.position(), game.start_position());
    }

    #[test]
    fn find_moves_lists_destinations() {
        let game = Game::new();
        assert_eq!(game.find_moves("e2").unwrap(), vec!["e3", "e4"]);
        assert_eq!(game.find_moves("g1").unwrap(), vec!["h3", "f3"]);
        assert!(game.find_moves("c1").unwrap().is_empty());
        assert_eq!(game.find_moves("e7").unwrap(), vec!["e5", "e6"]);
    }

    #[test]
    fn find_moves_errors() {
        let game = Game::new();
        assert_eq!(
            game.find_moves("e4"),
            Err(GameError::Move(MoveError::EmptySquare(Square::from_algebraic("e4").unwrap())))
        );
        assert!(matches!(game.find_moves("z9"), Err(GameError::Square(_))));
        assert!(matches!(game.find_moves("e"), Err(GameError::Square(_))));
    }

    #[test]
    fn make_move_returns_fen() {
        let mut game = Game::new();
        let fen = game.make_move("e2", "e4", None).unwrap();
        assert_eq!(
            fen,
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
        assert_eq!(game.ply_count(), 1);
        assert_eq!(game.position().side_to_move, Color::Black);
    }

    #[test]
    fn make_move_uci() {
        let mut game = Game::new();
        game.make_move_uci("e2e4").unwrap();
        game.make_move_uci("e7e5").unwrap();
        let fen = game.make_move_uci("g1f3").unwrap();
        assert_eq!(
            fen,
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
        );
        let played: Vec<String> = game.move_history().iter().map(|g| g.mov.to_uci()).collect();
        assert_eq!(played, vec!["e2e4", "e7e5", "g1f3"]);
    }

    #[test]
    fn rejected_move_leaves_game_unchanged() {
        let mut game = Game::new();
        assert!(matches!(
            game.make_move_uci("e2e5"),
            Err(GameError::Move(MoveError::IllegalDestination { .. }))
        ));
        assert!(matches!(
            game.make_move_uci("e7e5"),
            Err(GameError::Move(MoveError::NotYourTurn { .. }))
        ));
        assert!(matches!(game.make_move_uci("e2"), Err(GameError::MoveParse(_))));
        assert_eq!(game.to_fen(), FenParser::STARTPOS);
        assert_eq!(game.ply_count(), 0);
    }

    #[test]
    fn undo_restores_previous_position() {
        let mut game = Game::new();
        game.make_move_uci("e2e4").unwrap();
        let after_e4 = game.to_fen();
        game.make_move_uci("c7c5").unwrap();

        assert_eq!(game.undo().unwrap(), after_e4);
        assert_eq!(game.undo().unwrap(), FenParser::STARTPOS);
        assert_eq!(game.undo(), Err(GameError::NothingToUndo));
        assert_eq!(game.ply_count(), 0);
    }

    #[test]
    fn promotion_flow() {
        let mut game = Game::from_fen("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(game.needs_promotion("b7", "b8").unwrap());
        assert!(!game.needs_promotion("e1", "e2").unwrap());
        assert!(matches!(
            game.make_move("b7", "b8", None),
            Err(GameError::Move(MoveError::MissingPromotion(_)))
        ));
        let fen = game.make_move("b7", "b8", Some(Piece::Queen)).unwrap();
        assert_eq!(fen, "1Q2k3/8/8/8/8/8/8/4K3 b - - 0 1");
    }

    #[test]
    fn from_fen_rejects_bad_input() {
        assert!(matches!(Game::from_fen("not a fen"), Err(GameError::Fen(_))));
    }
}
