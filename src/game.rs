//! Turn handling around a single board: who moves, whether the game is over.

use tracing::{info, instrument};

use crate::strategy::MoveStrategy;
use crate::ttt::{Board, BoardError, Coord, Outcome, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GameError {
    #[display("{_0}")]
    Board(BoardError),

    #[display("game is already over: {_0}")]
    Finished(Outcome),

    #[display("strategy proposed no move on an unfinished board")]
    NoMoveAvailable,
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Board(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Game {
    board: Board,
    current: Player,
    outcome: Outcome,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Empty board, X to move.
    pub fn new() -> Self {
        Self::from_board(Board::empty())
    }

    /// Continues from an existing position; the player to move is inferred from the mark counts.
    pub fn from_board(board: Board) -> Self {
        Self { board, current: board.next_player(), outcome: board.status() }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Marks `coord` for the player to move and hands the turn over.
    #[instrument(level = "debug", skip(self), fields(player = %self.current))]
    pub fn play(&mut self, coord: Coord) -> Result<Outcome, GameError> {
        if self.outcome.is_finished() {
            return Err(GameError::Finished(self.outcome));
        }
        self.board.place(coord, self.current)?;
        self.outcome = self.board.status();
        if self.outcome.is_finished() {
            info!(outcome = %self.outcome, "game finished");
        } else {
            self.current = !self.current;
        }
        Ok(self.outcome)
    }

    /// Lets `strategy` move for the current player and returns the cell it marked.
    #[instrument(level = "debug", skip(self, strategy), fields(player = %self.current))]
    pub fn play_turn(&mut self, strategy: &mut dyn MoveStrategy) -> Result<Coord, GameError> {
        if self.outcome.is_finished() {
            return Err(GameError::Finished(self.outcome));
        }
        let coord = strategy.propose_move(&self.board, self.current).ok_or(GameError::NoMoveAvailable)?;
        self.play(coord)?;
        Ok(coord)
    }
}

/// Plays one game from the empty board, `x` opening.
#[instrument(level = "debug", skip_all)]
pub fn play_match(x: &mut dyn MoveStrategy, o: &mut dyn MoveStrategy) -> Result<Outcome, GameError> {
    let mut game = Game::new();
    while !game.outcome().is_finished() {
        match game.current_player() {
            Player::X => game.play_turn(x)?,
            Player::O => game.play_turn(o)?,
        };
    }
    Ok(game.outcome())
}
