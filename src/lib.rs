//! Tic-tac-toe with a computer opponent that picks moves by random choice,
//! full minimax or alpha-beta pruned minimax.

pub mod game;
pub mod min_max;
pub mod strategy;
pub mod ttt;

pub use game::{play_match, Game, GameError};
pub use strategy::{AlphaBetaStrategy, MinimaxStrategy, MoveStrategy, RandomStrategy, StrategyKind};
pub use ttt::{Board, BoardError, Cell, Coord, Outcome, Player};
