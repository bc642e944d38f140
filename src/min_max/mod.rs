//! Exhaustive game-tree search over the 3x3 board.
//!
//! Scores are always from the point of view of the player the search was started for:
//! `1` when that player can force a win, `-1` when the opponent can, `0` for a draw.
//! The root player maximizes, the opponent minimizes. Every ply works on a copy of the
//! board, so the caller's board is never touched.

pub mod alpha_beta;
pub mod stats;

use std::fmt;
use std::ops::Not;

use itertools::Itertools;

use crate::min_max::stats::Stats;
use crate::ttt::{Board, Coord, Player};

pub const WIN: i32 = 1;
pub const DRAW: i32 = 0;
pub const LOSS: i32 = -1;

#[derive(Eq, PartialEq, Hash)]
#[derive(Debug, Copy, Clone)]
pub enum Side {
    Min,
    Max,
}

impl Not for Side {
    type Output = Side;

    fn not(self) -> Side {
        match self {
            Side::Min => Side::Max,
            Side::Max => Side::Min,
        }
    }
}

impl Side {
    /// Who places a mark on this ply when `root` is the maximizing player.
    pub fn mover(self, root: Player) -> Player {
        match self {
            Side::Max => root,
            Side::Min => !root,
        }
    }
}

#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub struct ScoredMove {
    pub score: i32,
    pub coord: Coord,
}

impl ScoredMove {
    pub fn new(score: i32, coord: Coord) -> ScoredMove {
        ScoredMove { score, coord }
    }
}

/// Score of a finished position for `player`, `None` while the game goes on.
pub(crate) fn terminal_score(board: &Board, player: Player) -> Option<i32> {
    if board.has_won(player) {
        Some(WIN)
    } else if board.has_won(!player) {
        Some(LOSS)
    } else if board.is_full() {
        Some(DRAW)
    } else {
        None
    }
}

/// Scores every empty cell for `player` with a full minimax search, in row-major order.
pub fn score_moves<S: Stats>(board: &Board, player: Player, stats: &mut S) -> Vec<ScoredMove> {
    board.empty_cells().map(|coord| {
        let next = board.with_mark(coord, player);
        let score = minimax_eval(&next, player, Side::Min, 1, stats);
        ScoredMove::new(score, coord)
    }).collect()
}

fn minimax_eval<S: Stats>(board: &Board, player: Player, side: Side, depth: u8, stats: &mut S) -> i32 {
    stats.record_node(depth);
    if let Some(score) = terminal_score(board, player) {
        return score;
    }

    let mover = side.mover(player);
    let children = board.empty_cells().map(|coord| {
        minimax_eval(&board.with_mark(coord, mover), player, !side, depth + 1, stats)
    });
    match side {
        Side::Max => children.fold(-i32::MAX, i32::max),
        Side::Min => children.fold(i32::MAX, i32::min),
    }
}

/// All moves sharing the highest score, in the order they were scored.
pub fn best_moves(scored_moves: &[ScoredMove]) -> Vec<&ScoredMove> {
    scored_moves.iter().max_set_by_key(|m| m.score)
}

/// The first move with the highest score; earlier cells win ties.
pub fn best_move(scored_moves: &[ScoredMove]) -> Option<&ScoredMove> {
    best_moves(scored_moves).into_iter().next()
}

/// Per-cell root scores laid out on the board, occupied cells left blank.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ScoreBoard([Option<i32>; 9]);

impl ScoreBoard {
    pub fn get(&self, coord: Coord) -> Option<i32> {
        self.0[coord.index()]
    }
}

impl From<&[ScoredMove]> for ScoreBoard {
    fn from(scored_moves: &[ScoredMove]) -> Self {
        let mut scores = [None; 9];
        for m in scored_moves {
            scores[m.coord.index()] = Some(m.score);
        }
        ScoreBoard(scores)
    }
}

impl fmt::Display for ScoreBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.0.chunks(3).map(|row| {
            row.iter().map(|score| match score {
                Some(score) => format!("{:>3}", score),
                None => format!("{:>3}", "."),
            }).join(",")
        }).join("\n");
        f.write_str(&rows)
    }
}
