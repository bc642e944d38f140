//! Move selection for the computer-controlled player.

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use strum_macros::EnumIter;
use tracing::{debug, instrument};

use crate::min_max;
use crate::min_max::alpha_beta;
use crate::min_max::stats::SimpleStats;
use crate::ttt::{Board, Coord, Player};

pub trait MoveStrategy: Send {
    /// Picks a cell for `player` to mark, or `None` if the board is full.
    /// The board is only read; strategies keep no state about it between calls.
    fn propose_move(&mut self, board: &Board, player: Player) -> Option<Coord>;
}

/// Uniformly random empty cell.
#[derive(Debug, Clone)]
pub struct RandomStrategy<R: Rng = StdRng> {
    rng: R,
}

impl<R: Rng> RandomStrategy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomStrategy<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send> MoveStrategy for RandomStrategy<R> {
    #[instrument(level = "debug", skip(self, board))]
    fn propose_move(&mut self, board: &Board, player: Player) -> Option<Coord> {
        let candidates = board.empty_cells().collect_vec();
        let chosen = candidates.choose(&mut self.rng).copied();
        debug!(candidates = candidates.len(), ?chosen, "random move");
        chosen
    }
}

/// Full minimax, never prunes.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinimaxStrategy;

impl MoveStrategy for MinimaxStrategy {
    #[instrument(level = "debug", skip(self, board))]
    fn propose_move(&mut self, board: &Board, player: Player) -> Option<Coord> {
        let mut stats = SimpleStats::default();
        let scored_moves = min_max::score_moves(board, player, &mut stats);
        let chosen = min_max::best_move(&scored_moves).copied();
        debug!(nodes = stats.nodes, max_depth = stats.max_depth, ?chosen, "minimax search finished");
        chosen.map(|m| m.coord)
    }
}

/// Minimax with alpha-beta pruning. Picks the same moves as [`MinimaxStrategy`].
#[derive(Debug, Default, Clone, Copy)]
pub struct AlphaBetaStrategy;

impl MoveStrategy for AlphaBetaStrategy {
    #[instrument(level = "debug", skip(self, board))]
    fn propose_move(&mut self, board: &Board, player: Player) -> Option<Coord> {
        let mut stats = SimpleStats::default();
        let scored_moves = alpha_beta::score_moves(board, player, &mut stats);
        let chosen = min_max::best_move(&scored_moves).copied();
        debug!(nodes = stats.nodes, prunes = stats.prunes, max_depth = stats.max_depth, ?chosen, "alpha-beta search finished");
        chosen.map(|m| m.coord)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, EnumIter, strum_macros::Display, clap::ValueEnum)]
#[strum(serialize_all = "kebab-case")]
pub enum StrategyKind {
    Random,
    Minimax,
    AlphaBeta,
}

impl StrategyKind {
    /// `seed` only affects [`StrategyKind::Random`]; without one it draws from OS entropy.
    pub fn build(self, seed: Option<u64>) -> Box<dyn MoveStrategy> {
        match self {
            StrategyKind::Random => match seed {
                Some(seed) => Box::new(RandomStrategy::seeded(seed)),
                None => Box::new(RandomStrategy::from_entropy()),
            },
            StrategyKind::Minimax => Box::new(MinimaxStrategy),
            StrategyKind::AlphaBeta => Box::new(AlphaBetaStrategy),
        }
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use strum::IntoEnumIterator;

    use crate::strategy::{AlphaBetaStrategy, MinimaxStrategy, MoveStrategy, RandomStrategy, StrategyKind};
    use crate::ttt::{Board, Coord, Player};

    fn coord(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn full_board_has_no_move() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        for kind in StrategyKind::iter() {
            let mut strategy = kind.build(Some(7));
            for player in [Player::X, Player::O] {
                assert_eq!(strategy.propose_move(&board, player), None, "{kind}");
            }
        }
    }

    #[test]
    fn single_empty_cell_is_always_chosen() {
        let board: Board = "XOX/O.O/XOX".parse().unwrap();
        for seed in 0..32 {
            let mut strategy = RandomStrategy::seeded(seed);
            assert_eq!(strategy.propose_move(&board, Player::X), Some(coord(1, 1)));
        }
        for kind in StrategyKind::iter() {
            assert_eq!(kind.build(None).propose_move(&board, Player::X), Some(coord(1, 1)), "{kind}");
        }
    }

    #[test]
    fn random_only_picks_empty_cells() {
        let board: Board = "X.O/.X./O..".parse().unwrap();
        let empty = board.empty_cells().collect::<HashSet<_>>();
        let mut strategy = RandomStrategy::new(StdRng::seed_from_u64(3));

        let chosen = (0..500)
            .map(|_| strategy.propose_move(&board, Player::O).unwrap())
            .collect::<HashSet<_>>();
        assert_eq!(chosen, empty);
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let board = Board::empty();
        let mut first = RandomStrategy::seeded(42);
        let mut second = RandomStrategy::seeded(42);
        for _ in 0..20 {
            assert_eq!(first.propose_move(&board, Player::X), second.propose_move(&board, Player::X));
        }
    }

    #[test]
    fn board_is_untouched_by_search() {
        let boards = ["...../....", "X...O....", "XO.XO..X.", "XX./OO./..."];
        for text in boards {
            let board: Board = text.parse().unwrap();
            let before = board;
            for kind in StrategyKind::iter() {
                let mut strategy = kind.build(Some(1));
                strategy.propose_move(&board, board.next_player());
                assert_eq!(board, before, "{kind} on\n{board}");
            }
        }
    }

    #[test]
    fn searches_agree() {
        let boards = [".........", "....X....", "X........", "X...O....", "XO..X....", "X.O.O.X.."];
        for text in boards {
            let board: Board = text.parse().unwrap();
            let player = board.next_player();
            assert_eq!(MinimaxStrategy.propose_move(&board, player), AlphaBetaStrategy.propose_move(&board, player), "{text}");
        }
    }

    #[test]
    fn minimax_blocks() {
        let board: Board = ".../OO./X..".parse().unwrap();
        assert_eq!(MinimaxStrategy.propose_move(&board, Player::X), Some(coord(1, 2)));

        let board: Board = "XX./.../...".parse().unwrap();
        assert_eq!(MinimaxStrategy.propose_move(&board, Player::X), Some(coord(0, 2)));
    }

    #[test]
    fn kind_names() {
        assert_eq!(StrategyKind::AlphaBeta.to_string(), "alpha-beta");
        assert_eq!(StrategyKind::iter().count(), 3);
    }
}
