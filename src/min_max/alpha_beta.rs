use crate::min_max::stats::Stats;
use crate::min_max::{terminal_score, ScoredMove, Side};
use crate::ttt::{Board, Player};

/// Scores every empty cell for `player`, pruning with an (alpha, beta) window.
///
/// Each root candidate gets the full window, so the returned scores are exact and equal
/// to [`crate::min_max::score_moves`]; only the amount of work differs.
pub fn score_moves<S: Stats>(board: &Board, player: Player, stats: &mut S) -> Vec<ScoredMove> {
    board.empty_cells().map(|coord| {
        let next = board.with_mark(coord, player);
        let score = alpha_beta_eval(&next, player, Side::Min, 1, -i32::MAX, i32::MAX, stats);
        ScoredMove::new(score, coord)
    }).collect()
}

fn alpha_beta_eval<S: Stats>(board: &Board, player: Player, side: Side, depth: u8, mut alpha: i32, mut beta: i32, stats: &mut S) -> i32 {
    stats.record_node(depth);
    if let Some(score) = terminal_score(board, player) {
        return score;
    }

    let mover = side.mover(player);
    match side {
        Side::Max => {
            let mut max_score = -i32::MAX;
            for coord in board.empty_cells() {
                let score = alpha_beta_eval(&board.with_mark(coord, mover), player, Side::Min, depth + 1, alpha, beta, stats);
                max_score = max_score.max(score);
                alpha = alpha.max(max_score);
                if alpha >= beta {
                    stats.record_prune();
                    break;
                }
            }
            max_score
        }
        Side::Min => {
            let mut min_score = i32::MAX;
            for coord in board.empty_cells() {
                let score = alpha_beta_eval(&board.with_mark(coord, mover), player, Side::Max, depth + 1, alpha, beta, stats);
                min_score = min_score.min(score);
                beta = beta.min(min_score);
                if beta <= alpha {
                    stats.record_prune();
                    break;
                }
            }
            min_score
        }
    }
}
