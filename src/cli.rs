use clap::{Parser, Subcommand};

use ttt_solver::{Board, Player, StrategyKind};

/// Tic-tac-toe against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "ttt-solver", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal. X always opens.
    Play {
        /// How the computer picks its moves
        #[arg(short, long, value_enum, default_value_t = StrategyKind::AlphaBeta)]
        strategy: StrategyKind,

        /// Which mark the computer plays
        #[arg(long, value_enum, default_value_t = Player::O)]
        ai: Player,

        /// Two humans share the terminal, no computer player
        #[arg(long, conflicts_with_all = ["strategy", "ai"])]
        two_player: bool,

        /// Seed for the random strategy
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Let two strategies play each other and print the tally
    SelfPlay {
        #[arg(short = 'x', long = "x", value_enum, default_value_t = StrategyKind::AlphaBeta)]
        x: StrategyKind,

        #[arg(short = 'o', long = "o", value_enum, default_value_t = StrategyKind::AlphaBeta)]
        o: StrategyKind,

        /// Number of games to play
        #[arg(short, long, default_value_t = 1)]
        games: u32,

        /// Seed for random strategies; O uses seed + 1
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Score every empty cell of a position
    Analyze {
        /// Nine cells in row-major order using X, O and `.`, e.g. `XO./.X./...`
        board: Board,

        /// Player to score moves for, defaults to whoever is to move
        #[arg(short, long, value_enum)]
        player: Option<Player>,
    },
}
