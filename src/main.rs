mod cli;

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use itertools::Itertools;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ttt_solver::min_max::stats::SimpleStats;
use ttt_solver::min_max::{alpha_beta, best_moves, ScoreBoard};
use ttt_solver::{play_match, Board, Coord, Game, MoveStrategy, Outcome, Player, StrategyKind};

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    match Cli::parse().command {
        Command::Play { strategy, ai, two_player, seed } => {
            let computer = (!two_player).then(|| (ai, strategy.build(seed)));
            play_interactive(computer)
        }
        Command::SelfPlay { x, o, games, seed } => self_play(x, o, games, seed),
        Command::Analyze { board, player } => analyze(&board, player),
    }
}

fn play_interactive(mut computer: Option<(Player, Box<dyn MoveStrategy>)>) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut game = Game::new();

    while !game.outcome().is_finished() {
        println!("{}\n", game.board());
        match computer.as_mut() {
            Some((ai, strategy)) if *ai == game.current_player() => {
                let coord = game.play_turn(strategy.as_mut())?;
                println!("{} plays {}", ai, coord);
            }
            _ => {
                print!("{} to move (row col): ", game.current_player());
                io::stdout().flush().context("failed to flush stdout")?;
                let Some(line) = lines.next() else {
                    bail!("input closed before the game finished");
                };
                let line = line.context("failed to read move")?;
                if let Err(err) = parse_coord(&line).and_then(|coord| Ok(game.play(coord)?)) {
                    println!("{err}");
                }
            }
        }
    }

    println!("{}\n", game.board());
    match game.outcome() {
        Outcome::Won(player) => println!("Player {player} has won!"),
        _ => println!("The game is a draw!"),
    }
    Ok(())
}

fn parse_coord(line: &str) -> Result<Coord> {
    let Some((row, col)) = line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect_tuple()
    else {
        bail!("expected a row and a column, e.g. `1 2`");
    };
    let row = row.parse::<usize>().with_context(|| format!("invalid row {row:?}"))?;
    let col = col.parse::<usize>().with_context(|| format!("invalid column {col:?}"))?;
    Ok(Coord::new(row, col)?)
}

fn self_play(x: StrategyKind, o: StrategyKind, games: u32, seed: Option<u64>) -> Result<()> {
    let mut x_strategy = x.build(seed);
    let mut o_strategy = o.build(seed.map(|seed| seed.wrapping_add(1)));

    let outcomes = (0..games)
        .map(|_| play_match(x_strategy.as_mut(), o_strategy.as_mut()))
        .collect::<Result<Vec<_>, _>>()?;
    let tally = outcomes.into_iter().counts();
    let count = |outcome: Outcome| tally.get(&outcome).copied().unwrap_or(0);

    info!(%x, %o, games, "self-play finished");
    println!("X ({x}) wins: {}", count(Outcome::Won(Player::X)));
    println!("O ({o}) wins: {}", count(Outcome::Won(Player::O)));
    println!("draws: {}", count(Outcome::Draw));
    Ok(())
}

fn analyze(board: &Board, player: Option<Player>) -> Result<()> {
    println!("{board}\n");
    let outcome = board.status();
    if outcome.is_finished() {
        println!("position is finished: {outcome}");
        return Ok(());
    }

    let player = player.unwrap_or_else(|| board.next_player());
    let mut stats = SimpleStats::default();
    let scored_moves = alpha_beta::score_moves(board, player, &mut stats);
    println!("scores for {player}:\n{}\n", ScoreBoard::from(scored_moves.as_slice()));

    let best = best_moves(&scored_moves);
    if let Some(first) = best.first() {
        println!("best move: {} (score {})", first.coord, first.score);
    }
    if best.len() > 1 {
        println!("equally good: {}", best.iter().map(|m| m.coord).join(" "));
    }
    println!("searched {} positions, {} cutoffs", stats.nodes, stats.prunes);
    Ok(())
}
