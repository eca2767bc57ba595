use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use game_2048::engine::Board;
use game_2048::shell::{Game, Outcome};
use log::warn;
use rand::{rngs::StdRng, SeedableRng};
use std::io::{self, BufRead, Write};

#[derive(Debug, Parser)]
#[command(
    name = "game-2048",
    about = "Play 2048 in the terminal. Enter moves as arrows/words/WASD/hjkl, q to quit."
)]
struct Args {
    /// Seed for a reproducible game (default: OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Start from this board: 16 whitespace-separated values, 0 or . for empty
    #[arg(long, value_name = "CELLS")]
    board: Option<String>,

    /// Stop after this many accepted moves
    #[arg(long, value_name = "N")]
    max_moves: Option<u64>,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = match &args.board {
        Some(cells) => {
            let board: Board = cells.parse().context("invalid --board")?;
            Game::with_board(board, rng)
        }
        None => Game::new(rng),
    };

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", game.render())?;
    stdout.flush()?;
    if !game.is_stuck() {
        play(&mut game, args.max_moves, io::stdin().lock(), &mut stdout)?;
    }

    let highest = game.board().highest_tile().map_or(0, |t| t.value());
    writeln!(stdout, "Moves made: {}, highest tile: {}", game.moves(), highest)?;
    Ok(())
}

fn play<R: rand::Rng>(
    game: &mut Game<R>,
    max_moves: Option<u64>,
    input: impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let limit_reached = |game: &Game<R>| max_moves.is_some_and(|limit| game.moves() >= limit);
    for line in input.lines() {
        let line = line.context("failed to read input")?;
        for token in line.split_whitespace() {
            if matches!(token, "q" | "quit" | "exit") || limit_reached(&*game) {
                return Ok(());
            }
            match game.handle(token) {
                Outcome::Moved => {
                    writeln!(out)?;
                    write!(out, "{}", game.render())?;
                }
                Outcome::Unchanged => {}
                Outcome::Ignored => warn!("unrecognized input {:?}", token),
            }
            if game.is_stuck() || limit_reached(&*game) {
                return Ok(());
            }
        }
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_play_reads_tokens_until_quit() {
        let board: Board = "2 0 0 0  0 0 0 0  0 0 0 0  0 0 0 0".parse().unwrap();
        let mut game = Game::with_board(board, StdRng::seed_from_u64(3));
        let mut out = Vec::new();
        let input = Cursor::new("ArrowLeft foo\nArrowRight\nq\nArrowUp\n");
        play(&mut game, None, input, &mut out).unwrap();
        assert_eq!(game.moves(), 1);
        assert!(String::from_utf8(out).unwrap().contains("|   2   "));
    }

    #[test]
    fn test_play_respects_max_moves() {
        let mut game = Game::new(StdRng::seed_from_u64(9));
        let mut out = Vec::new();
        let input = Cursor::new("a w d s a w d s a w d s a w d s\n".repeat(10));
        play(&mut game, Some(3), input, &mut out).unwrap();
        assert_eq!(game.moves(), 3);
    }

    #[test]
    fn test_play_max_moves_zero() {
        let start = Board::new_game(&mut StdRng::seed_from_u64(9));
        let mut game = Game::with_board(start, StdRng::seed_from_u64(9));
        let mut out = Vec::new();
        play(&mut game, Some(0), Cursor::new("a w d s a w d s\n"), &mut out).unwrap();
        assert_eq!(game.moves(), 0);
        assert_eq!(game.board(), start);
        assert!(out.is_empty());
    }
}
