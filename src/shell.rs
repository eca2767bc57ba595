//! Interaction shell: owns the current board and turns input into moves.
//!
//! This is the UI-independent half of a front end. It maps raw key tokens to
//! [`Direction`]s, asks the engine for the next board, accepts the move only if
//! the board changed, and spawns a tile on acceptance. Rendering and reading
//! input stay with the caller (see `src/main.rs` for a terminal front end).
//!
//! ```
//! use game_2048::engine::Board;
//! use game_2048::shell::{Game, Outcome};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let start: Board = "2 0 0 0  0 0 0 0  0 0 0 0  0 0 0 0".parse().unwrap();
//! let mut game = Game::with_board(start, StdRng::seed_from_u64(42));
//! assert_eq!(game.handle("ArrowLeft"), Outcome::Unchanged);
//! assert_eq!(game.handle("Escape"), Outcome::Ignored);
//! assert_eq!(game.handle("ArrowRight"), Outcome::Moved);
//! assert_eq!(game.board().count_empty(), 14);
//! ```

use crate::engine::{self as GameEngine, Board, Direction};
use log::{debug, info};
use rand::Rng;

/// What happened to one input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The board changed and a tile was spawned.
    Moved,
    /// The direction was valid but nothing could slide or merge.
    Unchanged,
    /// The token is not a direction.
    Ignored,
}

/// Map a raw key token to a direction.
///
/// Accepts browser/terminal arrow names (`ArrowUp`, ...), plain words
/// (`up`, ...), WASD and vi keys. Everything else is `None`.
pub fn key_to_direction(token: &str) -> Option<Direction> {
    let dir = match token {
        "ArrowUp" | "w" | "W" | "k" | "K" => Direction::Up,
        "ArrowDown" | "s" | "S" | "j" | "J" => Direction::Down,
        "ArrowLeft" | "a" | "A" | "h" | "H" => Direction::Left,
        "ArrowRight" | "d" | "D" | "l" | "L" => Direction::Right,
        _ => return token.parse().ok(),
    };
    Some(dir)
}

/// A running game: the single piece of mutable state in the system.
#[derive(Debug, Clone)]
pub struct Game<R> {
    board: Board,
    rng: R,
    moves: u64,
    // Refreshed whenever `board` is replaced.
    stuck: bool,
}

impl<R: Rng> Game<R> {
    /// Start a fresh game: an empty board with one spawned tile.
    pub fn new(mut rng: R) -> Self {
        let board = Board::new_game(&mut rng);
        debug!("new game:\n{}", board);
        Game::with_board(board, rng)
    }

    /// Resume from an existing board.
    pub fn with_board(board: Board, rng: R) -> Self {
        let stuck = GameEngine::is_stuck(board);
        Game { board, rng, moves: 0, stuck }
    }

    /// Apply one move. The stored board is replaced only when the move is accepted.
    pub fn apply(&mut self, direction: Direction) -> Outcome {
        let shifted = GameEngine::shift(self.board, direction);
        if GameEngine::boards_equal(&self.board, &shifted) {
            debug!("move {} rejected: board unchanged", direction);
            return Outcome::Unchanged;
        }
        self.board = shifted.spawn_value(&mut self.rng);
        self.moves += 1;
        debug!("move {} accepted ({} so far)", direction, self.moves);
        self.stuck = GameEngine::is_stuck(self.board);
        if self.stuck {
            info!("no moves left after {} moves", self.moves);
        }
        Outcome::Moved
    }

    /// Map a raw key token and apply it.
    pub fn handle(&mut self, token: &str) -> Outcome {
        match key_to_direction(token) {
            Some(direction) => self.apply(direction),
            None => {
                debug!("ignoring input {:?}", token);
                Outcome::Ignored
            }
        }
    }
}

impl<R> Game<R> {
    pub fn board(&self) -> Board {
        self.board
    }

    /// Number of accepted moves.
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Whether no direction can change the current board.
    #[inline]
    pub fn is_stuck(&self) -> bool {
        self.stuck
    }

    /// The board grid, followed by a `:(` line once the game is stuck.
    pub fn render(&self) -> String {
        let mut out = self.board.to_string();
        if self.stuck {
            out.push_str(":(\n");
        }
        out
    }
}
