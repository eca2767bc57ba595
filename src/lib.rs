//! game-2048: the board engine and interaction shell for the 2048 sliding-tile puzzle
//!
//! This crate provides:
//! - A `Board` value type with pure operations (`rotate_left`, `shift`, `is_stuck`, ...)
//!   and free functions mirroring them (`engine::shift`, `engine::spawn_value`, ...)
//! - A `shell::Game` that owns the current board, maps key tokens to directions and
//!   applies the accept-then-spawn rule
//!
//! Quick start:
//! ```
//! use game_2048::engine::{self as GameEngine, Board, Direction};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! // Deterministic board initialization with a seeded RNG
//! let mut rng = StdRng::seed_from_u64(42);
//! let b0 = Board::new_game(&mut rng);
//! let b1 = GameEngine::shift(b0, Direction::Left);
//! assert_eq!(b1.sum(), b0.sum());
//! if !GameEngine::boards_equal(&b0, &b1) {
//!     let b2 = b1.spawn_value(&mut rng);
//!     assert_eq!(b2.count_empty(), 14);
//! }
//! ```
//!
//! Note: the free function `engine::spawn_value` uses thread-local RNG.
//! Prefer `Board::spawn_value(&mut rng)` when you need determinism.
//!
pub mod engine;
pub mod shell;
