//! Othello-Engine: an 8x8 Othello rules engine with three computer players.
//!
//! The crate holds the rules (legal moves, flipping, turn passing, end of
//! game) and three ways of choosing a move: a full-width alpha-beta search,
//! a cheaper move-ordered alpha-beta search, and Monte Carlo Tree Search
//! with UCT selection.
//!
//! ## Modules
//!
//! - [`constants`] - Board size, directions, square weights, search defaults
//! - [`board`] - Grid, colors, coordinates
//! - [`player`] - Per-color index of owned squares
//! - [`rules`] - Legal move generation and move application
//! - [`eval`] - Positional scoring
//! - [`minimax`] - Alpha-beta search
//! - [`heuristic`] - Move-ordered, depth-reduced alpha-beta search
//! - [`mcts`] - Monte Carlo Tree Search
//! - [`strategy`] - The `Strategy` trait and agent dispatch by name
//! - [`game`] - Validated play and the turn-skip rule
//! - [`config`] - Engine parameters
//! - [`console`] - Line-oriented command loop
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use othello_engine::board::{Color, str_coord};
//! use othello_engine::game::Game;
//! use othello_engine::minimax::MinimaxStrategy;
//!
//! // Start from the opening position, black to move
//! let mut game = Game::new(Color::Black, Color::White).unwrap();
//! assert_eq!(game.legal_moves().len(), 4);
//!
//! // Let a depth-2 search pick and play black's move
//! let mut strategy = MinimaxStrategy::new(2);
//! let mv = game.step(&mut strategy).unwrap().unwrap();
//! println!("Black plays {}", str_coord(mv.dest));
//! assert_eq!(game.turn(), Color::White);
//! ```

pub mod board;
pub mod config;
pub mod console;
pub mod constants;
pub mod error;
pub mod eval;
pub mod game;
pub mod heuristic;
pub mod mcts;
pub mod minimax;
pub mod player;
pub mod rules;
pub mod strategy;
