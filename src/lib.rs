//! Gakusei: an old-school heuristic Go engine.
//!
//! Moves are chosen by reading captures and ladders, matching 3x3 shapes and
//! weighing influence, then checking the most urgent candidates with a small
//! negamax search.
//!
//! ## Modules
//!
//! - [`constants`] - Size limits and heuristic weights
//! - [`board`] - Padded board storage
//! - [`group`] - Stone groups and liberties
//! - [`position`] - Game state and the capture/ko rules
//! - [`ladder`] - Ladder reading
//! - [`patterns`] - 3x3 pattern matching
//! - [`movegen`] - Urgency-ranked candidate moves
//! - [`search`] - Negamax with alpha-beta pruning
//! - [`engine`] - Facade used by front ends
//! - [`gtp`] - Go Text Protocol front end
//!
//! ## Example
//!
//! ```
//! use gakusei::board::Color;
//! use gakusei::config::EngineConfig;
//! use gakusei::engine::Engine;
//!
//! let mut engine = Engine::new(9, EngineConfig::default()).unwrap();
//! engine.play_move(4, 4, Color::Black).unwrap();
//!
//! // Search White's reply two plies deep
//! if let Some((col, row)) = engine.generate_move(Color::White, 2) {
//!     engine.play_move(col, row, Color::White).unwrap();
//! }
//! println!("{}", engine.render_board());
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod group;
pub mod gtp;
pub mod ladder;
pub mod movegen;
pub mod patterns;
pub mod position;
pub mod search;
