//! Constants for board geometry, move urgencies and evaluation weights.
//!
//! The board size is chosen at runtime (see [`crate::position::Position::new`]),
//! so only the accepted range lives here. Everything else is a tuning weight
//! for the heuristics in [`crate::movegen`] and [`crate::search`].

// =============================================================================
// Board Geometry
// =============================================================================

/// Smallest playable board (a 3x3 interior still fits one pattern window).
pub const MIN_SIZE: usize = 3;

/// Largest playable board (letters A-Z without I).
pub const MAX_SIZE: usize = 25;

/// Board size used when nothing else is requested.
pub const DEFAULT_SIZE: usize = 9;

// =============================================================================
// Search Parameters
// =============================================================================

/// Default search depth in plies.
pub const DEFAULT_DEPTH: usize = 2;

/// Default recursion cap for the ladder reader.
pub const LADDER_MAX_DEPTH: usize = 200;

/// Bound larger than any reachable evaluation.
pub const INFINITY: i32 = 1_000_000;

// =============================================================================
// Evaluation
// =============================================================================

/// Material value of a single stone.
pub const STONE_VALUE: i32 = 100;

// =============================================================================
// Candidate Urgencies
// =============================================================================

/// Bonus for a move that captures a group in atari.
pub const CAPTURE_BONUS: i32 = 1000;

/// Per-stone scale applied to the stones/liberties ratio of a target group.
pub const CAPTURE_SCALE: i32 = 10;

/// Bonus for a move that saves an own group from atari.
pub const SAVE_BONUS: i32 = 800;

/// Urgency lost per line of distance between a saving move and the centre.
pub const SAVE_DISTANCE_PENALTY: i32 = 10;

/// Bonus for a move that starts a working ladder.
pub const LADDER_BONUS: i32 = 700;

/// Bonus for extending an own group that is down to two liberties.
pub const EXTEND_BONUS: i32 = 300;

/// Bonus for reducing an opposing two-liberty group that escapes the ladder.
pub const SURROUND_BONUS: i32 = 250;

/// Base urgency of a pattern match.
pub const PATTERN_BASE: i32 = 100;

/// Urgency added per stone in a matched pattern.
pub const PATTERN_STONE_WEIGHT: i32 = 8;

/// Weights of empty points by Manhattan distance 0..=3 from a big-move candidate.
pub const INFLUENCE_WEIGHTS: [i32; 4] = [8, 4, 2, 1];

/// Bonus for star points.
pub const STAR_BONUS: i32 = 20;

/// Bonus for points next to (or diagonal to) a star point.
pub const NEAR_STAR_BONUS: i32 = 10;

/// Bonus for third and fourth line points.
pub const LINE_BONUS: i32 = 5;
