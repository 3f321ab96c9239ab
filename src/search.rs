//! Fixed-depth negamax with alpha-beta pruning.
//!
//! The branching set at every node is the ranked candidate list from
//! [`crate::movegen::generate`]; its order is the move ordering. Each child is
//! explored on its own clone of the parent position, so siblings never see
//! each other's stones and the caller's position is never modified.

use log::{debug, trace};

use crate::board::{Board, Cell, Color, Point};
use crate::config::EngineConfig;
use crate::constants::{INFINITY, STONE_VALUE};
use crate::movegen::generate;
use crate::position::Position;

/// Result of a root search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` means pass
    pub best_move: Option<Point>,
    /// Score of the best move for the searching side
    pub score: i32,
    /// Nodes visited
    pub nodes: u64,
}

/// Static evaluation from the point of view of the side to move.
///
/// Black stones count `STONE_VALUE + influence`, White stones count
/// `STONE_VALUE - influence`. The White term rewards Black for White's
/// breathing room; this asymmetry is deliberate and covered by tests.
pub fn evaluate(pos: &Position) -> i32 {
    let board = pos.board();
    let mut score = 0;
    for pt in board.points() {
        match board.get(pt) {
            Cell::Black => score += STONE_VALUE + stone_influence(board, pt),
            Cell::White => score -= STONE_VALUE - stone_influence(board, pt),
            Cell::Empty | Cell::Edge => {}
        }
    }
    if pos.side == Color::White { -score } else { score }
}

/// Empty orthogonal neighbours of a stone.
fn stone_influence(board: &Board, pt: Point) -> i32 {
    board
        .neighbors(pt)
        .iter()
        .filter(|&&n| board.get(n) == Cell::Empty)
        .count() as i32
}

pub struct Searcher<'a> {
    config: &'a EngineConfig,
    nodes: u64,
}

impl<'a> Searcher<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config, nodes: 0 }
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Negamax score of `pos` for the side to move, fail-hard within
    /// `[alpha, beta]`.
    ///
    /// A node without candidates stands pat and returns `alpha` unchanged.
    pub fn negamax(&mut self, pos: &Position, depth: usize, mut alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;
        if depth == 0 {
            return evaluate(pos);
        }

        let color = pos.side;
        for candidate in generate(pos, color, self.config) {
            let mut child = pos.clone();
            if child.apply_move(candidate.point, color).is_err() {
                continue;
            }
            let score = -self.negamax(&child, depth - 1, -beta, -alpha);
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                trace!("cutoff at depth {depth} after {}", candidate.point);
                break;
            }
        }
        alpha
    }

    /// Search every candidate of `color` to `depth` plies and return the best.
    ///
    /// The root keeps a full window (no beta cutoff) and a depth of 0 is
    /// searched as 1.
    ///
    /// A reply position without candidates stands pat on the root's open
    /// bound, so a move that leaves the opponent nothing to play scores
    /// `INFINITY` and beats every material line.
    pub fn root_search(&mut self, pos: &Position, depth: usize, color: Color) -> SearchResult {
        let mut root = pos.clone();
        root.side = color;
        let depth = depth.max(1);

        let mut best_move = None;
        let mut best_score = -INFINITY;
        let mut alpha = -INFINITY;

        for candidate in generate(&root, color, self.config) {
            let mut child = root.clone();
            if child.apply_move(candidate.point, color).is_err() {
                continue;
            }
            let score = -self.negamax(&child, depth - 1, -INFINITY, -alpha);
            debug!(
                "root {} {} urgency {} score {}",
                candidate.point, candidate.category, candidate.urgency, score
            );
            if best_move.is_none() || score > best_score {
                best_move = Some(candidate.point);
                best_score = score;
            }
            alpha = alpha.max(score);
        }

        if best_move.is_none() {
            best_score = evaluate(&root);
        }
        SearchResult {
            best_move,
            score: best_score,
            nodes: self.nodes,
        }
    }
}

/// Convenience wrapper: root search with a fresh node counter.
pub fn root_search(
    pos: &Position,
    depth: usize,
    color: Color,
    config: &EngineConfig,
) -> SearchResult {
    Searcher::new(config).root_search(pos, depth, color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_empty_is_zero() {
        let pos = Position::new(9).unwrap();
        assert_eq!(evaluate(&pos), 0);
    }

    #[test]
    fn test_evaluate_asymmetry() {
        let black = Position::from_diagram(
            &[".....", ".....", "..X..", ".....", "....."],
            Color::Black,
        )
        .unwrap();
        let white = Position::from_diagram(
            &[".....", ".....", "..O..", ".....", "....."],
            Color::Black,
        )
        .unwrap();
        // A lone stone has influence 4: Black gains 104, White only costs 96.
        assert_eq!(evaluate(&black), STONE_VALUE + 4);
        assert_eq!(evaluate(&white), -(STONE_VALUE - 4));
        assert_ne!(evaluate(&black), -evaluate(&white));
    }

    #[test]
    fn test_evaluate_negated_for_white() {
        let mut pos = Position::from_diagram(
            &[".....", ".....", "..X..", ".....", "....."],
            Color::Black,
        )
        .unwrap();
        let black_view = evaluate(&pos);
        pos.side = Color::White;
        assert_eq!(evaluate(&pos), -black_view);
    }

    #[test]
    fn test_depth_one_picks_capture() {
        let pos = Position::from_diagram(
            &[
                ".........", //
                ".........",
                ".........",
                "....X....",
                "...XOX...",
                ".........",
                ".........",
                ".........",
                ".........",
            ],
            Color::Black,
        )
        .unwrap();
        let before = pos.clone();
        let result = root_search(&pos, 1, Color::Black, &EngineConfig::default());
        assert_eq!(result.best_move, pos.point(4, 5).ok());
        assert_eq!(pos, before);
    }

    #[test]
    fn test_no_candidates_passes() {
        // Every empty point is an own eye or suicide for White.
        let pos = Position::from_diagram(&["X.X", ".X.", "X.X"], Color::White).unwrap();
        let result = root_search(&pos, 2, Color::White, &EngineConfig::default());
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, evaluate(&pos));
    }

    #[test]
    fn test_reply_without_candidates_scores_infinity() {
        // After C2 White has no playable point and stands pat on the open bound.
        let pos = Position::from_diagram(&["X.X", ".X.", "X.."], Color::Black).unwrap();
        let result = root_search(&pos, 2, Color::Black, &EngineConfig::default());
        assert_eq!(result.best_move, pos.point(2, 1).ok());
        assert_eq!(result.score, INFINITY);
    }

    #[test]
    fn test_negamax_stand_pat_returns_alpha() {
        let pos = Position::from_diagram(&["X.X", ".X.", "X.X"], Color::White).unwrap();
        let config = EngineConfig::default();
        let mut searcher = Searcher::new(&config);
        assert_eq!(searcher.negamax(&pos, 3, -42, 42), -42);
        assert_eq!(searcher.nodes(), 1);
    }

    #[test]
    fn test_deeper_search_leaves_position_untouched() {
        let pos = Position::from_diagram(
            &[
                ".......", //
                "..X....",
                ".XO.O..",
                "..X....",
                "...O...",
                ".......",
                ".......",
            ],
            Color::White,
        )
        .unwrap();
        let before = pos.clone();
        let result = root_search(&pos, 3, Color::White, &EngineConfig::default());
        assert!(result.best_move.is_some());
        assert!(result.nodes > 1);
        assert_eq!(pos, before);
    }

    /// Plain negamax without pruning, or `None` if some node has no candidates.
    fn minimax(pos: &Position, depth: usize, config: &EngineConfig) -> Option<i32> {
        if depth == 0 {
            return Some(evaluate(pos));
        }
        let candidates = generate(pos, pos.side, config);
        if candidates.is_empty() {
            return None;
        }
        let mut best = -INFINITY;
        for candidate in candidates {
            let mut child = pos.clone();
            child.apply_move(candidate.point, pos.side).ok()?;
            best = best.max(-minimax(&child, depth - 1, config)?);
        }
        Some(best)
    }

    fn random_position(size: usize, moves: usize, seed: u64) -> Position {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut pos = Position::new(size).unwrap();
        for _ in 0..moves {
            let empty: Vec<Point> = pos
                .board()
                .points()
                .filter(|&p| pos.board().get(p) == Cell::Empty)
                .collect();
            if empty.is_empty() {
                break;
            }
            let pt = empty[rng.usize(..empty.len())];
            let color = pos.side;
            pos.apply_move(pt, color).unwrap();
        }
        pos
    }

    #[test]
    fn test_alphabeta_matches_minimax() {
        let config = EngineConfig::default();
        let mut checked = 0;
        for seed in 0..20 {
            let pos = random_position(7, 4 + (seed as usize % 12), seed);
            for depth in 1..=3 {
                let Some(expected) = minimax(&pos, depth, &config) else {
                    continue;
                };
                let result = root_search(&pos, depth, pos.side, &config);
                assert_eq!(result.score, expected, "seed {seed} depth {depth}");
                checked += 1;
            }
        }
        assert!(checked > 0);
    }
}
