//! Urgency-ranked candidate generation.
//!
//! Every call rebuilds the candidate list from scratch:
//! - one "big move" from the influence map,
//! - captures and working ladders against opposing groups,
//! - saving moves for own groups in atari,
//! - extensions for own groups and reductions of opposing groups at two liberties,
//! - 3x3 pattern responses.
//!
//! The ranked list is both the move ordering and the complete branching set
//! of the search: points the heuristics do not mention are never searched.

use std::collections::HashSet;
use std::fmt;

use crate::board::{Board, Cell, Color, Point};
use crate::config::{EngineConfig, PrunePolicy};
use crate::constants::{
    CAPTURE_BONUS, CAPTURE_SCALE, EXTEND_BONUS, INFLUENCE_WEIGHTS, LADDER_BONUS, LINE_BONUS,
    NEAR_STAR_BONUS, SAVE_BONUS, SAVE_DISTANCE_PENALTY, STAR_BONUS, SURROUND_BONUS,
};
use crate::group::{all_groups, group_with_stone};
use crate::ladder::{LadderRead, check_ladder};
use crate::patterns::match_patterns;
use crate::position::Position;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Capture,
    LadderAttack,
    Save,
    Surround,
    Extend,
    BigMove,
    Pattern,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Capture => "capture",
            Category::LadderAttack => "ladder_attack",
            Category::Save => "save",
            Category::Surround => "surround",
            Category::Extend => "extend",
            Category::BigMove => "big_move",
            Category::Pattern => "pattern",
        };
        f.write_str(name)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub point: Point,
    pub urgency: i32,
    pub category: Category,
}

impl Candidate {
    fn new(point: Point, urgency: i32, category: Category) -> Self {
        Self {
            point,
            urgency,
            category,
        }
    }
}

/// All candidates for `color`, most urgent first, one per point.
pub fn generate(pos: &Position, color: Color, config: &EngineConfig) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    candidates.extend(big_move(pos, color));
    candidates.extend(attack_moves(pos, color, config.ladder_depth));
    candidates.extend(defend_moves(pos, color, config.ladder_depth));
    candidates.extend(extend_moves(pos, color));
    candidates.extend(pattern_moves(pos, color));
    rank(candidates, config.prune)
}

/// Sort by descending urgency, keep the first occurrence of each point and
/// apply the pruning policy.
///
/// The sort is stable: equal urgencies keep generation order.
pub fn rank(mut candidates: Vec<Candidate>, prune: PrunePolicy) -> Vec<Candidate> {
    candidates.sort_by(|a, b| b.urgency.cmp(&a.urgency));
    let mut seen = HashSet::new();
    candidates.retain(|c| seen.insert(c.point));
    match prune {
        PrunePolicy::DropLowest => {
            if candidates.len() > 1 {
                candidates.pop();
            }
        }
        PrunePolicy::TopK(k) => candidates.truncate(k),
        PrunePolicy::Keep => {}
    }
    candidates
}

/// True if `color` may consider `pt` at all: empty, not the ko point, not
/// suicide and not self-atari.
fn playable(pos: &Position, pt: Point, color: Color) -> bool {
    pos.board().get(pt) == Cell::Empty
        && pos.ko != Some(pt)
        && !pos.is_suicide(pt, color)
        && !pos.is_atari(pt, color)
}

/// The single best point by influence and opening-shape bonuses.
pub fn big_move(pos: &Position, color: Color) -> Option<Candidate> {
    let board = pos.board();
    let mut best: Option<Candidate> = None;
    for pt in board.points() {
        if !playable(pos, pt, color) || pos.clover_color(pt) == Some(color) {
            continue;
        }
        let score = influence(board, pt) + shape_bonus(board, pt);
        if best.is_none_or(|b| score > b.urgency) {
            best = Some(Candidate::new(pt, score, Category::BigMove));
        }
    }
    best
}

/// Weighted count of empty points in the distance-3 diamond around `pt`.
pub fn influence(board: &Board, pt: Point) -> i32 {
    let (col, row) = board.coords(pt);
    let reach = INFLUENCE_WEIGHTS.len() as isize - 1;
    let mut total = 0;
    for dr in -reach..=reach {
        for dc in -reach..=reach {
            let d = (dr.abs() + dc.abs()) as usize;
            if d >= INFLUENCE_WEIGHTS.len() {
                continue;
            }
            let (Some(c), Some(r)) = (col.checked_add_signed(dc), row.checked_add_signed(dr))
            else {
                continue;
            };
            if let Some(p) = board.point(c, r) {
                if board.get(p) == Cell::Empty {
                    total += INFLUENCE_WEIGHTS[d];
                }
            }
        }
    }
    total
}

fn star_points(size: usize) -> Vec<(usize, usize)> {
    let mut stars = Vec::new();
    if size >= 7 {
        let off = if size < 13 { 2 } else { 3 };
        let mut lines = vec![off, size - 1 - off];
        if size >= 13 && size % 2 == 1 {
            lines.push(size / 2);
        }
        for &c in &lines {
            for &r in &lines {
                stars.push((c, r));
            }
        }
    }
    if size % 2 == 1 && !stars.contains(&(size / 2, size / 2)) {
        stars.push((size / 2, size / 2));
    }
    stars
}

fn shape_bonus(board: &Board, pt: Point) -> i32 {
    let (col, row) = board.coords(pt);
    let stars = star_points(board.size());
    let mut bonus = 0;
    if stars.contains(&(col, row)) {
        bonus += STAR_BONUS;
    } else if stars
        .iter()
        .any(|&(c, r)| c.abs_diff(col) <= 1 && r.abs_diff(row) <= 1)
    {
        bonus += NEAR_STAR_BONUS;
    }
    if matches!(board.line(pt), 2 | 3) {
        bonus += LINE_BONUS;
    }
    bonus
}

/// Captures of opposing groups in atari, working ladders against groups at
/// two liberties, and reductions of two-liberty groups that escape the ladder.
pub fn attack_moves(pos: &Position, color: Color, ladder_depth: usize) -> Vec<Candidate> {
    let opponent = color.opponent();
    let mut candidates = Vec::new();
    for group in all_groups(pos.board(), opponent) {
        let stones = group.size() as i32;
        let libs = group.liberty_count() as i32;
        match group.liberty_count() {
            1 => {
                let Some(lib) = group.only_liberty() else {
                    continue;
                };
                if pos.ko != Some(lib) {
                    let urgency = CAPTURE_BONUS + CAPTURE_SCALE * stones / libs;
                    candidates.push(Candidate::new(lib, urgency, Category::Capture));
                }
            }
            2 => match check_ladder(pos, group.anchor(), opponent, ladder_depth) {
                LadderRead::AttackAt(mv)
                    if !pos.is_suicide(mv, color) && !pos.is_atari(mv, color) =>
                {
                    let urgency = LADDER_BONUS + CAPTURE_SCALE * stones / libs;
                    candidates.push(Candidate::new(mv, urgency, Category::LadderAttack));
                }
                LadderRead::Escaped => {
                    let best = group
                        .liberties
                        .iter()
                        .copied()
                        .filter(|&lib| playable(pos, lib, color))
                        .max_by_key(|&lib| {
                            // Prefer the reducing stone with the most room; ties go to the lower point.
                            let room = group_with_stone(pos.board(), lib, color).liberty_count();
                            (room, std::cmp::Reverse(lib))
                        });
                    if let Some(lib) = best {
                        candidates.push(Candidate::new(
                            lib,
                            SURROUND_BONUS + stones,
                            Category::Surround,
                        ));
                    }
                }
                _ => {}
            },
            _ => {}
        }
    }
    candidates
}

/// Saving moves for own groups in atari whose extension is not read as dead.
pub fn defend_moves(pos: &Position, color: Color, ladder_depth: usize) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for group in all_groups(pos.board(), color) {
        let Some(lib) = group.only_liberty() else {
            continue;
        };
        if pos.ko == Some(lib) || pos.is_suicide(lib, color) {
            continue;
        }
        if check_ladder(pos, group.anchor(), color, ladder_depth) == LadderRead::Captured {
            continue;
        }
        let urgency =
            SAVE_BONUS - SAVE_DISTANCE_PENALTY * pos.board().center_distance(lib) as i32;
        candidates.push(Candidate::new(lib, urgency, Category::Save));
    }
    candidates
}

/// Extensions of own two-liberty groups that gain liberties.
pub fn extend_moves(pos: &Position, color: Color) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for group in all_groups(pos.board(), color) {
        if group.liberty_count() != 2 {
            continue;
        }
        let best = group
            .liberties
            .iter()
            .copied()
            .filter(|&lib| pos.ko != Some(lib))
            .map(|lib| (lib, group_with_stone(pos.board(), lib, color).liberty_count()))
            .filter(|&(_, room)| room > 2)
            .max_by_key(|&(lib, room)| (room, std::cmp::Reverse(lib)));
        if let Some((lib, _)) = best {
            candidates.push(Candidate::new(
                lib,
                EXTEND_BONUS + group.size() as i32,
                Category::Extend,
            ));
        }
    }
    candidates
}

/// Pattern responses that are neither suicide, self-atari nor an own eye.
pub fn pattern_moves(pos: &Position, color: Color) -> Vec<Candidate> {
    match_patterns(pos)
        .into_iter()
        .filter(|m| playable(pos, m.point, color) && pos.clover_color(m.point) != Some(color))
        .map(|m| Candidate::new(m.point, m.urgency, Category::Pattern))
        .collect()
}
