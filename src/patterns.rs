//! 3x3 pattern matching for move generation.
//!
//! Each source template is a 9-character grid, row-major, top row first:
//! - `X`: Black stone
//! - `O`: White stone
//! - `.`: empty point
//! - `#`: edge of board (out of bounds)
//! - `?`: anything (stone, empty or edge)
//! - `*`: the suggested move (must be an empty point)
//!
//! At first use every template is expanded into 8 variants: the 4 rotations,
//! each with and without the colours swapped. Reflections are not generated.
//! A query slides a 3x3 window over the whole padded grid, so windows that
//! overlap the edge ring can anchor side patterns.

use std::sync::OnceLock;

use crate::board::{Cell, Point};
use crate::constants::{PATTERN_BASE, PATTERN_STONE_WEIGHT};
use crate::position::Position;

/// The 3x3 pattern sources, Black to play the `*` point.
const PAT3_SRC: &[(&str, &[u8; 9])] = &[
    ("enclosing hane", b"XOX.*.???"),
    ("non-cutting hane", b"XO..*.?.?"),
    ("magari", b"XO?X*.?.?"),
    ("katatsuke", b".O.X*...."),
    ("unprotected cut", b"XO?O*????"),
    ("peeped cut", b"XO?O*X???"),
    ("de", b"?X?O*O???"),
    ("cut keima", b"OX??*O???"),
    ("side chase", b"X.?O*?##?"),
    ("side block cut", b"OX?X*O###"),
    ("side block connection", b"?X??*O###"),
    ("sagari", b"?XO?*?###"),
    ("side cut", b"?OXX*O###"),
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum PatCell {
    Empty,
    Black,
    White,
    Edge,
    Any,
    Response,
}

/// One symmetry variant of a source template.
#[derive(Clone, Debug)]
struct Variant {
    name: &'static str,
    cells: [PatCell; 9],
    response: usize,
    stones: usize,
}

/// A template hit: the suggested move and its urgency.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternMatch {
    pub point: Point,
    pub urgency: i32,
    pub name: &'static str,
}

static VARIANTS: OnceLock<Vec<Variant>> = OnceLock::new();

/// Build the variant table.
///
/// This is called automatically on first use of [`match_patterns`].
pub fn init_patterns() {
    VARIANTS.get_or_init(make_variants);
}

/// Number of expanded variants (8 per source template).
pub fn variant_count() -> usize {
    VARIANTS.get_or_init(make_variants).len()
}

fn make_variants() -> Vec<Variant> {
    let mut variants = Vec::with_capacity(PAT3_SRC.len() * 8);
    for &(name, src) in PAT3_SRC {
        let mut cells = parse(src);
        for _ in 0..4 {
            variants.push(variant(name, cells));
            variants.push(variant(name, swapcolor(cells)));
            cells = rot90(cells);
        }
    }
    variants
}

fn parse(src: &[u8; 9]) -> [PatCell; 9] {
    src.map(|c| match c {
        b'.' => PatCell::Empty,
        b'X' => PatCell::Black,
        b'O' => PatCell::White,
        b'#' => PatCell::Edge,
        b'*' => PatCell::Response,
        _ => PatCell::Any,
    })
}

fn variant(name: &'static str, cells: [PatCell; 9]) -> Variant {
    let response = cells
        .iter()
        .position(|&c| c == PatCell::Response)
        .unwrap_or(4);
    let stones = cells
        .iter()
        .filter(|&&c| c == PatCell::Black || c == PatCell::White)
        .count();
    Variant {
        name,
        cells,
        response,
        stones,
    }
}

/// Swap Black and White in a pattern.
fn swapcolor(cells: [PatCell; 9]) -> [PatCell; 9] {
    cells.map(|c| match c {
        PatCell::Black => PatCell::White,
        PatCell::White => PatCell::Black,
        other => other,
    })
}

/// 90-degree rotation of a pattern.
fn rot90(src: [PatCell; 9]) -> [PatCell; 9] {
    let mut dst = src;
    dst[0] = src[2];
    dst[2] = src[8];
    dst[8] = src[6];
    dst[6] = src[0];

    dst[1] = src[5];
    dst[5] = src[7];
    dst[7] = src[3];
    dst[3] = src[1];
    dst
}

fn cell_matches(pat: PatCell, cell: Cell) -> bool {
    match pat {
        PatCell::Any => true,
        PatCell::Response | PatCell::Empty => cell == Cell::Empty,
        PatCell::Black => cell == Cell::Black,
        PatCell::White => cell == Cell::White,
        PatCell::Edge => cell == Cell::Edge,
    }
}

/// Scan every 3x3 window of the board against every variant.
///
/// The same point may come back several times, from different variants or
/// windows; callers deduplicate.
pub fn match_patterns(pos: &Position) -> Vec<PatternMatch> {
    let variants = VARIANTS.get_or_init(make_variants);
    let board = pos.board();
    let w = board.width();
    let mut matches = Vec::new();

    for top in 0..=w - 3 {
        for left in 0..=w - 3 {
            let window: [Cell; 9] =
                std::array::from_fn(|i| board.get((top + i / 3) * w + left + i % 3));
            for v in variants {
                let hit = v
                    .cells
                    .iter()
                    .zip(window.iter())
                    .all(|(&p, &c)| cell_matches(p, c));
                if !hit {
                    continue;
                }
                let point = (top + v.response / 3) * w + left + v.response % 3;
                let urgency = PATTERN_BASE + PATTERN_STONE_WEIGHT * v.stones as i32
                    - board.center_distance(point) as i32;
                matches.push(PatternMatch {
                    point,
                    urgency,
                    name: v.name,
                });
            }
        }
    }
    matches
}
