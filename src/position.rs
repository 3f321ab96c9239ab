//! Go position representation and the rule engine.
//!
//! A [`Position`] is a [`Board`] plus the side to move, the ko point and the
//! prisoner counts. All mutation goes through [`Position::apply_move`] and
//! [`Position::pass_turn`]; the speculative readers in [`crate::ladder`] and
//! [`crate::search`] work on clones and never touch the live position.

use std::fmt;

use crate::board::{Board, Cell, Color, Point};
use crate::constants::{MAX_SIZE, MIN_SIZE};
use crate::error::EngineError;
use crate::group::{all_groups, group_with_stone};

/// A Go position (board state).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    board: Board,
    /// Side to move
    pub side: Color,
    /// Point the side to move may not retake on, if any
    pub ko: Option<Point>,
    /// Stones captured by Black and White respectively
    pub prisoners: [usize; 2],
}

impl Position {
    /// An empty `size`x`size` position with Black to move.
    pub fn new(size: usize) -> Result<Self, EngineError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(EngineError::InvalidSize { size });
        }
        Ok(Position {
            board: Board::new(size),
            side: Color::Black,
            ko: None,
            prisoners: [0, 0],
        })
    }

    /// Build a position from an ASCII diagram, top row first.
    ///
    /// `X` is Black, `O` is White, `.` is empty; whitespace is ignored. Stones
    /// are placed directly, without resolving captures.
    pub fn from_diagram(rows: &[&str], side: Color) -> Result<Self, EngineError> {
        let size = rows.len();
        let mut pos = Position::new(size)?;
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != size {
                return Err(EngineError::RowLength {
                    row,
                    len: cells.len(),
                    size,
                });
            }
            for (col, ch) in cells.into_iter().enumerate() {
                let cell = match ch {
                    'X' | 'x' => Cell::Black,
                    'O' | 'o' => Cell::White,
                    _ => continue,
                };
                if let Some(pt) = pos.board.point(col, row) {
                    pos.board.set(pt, cell);
                }
            }
        }
        pos.side = side;
        Ok(pos)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Index of `(col, row)`, rejecting coordinates off the board.
    pub fn point(&self, col: usize, row: usize) -> Result<Point, EngineError> {
        self.board
            .point(col, row)
            .ok_or(EngineError::OffBoard { col, row })
    }

    /// Place `color` at `pt`, remove every opposing group left without
    /// liberties and flip the side to move.
    ///
    /// Sets the ko point when exactly one stone was captured by a move played
    /// into a point entirely surrounded by the opponent. Suicide and ko replay
    /// are not rejected here. Returns the captured stones.
    pub fn apply_move(&mut self, pt: Point, color: Color) -> Result<Vec<Point>, EngineError> {
        let w = self.board.width();
        if pt >= w * w || self.board.get(pt) == Cell::Edge {
            return Err(EngineError::OffBoard {
                col: (pt % w).saturating_sub(1),
                row: (pt / w).saturating_sub(1),
            });
        }
        if self.board.get(pt) != Cell::Empty {
            let (col, row) = self.board.coords(pt);
            return Err(EngineError::Occupied { col, row });
        }

        self.ko = None;
        let in_enemy_eye = self.clover_color(pt) == Some(color.opponent());
        self.board.set(pt, color.into());

        let mut captured = Vec::new();
        for group in all_groups(&self.board, color.opponent()) {
            if group.liberties.is_empty() {
                captured.extend(group.stones);
            }
        }
        for &s in &captured {
            self.board.set(s, Cell::Empty);
        }

        if captured.len() == 1 && in_enemy_eye {
            self.ko = Some(captured[0]);
        }
        self.prisoners[color.index()] += captured.len();
        self.side = self.side.opponent();
        Ok(captured)
    }

    /// Pass: flip the side to move and clear the ko.
    pub fn pass_turn(&mut self) {
        self.side = self.side.opponent();
        self.ko = None;
    }

    /// Flip the side to move, keeping everything else.
    pub fn toggle_side(&mut self) {
        self.side = self.side.opponent();
    }

    /// True if a `color` stone at `pt` would have no liberties.
    pub fn is_suicide(&self, pt: Point, color: Color) -> bool {
        group_with_stone(&self.board, pt, color).liberties.is_empty()
    }

    /// True if a `color` stone at `pt` would leave its group with one liberty.
    pub fn is_atari(&self, pt: Point, color: Color) -> bool {
        group_with_stone(&self.board, pt, color).liberties.len() == 1
    }

    /// The colour of all non-Edge neighbours of `pt`, if they are all stones
    /// of one colour.
    ///
    /// Note: this also reports false eyes.
    pub fn clover_color(&self, pt: Point) -> Option<Color> {
        let mut color = None;
        for n in self.board.neighbors(pt) {
            match self.board.get(n) {
                Cell::Edge => continue,
                Cell::Empty => return None,
                cell => {
                    let c = cell.stone()?;
                    match color {
                        None => color = Some(c),
                        Some(prev) if prev != c => return None,
                        Some(_) => {}
                    }
                }
            }
        }
        color
    }

    /// Text diagram with row numbers, column letters, the ko point marked `#`
    /// and the side to move.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// Column letter for a zero-based column, skipping `I`.
pub fn column_letter(col: usize) -> char {
    let c = b'A' + col as u8;
    if c >= b'I' { (c + 1) as char } else { c as char }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        for row in 0..size {
            write!(f, "{:>3}  ", size - row)?;
            for col in 0..size {
                let pt = (row + 1) * self.board.width() + col + 1;
                let glyph = if self.ko == Some(pt) {
                    '#'
                } else {
                    self.board.get(pt).glyph()
                };
                write!(f, "{glyph} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "     ")?;
        for col in 0..size {
            write!(f, "{} ", column_letter(col))?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "\n     Captures: X {}  O {}",
            self.prisoners[Color::Black.index()],
            self.prisoners[Color::White.index()]
        )?;
        writeln!(f, "     Side to move: {}", self.side)
    }
}
