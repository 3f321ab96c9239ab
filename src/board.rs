//! Board storage: a square grid surrounded by a permanent Edge ring.
//!
//! The grid is kept as a 1D array of `(size + 2)^2` cells. The outer ring is
//! `Cell::Edge` and is never written after construction, so flood fills and
//! pattern scans stop on it without bounds checks.

use std::fmt;

/// A board index into the padded 1D array.
pub type Point = usize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Index into per-colour arrays (Black = 0, White = 1).
    pub fn index(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "BLACK"),
            Color::White => write!(f, "WHITE"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
    Edge,
}

impl Cell {
    /// The stone colour in this cell, if any.
    pub fn stone(self) -> Option<Color> {
        match self {
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
            Cell::Empty | Cell::Edge => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'X',
            Cell::White => 'O',
            Cell::Edge => '#',
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty `size`x`size` board with its Edge ring.
    pub fn new(size: usize) -> Self {
        let width = size + 2;
        let mut cells = vec![Cell::Empty; width * width];
        for row in 0..width {
            for col in 0..width {
                if row == 0 || col == 0 || row == width - 1 || col == width - 1 {
                    cells[row * width + col] = Cell::Edge;
                }
            }
        }
        Self { size, cells }
    }

    /// Number of playable lines.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Width of the padded grid (`size + 2`).
    pub fn width(&self) -> usize {
        self.size + 2
    }

    /// Index of the interior point `(col, row)`, or `None` when off the board.
    pub fn point(&self, col: usize, row: usize) -> Option<Point> {
        if col >= self.size || row >= self.size {
            return None;
        }
        Some((row + 1) * self.width() + col + 1)
    }

    /// Interior `(col, row)` of an index. Only meaningful for non-Edge cells.
    pub fn coords(&self, pt: Point) -> (usize, usize) {
        let w = self.width();
        (pt % w - 1, pt / w - 1)
    }

    #[inline]
    pub fn get(&self, pt: Point) -> Cell {
        self.cells[pt]
    }

    /// Overwrite an interior cell and return what was there.
    ///
    /// Edge cells are never replaced.
    #[inline]
    pub fn set(&mut self, pt: Point, cell: Cell) -> Cell {
        let prev = self.cells[pt];
        debug_assert!(prev != Cell::Edge && cell != Cell::Edge);
        self.cells[pt] = cell;
        prev
    }

    /// The 4 orthogonal neighbours (N, E, S, W) of a point.
    #[inline]
    pub fn neighbors(&self, pt: Point) -> [Point; 4] {
        let w = self.width();
        [pt - w, pt + 1, pt + w, pt - 1]
    }

    /// All interior points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let w = self.width();
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| (row + 1) * w + col + 1))
    }

    /// Manhattan distance from `pt` to the centre of the board.
    ///
    /// On even sizes the centre lies between points; the distance is rounded down.
    pub fn center_distance(&self, pt: Point) -> usize {
        let (col, row) = self.coords(pt);
        let twice = (2 * col).abs_diff(self.size - 1) + (2 * row).abs_diff(self.size - 1);
        twice / 2
    }

    /// Zero-based line number counted from the nearest edge.
    pub fn line(&self, pt: Point) -> usize {
        let (col, row) = self.coords(pt);
        col.min(row).min(self.size - 1 - col).min(self.size - 1 - row)
    }

    pub fn count_empty(&self) -> usize {
        self.points().filter(|&p| self.get(p) == Cell::Empty).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_ring() {
        let board = Board::new(9);
        let w = board.width();
        assert_eq!(w, 11);
        for i in 0..w {
            assert_eq!(board.get(i), Cell::Edge);
            assert_eq!(board.get((w - 1) * w + i), Cell::Edge);
            assert_eq!(board.get(i * w), Cell::Edge);
            assert_eq!(board.get(i * w + w - 1), Cell::Edge);
        }
        assert_eq!(board.points().count(), 81);
        assert!(board.points().all(|p| board.get(p) == Cell::Empty));
    }

    #[test]
    fn test_point_coords() {
        let board = Board::new(9);
        let pt = board.point(3, 5).unwrap();
        assert_eq!(board.coords(pt), (3, 5));
        assert_eq!(board.point(9, 0), None);
        assert_eq!(board.point(0, 9), None);
    }

    #[test]
    fn test_center_distance_and_line() {
        let board = Board::new(9);
        let center = board.point(4, 4).unwrap();
        assert_eq!(board.center_distance(center), 0);
        assert_eq!(board.center_distance(board.point(0, 0).unwrap()), 8);
        assert_eq!(board.line(board.point(2, 6).unwrap()), 2);
        assert_eq!(board.line(center), 4);
    }
}
