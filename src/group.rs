//! Connected-component analysis.
//!
//! Groups are never stored: every query flood-fills the board again. The fill
//! is iterative (explicit stack) so large boards cannot overflow the call stack.

use std::collections::BTreeSet;

use crate::board::{Board, Cell, Color, Point};

/// A maximal 4-connected set of same-coloured stones and its liberties.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Group {
    pub color: Color,
    pub stones: BTreeSet<Point>,
    pub liberties: BTreeSet<Point>,
}

impl Group {
    pub fn size(&self) -> usize {
        self.stones.len()
    }

    pub fn liberty_count(&self) -> usize {
        self.liberties.len()
    }

    /// The single liberty of a group in atari.
    pub fn only_liberty(&self) -> Option<Point> {
        if self.liberties.len() == 1 {
            self.liberties.first().copied()
        } else {
            None
        }
    }

    /// Lowest-index stone; stable handle used to re-query the group.
    pub fn anchor(&self) -> Point {
        *self.stones.first().unwrap_or(&0)
    }
}

/// The group containing the stone at `pt`, or `None` if `pt` holds no stone.
pub fn group_at(board: &Board, pt: Point) -> Option<Group> {
    let color = board.get(pt).stone()?;
    Some(flood(board, pt, color, None))
}

/// The group `color` would form by placing a stone at `pt`.
///
/// The board itself is not touched; the extra stone only exists inside the
/// fill. Captures are not resolved.
pub fn group_with_stone(board: &Board, pt: Point, color: Color) -> Group {
    flood(board, pt, color, Some(pt))
}

/// All groups of `color`, each reported once, in row-major order of their
/// first stone.
pub fn all_groups(board: &Board, color: Color) -> Vec<Group> {
    let mut seen = vec![false; board.width() * board.width()];
    let mut groups = Vec::new();
    for pt in board.points() {
        if seen[pt] || board.get(pt).stone() != Some(color) {
            continue;
        }
        let group = flood(board, pt, color, None);
        for &s in &group.stones {
            seen[s] = true;
        }
        groups.push(group);
    }
    groups
}

fn flood(board: &Board, start: Point, color: Color, extra: Option<Point>) -> Group {
    let target = Cell::from(color);
    let cell = |p: Point| {
        if Some(p) == extra {
            target
        } else {
            board.get(p)
        }
    };

    let mut visited = vec![false; board.width() * board.width()];
    let mut stones = BTreeSet::new();
    let mut liberties = BTreeSet::new();
    let mut stack = vec![start];

    while let Some(pt) = stack.pop() {
        if visited[pt] {
            continue;
        }
        visited[pt] = true;
        stones.insert(pt);

        for n in board.neighbors(pt) {
            match cell(n) {
                Cell::Empty => {
                    liberties.insert(n);
                }
                c if c == target && !visited[n] => stack.push(n),
                _ => {}
            }
        }
    }

    Group {
        color,
        stones,
        liberties,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_stone() {
        let mut board = Board::new(9);
        let pt = board.point(4, 4).unwrap();
        board.set(pt, Cell::Black);
        let g = group_at(&board, pt).unwrap();
        assert_eq!(g.size(), 1);
        assert_eq!(g.liberty_count(), 4);
        assert_eq!(g.color, Color::Black);
    }

    #[test]
    fn test_shared_liberty_counted_once() {
        // X X
        // X .   <- the empty point touches two stones
        let mut board = Board::new(9);
        for (c, r) in [(3, 3), (4, 3), (3, 4)] {
            board.set(board.point(c, r).unwrap(), Cell::White);
        }
        let g = group_at(&board, board.point(3, 3).unwrap()).unwrap();
        assert_eq!(g.size(), 3);
        assert_eq!(g.liberty_count(), 7);
        assert!(g.liberties.contains(&board.point(4, 4).unwrap()));
    }

    #[test]
    fn test_corner_stone() {
        let mut board = Board::new(9);
        let pt = board.point(0, 0).unwrap();
        board.set(pt, Cell::Black);
        assert_eq!(group_at(&board, pt).unwrap().liberty_count(), 2);
    }

    #[test]
    fn test_empty_point_has_no_group() {
        let board = Board::new(9);
        assert!(group_at(&board, board.point(0, 0).unwrap()).is_none());
    }

    #[test]
    fn test_group_with_stone_leaves_board() {
        let mut board = Board::new(5);
        board.set(board.point(1, 0).unwrap(), Cell::White);
        board.set(board.point(0, 1).unwrap(), Cell::White);
        let before = board.clone();
        let g = group_with_stone(&board, board.point(0, 0).unwrap(), Color::Black);
        assert_eq!(g.liberty_count(), 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_all_groups_no_duplicates() {
        let mut board = Board::new(9);
        for (c, r) in [(0, 0), (1, 0), (5, 5), (5, 6)] {
            board.set(board.point(c, r).unwrap(), Cell::Black);
        }
        board.set(board.point(8, 8).unwrap(), Cell::Black);
        let groups = all_groups(&board, Color::Black);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups.iter().map(Group::size).sum::<usize>(), 5);
        assert!(all_groups(&board, Color::White).is_empty());
    }
}
