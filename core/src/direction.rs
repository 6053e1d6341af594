/*
  shunt, a sliding-block puzzle solver.
  Copyright (C) 2026 The Shunt Authors

  shunt is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  shunt is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! Directions a piece can slide. Every move is exactly one cell in one of the
//! four cardinal directions; there is no notion of distance or diagonal
//! movement in this puzzle.

use std::fmt::{self, Display, Formatter};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// A single cardinal direction a piece may be slid in.
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in the fixed expansion order the search engine
    /// must use: up, down, left, right.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[inline(always)]
    /// The `(row, col)` step this direction applies to a cell, as signed
    /// offsets.
    pub const fn step(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    #[inline(always)]
    /// The direction that undoes this one.
    pub const fn inverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The direction letter used in a move trail: `u`, `d`, `l`, or `r`.
    pub const fn as_char(self) -> char {
        match self {
            Direction::Up => 'u',
            Direction::Down => 'd',
            Direction::Left => 'l',
            Direction::Right => 'r',
        }
    }

    /// Parse a direction letter from a move trail. Returns `None` for any
    /// character outside `{'u', 'd', 'l', 'r'}`.
    pub const fn from_char(c: char) -> Option<Direction> {
        match c {
            'u' => Some(Direction::Up),
            'd' => Some(Direction::Down),
            'l' => Some(Direction::Left),
            'r' => Some(Direction::Right),
            _ => None,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_is_involutive() {
        for d in Direction::ALL {
            assert_eq!(d.inverse().inverse(), d);
        }
    }

    #[test]
    fn inverse_pairs() {
        assert_eq!(Direction::Up.inverse(), Direction::Down);
        assert_eq!(Direction::Left.inverse(), Direction::Right);
    }

    #[test]
    fn char_round_trip() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_char(d.as_char()), Some(d));
        }
        assert_eq!(Direction::from_char('x'), None);
    }
}
