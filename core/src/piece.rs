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

//! The cell alphabet a board's grid is drawn from, and the digit/letter
//! pairing that tells whether a piece cell currently sits on a goal.

use std::fmt::{Display, Formatter, Result};

/// The maximum number of pieces a board may contain. Piece ids are single
/// digits, `0..MAX_PIECES`.
pub const MAX_PIECES: usize = 10;

#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
/// One cell of a board's grid, classified into the alphabet the move engine
/// and packer understand.
pub enum Cell {
    /// `' '`, an empty passable cell.
    Empty,
    /// `'#'` (or any other unrecognized character), an impassable wall.
    Wall,
    /// `'G'`, an uncovered goal square.
    Goal,
    /// `'0'..'9'`, a body cell of piece `id`, not currently on a goal.
    Piece(u8),
    /// `'H'..'Q'`, a body cell of piece `id`, currently on a goal.
    PieceOnGoal(u8),
}

impl Cell {
    /// Classify a raw grid character into a `Cell`.
    pub fn from_char(c: char) -> Cell {
        match c {
            ' ' => Cell::Empty,
            'G' => Cell::Goal,
            '0'..='9' => Cell::Piece(c as u8 - b'0'),
            'H'..='Q' => Cell::PieceOnGoal(c as u8 - b'H'),
            _ => Cell::Wall,
        }
    }

    /// Render this cell back to its grid character.
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Wall => '#',
            Cell::Goal => 'G',
            Cell::Piece(id) => (b'0' + id) as char,
            Cell::PieceOnGoal(id) => (b'H' + id) as char,
        }
    }

    /// The piece id occupying this cell, in either form, or `None` if the
    /// cell is empty, a wall, or an uncovered goal.
    pub const fn piece_id(self) -> Option<u8> {
        match self {
            Cell::Piece(id) | Cell::PieceOnGoal(id) => Some(id),
            _ => None,
        }
    }

    /// Whether this cell belongs to the given piece, in either form.
    pub const fn is_piece(self, id: u8) -> bool {
        match self {
            Cell::Piece(p) | Cell::PieceOnGoal(p) => p == id,
            _ => false,
        }
    }

    /// Whether a piece may slide onto this cell: it must be empty, an
    /// uncovered goal, or already occupied by the same piece (which is about
    /// to vacate it anyway).
    pub const fn passable_for(self, id: u8) -> bool {
        matches!(self, Cell::Empty | Cell::Goal) || self.is_piece(id)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.to_char())
    }
}

/// The letter form (`'H'..'Q'`) of piece `digit - '0'`, mirroring the
/// original source's `letterPiece = pieceChar - '0' + 'H'`.
pub const fn letter_for(digit: u8) -> char {
    (b'H' + digit) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_and_letter_pair_to_same_id() {
        assert_eq!(Cell::from_char('3').piece_id(), Some(3));
        assert_eq!(Cell::from_char('K').piece_id(), Some(3));
    }

    #[test]
    fn round_trip_chars() {
        for c in [' ', '#', 'G', '0', '9', 'H', 'Q'] {
            assert_eq!(Cell::from_char(c).to_char(), c);
        }
    }

    #[test]
    fn wall_is_default_for_unknown_chars() {
        assert_eq!(Cell::from_char('%'), Cell::Wall);
    }

    #[test]
    fn letter_pairing_matches_spec() {
        assert_eq!(letter_for(0), 'H');
        assert_eq!(letter_for(9), 'Q');
    }
}
