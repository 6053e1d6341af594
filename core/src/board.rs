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

//! State representation of one puzzle board: a grid of cells, per-piece
//! coordinates, and the move trail that produced this board from the
//! initial one.

use std::fmt::{Display, Formatter, Result as FmtResult};

use super::{
    direction::Direction,
    piece::{Cell, MAX_PIECES},
    trail::Trail,
};

/// Sentinel coordinate used for a piece that has not yet been located.
pub const UNKNOWN: i32 = -1;

#[derive(Clone, Debug, Eq, PartialEq)]
/// A single snapshot of the puzzle: the grid, per-piece coordinates, and the
/// trail of moves that reached it from the initial board.
pub struct Board {
    /// Number of rows in the grid.
    lines: usize,
    /// Number of columns in the grid; equal across every row.
    width: usize,
    /// The live grid.
    grid: Vec<Vec<Cell>>,
    /// A scratch snapshot of `grid` taken immediately before a move is
    /// applied. Recomputed on every `apply` call; not meaningful between
    /// calls.
    grid_backup: Vec<Vec<Cell>>,
    /// Number of pieces present on this board, `0..=MAX_PIECES`.
    num_pieces: u8,
    /// Row of the first cell of piece `k`, in row-major scan order, or
    /// `UNKNOWN` if piece `k` does not exist on this board.
    piece_y: [i32; MAX_PIECES],
    /// Column of the first cell of piece `k`, in row-major scan order.
    piece_x: [i32; MAX_PIECES],
    /// The moves that produced this board from the initial one.
    trail: Trail,
}

impl Board {
    /// Build a board from a rectangular grid of cells. `num_pieces` is
    /// inferred as one more than the highest piece id found in the grid; if
    /// no pieces are found, it is zero. Piece coordinates are located
    /// immediately, per the row-major "first cell wins" rule.
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty or not rectangular; callers (the map
    /// loader) are expected to validate shape before construction.
    pub fn from_grid(rows: Vec<Vec<Cell>>) -> Board {
        assert!(!rows.is_empty(), "board must have at least one row");
        let width = rows[0].len();
        assert!(
            rows.iter().all(|r| r.len() == width),
            "every row must have equal width"
        );

        let lines = rows.len();
        let mut num_pieces = 0u8;
        for row in &rows {
            for cell in row {
                if let Some(id) = cell.piece_id() {
                    num_pieces = num_pieces.max(id + 1);
                }
            }
        }

        let mut board = Board {
            lines,
            width,
            grid_backup: rows.clone(),
            grid: rows,
            num_pieces,
            piece_y: [UNKNOWN; MAX_PIECES],
            piece_x: [UNKNOWN; MAX_PIECES],
            trail: Trail::new(),
        };
        for id in 0..board.num_pieces {
            board.locate_piece(id);
        }
        board
    }

    /// Number of rows.
    pub const fn lines(&self) -> usize {
        self.lines
    }

    /// Number of columns.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of pieces on this board.
    pub const fn num_pieces(&self) -> u8 {
        self.num_pieces
    }

    /// The content of the cell at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.grid[row][col]
    }

    /// The `(row, col)` coordinate of piece `id`'s first cell in row-major
    /// scan order, or `None` if the piece is not present.
    pub fn piece_pos(&self, id: u8) -> Option<(i32, i32)> {
        let idx = id as usize;
        if self.piece_y[idx] == UNKNOWN {
            None
        } else {
            Some((self.piece_y[idx], self.piece_x[idx]))
        }
    }

    /// The move trail that produced this board.
    pub const fn trail(&self) -> &Trail {
        &self.trail
    }

    /// The snapshot of the grid as it stood immediately before the most
    /// recent `apply` call (or the initial grid, if none has happened yet).
    /// Exposed mainly for tests exercising the move engine's ordering
    /// requirement directly.
    pub fn backup_cell(&self, row: usize, col: usize) -> Cell {
        self.grid_backup[row][col]
    }

    /// Number of cells currently equal to `' '` (empty, unoccupied,
    /// non-goal).
    pub fn count_empty(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|c| **c == Cell::Empty)
            .count()
    }

    /// Whether this board is in a winning configuration: no uncovered goal
    /// remains, and no piece other than piece 0 sits on a goal. See
    /// `SPEC_FULL.md` §3 invariant 5 for why piece 0 is special-cased.
    pub fn is_winning(&self) -> bool {
        for row in &self.grid {
            for cell in row {
                match cell {
                    Cell::Goal => return false,
                    Cell::PieceOnGoal(id) if *id >= 1 => return false,
                    _ => {}
                }
            }
        }
        true
    }

    /// Re-locate piece `id` by a fresh row-major scan, mirroring the
    /// original's `find_piece_coordinates`: coordinates are not updated
    /// incrementally, they are recomputed after every move.
    fn locate_piece(&mut self, id: u8) {
        let idx = id as usize;
        self.piece_y[idx] = UNKNOWN;
        self.piece_x[idx] = UNKNOWN;
        for (r, row) in self.grid.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if cell.is_piece(id) {
                    self.piece_y[idx] = r as i32;
                    self.piece_x[idx] = c as i32;
                    return;
                }
            }
        }
    }

    /// The neighbour of `(row, col)` in `dir`, or `None` if it falls outside
    /// the grid.
    fn neighbor(&self, row: usize, col: usize, dir: Direction) -> Option<(usize, usize)> {
        let (dr, dc) = dir.step();
        let nr = row as i32 + dr;
        let nc = col as i32 + dc;
        if nr < 0 || nc < 0 || nr as usize >= self.lines || nc as usize >= self.width {
            None
        } else {
            Some((nr as usize, nc as usize))
        }
    }

    /// Attempt to slide `piece` one cell in `dir`. Returns the successor
    /// board on success, or `None` if the move is illegal (piece absent,
    /// move would leave the grid, or any cell of the piece is blocked).
    ///
    /// Legality is checked against the current grid for every cell of the
    /// piece before any mutation happens (`SPEC_FULL.md` §4.1); the actual
    /// effect is then computed entirely against a snapshot (`grid_backup`)
    /// so a row-major write pass never reads state it just wrote.
    pub fn apply(&self, piece: u8, dir: Direction) -> Option<Board> {
        if piece as usize >= self.num_pieces as usize {
            return None;
        }

        let mut cells = Vec::new();
        for (r, row) in self.grid.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if cell.is_piece(piece) {
                    cells.push((r, c));
                }
            }
        }
        if cells.is_empty() {
            return None;
        }

        for &(r, c) in &cells {
            match self.neighbor(r, c, dir) {
                None => return None,
                Some((nr, nc)) => {
                    if !self.grid[nr][nc].passable_for(piece) {
                        return None;
                    }
                }
            }
        }

        let backup = self.grid.clone();
        let mut grid = self.grid.clone();
        let letter = super::piece::letter_for(piece);

        for &(r, c) in &cells {
            let (nr, nc) = self.neighbor(r, c, dir).expect("checked above");
            let destination = backup[nr][nc];
            grid[nr][nc] = if destination == Cell::Goal || destination.to_char() == letter {
                Cell::PieceOnGoal(piece)
            } else {
                Cell::Piece(piece)
            };

            let (dr, dc) = dir.inverse().step();
            let or = r as i32 + dr;
            let oc = c as i32 + dc;
            let occupied_after = or >= 0
                && oc >= 0
                && (or as usize) < self.lines
                && (oc as usize) < self.width
                && backup[or as usize][oc as usize].is_piece(piece);

            match backup[r][c] {
                Cell::PieceOnGoal(_) if !occupied_after => grid[r][c] = Cell::Goal,
                Cell::Piece(_) if !occupied_after => grid[r][c] = Cell::Empty,
                _ => {}
            }
        }

        let mut next = Board {
            lines: self.lines,
            width: self.width,
            grid_backup: backup,
            grid,
            num_pieces: self.num_pieces,
            piece_y: self.piece_y,
            piece_x: self.piece_x,
            trail: self.trail.clone(),
        };
        next.locate_piece(piece);
        next.trail.push(piece, dir);
        Some(next)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for row in &self.grid {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_of(rows: &[&str]) -> Vec<Vec<Cell>> {
        rows.iter()
            .map(|r| r.chars().map(Cell::from_char).collect())
            .collect()
    }

    fn board_of(rows: &[&str]) -> Board {
        Board::from_grid(grid_of(rows))
    }

    #[test]
    fn locates_pieces_on_construction() {
        let b = board_of(&["0G "]);
        assert_eq!(b.piece_pos(0), Some((0, 0)));
        assert_eq!(b.num_pieces(), 1);
    }

    #[test]
    fn already_won_scenario() {
        let b = board_of(&["H  "]);
        assert!(b.is_winning());
    }

    #[test]
    fn one_step_slide_scenario() {
        let b = board_of(&["0G "]);
        let next = b.apply(0, Direction::Right).expect("slide onto goal");
        assert!(next.is_winning());
        assert_eq!(next.trail().to_string(), "0r");
    }

    #[test]
    fn two_step_slide_scenario() {
        let b = board_of(&["0 G "]);
        let mid = b.apply(0, Direction::Right).unwrap();
        assert!(!mid.is_winning());
        let end = mid.apply(0, Direction::Right).unwrap();
        assert!(end.is_winning());
    }

    #[test]
    fn blocked_by_wall_scenario() {
        let b = board_of(&["0#G"]);
        assert!(b.apply(0, Direction::Right).is_none());
    }

    #[test]
    fn piece_cannot_move_off_grid() {
        let b = board_of(&["0"]);
        assert!(b.apply(0, Direction::Left).is_none());
    }

    #[test]
    fn vacated_goal_cell_restored() {
        let b = board_of(&["0G "]);
        let next = b.apply(0, Direction::Right).unwrap();
        assert_eq!(next.cell(0, 0), Cell::Empty);
    }

    #[test]
    fn apply_then_inverse_restores_board() {
        let b = board_of(&["0 G "]);
        let moved = b.apply(0, Direction::Right).unwrap();
        let back = moved.apply(0, Direction::Left).unwrap();
        assert_eq!(back.cell(0, 0), b.cell(0, 0));
        assert_eq!(back.piece_pos(0), b.piece_pos(0));
    }

    #[test]
    fn apply_computes_effect_against_the_pre_move_snapshot() {
        let b = board_of(&["0G "]);
        let next = b.apply(0, Direction::Right).unwrap();
        // The snapshot must still show the board as it stood before the
        // move: digit at (0,0), uncovered goal at (0,1).
        assert_eq!(next.backup_cell(0, 0), Cell::Piece(0));
        assert_eq!(next.backup_cell(0, 1), Cell::Goal);
        // While the live grid already reflects the move's effect, proving
        // the write pass never read back its own partially-updated output.
        assert_eq!(next.cell(0, 0), Cell::Empty);
        assert_eq!(next.cell(0, 1), Cell::PieceOnGoal(0));
    }

    #[test]
    fn piece_popcount_is_conserved_across_a_move() {
        let b = board_of(&["0 1 "]);
        let count0_before = b
            .grid
            .iter()
            .flatten()
            .filter(|c| c.is_piece(0))
            .count();
        let next = b.apply(0, Direction::Right).unwrap();
        let count0_after = next
            .grid
            .iter()
            .flatten()
            .filter(|c| c.is_piece(0))
            .count();
        assert_eq!(count0_before, count0_after);
    }
}
