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

//! Loading and validating a map file from disk into a `Board`.

use std::{
    collections::HashSet,
    fmt::{self, Display, Formatter},
    fs, io,
    path::Path,
};

use shunt_core::{Board, Cell, MAX_PIECES};

#[derive(Debug)]
/// Everything that can go wrong turning a map file into a `Board`.
pub enum MapError {
    /// The file could not be read.
    Io(io::Error),
    /// The map has no rows at all.
    Empty,
    /// Not every row has the same width.
    RaggedRow,
    /// A piece id is present whose predecessor is missing, e.g. pieces `0`
    /// and `2` appear but not `1`.
    NonContiguousPieces,
    /// No `'G'` (and no piece already shown on a goal) appears anywhere.
    NoGoal,
    /// A piece id of `10` or higher was found; the cell alphabet only has
    /// digits `0`-`9` to spare.
    TooManyPieces,
}

impl Display for MapError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Io(e) => write!(f, "could not read map file: {e}"),
            MapError::Empty => write!(f, "map is empty"),
            MapError::RaggedRow => write!(f, "map rows do not all have the same width"),
            MapError::NonContiguousPieces => {
                write!(f, "piece ids are not contiguous starting from 0")
            }
            MapError::NoGoal => write!(f, "map has no goal cell"),
            MapError::TooManyPieces => write!(f, "map has more than {MAX_PIECES} pieces"),
        }
    }
}

impl std::error::Error for MapError {}

impl From<io::Error> for MapError {
    fn from(e: io::Error) -> MapError {
        MapError::Io(e)
    }
}

/// Read the map file at `path` and build a validated `Board` from it.
pub fn load_map<P: AsRef<Path>>(path: P) -> Result<Board, MapError> {
    let text = fs::read_to_string(path)?;
    parse_map(&text)
}

/// Parse map text (one row per line, trailing newline optional) into a
/// validated `Board`.
fn parse_map(text: &str) -> Result<Board, MapError> {
    let rows: Vec<Vec<Cell>> = text
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().map(Cell::from_char).collect())
        .collect();

    if rows.is_empty() {
        return Err(MapError::Empty);
    }

    let width = rows[0].len();
    if rows.iter().any(|r| r.len() != width) {
        return Err(MapError::RaggedRow);
    }

    let mut present: HashSet<u8> = HashSet::new();
    let mut saw_goal = false;
    let mut max_id: Option<u8> = None;
    for row in &rows {
        for cell in row {
            match cell {
                Cell::Goal => saw_goal = true,
                Cell::PieceOnGoal(id) => {
                    saw_goal = true;
                    present.insert(*id);
                    max_id = Some(max_id.map_or(*id, |m| m.max(*id)));
                }
                Cell::Piece(id) => {
                    present.insert(*id);
                    max_id = Some(max_id.map_or(*id, |m| m.max(*id)));
                }
                _ => {}
            }
        }
    }

    if let Some(max_id) = max_id {
        if max_id as usize >= MAX_PIECES {
            return Err(MapError::TooManyPieces);
        }
        if (0..=max_id).any(|id| !present.contains(&id)) {
            return Err(MapError::NonContiguousPieces);
        }
    }

    if !saw_goal {
        return Err(MapError::NoGoal);
    }

    Ok(Board::from_grid(rows))
}
