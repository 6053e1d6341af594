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

//! Shared data types and useful basic definitions for the board model and
//! move engine of the shunt puzzle solver.

// Many module elements are re-exported to make names more ergonomic to access.

mod board;
pub use board::Board;

mod direction;
pub use direction::Direction;

pub mod pack;
pub use pack::StateKey;

mod piece;
pub use piece::{letter_for, Cell, MAX_PIECES};

pub mod trail;
pub use trail::Trail;
