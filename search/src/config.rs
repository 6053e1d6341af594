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

//! Configuration options for a solving run, mutated directly by the caller
//! (the CLI) rather than through a config file or environment variables —
//! there is exactly one recognized option.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Which of the three scheduler strategies to run.
pub struct Config {
    /// `1` = fixed IW(`num_pieces + 1`), `2` = pure UCS, `3` = iterative
    /// widening with UCS fallback. Values outside `1..=3` are rejected by
    /// `Config::with_algorithm`, mirroring `set_solver_algorithm`'s
    /// silent-ignore rule in the original source.
    pub algorithm: u8,
}

impl Config {
    /// The default configuration: algorithm 3, iterative widening with UCS
    /// fallback.
    pub fn new() -> Config {
        Config { algorithm: 3 }
    }

    /// Build a config from a requested algorithm number, falling back to the
    /// default (3) if it is out of range.
    pub fn with_algorithm(algorithm: u8) -> Config {
        if (1..=3).contains(&algorithm) {
            Config { algorithm }
        } else {
            Config::new()
        }
    }
}

impl Default for Config {
    fn default() -> Config {
        Config::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_algorithm_three() {
        assert_eq!(Config::new().algorithm, 3);
    }

    #[test]
    fn out_of_range_falls_back_to_default() {
        assert_eq!(Config::with_algorithm(0).algorithm, 3);
        assert_eq!(Config::with_algorithm(7).algorithm, 3);
    }

    #[test]
    fn in_range_is_kept() {
        assert_eq!(Config::with_algorithm(1).algorithm, 1);
        assert_eq!(Config::with_algorithm(2).algorithm, 2);
    }
}
