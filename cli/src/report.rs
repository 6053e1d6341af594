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

//! The solve report printed to stdout: one line per statistic, in the exact
//! field order and wording the original `report_results` used.

use std::fmt::{self, Display, Formatter};

use shunt_core::Board;
use shunt_search::Solution;

#[derive(Debug)]
/// Everything printed at the end of a `solve` run.
pub struct Report {
    solution: Solution,
    initial_board: Board,
    elapsed_secs: f64,
}

impl Report {
    /// Build a report from the scheduler's `Solution` and the board the
    /// search started from, timed over `elapsed_secs` seconds.
    pub fn new(solution: Solution, initial_board: Board, elapsed_secs: f64) -> Report {
        Report {
            solution,
            initial_board,
            elapsed_secs,
        }
    }

    /// Nodes expanded per second, guarded against division by a near-zero
    /// elapsed time by flooring the denominator at `1.0` rather than at the
    /// smallest representable float.
    fn nodes_per_second(&self) -> f64 {
        (self.solution.expanded as f64 + 1.0) / self.elapsed_secs.max(1.0)
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let path = self
            .solution
            .final_board
            .as_ref()
            .map(|b| b.trail().to_string())
            .unwrap_or_default();

        writeln!(f, "Solution path: {path}")?;
        writeln!(f, "Execution time: {:.6}", self.elapsed_secs)?;
        writeln!(f, "Expanded nodes: {}", self.solution.expanded)?;
        writeln!(f, "Generated nodes: {}", self.solution.generated)?;
        writeln!(f, "Duplicated nodes: {}", self.solution.duplicated)?;
        writeln!(
            f,
            "Auxiliary memory usage (bytes): {}",
            self.solution.generated * std::mem::size_of::<Board>() as u64
        )?;
        writeln!(
            f,
            "Number of pieces in the puzzle: {}",
            self.initial_board.num_pieces()
        )?;
        writeln!(
            f,
            "Number of steps in solution: {}",
            self.solution
                .final_board
                .as_ref()
                .map_or(0, |b| b.trail().len())
        )?;
        writeln!(
            f,
            "Number of empty spaces: {}",
            self.solution
                .final_board
                .as_ref()
                .map_or(0, |b| b.count_empty())
        )?;
        writeln!(f, "Solved by {}", self.solution.label)?;
        writeln!(
            f,
            "Number of nodes expanded per second: {:.2}",
            self.nodes_per_second()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shunt_search::{find_solution, Config, SearchLimit};

    fn board_of(rows: &[&str]) -> Board {
        Board::from_grid(
            rows.iter()
                .map(|r| r.chars().map(shunt_core::Cell::from_char).collect())
                .collect(),
        )
    }

    #[test]
    fn report_names_the_winning_algorithm() {
        let b = board_of(&["0G "]);
        let solution = find_solution(&b, Config::with_algorithm(2), &SearchLimit::new()).unwrap();
        let report = Report::new(solution, b, 0.0);
        let text = report.to_string();
        assert!(text.contains("Solved by Algorithm2-UCS"));
        assert!(text.contains("Solution path: 0r"));
    }

    #[test]
    fn empty_spaces_are_counted_on_the_final_board_not_the_initial_one() {
        let b = board_of(&["0 G"]);
        let solution = find_solution(&b, Config::with_algorithm(2), &SearchLimit::new()).unwrap();
        let report = Report::new(solution, b, 0.0);
        let text = report.to_string();
        // Initial board "0 G" has one empty cell; after "0" slides onto "G"
        // the vacated start cell joins it, leaving two.
        assert!(text.contains("Number of empty spaces: 2"));
    }

    #[test]
    fn nodes_per_second_floors_elapsed_at_one() {
        let b = board_of(&["0G "]);
        let solution = find_solution(&b, Config::with_algorithm(2), &SearchLimit::new()).unwrap();
        let expanded = solution.expanded;
        let report = Report::new(solution, b, 0.0);
        assert_eq!(report.nodes_per_second(), expanded as f64 + 1.0);
    }
}
