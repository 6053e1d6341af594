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

//! The outer scheduler choosing which of the three solving strategies to
//! run, and in what order. This is the piece that turns `run_search` — a
//! single uniform-cost pass at one fixed novelty width — into the three
//! user-selectable algorithms: a fixed width, pure UCS, or an iterative
//! widening sweep that falls back to UCS if no width below the piece count
//! finds a solution.

use shunt_core::Board;

use crate::{
    config::Config,
    limit::SearchLimit,
    search::{run_search, SearchError, SearchRunResult},
};

#[derive(Debug)]
/// The result of a complete solving run, combining every sub-call to
/// `run_search` the chosen algorithm made.
pub struct Solution {
    /// Whether a winning board was found.
    pub solved: bool,
    /// The winning board, if `solved`.
    pub final_board: Option<Board>,
    /// Nodes expanded, summed across every `run_search` call this algorithm
    /// made.
    pub expanded: u64,
    /// Nodes generated, summed across every `run_search` call this
    /// algorithm made.
    pub generated: u64,
    /// Nodes rejected as duplicates, summed across every `run_search` call
    /// this algorithm made.
    pub duplicated: u64,
    /// A human-readable label for which algorithm (and, where relevant,
    /// which width) produced this result.
    pub label: String,
}

impl Solution {
    fn empty() -> Solution {
        Solution {
            solved: false,
            final_board: None,
            expanded: 0,
            generated: 0,
            duplicated: 0,
            label: String::new(),
        }
    }

    fn absorb(&mut self, run: SearchRunResult) {
        self.expanded += run.expanded;
        self.generated += run.generated;
        self.duplicated += run.duplicated;
        if run.solved {
            self.solved = true;
            self.final_board = run.final_board;
        }
    }
}

/// Run the algorithm selected by `config` against `initial`, returning a
/// `Solution` that accumulates counters across every sub-search it took.
pub fn find_solution(
    initial: &Board,
    config: Config,
    limit: &SearchLimit,
) -> Result<Solution, SearchError> {
    match config.algorithm {
        1 => fixed_width(initial, limit),
        2 => pure_ucs(initial, limit),
        _ => iterative_widening(initial, limit),
    }
}

/// Algorithm 1: a single IW pass at a width one greater than the piece
/// count, wide enough that novelty pruning can never reject a state that
/// uniform-cost search itself would have accepted.
fn fixed_width(initial: &Board, limit: &SearchLimit) -> Result<Solution, SearchError> {
    let width = initial.num_pieces() as usize + 1;
    let mut solution = Solution::empty();
    let run = run_search(initial, width, limit)?;
    let solved = run.solved;
    solution.absorb(run);
    solution.label = format!("Algorithm1-IW({width})");
    if !solved {
        solution.label.push_str(" (no solution)");
    }
    Ok(solution)
}

/// Algorithm 2: plain uniform-cost search with no novelty pruning at all.
fn pure_ucs(initial: &Board, limit: &SearchLimit) -> Result<Solution, SearchError> {
    let mut solution = Solution::empty();
    let run = run_search(initial, 0, limit)?;
    let solved = run.solved;
    solution.absorb(run);
    solution.label = "Algorithm2-UCS".to_string();
    if !solved {
        solution.label.push_str(" (no solution)");
    }
    Ok(solution)
}

/// Algorithm 3: widen from IW(1) up to IW(`num_pieces`), one `run_search`
/// call per width, stopping at the first width that solves the puzzle. If
/// every width fails, fall back to a final pure UCS pass. Counters
/// accumulate across every sub-run, win or lose, so the reporter's totals
/// reflect the full search effort rather than only the winning pass.
fn iterative_widening(initial: &Board, limit: &SearchLimit) -> Result<Solution, SearchError> {
    let num_pieces = initial.num_pieces() as usize;
    let mut solution = Solution::empty();

    for width in 1..=num_pieces {
        let run = run_search(initial, width, limit)?;
        let solved = run.solved;
        solution.absorb(run);
        if solved {
            solution.label = format!("Algorithm3-IW({width})");
            return Ok(solution);
        }
    }

    let run = run_search(initial, 0, limit)?;
    let solved = run.solved;
    solution.absorb(run);
    solution.label = "Algorithm3-UCS".to_string();
    if !solved {
        solution.label.push_str(" (no solution)");
    }
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shunt_core::Cell;

    fn board_of(rows: &[&str]) -> Board {
        Board::from_grid(
            rows.iter()
                .map(|r| r.chars().map(Cell::from_char).collect())
                .collect(),
        )
    }

    #[test]
    fn algorithm_one_label_names_its_fixed_width() {
        let b = board_of(&["0G "]);
        let s = find_solution(&b, Config::with_algorithm(1), &SearchLimit::new()).unwrap();
        assert!(s.solved);
        assert_eq!(s.label, "Algorithm1-IW(2)");
    }

    #[test]
    fn algorithm_two_label_is_plain_ucs() {
        let b = board_of(&["0G "]);
        let s = find_solution(&b, Config::with_algorithm(2), &SearchLimit::new()).unwrap();
        assert!(s.solved);
        assert_eq!(s.label, "Algorithm2-UCS");
    }

    #[test]
    fn algorithm_three_solves_at_the_narrowest_sufficient_width() {
        let b = board_of(&["0G "]);
        let s = find_solution(&b, Config::with_algorithm(3), &SearchLimit::new()).unwrap();
        assert!(s.solved);
        assert_eq!(s.label, "Algorithm3-IW(1)");
    }

    #[test]
    fn algorithm_three_falls_back_to_ucs_label_when_no_width_solves() {
        let b = board_of(&["0#G"]);
        let s = find_solution(&b, Config::with_algorithm(3), &SearchLimit::new()).unwrap();
        assert!(!s.solved);
        assert_eq!(s.label, "Algorithm3-UCS (no solution)");
    }

    #[test]
    fn cancellation_propagates_out_of_the_scheduler() {
        let b = board_of(&["0       G"]);
        let limit = SearchLimit::with_node_cap(1);
        let err = find_solution(&b, Config::with_algorithm(2), &limit).unwrap_err();
        assert_eq!(err, SearchError::Cancelled);
    }
}
