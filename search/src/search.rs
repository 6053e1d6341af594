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

//! The uniform-cost search loop with optional novelty pruning of a given
//! width. `run_search` is stateless across calls: every closed set and
//! novelty table it builds is local to one invocation, so the scheduler can
//! call it repeatedly at increasing widths without any state bleeding
//! between runs.

use std::fmt::{self, Display, Formatter};

use shunt_core::{
    pack::{atom_bits, pack_full, pack_subset},
    Board, Direction, StateKey,
};

use crate::{limit::SearchLimit, node::SearchNode, queue::PriorityQueue, trie::RadixTrie};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Failure modes `run_search` itself can report. Illegal moves and duplicate
/// states are not errors — they are the ordinary pruning path and are
/// folded into `SearchRunResult`'s counters instead.
pub enum SearchError {
    /// The search was cancelled by its `SearchLimit` before the queue ran
    /// dry or a solution was found.
    Cancelled,
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Cancelled => write!(f, "search cancelled before completion"),
        }
    }
}

impl std::error::Error for SearchError {}

/// The outcome of a single `run_search` call.
pub type SearchResult = Result<SearchRunResult, SearchError>;

#[derive(Debug)]
/// Everything the scheduler needs out of one `run_search` call.
pub struct SearchRunResult {
    /// Whether a winning board was found.
    pub solved: bool,
    /// The winning board, if `solved`.
    pub final_board: Option<Board>,
    /// Number of nodes popped from the queue and expanded.
    pub expanded: u64,
    /// Number of nodes pushed onto the queue (including the root).
    pub generated: u64,
    /// Number of candidate states rejected as already seen, either by the
    /// closed set or by novelty pruning.
    pub duplicated: u64,
}

impl SearchRunResult {
    fn unsolved() -> SearchRunResult {
        SearchRunResult {
            solved: false,
            final_board: None,
            expanded: 0,
            generated: 0,
            duplicated: 0,
        }
    }
}

/// Run uniform-cost search from `initial`, optionally pruning by novelty at
/// `width_limit`. `width_limit == 0` means pure UCS; `width_limit >= 1`
/// means IW(`width_limit`).
pub fn run_search(initial: &Board, width_limit: usize, limit: &SearchLimit) -> SearchResult {
    let mut result = SearchRunResult::unsolved();

    let num_pieces = initial.num_pieces() as usize;
    let novelty_limit = width_limit.min(num_pieces);
    let atom = atom_bits(num_pieces, initial.lines(), initial.width());

    let mut closed = RadixTrie::new();
    let mut partial: Vec<RadixTrie> = (0..novelty_limit).map(|_| RadixTrie::new()).collect();

    let mut queue = PriorityQueue::new();
    queue.push(SearchNode::new(initial.clone(), 0));
    result.generated += 1;

    while let Some(current) = queue.pop_min() {
        if limit.is_cancelled() {
            return Err(SearchError::Cancelled);
        }
        limit.record_expansion();
        result.expanded += 1;

        let board = current.board();

        if board.is_winning() {
            result.solved = true;
            result.final_board = Some(current.into_board());
            break;
        }

        let full_key = pack_full(board);
        if closed.contains(&full_key) {
            result.duplicated += 1;
            continue;
        }
        closed.insert(&full_key);
        for size in 1..=novelty_limit {
            insert_all_combinations(&mut partial[size - 1], &full_key, atom, num_pieces, size);
        }

        for piece in 0..num_pieces as u8 {
            for &dir in &Direction::ALL {
                let Some(child) = board.apply(piece, dir) else {
                    continue;
                };

                let child_key = pack_full(&child);
                let seen_before = closed.contains(&child_key);
                let pruned_by_novelty = !seen_before
                    && novelty_limit > 0
                    && (1..=novelty_limit).all(|size| {
                        all_combinations_present(&partial[size - 1], &child_key, atom, num_pieces, size)
                    });

                if seen_before || pruned_by_novelty {
                    result.duplicated += 1;
                    continue;
                }

                queue.push(SearchNode::new(child, current.depth() + 1));
                result.generated += 1;
            }
        }
    }

    Ok(result)
}

/// Advances `indices` to the lexicographically next `size`-subset of
/// `0..num_pieces`, in place. Returns `false` once every subset has been
/// visited.
fn next_combination(indices: &mut [u8], num_pieces: usize) -> bool {
    let size = indices.len();
    for i in (0..size).rev() {
        if (indices[i] as usize) < num_pieces - (size - i) {
            indices[i] += 1;
            for j in (i + 1)..size {
                indices[j] = indices[j - 1] + 1;
            }
            return true;
        }
    }
    false
}

fn all_combinations_present(
    trie: &RadixTrie,
    full: &StateKey,
    atom: u32,
    num_pieces: usize,
    size: usize,
) -> bool {
    if size == 0 || size > num_pieces {
        return true;
    }
    let mut indices: Vec<u8> = (0..size as u8).collect();
    loop {
        let subset = pack_subset(full, atom, &indices);
        if !trie.contains(&subset) {
            return false;
        }
        if !next_combination(&mut indices, num_pieces) {
            return true;
        }
    }
}

fn insert_all_combinations(
    trie: &mut RadixTrie,
    full: &StateKey,
    atom: u32,
    num_pieces: usize,
    size: usize,
) {
    if size == 0 || size > num_pieces {
        return;
    }
    let mut indices: Vec<u8> = (0..size as u8).collect();
    loop {
        let subset = pack_subset(full, atom, &indices);
        trie.insert(&subset);
        if !next_combination(&mut indices, num_pieces) {
            break;
        }
    }
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
    fn already_won_needs_no_moves() {
        let b = board_of(&["H  "]);
        let r = run_search(&b, 0, &SearchLimit::new()).unwrap();
        assert!(r.solved);
        assert_eq!(r.final_board.unwrap().trail().len(), 0);
    }

    #[test]
    fn one_step_slide() {
        let b = board_of(&["0G "]);
        let r = run_search(&b, 0, &SearchLimit::new()).unwrap();
        assert!(r.solved);
        assert_eq!(r.final_board.unwrap().trail().to_string(), "0r");
    }

    #[test]
    fn two_step_slide_is_optimal_under_ucs() {
        let b = board_of(&["0 G "]);
        let r = run_search(&b, 0, &SearchLimit::new()).unwrap();
        assert!(r.solved);
        assert_eq!(r.final_board.unwrap().trail().to_string(), "0r0r");
    }

    #[test]
    fn blocked_by_wall_has_no_solution() {
        let b = board_of(&["0#G"]);
        let r = run_search(&b, 0, &SearchLimit::new()).unwrap();
        assert!(!r.solved);
        assert!(r.final_board.is_none());
    }

    #[test]
    fn piece_swap_scenario_solves_with_even_length_trail() {
        let b = board_of(&["01 G"]);
        let r = run_search(&b, 0, &SearchLimit::new()).unwrap();
        assert!(r.solved);
        let trail = r.final_board.unwrap().trail().to_string();
        assert_eq!(trail.len() % 2, 0);
    }

    #[test]
    fn closed_set_never_lets_expanded_exceed_generated() {
        let b = board_of(&["0  G"]);
        let r = run_search(&b, 0, &SearchLimit::new()).unwrap();
        assert!(r.expanded <= r.generated);
    }

    #[test]
    fn node_cap_cancels_the_search() {
        let b = board_of(&["0       G"]);
        let limit = SearchLimit::with_node_cap(1);
        let err = run_search(&b, 0, &limit).unwrap_err();
        assert_eq!(err, SearchError::Cancelled);
    }

    #[test]
    fn iw_one_still_solves_a_single_piece_puzzle() {
        let b = board_of(&["0 G"]);
        let r = run_search(&b, 1, &SearchLimit::new()).unwrap();
        assert!(r.solved);
    }
}
