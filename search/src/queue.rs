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

//! A binary min-heap of search nodes, ordered by depth ascending. A thin
//! wrapper over `std::collections::BinaryHeap`: `SearchNode`'s `Ord` impl
//! already reverses the comparison, so the standard library's doubling
//! growth strategy and max-heap semantics give us the min-heap `SPEC_FULL.md`
//! §4.4 asks for with no bespoke heap code.

use std::collections::BinaryHeap;

use super::node::SearchNode;

#[derive(Default)]
/// Ownership of pushed nodes transfers to the queue; dropping the queue
/// drops any nodes still inside it.
pub struct PriorityQueue {
    heap: BinaryHeap<SearchNode>,
}

impl PriorityQueue {
    /// An empty queue.
    pub fn new() -> PriorityQueue {
        PriorityQueue::default()
    }

    /// Push a node onto the queue.
    pub fn push(&mut self, node: SearchNode) {
        self.heap.push(node);
    }

    /// Pop the minimum-depth node, or `None` if the queue is empty.
    pub fn pop_min(&mut self) -> Option<SearchNode> {
        self.heap.pop()
    }

    /// Whether the queue holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The number of nodes currently queued.
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shunt_core::{Board, Cell};

    fn board_of(rows: &[&str]) -> Board {
        Board::from_grid(
            rows.iter()
                .map(|r| r.chars().map(Cell::from_char).collect())
                .collect(),
        )
    }

    #[test]
    fn pops_in_ascending_depth_order() {
        let mut pq = PriorityQueue::new();
        pq.push(SearchNode::new(board_of(&["0 G"]), 5));
        pq.push(SearchNode::new(board_of(&["0 G"]), 1));
        pq.push(SearchNode::new(board_of(&["0 G"]), 3));

        assert_eq!(pq.pop_min().unwrap().depth(), 1);
        assert_eq!(pq.pop_min().unwrap().depth(), 3);
        assert_eq!(pq.pop_min().unwrap().depth(), 5);
        assert!(pq.pop_min().is_none());
    }

    #[test]
    fn empty_queue_reports_empty() {
        let mut pq = PriorityQueue::new();
        assert!(pq.is_empty());
        pq.push(SearchNode::new(board_of(&["0 G"]), 0));
        assert!(!pq.is_empty());
        pq.pop_min();
        assert!(pq.is_empty());
    }
}
