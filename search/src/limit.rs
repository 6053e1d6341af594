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

//! A cooperative cancellation token `run_search` polls once per expansion,
//! before enqueueing that expansion's children. The solver is single
//! threaded and non-suspending (`SPEC_FULL.md` §5), so this is a plain
//! counter rather than the timer-backed, multi-thread-shared limit a
//! parallel search engine would need — but it keeps the same atomics-based
//! shape so a caller wanting wall-clock or node-count budgets can set one
//! without touching the search loop.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

#[derive(Debug, Default)]
/// A budget on how many nodes a single `run_search` call may expand.
pub struct SearchLimit {
    /// Whether the search has been cancelled, either by exhausting
    /// `nodes_cap` or by an external caller.
    cancelled: AtomicBool,
    /// The cumulative number of nodes expanded since the limit was last
    /// reset.
    num_expanded: AtomicU64,
    /// A cap on the number of nodes to expand. `None` means unlimited.
    nodes_cap: Option<u64>,
}

impl SearchLimit {
    /// A limit that never trips.
    pub fn new() -> SearchLimit {
        SearchLimit {
            cancelled: AtomicBool::new(false),
            num_expanded: AtomicU64::new(0),
            nodes_cap: None,
        }
    }

    /// A limit that cancels the search after `cap` nodes have been
    /// expanded.
    pub fn with_node_cap(cap: u64) -> SearchLimit {
        SearchLimit {
            cancelled: AtomicBool::new(false),
            num_expanded: AtomicU64::new(0),
            nodes_cap: Some(cap),
        }
    }

    /// Reset the limit's counters so it can be reused for another
    /// `run_search` call.
    pub fn reset(&self) {
        self.cancelled.store(false, Ordering::Relaxed);
        self.num_expanded.store(0, Ordering::Relaxed);
    }

    /// Poll whether the search is over. Called once per dequeued node,
    /// before its children are enqueued.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Request cancellation from outside the search loop.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Record that one more node has been expanded, tripping the limit if
    /// the node cap has now been exceeded.
    #[inline]
    pub fn record_expansion(&self) {
        let count = self.num_expanded.fetch_add(1, Ordering::Relaxed) + 1;
        if let Some(cap) = self.nodes_cap {
            if count > cap {
                self.cancelled.store(true, Ordering::Relaxed);
            }
        }
    }

    /// The cumulative number of nodes expanded since the last reset.
    pub fn num_expanded(&self) -> u64 {
        self.num_expanded.load(Ordering::Relaxed)
    }
}
