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

//! An exact-membership radix trie over variable-length packed keys. Used
//! both as the closed set (full state keys) and as the per-width novelty
//! tables (subset keys), never as a lossy cache: unlike a transposition
//! table, nothing here is ever evicted, because correctness depends on
//! "has this exact key been seen" rather than "probably seen recently."
//!
//! Keys are `(bit length, bytes)` pairs; a trie node keyed only on bytes
//! would let two keys differing solely in trailing zero padding collide
//! (`SPEC_FULL.md` §9), so every leaf records the set of bit lengths that
//! terminate there.

use std::collections::HashSet;

use nohash_hasher::IntMap;

use shunt_core::StateKey;

#[derive(Default)]
struct TrieNode {
    /// Children keyed by the next byte of a packed key. `IntMap` (from
    /// `nohash-hasher`) skips re-hashing the already-uniform byte key.
    children: IntMap<u8, TrieNode>,
    /// Bit lengths of keys that terminate exactly at this node (after
    /// consuming the same sequence of bytes that reached it).
    terminal_lengths: HashSet<usize>,
}

#[derive(Default)]
/// Membership/insertion over packed state keys of any length.
pub struct RadixTrie {
    root: TrieNode,
}

impl RadixTrie {
    /// An empty trie.
    pub fn new() -> RadixTrie {
        RadixTrie::default()
    }

    /// Insert `key`. Inserting an already-present key is a no-op.
    pub fn insert(&mut self, key: &StateKey) {
        let mut node = &mut self.root;
        for &byte in key.bytes() {
            node = node.children.entry(byte).or_default();
        }
        node.terminal_lengths.insert(key.bit_len());
    }

    /// Whether `key` (matched jointly on length and content) has been
    /// inserted before.
    pub fn contains(&self, key: &StateKey) -> bool {
        let mut node = &self.root;
        for &byte in key.bytes() {
            match node.children.get(&byte) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node.terminal_lengths.contains(&key.bit_len())
    }
}
