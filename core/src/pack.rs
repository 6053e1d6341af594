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

//! Bit-packed state keys. A state is represented for deduplication purposes
//! by the ordered vector of piece positions, not by the grid, packed into
//! the smallest whole number of bytes that fits every piece's `(id, y, x)`
//! atom. See `SPEC_FULL.md` §4.2.

use super::board::Board;

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// An immutable packed key: a bit length and the bytes backing it. Two keys
/// are equal only if both their length and content match — a key must never
/// be compared by content alone, since that would let two keys differing
/// only in their trailing zero padding collide (`SPEC_FULL.md` §9).
pub struct StateKey {
    bits: usize,
    bytes: Vec<u8>,
}

impl StateKey {
    /// An all-zero key of the given bit length.
    fn zeroed(bits: usize) -> StateKey {
        let bytes = vec![0u8; bits.div_ceil(8).max(1)];
        StateKey { bits, bytes }
    }

    /// The key's length in bits.
    pub const fn bit_len(&self) -> usize {
        self.bits
    }

    /// The packed bytes, padded with zero bits up to a whole byte.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn bit_on(&mut self, idx: usize) {
        self.bytes[idx / 8] |= 1 << (idx % 8);
    }

    fn get_bit(&self, idx: usize) -> bool {
        (self.bytes[idx / 8] >> (idx % 8)) & 1 == 1
    }
}

/// `ceil(log2(n))`, floored at 1 bit (matches the original's `calcBits`,
/// which never returns zero since even a single-valued field needs a bit to
/// be addressable inside a byte buffer).
pub fn calc_bits(n: usize) -> u32 {
    if n <= 2 {
        1
    } else {
        (usize::BITS - (n - 1).leading_zeros()).max(1)
    }
}

/// The bit width of one packed atom `<piece_id><y><x>` for a board shaped
/// `num_pieces` pieces over `lines * width` cells.
pub fn atom_bits(num_pieces: usize, lines: usize, width: usize) -> u32 {
    calc_bits(num_pieces) + calc_bits(lines) + calc_bits(width)
}

/// Pack the full state key for `board`: the concatenation of every piece's
/// `<piece_id><y><x>` atom, in piece-id order.
pub fn pack_full(board: &Board) -> StateKey {
    let num_pieces = board.num_pieces() as usize;
    let p_bits = calc_bits(num_pieces);
    let h_bits = calc_bits(board.lines());
    let w_bits = calc_bits(board.width());
    let atom = p_bits + h_bits + w_bits;

    let mut key = StateKey::zeroed(num_pieces * atom as usize);
    let mut bit_idx = 0usize;
    for id in 0..num_pieces {
        let (y, x) = board.piece_pos(id as u8).unwrap_or((0, 0));
        write_field(&mut key, &mut bit_idx, id as u32, p_bits);
        write_field(&mut key, &mut bit_idx, y as u32, h_bits);
        write_field(&mut key, &mut bit_idx, x as u32, w_bits);
    }
    key
}

fn write_field(key: &mut StateKey, bit_idx: &mut usize, value: u32, bits: u32) {
    for j in 0..bits {
        if (value >> j) & 1 == 1 {
            key.bit_on(*bit_idx);
        }
        *bit_idx += 1;
    }
}

/// Extract the subset key for the pieces named by `indices` (given in
/// ascending order) out of an already-packed full key, by copying each
/// piece's `atom_bits`-wide chunk verbatim. This mirrors the original's
/// `pack_subset`, which operates on the packed map rather than recomputing
/// atoms from scratch.
pub fn pack_subset(full: &StateKey, atom_bits: u32, indices: &[u8]) -> StateKey {
    let mut key = StateKey::zeroed(atom_bits as usize * indices.len());
    let mut dest_bit = 0usize;
    for &piece in indices {
        let src_start = piece as usize * atom_bits as usize;
        for bit in 0..atom_bits as usize {
            if full.get_bit(src_start + bit) {
                key.bit_on(dest_bit);
            }
            dest_bit += 1;
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Cell;

    fn board_of(rows: &[&str]) -> Board {
        Board::from_grid(
            rows.iter()
                .map(|r| r.chars().map(Cell::from_char).collect())
                .collect(),
        )
    }

    #[test]
    fn calc_bits_matches_expected_widths() {
        assert_eq!(calc_bits(1), 1);
        assert_eq!(calc_bits(2), 1);
        assert_eq!(calc_bits(3), 2);
        assert_eq!(calc_bits(4), 2);
        assert_eq!(calc_bits(5), 3);
    }

    #[test]
    fn distinct_positions_pack_to_distinct_keys() {
        let a = board_of(&["0 1 G"]);
        let b = a.apply(0, crate::Direction::Right).unwrap();
        assert_ne!(pack_full(&a), pack_full(&b));
    }

    #[test]
    fn identical_positions_pack_identically() {
        let a = board_of(&["0 1 G"]);
        let b = board_of(&["0 1 G"]);
        assert_eq!(pack_full(&a), pack_full(&b));
    }

    #[test]
    fn full_key_equals_subset_over_all_indices() {
        let b = board_of(&["0 1 G"]);
        let full = pack_full(&b);
        let atom = atom_bits(b.num_pieces() as usize, b.lines(), b.width());
        let indices: Vec<u8> = (0..b.num_pieces()).collect();
        let subset = pack_subset(&full, atom, &indices);
        assert_eq!(full, subset);
    }

    #[test]
    fn subset_of_one_piece_is_atom_sized() {
        let b = board_of(&["0 1 G"]);
        let full = pack_full(&b);
        let atom = atom_bits(b.num_pieces() as usize, b.lines(), b.width());
        let subset = pack_subset(&full, atom, &[1]);
        assert_eq!(subset.bit_len(), atom as usize);
    }
}
