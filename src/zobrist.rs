// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Zobrist hashing of board positions.
//!
//! Every (piece, square) pair, the side to move, each castle right and each
//! en-passant file gets a random 64-bit key. A position's hash is the XOR of
//! the keys of everything present in it, so it does not depend on the order
//! the board was built in. Keys come from a fixed-seed generator and are
//! stable from run to run.
use crate::board::Board;
use crate::types::{CastleStatus, Color, Piece, Square, TableIndex};

struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    pub const fn new(seed: u64) -> Xorshift64 {
        Xorshift64 { state: seed }
    }

    pub fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        self.state
    }
}

const SIDE_TO_MOVE_INDEX: usize = 768;
const CASTLING_RIGHTS_INDEX: usize = 769;
const EN_PASSANT_INDEX: usize = 773;
const KEY_COUNT: usize = 781;

static CASTLE_RIGHTS: [CastleStatus; 4] = [
    CastleStatus::WHITE_KINGSIDE,
    CastleStatus::WHITE_QUEENSIDE,
    CastleStatus::BLACK_KINGSIDE,
    CastleStatus::BLACK_QUEENSIDE,
];

struct ZobristHasher {
    magic_hashes: [u64; KEY_COUNT],
}

impl ZobristHasher {
    pub fn new(seed: u64) -> ZobristHasher {
        let mut rng = Xorshift64::new(seed);
        let mut magic_hashes = [0; KEY_COUNT];
        for entry in magic_hashes.iter_mut() {
            *entry = rng.next();
        }

        ZobristHasher { magic_hashes }
    }

    pub fn square_hash(&self, piece: Piece, square: Square) -> u64 {
        // The table holds twelve keys per square, one per piece slot, so the
        // square base is 12 * square.
        let offset = 12 * square.as_index();
        self.magic_hashes[offset + piece.slot()]
    }

    pub fn side_to_move_hash(&self, side: Color) -> u64 {
        match side {
            Color::White => 0,
            Color::Black => self.magic_hashes[SIDE_TO_MOVE_INDEX],
        }
    }

    pub fn en_passant_hash(&self, square: Square) -> u64 {
        self.magic_hashes[square.file().as_index() + EN_PASSANT_INDEX]
    }

    fn castle_hash(&self, offset: usize) -> u64 {
        self.magic_hashes[offset + CASTLING_RIGHTS_INDEX]
    }

    pub fn hash(&self, board: &Board) -> u64 {
        let mut running_hash = 0u64;
        for slot in 0..12 {
            let piece = Piece::from_slot(slot);
            for square in board.piece_bitboard(piece) {
                running_hash ^= self.square_hash(piece, square);
            }
        }

        running_hash ^= self.side_to_move_hash(board.side_to_move());
        let castle_status = board.castle_status();
        for (offset, &right) in CASTLE_RIGHTS.iter().enumerate() {
            if castle_status.contains(right) {
                running_hash ^= self.castle_hash(offset);
            }
        }

        if let Some(ep_square) = board.en_passant_square() {
            running_hash ^= self.en_passant_hash(ep_square);
        }

        running_hash
    }
}

const ZOBRIST_SEED: u64 = 0xf68e34a4e8ccf09a;

lazy_static! {
    static ref ZOBRIST_HASHER: ZobristHasher = ZobristHasher::new(ZOBRIST_SEED);
}

/// Computes the Zobrist hash of the given board from scratch.
pub fn hash(board: &Board) -> u64 {
    ZOBRIST_HASHER.hash(board)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn keys_are_distinct() {
        let hasher = ZobristHasher::new(ZOBRIST_SEED);
        let keys: HashSet<_> = hasher.magic_hashes.iter().cloned().collect();
        assert_eq!(KEY_COUNT, keys.len());
        assert!(!keys.contains(&0));
    }

    #[test]
    fn empty_board_hashes_to_zero() {
        assert_eq!(0, hash(&Board::empty()));
    }

    #[test]
    fn same_seed_same_keys() {
        let one = ZobristHasher::new(ZOBRIST_SEED);
        let two = ZobristHasher::new(ZOBRIST_SEED);
        assert_eq!(&one.magic_hashes[..], &two.magic_hashes[..]);
    }
}
