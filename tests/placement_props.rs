// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Property tests over randomly generated piece placements.
extern crate bitboard_core;
extern crate proptest;

use std::collections::BTreeMap;

use bitboard_core::{Bitboard, Board, BoardBuilder, FenOptions};
use bitboard_core::{Color, File, Piece, Rank, Square, TableIndex, COLORS, RANKS};
use proptest::prelude::*;

/// Square index to piece slot, at most one piece per square.
fn placement_strategy() -> impl Strategy<Value = BTreeMap<usize, usize>> {
    proptest::collection::btree_map(0usize..64, 0usize..12, 0..=32)
}

fn placement_fen(placement: &BTreeMap<usize, usize>, side: char) -> String {
    let mut fen = String::new();
    for &rank in RANKS.iter().rev() {
        let mut empty = 0;
        for file in 0..8 {
            let sq = Square::of(rank, File::from_index(file));
            match placement.get(&sq.as_index()) {
                Some(&slot) => {
                    if empty > 0 {
                        fen.push_str(&empty.to_string());
                        empty = 0;
                    }
                    fen.push_str(&Piece::from_slot(slot).to_string());
                }
                None => empty += 1,
            }
        }

        if empty > 0 {
            fen.push_str(&empty.to_string());
        }

        if rank != Rank::One {
            fen.push('/');
        }
    }

    fen.push(' ');
    fen.push(side);
    fen.push_str(" - - 0 1");
    fen
}

proptest! {
    /// Property: every piece letter lands on exactly one bit, in the right slot
    #[test]
    fn prop_placement_round_trip(placement in placement_strategy()) {
        let fen = placement_fen(&placement, 'w');
        let board = Board::from_fen_with(&fen, &FenOptions::strict()).unwrap();

        prop_assert_eq!(placement.len() as u32, board.occupancy().count());
        for (&sq, &slot) in &placement {
            let square = Square::from_index(sq);
            prop_assert_eq!(Some(Piece::from_slot(slot)), board.piece_at(square));
        }
    }

    /// Property: occupancy is the union of the twelve piece bitboards
    #[test]
    fn prop_occupancy_consistent(placement in placement_strategy()) {
        let board = Board::from_fen(placement_fen(&placement, 'b')).unwrap();
        let union = COLORS
            .iter()
            .fold(Bitboard::none(), |acc, &color| acc | board.pieces(color));
        prop_assert_eq!(union, board.occupancy());
        prop_assert!((board.pieces(Color::White) & board.pieces(Color::Black)).empty());
    }

    /// Property: the cached king square is the highest square holding that king
    #[test]
    fn prop_king_square_cached(placement in placement_strategy()) {
        let board = Board::from_fen(placement_fen(&placement, 'w')).unwrap();
        for &color in &COLORS {
            prop_assert_eq!(board.kings(color).last(), board.king_square(color));
        }
    }

    /// Property: the hash depends on the position, not on placement order
    #[test]
    fn prop_hash_order_independent(placement in placement_strategy()) {
        let mut forward = BoardBuilder::new();
        for (&sq, &slot) in placement.iter() {
            forward.place(Piece::from_slot(slot), Square::from_index(sq));
        }

        let mut backward = BoardBuilder::new();
        for (&sq, &slot) in placement.iter().rev() {
            backward.place(Piece::from_slot(slot), Square::from_index(sq));
        }

        let parsed = Board::from_fen(placement_fen(&placement, 'w')).unwrap();
        prop_assert_eq!(forward.build().zobrist_hash(), backward.build().zobrist_hash());
        prop_assert_eq!(forward.build().zobrist_hash(), parsed.zobrist_hash());
    }

    /// Property: lenient parsing accepts any printable input
    #[test]
    fn prop_lenient_never_fails(fen in "[ -~]{0,80}") {
        prop_assert!(Board::from_fen(&fen).is_ok());
    }
}
