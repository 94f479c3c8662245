// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::attacks::AttackTables;
use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::types::{Color, Square};

/// Attack queries upon a static board. The answers are raw attack maps:
/// pins and the safety of the attacker's own king are not considered.
pub struct Analysis<'a> {
    board: &'a Board,
    tables: &'a AttackTables,
}

impl<'a> Analysis<'a> {
    pub fn new(board: &'a Board, tables: &'a AttackTables) -> Analysis<'a> {
        Analysis { board, tables }
    }

    /// Returns every square attacked by at least one piece of the given color.
    ///
    /// Sliders are blocked by the first occupied square on each ray, which is
    /// itself attacked. Pawns contribute their two capture squares and never
    /// their pushes.
    pub fn attacked_squares(&self, color: Color) -> Bitboard {
        let board = self.board;
        let tables = self.tables;
        let occupancy = board.occupancy();
        let mut attacks = Bitboard::none();

        let mut queens = board.queens(color);
        while let Some(sq) = queens.pop_lowest() {
            attacks |= tables.bishop_attacks(sq, occupancy);
            attacks |= tables.rook_attacks(sq, occupancy);
        }

        let mut bishops = board.bishops(color);
        while let Some(sq) = bishops.pop_lowest() {
            attacks |= tables.bishop_attacks(sq, occupancy);
        }

        let mut rooks = board.rooks(color);
        while let Some(sq) = rooks.pop_lowest() {
            attacks |= tables.rook_attacks(sq, occupancy);
        }

        let mut knights = board.knights(color);
        while let Some(sq) = knights.pop_lowest() {
            attacks |= tables.knight_attacks(sq);
        }

        let mut pawns = board.pawns(color);
        while let Some(sq) = pawns.pop_lowest() {
            attacks |= tables.pawn_attacks_east(sq, color);
            attacks |= tables.pawn_attacks_west(sq, color);
        }

        let mut kings = board.kings(color);
        while let Some(sq) = kings.pop_lowest() {
            attacks |= tables.king_attacks(sq);
        }

        attacks
    }

    /// Returns every square attacked by the side to move.
    pub fn side_to_move_attacks(&self) -> Bitboard {
        self.attacked_squares(self.board.side_to_move())
    }

    pub fn is_attacked(&self, square: Square, by: Color) -> bool {
        self.attacked_squares(by).test(square)
    }

    /// Whether the given color's king is attacked by the other color. A color
    /// with no king is never in check.
    pub fn in_check(&self, color: Color) -> bool {
        match self.board.king_square(color) {
            Some(king) => self.is_attacked(king, color.toggle()),
            None => false,
        }
    }
}

/// Computes the attack map of the side to move on the given board.
pub fn compute_attacks(board: &Board, tables: &AttackTables) -> Bitboard {
    Analysis::new(board, tables).side_to_move_attacks()
}
