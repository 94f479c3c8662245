// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::analysis;
use crate::attacks::{self, AttackTables};
use crate::bitboard::Bitboard;
use crate::types::{CastleStatus, Color, Piece, PieceKind, Square, PIECE_KINDS};
use crate::zobrist;

/// A chess position stored as twelve bitboards, one per piece kind and color,
/// together with the state derived from them.
///
/// A `Board` is only ever produced by finalizing a `BoardBuilder` (which is
/// what FEN parsing does), so its occupancy, king squares, hash and attack
/// map always agree with its piece placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pieces: [Bitboard; 12],
    occupancy: Bitboard,
    side_to_move: Color,
    castle_status: CastleStatus,
    en_passant_square: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
    white_king: Option<Square>,
    black_king: Option<Square>,
    zobrist_hash: u64,
    attacks: Bitboard,
}

//
// Board state getters
//

impl Board {
    /// An empty board with White to move.
    pub fn empty() -> Board {
        BoardBuilder::new().build()
    }

    /// The bitboard for a single piece kind and color. This is a direct
    /// lookup into the slot given by `Piece::slot`.
    pub fn piece_bitboard(&self, piece: Piece) -> Bitboard {
        self.pieces[piece.slot()]
    }

    pub fn pieces_of_kind(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.piece_bitboard(Piece::new(kind, color))
    }

    /// All squares occupied by pieces of the given color.
    pub fn pieces(&self, color: Color) -> Bitboard {
        PIECE_KINDS
            .iter()
            .fold(Bitboard::none(), |acc, &kind| {
                acc | self.pieces_of_kind(color, kind)
            })
    }

    pub fn pawns(&self, color: Color) -> Bitboard {
        self.pieces_of_kind(color, PieceKind::Pawn)
    }

    pub fn knights(&self, color: Color) -> Bitboard {
        self.pieces_of_kind(color, PieceKind::Knight)
    }

    pub fn bishops(&self, color: Color) -> Bitboard {
        self.pieces_of_kind(color, PieceKind::Bishop)
    }

    pub fn rooks(&self, color: Color) -> Bitboard {
        self.pieces_of_kind(color, PieceKind::Rook)
    }

    pub fn queens(&self, color: Color) -> Bitboard {
        self.pieces_of_kind(color, PieceKind::Queen)
    }

    pub fn kings(&self, color: Color) -> Bitboard {
        self.pieces_of_kind(color, PieceKind::King)
    }

    /// The union of all twelve piece bitboards.
    pub fn occupancy(&self) -> Bitboard {
        self.occupancy
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn castle_status(&self) -> CastleStatus {
        self.castle_status
    }

    pub fn can_castle_kingside(&self, color: Color) -> bool {
        match color {
            Color::White => self.castle_status.contains(CastleStatus::WHITE_KINGSIDE),
            Color::Black => self.castle_status.contains(CastleStatus::BLACK_KINGSIDE),
        }
    }

    pub fn can_castle_queenside(&self, color: Color) -> bool {
        match color {
            Color::White => self.castle_status.contains(CastleStatus::WHITE_QUEENSIDE),
            Color::Black => self.castle_status.contains(CastleStatus::BLACK_QUEENSIDE),
        }
    }

    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// The cached square of the given color's king, or `None` if that color
    /// has no king on the board.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    pub fn zobrist_hash(&self) -> u64 {
        self.zobrist_hash
    }

    /// Every square attacked by the side to move.
    pub fn attacks(&self) -> Bitboard {
        self.attacks
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if !self.occupancy.test(square) {
            return None;
        }

        (0..12)
            .find(|&slot| self.pieces[slot].test(square))
            .map(Piece::from_slot)
    }

    /// A builder holding this board's placement and flags, for deriving a
    /// new board from this one.
    pub fn to_builder(&self) -> BoardBuilder {
        BoardBuilder {
            pieces: self.pieces,
            side_to_move: self.side_to_move,
            castle_status: self.castle_status,
            en_passant_square: self.en_passant_square,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

/// The mutable half of a board: piece placement, side to move, castle rights,
/// en-passant square and clocks, with none of the derived state.
///
/// `finalize` computes the derived state and hands back a `Board`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardBuilder {
    pieces: [Bitboard; 12],
    side_to_move: Color,
    castle_status: CastleStatus,
    en_passant_square: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl BoardBuilder {
    pub fn new() -> BoardBuilder {
        BoardBuilder {
            pieces: [Bitboard::none(); 12],
            side_to_move: Color::White,
            castle_status: CastleStatus::NONE,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Clears every piece bitboard, gives the move to White and removes all
    /// castle rights and the en-passant square. Clocks go back to their
    /// starting values.
    pub fn reset(&mut self) {
        for board in self.pieces.iter_mut() {
            *board = Bitboard::none();
        }

        self.side_to_move = Color::White;
        self.castle_status = CastleStatus::NONE;
        self.en_passant_square = None;
        self.halfmove_clock = 0;
        self.fullmove_number = 1;
    }

    pub fn piece_bitboard(&self, piece: Piece) -> Bitboard {
        self.pieces[piece.slot()]
    }

    /// Mutable access to the bitboard for a single piece kind and color.
    pub fn piece_bitboard_mut(&mut self, piece: Piece) -> &mut Bitboard {
        &mut self.pieces[piece.slot()]
    }

    /// Puts a piece on a square. Nothing stops two pieces from sharing a
    /// square; callers that care should check first.
    pub fn place(&mut self, piece: Piece, square: Square) -> &mut BoardBuilder {
        self.piece_bitboard_mut(piece).set(square);
        self
    }

    pub fn set_side_to_move(&mut self, color: Color) -> &mut BoardBuilder {
        self.side_to_move = color;
        self
    }

    pub fn set_castle_status(&mut self, status: CastleStatus) -> &mut BoardBuilder {
        self.castle_status = status;
        self
    }

    pub fn add_castle_right(&mut self, right: CastleStatus) -> &mut BoardBuilder {
        self.castle_status |= right;
        self
    }

    pub fn set_en_passant_square(&mut self, square: Option<Square>) -> &mut BoardBuilder {
        self.en_passant_square = square;
        self
    }

    pub fn set_halfmove_clock(&mut self, clock: u32) -> &mut BoardBuilder {
        self.halfmove_clock = clock;
        self
    }

    pub fn set_fullmove_number(&mut self, number: u32) -> &mut BoardBuilder {
        self.fullmove_number = number;
        self
    }

    /// Computes the derived state and produces a board, using the given
    /// attack tables for the attack map.
    ///
    /// The steps run in a fixed order, since each one reads the results of
    /// the ones before it: king squares, occupancy, hash, attacks.
    pub fn finalize(&self, tables: &AttackTables) -> Board {
        let mut board = Board {
            pieces: self.pieces,
            occupancy: Bitboard::none(),
            side_to_move: self.side_to_move,
            castle_status: self.castle_status,
            en_passant_square: self.en_passant_square,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            white_king: None,
            black_king: None,
            zobrist_hash: 0,
            attacks: Bitboard::none(),
        };

        // With more than one king of a color, the highest square wins.
        board.white_king = board.kings(Color::White).last();
        board.black_king = board.kings(Color::Black).last();
        board.occupancy = board
            .pieces
            .iter()
            .fold(Bitboard::none(), |acc, &pieces| acc | pieces);
        board.zobrist_hash = zobrist::hash(&board);
        board.attacks = analysis::compute_attacks(&board, tables);
        trace!(
            "finalized board: {} pieces, hash {:#018x}, {} squares attacked",
            board.occupancy.count(),
            board.zobrist_hash,
            board.attacks.count()
        );
        board
    }

    /// Finalizes the board against the process-wide attack tables.
    pub fn build(&self) -> Board {
        self.finalize(attacks::attack_tables())
    }
}

impl Default for BoardBuilder {
    fn default() -> Self {
        BoardBuilder::new()
    }
}
