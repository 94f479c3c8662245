// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Board-state core of a chess engine: a bitboard position representation,
//! a FEN parser that fills it in, and the attack map of the side to move.

#[macro_use]
extern crate num_derive;
#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod analysis;
pub mod attacks;
mod bitboard;
mod board;
mod fen;
mod types;
pub mod zobrist;

pub use analysis::{compute_attacks, Analysis};
pub use attacks::AttackTables;
pub use bitboard::{Bitboard, BitboardIterator};
pub use board::{Board, BoardBuilder};
pub use fen::{parse as parse_fen, FenOptions, FenParseError, Recovery, START_FEN};
pub use types::{
    CastleStatus, Color, Direction, File, Piece, PieceKind, Rank, Square, TableIndex, COLORS,
    DIRECTIONS, FILES, PIECE_KINDS, RANKS, SQUARES,
};
