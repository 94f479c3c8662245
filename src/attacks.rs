// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Attack tables for every piece kind.
//!
//! Knights, kings and pawns attack a fixed set of squares from any origin, so
//! those are simple per-square lookups. Bishops, rooks and queens slide along
//! rays until they hit the first occupied square; those are computed from
//! precomputed rays and the current occupancy.
//!
//! All of the tables live in an immutable `AttackTables` value. A process-wide
//! instance is built lazily on first use and is available from
//! `attack_tables()`, but anything that consumes attacks takes the tables by
//! reference so it can be driven by any instance.
use crate::bitboard::Bitboard;
use crate::types::{Color, Direction, Square, TableIndex, COLORS, DIRECTIONS, SQUARES};

const KING_DELTAS: [(i32, i32); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

const KNIGHT_DELTAS: [(i32, i32); 8] = [
    (2, -1),
    (2, 1),
    (1, -2),
    (1, 2),
    (-1, -2),
    (-1, 2),
    (-2, -1),
    (-2, 1),
];

// Index of the east and west capture tables in a pawn table entry.
const EAST: usize = 0;
const WEST: usize = 1;

struct LeaperTable {
    table: [Bitboard; 64],
}

impl LeaperTable {
    pub fn new(deltas: &[(i32, i32)]) -> LeaperTable {
        let mut lt = LeaperTable {
            table: [Bitboard::none(); 64],
        };

        for &sq in SQUARES.iter() {
            let mut board = Bitboard::none();
            for &(rank_delta, file_delta) in deltas {
                if let Some(target) = sq.offset(rank_delta, file_delta) {
                    board.set(target);
                }
            }

            lt.table[sq.as_index()] = board;
        }

        lt
    }

    pub fn attacks(&self, sq: Square) -> Bitboard {
        self.table[sq.as_index()]
    }
}

struct PawnTable {
    table: [[[Bitboard; 2]; 2]; 64],
}

impl PawnTable {
    pub fn new() -> PawnTable {
        let mut pt = PawnTable {
            table: [[[Bitboard::none(); 2]; 2]; 64],
        };

        for &sq in SQUARES.iter() {
            for &color in COLORS.iter() {
                let forward = match color {
                    Color::White => 1,
                    Color::Black => -1,
                };

                // A pawn on its last rank attacks nothing.
                let entry = &mut pt.table[sq.as_index()][color.as_index()];
                if let Some(target) = sq.offset(forward, 1) {
                    entry[EAST].set(target);
                }
                if let Some(target) = sq.offset(forward, -1) {
                    entry[WEST].set(target);
                }
            }
        }

        pt
    }

    pub fn attacks(&self, sq: Square, color: Color, side: usize) -> Bitboard {
        self.table[sq.as_index()][color.as_index()][side]
    }
}

struct RayTable {
    table: [[Bitboard; 8]; 65],
}

impl RayTable {
    pub fn new() -> RayTable {
        let mut rt = RayTable {
            table: [[Bitboard::none(); 8]; 65],
        };

        // The 65th row stays empty. It is the "no blocker" entry used by the
        // ray attack functions below.
        for &sq in SQUARES.iter() {
            for &dir in DIRECTIONS.iter() {
                let mut entry = Bitboard::none();
                let mut cursor = sq;
                while let Some(next) = cursor.towards(dir) {
                    entry.set(next);
                    cursor = next;
                }

                rt.table[sq.as_index()][dir.as_index()] = entry;
            }
        }

        rt
    }

    pub fn attacks(&self, sq: usize, dir: Direction) -> Bitboard {
        self.table[sq][dir.as_index()]
    }
}

/// Precomputed attack patterns for every piece kind and origin square.
pub struct AttackTables {
    king: LeaperTable,
    knight: LeaperTable,
    pawn: PawnTable,
    rays: RayTable,
}

impl AttackTables {
    pub fn new() -> AttackTables {
        AttackTables {
            king: LeaperTable::new(&KING_DELTAS),
            knight: LeaperTable::new(&KNIGHT_DELTAS),
            pawn: PawnTable::new(),
            rays: RayTable::new(),
        }
    }

    // Rays in a positive direction run towards higher square indices, so the
    // nearest blocker is the lowest set bit.
    fn positive_ray_attacks(&self, sq: Square, occupancy: Bitboard, dir: Direction) -> Bitboard {
        debug_assert!(dir.as_vector() > 0);
        let attacks = self.rays.attacks(sq.as_index(), dir);
        let blocker = attacks.and(occupancy).bits();
        let blocking_square = blocker.trailing_zeros() as usize;
        let blocking_ray = self.rays.attacks(blocking_square, dir);
        attacks.xor(blocking_ray)
    }

    fn negative_ray_attacks(&self, sq: Square, occupancy: Bitboard, dir: Direction) -> Bitboard {
        debug_assert!(dir.as_vector() < 0);
        let attacks = self.rays.attacks(sq.as_index(), dir);
        let blocker = attacks.and(occupancy).bits();
        let blocking_square = (64 - blocker.leading_zeros())
            .checked_sub(1)
            .unwrap_or(64) as usize;
        let blocking_ray = self.rays.attacks(blocking_square, dir);
        attacks.xor(blocking_ray)
    }

    fn diagonal_attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        self.positive_ray_attacks(sq, occupancy, Direction::NorthWest)
            | self.negative_ray_attacks(sq, occupancy, Direction::SouthEast)
    }

    fn antidiagonal_attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        self.positive_ray_attacks(sq, occupancy, Direction::NorthEast)
            | self.negative_ray_attacks(sq, occupancy, Direction::SouthWest)
    }

    fn file_attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        self.positive_ray_attacks(sq, occupancy, Direction::North)
            | self.negative_ray_attacks(sq, occupancy, Direction::South)
    }

    fn rank_attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        self.positive_ray_attacks(sq, occupancy, Direction::West)
            | self.negative_ray_attacks(sq, occupancy, Direction::East)
    }

    /// The square a pawn of the given color attacks towards the H file.
    pub fn pawn_attacks_east(&self, sq: Square, color: Color) -> Bitboard {
        self.pawn.attacks(sq, color, EAST)
    }

    /// The square a pawn of the given color attacks towards the A file.
    pub fn pawn_attacks_west(&self, sq: Square, color: Color) -> Bitboard {
        self.pawn.attacks(sq, color, WEST)
    }

    pub fn pawn_attacks(&self, sq: Square, color: Color) -> Bitboard {
        self.pawn_attacks_east(sq, color) | self.pawn_attacks_west(sq, color)
    }

    pub fn knight_attacks(&self, sq: Square) -> Bitboard {
        self.knight.attacks(sq)
    }

    pub fn king_attacks(&self, sq: Square) -> Bitboard {
        self.king.attacks(sq)
    }

    pub fn bishop_attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        self.diagonal_attacks(sq, occupancy) | self.antidiagonal_attacks(sq, occupancy)
    }

    pub fn rook_attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        self.file_attacks(sq, occupancy) | self.rank_attacks(sq, occupancy)
    }

    pub fn queen_attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        self.bishop_attacks(sq, occupancy) | self.rook_attacks(sq, occupancy)
    }
}

impl Default for AttackTables {
    fn default() -> Self {
        AttackTables::new()
    }
}

lazy_static! {
    static ref ATTACK_TABLES: AttackTables = AttackTables::new();
}

/// The process-wide attack tables, built on first use.
pub fn attack_tables() -> &'static AttackTables {
    &ATTACK_TABLES
}

pub fn pawn_attacks(sq: Square, color: Color) -> Bitboard {
    ATTACK_TABLES.pawn_attacks(sq, color)
}

pub fn bishop_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    ATTACK_TABLES.bishop_attacks(sq, occupancy)
}

pub fn knight_attacks(sq: Square) -> Bitboard {
    ATTACK_TABLES.knight_attacks(sq)
}

pub fn rook_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    ATTACK_TABLES.rook_attacks(sq, occupancy)
}

pub fn queen_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    ATTACK_TABLES.queen_attacks(sq, occupancy)
}

pub fn king_attacks(sq: Square) -> Bitboard {
    ATTACK_TABLES.king_attacks(sq)
}
