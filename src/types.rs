// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Core value types shared by every part of the board: squares, ranks,
//! files, colors, pieces and castle rights.
//!
//! Squares are numbered rank-major with the files mirrored: within a rank,
//! the H file is the lowest bit and the A file the highest. Equivalently,
//! `square = (rank + 1) * 8 - file - 1`, so H1 is 0, A1 is 7 and A8 is 63.
//! Every table, mask and parser in the crate agrees on this numbering.
use num_traits::{FromPrimitive, ToPrimitive};
use std::convert::TryFrom;
use std::fmt::{self, Display, Write};

// TableIndex is a trait for all types that can serve as an index into a table.
// It is common to use these types as indices into tables, so this trait allows
// any type implementing To and FromPrimitive to be used as table indices.
pub trait TableIndex {
    fn as_index(self) -> usize;
    fn from_index(idx: usize) -> Self;
}

impl<T> TableIndex for T
where
    T: FromPrimitive + ToPrimitive,
{
    fn as_index(self) -> usize {
        self.to_u32().unwrap() as usize
    }

    fn from_index(idx: usize) -> T {
        <T as FromPrimitive>::from_u64(idx as u64).unwrap()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
pub enum Square {
    H1,
    G1,
    F1,
    E1,
    D1,
    C1,
    B1,
    A1,
    H2,
    G2,
    F2,
    E2,
    D2,
    C2,
    B2,
    A2,
    H3,
    G3,
    F3,
    E3,
    D3,
    C3,
    B3,
    A3,
    H4,
    G4,
    F4,
    E4,
    D4,
    C4,
    B4,
    A4,
    H5,
    G5,
    F5,
    E5,
    D5,
    C5,
    B5,
    A5,
    H6,
    G6,
    F6,
    E6,
    D6,
    C6,
    B6,
    A6,
    H7,
    G7,
    F7,
    E7,
    D7,
    C7,
    B7,
    A7,
    H8,
    G8,
    F8,
    E8,
    D8,
    C8,
    B8,
    A8,
}

impl Square {
    pub fn of(rank: Rank, file: File) -> Square {
        let rank = rank.to_u32().unwrap();
        let file = file.to_u32().unwrap();
        FromPrimitive::from_u32(rank * 8 + (7 - file)).unwrap()
    }

    pub fn rank(self) -> Rank {
        FromPrimitive::from_u32(self.to_u32().unwrap() >> 3).unwrap()
    }

    pub fn file(self) -> File {
        FromPrimitive::from_u32(7 - (self.to_u32().unwrap() & 7)).unwrap()
    }

    /// Returns the square `rank_delta` ranks north and `file_delta` files east
    /// of this one, or `None` if that walks off the board.
    pub fn offset(self, rank_delta: i32, file_delta: i32) -> Option<Square> {
        let rank = self.rank() as i32 + rank_delta;
        let file = self.file() as i32 + file_delta;
        if rank < 0 || rank > 7 || file < 0 || file > 7 {
            return None;
        }

        Some(Square::of(Rank::from_index(rank as usize), File::from_index(file as usize)))
    }

    pub fn towards(self, dir: Direction) -> Option<Square> {
        let (rank_delta, file_delta) = dir.deltas();
        self.offset(rank_delta, file_delta)
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/// All squares, in index order.
pub static SQUARES: [Square; 64] = [
    Square::H1,
    Square::G1,
    Square::F1,
    Square::E1,
    Square::D1,
    Square::C1,
    Square::B1,
    Square::A1,
    Square::H2,
    Square::G2,
    Square::F2,
    Square::E2,
    Square::D2,
    Square::C2,
    Square::B2,
    Square::A2,
    Square::H3,
    Square::G3,
    Square::F3,
    Square::E3,
    Square::D3,
    Square::C3,
    Square::B3,
    Square::A3,
    Square::H4,
    Square::G4,
    Square::F4,
    Square::E4,
    Square::D4,
    Square::C4,
    Square::B4,
    Square::A4,
    Square::H5,
    Square::G5,
    Square::F5,
    Square::E5,
    Square::D5,
    Square::C5,
    Square::B5,
    Square::A5,
    Square::H6,
    Square::G6,
    Square::F6,
    Square::E6,
    Square::D6,
    Square::C6,
    Square::B6,
    Square::A6,
    Square::H7,
    Square::G7,
    Square::F7,
    Square::E7,
    Square::D7,
    Square::C7,
    Square::B7,
    Square::A7,
    Square::H8,
    Square::G8,
    Square::F8,
    Square::E8,
    Square::D8,
    Square::C8,
    Square::B8,
    Square::A8,
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive)]
pub enum Rank {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
}

impl Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let chr = match self {
            Rank::One => '1',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
        };
        f.write_char(chr)
    }
}

impl TryFrom<char> for Rank {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        let res = match value {
            '1' => Rank::One,
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            _ => return Err(()),
        };
        Ok(res)
    }
}

pub static RANKS: [Rank; 8] = [
    Rank::One,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl Display for File {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let chr = match self {
            File::A => 'a',
            File::B => 'b',
            File::C => 'c',
            File::D => 'd',
            File::E => 'e',
            File::F => 'f',
            File::G => 'g',
            File::H => 'h',
        };
        f.write_char(chr)
    }
}

impl TryFrom<char> for File {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        let res = match value {
            'a' => File::A,
            'b' => File::B,
            'c' => File::C,
            'd' => File::D,
            'e' => File::E,
            'f' => File::F,
            'g' => File::G,
            'h' => File::H,
            _ => return Err(()),
        };
        Ok(res)
    }
}

pub static FILES: [File; 8] = [
    File::A,
    File::B,
    File::C,
    File::D,
    File::E,
    File::F,
    File::G,
    File::H,
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn toggle(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let chr = match self {
            Color::White => 'w',
            Color::Black => 'b',
        };
        f.write_char(chr)
    }
}

impl TryFrom<char> for Color {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'w' => Ok(Color::White),
            'b' => Ok(Color::Black),
            _ => Err(()),
        }
    }
}

pub static COLORS: [Color; 2] = [Color::White, Color::Black];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let chr = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        f.write_char(chr)
    }
}

pub static PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

/// The eight compass directions. East is towards the H file.
#[derive(Copy, Clone, Debug, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// One step in this direction as a (rank, file) delta.
    pub fn deltas(self) -> (i32, i32) {
        match self {
            Direction::North => (1, 0),
            Direction::NorthEast => (1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (-1, 1),
            Direction::South => (-1, 0),
            Direction::SouthWest => (-1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (1, -1),
        }
    }

    /// One step in this direction as a change in square index. Because files
    /// are mirrored, moving east lowers the index.
    pub fn as_vector(self) -> i32 {
        let (rank_delta, file_delta) = self.deltas();
        rank_delta * 8 - file_delta
    }
}

pub static DIRECTIONS: [Direction; 8] = [
    Direction::North,
    Direction::NorthEast,
    Direction::East,
    Direction::SouthEast,
    Direction::South,
    Direction::SouthWest,
    Direction::West,
    Direction::NorthWest,
];

bitflags! {
    /// Castle rights. The bit order is part of the board format.
    pub struct CastleStatus: u8 {
        const NONE = 0;
        const WHITE_KINGSIDE = 0b0000_0001;
        const WHITE_QUEENSIDE = 0b0000_0010;
        const WHITE = Self::WHITE_KINGSIDE.bits | Self::WHITE_QUEENSIDE.bits;
        const BLACK_KINGSIDE = 0b0000_0100;
        const BLACK_QUEENSIDE = 0b0000_1000;
        const BLACK = Self::BLACK_KINGSIDE.bits | Self::BLACK_QUEENSIDE.bits;
    }
}

impl TryFrom<char> for CastleStatus {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'K' => Ok(CastleStatus::WHITE_KINGSIDE),
            'Q' => Ok(CastleStatus::WHITE_QUEENSIDE),
            'k' => Ok(CastleStatus::BLACK_KINGSIDE),
            'q' => Ok(CastleStatus::BLACK_QUEENSIDE),
            _ => Err(()),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color }
    }

    /// The slot this piece's bitboard occupies in a board's piece array.
    ///
    /// White pieces occupy slots 0 through 5 and Black pieces 6 through 11,
    /// each in `PieceKind` order (pawn, knight, bishop, rook, queen, king).
    /// Code outside this crate may rely on this layout.
    pub fn slot(self) -> usize {
        let color_offset = match self.color {
            Color::White => 0,
            Color::Black => 6,
        };
        color_offset + self.kind.as_index()
    }

    pub fn from_slot(slot: usize) -> Piece {
        debug_assert!(slot < 12);
        let color = if slot < 6 { Color::White } else { Color::Black };
        Piece::new(PieceKind::from_index(slot % 6), color)
    }
}

impl TryFrom<char> for Piece {
    type Error = ();

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let res = match c {
            'P' => Piece::new(PieceKind::Pawn, Color::White),
            'N' => Piece::new(PieceKind::Knight, Color::White),
            'B' => Piece::new(PieceKind::Bishop, Color::White),
            'R' => Piece::new(PieceKind::Rook, Color::White),
            'Q' => Piece::new(PieceKind::Queen, Color::White),
            'K' => Piece::new(PieceKind::King, Color::White),
            'p' => Piece::new(PieceKind::Pawn, Color::Black),
            'n' => Piece::new(PieceKind::Knight, Color::Black),
            'b' => Piece::new(PieceKind::Bishop, Color::Black),
            'r' => Piece::new(PieceKind::Rook, Color::Black),
            'q' => Piece::new(PieceKind::Queen, Color::Black),
            'k' => Piece::new(PieceKind::King, Color::Black),
            _ => return Err(()),
        };
        Ok(res)
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let chr = match self.color {
            Color::White => self.kind.to_string().to_ascii_uppercase(),
            Color::Black => self.kind.to_string(),
        };
        f.write_str(&chr)
    }
}
