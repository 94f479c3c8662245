// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! FEN parsing.
//!
//! The parser is a state machine over the characters of the FEN string with
//! one state per FEN field. Every space moves to the next field, and each
//! field classifies characters on its own, so a letter only ever means what
//! it means in the field it appears in (`b` is a black bishop in the
//! placement and Black in the side to move, and nothing else).
//!
//! By default parsing is lenient: characters that make no sense where they
//! appear are skipped and whatever could be understood ends up on the board.
//! `Recovery::Strict` turns each of those situations into a `FenParseError`.
use std::convert::TryFrom;
use std::error::Error;
use std::fmt;

use crate::attacks::AttackTables;
use crate::board::{Board, BoardBuilder};
use crate::types::{CastleStatus, Color, File, Piece, Rank, Square, TableIndex};

/// FEN of the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Possible errors that can arise when parsing a malformed FEN string.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FenParseError {
    UnexpectedEnd,
    UnexpectedChar(char),
    InvalidDigit(char),
    RankDoesNotSumToEight,
    TooFewRanks,
    TooManyRanks,
    InvalidSideToMove(char),
    InvalidCastle(char),
    InvalidEnPassant,
    InvalidHalfmove(char),
    InvalidFullmove(char),
    MissingField,
    TooManyFields,
}

impl fmt::Display for FenParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FenParseError::UnexpectedEnd => write!(f, "FEN string is empty"),
            FenParseError::UnexpectedChar(c) => {
                write!(f, "unexpected character '{}' in piece placement", c)
            }
            FenParseError::InvalidDigit(c) => {
                write!(f, "empty-square count '{}' is not between 1 and 8", c)
            }
            FenParseError::RankDoesNotSumToEight => write!(f, "rank does not have eight files"),
            FenParseError::TooFewRanks => write!(f, "piece placement has fewer than eight ranks"),
            FenParseError::TooManyRanks => write!(f, "piece placement has more than eight ranks"),
            FenParseError::InvalidSideToMove(c) => {
                write!(f, "invalid side to move '{}', expected 'w' or 'b'", c)
            }
            FenParseError::InvalidCastle(c) => write!(f, "invalid castling character '{}'", c),
            FenParseError::InvalidEnPassant => write!(f, "invalid en passant square"),
            FenParseError::InvalidHalfmove(c) => {
                write!(f, "invalid character '{}' in halfmove clock", c)
            }
            FenParseError::InvalidFullmove(c) => {
                write!(f, "invalid character '{}' in fullmove number", c)
            }
            FenParseError::MissingField => write!(f, "FEN string is missing a field"),
            FenParseError::TooManyFields => write!(f, "FEN string has more than six fields"),
        }
    }
}

impl Error for FenParseError {}

/// What to do with input that doesn't fit the FEN grammar.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recovery {
    /// Skip the offending characters and keep whatever parsed.
    Lenient,
    /// Reject the string with the first error found.
    Strict,
}

impl Default for Recovery {
    fn default() -> Self {
        Recovery::Lenient
    }
}

/// Configuration for FEN parsing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FenOptions {
    pub recovery: Recovery,
}

impl FenOptions {
    pub fn strict() -> FenOptions {
        FenOptions {
            recovery: Recovery::Strict,
        }
    }

    pub fn lenient() -> FenOptions {
        FenOptions {
            recovery: Recovery::Lenient,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Field {
    Placement,
    SideToMove,
    Castling,
    EnPassant,
    HalfmoveClock,
    FullmoveNumber,
    Trailing,
}

impl Field {
    fn next(self) -> Field {
        match self {
            Field::Placement => Field::SideToMove,
            Field::SideToMove => Field::Castling,
            Field::Castling => Field::EnPassant,
            Field::EnPassant => Field::HalfmoveClock,
            Field::HalfmoveClock => Field::FullmoveNumber,
            Field::FullmoveNumber | Field::Trailing => Field::Trailing,
        }
    }
}

enum PlacementToken {
    Piece(Piece),
    Skip(u32),
    NextRank,
    BadDigit,
    Unknown,
}

fn classify_placement(c: char) -> PlacementToken {
    match c {
        '/' => PlacementToken::NextRank,
        '1'..='8' => PlacementToken::Skip(c as u32 - '0' as u32),
        '0' | '9' => PlacementToken::BadDigit,
        _ => match Piece::try_from(c) {
            Ok(piece) => PlacementToken::Piece(piece),
            Err(()) => PlacementToken::Unknown,
        },
    }
}

enum EnPassantToken {
    None,
    File(File),
    Rank(Rank),
    Unknown,
}

fn classify_en_passant(c: char) -> EnPassantToken {
    if c == '-' {
        return EnPassantToken::None;
    }

    if let Ok(file) = File::try_from(c) {
        return EnPassantToken::File(file);
    }

    match Rank::try_from(c) {
        Ok(rank) => EnPassantToken::Rank(rank),
        Err(()) => EnPassantToken::Unknown,
    }
}

struct FenParser {
    recovery: Recovery,
    builder: BoardBuilder,
    field: Field,
    // Characters seen so far in the current field.
    field_len: usize,
    seen_any: bool,
    // Rank counts down from 7 and goes negative once the placement has
    // walked past the first rank.
    rank: i32,
    file: u32,
    no_castling: bool,
    // Digits of the clock field being read.
    clock: u32,
    ep_file: Option<File>,
    ep_rank: Option<Rank>,
}

impl FenParser {
    fn new(options: &FenOptions) -> FenParser {
        let mut builder = BoardBuilder::new();
        builder.reset();
        FenParser {
            recovery: options.recovery,
            builder,
            field: Field::Placement,
            field_len: 0,
            seen_any: false,
            rank: 7,
            file: 0,
            no_castling: false,
            clock: 0,
            ep_file: None,
            ep_rank: None,
        }
    }

    fn parse(mut self, fen: &str) -> Result<BoardBuilder, FenParseError> {
        for c in fen.chars() {
            let result = self.feed(c);
            self.recover(result)?;
        }

        let result = self.finish();
        self.recover(result)?;
        Ok(self.builder)
    }

    fn recover(&self, result: Result<(), FenParseError>) -> Result<(), FenParseError> {
        match result {
            Err(err) if self.recovery == Recovery::Lenient => {
                debug!("recovering from malformed FEN: {}", err);
                Ok(())
            }
            other => other,
        }
    }

    fn feed(&mut self, c: char) -> Result<(), FenParseError> {
        if c == ' ' {
            self.seen_any = true;
            return self.end_field();
        }

        if c.is_ascii_whitespace() {
            return Ok(());
        }

        self.seen_any = true;
        self.field_len += 1;
        match self.field {
            Field::Placement => self.feed_placement(c),
            Field::SideToMove => self.feed_side_to_move(c),
            Field::Castling => self.feed_castling(c),
            Field::EnPassant => self.feed_en_passant(c),
            Field::HalfmoveClock => self.feed_halfmove(c),
            Field::FullmoveNumber => self.feed_fullmove(c),
            Field::Trailing => Err(FenParseError::TooManyFields),
        }
    }

    fn end_field(&mut self) -> Result<(), FenParseError> {
        let check = self.check_field_complete();
        self.field = self.field.next();
        self.field_len = 0;
        self.clock = 0;
        check
    }

    fn finish(&mut self) -> Result<(), FenParseError> {
        if !self.seen_any {
            return Err(FenParseError::UnexpectedEnd);
        }

        // A separator after the last field is harmless.
        let trailing_separator = self.field_len == 0 && self.field > Field::EnPassant;
        if !trailing_separator {
            self.check_field_complete()?;
        }

        if self.field < Field::EnPassant {
            return Err(FenParseError::MissingField);
        }

        Ok(())
    }

    fn check_field_complete(&self) -> Result<(), FenParseError> {
        match self.field {
            Field::Placement => {
                if self.rank < 0 {
                    Err(FenParseError::TooManyRanks)
                } else if self.file != 8 {
                    Err(FenParseError::RankDoesNotSumToEight)
                } else if self.rank > 0 {
                    Err(FenParseError::TooFewRanks)
                } else {
                    Ok(())
                }
            }
            Field::EnPassant if self.field_len > 0 => {
                let complete = self.ep_file.is_some() == self.ep_rank.is_some();
                if complete {
                    Ok(())
                } else {
                    Err(FenParseError::InvalidEnPassant)
                }
            }
            Field::Trailing => Ok(()),
            _ if self.field_len == 0 => Err(FenParseError::MissingField),
            _ => Ok(()),
        }
    }

    fn feed_placement(&mut self, c: char) -> Result<(), FenParseError> {
        match classify_placement(c) {
            PlacementToken::Piece(piece) => {
                if self.rank < 0 {
                    return Err(FenParseError::TooManyRanks);
                }

                if self.file >= 8 {
                    // Past the H file the square index keeps counting down
                    // into the rank below, starting at its A file.
                    let index = i64::from(self.rank) * 8 + 7 - i64::from(self.file);
                    if index >= 0 {
                        let square = Square::from_index(index as usize);
                        self.builder.piece_bitboard_mut(piece).set(square);
                    }

                    self.file = self.file.saturating_add(1);
                    return Err(FenParseError::RankDoesNotSumToEight);
                }

                let square = Square::of(
                    Rank::from_index(self.rank as usize),
                    File::from_index(self.file as usize),
                );
                self.builder.piece_bitboard_mut(piece).set(square);
                self.file += 1;
                Ok(())
            }
            PlacementToken::Skip(count) => {
                self.file = self.file.saturating_add(count);
                if self.file > 8 {
                    return Err(FenParseError::RankDoesNotSumToEight);
                }

                Ok(())
            }
            PlacementToken::NextRank => {
                let rank_complete = self.file == 8;
                self.rank = self.rank.saturating_sub(1);
                self.file = 0;
                if self.rank < 0 {
                    return Err(FenParseError::TooManyRanks);
                }

                if !rank_complete {
                    return Err(FenParseError::RankDoesNotSumToEight);
                }

                Ok(())
            }
            PlacementToken::BadDigit => Err(FenParseError::InvalidDigit(c)),
            PlacementToken::Unknown => Err(FenParseError::UnexpectedChar(c)),
        }
    }

    fn feed_side_to_move(&mut self, c: char) -> Result<(), FenParseError> {
        // The last color letter wins.
        let color = Color::try_from(c).map_err(|_| FenParseError::InvalidSideToMove(c))?;
        self.builder.set_side_to_move(color);
        if self.field_len > 1 {
            return Err(FenParseError::InvalidSideToMove(c));
        }

        Ok(())
    }

    fn feed_castling(&mut self, c: char) -> Result<(), FenParseError> {
        if c == '-' {
            if self.field_len > 1 {
                return Err(FenParseError::InvalidCastle(c));
            }

            self.no_castling = true;
            return Ok(());
        }

        let right = CastleStatus::try_from(c).map_err(|_| FenParseError::InvalidCastle(c))?;
        self.builder.add_castle_right(right);
        if self.no_castling || self.field_len > 4 {
            return Err(FenParseError::InvalidCastle(c));
        }

        Ok(())
    }

    fn feed_en_passant(&mut self, c: char) -> Result<(), FenParseError> {
        let position_ok = match classify_en_passant(c) {
            EnPassantToken::None => self.field_len == 1,
            EnPassantToken::File(file) => {
                self.ep_file = Some(file);
                self.field_len == 1
            }
            EnPassantToken::Rank(rank) => {
                self.ep_rank = Some(rank);
                self.field_len == 2
            }
            EnPassantToken::Unknown => return Err(FenParseError::InvalidEnPassant),
        };

        // The square is recorded as soon as both halves are known, even if it
        // can't be a real en-passant target. Strict mode rejects it below.
        let mut plausible_rank = true;
        if let (Some(file), Some(rank)) = (self.ep_file, self.ep_rank) {
            self.builder.set_en_passant_square(Some(Square::of(rank, file)));
            plausible_rank = rank == Rank::Three || rank == Rank::Six;
        }

        if !position_ok || !plausible_rank {
            return Err(FenParseError::InvalidEnPassant);
        }

        Ok(())
    }

    fn feed_halfmove(&mut self, c: char) -> Result<(), FenParseError> {
        let digit = c.to_digit(10).ok_or(FenParseError::InvalidHalfmove(c))?;
        self.clock = self.clock.saturating_mul(10).saturating_add(digit);
        self.builder.set_halfmove_clock(self.clock);
        Ok(())
    }

    fn feed_fullmove(&mut self, c: char) -> Result<(), FenParseError> {
        let digit = c.to_digit(10).ok_or(FenParseError::InvalidFullmove(c))?;
        self.clock = self.clock.saturating_mul(10).saturating_add(digit);
        self.builder.set_fullmove_number(self.clock);
        Ok(())
    }
}

/// Parses a FEN string into a builder holding its placement and flags. The
/// builder has not been finalized.
pub fn parse(fen: &str, options: &FenOptions) -> Result<BoardBuilder, FenParseError> {
    FenParser::new(options).parse(fen)
}

//
// FEN entry points on Board.
//

impl Board {
    pub fn start_position() -> Board {
        Board::from_fen(START_FEN).expect("start position FEN is well-formed")
    }

    /// Constructs a new board from a FEN string, parsing leniently.
    pub fn from_fen<S: AsRef<str>>(fen: S) -> Result<Board, FenParseError> {
        Board::from_fen_with(fen, &FenOptions::default())
    }

    /// Constructs a new board from a FEN string with the given options.
    pub fn from_fen_with<S: AsRef<str>>(
        fen: S,
        options: &FenOptions,
    ) -> Result<Board, FenParseError> {
        parse(fen.as_ref(), options).map(|builder| builder.build())
    }

    /// Constructs a new board from a FEN string, computing its attack map
    /// with the given tables.
    pub fn from_fen_with_tables<S: AsRef<str>>(
        fen: S,
        options: &FenOptions,
        tables: &AttackTables,
    ) -> Result<Board, FenParseError> {
        parse(fen.as_ref(), options).map(|builder| builder.finalize(tables))
    }

    /// Replaces this board with the position described by a FEN string,
    /// parsing leniently.
    pub fn set_fen<S: AsRef<str>>(&mut self, fen: S) -> Result<(), FenParseError> {
        self.set_fen_with(fen, &FenOptions::default())
    }

    /// Replaces this board with the position described by a FEN string. On
    /// error the board is left as it was.
    pub fn set_fen_with<S: AsRef<str>>(
        &mut self,
        fen: S,
        options: &FenOptions,
    ) -> Result<(), FenParseError> {
        *self = Board::from_fen_with(fen, options)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{CastleStatus, Color, Piece, PieceKind, Rank, Square};

    use super::{parse, FenOptions, FenParseError, Recovery};
    use crate::board::Board;

    fn strict(fen: &str) -> Result<Board, FenParseError> {
        Board::from_fen_with(fen, &FenOptions::strict())
    }

    fn strict_err(fen: &str) -> FenParseError {
        strict(fen).unwrap_err()
    }

    #[test]
    fn fen_smoke() {
        let board = Board::from_fen("8/8/8/8/8/8/8/8 w - - 0 0").unwrap();

        // white's turn to move.
        assert_eq!(Color::White, board.side_to_move());

        // no castling.
        assert_eq!(CastleStatus::NONE, board.castle_status());

        // no en passant.
        assert!(board.en_passant_square().is_none());

        // both clocks are zero.
        assert_eq!(0, board.halfmove_clock());
        assert_eq!(0, board.fullmove_number());
    }

    #[test]
    fn letters_only_count_in_their_field() {
        // Black bishop in the placement, White to move.
        let board = Board::from_fen("b7/8/8/8/8/8/8/7B w - - 0 1").unwrap();
        assert_eq!(Color::White, board.side_to_move());
        assert!(board.bishops(Color::Black).test(Square::A8));
        assert!(board.bishops(Color::White).test(Square::H1));
        assert!(!board.can_castle_kingside(Color::White));
    }

    #[test]
    fn castling_subset() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b Kq - 3 20").unwrap();
        assert_eq!(
            CastleStatus::WHITE_KINGSIDE | CastleStatus::BLACK_QUEENSIDE,
            board.castle_status()
        );
        assert_eq!(Color::Black, board.side_to_move());
        assert_eq!(3, board.halfmove_clock());
        assert_eq!(20, board.fullmove_number());
    }

    #[test]
    fn en_passant_black_target() {
        let board =
            Board::from_fen("rnbqkbnr/ppp1pppp/8/8/3pP3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 3")
                .unwrap();
        assert_eq!(Some(Square::E3), board.en_passant_square());

        let board =
            Board::from_fen("rnbqkbnr/pppp1ppp/8/3Pp3/8/8/PPP1PPPP/RNBQKBNR w KQkq e6 0 3")
                .unwrap();
        assert_eq!(Some(Square::E6), board.en_passant_square());
    }

    #[test]
    fn four_field_fen() {
        let board = strict("4k3/8/8/8/8/8/8/4K3 w - -").unwrap();
        assert_eq!(0, board.halfmove_clock());
        assert_eq!(1, board.fullmove_number());
    }

    #[test]
    fn trailing_whitespace() {
        assert!(strict("4k3/8/8/8/8/8/8/4K3 w - - 0 1 ").is_ok());
        assert!(strict("4k3/8/8/8/8/8/8/4K3 w - - 0 1\n").is_ok());
    }

    #[test]
    fn empty() {
        assert_eq!(FenParseError::UnexpectedEnd, strict_err(""));
        assert_eq!(
            FenParseError::UnexpectedEnd,
            Board::from_fen_with("", &FenOptions::strict()).unwrap_err()
        );
    }

    #[test]
    fn unknown_piece() {
        assert_eq!(
            FenParseError::UnexpectedChar('z'),
            strict_err("z7/8/8/8/8/8/8/8 w - - 0 0")
        );
    }

    #[test]
    fn invalid_digit() {
        assert_eq!(
            FenParseError::InvalidDigit('9'),
            strict_err("9/8/8/8/8/8/8/8 w - - 0 0")
        );
    }

    #[test]
    fn not_sum_to_8() {
        assert_eq!(
            FenParseError::RankDoesNotSumToEight,
            strict_err("pppp5/8/8/8/8/8/8/8 w - - 0 0")
        );
        assert_eq!(
            FenParseError::RankDoesNotSumToEight,
            strict_err("7/8/8/8/8/8/8/8 w - - 0 0")
        );
        assert_eq!(
            FenParseError::RankDoesNotSumToEight,
            strict_err("8/8/8/8/8/8/8/7 w - - 0 0")
        );
    }

    #[test]
    fn rank_count() {
        assert_eq!(
            FenParseError::TooFewRanks,
            strict_err("8/8/8/8/8/8/8 w - - 0 0")
        );
        assert_eq!(
            FenParseError::TooManyRanks,
            strict_err("8/8/8/8/8/8/8/8/8 w - - 0 0")
        );
    }

    #[test]
    fn bad_side_to_move() {
        assert_eq!(
            FenParseError::InvalidSideToMove('c'),
            strict_err("8/8/8/8/8/8/8/8 c - - 0 0")
        );
        assert_eq!(
            FenParseError::InvalidSideToMove('b'),
            strict_err("8/8/8/8/8/8/8/8 wb - - 0 0")
        );
    }

    #[test]
    fn bad_castle_status() {
        assert_eq!(
            FenParseError::InvalidCastle('a'),
            strict_err("8/8/8/8/8/8/8/8 w a - 0 0")
        );
        assert_eq!(
            FenParseError::InvalidCastle('K'),
            strict_err("8/8/8/8/8/8/8/8 w -K - 0 0")
        );
    }

    #[test]
    fn bad_en_passant() {
        assert_eq!(
            FenParseError::InvalidEnPassant,
            strict_err("8/8/8/8/8/8/8/8 w - 88 0 0")
        );
        assert_eq!(
            FenParseError::InvalidEnPassant,
            strict_err("8/8/8/8/8/8/8/8 w - e4 0 0")
        );
        assert_eq!(
            FenParseError::InvalidEnPassant,
            strict_err("8/8/8/8/8/8/8/8 w - e 0 0")
        );
        assert_eq!(
            FenParseError::InvalidEnPassant,
            strict_err("8/8/8/8/8/8/8/8 w - x3 0 0")
        );
    }

    #[test]
    fn bad_clocks() {
        assert_eq!(
            FenParseError::InvalidHalfmove('x'),
            strict_err("8/8/8/8/8/8/8/8 w - - x 0")
        );
        assert_eq!(
            FenParseError::InvalidFullmove('-'),
            strict_err("8/8/8/8/8/8/8/8 w - - 0 -1")
        );
    }

    #[test]
    fn field_count() {
        assert_eq!(
            FenParseError::MissingField,
            strict_err("8/8/8/8/8/8/8/8 w -")
        );
        assert_eq!(
            FenParseError::MissingField,
            strict_err("8/8/8/8/8/8/8/8  w - - 0 1")
        );
        assert_eq!(
            FenParseError::TooManyFields,
            strict_err("8/8/8/8/8/8/8/8 w - - 0 1 extra")
        );
    }

    #[test]
    fn lenient_never_fails() {
        let inputs = [
            "",
            "z7/8/8/8/8/8/8/8 w - - 0 0",
            "9/8/8/8/8/8/8/8 w - - 0 0",
            "pppppppppp/8 w",
            "8/8/8/8/8/8/8/8/8/8 w - - 0 0",
            "8/8/8/8/8/8/8/8 x yz e9 q q q",
            "8/8/8/8/8/8/8/8 w - - 0 1 and more",
        ];

        for input in inputs.iter() {
            assert!(Board::from_fen(input).is_ok(), "failed on {:?}", input);
        }
    }

    #[test]
    fn lenient_spills_overflowing_pieces() {
        let board = Board::from_fen("ppppppppp/8/8/8/8/8/8/8 w - - 0 1").unwrap();
        assert_eq!(9, board.pawns(Color::Black).count());
        assert_eq!(8, board.pawns(Color::Black).rank(Rank::Eight).count());
        assert!(board.pawns(Color::Black).test(Square::A7));

        let board = Board::from_fen("8/8/8/8/8/8/8/8/K7 w - - 0 1").unwrap();
        assert!(board.occupancy().empty());

        // Nothing below the first rank to spill into.
        let board = Board::from_fen("8/8/8/8/8/8/8/8N w - - 0 1").unwrap();
        assert!(board.occupancy().empty());
    }

    #[test]
    fn lenient_last_side_to_move_wins() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/4K3 bw - - 0 1").unwrap();
        assert_eq!(Color::White, board.side_to_move());

        let board = Board::from_fen("4k3/8/8/8/8/8/8/4K3 wb - - 0 1").unwrap();
        assert_eq!(Color::Black, board.side_to_move());

        let board = Board::from_fen("4k3/8/8/8/8/8/8/4K3 bx - - 0 1").unwrap();
        assert_eq!(Color::Black, board.side_to_move());
    }

    #[test]
    fn lenient_castling_after_dash() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/4K3 w -K - 0 1").unwrap();
        assert_eq!(CastleStatus::WHITE_KINGSIDE, board.castle_status());

        let board = Board::from_fen("4k3/8/8/8/8/8/8/4K3 w -Kq - 0 1").unwrap();
        assert_eq!(
            CastleStatus::WHITE_KINGSIDE | CastleStatus::BLACK_QUEENSIDE,
            board.castle_status()
        );
    }

    #[test]
    fn strict_rejects_what_lenient_recovers() {
        assert_eq!(
            FenParseError::RankDoesNotSumToEight,
            strict_err("ppppppppp/8/8/8/8/8/8/8 w - - 0 1")
        );
        assert_eq!(
            FenParseError::InvalidSideToMove('w'),
            strict_err("4k3/8/8/8/8/8/8/4K3 bw - - 0 1")
        );
        assert_eq!(
            FenParseError::InvalidCastle('K'),
            strict_err("4k3/8/8/8/8/8/8/4K3 w -K - 0 1")
        );
    }

    #[test]
    fn lenient_keeps_off_rank_en_passant() {
        let board = Board::from_fen("8/8/8/8/8/8/8/8 w - e4 0 1").unwrap();
        assert_eq!(Some(Square::E4), board.en_passant_square());
    }

    #[test]
    fn lenient_skips_unknown_characters() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/4K2R w KxQ - 0 1").unwrap();
        assert_eq!(
            CastleStatus::WHITE_KINGSIDE | CastleStatus::WHITE_QUEENSIDE,
            board.castle_status()
        );
        assert!(board.rooks(Color::White).test(Square::H1));
    }

    #[test]
    fn set_fen_replaces_board() {
        let mut board = Board::start_position();
        board.set_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 1").unwrap();
        assert_eq!(2, board.occupancy().count());
        assert_eq!(Color::Black, board.side_to_move());
        assert_eq!(CastleStatus::NONE, board.castle_status());
    }

    #[test]
    fn failed_strict_set_fen_leaves_board() {
        let mut board = Board::start_position();
        let before = board.clone();
        let err = board
            .set_fen_with("rnbqkbnr/pppppppp/8/8 w KQkq - 0 1", &FenOptions::strict())
            .unwrap_err();
        assert_eq!(FenParseError::TooFewRanks, err);
        assert_eq!(before, board);
    }

    #[test]
    fn parse_returns_unfinalized_builder() {
        let builder = parse("8/8/8/8/8/8/8/R7 w - - 0 1", &FenOptions::default()).unwrap();
        let rook = Piece::new(PieceKind::Rook, Color::White);
        assert!(builder.piece_bitboard(rook).test(Square::A1));
    }

    #[test]
    fn options_default_to_lenient() {
        assert_eq!(Recovery::Lenient, FenOptions::default().recovery);
        assert_eq!(FenOptions::lenient(), FenOptions::default());
    }

    #[test]
    fn error_display() {
        assert_eq!(
            "invalid side to move 'x', expected 'w' or 'b'",
            FenParseError::InvalidSideToMove('x').to_string()
        );
        assert_eq!(
            "rank does not have eight files",
            FenParseError::RankDoesNotSumToEight.to_string()
        );
    }
}
