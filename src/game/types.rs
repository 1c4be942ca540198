//! Type definitions for chess pieces and board coordinates
//!
//! Newtypes and enums shared by the layout engine, the asset loader and the
//! renderer.

use super::error::{GameError, GameResult};
use bevy::prelude::*;
use std::fmt;

/// One of the two starting camps
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect, Default)]
pub enum Side {
    /// Light side, starts on ranks 1 and 2
    #[default]
    White,
    /// Dark side, starts on ranks 7 and 8
    Black,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::White, Side::Black];

    /// Lower-case name used in asset paths
    pub fn name(self) -> &'static str {
        match self {
            Side::White => "white",
            Side::Black => "black",
        }
    }

    /// Rank holding this side's rooks, knights, bishops, queen and king
    pub fn back_rank(self) -> u8 {
        match self {
            Side::White => 1,
            Side::Black => 8,
        }
    }

    /// Rank holding this side's pawns
    pub fn pawn_rank(self) -> u8 {
        match self {
            Side::White => 2,
            Side::Black => 7,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect, Default)]
pub enum PieceKind {
    #[default]
    Pawn,
    Bishop,
    Knight,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Lower-case name used in asset paths
    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Bishop => "bishop",
            PieceKind::Knight => "knight",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

/// Board square position (file, rank), both 1-8
///
/// Only constructible through checked constructors, so every `BoardSquare`
/// names one of the 64 cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect)]
pub struct BoardSquare {
    file: u8,
    rank: u8,
}

impl BoardSquare {
    /// Create a square from a file and rank (1-8 each)
    pub fn new(file: u8, rank: u8) -> GameResult<Self> {
        if (1..=8).contains(&file) && (1..=8).contains(&rank) {
            Ok(Self { file, rank })
        } else {
            Err(GameError::SquareOutOfRange { file, rank })
        }
    }

    /// Square from a file and rank already known to be in 1-8
    pub(crate) const fn from_valid(file: u8, rank: u8) -> Self {
        debug_assert!(file >= 1 && file <= 8 && rank >= 1 && rank <= 8);
        Self { file, rank }
    }

    /// Square at a window grid cell, row 0 being the top row (rank 8)
    pub fn from_grid(row: u8, col: u8) -> GameResult<Self> {
        if row < 8 && col < 8 {
            Ok(Self {
                file: col + 1,
                rank: 8 - row,
            })
        } else {
            Err(GameError::SquareOutOfRange {
                file: col.saturating_add(1),
                rank: 8u8.saturating_sub(row),
            })
        }
    }

    /// All 64 squares, rank 1 first, files a-h within each rank
    pub fn all() -> impl Iterator<Item = BoardSquare> {
        (1..=8u8).flat_map(|rank| (1..=8u8).map(move |file| BoardSquare { file, rank }))
    }

    pub fn file(self) -> u8 {
        self.file
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Window grid row (0 = top)
    pub fn row(self) -> u8 {
        8 - self.rank
    }

    /// Window grid column (0 = left)
    pub fn col(self) -> u8 {
        self.file - 1
    }
}

impl fmt::Display for BoardSquare {
    /// Algebraic notation, e.g. `e4`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file - 1) as char, self.rank)
    }
}
