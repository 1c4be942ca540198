//! Starting position generation
//!
//! Uses a const back-row array to define the standard chess setup, then
//! iterates it instead of listing 32 pieces by hand.

use super::error::{GameError, GameResult};
use super::types::{BoardSquare, PieceKind, Side};
use bevy::prelude::*;

/// Back-rank kinds from file a to file h
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// One piece of the starting position
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect)]
pub struct PieceSpec {
    pub kind: PieceKind,
    pub side: Side,
    pub square: BoardSquare,
}

/// The 16 pieces of one side
///
/// Back-rank pieces come first (files 1-8), then pawns (files 1-8). Ranks are
/// checked here because callers may pass any pair; [`StartingPosition::standard`]
/// uses [`Side::back_rank`] and [`Side::pawn_rank`], which are always valid.
pub fn generate_starting_position(
    back_rank: u8,
    pawn_rank: u8,
    side: Side,
) -> GameResult<Vec<PieceSpec>> {
    BoardSquare::new(1, back_rank)?;
    BoardSquare::new(1, pawn_rank)?;
    if back_rank == pawn_rank {
        return Err(GameError::RanksCoincide { rank: back_rank });
    }
    Ok(side_pieces(back_rank, pawn_rank, side))
}

/// Pieces of one side on ranks already known to be distinct and in 1-8
fn side_pieces(back_rank: u8, pawn_rank: u8, side: Side) -> Vec<PieceSpec> {
    let back_row = (1..=8u8).zip(BACK_ROW).map(|(file, kind)| PieceSpec {
        kind,
        side,
        square: BoardSquare::from_valid(file, back_rank),
    });
    let pawns = (1..=8u8).map(|file| PieceSpec {
        kind: PieceKind::Pawn,
        side,
        square: BoardSquare::from_valid(file, pawn_rank),
    });
    back_row.chain(pawns).collect()
}

/// The full 32-piece position, inserted once at startup and never changed
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct StartingPosition {
    pieces: Vec<PieceSpec>,
}

impl StartingPosition {
    /// Standard setup: White on ranks 1-2, Black on ranks 7-8
    pub fn standard() -> Self {
        let pieces = Side::ALL
            .iter()
            .flat_map(|&side| side_pieces(side.back_rank(), side.pawn_rank(), side))
            .collect();
        Self { pieces }
    }

    pub fn pieces(&self) -> &[PieceSpec] {
        &self.pieces
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Piece standing on `square`, if any
    pub fn piece_at(&self, square: BoardSquare) -> Option<&PieceSpec> {
        self.pieces.iter().find(|piece| piece.square == square)
    }

    pub fn side(&self, side: Side) -> impl Iterator<Item = &PieceSpec> {
        self.pieces.iter().filter(move |piece| piece.side == side)
    }
}

impl Default for StartingPosition {
    fn default() -> Self {
        Self::standard()
    }
}
