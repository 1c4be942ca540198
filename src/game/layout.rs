//! Board layout engine - square to pixel mapping
//!
//! Two coordinate spaces are involved:
//!
//! - **Window pixels**: origin at the top-left corner of the window, y grows
//!   downward. [`square_to_pixel`] answers in this space, returning the top-left
//!   corner of a cell.
//! - **Bevy world**: origin at the window centre, y grows upward, one unit per
//!   logical pixel under the default `Camera2d`. [`pixel_to_world`] converts a
//!   cell placement into the centre point sprites are anchored on.
//!
//! Rank 1 sits at the bottom of the window, hence the `8 - rank` flip.

use super::error::{GameError, GameResult};
use super::types::BoardSquare;
use bevy::prelude::*;

/// Number of cells along one board edge
pub const BOARD_CELLS: u8 = 8;

/// Top-left window pixel of the cell for `square`
pub fn square_to_pixel(square: BoardSquare, square_size: f32, board_offset: f32) -> Vec2 {
    Vec2::new(
        board_offset + f32::from(square.file() - 1) * square_size,
        board_offset + f32::from(BOARD_CELLS - square.rank()) * square_size,
    )
}

/// World-space centre of a square-sized cell whose top-left window pixel is `pixel`
pub fn pixel_to_world(pixel: Vec2, square_size: f32, window_size: f32) -> Vec2 {
    let half_window = window_size / 2.0;
    let centre = pixel + Vec2::splat(square_size / 2.0);
    Vec2::new(centre.x - half_window, half_window - centre.y)
}

/// Square size, window size and the margin that centres the board
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    pub window_size: f32,
    pub square_size: f32,
    pub board_offset: f32,
}

impl BoardGeometry {
    /// Derive the geometry for a square window of `window_size` pixels
    ///
    /// Fails when the square size is not positive or the board does not fit.
    pub fn new(window_size: u32, square_size: f32) -> GameResult<Self> {
        if !(square_size.is_finite() && square_size > 0.0) {
            return Err(GameError::InvalidGeometry {
                message: format!("square size must be positive, got {}", square_size),
            });
        }
        let window_size = window_size as f32;
        let board_size = square_size * f32::from(BOARD_CELLS);
        if board_size > window_size {
            return Err(GameError::InvalidGeometry {
                message: format!(
                    "board of {}px does not fit a {}px window",
                    board_size, window_size
                ),
            });
        }
        Ok(Self {
            window_size,
            square_size,
            board_offset: (window_size - board_size) / 2.0,
        })
    }

    /// 900px window with 100px squares
    pub fn standard() -> Self {
        Self {
            window_size: 900.0,
            square_size: 100.0,
            board_offset: 50.0,
        }
    }

    pub fn board_size(&self) -> f32 {
        self.square_size * f32::from(BOARD_CELLS)
    }

    /// Top-left window pixel of `square`
    pub fn cell_origin(&self, square: BoardSquare) -> Vec2 {
        square_to_pixel(square, self.square_size, self.board_offset)
    }

    /// World-space centre of `square`
    pub fn cell_center(&self, square: BoardSquare) -> Vec2 {
        pixel_to_world(self.cell_origin(square), self.square_size, self.window_size)
    }
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::standard()
    }
}
