//! Board rendering utilities - checker shading
//!
//! The board alternates two fills. [`checker_color`] uses the window grid
//! (row 0 at the top, col 0 at the left): cells where `row + col` is even are
//! dark, the rest light.

use crate::core::BoardTheme;
use bevy::prelude::*;

/// Fill class of a board cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect)]
pub enum Shade {
    Light,
    Dark,
}

pub fn checker_color(row: u8, col: u8) -> Shade {
    if (row + col).is_multiple_of(2) {
        Shade::Dark
    } else {
        Shade::Light
    }
}

impl Shade {
    /// Theme colour for this shade
    pub fn color(self, theme: BoardTheme) -> Color {
        let (light, dark) = theme.colors();
        match self {
            Shade::Light => light,
            Shade::Dark => dark,
        }
    }
}

/// A board cell, tagged with its window grid position
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct BoardCell {
    pub row: u8,
    pub col: u8,
    pub shade: Shade,
}

impl BoardCell {
    pub fn new(row: u8, col: u8) -> Self {
        Self {
            row,
            col,
            shade: checker_color(row, col),
        }
    }
}
