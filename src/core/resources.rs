//! Core resources: user-facing board settings and themes.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User preferences for the board window
///
/// Loaded once from `settings.json` before the app is built. Every field has a
/// default so partial files are accepted.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Resource)]
#[serde(default)]
pub struct BoardSettings {
    /// Side length of the square window in logical pixels
    pub window_size: u32,
    /// Side length of one board cell in logical pixels
    pub square_size: f32,
    /// Window title
    pub title: String,
    /// Upper bound on redraws per second
    pub frame_rate: u32,
    /// How pieces are drawn
    pub piece_style: PieceStyle,
    /// Board colour scheme
    pub theme: BoardTheme,
    /// Asset directory handed to Bevy's `AssetPlugin`
    pub asset_dir: String,
    /// Exit instead of drawing placeholders when a piece texture is missing
    pub fail_on_missing_assets: bool,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            window_size: 900,
            square_size: 100.0,
            title: "Chess".to_string(),
            frame_rate: 30,
            piece_style: PieceStyle::Sprites,
            theme: BoardTheme::Slate,
            asset_dir: "assets".to_string(),
            fail_on_missing_assets: false,
        }
    }
}

/// Piece drawing styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Reflect, Default)]
pub enum PieceStyle {
    /// Textured sprites loaded from `pieces/<side>-<kind>.png`
    #[default]
    Sprites,
    /// Flat circles coloured by side
    Circles,
}

/// Board visual themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Reflect, Default)]
pub enum BoardTheme {
    #[default]
    Slate,
    Classic,
    Wood,
    Marble,
}

impl BoardTheme {
    pub fn name(&self) -> &'static str {
        match self {
            BoardTheme::Slate => "Slate",
            BoardTheme::Classic => "Classic",
            BoardTheme::Wood => "Wood",
            BoardTheme::Marble => "Marble",
        }
    }

    /// Returns (light_square_color, dark_square_color)
    pub fn colors(&self) -> (Color, Color) {
        match self {
            BoardTheme::Slate => (
                Color::srgb_u8(157, 172, 204), // Pale slate
                Color::srgb_u8(100, 113, 142), // Slate
            ),
            BoardTheme::Classic => (
                Color::srgb(0.93, 0.93, 0.82), // Cream
                Color::srgb(0.46, 0.59, 0.34), // Green
            ),
            BoardTheme::Wood => (
                Color::srgb(0.85, 0.70, 0.55), // Light wood
                Color::srgb(0.55, 0.35, 0.20), // Dark wood
            ),
            BoardTheme::Marble => (
                Color::srgb(0.95, 0.95, 0.95), // White marble
                Color::srgb(0.15, 0.15, 0.15), // Black marble
            ),
        }
    }

    /// Window clear colour drawn around the board
    pub fn background(&self) -> Color {
        match self {
            BoardTheme::Slate => Color::srgb_u8(44, 54, 82),
            BoardTheme::Classic => Color::srgb(0.17, 0.22, 0.14),
            BoardTheme::Wood => Color::srgb(0.20, 0.13, 0.08),
            BoardTheme::Marble => Color::srgb(0.35, 0.35, 0.38),
        }
    }
}

/// Where the active settings came from, kept so startup can log it
#[derive(Resource, Debug, Clone, PartialEq)]
pub enum SettingsOrigin {
    /// No settings file existed at `path`
    Defaults { path: PathBuf },
    /// Settings were read from `path`
    File { path: PathBuf },
    /// The file at `path` could not be used
    Invalid { path: PathBuf, reason: String },
}
