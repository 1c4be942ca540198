//! Window configuration
//!
//! Centralizes primary window properties derived from [`BoardSettings`].

use super::BoardSettings;
use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowResolution};

/// Configuration for the primary application window
#[derive(Resource, Debug, Clone, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Width and height in logical pixels; the window is always square
    pub size: u32,
    /// Whether the window may be resized by the user
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::from_settings(&BoardSettings::default())
    }
}

impl WindowConfig {
    pub fn from_settings(settings: &BoardSettings) -> Self {
        Self {
            title: settings.title.clone(),
            size: settings.window_size,
            // The board layout is computed once for a fixed window size.
            resizable: false,
        }
    }

    /// Create a Bevy Window from this configuration
    pub fn to_window(&self) -> Window {
        Window {
            title: self.title.clone(),
            resolution: WindowResolution::new(self.size, self.size),
            resizable: self.resizable,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}
