//! Core plugin for XFBoard
//!
//! Installs the resources every other plugin reads:
//! - [`BoardSettings`] and the [`BoardGeometry`] validated from it
//! - [`WindowConfig`] for the primary window
//! - `ClearColor` from the board theme
//! - `WinitSettings` capping redraws at the configured frame rate
//!
//! Add it right after `DefaultPlugins`.

use bevy::prelude::*;
use bevy::winit::{UpdateMode, WinitSettings};
use std::time::Duration;

use super::{
    log_settings_origin, BoardSettings, CoreError, CoreResult, SettingsOrigin, WindowConfig,
};
use crate::game::layout::BoardGeometry;

/// Check settings that would produce an unusable window or board
///
/// Returns the board geometry derived from the settings.
pub fn validate_settings(settings: &BoardSettings) -> CoreResult<BoardGeometry> {
    if settings.frame_rate == 0 {
        return Err(CoreError::InvalidSettings {
            message: "frame_rate must be at least 1".to_string(),
        });
    }
    Ok(BoardGeometry::new(settings.window_size, settings.square_size)?)
}

/// Winit update policy for a static scene redrawn at most `frame_rate` times a second
///
/// Input and window events must not wake the loop early, otherwise every mouse
/// move triggers an extra redraw.
pub fn frame_cap(frame_rate: u32) -> WinitSettings {
    let wait = Duration::from_secs_f64(1.0 / f64::from(frame_rate.max(1)));
    let timer_only = || UpdateMode::Reactive {
        wait,
        react_to_device_events: false,
        react_to_user_events: false,
        react_to_window_events: false,
    };
    WinitSettings {
        focused_mode: timer_only(),
        unfocused_mode: timer_only(),
    }
}

/// Core plugin for XFBoard
pub struct CorePlugin {
    pub settings: BoardSettings,
    pub origin: SettingsOrigin,
    pub geometry: BoardGeometry,
}

impl Default for CorePlugin {
    fn default() -> Self {
        let settings = BoardSettings::default();
        let geometry = BoardGeometry::standard();
        Self {
            settings,
            origin: SettingsOrigin::Defaults {
                path: super::settings_path(),
            },
            geometry,
        }
    }
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.settings.clone())
            .insert_resource(self.origin.clone())
            .insert_resource(self.geometry)
            .insert_resource(WindowConfig::from_settings(&self.settings))
            .insert_resource(ClearColor(self.settings.theme.background()))
            .insert_resource(frame_cap(self.settings.frame_rate));

        app.register_type::<BoardSettings>()
            .register_type::<WindowConfig>();

        app.add_systems(Startup, log_startup_configuration);
    }
}

fn log_startup_configuration(
    origin: Res<SettingsOrigin>,
    settings: Res<BoardSettings>,
    geometry: Res<BoardGeometry>,
) {
    log_settings_origin(&origin);
    info!(
        "[CORE] {}x{} window, {}px squares, {}px margin, {:?} pieces, {} theme, <= {} fps",
        settings.window_size,
        settings.window_size,
        geometry.square_size,
        geometry.board_offset,
        settings.piece_style,
        settings.theme.name(),
        settings.frame_rate
    );
}
