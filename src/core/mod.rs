//! Core module - application infrastructure
//!
//! Everything the board needs before anything is drawn: user settings and where
//! they were loaded from, the window description, error types, and the
//! [`CorePlugin`] that installs them as resources.
//!
//! # Resources
//!
//! - [`BoardSettings`] - window size, square size, piece style, theme
//! - [`SettingsOrigin`] - which settings file (if any) was used
//! - [`WindowConfig`] - primary window properties
//! - [`crate::game::layout::BoardGeometry`] - validated board geometry

pub mod error;
pub mod plugin;
pub mod resources;
pub mod settings_persistence;
pub mod window_config;

pub use error::{CoreError, CoreResult};
pub use plugin::{frame_cap, validate_settings, CorePlugin};
pub use resources::*;
pub use settings_persistence::{
    load_settings, load_settings_from, log_settings_origin, save_settings_to, settings_path,
};
pub use window_config::WindowConfig;
