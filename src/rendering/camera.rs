//! 2D camera setup
//!
//! A default `Camera2d` maps one world unit to one logical pixel with the
//! origin at the window centre, which is what `pixel_to_world` assumes.

use bevy::prelude::*;

/// Marker component for the board camera
#[derive(Component)]
pub struct BoardCamera;

pub fn setup_board_camera(mut commands: Commands) {
    commands.spawn((Camera2d, BoardCamera, Name::new("Board Camera")));
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_board_camera);
    }
}
