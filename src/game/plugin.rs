//! Game plugin - inserts the starting position

use super::setup::StartingPosition;
use super::types::{BoardSquare, PieceKind, Side};
use bevy::prelude::*;

/// Inserts [`StartingPosition`] and registers board types for reflection
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(StartingPosition::standard())
            .register_type::<Side>()
            .register_type::<PieceKind>()
            .register_type::<BoardSquare>();
    }
}
