//! Board creation
//!
//! Collects all 64 cell sprites into a Vec and spawns them in one batch.

use crate::core::BoardSettings;
use crate::game::layout::BoardGeometry;
use crate::game::BoardSquare;
use crate::rendering::utils::BoardCell;
use bevy::prelude::*;

/// Draw depth of board cells; pieces sit above
pub const BOARD_Z: f32 = 0.0;

/// Marker for every entity that belongs to the board grid
#[derive(Component)]
pub struct Board;

pub fn spawn_board(
    mut commands: Commands,
    settings: Res<BoardSettings>,
    geometry: Res<BoardGeometry>,
) {
    let size = Vec2::splat(geometry.square_size);
    let theme = settings.theme;

    let squares: Vec<_> = BoardSquare::all()
        .map(|square| {
            let cell = BoardCell::new(square.row(), square.col());
            let centre = geometry.cell_center(square);
            (
                Sprite::from_color(cell.shade.color(theme), size),
                Transform::from_translation(centre.extend(BOARD_Z)),
                cell,
                Board,
                Name::new(format!("Square {}", square)),
            )
        })
        .collect();

    let count = squares.len();
    commands.spawn_batch(squares);

    info!(
        "[BOARD] Spawned {} squares ({} theme, {}px)",
        count,
        theme.name(),
        geometry.square_size
    );
}

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<BoardCell>()
            .add_systems(Startup, spawn_board);
    }
}
