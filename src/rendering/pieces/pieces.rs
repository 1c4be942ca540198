//! Chess piece 2D rendering - one generic spawning routine
//!
//! Every piece goes through [`piece_placements`] and [`spawn_pieces`]; there is
//! no per-kind code. The only per-kind data is the texture looked up in
//! [`PieceTextures`] by (side, kind).
//!
//! # Piece styles
//!
//! - `Sprites`: the texture is stretched to one square (`custom_size`), the same
//!   as scaling it by `square_size / texture_width` for square images.
//! - `Circles`: a flat circle of radius `0.4 * square_size` coloured by side.
//!
//! Sprite style falls back to a circle for any (side, kind) whose texture is
//! missing, both at startup and when the asset server later reports a decode
//! failure ([`replace_failed_sprites`]).

use crate::assets::PieceTextures;
use crate::core::{BoardSettings, PieceStyle};
use crate::game::layout::BoardGeometry;
use crate::game::{BoardSquare, PieceKind, PieceSpec, Side, StartingPosition};
use bevy::prelude::*;

/// Draw depth of pieces, above the board
pub const PIECE_Z: f32 = 1.0;

/// Placeholder radius relative to the square size
const PLACEHOLDER_RADIUS: f32 = 0.4;

/// Identifies a spawned piece entity
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct PieceMarker {
    pub kind: PieceKind,
    pub side: Side,
    pub square: BoardSquare,
}

impl From<PieceSpec> for PieceMarker {
    fn from(spec: PieceSpec) -> Self {
        Self {
            kind: spec.kind,
            side: spec.side,
            square: spec.square,
        }
    }
}

/// Where and how large one piece is drawn
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PiecePlacement {
    pub piece: PieceSpec,
    /// Top-left window pixel of the piece's square
    pub pixel: Vec2,
    /// World-space centre of the piece's square
    pub world: Vec2,
    /// Edge length of the drawn sprite
    pub size: f32,
}

/// Placement of every piece in `position`, in position order
pub fn piece_placements(
    position: &StartingPosition,
    geometry: &BoardGeometry,
) -> Vec<PiecePlacement> {
    position
        .pieces()
        .iter()
        .map(|&piece| {
            let pixel = geometry.cell_origin(piece.square);
            PiecePlacement {
                piece,
                pixel,
                world: geometry.cell_center(piece.square),
                size: geometry.square_size,
            }
        })
        .collect()
}

/// Fill colour of a circle placeholder
pub fn placeholder_color(side: Side) -> Color {
    match side {
        Side::White => Color::srgb_u8(240, 240, 240),
        Side::Black => Color::srgb_u8(25, 25, 25),
    }
}

/// Shared mesh and materials for circle placeholders
#[derive(Resource, Clone)]
pub struct PlaceholderAssets {
    pub mesh: Handle<Mesh>,
    pub white: Handle<ColorMaterial>,
    pub black: Handle<ColorMaterial>,
}

impl PlaceholderAssets {
    pub fn material(&self, side: Side) -> Handle<ColorMaterial> {
        match side {
            Side::White => self.white.clone(),
            Side::Black => self.black.clone(),
        }
    }
}

pub fn init_placeholder_assets(
    mut commands: Commands,
    geometry: Res<BoardGeometry>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.insert_resource(PlaceholderAssets {
        mesh: meshes.add(Circle::new(geometry.square_size * PLACEHOLDER_RADIUS)),
        white: materials.add(ColorMaterial::from_color(placeholder_color(Side::White))),
        black: materials.add(ColorMaterial::from_color(placeholder_color(Side::Black))),
    });
}

fn insert_placeholder(entity: &mut EntityCommands, side: Side, placeholders: &PlaceholderAssets) {
    entity.insert((
        Mesh2d(placeholders.mesh.clone()),
        MeshMaterial2d(placeholders.material(side)),
    ));
}

/// Spawn one entity per piece of the starting position
pub fn spawn_pieces(
    mut commands: Commands,
    position: Res<StartingPosition>,
    geometry: Res<BoardGeometry>,
    settings: Res<BoardSettings>,
    textures: Option<Res<PieceTextures>>,
    placeholders: Res<PlaceholderAssets>,
) {
    let mut placeholder_count = 0;
    for placement in piece_placements(&position, &geometry) {
        let PieceSpec { kind, side, square } = placement.piece;
        let texture = match settings.piece_style {
            PieceStyle::Sprites => textures.as_ref().and_then(|t| t.get(side, kind)).cloned(),
            PieceStyle::Circles => None,
        };

        let mut entity = commands.spawn((
            Transform::from_translation(placement.world.extend(PIECE_Z)),
            PieceMarker::from(placement.piece),
            Name::new(format!("{} {} {}", side.name(), kind.name(), square)),
        ));

        match texture {
            Some(image) => {
                entity.insert(Sprite {
                    image,
                    custom_size: Some(Vec2::splat(placement.size)),
                    ..default()
                });
            }
            None => {
                insert_placeholder(&mut entity, side, &placeholders);
                placeholder_count += 1;
            }
        }
    }

    info!(
        "[PIECES] Spawned {} pieces ({} as placeholders)",
        position.len(),
        placeholder_count
    );
}

/// Swap sprites whose texture failed to load for circle placeholders
pub fn replace_failed_sprites(
    mut commands: Commands,
    textures: Option<Res<PieceTextures>>,
    placeholders: Option<Res<PlaceholderAssets>>,
    pieces: Query<(Entity, &PieceMarker), With<Sprite>>,
) {
    let (Some(textures), Some(placeholders)) = (textures, placeholders) else {
        return;
    };
    if !textures.is_changed() || textures.missing().is_empty() {
        return;
    }

    for (entity, marker) in &pieces {
        if textures.is_missing(marker.side, marker.kind) {
            let mut entity = commands.entity(entity);
            entity.remove::<Sprite>();
            insert_placeholder(&mut entity, marker.side, &placeholders);
            debug!(
                "[PIECES] {} {} on {} now drawn as a placeholder",
                marker.side.name(),
                marker.kind.name(),
                marker.square
            );
        }
    }
}

pub struct PiecePlugin;

impl Plugin for PiecePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<PieceMarker>()
            .add_systems(Startup, (init_placeholder_assets, spawn_pieces).chain())
            .add_systems(
                Update,
                replace_failed_sprites.after(crate::assets::handle_texture_load_failures),
            );
    }
}
