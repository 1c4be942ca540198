//! Integration tests for the Bevy plugins
//!
//! Runs the board plugins inside a headless `App` with `MinimalPlugins` and
//! inspects the spawned entities and resources.

use bevy::prelude::*;
use xfboard::assets::{AssetsPlugin, PieceTextures};
use xfboard::core::{BoardSettings, CorePlugin, PieceStyle};
use xfboard::game::{BoardGeometry, BoardSquare, GamePlugin, PieceKind, Side, StartingPosition};
use xfboard::rendering::{
    init_placeholder_assets, replace_failed_sprites, spawn_board, BoardCell, PieceMarker,
    PiecePlugin, Shade,
};

fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app
}

/// Headless app with an asset server and the asset types pieces use
fn headless_app_with_assets() -> App {
    let mut app = headless_app();
    app.add_plugins(AssetPlugin::default())
        .init_asset::<Mesh>()
        .init_asset::<ColorMaterial>()
        .init_asset::<Image>();
    app
}

#[test]
fn test_game_plugin_inserts_starting_position() {
    //! The position resource holds 16 pieces per side after startup
    let mut app = headless_app();
    app.add_plugins(GamePlugin);
    app.update();

    let position = app.world().resource::<StartingPosition>();
    assert_eq!(position.len(), 32);
    assert_eq!(position.side(Side::White).count(), 16);
    assert_eq!(position.side(Side::Black).count(), 16);
}

#[test]
fn test_core_plugin_installs_settings() {
    let mut app = headless_app();
    app.add_plugins(CorePlugin::default());

    let world = app.world();
    assert_eq!(*world.resource::<BoardSettings>(), BoardSettings::default());
    assert_eq!(*world.resource::<BoardGeometry>(), BoardGeometry::standard());
    assert_eq!(
        world.resource::<ClearColor>().0,
        Color::srgb_u8(44, 54, 82)
    );
}

#[test]
fn test_board_spawns_64_alternating_cells() {
    //! The board is a full 8x8 grid with 32 cells of each shade
    let mut app = headless_app();
    app.insert_resource(BoardSettings::default())
        .insert_resource(BoardGeometry::standard())
        .add_systems(Startup, spawn_board);
    app.update();

    let world = app.world_mut();
    let mut cells = world.query::<(&BoardCell, &Transform)>();
    let cells: Vec<_> = cells.iter(world).map(|(c, t)| (*c, t.translation)).collect();

    assert_eq!(cells.len(), 64);
    assert_eq!(cells.iter().filter(|(c, _)| c.shade == Shade::Dark).count(), 32);

    // Top-left cell (a8) is centred at (-350, 350) on the standard board
    let (_, top_left) = cells
        .iter()
        .find(|(c, _)| c.row == 0 && c.col == 0)
        .unwrap();
    assert_eq!(top_left.truncate(), Vec2::new(-350.0, 350.0));
}

#[test]
fn test_circle_style_spawns_32_placeholder_pieces() {
    //! Every piece of the starting position becomes one circle entity
    let mut app = headless_app_with_assets();
    app.insert_resource(BoardSettings {
        piece_style: PieceStyle::Circles,
        ..Default::default()
    })
    .insert_resource(BoardGeometry::standard())
    .add_plugins((GamePlugin, AssetsPlugin, PiecePlugin));
    app.update();

    let world = app.world_mut();
    let mut pieces = world.query::<(&PieceMarker, Has<Mesh2d>, Has<Sprite>)>();
    let pieces: Vec<_> = pieces.iter(world).map(|(m, mesh, sprite)| (*m, mesh, sprite)).collect();

    assert_eq!(pieces.len(), 32);
    assert!(pieces.iter().all(|(_, mesh, sprite)| *mesh && !*sprite));
    assert_eq!(pieces.iter().filter(|(m, ..)| m.side == Side::White).count(), 16);
}

#[test]
fn test_strict_mode_exits_when_textures_are_missing() {
    //! A missing asset directory in strict mode requests a non-zero exit
    let mut app = headless_app_with_assets();
    app.insert_resource(BoardSettings {
        asset_dir: "xfboard-no-such-asset-dir".to_string(),
        fail_on_missing_assets: true,
        ..Default::default()
    })
    .add_plugins(AssetsPlugin);
    app.update();

    assert!(matches!(app.should_exit(), Some(AppExit::Error(_))));
    assert_eq!(app.world().resource::<PieceTextures>().missing().len(), 12);
}

#[test]
fn test_failed_texture_sprite_becomes_placeholder() {
    //! Only pieces whose texture is marked missing lose their sprite
    let mut app = headless_app_with_assets();
    app.insert_resource(BoardGeometry::standard())
        .add_systems(Startup, init_placeholder_assets)
        .add_systems(Update, replace_failed_sprites);

    let mut textures = PieceTextures::default();
    textures.mark_missing(Side::White, PieceKind::Queen);
    app.insert_resource(textures);

    let white_queen = app
        .world_mut()
        .spawn((
            Sprite::default(),
            PieceMarker {
                kind: PieceKind::Queen,
                side: Side::White,
                square: BoardSquare::new(4, 1).unwrap(),
            },
        ))
        .id();
    let black_queen = app
        .world_mut()
        .spawn((
            Sprite::default(),
            PieceMarker {
                kind: PieceKind::Queen,
                side: Side::Black,
                square: BoardSquare::new(4, 8).unwrap(),
            },
        ))
        .id();

    app.update();

    let world = app.world();
    assert!(world.get::<Sprite>(white_queen).is_none());
    assert!(world.get::<Mesh2d>(white_queen).is_some());
    assert!(world.get::<Sprite>(black_queen).is_some());
    assert!(world.get::<Mesh2d>(black_queen).is_none());
}
