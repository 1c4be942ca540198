use bevy::prelude::*;
use bevy::window::ExitCondition;

use xfboard::assets::AssetsPlugin;
use xfboard::core::{load_settings, validate_settings, CorePlugin, WindowConfig};
use xfboard::game::GamePlugin;
use xfboard::rendering::{BoardPlugin, CameraPlugin, PiecePlugin};

fn main() -> AppExit {
    let (settings, origin) = load_settings();

    // The logger only exists once DefaultPlugins are built, so report to stderr here.
    let geometry = match validate_settings(&settings) {
        Ok(geometry) => geometry,
        Err(e) => {
            eprintln!("[XFBOARD] Refusing to start: {}", e);
            return AppExit::error();
        }
    };

    let primary_window = Some(WindowConfig::from_settings(&settings).to_window());
    let asset_dir = settings.asset_dir.clone();

    App::new()
        // Core plugins
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window,
                    exit_condition: ExitCondition::OnPrimaryClosed,
                    close_when_requested: true,
                    ..default()
                })
                .set(AssetPlugin {
                    file_path: asset_dir,
                    ..default()
                }),
        )
        .add_plugins(CorePlugin {
            settings,
            origin,
            geometry,
        })

        // Board systems
        .add_plugins(GamePlugin)
        .add_plugins(AssetsPlugin)
        .add_plugins(CameraPlugin)
        .add_plugins(BoardPlugin)
        .add_plugins(PiecePlugin)
        .run()
}
