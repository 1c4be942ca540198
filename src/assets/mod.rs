//! Asset management module
//!
//! Loads the twelve piece textures (`pieces/<side>-<kind>.png`) and tracks which
//! of them are unusable, so the renderer can draw a placeholder instead.
//!
//! Loading is fallible in two stages:
//! - at startup, a texture whose file is absent on disk is reported as
//!   [`AssetError::NotFound`] and never queued
//! - later, the asset server may fail to decode a queued file; those failures
//!   arrive as `AssetLoadFailedEvent<Image>` and are folded into
//!   [`PieceTextures`] by [`handle_texture_load_failures`]

use bevy::asset::io::file::FileAssetReader;
use bevy::asset::AssetLoadFailedEvent;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::core::{BoardSettings, PieceStyle};
use crate::game::{PieceKind, Side};

/// Errors raised while locating piece assets
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// Texture file missing from the asset directory
    #[error("Asset not found: {}", path.display())]
    NotFound { path: PathBuf },
}

/// Result type alias for asset operations
pub type AssetResult<T> = Result<T, AssetError>;

/// Asset path of the texture for one side and kind, relative to the asset root
pub fn piece_texture_path(side: Side, kind: PieceKind) -> String {
    format!("pieces/{}-{}.png", side.name(), kind.name())
}

/// Directory Bevy's file reader resolves asset paths against
pub fn asset_root(settings: &BoardSettings) -> PathBuf {
    FileAssetReader::get_base_path().join(&settings.asset_dir)
}

/// Queue a piece texture for loading if its file exists under `asset_root`
pub fn load_piece_texture(
    asset_server: &AssetServer,
    asset_root: &Path,
    side: Side,
    kind: PieceKind,
) -> AssetResult<Handle<Image>> {
    let relative = piece_texture_path(side, kind);
    let path = asset_root.join(&relative);
    if !path.is_file() {
        return Err(AssetError::NotFound { path });
    }
    Ok(asset_server.load(relative))
}

/// Handles to the piece textures that are (still) usable
#[derive(Resource, Default, Debug)]
pub struct PieceTextures {
    handles: HashMap<(Side, PieceKind), Handle<Image>>,
    missing: Vec<(Side, PieceKind)>,
}

impl PieceTextures {
    pub fn insert(&mut self, side: Side, kind: PieceKind, handle: Handle<Image>) {
        self.handles.insert((side, kind), handle);
    }

    /// Record that no texture is available for this side and kind
    pub fn mark_missing(&mut self, side: Side, kind: PieceKind) {
        self.handles.remove(&(side, kind));
        if !self.missing.contains(&(side, kind)) {
            self.missing.push((side, kind));
        }
    }

    pub fn get(&self, side: Side, kind: PieceKind) -> Option<&Handle<Image>> {
        self.handles.get(&(side, kind))
    }

    pub fn missing(&self) -> &[(Side, PieceKind)] {
        &self.missing
    }

    pub fn is_missing(&self, side: Side, kind: PieceKind) -> bool {
        self.missing.contains(&(side, kind))
    }

    /// Side and kind whose texture has the given asset id
    pub fn find(&self, id: AssetId<Image>) -> Option<(Side, PieceKind)> {
        self.handles
            .iter()
            .find(|(_, handle)| handle.id() == id)
            .map(|(key, _)| *key)
    }
}

/// Startup system queueing every piece texture
///
/// Missing files become placeholders, or exit the app when
/// `fail_on_missing_assets` is set.
pub fn load_piece_textures(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    settings: Res<BoardSettings>,
    mut exit: MessageWriter<AppExit>,
) {
    let mut textures = PieceTextures::default();

    if settings.piece_style == PieceStyle::Circles {
        info!("[ASSETS] Circle piece style selected, skipping piece textures");
        commands.insert_resource(textures);
        return;
    }

    let root = asset_root(&settings);
    for side in Side::ALL {
        for kind in PieceKind::ALL {
            match load_piece_texture(&asset_server, &root, side, kind) {
                Ok(handle) => textures.insert(side, kind, handle),
                Err(e) => {
                    if settings.fail_on_missing_assets {
                        error!("[ASSETS] {}", e);
                    } else {
                        warn!("[ASSETS] {}. Drawing a placeholder instead.", e);
                    }
                    textures.mark_missing(side, kind);
                }
            }
        }
    }

    if !textures.missing().is_empty() && settings.fail_on_missing_assets {
        error!(
            "[ASSETS] {} piece textures missing under {:?}, exiting",
            textures.missing().len(),
            root
        );
        exit.write(AppExit::error());
    } else {
        info!(
            "[ASSETS] Queued {} piece textures from {:?}",
            textures.handles.len(),
            root
        );
    }

    commands.insert_resource(textures);
}

/// Fold decode failures reported by the asset server into [`PieceTextures`]
pub fn handle_texture_load_failures(
    mut failed_events: MessageReader<AssetLoadFailedEvent<Image>>,
    textures: Option<ResMut<PieceTextures>>,
) {
    let Some(mut textures) = textures else {
        return;
    };

    for event in failed_events.read() {
        if let Some((side, kind)) = textures.find(event.id) {
            warn!(
                "[ASSETS] Failed to load {}: {}. Drawing a placeholder instead.",
                event.path, event.error
            );
            textures.mark_missing(side, kind);
        }
    }
}

/// Loads piece textures and watches for load failures
pub struct AssetsPlugin;

impl Plugin for AssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_piece_textures)
            .add_systems(Update, handle_texture_load_failures);
    }
}
