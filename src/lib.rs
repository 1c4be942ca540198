pub mod assets;
pub mod core;
pub mod game;
pub mod rendering;

pub use self::core::{BoardSettings, CorePlugin};
pub use game::GamePlugin;
