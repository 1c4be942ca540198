//! Board layout engine
//!
//! Pure chess-board logic with no rendering: square coordinates, the standard
//! starting position, and the mapping from squares to window pixels.
//!
//! # Module Organization
//!
//! - `types` - [`Side`], [`PieceKind`], [`BoardSquare`]
//! - `setup` - starting position generation
//! - `layout` - square to pixel and pixel to world conversion
//! - `plugin` - [`GamePlugin`] inserting the position as a resource

pub mod error;
pub mod layout;
pub mod plugin;
pub mod setup;
pub mod types;

pub use error::{GameError, GameResult};
pub use layout::{pixel_to_world, square_to_pixel, BoardGeometry};
pub use plugin::GamePlugin;
pub use setup::{generate_starting_position, PieceSpec, StartingPosition};
pub use types::{BoardSquare, PieceKind, Side};
