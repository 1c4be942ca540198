//! Piece rendering module
//!
//! Spawns the 32 starting pieces as sprites or circle placeholders.

pub mod pieces;

pub use pieces::*;
