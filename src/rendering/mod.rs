//! Rendering module - 2D board visualization with Bevy
//!
//! Turns the layout engine's placements into ECS entities. Everything is spawned
//! once at startup; Bevy's renderer redraws the same entities every frame.
//!
//! # Architecture
//!
//! - `camera` - the single `Camera2d`
//! - `board` - 64 cell sprites
//! - `pieces` - 32 piece sprites or circle placeholders
//! - `utils` - checker shading and the `BoardCell` component
//!
//! # Draw order
//!
//! Board cells sit at z = 0, pieces at z = 1.

// Submodules
pub mod board;
pub mod camera;
pub mod pieces;

// Root-level modules
pub mod utils;

// Re-export commonly used items
pub use board::*;
pub use camera::*;
pub use pieces::*;
pub use utils::*;
