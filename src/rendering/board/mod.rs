//! Board rendering module
//!
//! Spawns the 8x8 grid of cell sprites.

pub mod board;

// Re-export all public items
pub use board::*;
