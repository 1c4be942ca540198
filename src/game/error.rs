//! Error types for game module
//!
//! Covers invalid board coordinates and geometry handed to the layout engine.

/// Errors that can occur in board layout and setup
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GameError {
    /// File or rank outside 1..=8
    #[error("Square out of range: file {file}, rank {rank} (both must be 1-8)")]
    SquareOutOfRange { file: u8, rank: u8 },

    /// Back rank and pawn rank would put two pieces on one square
    #[error("Back rank and pawn rank must differ (both are {rank})")]
    RanksCoincide { rank: u8 },

    /// Square size or window size that cannot hold the board
    #[error("Invalid board geometry: {message}")]
    InvalidGeometry { message: String },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
