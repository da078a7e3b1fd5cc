use std::path::PathBuf;

use thiserror::Error;

/// The puzzle image could not be turned into pixels.
///
/// Never fatal: the session swaps in a placeholder and keeps going.
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Failed to read image {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to decode image {path:?}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// A screen point that does not land on any grid cell.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("({x}, {y}) is outside the puzzle grid")]
pub struct InvalidCoordinate {
    pub x: i32,
    pub y: i32,
}

/// Startup parameters that cannot produce a playable board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Grid size must be at least 1, got {0}")]
    GridSize(u32),

    #[error("Grid size {size} exceeds the maximum of {max}")]
    GridTooLarge { size: u32, max: u32 },

    #[error("Window {width}x{height} leaves no room for a {grid}x{grid} board")]
    WindowTooSmall { width: u32, height: u32, grid: u32 },

    #[error("Source image must be square, got {width}x{height}")]
    SourceNotSquare { width: u32, height: u32 },

    #[error("Source image edge {edge} is too small for a {grid}x{grid} grid")]
    SourceTooSmall { edge: u32, grid: u32 },

    #[error("Input budget must allow at least one event per tick")]
    EventBudget,
}
