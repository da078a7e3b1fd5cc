//! Command-line overrides for the puzzle configuration.

use std::path::PathBuf;

use clap::Parser;
use jigsaw_core::PuzzleConfig;
use jigsaw_core::config::{DEFAULT_GRID_SIZE, DEFAULT_IMAGE_PATH};

/// Drag tiles from the preview panel onto the board until the picture is whole.
#[derive(Parser, Debug)]
#[command(name = "jigsaw")]
#[command(version, long_about = None)]
pub struct Cli {
    /// Tiles per side
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_size: u32,

    /// Square picture to cut up; a flat placeholder is used if it can't be read
    #[arg(short, long, default_value = DEFAULT_IMAGE_PATH)]
    pub image: PathBuf,

    /// Seed for the shuffle, for reproducible deals
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    pub fn into_config(self) -> PuzzleConfig {
        PuzzleConfig {
            seed: self.seed,
            ..PuzzleConfig::default()
                .with_grid_size(self.grid_size)
                .with_image_path(self.image)
        }
    }
}
