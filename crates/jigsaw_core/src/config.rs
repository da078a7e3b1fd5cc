use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_GRID_SIZE: u32 = 4;
pub const MAX_GRID_SIZE: u32 = 12;

// typical smartphone screen ratio (9:16)
pub const DEFAULT_WINDOW_WIDTH: u32 = 360;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 640;

pub const DEFAULT_IMAGE_PATH: &str = "assets/puzzle_image.png";

pub const DEFAULT_MAX_EVENTS_PER_TICK: usize = 32;
pub const DEFAULT_INPUT_CAPACITY: usize = 256;

/// Startup parameters for a puzzle session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// Number of tiles along each edge of the board
    pub grid_size: u32,
    /// Logical window width in pixels
    pub window_width: u32,
    /// Logical window height in pixels
    pub window_height: u32,
    /// Puzzle artwork; a placeholder is used if it cannot be loaded
    pub image_path: PathBuf,
    /// Fixed shuffle seed, mostly for reproducible runs
    pub seed: Option<u64>,
    /// Pointer events handled per tick; the rest wait for the next one
    pub max_events_per_tick: usize,
    /// Pointer events buffered between ticks
    pub input_capacity: usize,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            image_path: PathBuf::from(DEFAULT_IMAGE_PATH),
            seed: None,
            max_events_per_tick: DEFAULT_MAX_EVENTS_PER_TICK,
            input_capacity: DEFAULT_INPUT_CAPACITY,
        }
    }
}

impl PuzzleConfig {
    #[must_use]
    pub const fn with_grid_size(mut self, grid_size: u32) -> Self {
        self.grid_size = grid_size;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_image_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.image_path = path.into();
        self
    }

    /// Checks everything that can be checked before the image is loaded.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::GridSize(self.grid_size));
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge {
                size: self.grid_size,
                max: MAX_GRID_SIZE,
            });
        }
        if self.max_events_per_tick == 0 || self.input_capacity == 0 {
            return Err(ConfigError::EventBudget);
        }
        // The layout owns the remaining geometry checks.
        crate::layout::Layout::new(self).map(|_| ())
    }

    pub fn rng(&self) -> fastrand::Rng {
        self.seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(PuzzleConfig::default().validate(), Ok(()), "defaults must validate");
    }

    #[test]
    fn zero_grid_is_rejected() {
        let config = PuzzleConfig::default().with_grid_size(0);
        assert_eq!(config.validate(), Err(ConfigError::GridSize(0)), "zero grid");
    }

    #[test]
    fn oversize_grid_is_rejected() {
        let config = PuzzleConfig::default().with_grid_size(MAX_GRID_SIZE + 1);
        assert!(
            matches!(config.validate(), Err(ConfigError::GridTooLarge { .. })),
            "grid larger than the maximum"
        );
    }

    #[test]
    fn empty_event_budget_is_rejected() {
        let config = PuzzleConfig {
            max_events_per_tick: 0,
            ..PuzzleConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EventBudget), "no events per tick");
    }

    #[test]
    fn tiny_window_is_rejected() {
        let config = PuzzleConfig {
            window_width: 8,
            window_height: 8,
            ..PuzzleConfig::default()
        };
        assert!(
            matches!(config.validate(), Err(ConfigError::WindowTooSmall { .. })),
            "8x8 window cannot host a board and a preview panel"
        );
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = PuzzleConfig::default().with_seed(7);
        assert_eq!(config.rng().u64(..), config.rng().u64(..), "same seed, same stream");
    }
}
