use tracing::info;

use crate::board::Board;
use crate::config::PuzzleConfig;
use crate::coord::{GridCoord, ScreenPos};
use crate::error::ConfigError;
use crate::layout::Layout;
use crate::preview::PreviewCursor;
use crate::tile::TileId;
use crate::tileset::{PixelBuffer, SourceImage, TileSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSource {
    Board,
    Preview,
}

/// The one tile following the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drag {
    pub tile: TileId,
    /// Pointer minus the tile's top-left corner at pickup
    pub offset: ScreenPos,
    /// Where the tile sat before pickup, `None` for the preview queue
    pub origin: Option<GridCoord>,
    pub source: DragSource,
}

/// Interaction mode. Holding the drag here is what keeps it to a single tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Idle,
    Dragging(Drag),
    Victory,
}

/// Everything a running puzzle owns.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) layout: Layout,
    pub(crate) tile_set: TileSet,
    pub(crate) placeholder: bool,
    pub(crate) board: Board,
    pub(crate) preview: PreviewCursor,
    pub(crate) mode: Mode,
    pub(crate) pointer: ScreenPos,
    pub(crate) solved: bool,
    pub(crate) generation: u64,
    pub(crate) max_events_per_tick: usize,
    pub(crate) rng: fastrand::Rng,
}

impl GameSession {
    /// Loads the artwork named in `config`, falling back to a placeholder.
    pub fn new(config: &PuzzleConfig) -> Result<Self, ConfigError> {
        let layout = Layout::new(config)?;
        let edge = layout.tile_edge() * layout.grid_size();
        let source = PixelBuffer::load_or_placeholder(&config.image_path, edge);
        Self::with_source(config, source)
    }

    pub fn with_source(config: &PuzzleConfig, source: SourceImage) -> Result<Self, ConfigError> {
        config.validate()?;
        let layout = Layout::new(config)?;
        let mut rng = config.rng();
        let (tile_set, tiles) = TileSet::build(&source.pixels, config.grid_size, &mut rng)?;
        info!(
            "New {n}x{n} puzzle, {edge}px tiles{placeholder}",
            n = config.grid_size,
            edge = tile_set.slice_edge(),
            placeholder = if source.placeholder { " (placeholder art)" } else { "" },
        );

        Ok(Self {
            layout,
            tile_set,
            placeholder: source.placeholder,
            board: Board::new(config.grid_size, tiles),
            preview: PreviewCursor::new(),
            mode: Mode::Idle,
            pointer: ScreenPos::default(),
            solved: false,
            generation: 0,
            max_events_per_tick: config.max_events_per_tick,
            rng,
        })
    }

    /// Deals a fresh shuffle of the same artwork and starts over.
    pub fn reset(&mut self) {
        let tiles = self.tile_set.deal(&mut self.rng);
        self.board = Board::new(self.layout.grid_size(), tiles);
        self.preview.reset();
        self.mode = Mode::Idle;
        self.solved = false;
        self.generation += 1;
        info!("Puzzle reset, generation {}", self.generation);
    }

    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    pub const fn board(&self) -> &Board {
        &self.board
    }

    pub const fn preview(&self) -> &PreviewCursor {
        &self.preview
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    /// Bumped on every reset, the tile list is new when this changes.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    pub const fn max_events_per_tick(&self) -> usize {
        self.max_events_per_tick
    }

    pub const fn drag(&self) -> Option<Drag> {
        match self.mode {
            Mode::Dragging(drag) => Some(drag),
            Mode::Idle | Mode::Victory => None,
        }
    }

    /// The tile shown in the preview slot. Empty while that tile is being dragged.
    pub fn preview_tile(&self) -> Option<TileId> {
        let current = self.preview.current(&self.board)?;
        match self.drag() {
            Some(drag) if drag.tile == current => None,
            _ => Some(current),
        }
    }
}
