use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

use crate::coord::GridCoord;
use crate::tileset::PixelBuffer;

/// Position of a tile in the board's stable enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub usize);

impl Display for TileId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Tile {
    image: Arc<PixelBuffer>,
    correct: GridCoord,
    current: Option<GridCoord>,
    /// Placement stamp, higher means placed more recently. Zero while never placed.
    placed_at: u64,
}

impl Tile {
    pub(crate) const fn new(image: Arc<PixelBuffer>, correct: GridCoord) -> Self {
        Self {
            image,
            correct,
            current: None,
            placed_at: 0,
        }
    }

    pub fn image(&self) -> &PixelBuffer {
        &self.image
    }

    pub const fn correct(&self) -> GridCoord {
        self.correct
    }

    /// `None` while the tile waits in the preview queue.
    pub const fn current(&self) -> Option<GridCoord> {
        self.current
    }

    pub const fn is_placed(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_correct(&self) -> bool {
        self.current == Some(self.correct)
    }

    pub const fn placed_at(&self) -> u64 {
        self.placed_at
    }

    pub(crate) const fn set_current(&mut self, current: Option<GridCoord>, stamp: u64) {
        self.current = current;
        self.placed_at = stamp;
    }
}
