use crate::board::Board;
use crate::tile::TileId;

/// Which unplaced tile the preview panel offers.
///
/// The cursor is an index into the board's enumeration order. It does not
/// follow placements eagerly: reads re-probe past a tile that has been placed
/// in the meantime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreviewCursor {
    index: usize,
}

impl PreviewCursor {
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    /// The offered tile: the indexed one if still unplaced, else the next unplaced one.
    pub fn current(&self, board: &Board) -> Option<TileId> {
        probe(board, self.index, 0)
    }

    /// Moves to the next unplaced tile after the current index, wrapping around.
    ///
    /// Starts from the tile currently offered, so a placement since the last
    /// settle is skipped first. With a single unplaced tile this lands on that
    /// same tile every time.
    pub fn advance(&mut self, board: &Board) -> Option<TileId> {
        self.settle(board);
        let next = probe(board, self.index, 1);
        if let Some(id) = next {
            self.index = id.0;
        }
        next
    }

    /// Writes the lazily probed position back into the index.
    pub fn settle(&mut self, board: &Board) {
        if let Some(id) = self.current(board) {
            self.index = id.0;
        }
    }

    pub const fn reset(&mut self) {
        self.index = 0;
    }
}

/// First unplaced tile at `start + skip`, `start + skip + 1`, ... circularly,
/// looking at most `board.len()` tiles.
fn probe(board: &Board, start: usize, skip: usize) -> Option<TileId> {
    let len = board.len();
    if len == 0 {
        return None;
    }
    (0..len)
        .map(|step| TileId((start + skip + step) % len))
        .find(|&id| board.tile(id).is_some_and(|tile| !tile.is_placed()))
}
