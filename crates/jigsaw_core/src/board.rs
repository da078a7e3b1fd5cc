use tracing::debug;

use crate::coord::GridCoord;
use crate::tile::{Tile, TileId};

/// What a call to [`Board::place`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The target was free.
    Moved,
    /// The incumbent took the placed tile's old position, which may be unplaced.
    Swapped { displaced: TileId },
    /// The tile already sat on the target.
    Unchanged,
}

/// The tiles and where each one currently sits.
///
/// At most one tile claims any cell. `place` is the only mutation, and it
/// resolves collisions by swapping, never by dropping a tile.
#[derive(Debug, Clone)]
pub struct Board {
    grid_size: u32,
    tiles: Vec<Tile>,
    stamp: u64,
}

impl Board {
    pub const fn new(grid_size: u32, tiles: Vec<Tile>) -> Self {
        Self {
            grid_size,
            tiles,
            stamp: 0,
        }
    }

    pub const fn grid_size(&self) -> u32 {
        self.grid_size
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.0)
    }

    /// All tiles in stable enumeration order.
    pub fn tiles(&self) -> impl Iterator<Item = (TileId, &Tile)> {
        self.tiles.iter().enumerate().map(|(index, tile)| (TileId(index), tile))
    }

    /// The tile on `coord`. Plain scan, the board is small.
    ///
    /// Should two tiles ever claim the cell, the most recently placed one wins,
    /// matching draw order.
    pub fn tile_at(&self, coord: GridCoord) -> Option<TileId> {
        self.tiles()
            .filter(|(_, tile)| tile.current() == Some(coord))
            .max_by_key(|(_, tile)| tile.placed_at())
            .map(|(id, _)| id)
    }

    /// Puts `id` on `coord`, swapping with whatever tile is already there.
    pub fn place(&mut self, id: TileId, coord: GridCoord) -> Option<Placement> {
        if !coord.is_within(self.grid_size) {
            return None;
        }
        let from = self.tile(id)?.current();
        let incumbent = self.tile_at(coord);
        if incumbent == Some(id) {
            return Some(Placement::Unchanged);
        }

        self.stamp += 1;
        let stamp = self.stamp;
        let placement = match incumbent {
            Some(other) => {
                let other_stamp = if from.is_some() { stamp } else { 0 };
                if let Some(tile) = self.tiles.get_mut(other.0) {
                    tile.set_current(from, other_stamp);
                }
                Placement::Swapped { displaced: other }
            }
            None => Placement::Moved,
        };
        if let Some(tile) = self.tiles.get_mut(id.0) {
            tile.set_current(Some(coord), stamp);
        }
        debug!("Placed tile {id} on {coord}: {placement:?}");
        Some(placement)
    }

    /// Placed tiles, oldest placement first, the order they are drawn in.
    pub fn placed(&self) -> Vec<(TileId, GridCoord)> {
        let mut placed: Vec<_> = self
            .tiles()
            .filter_map(|(id, tile)| tile.current().map(|coord| (id, coord, tile.placed_at())))
            .collect();
        placed.sort_by_key(|&(id, _, stamp)| (stamp, id));
        placed.into_iter().map(|(id, coord, _)| (id, coord)).collect()
    }

    pub fn placed_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_placed()).count()
    }

    /// Current position of every tile, in enumeration order.
    pub fn positions(&self) -> Vec<Option<GridCoord>> {
        self.tiles.iter().map(Tile::current).collect()
    }

    /// True once every tile sits on its own cell.
    pub fn is_complete(&self) -> bool {
        !self.tiles.is_empty() && self.tiles.iter().all(Tile::is_correct)
    }
}

#[cfg(test)]
impl Board {
    /// Unplaced 1x1 tiles where tile `i` belongs on cell `i`.
    pub(crate) fn ordered(n: u32) -> Self {
        use std::sync::Arc;

        use crate::tileset::{PLACEHOLDER_COLOR, PixelBuffer};

        let image = Arc::new(PixelBuffer::solid(1, 1, PLACEHOLDER_COLOR));
        let tiles = (0..(n * n) as usize)
            .map(|index| Tile::new(Arc::clone(&image), GridCoord::from_index(index, n)))
            .collect();
        Self::new(n, tiles)
    }
}
