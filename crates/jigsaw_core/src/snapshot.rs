use crate::coord::{GridCoord, ScreenPos, ScreenRect};
use crate::session::{GameSession, Mode};
use crate::tile::TileId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedTile {
    pub id: TileId,
    pub cell: GridCoord,
    pub rect: ScreenRect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraggedTile {
    pub id: TileId,
    pub top_left: ScreenPos,
}

/// Read-only view of a session after a tick, all a renderer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSnapshot {
    pub generation: u64,
    /// Tiles on the board in draw order, without the dragged one
    pub placed: Vec<PlacedTile>,
    pub dragged: Option<DraggedTile>,
    pub preview: Option<TileId>,
    pub completion: bool,
    pub victory: bool,
    pub restart_hovered: bool,
    pub placeholder: bool,
}

impl GameSession {
    pub fn snapshot(&self) -> RenderSnapshot {
        let drag = self.drag();
        let dragged_id = drag.map(|drag| drag.tile);
        let placed = self
            .board
            .placed()
            .into_iter()
            .filter(|&(id, _)| Some(id) != dragged_id)
            .map(|(id, cell)| PlacedTile {
                id,
                cell,
                rect: self.layout.cell_rect(cell),
            })
            .collect();
        let victory = self.mode == Mode::Victory;

        RenderSnapshot {
            generation: self.generation,
            placed,
            dragged: drag.map(|drag| DraggedTile {
                id: drag.tile,
                top_left: self.pointer - drag.offset,
            }),
            preview: self.preview_tile(),
            completion: self.solved,
            victory,
            restart_hovered: victory && self.layout.restart_button().contains(self.pointer),
            placeholder: self.placeholder,
        }
    }
}
