//! Screen geometry of the board, the preview panel and the victory overlay.
//!
//! The board sits at the top of the window, centred horizontally. The preview
//! panel takes the remaining space below it.

use crate::config::PuzzleConfig;
use crate::coord::{GridCoord, ScreenPos, ScreenRect};
use crate::error::{ConfigError, InvalidCoordinate};

/// Height kept free under the board for the preview panel.
pub const PANEL_RESERVE: u32 = 200;
pub const PREVIEW_SLOT_MAX: u32 = 100;
const PREVIEW_LABEL_OFFSET: u32 = 20;
const PREVIEW_SLOT_OFFSET: u32 = 40;
const NEXT_BUTTON_GAP: u32 = 16;
pub const NEXT_BUTTON_SIZE: (u32, u32) = (100, 36);
pub const RESTART_BUTTON_SIZE: (u32, u32) = (200, 50);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    grid_size: u32,
    tile_edge: u32,
    window_width: u32,
    window_height: u32,
    board: ScreenRect,
    panel: ScreenRect,
    preview_slot: ScreenRect,
    next_button: ScreenRect,
    restart_button: ScreenRect,
}

impl Layout {
    pub fn new(config: &PuzzleConfig) -> Result<Self, ConfigError> {
        let n = config.grid_size;
        if n == 0 {
            return Err(ConfigError::GridSize(n));
        }
        let width = config.window_width;
        let height = config.window_height;
        let tile_edge = (width / n).min(height.saturating_sub(PANEL_RESERVE) / n);
        if tile_edge == 0 || width < RESTART_BUTTON_SIZE.0 {
            return Err(ConfigError::WindowTooSmall {
                width,
                height,
                grid: n,
            });
        }

        let board_edge = tile_edge * n;
        let board = ScreenRect::new(((width - board_edge) / 2) as i32, 0, board_edge, board_edge);
        let panel = ScreenRect::new(0, board.bottom(), width, height - board_edge);

        let slot_edge = tile_edge.min(PREVIEW_SLOT_MAX);
        let preview_slot = ScreenRect::new(
            ((width - slot_edge) / 2) as i32,
            panel.origin.y + PREVIEW_SLOT_OFFSET as i32,
            slot_edge,
            slot_edge,
        );
        let next_button = ScreenRect::new(
            ((width - NEXT_BUTTON_SIZE.0) / 2) as i32,
            preview_slot.bottom() + NEXT_BUTTON_GAP as i32,
            NEXT_BUTTON_SIZE.0,
            NEXT_BUTTON_SIZE.1,
        );
        let restart_button = ScreenRect::new(
            ((width - RESTART_BUTTON_SIZE.0) / 2) as i32,
            (height / 2 + 50) as i32,
            RESTART_BUTTON_SIZE.0,
            RESTART_BUTTON_SIZE.1,
        );

        Ok(Self {
            grid_size: n,
            tile_edge,
            window_width: width,
            window_height: height,
            board,
            panel,
            preview_slot,
            next_button,
            restart_button,
        })
    }

    pub const fn grid_size(&self) -> u32 {
        self.grid_size
    }

    pub const fn tile_edge(&self) -> u32 {
        self.tile_edge
    }

    pub const fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    pub const fn board(&self) -> ScreenRect {
        self.board
    }

    pub const fn panel(&self) -> ScreenRect {
        self.panel
    }

    pub const fn preview_slot(&self) -> ScreenRect {
        self.preview_slot
    }

    pub const fn next_button(&self) -> ScreenRect {
        self.next_button
    }

    pub const fn restart_button(&self) -> ScreenRect {
        self.restart_button
    }

    /// Where the "Preview" caption is centred.
    pub const fn preview_label(&self) -> ScreenPos {
        ScreenPos::new(
            (self.window_width / 2) as i32,
            self.panel.origin.y + PREVIEW_LABEL_OFFSET as i32,
        )
    }

    /// Where the victory headline is centred.
    pub const fn victory_title(&self) -> ScreenPos {
        ScreenPos::new(
            (self.window_width / 2) as i32,
            (self.window_height / 2) as i32 - 50,
        )
    }

    /// Maps a screen point to the cell under it by integer division by the tile edge.
    pub fn cell_at(&self, pos: ScreenPos) -> Result<GridCoord, InvalidCoordinate> {
        let local = pos - self.board.origin;
        let invalid = InvalidCoordinate { x: pos.x, y: pos.y };
        if local.x < 0 || local.y < 0 {
            return Err(invalid);
        }
        let edge = self.tile_edge as i32;
        let coord = GridCoord::new((local.x / edge) as u32, (local.y / edge) as u32);
        if coord.is_within(self.grid_size) {
            Ok(coord)
        } else {
            Err(invalid)
        }
    }

    pub fn cell_rect(&self, coord: GridCoord) -> ScreenRect {
        let edge = self.tile_edge as i32;
        ScreenRect::new(
            self.board.origin.x + coord.col as i32 * edge,
            self.board.origin.y + coord.row as i32 * edge,
            self.tile_edge,
            self.tile_edge,
        )
    }
}
