//! Engine for a drag-and-drop sliding jigsaw.
//!
//! A square picture is cut into an N×N grid of tiles that start off the board.
//! The player pulls them out of a preview slot, or off the board, and drops
//! them on cells until every tile sits on its own cell. Nothing here knows
//! about windows or GPUs: the host feeds [`PointerEvent`]s into
//! [`GameSession::tick`] and paints the [`RenderSnapshot`] it gets back.

pub mod board;
pub mod config;
pub mod controller;
pub mod coord;
pub mod error;
pub mod input;
pub mod layout;
pub mod preview;
pub mod session;
pub mod snapshot;
pub mod tile;
pub mod tileset;

pub use board::{Board, Placement};
pub use config::PuzzleConfig;
pub use controller::{Cue, TickReport};
pub use coord::{GridCoord, ScreenPos, ScreenRect};
pub use error::{AssetError, ConfigError, InvalidCoordinate};
pub use input::{InputQueue, PointerEvent, PointerKind};
pub use layout::Layout;
pub use preview::PreviewCursor;
pub use session::{Drag, DragSource, GameSession, Mode};
pub use snapshot::{DraggedTile, PlacedTile, RenderSnapshot};
pub use tile::{Tile, TileId};
pub use tileset::{PixelBuffer, SourceImage, TileSet};
