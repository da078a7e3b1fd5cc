//! Pointer events in, board mutations out.
//!
//! Each event is first turned into a [`Command`] against the unchanged
//! session, then the command is applied. A drag never touches the board until
//! the drop, so a cancelled drag has nothing to roll back.

use tracing::{debug, info};

use crate::board::Placement;
use crate::coord::{GridCoord, ScreenPos};
use crate::input::{PointerEvent, PointerKind};
use crate::session::{Drag, DragSource, GameSession, Mode};
use crate::tile::TileId;

/// Sounds the host may play. Missing audio is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Cue {
    Victory,
}

/// What a tick did, for the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    pub cues: Vec<Cue>,
    /// The board changed
    pub mutated: bool,
    /// Completion after the tick
    pub solved: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    BeginDrag(Drag),
    Drop { tile: TileId, target: GridCoord },
    Cancel,
    AdvancePreview,
    Restart,
}

impl GameSession {
    /// Handles up to the session's per-tick budget of events, in order.
    pub fn tick(&mut self, events: impl IntoIterator<Item = PointerEvent>) -> TickReport {
        let mut report = TickReport::default();
        for event in events.into_iter().take(self.max_events_per_tick) {
            self.pointer = event.pos;
            let Some(command) = self.plan(event) else {
                continue;
            };
            if self.apply(command) {
                report.mutated = true;
                self.update_completion(&mut report);
            }
        }
        self.preview.settle(&self.board);
        report.solved = self.solved;
        report
    }

    fn plan(&self, event: PointerEvent) -> Option<Command> {
        match (self.mode, event.kind) {
            (Mode::Victory, PointerKind::Down) => self
                .layout
                .restart_button()
                .contains(event.pos)
                .then_some(Command::Restart),
            (Mode::Idle, PointerKind::Down) => self.plan_press(event.pos),
            (Mode::Dragging(drag), PointerKind::Up) => {
                Some(match self.layout.cell_at(event.pos) {
                    Ok(target) => Command::Drop {
                        tile: drag.tile,
                        target,
                    },
                    Err(err) => {
                        debug!("Drag of tile {} cancelled: {err}", drag.tile);
                        Command::Cancel
                    }
                })
            }
            // Moves only update the pointer. A second press mid-drag is ignored.
            (Mode::Victory, PointerKind::Move | PointerKind::Up)
            | (Mode::Idle, PointerKind::Move | PointerKind::Up)
            | (Mode::Dragging(_), PointerKind::Move | PointerKind::Down) => None,
        }
    }

    fn plan_press(&self, pos: ScreenPos) -> Option<Command> {
        if self.layout.next_button().contains(pos) {
            return Some(Command::AdvancePreview);
        }
        if self.layout.preview_slot().contains(pos) {
            let tile = self.preview.current(&self.board)?;
            let half = (self.layout.tile_edge() / 2) as i32;
            return Some(Command::BeginDrag(Drag {
                tile,
                offset: ScreenPos::new(half, half),
                origin: None,
                source: DragSource::Preview,
            }));
        }
        let cell = self.layout.cell_at(pos).ok()?;
        let tile = self.board.tile_at(cell)?;
        Some(Command::BeginDrag(Drag {
            tile,
            offset: pos - self.layout.cell_rect(cell).origin,
            origin: Some(cell),
            source: DragSource::Board,
        }))
    }

    /// Returns whether the board changed.
    fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::BeginDrag(drag) => {
                debug!("Picked up tile {} from {:?}", drag.tile, drag.source);
                self.mode = Mode::Dragging(drag);
                false
            }
            Command::Cancel => {
                self.mode = Mode::Idle;
                false
            }
            Command::Drop { tile, target } => {
                self.mode = Mode::Idle;
                matches!(
                    self.board.place(tile, target),
                    Some(Placement::Moved | Placement::Swapped { .. })
                )
            }
            Command::AdvancePreview => {
                let offered = self.preview.advance(&self.board);
                debug!("Preview advanced to {offered:?}");
                false
            }
            Command::Restart => {
                self.reset();
                true
            }
        }
    }

    fn update_completion(&mut self, report: &mut TickReport) {
        let solved = self.board.is_complete();
        if solved && !self.solved {
            info!("Puzzle completed");
            self.mode = Mode::Victory;
            report.cues.push(Cue::Victory);
        }
        self.solved = solved;
    }
}
