use std::collections::VecDeque;

use tracing::warn;

use crate::coord::ScreenPos;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// One pointer sample in window space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub pos: ScreenPos,
}

impl PointerEvent {
    pub const fn down(x: i32, y: i32) -> Self {
        Self {
            kind: PointerKind::Down,
            pos: ScreenPos::new(x, y),
        }
    }

    pub const fn moved(x: i32, y: i32) -> Self {
        Self {
            kind: PointerKind::Move,
            pos: ScreenPos::new(x, y),
        }
    }

    pub const fn up(x: i32, y: i32) -> Self {
        Self {
            kind: PointerKind::Up,
            pos: ScreenPos::new(x, y),
        }
    }
}

/// Ordered, bounded buffer between the host's input source and the controller.
///
/// Back-to-back moves collapse into the latest one. Once full, new events are
/// dropped until the next tick drains some.
#[derive(Debug, Clone)]
pub struct InputQueue {
    events: VecDeque<PointerEvent>,
    capacity: usize,
}

impl InputQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns `false` if the event had to be dropped.
    pub fn push(&mut self, event: PointerEvent) -> bool {
        if event.kind == PointerKind::Move {
            if let Some(last) = self.events.back_mut() {
                if last.kind == PointerKind::Move {
                    *last = event;
                    return true;
                }
            }
        }
        if self.events.len() >= self.capacity {
            warn!("Input queue full, dropping {event:?}");
            return false;
        }
        self.events.push_back(event);
        true
    }

    /// Removes up to `max` events, oldest first.
    pub fn drain_batch(&mut self, max: usize) -> Vec<PointerEvent> {
        let count = max.min(self.events.len());
        self.events.drain(..count).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
