//! Bevy front end for the jigsaw engine.

use bevy::prelude::*;
use jigsaw_core::{ConfigError, GameSession, InputQueue, Mode, PuzzleConfig};

mod app;
mod audio;
pub mod cli;
mod input;
mod render;
mod space;
mod victory;

use audio::{CueEvent, CuePlugin};
use victory::{PuzzleState, VictoryPlugin};

#[derive(Resource, Deref, DerefMut)]
pub struct Session(pub GameSession);

/// Pointer events waiting for the next tick, already in window space.
#[derive(Resource, Deref, DerefMut)]
pub struct PointerQueue(pub InputQueue);

#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
enum FrameSet {
    Collect,
    Tick,
    Paint,
}

/// Builds the session, then blocks in the Bevy event loop until the window closes.
///
/// Configuration errors surface before any window is opened.
pub fn run(config: PuzzleConfig) -> Result<AppExit, ConfigError> {
    let session = GameSession::new(&config)?;
    let mut app = app::get_default_app(&config);
    app.insert_resource(PointerQueue(InputQueue::new(config.input_capacity)))
        .insert_resource(Session(session))
        .insert_resource(ClearColor(Color::srgb_u8(240, 240, 255)))
        .add_plugins((CuePlugin, VictoryPlugin))
        .configure_sets(
            Update,
            (FrameSet::Collect, FrameSet::Tick, FrameSet::Paint).chain(),
        )
        .add_systems(Startup, render::setup_scene)
        .add_systems(
            Update,
            (
                input::collect_pointer_events.in_set(FrameSet::Collect),
                tick_session.in_set(FrameSet::Tick),
                (render::rebuild_tiles, render::sync_tiles)
                    .chain()
                    .in_set(FrameSet::Paint),
            ),
        );
    Ok(app.run())
}

fn tick_session(
    mut session: ResMut<Session>,
    mut queue: ResMut<PointerQueue>,
    mut cues: EventWriter<CueEvent>,
    state: Res<State<PuzzleState>>,
    mut next_state: ResMut<NextState<PuzzleState>>,
) {
    if queue.is_empty() {
        return;
    }
    let batch = queue.drain_batch(session.max_events_per_tick());
    let report = session.tick(batch);
    for cue in report.cues {
        cues.send(CueEvent(cue));
    }

    let wanted = if session.mode() == Mode::Victory {
        PuzzleState::Victory
    } else {
        PuzzleState::Playing
    };
    if *state.get() != wanted {
        next_state.set(wanted);
    }
}
