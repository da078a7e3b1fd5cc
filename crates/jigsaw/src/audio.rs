use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy_kira_audio::{Audio, AudioControl, AudioPlugin, AudioSource};
use jigsaw_core::Cue;

/// Raised by the tick system for every cue the engine reports.
#[derive(Event, Debug, Clone, Copy)]
pub struct CueEvent(pub Cue);

#[derive(Resource)]
struct CueSounds {
    victory: Handle<AudioSource>,
}

impl CueSounds {
    const fn get(&self, cue: Cue) -> &Handle<AudioSource> {
        match cue {
            Cue::Victory => &self.victory,
        }
    }
}

fn cue_path(cue: Cue) -> String {
    format!("audio/{cue}.ogg")
}

pub struct CuePlugin;

impl Plugin for CuePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(AudioPlugin)
            .add_event::<CueEvent>()
            .add_systems(Startup, load_cue_sounds)
            .add_systems(Update, play_cues);
    }
}

fn load_cue_sounds(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(CueSounds {
        victory: asset_server.load(cue_path(Cue::Victory)),
    });
}

// Sounds are optional: a cue whose file failed to load is skipped.
fn play_cues(
    mut cue_events: EventReader<CueEvent>,
    sounds: Res<CueSounds>,
    asset_server: Res<AssetServer>,
    audio: Res<Audio>,
) {
    for CueEvent(cue) in cue_events.read() {
        let handle = sounds.get(*cue);
        if matches!(asset_server.load_state(handle), LoadState::Loaded) {
            audio.play(handle.clone());
        } else {
            debug!("No sound for {cue}, skipping");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cue_files_live_under_audio() {
        assert_eq!(cue_path(Cue::Victory), "audio/victory.ogg", "snake_case cue name");
    }
}
