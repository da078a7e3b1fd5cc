use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy::render::RenderPlugin;
use bevy::render::settings::{Backends, PowerPreference, RenderCreation, WgpuSettings, WgpuSettingsPriority};
use bevy::window::{PresentMode, WindowMode, WindowResolution};
use jigsaw_core::PuzzleConfig;

pub const TITLE: &str = "Relaxing Jigsaw Puzzle";

/// Default plugins with a fixed-size window matching the puzzle layout.
pub fn get_default_app(config: &PuzzleConfig) -> App {
    let mut app = App::new();

    let asset_plugin = AssetPlugin {
        file_path: "assets".to_string(),
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let resolution = WindowResolution::new(config.window_width as f32, config.window_height as f32);

    let window_plugin = WindowPlugin {
        primary_window: Some(Window {
            title: TITLE.to_string(),
            present_mode: PresentMode::Fifo,
            resolution,
            // Pointer hit-testing assumes one window pixel per layout pixel.
            resizable: false,
            mode: WindowMode::Windowed,
            ..default()
        }),
        ..default()
    };

    let render_plugin = RenderPlugin {
        render_creation: RenderCreation::Automatic(WgpuSettings {
            backends: Some(Backends::PRIMARY | Backends::GL),
            power_preference: PowerPreference::LowPower,
            priority: WgpuSettingsPriority::Functionality,
            ..default()
        }),
        ..default()
    };

    app.add_plugins(
        DefaultPlugins
            .set(asset_plugin)
            .set(window_plugin)
            .set(render_plugin),
    );

    // Nothing animates between clicks, no need to render flat out.
    app.add_plugins(bevy_framepace::FramepacePlugin);

    app
}
