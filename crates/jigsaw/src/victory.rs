//! Overlay shown once the picture is complete.
//!
//! The overlay only paints. Presses on "Play Again" reach the engine through
//! the regular pointer queue, which resets the session; the state then
//! follows the session back to [`PuzzleState::Playing`].

use bevy::prelude::*;

use crate::Session;
use crate::space::{layout_to_world, rect_center, rect_size};

const OVERLAY_Z: f32 = 50.;
const OVERLAY_COLOR: Color = Color::srgba(0., 0., 0., 180. / 255.);
const BUTTON_COLOR: Color = Color::srgb(70. / 255., 130. / 255., 180. / 255.);
const BUTTON_HOVER_COLOR: Color = Color::srgb(100. / 255., 160. / 255., 210. / 255.);

#[derive(States, Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PuzzleState {
    #[default]
    Playing,
    Victory,
}

#[derive(Component)]
struct CleanupMarker;

#[derive(Component)]
struct RestartButton;

pub struct VictoryPlugin;

impl Plugin for VictoryPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<PuzzleState>()
            .add_systems(OnEnter(PuzzleState::Victory), spawn_overlay)
            .add_systems(OnExit(PuzzleState::Victory), cleanup_marked_entities)
            .add_systems(
                Update,
                highlight_restart.run_if(in_state(PuzzleState::Victory)),
            );
    }
}

fn spawn_overlay(mut commands: Commands, session: Res<Session>) {
    let layout = session.layout();
    let (width, height) = layout.window_size();

    commands.spawn((
        Sprite::from_color(OVERLAY_COLOR, Vec2::new(width as f32, height as f32)),
        Transform::from_xyz(0., 0., OVERLAY_Z),
        CleanupMarker,
    ));
    commands.spawn((
        Text2d::new("Puzzle Completed!"),
        TextFont {
            font_size: 36.,
            ..default()
        },
        TextColor(Color::WHITE),
        TextLayout::new_with_justify(JustifyText::Center),
        Transform::from_translation(
            layout_to_world(layout.victory_title(), layout).extend(OVERLAY_Z + 1.),
        ),
        CleanupMarker,
    ));

    let button = layout.restart_button();
    commands
        .spawn((
            Sprite::from_color(BUTTON_COLOR, rect_size(button)),
            Transform::from_translation(rect_center(button, layout).extend(OVERLAY_Z + 1.)),
            RestartButton,
            CleanupMarker,
        ))
        .with_child((
            Text2d::new("Play Again"),
            TextFont {
                font_size: 28.,
                ..default()
            },
            TextColor(Color::WHITE),
            Transform::from_xyz(0., 0., 0.1),
        ));
}

fn highlight_restart(session: Res<Session>, mut buttons: Query<&mut Sprite, With<RestartButton>>) {
    if !session.is_changed() {
        return;
    }
    let color = if session.snapshot().restart_hovered {
        BUTTON_HOVER_COLOR
    } else {
        BUTTON_COLOR
    };
    for mut sprite in &mut buttons {
        sprite.color = color;
    }
}

fn cleanup_marked_entities(mut commands: Commands, query: Query<Entity, With<CleanupMarker>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
