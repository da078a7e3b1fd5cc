use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use jigsaw_core::{PointerEvent, ScreenPos};

use crate::render::MainCamera;
use crate::space::world_to_layout;
use crate::{PointerQueue, Session};

/// Where the pointer is this frame, in window pixels.
///
/// A finger that lifted this frame still reports where it lifted.
fn pointer_screen_position(touches: &Touches, window: &Window) -> Option<Vec2> {
    if let Some(touch) = touches.iter_just_released().next() {
        return Some(touch.position());
    }
    touches
        .first_pressed_position()
        .or_else(|| window.cursor_position())
}

/// Turns mouse and touch input into engine pointer events.
pub fn collect_pointer_events(
    button_input: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    session: Res<Session>,
    mut queue: ResMut<PointerQueue>,
    mut last_position: Local<Option<ScreenPos>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera.get_single() else {
        return;
    };
    // A release outside the window still ends the drag, at the last known spot.
    let Some(position) = pointer_screen_position(&touch_input, window)
        .and_then(|cursor| camera.viewport_to_world(camera_transform, cursor).ok())
        .map(|ray| world_to_layout(ray.origin.truncate(), session.layout()))
        .or(*last_position)
    else {
        return;
    };

    let pressed =
        button_input.just_pressed(MouseButton::Left) || touch_input.any_just_pressed();
    let released =
        button_input.just_released(MouseButton::Left) || touch_input.any_just_released();

    if *last_position != Some(position) {
        queue.push(PointerEvent::moved(position.x, position.y));
        *last_position = Some(position);
    }
    if pressed {
        queue.push(PointerEvent::down(position.x, position.y));
    }
    if released {
        queue.push(PointerEvent::up(position.x, position.y));
    }
}
