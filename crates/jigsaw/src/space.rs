//! Conversions between the engine's window space (origin top-left, y down)
//! and Bevy world space (origin at the window centre, y up).

use bevy::prelude::*;
use jigsaw_core::{Layout, ScreenPos, ScreenRect};

pub fn world_to_layout(world: Vec2, layout: &Layout) -> ScreenPos {
    let (width, height) = layout.window_size();
    ScreenPos::new(
        (world.x + width as f32 / 2.).floor() as i32,
        (height as f32 / 2. - world.y).floor() as i32,
    )
}

pub fn layout_to_world(pos: ScreenPos, layout: &Layout) -> Vec2 {
    let (width, height) = layout.window_size();
    Vec2::new(
        pos.x as f32 - width as f32 / 2.,
        height as f32 / 2. - pos.y as f32,
    )
}

/// Centre of `rect` in world space, where Bevy anchors sprites.
pub fn rect_center(rect: ScreenRect, layout: &Layout) -> Vec2 {
    let top_left = layout_to_world(rect.origin, layout);
    top_left + Vec2::new(rect.width as f32 / 2., -(rect.height as f32) / 2.)
}

pub fn rect_size(rect: ScreenRect) -> Vec2 {
    Vec2::new(rect.width as f32, rect.height as f32)
}

#[cfg(test)]
mod tests {
    use jigsaw_core::{GridCoord, PuzzleConfig};

    use super::*;

    fn layout() -> Layout {
        Layout::new(&PuzzleConfig::default()).expect("default layout")
    }

    #[test]
    fn window_corners_map_to_world_corners() {
        let layout = layout();
        assert_eq!(
            layout_to_world(ScreenPos::new(0, 0), &layout),
            Vec2::new(-180., 320.),
            "top-left"
        );
        assert_eq!(
            world_to_layout(Vec2::new(179.5, -319.5), &layout),
            ScreenPos::new(359, 639),
            "bottom-right pixel"
        );
    }

    #[test]
    fn pointer_round_trips_through_world_space() {
        let layout = layout();
        let pos = ScreenPos::new(123, 456);
        assert_eq!(
            world_to_layout(layout_to_world(pos, &layout), &layout),
            pos,
            "same pixel back"
        );
    }

    #[test]
    fn first_cell_centre_is_half_a_tile_in() {
        let layout = layout();
        let rect = layout.cell_rect(GridCoord::new(0, 0));
        assert_eq!(rect_center(rect, &layout), Vec2::new(-135., 275.), "90px tiles");
        assert_eq!(rect_size(rect), Vec2::splat(90.), "square tile");
    }
}
