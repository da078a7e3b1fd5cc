use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use jigsaw_core::{GameSession, PixelBuffer, ScreenRect, TileId};

use crate::Session;
use crate::space::{layout_to_world, rect_center, rect_size};

const BACKDROP_Z: f32 = -1.;
const SLOT_Z: f32 = 0.;
const TILE_Z: f32 = 1.;
// Keeps later placements above earlier ones while staying under the grid.
const TILE_Z_STEP: f32 = 0.001;
const PREVIEW_Z: f32 = 5.;
const GRID_Z: f32 = 10.;
const DRAG_Z: f32 = 20.;

const PANEL_COLOR: Color = Color::srgb(200. / 255., 200. / 255., 200. / 255.);
const SLOT_COLOR: Color = Color::srgb(170. / 255., 170. / 255., 170. / 255.);
const NEXT_COLOR: Color = Color::srgb(225. / 255., 225. / 255., 225. / 255.);

#[derive(Component)]
pub struct MainCamera;

#[derive(Component)]
pub struct TileSprite(pub TileId);

pub fn setup_scene(mut commands: Commands, session: Res<Session>) {
    commands.spawn(Camera2d).insert(MainCamera);

    let layout = session.layout();
    let board = layout.board();
    commands.spawn((
        Sprite::from_color(Color::WHITE, rect_size(board)),
        Transform::from_translation(rect_center(board, layout).extend(BACKDROP_Z)),
    ));

    // Grid lines
    let edge = layout.tile_edge() as i32;
    let top_left = layout_to_world(board.origin, layout);
    let board_edge = board.width as f32;
    for line in 0..=layout.grid_size() as i32 {
        let offset = (line * edge) as f32;
        commands.spawn((
            Sprite::from_color(Color::BLACK, Vec2::new(1., board_edge)),
            Transform::from_xyz(top_left.x + offset, top_left.y - board_edge / 2., GRID_Z),
        ));
        commands.spawn((
            Sprite::from_color(Color::BLACK, Vec2::new(board_edge, 1.)),
            Transform::from_xyz(top_left.x + board_edge / 2., top_left.y - offset, GRID_Z),
        ));
    }

    let panel = layout.panel();
    commands.spawn((
        Sprite::from_color(PANEL_COLOR, rect_size(panel)),
        Transform::from_translation(rect_center(panel, layout).extend(BACKDROP_Z)),
    ));
    commands.spawn((
        Text2d::new("Preview"),
        TextFont {
            font_size: 24.,
            ..default()
        },
        TextColor(Color::BLACK),
        Transform::from_translation(
            layout_to_world(layout.preview_label(), layout).extend(SLOT_Z),
        ),
    ));

    let slot = layout.preview_slot();
    commands.spawn((
        Sprite::from_color(SLOT_COLOR, rect_size(slot)),
        Transform::from_translation(rect_center(slot, layout).extend(SLOT_Z)),
    ));

    let next = layout.next_button();
    commands
        .spawn((
            Sprite::from_color(NEXT_COLOR, rect_size(next)),
            Transform::from_translation(rect_center(next, layout).extend(SLOT_Z)),
        ))
        .with_child((
            Text2d::new("Next"),
            TextFont {
                font_size: 24.,
                ..default()
            },
            TextColor(Color::BLACK),
            Transform::from_xyz(0., 0., 0.1),
        ));
}

fn tile_image(pixels: &PixelBuffer) -> Image {
    Image::new(
        Extent3d {
            width: pixels.width(),
            height: pixels.height(),
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        pixels.as_rgba().to_vec(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    )
}

/// Respawns one sprite per tile whenever the session deals a new set.
pub fn rebuild_tiles(
    mut commands: Commands,
    session: Res<Session>,
    mut images: ResMut<Assets<Image>>,
    tiles: Query<Entity, With<TileSprite>>,
    mut built: Local<Option<u64>>,
) {
    if *built == Some(session.generation()) {
        return;
    }
    for entity in &tiles {
        commands.entity(entity).despawn_recursive();
    }

    let n = session.layout().grid_size();
    let edge = session.layout().tile_edge() as f32;
    for (id, tile) in session.board().tiles() {
        let mut entity = commands.spawn((
            Sprite {
                image: images.add(tile_image(tile.image())),
                custom_size: Some(Vec2::splat(edge)),
                ..default()
            },
            Transform::default(),
            Visibility::Hidden,
            TileSprite(id),
        ));
        // Flat placeholder tiles are told apart by where they belong.
        if session.is_placeholder() {
            entity.with_child((
                Text2d::new((tile.correct().index(n) + 1).to_string()),
                TextFont {
                    font_size: (edge / 2.).min(40.),
                    ..default()
                },
                TextColor(Color::BLACK),
                Transform::from_xyz(0., 0., 0.1),
            ));
        }
    }

    info!("Built {} tile sprites for generation {}", n * n, session.generation());
    *built = Some(session.generation());
}

/// Where and how big each visible tile is drawn, indexed by tile id.
fn tile_targets(session: &GameSession) -> Vec<Option<(Vec3, f32)>> {
    let layout = session.layout();
    let snapshot = session.snapshot();
    let edge = layout.tile_edge();
    let mut targets = vec![None; session.board().len()];
    let mut set = |id: TileId, rect: ScreenRect, z: f32| {
        if let Some(target) = targets.get_mut(id.0) {
            *target = Some((rect_center(rect, layout).extend(z), rect.width as f32));
        }
    };

    for (order, placed) in snapshot.placed.iter().enumerate() {
        set(placed.id, placed.rect, (order as f32).mul_add(TILE_Z_STEP, TILE_Z));
    }
    if let Some(id) = snapshot.preview {
        set(id, layout.preview_slot(), PREVIEW_Z);
    }
    if let Some(dragged) = snapshot.dragged {
        let rect = ScreenRect::new(dragged.top_left.x, dragged.top_left.y, edge, edge);
        set(dragged.id, rect, DRAG_Z);
    }
    targets
}

pub fn sync_tiles(
    session: Res<Session>,
    mut tiles: Query<(&TileSprite, &mut Transform, &mut Visibility, &mut Sprite)>,
) {
    if !session.is_changed() {
        return;
    }
    let targets = tile_targets(&session);
    for (TileSprite(id), mut transform, mut visibility, mut sprite) in &mut tiles {
        match targets.get(id.0).copied().flatten() {
            Some((translation, size)) => {
                transform.translation = translation;
                sprite.custom_size = Some(Vec2::splat(size));
                *visibility = Visibility::Visible;
            }
            None => *visibility = Visibility::Hidden,
        }
    }
}
