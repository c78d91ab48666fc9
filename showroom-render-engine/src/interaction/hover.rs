use bevy::prelude::*;
use bevy::render::primitives::Aabb;
use bevy::window::PrimaryWindow;
use bevy::winit::cursor::CursorIcon;
use bevy::window::SystemCursorIcon;

use crate::engine::camera::choreographer::CameraChoreographer;
use crate::engine::scene::classifier::InteractionTag;
use crate::engine::scene::registry::SceneRegistry;
use crate::interaction::picking::pick_at;
use crate::overlay::stack::OverlayStack;

/// The mesh currently under the cursor, if any.
#[derive(Resource, Default)]
pub struct HoverState {
    pub current: Option<Entity>,
}

// Per-frame hover raycast with restore-then-apply highlighting
pub fn update_hover(
    mut hover: ResMut<HoverState>,
    choreographer: Res<CameraChoreographer>,
    overlays: Res<OverlayStack>,
    registry: Res<SceneRegistry>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    targets: Query<(Entity, &GlobalTransform, &Aabb, &InteractionTag)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let hit = if choreographer.is_active() || !overlays.is_empty() {
        None
    } else {
        windows
            .single()
            .ok()
            .and_then(|window| window.cursor_position())
            .zip(cameras.single().ok())
            .and_then(|(cursor, (camera, camera_transform))| {
                pick_at(
                    cursor,
                    camera,
                    camera_transform,
                    targets
                        .iter()
                        .map(|(entity, xf, aabb, tag)| (entity, *xf, *aabb, *tag)),
                )
            })
            .map(|(entity, _, _)| entity)
    };

    if hit == hover.current {
        return;
    }

    // Restore the departed object from its snapshot, never from the
    // live material, then apply the highlight to the new one.
    if let Some(previous) = hover.current.take() {
        if let Some(role) = registry.role_of_mesh(previous) {
            if let Some(object) = registry.get(role) {
                if let Some(material) = materials.get_mut(&object.material) {
                    material.emissive = object.hover.emissive;
                    material.base_color.set_alpha(object.hover.alpha);
                }
            }
        }
    }

    if let Some(entity) = hit {
        if let Some(role) = registry.role_of_mesh(entity) {
            if let Some(object) = registry.get(role) {
                if let Some(material) = materials.get_mut(&object.material) {
                    let (emissive, alpha) = object.hover.hovered();
                    material.emissive = emissive;
                    material.base_color.set_alpha(alpha);
                }
            }
        }
    }

    hover.current = hit;
}

/// Single choke point for the cursor icon: pointer over interactive
/// objects, default everywhere else.
pub fn update_cursor_icon(
    mut commands: Commands,
    hover: Res<HoverState>,
    windows: Query<Entity, With<PrimaryWindow>>,
) {
    if !hover.is_changed() {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let icon = if hover.current.is_some() {
        SystemCursorIcon::Pointer
    } else {
        SystemCursorIcon::Default
    };
    commands.entity(window).insert(CursorIcon::System(icon));
}
