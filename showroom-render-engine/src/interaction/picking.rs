use bevy::prelude::*;
use bevy::render::primitives::Aabb;
use bevy::window::PrimaryWindow;

use constants::camera_poses::{
    FOCUS_DURATION_SECS, FRAME_FOCUS_OFFSET, PUBLICATION_FOCUS_OFFSET, REDIRECT_DURATION_SECS,
    TV_REDIRECT_OFFSET,
};

use crate::engine::camera::choreographer::{
    CameraChoreographer, CameraPose, EasingKind, FlightOutcome, FlightPlan,
};
use crate::engine::camera::orbit::{ControlGates, OrbitState};
use crate::engine::scene::classifier::InteractionTag;
use crate::interaction::intent::InteractionIntent;
use crate::interaction::ray::ray_hits_obb;
use crate::overlay::stack::OverlayStack;

/// Nearest tagged mesh under a viewport position.
pub fn pick_at(
    cursor: Vec2,
    camera: &Camera,
    camera_transform: &GlobalTransform,
    targets: impl Iterator<Item = (Entity, GlobalTransform, Aabb, InteractionTag)>,
) -> Option<(Entity, InteractionTag, f32)> {
    let ray = camera.viewport_to_world(camera_transform, cursor).ok()?;
    let origin = ray.origin;
    let direction = ray.direction.as_vec3();

    let mut best: Option<(Entity, InteractionTag, f32)> = None;
    for (entity, transform, aabb, tag) in targets {
        if let Some(t) = ray_hits_obb(origin, direction, &transform, &aabb) {
            if t > 0.0 && best.is_none_or(|(_, _, best_t)| t < best_t) {
                best = Some((entity, tag, t));
            }
        }
    }
    best
}

// Left click: fly to the hit object; the intent resolves on landing
#[allow(clippy::too_many_arguments)]
pub fn handle_clicks(
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform, &Transform), With<Camera3d>>,
    targets: Query<(Entity, &GlobalTransform, &Aabb, &InteractionTag)>,
    overlays: Res<OverlayStack>,
    mut choreographer: ResMut<CameraChoreographer>,
    mut gates: ResMut<ControlGates>,
    orbit: Res<OrbitState>,
) {
    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }
    // Overlays own the pointer while anything is open.
    if !overlays.is_empty() {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_global, camera_local)) = cameras.single() else {
        return;
    };

    let hit = pick_at(
        cursor,
        camera,
        camera_global,
        targets
            .iter()
            .map(|(entity, xf, aabb, tag)| (entity, *xf, *aabb, *tag)),
    );
    let Some((entity, tag, _)) = hit else {
        return;
    };

    let Ok(object_transform) = targets.get(entity).map(|(_, xf, _, _)| *xf) else {
        return;
    };
    let object_pos = object_transform.translation();
    let from = CameraPose::new(camera_local.translation, orbit.target);

    match tag {
        InteractionTag::Frame(index) => {
            let to = CameraPose::new(object_pos + FRAME_FOCUS_OFFSET, object_pos);
            choreographer.request(
                FlightPlan::Timed {
                    from,
                    to,
                    duration: FOCUS_DURATION_SECS,
                    easing: EasingKind::CubicOut,
                },
                FlightOutcome::ResolveIntent(InteractionIntent::Frame(index)),
                &mut gates,
            );
            println!("→ Focusing frame {index}");
        }
        InteractionTag::Publication(index) => {
            let to = CameraPose::new(object_pos + PUBLICATION_FOCUS_OFFSET, object_pos);
            choreographer.request(
                FlightPlan::Timed {
                    from,
                    to,
                    duration: FOCUS_DURATION_SECS,
                    easing: EasingKind::CubicOut,
                },
                FlightOutcome::ResolveIntent(InteractionIntent::Publication(index)),
                &mut gates,
            );
            println!("→ Focusing publication {index}");
        }
        InteractionTag::Screen => {
            let to = CameraPose::new(object_pos + TV_REDIRECT_OFFSET, object_pos);
            choreographer.request(
                FlightPlan::Timed {
                    from,
                    to,
                    duration: REDIRECT_DURATION_SECS,
                    easing: EasingKind::QuartOut,
                },
                FlightOutcome::ExternalRedirect,
                &mut gates,
            );
            println!("→ Screen redirect flight");
        }
    }
}
