use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::math::EulerRot;
use bevy::prelude::*;

use crate::engine::camera::choreographer::CameraChoreographer;

/// Per-axis enable flags for the free-look controller. Scripted flights
/// close all three gates for their duration and restore the previous
/// values when they finish or are cancelled.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlGates {
    pub rotate_enabled: bool,
    pub pan_enabled: bool,
    pub zoom_enabled: bool,
}

impl Default for ControlGates {
    fn default() -> Self {
        Self {
            rotate_enabled: true,
            pan_enabled: true,
            zoom_enabled: true,
        }
    }
}

impl ControlGates {
    pub fn closed() -> Self {
        Self {
            rotate_enabled: false,
            pan_enabled: false,
            zoom_enabled: false,
        }
    }
}

/// Spherical free-look state around a focus target.
#[derive(Resource, Debug, Clone, Copy)]
pub struct OrbitState {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Default for OrbitState {
    fn default() -> Self {
        Self {
            target: Vec3::new(0.0, 1.0, 0.0),
            yaw: 0.0,
            pitch: -0.3,
            distance: 5.0,
        }
    }
}

impl OrbitState {
    /// Rebuilds the spherical parameters from an eye/target pair so a
    /// finished flight hands over without a visible jump.
    pub fn sync_from(&mut self, position: Vec3, target: Vec3) {
        self.target = target;
        let offset = position - target;
        self.distance = offset.length().max(0.1);
        self.yaw = offset.x.atan2(offset.z);
        self.pitch = (offset.y / self.distance).clamp(-1.0, 1.0).asin();
    }

    /// Camera position implied by the current spherical parameters.
    pub fn eye(&self) -> Vec3 {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, -self.pitch, 0.0);
        self.target + rotation * (Vec3::Z * self.distance)
    }
}

// Free-look control, suspended entirely while a flight is active
pub fn orbit_controller(
    choreographer: Res<CameraChoreographer>,
    gates: Res<ControlGates>,
    mut orbit: ResMut<OrbitState>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
    mut cameras: Query<&mut Transform, With<Camera3d>>,
) {
    if choreographer.is_active() {
        mouse_motion.clear();
        scroll_events.clear();
        return;
    }
    let Ok(mut camera_transform) = cameras.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    if gates.rotate_enabled && mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO
    {
        orbit.yaw -= mouse_delta.x * 0.005;
        orbit.pitch = (orbit.pitch + mouse_delta.y * 0.004).clamp(-0.1, 1.2);
    }

    if gates.pan_enabled && mouse_button.pressed(MouseButton::Right) && mouse_delta != Vec2::ZERO {
        let rotation = Quat::from_euler(EulerRot::YXZ, orbit.yaw, -orbit.pitch, 0.0);
        let right = rotation * Vec3::X;
        let up = Vec3::Y;
        let pan_speed = orbit.distance * 0.0015;
        orbit.target += (-right * mouse_delta.x + up * mouse_delta.y) * pan_speed;
    }

    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y * 1.0,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }
    if gates.zoom_enabled && scroll_accum.abs() > f32::EPSILON {
        let zoom_speed = (orbit.distance * 0.15).clamp(0.05, 2.0);
        orbit.distance = (orbit.distance - scroll_accum * zoom_speed).clamp(0.8, 12.0);
    }

    // Smoothed follow toward the orbit pose.
    let lerp_speed = (12.0 * time.delta_secs()).min(1.0);
    let target_pos = orbit.eye();
    camera_transform.translation = camera_transform.translation.lerp(target_pos, lerp_speed);
    let look = Transform::from_translation(camera_transform.translation)
        .looking_at(orbit.target, Vec3::Y);
    camera_transform.rotation = camera_transform.rotation.slerp(look.rotation, lerp_speed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_round_trips_through_eye() {
        let mut orbit = OrbitState::default();
        let position = Vec3::new(2.2, 1.8, 4.8);
        let target = Vec3::new(0.0, 1.0, 0.0);
        orbit.sync_from(position, target);
        assert!(orbit.eye().distance(position) < 1e-3);
        assert_eq!(orbit.target, target);
    }

    #[test]
    fn gates_default_open_and_close_together() {
        let open = ControlGates::default();
        assert!(open.rotate_enabled && open.pan_enabled && open.zoom_enabled);
        let closed = ControlGates::closed();
        assert!(!closed.rotate_enabled && !closed.pan_enabled && !closed.zoom_enabled);
    }
}
