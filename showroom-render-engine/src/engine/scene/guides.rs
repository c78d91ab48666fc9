use bevy::prelude::*;
use constants::camera_poses::GUIDE_LIFETIME_SECS;
use constants::viewer::ACCENT_COLOR;

use crate::engine::core::view_state::{CurrentView, ViewKind};
use crate::engine::scene::registry::SceneRegistry;

/// Lifetime of the publishing hint markers. Plain state so expiry can
/// be exercised without a running app.
#[derive(Resource, Default, Debug)]
pub struct GuideState {
    remaining: Option<f32>,
}

impl GuideState {
    pub fn activate(&mut self) {
        self.remaining = Some(GUIDE_LIFETIME_SECS);
    }

    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    pub fn is_active(&self) -> bool {
        self.remaining.is_some()
    }

    /// Advances the clock; returns true on the tick the guides expire.
    pub fn tick(&mut self, delta: f32) -> bool {
        let Some(remaining) = self.remaining.as_mut() else {
            return false;
        };
        *remaining -= delta;
        if *remaining <= 0.0 {
            self.remaining = None;
            true
        } else {
            false
        }
    }
}

/// Root of one guide marker, hovering above a publication display.
#[derive(Component)]
pub struct PublishingGuide {
    pub index: usize,
    pub base: Vec3,
}

#[derive(Component)]
pub struct GuideArrow;

#[derive(Component)]
pub struct GuideRing;

// Guides appear when the publishing view is entered and vanish on exit
pub fn sync_guides_with_view(
    mut commands: Commands,
    view: Res<CurrentView>,
    mut state: ResMut<GuideState>,
    registry: Res<SceneRegistry>,
    transforms: Query<&GlobalTransform>,
    existing: Query<Entity, With<PublishingGuide>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !view.is_changed() {
        return;
    }

    for entity in &existing {
        commands.entity(entity).despawn();
    }
    state.cancel();

    if !view.is(ViewKind::Publishing) {
        return;
    }

    let accent = materials.add(StandardMaterial {
        base_color: ACCENT_COLOR,
        emissive: ACCENT_COLOR.to_linear() * 1.5,
        unlit: false,
        perceptual_roughness: 0.4,
        ..default()
    });
    let cone = meshes.add(Cone {
        radius: 0.06,
        height: 0.12,
    });
    let shaft = meshes.add(Cylinder::new(0.018, 0.14));
    let ring = meshes.add(Torus {
        minor_radius: 0.015,
        major_radius: 0.10,
    });

    for (index, object) in registry.publications() {
        let Ok(transform) = transforms.get(object.root) else {
            continue;
        };
        let base = transform.translation() + Vec3::Y * 0.55;

        commands
            .spawn((
                PublishingGuide { index, base },
                Name::new(format!("PublishingGuide{index}")),
                Transform::from_translation(base),
                Visibility::default(),
            ))
            .with_children(|parent| {
                // Downward arrow: shaft above an inverted cone tip.
                parent.spawn((
                    GuideArrow,
                    Mesh3d(cone.clone()),
                    MeshMaterial3d(accent.clone()),
                    Transform::from_xyz(0.0, 0.0, 0.0)
                        .with_rotation(Quat::from_rotation_x(std::f32::consts::PI)),
                ));
                parent.spawn((
                    GuideArrow,
                    Mesh3d(shaft.clone()),
                    MeshMaterial3d(accent.clone()),
                    Transform::from_xyz(0.0, 0.13, 0.0),
                ));
                parent.spawn((
                    GuideRing,
                    Mesh3d(ring.clone()),
                    MeshMaterial3d(accent.clone()),
                    Transform::from_xyz(0.0, -0.25, 0.0)
                        .with_rotation(Quat::from_rotation_x(std::f32::consts::FRAC_PI_2)),
                ));
            });
    }

    state.activate();
    println!("✓ Publishing guides spawned");
}

// Bob, spin and pulse
pub fn animate_guides(
    time: Res<Time>,
    mut guides: Query<(&PublishingGuide, &mut Transform), Without<GuideRing>>,
    mut arrows: Query<
        &mut Transform,
        (With<GuideArrow>, Without<PublishingGuide>, Without<GuideRing>),
    >,
    mut rings: Query<&mut Transform, (With<GuideRing>, Without<PublishingGuide>)>,
) {
    let t = time.elapsed_secs();

    for (guide, mut transform) in &mut guides {
        let bob = (t * 2.0 + guide.index as f32).sin() * 0.02;
        transform.translation = guide.base + Vec3::Y * bob;
    }
    for mut transform in &mut arrows {
        transform.rotate_y(time.delta_secs() * 0.2);
    }
    for mut transform in &mut rings {
        let pulse = 1.0 + (t * 3.0).sin() * 0.1;
        transform.scale = Vec3::splat(pulse);
    }
}

pub fn expire_guides(
    mut commands: Commands,
    time: Res<Time>,
    mut state: ResMut<GuideState>,
    guides: Query<Entity, With<PublishingGuide>>,
) {
    if state.tick(time.delta_secs()) {
        for entity in &guides {
            commands.entity(entity).despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guides_expire_exactly_once() {
        let mut state = GuideState::default();
        state.activate();
        assert!(state.is_active());

        assert!(!state.tick(GUIDE_LIFETIME_SECS - 0.1));
        assert!(state.tick(0.2));
        assert!(!state.is_active());
        // Further ticks after expiry are inert.
        assert!(!state.tick(1.0));
    }

    #[test]
    fn cancel_suppresses_expiry() {
        let mut state = GuideState::default();
        state.activate();
        state.cancel();
        assert!(!state.tick(GUIDE_LIFETIME_SECS + 1.0));
    }
}
