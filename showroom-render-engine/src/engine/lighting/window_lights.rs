use bevy::pbr::{DirectionalLightShadowMap, NotShadowCaster};
use bevy::prelude::*;

use constants::lighting::{
    LAMP_BULB_RADIUS, LAMP_COLOR, LAMP_INTENSITY_LUMENS, LAMP_POSITION, LAMP_RANGE,
    SHADOW_BIAS, SHADOW_MAP_SIZE, SHADOW_NORMAL_BIAS, WINDOW_LIGHTS, WINDOW_SHADOW_FACTOR,
};

/// Tags the glow plane of one window.
#[derive(Component)]
pub struct WindowGlowPlane(pub usize);

/// Tags the shadow-casting directional proxy of one window.
#[derive(Component)]
pub struct WindowShadowLight(pub usize);

#[derive(Component)]
pub struct LampLight;

// Build the whole rig once at startup
pub fn spawn_lighting_rig(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(DirectionalLightShadowMap {
        size: SHADOW_MAP_SIZE,
    });

    for (index, window) in WINDOW_LIGHTS.iter().enumerate() {
        // Soft glow plane sitting in the window opening. The plane
        // itself must not throw a shadow over the proxy light.
        let glow = materials.add(StandardMaterial {
            base_color: Color::srgba(1.0, 0.97, 0.9, 0.0),
            emissive: LinearRgba::rgb(1.0, 0.97, 0.9) * 3.0,
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        });
        commands.spawn((
            WindowGlowPlane(index),
            Name::new(format!("WindowGlow{index}")),
            Mesh3d(meshes.add(Rectangle::new(window.size.x, window.size.y))),
            MeshMaterial3d(glow),
            NotShadowCaster,
            Transform::from_translation(window.position).with_rotation(window.rotation()),
        ));

        commands.spawn((
            WindowShadowLight(index),
            Name::new(format!("WindowShadow{index}")),
            DirectionalLight {
                color: Color::srgb(1.0, 0.97, 0.9),
                illuminance: window.illuminance * WINDOW_SHADOW_FACTOR,
                shadows_enabled: true,
                shadow_depth_bias: SHADOW_BIAS,
                shadow_normal_bias: SHADOW_NORMAL_BIAS,
                ..default()
            },
            Transform::from_translation(window.position).looking_at(
                window.position + window.rotation() * Vec3::NEG_Z,
                Vec3::Y,
            ),
        ));
    }

    // Golden desk lamp with a small invisible bulb for the highlight.
    commands.spawn((
        LampLight,
        Name::new("DeskLamp"),
        PointLight {
            color: LAMP_COLOR,
            intensity: LAMP_INTENSITY_LUMENS,
            range: LAMP_RANGE,
            shadows_enabled: true,
            shadow_depth_bias: SHADOW_BIAS,
            shadow_normal_bias: SHADOW_NORMAL_BIAS,
            ..default()
        },
        Transform::from_translation(LAMP_POSITION),
    ));
    let bulb = materials.add(StandardMaterial {
        base_color: LAMP_COLOR.with_alpha(0.0),
        emissive: LAMP_COLOR.to_linear() * 2.0,
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });
    commands.spawn((
        Name::new("DeskLampBulb"),
        Mesh3d(meshes.add(Sphere::new(LAMP_BULB_RADIUS))),
        MeshMaterial3d(bulb),
        NotShadowCaster,
        Transform::from_translation(LAMP_POSITION),
    ));

    println!("✓ Lighting rig spawned: {} windows + lamp", WINDOW_LIGHTS.len());
}
