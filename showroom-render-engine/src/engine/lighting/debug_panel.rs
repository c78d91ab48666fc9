use bevy::prelude::*;

use constants::lighting::{
    DEBUG_SCALE_MAX, DEBUG_SCALE_MIN, DEBUG_SCALE_STEP, LAMP_INTENSITY_LUMENS, WINDOW_LIGHTS,
    WINDOW_SHADOW_FACTOR,
};

use crate::engine::lighting::window_lights::{LampLight, WindowShadowLight};

/// Live lighting multipliers, tuned from the keyboard on native builds.
#[derive(Resource)]
pub struct LightingDebugState {
    pub panel_open: bool,
    pub lamp_scale: f32,
    pub window_scale: f32,
}

impl Default for LightingDebugState {
    fn default() -> Self {
        Self {
            panel_open: false,
            lamp_scale: 1.0,
            window_scale: 1.0,
        }
    }
}

#[derive(Component)]
pub struct LightingPanelRoot;

#[derive(Component)]
pub struct LightingPanelReadout;

pub fn toggle_lighting_panel(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<LightingDebugState>,
) {
    if keyboard.just_pressed(KeyCode::KeyL) {
        state.panel_open = !state.panel_open;
    }
}

// Arrow keys tune the lamp, page keys tune the windows
pub fn adjust_lighting_scales(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<LightingDebugState>,
) {
    if !state.panel_open {
        return;
    }

    let mut lamp = state.lamp_scale;
    let mut window = state.window_scale;
    if keyboard.just_pressed(KeyCode::ArrowUp) {
        lamp += DEBUG_SCALE_STEP;
    }
    if keyboard.just_pressed(KeyCode::ArrowDown) {
        lamp -= DEBUG_SCALE_STEP;
    }
    if keyboard.just_pressed(KeyCode::PageUp) {
        window += DEBUG_SCALE_STEP;
    }
    if keyboard.just_pressed(KeyCode::PageDown) {
        window -= DEBUG_SCALE_STEP;
    }

    lamp = lamp.clamp(DEBUG_SCALE_MIN, DEBUG_SCALE_MAX);
    window = window.clamp(DEBUG_SCALE_MIN, DEBUG_SCALE_MAX);
    if lamp != state.lamp_scale || window != state.window_scale {
        state.lamp_scale = lamp;
        state.window_scale = window;
    }
}

pub fn apply_lighting_scales(
    state: Res<LightingDebugState>,
    mut lamps: Query<&mut PointLight, With<LampLight>>,
    mut windows: Query<(&WindowShadowLight, &mut DirectionalLight)>,
) {
    if !state.is_changed() {
        return;
    }
    for mut lamp in &mut lamps {
        lamp.intensity = LAMP_INTENSITY_LUMENS * state.lamp_scale;
    }
    for (window, mut light) in &mut windows {
        let base = WINDOW_LIGHTS[window.0].illuminance * WINDOW_SHADOW_FACTOR;
        light.illuminance = base * state.window_scale;
    }
}

pub fn update_lighting_panel(
    mut commands: Commands,
    state: Res<LightingDebugState>,
    roots: Query<Entity, With<LightingPanelRoot>>,
    mut readouts: Query<&mut Text, With<LightingPanelReadout>>,
) {
    if !state.is_changed() {
        return;
    }

    if !state.panel_open {
        for entity in &roots {
            commands.entity(entity).despawn();
        }
        return;
    }

    let readout = format!(
        "Lighting  lamp ×{:.1} (↑/↓)  windows ×{:.1} (PgUp/PgDn)",
        state.lamp_scale, state.window_scale
    );
    if let Ok(mut text) = readouts.single_mut() {
        text.0 = readout;
        return;
    }

    commands
        .spawn((
            LightingPanelRoot,
            Name::new("LightingPanel"),
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.75)),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(10.0),
                bottom: Val::Px(10.0),
                padding: UiRect::all(Val::Px(8.0)),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                LightingPanelReadout,
                Text::new(readout),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}
