use bevy::color::Color;
use bevy::math::{Quat, Vec2, Vec3};

/// One window light: an invisible emissive glow plane plus a
/// shadow-casting directional proxy (area lights cannot cast shadows).
#[derive(Debug, Clone, Copy)]
pub struct WindowLightConfig {
    pub position: Vec3,
    pub yaw: f32,
    pub size: Vec2,
    /// Proxy illuminance in lux.
    pub illuminance: f32,
}

impl WindowLightConfig {
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
    }
}

/// Right and left windows, positioned behind the diffuser geometry and
/// facing into the room.
pub const WINDOW_LIGHTS: [WindowLightConfig; 2] = [
    WindowLightConfig {
        position: Vec3::new(1.6, 1.2, -2.2),
        yaw: std::f32::consts::PI,
        size: Vec2::new(1.2, 1.6),
        illuminance: 4_800.0,
    },
    WindowLightConfig {
        position: Vec3::new(-0.5, 1.3, -2.3),
        yaw: std::f32::consts::PI,
        size: Vec2::new(1.2, 1.6),
        illuminance: 4_800.0,
    },
];

/// Shadow proxies run dimmer than their window so the room keeps contrast.
pub const WINDOW_SHADOW_FACTOR: f32 = 0.6;
pub const SHADOW_MAP_SIZE: usize = 2048;
pub const SHADOW_BIAS: f32 = -0.003;
pub const SHADOW_NORMAL_BIAS: f32 = 0.1;

/// Golden desk lamp: point light with tight falloff plus an invisible bulb.
pub const LAMP_POSITION: Vec3 = Vec3::new(0.4, 0.8, 2.1);
pub const LAMP_COLOR: Color = Color::srgb(1.0, 0.843, 0.0);
pub const LAMP_INTENSITY_LUMENS: f32 = 60_000.0;
pub const LAMP_RANGE: f32 = 2.5;
pub const LAMP_BULB_RADIUS: f32 = 0.1;

/// Live-tuning bounds for the debug panel.
pub const DEBUG_SCALE_MIN: f32 = 0.0;
pub const DEBUG_SCALE_MAX: f32 = 4.0;
pub const DEBUG_SCALE_STEP: f32 = 0.1;
