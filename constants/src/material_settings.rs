/// Normalization bands applied to scene materials after load.
///
/// Roughness is pushed up asymmetrically: values under the low
/// threshold snap to `rough_low_value`, values over the high threshold
/// snap to `rough_high_value`, the mid band is left alone. Metallic is
/// capped. `ambient_weight` is the per-material specular ambient
/// weighting (the environment-map intensity of the source asset).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialBands {
    pub rough_low_threshold: f32,
    pub rough_low_value: f32,
    pub rough_high_threshold: f32,
    pub rough_high_value: f32,
    pub metallic_threshold: f32,
    pub metallic_value: f32,
    pub ambient_weight: f32,
}

pub const HIGH_QUALITY_BANDS: MaterialBands = MaterialBands {
    rough_low_threshold: 0.4,
    rough_low_value: 0.82,
    rough_high_threshold: 0.6,
    rough_high_value: 0.92,
    metallic_threshold: 0.3,
    metallic_value: 0.12,
    ambient_weight: 0.12,
};

pub const MEDIUM_QUALITY_BANDS: MaterialBands = MaterialBands {
    rough_low_threshold: 0.7,
    rough_low_value: 0.7,
    rough_high_threshold: 1.0,
    rough_high_value: 1.0,
    metallic_threshold: 0.2,
    metallic_value: 0.2,
    ambient_weight: 0.05,
};

pub const LOW_QUALITY_BANDS: MaterialBands = MaterialBands {
    rough_low_threshold: 0.8,
    rough_low_value: 0.8,
    rough_high_threshold: 1.0,
    rough_high_value: 1.0,
    metallic_threshold: 0.1,
    metallic_value: 0.1,
    ambient_weight: 0.0,
};

/// Frame and publication surface material.
pub const DISPLAY_SURFACE_ALPHA: f32 = 0.95;
pub const DISPLAY_SURFACE_METALLIC: f32 = 0.01;
pub const DISPLAY_SURFACE_ROUGHNESS: f32 = 0.98;

/// Publication emissive tint: hue slot `(4 + index) / 7` of a full turn.
pub const PUBLICATION_EMISSIVE_SATURATION: f32 = 0.6;
pub const PUBLICATION_EMISSIVE_LIGHTNESS: f32 = 0.15;
pub const PUBLICATION_EMISSIVE_INTENSITY: f32 = 0.18;

/// Hover transform applied from the snapshot, never from live values.
pub const HOVER_EMISSIVE_FACTOR: f32 = 2.0;
pub const HOVER_ALPHA_FACTOR: f32 = 1.1;

/// Randomized TV screen glass.
pub const TV_SCREEN_SATURATION: f32 = 0.7;
pub const TV_SCREEN_LIGHTNESS: f32 = 0.5;
pub const TV_SCREEN_EMISSIVE_SCALE: f32 = 0.4;
pub const TV_SCREEN_IOR: f32 = 1.6;
pub const TV_SCREEN_TRANSMISSION: f32 = 0.1;
pub const TV_SCREEN_THICKNESS: f32 = 0.5;

/// Randomized laptop screen, independent roll from the TV.
pub const LAPTOP_SCREEN_SATURATION: f32 = 0.6;
pub const LAPTOP_SCREEN_LIGHTNESS: f32 = 0.6;
pub const LAPTOP_SCREEN_EMISSIVE_SCALE: f32 = 0.5;
pub const LAPTOP_SCREEN_IOR: f32 = 1.7;
pub const LAPTOP_SCREEN_TRANSMISSION: f32 = 0.15;
pub const LAPTOP_SCREEN_THICKNESS: f32 = 0.3;
