use bevy::math::Affine2;
use bevy::prelude::*;
use constants::material_settings::{
    DISPLAY_SURFACE_ALPHA, DISPLAY_SURFACE_METALLIC, DISPLAY_SURFACE_ROUGHNESS,
    HIGH_QUALITY_BANDS, HOVER_ALPHA_FACTOR, HOVER_EMISSIVE_FACTOR, LAPTOP_SCREEN_EMISSIVE_SCALE,
    LAPTOP_SCREEN_IOR, LAPTOP_SCREEN_LIGHTNESS, LAPTOP_SCREEN_SATURATION,
    LAPTOP_SCREEN_THICKNESS, LAPTOP_SCREEN_TRANSMISSION, LOW_QUALITY_BANDS, MaterialBands,
    MEDIUM_QUALITY_BANDS, PUBLICATION_EMISSIVE_INTENSITY, PUBLICATION_EMISSIVE_LIGHTNESS,
    PUBLICATION_EMISSIVE_SATURATION, TV_SCREEN_EMISSIVE_SCALE, TV_SCREEN_IOR,
    TV_SCREEN_LIGHTNESS, TV_SCREEN_SATURATION, TV_SCREEN_THICKNESS, TV_SCREEN_TRANSMISSION,
};

/// Model quality tier. Adjusts the normalization bands and, at `Low`,
/// strips secondary geometry attributes once per load.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModelQuality {
    Low,
    Medium,
    #[default]
    High,
}

impl ModelQuality {
    pub fn bands(self) -> &'static MaterialBands {
        match self {
            ModelQuality::Low => &LOW_QUALITY_BANDS,
            ModelQuality::Medium => &MEDIUM_QUALITY_BANDS,
            ModelQuality::High => &HIGH_QUALITY_BANDS,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(ModelQuality::Low),
            "medium" => Some(ModelQuality::Medium),
            "high" => Some(ModelQuality::High),
            _ => None,
        }
    }
}

/// Material parameters as authored in the asset, snapshotted before any
/// normalization so quality changes recompute from the source values
/// instead of compounding on mutated ones.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct BaseMaterialParams {
    pub roughness: f32,
    pub metallic: f32,
}

/// Normalized parameters derived from base values and the active bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveParams {
    pub roughness: f32,
    pub metallic: f32,
    pub ambient_weight: f32,
}

/// Pure normalization: asymmetric roughness bands (low values pushed to
/// the matte constant, high values to the higher one, mid band left
/// alone) and a metallic cap. Always computed from base parameters.
pub fn effective_params(base: &BaseMaterialParams, bands: &MaterialBands) -> EffectiveParams {
    let roughness = if base.roughness < bands.rough_low_threshold {
        bands.rough_low_value
    } else if base.roughness > bands.rough_high_threshold {
        bands.rough_high_value
    } else {
        base.roughness
    };

    let metallic = if base.metallic > bands.metallic_threshold {
        bands.metallic_value
    } else {
        base.metallic
    };

    EffectiveParams {
        roughness,
        metallic,
        ambient_weight: bands.ambient_weight,
    }
}

/// Writes normalized parameters into a standard material.
pub fn apply_effective_params(material: &mut StandardMaterial, params: &EffectiveParams) {
    material.perceptual_roughness = params.roughness;
    material.metallic = params.metallic;
    material.reflectance = params.ambient_weight;
}

/// Pre-hover material state, captured once at classification time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverSnapshot {
    pub emissive: LinearRgba,
    pub alpha: f32,
}

impl HoverSnapshot {
    pub fn of(material: &StandardMaterial) -> Self {
        Self {
            emissive: material.emissive,
            alpha: material.base_color.alpha(),
        }
    }

    /// Hover transform derived from the snapshot, never from the live
    /// material, so repeated hover events cannot compound.
    pub fn hovered(&self) -> (LinearRgba, f32) {
        (
            self.emissive * HOVER_EMISSIVE_FACTOR,
            (self.alpha * HOVER_ALPHA_FACTOR).min(1.0),
        )
    }
}

/// UV rotation about the texture centre.
fn centered_uv_rotation(angle: f32) -> Affine2 {
    Affine2::from_translation(Vec2::splat(0.5))
        * Affine2::from_angle(angle)
        * Affine2::from_translation(Vec2::splat(-0.5))
}

/// Fresh frame surface: white base, sponsor artwork rotated 90°.
pub fn frame_material(texture: Handle<Image>) -> StandardMaterial {
    StandardMaterial {
        base_color: Color::WHITE.with_alpha(DISPLAY_SURFACE_ALPHA),
        base_color_texture: Some(texture),
        uv_transform: centered_uv_rotation(std::f32::consts::FRAC_PI_2),
        alpha_mode: AlphaMode::Blend,
        metallic: DISPLAY_SURFACE_METALLIC,
        perceptual_roughness: DISPLAY_SURFACE_ROUGHNESS,
        emissive: LinearRgba::BLACK,
        ..default()
    }
}

/// Fresh publication surface: cover rotated −90° plus an index-keyed
/// emissive tint.
pub fn publication_material(texture: Handle<Image>, index: usize) -> StandardMaterial {
    let hue = (4 + index) as f32 / 7.0 * 360.0;
    let tint = Color::hsl(
        hue,
        PUBLICATION_EMISSIVE_SATURATION,
        PUBLICATION_EMISSIVE_LIGHTNESS,
    )
    .to_linear();

    StandardMaterial {
        base_color: Color::WHITE.with_alpha(DISPLAY_SURFACE_ALPHA),
        base_color_texture: Some(texture),
        uv_transform: centered_uv_rotation(-std::f32::consts::FRAC_PI_2),
        alpha_mode: AlphaMode::Blend,
        metallic: DISPLAY_SURFACE_METALLIC,
        perceptual_roughness: DISPLAY_SURFACE_ROUGHNESS,
        emissive: tint * PUBLICATION_EMISSIVE_INTENSITY,
        ..default()
    }
}

/// Glassy TV screen with a fresh random hue each load.
pub fn tv_screen_material(hue01: f32) -> StandardMaterial {
    let color = Color::hsl(hue01 * 360.0, TV_SCREEN_SATURATION, TV_SCREEN_LIGHTNESS);
    StandardMaterial {
        base_color: color,
        emissive: color.to_linear() * TV_SCREEN_EMISSIVE_SCALE,
        metallic: 0.15,
        perceptual_roughness: 0.75,
        clearcoat: 0.2,
        clearcoat_perceptual_roughness: 0.1,
        ior: TV_SCREEN_IOR,
        specular_transmission: TV_SCREEN_TRANSMISSION,
        thickness: TV_SCREEN_THICKNESS,
        ..default()
    }
}

/// Laptop screen variant, independently rolled from the TV.
pub fn laptop_screen_material(hue01: f32) -> StandardMaterial {
    let color = Color::hsl(
        hue01 * 360.0,
        LAPTOP_SCREEN_SATURATION,
        LAPTOP_SCREEN_LIGHTNESS,
    );
    StandardMaterial {
        base_color: color,
        emissive: color.to_linear() * LAPTOP_SCREEN_EMISSIVE_SCALE,
        metallic: 0.08,
        perceptual_roughness: 0.65,
        clearcoat: 0.3,
        clearcoat_perceptual_roughness: 0.05,
        ior: LAPTOP_SCREEN_IOR,
        specular_transmission: LAPTOP_SCREEN_TRANSMISSION,
        thickness: LAPTOP_SCREEN_THICKNESS,
        ..default()
    }
}

// Quality hotkeys, native builds only
pub fn quality_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut quality: ResMut<ModelQuality>,
) {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if keyboard.just_pressed(KeyCode::Digit1) && *quality != ModelQuality::Low {
            *quality = ModelQuality::Low;
            info!("Model quality: low");
        }
        if keyboard.just_pressed(KeyCode::Digit2) && *quality != ModelQuality::Medium {
            *quality = ModelQuality::Medium;
            info!("Model quality: medium");
        }
        if keyboard.just_pressed(KeyCode::Digit3) && *quality != ModelQuality::High {
            *quality = ModelQuality::High;
            info!("Model quality: high");
        }
    }
    #[cfg(target_arch = "wasm32")]
    {
        // Quality on web comes from host RPC notifications.
        let _ = (&keyboard, &mut quality);
    }
}

/// Recomputes every normalized material from its base snapshot when the
/// quality tier changes. Display surfaces (frames, publications,
/// screens) carry no snapshot and stay untouched.
pub fn reapply_quality_bands(
    quality: Res<ModelQuality>,
    snapshots: Query<(&BaseMaterialParams, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !quality.is_changed() || quality.is_added() {
        return;
    }

    let bands = quality.bands();
    let mut updated = 0usize;
    for (base, handle) in &snapshots {
        let Some(material) = materials.get_mut(&handle.0) else {
            continue;
        };
        apply_effective_params(material, &effective_params(base, bands));
        updated += 1;
    }
    info!("Re-normalized {updated} materials for {:?} quality", *quality);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(roughness: f32, metallic: f32) -> BaseMaterialParams {
        BaseMaterialParams { roughness, metallic }
    }

    #[test]
    fn roughness_bands_are_asymmetric() {
        let bands = &HIGH_QUALITY_BANDS;
        assert_eq!(effective_params(&base(0.1, 0.0), bands).roughness, 0.82);
        assert_eq!(effective_params(&base(0.5, 0.0), bands).roughness, 0.5);
        assert_eq!(effective_params(&base(0.7, 0.0), bands).roughness, 0.92);
    }

    #[test]
    fn normalization_never_lowers_mid_range_roughness() {
        let bands = &HIGH_QUALITY_BANDS;
        for value in [0.4, 0.45, 0.55, 0.6] {
            assert!(effective_params(&base(value, 0.0), bands).roughness >= value);
        }
    }

    #[test]
    fn normalization_is_idempotent_from_base() {
        let bands = &HIGH_QUALITY_BANDS;
        let b = base(0.3, 0.5);
        let once = effective_params(&b, bands);
        // Re-running the pass recomputes from the same base snapshot.
        let twice = effective_params(&b, bands);
        assert_eq!(once, twice);
    }

    #[test]
    fn metallic_is_capped() {
        let bands = &HIGH_QUALITY_BANDS;
        assert_eq!(effective_params(&base(0.5, 0.9), bands).metallic, 0.12);
        assert_eq!(effective_params(&base(0.5, 0.2), bands).metallic, 0.2);
    }

    #[test]
    fn quality_tiers_change_ambient_weight() {
        let b = base(0.5, 0.1);
        assert_eq!(
            effective_params(&b, ModelQuality::Low.bands()).ambient_weight,
            0.0
        );
        assert_eq!(
            effective_params(&b, ModelQuality::Medium.bands()).ambient_weight,
            0.05
        );
        assert_eq!(
            effective_params(&b, ModelQuality::High.bands()).ambient_weight,
            0.12
        );
    }

    #[test]
    fn hover_is_computed_from_snapshot() {
        let snapshot = HoverSnapshot {
            emissive: LinearRgba::rgb(0.1, 0.1, 0.1),
            alpha: 0.95,
        };
        let (first_emissive, first_alpha) = snapshot.hovered();
        // A second hover without an intervening unhover must not compound.
        let (second_emissive, second_alpha) = snapshot.hovered();
        assert_eq!(first_emissive, second_emissive);
        assert_eq!(first_alpha, second_alpha);
        assert!(first_alpha <= 1.0);
        assert_eq!(first_emissive.red, 0.2);
    }

    #[test]
    fn hover_alpha_is_capped_at_one() {
        let snapshot = HoverSnapshot {
            emissive: LinearRgba::BLACK,
            alpha: 0.99,
        };
        assert_eq!(snapshot.hovered().1, 1.0);
    }
}
