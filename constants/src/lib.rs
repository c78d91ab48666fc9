//! Shared tuning constants for the showroom render engine.
//!
//! Keeps the scene naming contract, camera pose tables, material
//! normalization bands, and lighting rig parameters in one crate so the
//! engine and its tests read the same numbers.

/// Camera pose tables, flight durations, and focus offsets.
pub mod camera_poses;

/// Lighting rig placement and intensity parameters.
pub mod lighting;

/// PBR normalization bands per model-quality tier.
pub mod material_settings;

/// Scene object naming contract: denylist, allowlist, screen candidates.
pub mod naming;

/// Publication viewer scales and overlay timing.
pub mod viewer;
