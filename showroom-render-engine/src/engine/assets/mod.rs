//! Handles for the showroom scene, artwork textures, and JSON catalogs.

/// Sponsor and publication catalog asset types.
pub mod catalogs;

/// Central handle store for everything the showroom loads up front.
pub mod showroom_assets;
