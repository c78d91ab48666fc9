use bevy::prelude::*;

use crate::engine::assets::catalogs::{PublicationCatalog, SponsorCatalog};

/// Everything the showroom loads up front: the room scene, per-frame
/// sponsor artwork, publication covers, and the two JSON catalogs.
#[derive(Resource, Default)]
pub struct ShowroomAssets {
    pub room_scene: Handle<Scene>,
    pub frame_textures: [Handle<Image>; 5],
    pub publication_textures: [Handle<Image>; 2],
    pub sponsor_catalog: Handle<SponsorCatalog>,
    pub publication_catalog: Handle<PublicationCatalog>,
}

pub fn create_showroom_assets() -> ShowroomAssets {
    ShowroomAssets::default()
}
