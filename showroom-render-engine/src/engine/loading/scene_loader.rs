use bevy::asset::LoadState;
use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;
use constants::naming::{
    FRAME_TEXTURE_PATHS, PUBLICATION_CATALOG_PATH, PUBLICATION_TEXTURE_PATHS, ROOM_SCENE_PATH,
    SPONSOR_CATALOG_PATH,
};

use crate::engine::assets::showroom_assets::ShowroomAssets;
use crate::engine::loading::progress::LoadingProgress;
use crate::rpc::host_bridge::HostBridge;

/// Marks the entity holding the spawned room scene.
#[derive(Component)]
pub struct RoomSceneRoot;

// Kick off every up-front load and spawn the scene root
pub fn start_loading(
    mut commands: Commands,
    mut assets: ResMut<ShowroomAssets>,
    mut progress: ResMut<LoadingProgress>,
    asset_server: Res<AssetServer>,
) {
    println!("Loading showroom scene: {}", ROOM_SCENE_PATH);

    assets.room_scene = asset_server.load(GltfAssetLabel::Scene(0).from_asset(ROOM_SCENE_PATH));
    for (slot, path) in assets.frame_textures.iter_mut().zip(FRAME_TEXTURE_PATHS) {
        *slot = asset_server.load(path);
    }
    for (slot, path) in assets
        .publication_textures
        .iter_mut()
        .zip(PUBLICATION_TEXTURE_PATHS)
    {
        *slot = asset_server.load(path);
    }
    assets.sponsor_catalog = asset_server.load(SPONSOR_CATALOG_PATH);
    assets.publication_catalog = asset_server.load(PUBLICATION_CATALOG_PATH);

    commands.spawn((
        RoomSceneRoot,
        Name::new("RoomScene"),
        SceneRoot(assets.room_scene.clone()),
        Transform::default(),
        Visibility::default(),
    ));
    progress.scene_spawned = true;
}

/// Stage snapshot sent alongside each `loading_progress` notification.
pub fn loading_progress_params(progress: &LoadingProgress) -> serde_json::Value {
    serde_json::json!({
        "sceneSpawned": progress.scene_spawned,
        "sceneReady": progress.scene_instance_ready,
        "texturesLoaded": progress.textures_loaded,
    })
}

// Poll the scene until its instance has spawned, or record the failure
pub fn check_scene_loading(
    mut progress: ResMut<LoadingProgress>,
    mut bridge: ResMut<HostBridge>,
    assets: Res<ShowroomAssets>,
    asset_server: Res<AssetServer>,
    roots: Query<Option<&Children>, With<RoomSceneRoot>>,
) {
    if progress.scene_instance_ready || progress.failed.is_some() {
        return;
    }

    match asset_server.load_state(&assets.room_scene) {
        LoadState::Failed(_) => {
            warn!("Room scene failed to load: {}", ROOM_SCENE_PATH);
            progress.failed = Some(ROOM_SCENE_PATH.to_string());
        }
        LoadState::Loaded => {
            // The asset is in; wait for the scene spawner to attach children.
            let Ok(children) = roots.single() else {
                return;
            };
            if children.is_some_and(|c| !c.is_empty()) {
                println!("✓ Room scene instance ready");
                progress.scene_instance_ready = true;
                bridge.send_notification("loading_progress", loading_progress_params(&progress));
            }
        }
        _ => {}
    }
}

// Poll the artwork textures; any single failure fails the load
pub fn check_texture_loading(
    mut progress: ResMut<LoadingProgress>,
    mut bridge: ResMut<HostBridge>,
    assets: Res<ShowroomAssets>,
    asset_server: Res<AssetServer>,
) {
    if progress.textures_loaded || progress.failed.is_some() {
        return;
    }

    let frame_handles = assets.frame_textures.iter().zip(FRAME_TEXTURE_PATHS);
    let publication_handles = assets
        .publication_textures
        .iter()
        .zip(PUBLICATION_TEXTURE_PATHS);

    let mut all_loaded = true;
    for (handle, path) in frame_handles.chain(publication_handles) {
        match asset_server.load_state(handle) {
            LoadState::Failed(_) => {
                warn!("Texture failed to load: {path}");
                progress.failed = Some(path.to_string());
                return;
            }
            LoadState::Loaded => {}
            _ => all_loaded = false,
        }
    }

    if all_loaded {
        println!("✓ Artwork textures loaded");
        progress.textures_loaded = true;
        bridge.send_notification("loading_progress", loading_progress_params(&progress));
    }
}

// Report completion or failure to the host page exactly once
pub fn report_load_result(mut progress: ResMut<LoadingProgress>, mut bridge: ResMut<HostBridge>) {
    if progress.reported {
        return;
    }

    if let Some(path) = progress.failed.as_ref() {
        bridge.send_notification("load_failed", serde_json::json!({ "asset": path }));
        progress.reported = true;
    } else if progress.scene_instance_ready && progress.textures_loaded {
        bridge.send_notification("model_loaded", serde_json::json!({}));
        progress.reported = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_params_track_each_stage() {
        let mut progress = LoadingProgress::default();
        progress.scene_spawned = true;
        let early = loading_progress_params(&progress);
        assert_eq!(early["sceneSpawned"], true);
        assert_eq!(early["sceneReady"], false);
        assert_eq!(early["texturesLoaded"], false);

        progress.scene_instance_ready = true;
        progress.textures_loaded = true;
        let done = loading_progress_params(&progress);
        assert_eq!(done["sceneReady"], true);
        assert_eq!(done["texturesLoaded"], true);
    }
}
