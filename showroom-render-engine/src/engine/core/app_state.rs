use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    SceneReady,
    Running,
}

// Transition to SceneReady once the room scene and textures are in
pub fn transition_to_scene_ready(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.scene_instance_ready && loading_progress.textures_loaded {
        println!("→ Transitioning to SceneReady state");
        next_state.set(AppState::SceneReady);
    }
}

// Final transition to running state, after the classification pass
pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.classified {
        println!("→ Scene classified, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
