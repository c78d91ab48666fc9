use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub scene_spawned: bool,
    pub scene_instance_ready: bool,
    pub textures_loaded: bool,
    pub classified: bool,
    pub reveal_played: bool,
    /// Path of the first asset that failed to load, if any.
    pub failed: Option<String>,
    /// Completion/failure has been reported to the host page.
    pub reported: bool,
}
