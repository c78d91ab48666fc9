use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use constants::camera_poses::DESKTOP_HOME;

// Crate engine modules
use crate::engine::assets::catalogs::{PublicationCatalog, SponsorCatalog};
use crate::engine::assets::showroom_assets::create_showroom_assets;
use crate::engine::camera::choreographer::{
    CameraChoreographer, deliver_pending_intents, drive_camera_flights, trigger_initial_reveal,
};
use crate::engine::camera::orbit::{ControlGates, OrbitState, orbit_controller};
use crate::engine::core::app_state::{AppState, transition_to_running, transition_to_scene_ready};
use crate::engine::core::view_state::{CurrentView, DeviceProfile, update_device_profile};
use crate::engine::core::window_config::create_window_config;
use crate::engine::lighting::debug_panel::LightingDebugState;
use crate::engine::lighting::window_lights::spawn_lighting_rig;
use crate::engine::loading::loader_ui::{
    despawn_loading_overlay, handle_loader_fallback, spawn_loading_overlay, update_loading_overlay,
};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::scene_loader::{
    check_scene_loading, check_texture_loading, report_load_result, start_loading,
};
use crate::engine::scene::classifier::classify_scene;
use crate::engine::scene::guides::{GuideState, animate_guides, expire_guides, sync_guides_with_view};
use crate::engine::scene::labels::{position_frame_labels, spawn_frame_labels};
use crate::engine::scene::materials::{ModelQuality, quality_hotkeys, reapply_quality_bands};
use crate::engine::scene::registry::SceneRegistry;
use crate::engine::systems::fps_tracking::fps_notification_system;

// Interaction and overlay modules
use crate::interaction::hover::{HoverState, update_cursor_icon, update_hover};
use crate::interaction::intent::InteractionIntent;
use crate::interaction::picking::handle_clicks;
use crate::overlay::flipbook::{
    flipbook_keyboard, handle_flipbook_buttons, sync_flipbook, watch_page_loading,
};
use crate::overlay::modal::{handle_modal_buttons, open_overlays_on_intent, sync_frame_modal};
use crate::overlay::nav::{NavigateTo, apply_navigation, handle_nav_buttons, spawn_nav_buttons};
use crate::overlay::stack::{OverlayStack, close_on_escape};
use crate::rpc::host_bridge::HostBridgePlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::lighting::debug_panel::{
    adjust_lighting_scales, apply_lighting_scales, toggle_lighting_panel, update_lighting_panel,
};
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::{fps_text_update_system, spawn_fps_text};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers the catalogs as loadable asset types from JSON files.
        .add_plugins(JsonAssetPlugin::<SponsorCatalog>::new(&["sponsors.json"]))
        .add_plugins(JsonAssetPlugin::<PublicationCatalog>::new(&[
            "publications.json",
        ]))
        .add_plugins(HostBridgePlugin);

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<CurrentView>()
        .init_resource::<DeviceProfile>()
        .init_resource::<ModelQuality>()
        .init_resource::<SceneRegistry>()
        .init_resource::<GuideState>()
        .init_resource::<OverlayStack>()
        .init_resource::<HoverState>()
        .init_resource::<CameraChoreographer>()
        .init_resource::<ControlGates>()
        .init_resource::<LightingDebugState>()
        .add_event::<InteractionIntent>()
        .add_event::<NavigateTo>()
        .insert_resource(create_showroom_assets());

    let mut orbit = OrbitState::default();
    orbit.sync_from(DESKTOP_HOME.position, DESKTOP_HOME.target);
    app.insert_resource(orbit);

    // State-based system scheduling
    app.add_systems(Startup, (setup, spawn_lighting_rig, start_loading).chain())
        .add_systems(
            Update,
            (
                // Loading phase systems
                check_scene_loading,
                check_texture_loading,
                report_load_result,
                transition_to_scene_ready,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            Update,
            (update_loading_overlay, handle_loader_fallback)
                .run_if(not(in_state(AppState::Running))),
        )
        .add_systems(
            Update,
            (classify_scene, transition_to_running)
                .chain()
                .run_if(in_state(AppState::SceneReady)),
        )
        .add_systems(OnEnter(AppState::Running), (despawn_loading_overlay, spawn_nav_buttons));

    // Base runtime systems that run on all platforms.
    let runtime_systems = (
        (
            update_device_profile,
            trigger_initial_reveal,
            drive_camera_flights,
            deliver_pending_intents,
            orbit_controller,
            handle_clicks,
            update_hover,
            update_cursor_icon,
        ),
        (
            sync_guides_with_view,
            animate_guides,
            expire_guides,
            spawn_frame_labels,
            position_frame_labels,
            quality_hotkeys,
            reapply_quality_bands,
        ),
        (
            close_on_escape,
            open_overlays_on_intent,
            handle_nav_buttons,
            apply_navigation,
            sync_frame_modal,
            handle_modal_buttons,
            sync_flipbook,
            handle_flipbook_buttons,
            flipbook_keyboard,
            watch_page_loading,
        ),
        fps_notification_system,
    );
    app.add_systems(Update, runtime_systems.run_if(in_state(AppState::Running)));

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, fps_text_update_system).add_systems(
            Update,
            (
                toggle_lighting_panel,
                adjust_lighting_scales,
                apply_lighting_scales,
                update_lighting_panel,
            )
                .chain()
                .run_if(in_state(AppState::Running)),
        );
    }

    app
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(DESKTOP_HOME.position)
            .looking_at(DESKTOP_HOME.target, Vec3::Y),
    ));
    spawn_loading_overlay(commands.reborrow());

    #[cfg(not(target_arch = "wasm32"))]
    spawn_fps_text(commands.reborrow());
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
