use bevy::prelude::*;

use constants::camera_poses::{REDIRECT_DURATION_SECS, TV_REDIRECT_OFFSET};
use constants::naming::EXTERNAL_REDIRECT_URL;
use constants::viewer::ACCENT_COLOR;

use crate::engine::camera::choreographer::{
    CameraChoreographer, CameraPose, EasingKind, FlightOutcome, FlightPlan,
};
use crate::engine::camera::orbit::{ControlGates, OrbitState};
use crate::engine::core::view_state::{CurrentView, DeviceProfile, ViewKind};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::registry::{SceneRegistry, SemanticRole};
use crate::overlay::stack::OverlayStack;
use crate::rpc::host_bridge::{ExternalRedirectRequest, HostBridge};

/// A view change request, from the nav buttons or the host page.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigateTo(pub ViewKind);

#[derive(Component)]
pub struct NavButton(pub ViewKind);

// Right-edge navigation column
pub fn spawn_nav_buttons(mut commands: Commands) {
    commands
        .spawn((
            Name::new("NavColumn"),
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(16.0),
                top: Val::Percent(35.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(10.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            for (label, view) in [
                ("Home", ViewKind::Home),
                ("Sponsorships", ViewKind::Sponsorships),
                ("Publishing", ViewKind::Publishing),
            ] {
                parent
                    .spawn((
                        NavButton(view),
                        Button,
                        BackgroundColor(Color::srgba(0.05, 0.05, 0.07, 0.85)),
                        Node {
                            padding: UiRect::axes(Val::Px(14.0), Val::Px(8.0)),
                            justify_content: JustifyContent::Center,
                            ..default()
                        },
                    ))
                    .with_children(|btn| {
                        btn.spawn((
                            Text::new(label),
                            TextFont {
                                font_size: 14.0,
                                ..default()
                            },
                            TextColor(ACCENT_COLOR),
                        ));
                    });
            }
        });
}

pub fn handle_nav_buttons(
    interactions: Query<(&Interaction, &NavButton), Changed<Interaction>>,
    mut navigations: EventWriter<NavigateTo>,
) {
    for (interaction, button) in &interactions {
        if *interaction == Interaction::Pressed {
            navigations.write(NavigateTo(button.0));
        }
    }
}

// One handler for every navigation source
#[allow(clippy::too_many_arguments)]
pub fn apply_navigation(
    mut navigations: EventReader<NavigateTo>,
    progress: Res<LoadingProgress>,
    mut view: ResMut<CurrentView>,
    mut overlays: ResMut<OverlayStack>,
    profile: Res<DeviceProfile>,
    registry: Res<SceneRegistry>,
    transforms: Query<&GlobalTransform>,
    cameras: Query<&Transform, With<Camera3d>>,
    mut choreographer: ResMut<CameraChoreographer>,
    mut gates: ResMut<ControlGates>,
    orbit: Res<OrbitState>,
    mut bridge: ResMut<HostBridge>,
    mut redirects: EventWriter<ExternalRedirectRequest>,
) {
    for navigation in navigations.read() {
        // Navigation is inert until the reveal has landed.
        if !progress.reveal_played {
            continue;
        }
        let Ok(camera) = cameras.single() else {
            continue;
        };
        let from = CameraPose::new(camera.translation, orbit.target);
        overlays.close_all();

        match navigation.0 {
            ViewKind::Home => {
                if view.record_home_arrival() {
                    // Second explicit arrival leaves for the site,
                    // flying past the TV when the asset has one.
                    let tv_pos = registry
                        .get(SemanticRole::TvScreen)
                        .and_then(|tv| transforms.get(tv.root).ok())
                        .map(|xf| xf.translation());
                    match tv_pos {
                        Some(pos) => {
                            choreographer.request(
                                FlightPlan::Timed {
                                    from,
                                    to: CameraPose::new(pos + TV_REDIRECT_OFFSET, pos),
                                    duration: REDIRECT_DURATION_SECS,
                                    easing: EasingKind::QuartOut,
                                },
                                FlightOutcome::ExternalRedirect,
                                &mut gates,
                            );
                            println!("→ TV redirect flight");
                        }
                        None => {
                            redirects.write(ExternalRedirectRequest {
                                url: EXTERNAL_REDIRECT_URL.to_string(),
                            });
                        }
                    }
                } else {
                    let pose = profile.pose_for(ViewKind::Home);
                    choreographer.request(
                        FlightPlan::Glide {
                            to: CameraPose::new(pose.position, pose.target),
                        },
                        FlightOutcome::Settle,
                        &mut gates,
                    );
                }
            }
            kind @ (ViewKind::Sponsorships | ViewKind::Publishing) => {
                view.set(kind);
                let pose = profile.pose_for(kind);
                choreographer.request(
                    FlightPlan::Glide {
                        to: CameraPose::new(pose.position, pose.target),
                    },
                    FlightOutcome::Settle,
                    &mut gates,
                );
                println!("→ Gliding to {kind:?}");
            }
        }

        bridge.send_notification(
            "view_changed",
            serde_json::json!({ "view": format!("{:?}", navigation.0).to_lowercase() }),
        );
    }
}
