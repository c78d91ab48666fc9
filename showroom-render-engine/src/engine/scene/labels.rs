use bevy::prelude::*;
use constants::viewer::{ACCENT_COLOR, FRAME_LABEL_DROP, FRAME_LABEL_FONT_SIZE};

use crate::engine::assets::catalogs::SponsorCatalog;
use crate::engine::assets::showroom_assets::ShowroomAssets;
use crate::engine::scene::registry::SceneRegistry;

/// Screen-space caption anchored below one frame.
#[derive(Component)]
pub struct FrameLabel {
    pub index: usize,
}

// Captions spawn once the sponsor catalog is available
pub fn spawn_frame_labels(
    mut commands: Commands,
    assets: Res<ShowroomAssets>,
    catalogs: Res<Assets<SponsorCatalog>>,
    registry: Res<SceneRegistry>,
    existing: Query<(), With<FrameLabel>>,
) {
    if !existing.is_empty() {
        return;
    }
    let Some(catalog) = catalogs.get(&assets.sponsor_catalog) else {
        return;
    };

    for (index, _) in registry.frames() {
        let Some(sponsor) = catalog.sponsor(index) else {
            continue;
        };
        commands
            .spawn((
                FrameLabel { index },
                Name::new(format!("FrameLabel{index}")),
                Node {
                    position_type: PositionType::Absolute,
                    padding: UiRect::axes(Val::Px(8.0), Val::Px(3.0)),
                    ..default()
                },
                BackgroundColor(Color::srgba(0.02, 0.02, 0.03, 0.7)),
            ))
            .with_children(|parent| {
                parent.spawn((
                    Text::new(sponsor.title.clone()),
                    TextFont {
                        font_size: FRAME_LABEL_FONT_SIZE,
                        ..default()
                    },
                    TextColor(ACCENT_COLOR),
                ));
            });
    }
}

// Project each caption under its frame every frame
pub fn position_frame_labels(
    registry: Res<SceneRegistry>,
    transforms: Query<&GlobalTransform>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    mut labels: Query<(&FrameLabel, &mut Node, &mut Visibility)>,
) {
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };

    for (label, mut node, mut visibility) in &mut labels {
        let Some(object) = registry.get(crate::engine::scene::registry::SemanticRole::Frame(
            label.index,
        )) else {
            *visibility = Visibility::Hidden;
            continue;
        };
        let Ok(transform) = transforms.get(object.root) else {
            continue;
        };

        let anchor = transform.translation() - Vec3::Y * FRAME_LABEL_DROP;
        match camera.world_to_viewport(camera_transform, anchor) {
            Ok(viewport) => {
                node.left = Val::Px(viewport.x);
                node.top = Val::Px(viewport.y);
                *visibility = Visibility::Inherited;
            }
            Err(_) => {
                // Behind the camera or outside the viewport.
                *visibility = Visibility::Hidden;
            }
        }
    }
}
