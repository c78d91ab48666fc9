use bevy::prelude::*;
use constants::viewer::ACCENT_COLOR;

use crate::engine::loading::progress::LoadingProgress;
use crate::rpc::host_bridge::ExternalRedirectRequest;
use constants::naming::EXTERNAL_REDIRECT_URL;

#[derive(Component)]
pub struct LoaderRoot;

#[derive(Component)]
pub struct LoaderStatusText;

#[derive(Component)]
pub struct LoaderFallbackButton;

// Full-screen loader shown until the scene is running
pub fn spawn_loading_overlay(mut commands: Commands) {
    commands
        .spawn((
            LoaderRoot,
            Name::new("LoaderOverlay"),
            BackgroundColor(Color::srgb(0.02, 0.02, 0.03)),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                row_gap: Val::Px(12.0),
                ..default()
            },
            GlobalZIndex(10),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("3D ROOM"),
                TextFont {
                    font_size: 42.0,
                    ..default()
                },
                TextColor(ACCENT_COLOR),
            ));
            parent.spawn((
                LoaderStatusText,
                Text::new("Loading Experience"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.8)),
            ));
        });
}

// Reflect loading progress, or swap to the error panel on failure
pub fn update_loading_overlay(
    mut commands: Commands,
    progress: Res<LoadingProgress>,
    roots: Query<Entity, With<LoaderRoot>>,
    mut status: Query<(&mut Text, &mut TextColor), With<LoaderStatusText>>,
    fallback_buttons: Query<(), With<LoaderFallbackButton>>,
) {
    if !progress.is_changed() {
        return;
    }
    let Ok((mut text, mut color)) = status.single_mut() else {
        return;
    };

    if let Some(path) = progress.failed.as_ref() {
        text.0 = format!("Could not load {path}");
        *color = TextColor(Color::srgb(0.9, 0.35, 0.35));

        // Manual fallback: open the showroom site directly.
        if fallback_buttons.is_empty() {
            let Ok(root) = roots.single() else {
                return;
            };
            commands
                .entity(root)
                .with_children(|parent| {
                    parent
                        .spawn((
                            LoaderFallbackButton,
                            Button,
                            BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
                            Node {
                                padding: UiRect::axes(Val::Px(14.0), Val::Px(8.0)),
                                margin: UiRect::top(Val::Px(10.0)),
                                ..default()
                            },
                        ))
                        .with_children(|btn| {
                            btn.spawn((
                                Text::new("Visit site instead"),
                                TextFont {
                                    font_size: 14.0,
                                    ..default()
                                },
                                TextColor(Color::WHITE),
                            ));
                        });
                });
        }
    } else if progress.scene_instance_ready {
        text.0 = "Preparing the room".to_string();
    }
}

pub fn handle_loader_fallback(
    interactions: Query<&Interaction, (Changed<Interaction>, With<LoaderFallbackButton>)>,
    mut redirects: EventWriter<ExternalRedirectRequest>,
) {
    for interaction in &interactions {
        if *interaction == Interaction::Pressed {
            redirects.write(ExternalRedirectRequest {
                url: EXTERNAL_REDIRECT_URL.to_string(),
            });
        }
    }
}

// The loader disappears when the room starts running
pub fn despawn_loading_overlay(mut commands: Commands, loaders: Query<Entity, With<LoaderRoot>>) {
    for entity in &loaders {
        commands.entity(entity).despawn();
    }
}
