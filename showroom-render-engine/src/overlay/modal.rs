use bevy::prelude::*;

use constants::viewer::ACCENT_COLOR;

use crate::engine::assets::catalogs::SponsorCatalog;
use crate::engine::assets::showroom_assets::ShowroomAssets;
use crate::interaction::intent::InteractionIntent;
use crate::overlay::stack::OverlayStack;
use crate::rpc::host_bridge::{ExternalRedirectRequest, HostBridge};

#[derive(Component)]
pub struct FrameModalRoot(pub usize);

#[derive(Component)]
pub struct ModalCloseButton;

#[derive(Component)]
pub struct ModalCtaButton {
    pub link: String,
}

/// Payload of the `intent_resolved` notification sent to the host.
fn intent_resolved_params(intent: &InteractionIntent) -> serde_json::Value {
    match intent {
        InteractionIntent::Frame(index) => {
            serde_json::json!({ "kind": "frame", "index": index })
        }
        InteractionIntent::Publication(index) => {
            serde_json::json!({ "kind": "publication", "index": index })
        }
        InteractionIntent::ScreenRedirect => serde_json::json!({ "kind": "screen_redirect" }),
    }
}

// Delivered intents open their overlay surface and notify the host
pub fn open_overlays_on_intent(
    mut intents: EventReader<InteractionIntent>,
    mut overlays: ResMut<OverlayStack>,
    mut bridge: ResMut<HostBridge>,
    mut redirects: EventWriter<ExternalRedirectRequest>,
) {
    for intent in intents.read() {
        match intent {
            InteractionIntent::Frame(index) => overlays.open_frame_modal(*index),
            InteractionIntent::Publication(index) => overlays.open_flipbook(*index),
            InteractionIntent::ScreenRedirect => {
                redirects.write(ExternalRedirectRequest {
                    url: constants::naming::EXTERNAL_REDIRECT_URL.to_string(),
                });
            }
        }
        bridge.send_notification("intent_resolved", intent_resolved_params(intent));
    }
}

// Rebuild the modal UI whenever the open sponsor changes
pub fn sync_frame_modal(
    mut commands: Commands,
    overlays: Res<OverlayStack>,
    assets: Res<ShowroomAssets>,
    catalogs: Res<Assets<SponsorCatalog>>,
    asset_server: Res<AssetServer>,
    spawned: Query<(Entity, &FrameModalRoot)>,
) {
    let wanted = overlays.frame_modal();
    let current = spawned.single().ok();

    match (wanted, current) {
        (None, None) => return,
        (Some(index), Some((_, root))) if root.0 == index => return,
        _ => {}
    }

    for (entity, _) in &spawned {
        commands.entity(entity).despawn();
    }
    let Some(index) = wanted else {
        return;
    };
    let Some(catalog) = catalogs.get(&assets.sponsor_catalog) else {
        return;
    };
    let Some(sponsor) = catalog.sponsor(index) else {
        warn!("No sponsor entry for frame {index}");
        return;
    };

    let hero = asset_server.load(sponsor.image.clone());
    let gallery: Vec<Handle<Image>> = sponsor
        .gallery
        .iter()
        .map(|path| asset_server.load(path.clone()))
        .collect();

    commands
        .spawn((
            FrameModalRoot(index),
            Name::new("FrameModal"),
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            GlobalZIndex(20),
        ))
        .with_children(|backdrop| {
            backdrop
                .spawn((
                    BackgroundColor(Color::srgb(0.08, 0.08, 0.1)),
                    Node {
                        width: Val::Px(460.0),
                        max_height: Val::Percent(85.0),
                        display: Display::Flex,
                        flex_direction: FlexDirection::Column,
                        padding: UiRect::all(Val::Px(18.0)),
                        row_gap: Val::Px(12.0),
                        ..default()
                    },
                ))
                .with_children(|panel| {
                    panel.spawn((
                        Text::new(sponsor.title.clone()),
                        TextFont {
                            font_size: 22.0,
                            ..default()
                        },
                        TextColor(ACCENT_COLOR),
                    ));
                    panel.spawn((
                        ImageNode::new(hero),
                        Node {
                            width: Val::Percent(100.0),
                            ..default()
                        },
                    ));
                    panel.spawn((
                        Text::new(sponsor.description.clone()),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.85, 0.85, 0.85)),
                    ));

                    if !gallery.is_empty() {
                        panel
                            .spawn(Node {
                                display: Display::Flex,
                                column_gap: Val::Px(8.0),
                                ..default()
                            })
                            .with_children(|row| {
                                for image in gallery {
                                    row.spawn((
                                        ImageNode::new(image),
                                        Node {
                                            width: Val::Px(96.0),
                                            ..default()
                                        },
                                    ));
                                }
                            });
                    }

                    panel
                        .spawn((
                            ModalCtaButton {
                                link: sponsor.cta_link.clone(),
                            },
                            Button,
                            BackgroundColor(ACCENT_COLOR),
                            Node {
                                padding: UiRect::axes(Val::Px(16.0), Val::Px(9.0)),
                                justify_content: JustifyContent::Center,
                                ..default()
                            },
                        ))
                        .with_children(|btn| {
                            btn.spawn((
                                Text::new(sponsor.cta_text.clone()),
                                TextFont {
                                    font_size: 15.0,
                                    ..default()
                                },
                                TextColor(Color::srgb(0.05, 0.05, 0.05)),
                            ));
                        });

                    panel
                        .spawn((
                            ModalCloseButton,
                            Button,
                            BackgroundColor(Color::srgb(0.2, 0.2, 0.24)),
                            Node {
                                padding: UiRect::axes(Val::Px(16.0), Val::Px(7.0)),
                                justify_content: JustifyContent::Center,
                                ..default()
                            },
                        ))
                        .with_children(|btn| {
                            btn.spawn((
                                Text::new("Close"),
                                TextFont {
                                    font_size: 14.0,
                                    ..default()
                                },
                                TextColor(Color::WHITE),
                            ));
                        });
                });
        });
}

pub fn handle_modal_buttons(
    close_buttons: Query<&Interaction, (Changed<Interaction>, With<ModalCloseButton>)>,
    cta_buttons: Query<(&Interaction, &ModalCtaButton), Changed<Interaction>>,
    mut overlays: ResMut<OverlayStack>,
    mut redirects: EventWriter<ExternalRedirectRequest>,
) {
    for interaction in &close_buttons {
        if *interaction == Interaction::Pressed {
            overlays.close_topmost();
        }
    }
    for (interaction, cta) in &cta_buttons {
        if *interaction == Interaction::Pressed {
            redirects.write(ExternalRedirectRequest {
                url: cta.link.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_intents_name_their_target() {
        let frame = intent_resolved_params(&InteractionIntent::Frame(3));
        assert_eq!(frame["kind"], "frame");
        assert_eq!(frame["index"], 3);

        let publication = intent_resolved_params(&InteractionIntent::Publication(1));
        assert_eq!(publication["kind"], "publication");
        assert_eq!(publication["index"], 1);

        let redirect = intent_resolved_params(&InteractionIntent::ScreenRedirect);
        assert_eq!(redirect["kind"], "screen_redirect");
        assert!(redirect.get("index").is_none());
    }
}
