use bevy::asset::LoadState;
use bevy::prelude::*;

use constants::viewer::{
    ACCENT_COLOR, FLIPBOOK_DISPLAY_SCALE, FLIPBOOK_ZOOM_SCALE, PAGE_BASE_WIDTH,
    PAGE_LOAD_TIMEOUT_SECS,
};

use crate::engine::assets::catalogs::PublicationCatalog;
use crate::engine::assets::showroom_assets::ShowroomAssets;
use crate::overlay::stack::OverlayStack;
use crate::rpc::host_bridge::ExternalRedirectRequest;

/// Everything the rendered viewer depends on; the UI is rebuilt
/// whenever this key stops matching the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipbookKey {
    pub publication: usize,
    pub spread: usize,
    pub zoomed: Option<usize>,
    pub errored: bool,
}

#[derive(Component)]
pub struct FlipbookRoot(pub FlipbookKey);

#[derive(Component)]
pub struct PageButton(pub usize);

/// Spread navigation, -1 or +1.
#[derive(Component)]
pub struct SpreadNavButton(pub i32);

#[derive(Component)]
pub struct FlipbookCloseButton;

#[derive(Component)]
pub struct FallbackLinkButton {
    pub url: String,
}

fn spread_count(pages: usize) -> usize {
    pages.div_ceil(2).max(1)
}

// Rebuild the viewer whenever its key changes
pub fn sync_flipbook(
    mut commands: Commands,
    overlays: Res<OverlayStack>,
    assets: Res<ShowroomAssets>,
    catalogs: Res<Assets<PublicationCatalog>>,
    asset_server: Res<AssetServer>,
    spawned: Query<(Entity, &FlipbookRoot)>,
) {
    let wanted = overlays.flipbook().map(|session| FlipbookKey {
        publication: session.publication,
        spread: session.spread,
        zoomed: overlays.zoomed_page(),
        errored: session.error.is_some(),
    });
    let current = spawned.single().ok().map(|(_, root)| root.0);
    if wanted == current {
        return;
    }

    for (entity, _) in &spawned {
        commands.entity(entity).despawn();
    }
    let Some(key) = wanted else {
        return;
    };
    let Some(catalog) = catalogs.get(&assets.publication_catalog) else {
        return;
    };
    let Some(publication) = catalog.publication(key.publication) else {
        warn!("No publication entry for display {}", key.publication);
        return;
    };
    let error = overlays
        .flipbook()
        .and_then(|session| session.error.clone());

    commands
        .spawn((
            FlipbookRoot(key),
            Name::new("FlipbookViewer"),
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.75)),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(14.0),
                ..default()
            },
            GlobalZIndex(30),
        ))
        .with_children(|root| {
            root.spawn((
                Text::new(publication.title.clone()),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(ACCENT_COLOR),
            ));

            if let Some(message) = error {
                root.spawn((
                    Text::new(message),
                    TextFont {
                        font_size: 15.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.9, 0.35, 0.35)),
                ));
                root.spawn((
                    FallbackLinkButton {
                        url: publication.pdf_url.clone(),
                    },
                    Button,
                    BackgroundColor(ACCENT_COLOR),
                    Node {
                        padding: UiRect::axes(Val::Px(16.0), Val::Px(9.0)),
                        ..default()
                    },
                ))
                .with_children(|btn| {
                    btn.spawn((
                        Text::new("Open the PDF instead"),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.05, 0.05, 0.05)),
                    ));
                });
            } else if let Some(page) = key.zoomed {
                // Single zoomed page; clicking it again drops the zoom
                // via the escape/close path.
                if let Some(path) = publication.pages.get(page) {
                    root.spawn((
                        PageButton(page),
                        Button,
                        ImageNode::new(asset_server.load(path.clone())),
                        Node {
                            width: Val::Px(PAGE_BASE_WIDTH * FLIPBOOK_ZOOM_SCALE),
                            ..default()
                        },
                    ));
                }
            } else {
                let left = key.spread * 2;
                root.spawn(Node {
                    display: Display::Flex,
                    column_gap: Val::Px(6.0),
                    ..default()
                })
                .with_children(|row| {
                    for page in [left, left + 1] {
                        if let Some(path) = publication.pages.get(page) {
                            row.spawn((
                                PageButton(page),
                                Button,
                                ImageNode::new(asset_server.load(path.clone())),
                                Node {
                                    width: Val::Px(PAGE_BASE_WIDTH * FLIPBOOK_DISPLAY_SCALE),
                                    ..default()
                                },
                            ));
                        }
                    }
                });

                root.spawn(Node {
                    display: Display::Flex,
                    column_gap: Val::Px(12.0),
                    align_items: AlignItems::Center,
                    ..default()
                })
                .with_children(|controls| {
                    for (label, delta) in [("<", -1), (">", 1)] {
                        controls
                            .spawn((
                                SpreadNavButton(delta),
                                Button,
                                BackgroundColor(Color::srgb(0.18, 0.18, 0.22)),
                                Node {
                                    padding: UiRect::axes(Val::Px(14.0), Val::Px(7.0)),
                                    ..default()
                                },
                            ))
                            .with_children(|btn| {
                                btn.spawn((
                                    Text::new(label),
                                    TextFont {
                                        font_size: 16.0,
                                        ..default()
                                    },
                                    TextColor(Color::WHITE),
                                ));
                            });
                    }
                    controls.spawn((
                        Text::new(format!(
                            "{} / {}",
                            key.spread + 1,
                            spread_count(publication.pages.len())
                        )),
                        TextFont {
                            font_size: 13.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.7, 0.7, 0.7)),
                    ));
                });
            }

            root.spawn((
                FlipbookCloseButton,
                Button,
                BackgroundColor(Color::srgb(0.2, 0.2, 0.24)),
                Node {
                    padding: UiRect::axes(Val::Px(16.0), Val::Px(7.0)),
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
}

#[allow(clippy::too_many_arguments)]
pub fn handle_flipbook_buttons(
    pages: Query<(&Interaction, &PageButton), Changed<Interaction>>,
    nav: Query<(&Interaction, &SpreadNavButton), Changed<Interaction>>,
    close: Query<&Interaction, (Changed<Interaction>, With<FlipbookCloseButton>)>,
    fallback: Query<(&Interaction, &FallbackLinkButton), Changed<Interaction>>,
    assets: Res<ShowroomAssets>,
    catalogs: Res<Assets<PublicationCatalog>>,
    mut overlays: ResMut<OverlayStack>,
    mut redirects: EventWriter<ExternalRedirectRequest>,
) {
    for (interaction, page) in &pages {
        if *interaction == Interaction::Pressed {
            if overlays.zoomed_page().is_some() {
                overlays.close_topmost();
            } else {
                overlays.zoom_page(page.0);
            }
        }
    }

    for (interaction, nav_button) in &nav {
        if *interaction != Interaction::Pressed {
            continue;
        }
        let Some(session) = overlays.flipbook() else {
            continue;
        };
        let Some(publication) = catalogs
            .get(&assets.publication_catalog)
            .and_then(|catalog| catalog.publication(session.publication))
        else {
            continue;
        };
        let last = spread_count(publication.pages.len()) - 1;
        if let Some(session) = overlays.flipbook_mut() {
            session.spread = session
                .spread
                .saturating_add_signed(nav_button.0 as isize)
                .min(last);
            session.load_elapsed = 0.0;
        }
    }

    for interaction in &close {
        if *interaction == Interaction::Pressed {
            overlays.close_all();
        }
    }

    for (interaction, link) in &fallback {
        if *interaction == Interaction::Pressed {
            redirects.write(ExternalRedirectRequest {
                url: link.url.clone(),
            });
        }
    }
}

// Arrow keys page through the open spread
pub fn flipbook_keyboard(
    keyboard: Res<ButtonInput<KeyCode>>,
    assets: Res<ShowroomAssets>,
    catalogs: Res<Assets<PublicationCatalog>>,
    mut overlays: ResMut<OverlayStack>,
) {
    if overlays.zoomed_page().is_some() {
        return;
    }
    let delta: isize = if keyboard.just_pressed(KeyCode::ArrowRight) {
        1
    } else if keyboard.just_pressed(KeyCode::ArrowLeft) {
        -1
    } else {
        return;
    };

    let Some(session) = overlays.flipbook() else {
        return;
    };
    let Some(publication) = catalogs
        .get(&assets.publication_catalog)
        .and_then(|catalog| catalog.publication(session.publication))
    else {
        return;
    };
    let last = spread_count(publication.pages.len()) - 1;
    if let Some(session) = overlays.flipbook_mut() {
        session.spread = session.spread.saturating_add_signed(delta).min(last);
        session.load_elapsed = 0.0;
    }
}

// Failed or stalled page bitmaps flip the session into its error state
pub fn watch_page_loading(
    time: Res<Time>,
    assets: Res<ShowroomAssets>,
    catalogs: Res<Assets<PublicationCatalog>>,
    asset_server: Res<AssetServer>,
    mut overlays: ResMut<OverlayStack>,
) {
    let Some(session) = overlays.flipbook() else {
        return;
    };
    if session.error.is_some() {
        return;
    }
    let Some(publication) = catalogs
        .get(&assets.publication_catalog)
        .and_then(|catalog| catalog.publication(session.publication))
    else {
        return;
    };

    let left = session.spread * 2;
    let mut pending = false;
    let mut failed: Option<String> = None;
    for page in [left, left + 1] {
        let Some(path) = publication.pages.get(page) else {
            continue;
        };
        let handle: Handle<Image> = asset_server.load(path.clone());
        match asset_server.load_state(&handle) {
            LoadState::Failed(_) => failed = Some(path.clone()),
            LoadState::Loaded => {}
            _ => pending = true,
        }
    }

    let delta = time.delta_secs();
    if let Some(session) = overlays.flipbook_mut() {
        if let Some(path) = failed {
            warn!("Publication page failed to load: {path}");
            session.error = Some("This publication could not be displayed.".to_string());
        } else if pending {
            session.load_elapsed += delta;
            if session.load_elapsed > PAGE_LOAD_TIMEOUT_SECS {
                session.error = Some("This publication is taking too long to load.".to_string());
            }
        } else {
            session.load_elapsed = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spread_counting_rounds_up() {
        assert_eq!(spread_count(0), 1);
        assert_eq!(spread_count(1), 1);
        assert_eq!(spread_count(2), 1);
        assert_eq!(spread_count(3), 2);
        assert_eq!(spread_count(8), 4);
    }
}
