use std::collections::{HashMap, HashSet};

use bevy::pbr::{NotShadowCaster, NotShadowReceiver};
use bevy::prelude::*;
use rand::Rng;

use constants::naming::{
    CLUTTER_CENTER_MARGIN, CLUTTER_FLOOR_HEIGHT, FRAME_NAMES, HIDE_NAME_DENYLIST,
    INTERACTIVE_PUBLICATION_COUNT, KEEP_NAME_ALLOWLIST, LAPTOP_SCREEN_CANDIDATES,
    PUBLICATION_NAMES, TV_SCREEN_CANDIDATES,
};

use crate::engine::assets::showroom_assets::ShowroomAssets;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::scene_loader::RoomSceneRoot;
use crate::engine::scene::materials::{
    BaseMaterialParams, HoverSnapshot, ModelQuality, apply_effective_params, effective_params,
    frame_material, laptop_screen_material, publication_material, tv_screen_material,
};
use crate::engine::scene::registry::{RegisteredObject, SceneRegistry, SemanticRole};

/// Marks a mesh entity the picker may hit.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionTag {
    Frame(usize),
    Publication(usize),
    Screen,
}

/// Case-insensitive substring match against the clutter denylist.
pub fn name_denylisted(name: &str) -> bool {
    let lower = name.to_lowercase();
    HIDE_NAME_DENYLIST.iter().any(|term| lower.contains(term))
}

fn name_allowlisted(name: &str) -> bool {
    let lower = name.to_lowercase();
    KEEP_NAME_ALLOWLIST.iter().any(|term| lower.contains(term))
}

/// Small floor-level meshes away from the room centre are treated as
/// clutter unless their name claims otherwise.
pub fn positional_clutter(name: &str, position: Vec3) -> bool {
    if name_allowlisted(name) {
        return false;
    }
    position.y < CLUTTER_FLOOR_HEIGHT
        && position.x.abs() > CLUTTER_CENTER_MARGIN
        && position.z.abs() > CLUTTER_CENTER_MARGIN
}

/// Hide decision for one named node. The name check wins outright; the
/// positional heuristic only applies to actual geometry, so a grouping
/// node near the floor never drags its whole subtree into hiding.
pub fn should_hide(name: &str, position: Vec3, is_mesh: bool) -> bool {
    name_denylisted(name) || (is_mesh && positional_clutter(name, position))
}

/// Publication slots beyond the interactive pair exist in the asset but
/// carry no catalog entry and are always hidden.
pub fn is_noninteractive_publication(name: &str) -> bool {
    PUBLICATION_NAMES
        .iter()
        .skip(INTERACTIVE_PUBLICATION_COUNT)
        .any(|slot| name == *slot)
}

fn collect_descendants(root: Entity, children: &Query<&Children>) -> Vec<Entity> {
    let mut found = Vec::new();
    let mut stack = vec![root];
    while let Some(entity) = stack.pop() {
        found.push(entity);
        if let Ok(kids) = children.get(entity) {
            stack.extend(kids.iter());
        }
    }
    found
}

/// Self-or-descendant entity carrying the geometry for a named node.
fn find_mesh_entity(
    root: Entity,
    children: &Query<&Children>,
    meshes: &Query<(&Mesh3d, &MeshMaterial3d<StandardMaterial>)>,
) -> Option<Entity> {
    collect_descendants(root, children)
        .into_iter()
        .find(|entity| meshes.contains(*entity))
}

/// Single pass over the spawned room: hides clutter, binds the
/// interactive surfaces, randomizes the screens and normalizes the
/// remaining PBR materials. Runs once, then flips the classified flag.
#[allow(clippy::too_many_arguments)]
pub fn classify_scene(
    mut commands: Commands,
    mut progress: ResMut<LoadingProgress>,
    mut registry: ResMut<SceneRegistry>,
    quality: Res<ModelQuality>,
    assets: Res<ShowroomAssets>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut mesh_assets: ResMut<Assets<Mesh>>,
    roots: Query<Entity, With<RoomSceneRoot>>,
    children: Query<&Children>,
    names: Query<&Name>,
    transforms: Query<&GlobalTransform>,
    meshes: Query<(&Mesh3d, &MeshMaterial3d<StandardMaterial>)>,
) {
    if progress.classified {
        return;
    }
    let Ok(root) = roots.single() else {
        return;
    };

    let descendants = collect_descendants(root, &children);

    // First occurrence of each authored name wins.
    let mut by_name: HashMap<String, Entity> = HashMap::new();
    for entity in &descendants {
        if let Ok(name) = names.get(*entity) {
            by_name.entry(name.to_string()).or_insert(*entity);
        }
    }

    // Clutter pass
    let mut hidden = 0usize;
    for entity in &descendants {
        let Ok(name) = names.get(*entity) else {
            continue;
        };
        let position = transforms
            .get(*entity)
            .map(|t| t.translation())
            .unwrap_or(Vec3::ZERO);
        if should_hide(name.as_str(), position, meshes.contains(*entity))
            || is_noninteractive_publication(name.as_str())
        {
            commands.entity(*entity).insert(Visibility::Hidden);
            hidden += 1;
        }
    }

    // Everything that survives participates in shadows.
    for entity in &descendants {
        if meshes.contains(*entity) {
            commands
                .entity(*entity)
                .remove::<(NotShadowCaster, NotShadowReceiver)>();
        }
    }

    let mut bound: HashSet<Entity> = HashSet::new();
    registry.clear();

    // Interactive frames
    for (index, frame_name) in FRAME_NAMES.iter().enumerate() {
        let Some(&node) = by_name.get(*frame_name) else {
            warn!("Frame node missing from asset: {frame_name}");
            continue;
        };
        let Some(mesh) = find_mesh_entity(node, &children, &meshes) else {
            warn!("Frame node has no mesh: {frame_name}");
            continue;
        };
        let material = frame_material(assets.frame_textures[index].clone());
        let hover = HoverSnapshot::of(&material);
        let handle = materials.add(material);
        commands.entity(mesh).insert((
            MeshMaterial3d(handle.clone()),
            InteractionTag::Frame(index),
        ));
        registry.insert(
            SemanticRole::Frame(index),
            RegisteredObject {
                root: node,
                mesh,
                material: handle,
                hover,
            },
        );
        bound.insert(mesh);
    }

    // Interactive publication displays
    for (index, slot_name) in PUBLICATION_NAMES
        .iter()
        .take(INTERACTIVE_PUBLICATION_COUNT)
        .enumerate()
    {
        let Some(&node) = by_name.get(*slot_name) else {
            warn!("Publication node missing from asset: {slot_name}");
            continue;
        };
        let Some(mesh) = find_mesh_entity(node, &children, &meshes) else {
            warn!("Publication node has no mesh: {slot_name}");
            continue;
        };
        let material = publication_material(assets.publication_textures[index].clone(), index);
        let hover = HoverSnapshot::of(&material);
        let handle = materials.add(material);
        commands.entity(mesh).insert((
            MeshMaterial3d(handle.clone()),
            InteractionTag::Publication(index),
        ));
        registry.insert(
            SemanticRole::Publication(index),
            RegisteredObject {
                root: node,
                mesh,
                material: handle,
                hover,
            },
        );
        bound.insert(mesh);
    }

    // Screens get a fresh random hue every load.
    let mut rng = rand::thread_rng();
    let screen_bindings = [
        (
            SemanticRole::TvScreen,
            TV_SCREEN_CANDIDATES,
            tv_screen_material(rng.r#gen::<f32>()),
        ),
        (
            SemanticRole::LaptopScreen,
            LAPTOP_SCREEN_CANDIDATES,
            laptop_screen_material(rng.r#gen::<f32>()),
        ),
    ];
    for (role, candidates, material) in screen_bindings {
        let node = candidates
            .iter()
            .find_map(|candidate| by_name.get(*candidate).copied());
        let Some(node) = node else {
            warn!("No screen node found for {role:?}, tried {candidates:?}");
            continue;
        };
        let Some(mesh) = find_mesh_entity(node, &children, &meshes) else {
            warn!("Screen node has no mesh for {role:?}");
            continue;
        };
        let hover = HoverSnapshot::of(&material);
        let handle = materials.add(material);
        commands
            .entity(mesh)
            .insert((MeshMaterial3d(handle.clone()), InteractionTag::Screen));
        registry.insert(
            role,
            RegisteredObject {
                root: node,
                mesh,
                material: handle,
                hover,
            },
        );
        bound.insert(mesh);
    }

    // Normalization pass over everything that kept its authored material
    let bands = quality.bands();
    let mut normalized = 0usize;
    for entity in &descendants {
        if bound.contains(entity) {
            continue;
        }
        let Ok((mesh3d, material_handle)) = meshes.get(*entity) else {
            continue;
        };
        let Some(material) = materials.get_mut(&material_handle.0) else {
            continue;
        };
        let base = BaseMaterialParams {
            roughness: material.perceptual_roughness,
            metallic: material.metallic,
        };
        apply_effective_params(material, &effective_params(&base, bands));
        commands.entity(*entity).insert(base);
        normalized += 1;

        // Low tier drops secondary vertex attributes for good.
        if *quality == ModelQuality::Low {
            if let Some(mesh) = mesh_assets.get_mut(&mesh3d.0) {
                mesh.remove_attribute(Mesh::ATTRIBUTE_TANGENT);
                mesh.remove_attribute(Mesh::ATTRIBUTE_UV_1);
            }
        }
    }

    println!(
        "✓ Classified scene: {} interactive objects, {hidden} hidden, {normalized} normalized",
        registry.len()
    );
    progress.classified = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denylist_matches_substrings_case_insensitively() {
        assert!(name_denylisted("Carpet_01"));
        assert!(name_denylisted("LeatherHandbag"));
        assert!(name_denylisted("TASCHEN_stack"));
        assert!(!name_denylisted("Frame3"));
    }

    #[test]
    fn positional_heuristic_requires_floor_and_offset() {
        let clutter = Vec3::new(2.0, 0.3, -2.0);
        assert!(positional_clutter("Cube.017", clutter));
        // Too high, too central, or only off-centre on one axis.
        assert!(!positional_clutter("Cube.017", Vec3::new(2.0, 0.8, -2.0)));
        assert!(!positional_clutter("Cube.017", Vec3::new(0.5, 0.3, -2.0)));
        assert!(!positional_clutter("Cube.017", Vec3::new(2.0, 0.3, 0.2)));
    }

    #[test]
    fn allowlist_rescues_floor_objects() {
        let clutter = Vec3::new(2.0, 0.3, -2.0);
        assert!(!positional_clutter("ChairLeg_L", clutter));
        assert!(!positional_clutter("floorBoard.002", clutter));
    }

    #[test]
    fn name_match_short_circuits_position() {
        // Denylisted even at a kept position.
        assert!(should_hide("rug_main", Vec3::new(0.0, 1.0, 0.0), true));
    }

    #[test]
    fn grouping_nodes_escape_the_positional_heuristic() {
        let clutter = Vec3::new(1.5, 0.2, 2.0);
        // A mesh at a clutter position is hidden, but the same name on a
        // grouping node keeps its subtree visible.
        assert!(should_hide("Desk", clutter, true));
        assert!(!should_hide("Desk", clutter, false));
        // Denylisted names are hidden regardless of geometry.
        assert!(should_hide("rug_main", clutter, false));
    }

    #[test]
    fn trailing_publication_slots_are_hidden() {
        assert!(is_noninteractive_publication("Publishing3"));
        assert!(is_noninteractive_publication("Publishing4"));
        assert!(!is_noninteractive_publication("Publishing1"));
        assert!(!is_noninteractive_publication("Publishing2"));
    }
}
