use std::collections::HashMap;

use bevy::prelude::*;

use crate::engine::scene::materials::HoverSnapshot;

/// Stable semantic role assigned during classification. The rest of
/// the engine addresses scene objects exclusively through these roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticRole {
    Frame(usize),
    Publication(usize),
    TvScreen,
    LaptopScreen,
}

/// One classified object: the named node, the mesh entity that carries
/// geometry and material, and the hover-restoration snapshot.
#[derive(Debug, Clone)]
pub struct RegisteredObject {
    pub root: Entity,
    pub mesh: Entity,
    pub material: Handle<StandardMaterial>,
    pub hover: HoverSnapshot,
}

/// Typed registry built once by the classification pass.
#[derive(Resource, Default)]
pub struct SceneRegistry {
    entries: HashMap<SemanticRole, RegisteredObject>,
}

impl SceneRegistry {
    pub fn insert(&mut self, role: SemanticRole, object: RegisteredObject) {
        self.entries.insert(role, object);
    }

    pub fn get(&self, role: SemanticRole) -> Option<&RegisteredObject> {
        self.entries.get(&role)
    }

    /// Reverse lookup from a mesh entity hit by the picker.
    pub fn role_of_mesh(&self, mesh: Entity) -> Option<SemanticRole> {
        self.entries
            .iter()
            .find(|(_, object)| object.mesh == mesh)
            .map(|(role, _)| *role)
    }

    pub fn publications(&self) -> impl Iterator<Item = (usize, &RegisteredObject)> {
        self.entries.iter().filter_map(|(role, object)| match role {
            SemanticRole::Publication(index) => Some((*index, object)),
            _ => None,
        })
    }

    pub fn frames(&self) -> impl Iterator<Item = (usize, &RegisteredObject)> {
        self.entries.iter().filter_map(|(role, object)| match role {
            SemanticRole::Frame(index) => Some((*index, object)),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
