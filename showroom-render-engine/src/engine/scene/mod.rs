//! Scene classification and re-materialization.
//!
//! One pass over the freshly spawned room instance hides clutter,
//! normalizes PBR parameters, binds interactive frames/publications,
//! and randomizes the screens. Everything the rest of the engine needs
//! afterwards goes through the typed [`registry::SceneRegistry`] instead
//! of repeated name lookups.

/// The classification pass and its name/position predicates.
pub mod classifier;

/// Publishing guides: expiring arrow-and-ring hints over publications.
pub mod guides;

/// Screen-space frame captions.
pub mod labels;

/// Material builders, normalization bands, hover snapshots.
pub mod materials;

/// Typed handle registry from semantic role to scene entity.
pub mod registry;
