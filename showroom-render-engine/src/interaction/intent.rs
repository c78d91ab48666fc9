use bevy::prelude::*;

/// A resolved click on an interactive object, delivered after its
/// camera flight has landed and settled.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionIntent {
    /// Open the sponsor modal for one frame.
    Frame(usize),
    /// Open the flipbook viewer for one publication.
    Publication(usize),
    /// Leave for the external showroom site.
    ScreenRedirect,
}
