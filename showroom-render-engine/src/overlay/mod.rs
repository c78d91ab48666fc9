//! 2D overlay surfaces above the 3D room.
//!
//! A single [`stack::OverlayStack`] resource owns which surfaces are
//! open and in what order they close; the UI systems only render what
//! the stack says.

/// Publication flipbook viewer with page zoom.
pub mod flipbook;

/// Sponsor detail modal.
pub mod modal;

/// View navigation buttons and the shared navigation event.
pub mod nav;

/// Overlay ordering and escape handling.
pub mod stack;
