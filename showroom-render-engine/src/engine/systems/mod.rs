//! Cross-cutting runtime systems.

/// FPS readout and host notifications.
pub mod fps_tracking;
