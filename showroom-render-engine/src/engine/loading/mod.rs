//! Scene and texture loading with progress tracking.
//!
//! Loading is fully polled: systems check asset states each frame and
//! flip `LoadingProgress` flags, which drive the `AppState` transitions
//! and the loader overlay. A load failure is reported once and leaves
//! the rest of the application running.

/// Loading progress flags shared between loaders and state transitions.
pub mod progress;

/// Room scene spawning and readiness/failure polling.
pub mod scene_loader;

/// Loader overlay UI and the error panel shown on load failure.
pub mod loader_ui;
