//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, state
//! transitions, and the UI-level view state that drives the camera.

/// Application setup and plugin configuration for the Bevy engine.
pub mod app_setup;

/// Application state machine and loading transitions.
pub mod app_state;

/// Named view state, device profile, and navigation bookkeeping.
pub mod view_state;

/// Platform-specific window configuration for native and WASM builds.
pub mod window_config;
