//! Room lighting rig.
//!
//! Two window lights (emissive glow plane plus shadow-casting
//! directional proxy each), one golden desk lamp, and a native-only
//! debug panel for live intensity tuning.

/// Native lighting tuning panel.
pub mod debug_panel;

/// Window lights and the desk lamp.
pub mod window_lights;
