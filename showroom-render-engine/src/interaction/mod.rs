//! Pointer interaction with classified scene objects.
//!
//! Click and hover both raycast against the oriented bounds of tagged
//! meshes. Clicks request camera flights; the interaction intent itself
//! is only delivered once the flight lands and the settle delay passes.

/// Hover highlight and the cursor-icon choke point.
pub mod hover;

/// Deferred interaction intents.
pub mod intent;

/// Click picking and flight requests.
pub mod picking;

/// Ray intersection against oriented bounding boxes.
pub mod ray;
