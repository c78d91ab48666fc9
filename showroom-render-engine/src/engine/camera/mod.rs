//! Camera control.
//!
//! A single [`choreographer::CameraChoreographer`] owns every scripted
//! flight; the free-look [`orbit::OrbitState`] controller runs only
//! while no flight is active and only through its control gates.

/// Easing curves shared by the flight protocols.
pub mod easing;

/// Scripted camera flights and intent scheduling.
pub mod choreographer;

/// Free-look orbit controller and its control gates.
pub mod orbit;
