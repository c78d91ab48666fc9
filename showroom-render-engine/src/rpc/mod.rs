//! JSON-RPC 2.0 bridge to the embedding host page.
//!
//! The engine runs inside an iframe; the host drives navigation and
//! quality over `postMessage` and receives load/FPS notifications back.

/// Bridge resource, message plumbing and external redirects.
pub mod host_bridge;
