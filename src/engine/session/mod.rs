//! Simulated world-tracking session.
//!
//! Stands in for a platform AR runtime: a JSON session config describes which
//! plane anchors the "session" will report and when, and the plane detection
//! systems surface them as entities the rest of the app can query. Everything
//! downstream (reticle raycasts, scene anchoring) only ever sees
//! `(&GlobalTransform, &DetectedPlane)` results, the same surface a real
//! detection provider would fill.

/// Session config JSON asset and polling loader.
///
/// Describes plane seeds, growth timing, and the checkerboard anchor pose.
pub mod config;

/// Detected plane entities with delayed reveal and extent growth.
///
/// Planes appear after their configured delay and grow towards final extents,
/// mirroring how AR plane anchors refine over time.
pub mod plane_detection;
