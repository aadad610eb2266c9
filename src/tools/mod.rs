//! Interactive tooling layered over the simulated session.
//!
//! A single tool exists: the reticle, a screen-centre raycast cursor that
//! tracks detected plane geometry every frame and can be frozen in place from
//! the UI.
//!
//! ## Reticle flow
//!
//! ```text
//! Button / Space key
//!   └─> LockToggleEvent
//!       └─> handle_lock_toggle_events()
//!           └─> PlacementLock.locked flipped
//!
//! Frame update (Running state, lock released)
//!   └─> update_reticle()
//!       ├─> ray from screen centre
//!       ├─> nearest_plane_hit() over revealed DetectedPlane entities
//!       ├─> hit:  reticle pose = hit transform, Visibility::Visible
//!       └─> miss: Visibility::Hidden
//! ```
//!
//! While the lock is held the update is suspended entirely, so both the
//! reticle pose and its visibility stay exactly as they were on the last
//! unlocked frame.

/// Screen-centre raycast cursor over detected planes.
///
/// Lock toggle UI, bounded-plane ray intersection, and per-frame placement.
pub mod reticle;
