//! Screen-centre raycast reticle over detected plane geometry.
//!
//! The reticle is a single flat disc entity owned by the scene root. Every
//! frame the lock is released, a ray leaves the screen centre and the disc is
//! moved to the nearest bounded-plane intersection or hidden when nothing is
//! hit. Invariant: visible implies the pose equals the last successful hit.
//!
//! The lock is a single boolean, flipped by `LockToggleEvent` from the UI
//! button or the Space key, and consumed once per frame to gate the update.

/// UI button interactions and lock toggle event handling.
pub mod interactions;

/// Per-frame reticle raycast and pose application.
pub mod placement;

/// Ray intersection against bounded planes in plane-local space.
pub mod ray;

/// Lock resource, reticle and UI marker components, toggle event.
pub mod state;

/// Lock button spawning and state reflection.
pub mod ui;

use bevy::prelude::*;

use crate::engine::core::app_state::AppState;

pub use state::{LockToggleEvent, LockToggleSource, PlacementLock, Reticle};

use interactions::{
    handle_lock_keyboard_shortcut, handle_lock_toggle_events, lock_button_interaction,
};
use placement::{spawn_reticle, update_reticle};
use ui::{reflect_lock_button, spawn_reticle_ui};

// Registers the reticle entity, lock state, and UI systems.
pub struct ReticlePlugin;

impl Plugin for ReticlePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlacementLock>()
            .add_event::<LockToggleEvent>()
            .add_systems(Startup, spawn_reticle_ui)
            .add_systems(OnEnter(AppState::SessionReady), spawn_reticle)
            .add_systems(
                Update,
                (
                    lock_button_interaction,
                    handle_lock_keyboard_shortcut,
                    handle_lock_toggle_events,
                    reflect_lock_button,
                    update_reticle.run_if(in_state(AppState::Running)),
                )
                    .chain(),
            );
    }
}
