//! Core application state management.
//!
//! Handles the transition from session-config loading through one-time scene
//! construction to the per-frame running state.

/// Application state machine and loading transitions.
///
/// Manages states from initial config loading through scene setup to runtime execution.
pub mod app_state;
