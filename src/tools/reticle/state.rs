use bevy::prelude::*;

// Resources
/// Gates the per-frame reticle update; toggled from the UI or keyboard.
#[derive(Resource, Default)]
pub struct PlacementLock {
    pub locked: bool,
}

// Components
#[derive(Component)]
pub struct Reticle;
#[derive(Component)]
pub struct LockButton;
#[derive(Component)]
pub struct LockLabel;

/// Event fired when the lock is toggled via UI button or keyboard shortcut.
#[derive(Event)]
pub struct LockToggleEvent {
    pub source: LockToggleSource,
}

/// Source of a lock toggle for debugging.
#[derive(Debug, Clone, Copy)]
pub enum LockToggleSource {
    Ui,
    Keyboard,
}
