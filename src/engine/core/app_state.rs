use bevy::prelude::*;

use crate::engine::session::config::SessionConfig;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    SessionReady,
    Running,
}

// Transition to SessionReady once the session config resource exists
pub fn transition_to_session_ready(
    config: Option<Res<SessionConfig>>,
    state: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if *state.get() == AppState::Loading && config.is_some() {
        println!("→ Session config loaded, transitioning to SessionReady state");
        next_state.set(AppState::SessionReady);
    }
}

// Final transition once the static scene has been built
pub fn transition_to_running(mut next_state: ResMut<NextState<AppState>>) {
    println!("→ Scene built, transitioning to Running state");
    next_state.set(AppState::Running);
}
