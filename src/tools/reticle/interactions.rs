use bevy::prelude::*;

use super::state::*;

// Lock button emits a toggle event, changes colour while pressed or hovered
pub fn lock_button_interaction(
    mut q: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>, With<LockButton>),
    >,
    lock: Res<PlacementLock>,
    mut toggle_events: EventWriter<LockToggleEvent>,
) {
    for (interaction, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                toggle_events.send(LockToggleEvent {
                    source: LockToggleSource::Ui,
                });
                *bg = BackgroundColor(Color::srgb(0.18, 0.20, 0.24));
            }
            Interaction::Hovered => *bg = BackgroundColor(Color::srgb(0.26, 0.28, 0.32)),
            Interaction::None => {
                *bg = BackgroundColor(if lock.locked {
                    Color::srgb(0.30, 0.34, 0.40)
                } else {
                    Color::srgb(0.22, 0.24, 0.28)
                })
            }
        }
    }
}

/// Flip the placement lock for every toggle event this frame
pub fn handle_lock_toggle_events(
    mut events: EventReader<LockToggleEvent>,
    mut lock: ResMut<PlacementLock>,
) {
    for event in events.read() {
        lock.locked = !lock.locked;
        info!(
            "Placement lock {} via {:?}",
            if lock.locked { "engaged" } else { "released" },
            event.source
        );
    }
}

/// Space bar toggles the lock (native builds only)
#[cfg(not(target_arch = "wasm32"))]
pub fn handle_lock_keyboard_shortcut(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut toggle_events: EventWriter<LockToggleEvent>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        toggle_events.send(LockToggleEvent {
            source: LockToggleSource::Keyboard,
        });
    }
}

/// Placeholder for WASM builds where the lock is controlled via the UI button only.
#[cfg(target_arch = "wasm32")]
pub fn handle_lock_keyboard_shortcut() {}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle_app() -> App {
        let mut app = App::new();
        app.add_event::<LockToggleEvent>()
            .init_resource::<PlacementLock>()
            .add_systems(Update, handle_lock_toggle_events);
        app
    }

    fn send_toggle(app: &mut App, source: LockToggleSource) {
        app.world_mut()
            .resource_mut::<Events<LockToggleEvent>>()
            .send(LockToggleEvent { source });
    }

    #[test]
    fn toggle_event_flips_the_lock() {
        let mut app = toggle_app();
        assert!(!app.world().resource::<PlacementLock>().locked);

        send_toggle(&mut app, LockToggleSource::Ui);
        app.update();
        assert!(app.world().resource::<PlacementLock>().locked);

        send_toggle(&mut app, LockToggleSource::Keyboard);
        app.update();
        assert!(!app.world().resource::<PlacementLock>().locked);
    }

    #[test]
    fn frame_without_events_leaves_the_lock_alone() {
        let mut app = toggle_app();
        send_toggle(&mut app, LockToggleSource::Ui);
        app.update();

        app.update();
        app.update();
        assert!(app.world().resource::<PlacementLock>().locked);
    }
}
