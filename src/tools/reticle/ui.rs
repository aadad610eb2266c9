use bevy::prelude::*;

use super::state::*;

// Spawns the lock toggle button, bottom centre
pub fn spawn_reticle_ui(mut commands: Commands) {
    commands
        .spawn((
            Name::new("ReticlePanel"),
            Node {
                width: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                bottom: Val::Px(24.0),
                display: Display::Flex,
                justify_content: JustifyContent::Center,
                ..default()
            },
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    LockButton,
                    Button,
                    Name::new("LockButton"),
                    BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
                    BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                    Node {
                        width: Val::Px(200.0),
                        height: Val::Px(40.0),
                        display: Display::Flex,
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                ))
                .with_children(|btn| {
                    btn.spawn((
                        LockLabel,
                        Text::new("Lock Position"),
                        TextFont {
                            font_size: 16.0,
                            ..default()
                        },
                        TextColor(Color::srgb(1.0, 1.0, 1.0)),
                    ));
                });
        });
}

// Label and idle colour follow the lock state
pub fn reflect_lock_button(
    lock: Res<PlacementLock>,
    mut labels: Query<&mut Text, With<LockLabel>>,
    mut buttons: Query<&mut BackgroundColor, With<LockButton>>,
) {
    if !lock.is_changed() {
        return;
    }

    let label = if lock.locked { "Unlock Position" } else { "Lock Position" };
    if let Ok(mut text) = labels.single_mut() {
        if text.0 != label {
            *text = Text::new(label);
        }
    }

    if let Ok(mut bg) = buttons.single_mut() {
        *bg = BackgroundColor(if lock.locked {
            Color::srgb(0.30, 0.34, 0.40)
        } else {
            Color::srgb(0.22, 0.24, 0.28)
        });
    }
}
