use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy_common_assets::json::JsonAssetPlugin;

mod constants;
mod engine;
mod tools;

use engine::{
    camera::{DeviceCamera, camera_controller},
    core::app_state::{AppState, transition_to_running, transition_to_session_ready},
    scene::build_static_scene,
    session::{
        config::{SESSION_CONFIG_PATH, SessionConfig, SessionConfigLoader, load_session_config},
        plane_detection::{grow_detected_planes, reveal_detected_planes, spawn_plane_seeds},
    },
};
use tools::reticle::ReticlePlugin;

fn main() {
    let mut app = create_app();

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }
}

/// Create application with session config loading and the reticle tool
fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(JsonAssetPlugin::<SessionConfig>::new(&["json"]))
        .add_plugins(ReticlePlugin);

    app.init_state::<AppState>()
        .init_resource::<SessionConfigLoader>()
        .insert_resource(DeviceCamera::default())
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (
                load_session_config,
                transition_to_session_ready,
                fps_text_update_system,
            ),
        )
        .add_systems(
            OnEnter(AppState::SessionReady),
            (build_static_scene, spawn_plane_seeds, transition_to_running).chain(),
        )
        .add_systems(
            Update,
            (
                camera_controller,
                reveal_detected_planes,
                grow_detected_planes,
            )
                .run_if(in_state(AppState::Running)),
        );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas: Some("#bevy".into()),
            fit_canvas_to_parent: true,
            prevent_default_event_handling: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}

#[derive(Component)]
struct FpsText;

/// Spawn the camera and overlay UI, and kick off session config loading
fn setup(mut commands: Commands) {
    println!("=== PLANE-ANCHORED MATERIAL GRID DEMO ===");
    println!("Loading session config from: {}", SESSION_CONFIG_PATH);

    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 1.4, 2.2).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    spawn_ui(&mut commands);
}

fn spawn_ui(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    for mut text in &mut query {
        if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
            if let Some(value) = fps.smoothed() {
                text.0 = format!("FPS: {value:.1}");
            }
        }
    }
}
