use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;

/// Simulated device viewpoint.
///
/// The reticle ray always leaves from the screen centre, so sweeping it across
/// detected planes means moving this camera, the way a handheld device would
/// be pointed around a room.
#[derive(Resource)]
pub struct DeviceCamera {
    pub position: Vec3,
    pub pitch: f32,
    pub yaw: f32,
}

impl Default for DeviceCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 1.4, 2.2),
            pitch: -0.55,
            yaw: 0.0,
        }
    }
}

pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut device_camera: ResMut<DeviceCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    // Read mouse motion
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    // Mouse motion with right click (look around)
    if mouse_button.pressed(MouseButton::Right) && mouse_delta != Vec2::ZERO {
        let yaw_sens = 0.0035;
        let pitch_sens = 0.0030;
        device_camera.yaw += -mouse_delta.x * yaw_sens;
        device_camera.pitch += -mouse_delta.y * pitch_sens;
        device_camera.pitch = device_camera.pitch.clamp(-1.55, 1.55);
    }

    // Keyboard movement input
    let mut move_input = Vec3::ZERO;
    if keyboard.pressed(KeyCode::KeyW) { move_input.z -= 1.0; }
    if keyboard.pressed(KeyCode::KeyS) { move_input.z += 1.0; }
    if keyboard.pressed(KeyCode::KeyD) { move_input.x += 1.0; }
    if keyboard.pressed(KeyCode::KeyA) { move_input.x -= 1.0; }
    if keyboard.pressed(KeyCode::KeyE) { move_input.y += 1.0; } // Up
    if keyboard.pressed(KeyCode::KeyQ) { move_input.y -= 1.0; } // Down

    if move_input != Vec3::ZERO {
        let view_rot = Quat::from_euler(EulerRot::YXZ, device_camera.yaw, device_camera.pitch, 0.0);
        let forward = (view_rot * Vec3::Z).normalize();
        let right = (view_rot * Vec3::X).normalize();
        let up = Vec3::Y;

        // Shift = faster, ctrl = slower
        let mut speed = 1.5;
        if keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]) { speed *= 3.5; }
        if keyboard.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]) { speed *= 0.25; }

        let world_delta = right * move_input.x + up * move_input.y + forward * move_input.z;
        device_camera.position += world_delta.normalize() * speed * time.delta_secs();
    }

    // Smooth camera towards its target pose
    let target_rot = Quat::from_euler(EulerRot::YXZ, device_camera.yaw, device_camera.pitch, 0.0);
    let target_pos = device_camera.position;

    let lerp_speed = 12.0 * time.delta_secs();
    camera_transform.translation = camera_transform
        .translation
        .lerp(target_pos, lerp_speed.min(1.0));
    camera_transform.rotation = camera_transform
        .rotation
        .slerp(target_rot, lerp_speed.min(1.0));
}
