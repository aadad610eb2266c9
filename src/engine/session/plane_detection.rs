use bevy::prelude::*;

use super::config::SessionConfig;

/// Plane geometry reported by the simulated session.
///
/// The entity `Transform` carries the pose; extents live here so raycasts can
/// bound the infinite plane. Planes start hidden and grow once revealed.
#[derive(Component)]
pub struct DetectedPlane {
    /// Current half-extents in local XZ, metres
    pub half_extents: Vec2,
    /// Final half-extents this plane grows towards
    pub target_half_extents: Vec2,
    /// Extent growth per second, per axis
    pub growth_rate: Vec2,
    /// Seconds remaining before this plane is reported
    pub detect_countdown: f32,
    pub revealed: bool,
}

/// Spawn one hidden plane entity per config seed
pub fn spawn_plane_seeds(
    mut commands: Commands,
    config: Res<SessionConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Unit plane (half-extent 1.0), scaled to the live extents each frame
    let plane_mesh = meshes.add(Plane3d::default().mesh().size(2.0, 2.0));

    let plane_material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, 0.25),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        cull_mode: None,
        ..default()
    });

    let initial = config.initial_plane_extent;
    let growth_secs = config.plane_growth_secs.max(f32::EPSILON);

    for (i, seed) in config.planes.iter().enumerate() {
        let target = seed.target_half_extents();
        let start = target.min(Vec2::splat(initial));
        let growth_rate = ((target - start) / growth_secs).max(Vec2::ZERO);

        commands.spawn((
            Mesh3d(plane_mesh.clone()),
            MeshMaterial3d(plane_material.clone()),
            Transform::from_translation(seed.center())
                .with_scale(Vec3::new(start.x, 1.0, start.y)),
            Visibility::Hidden,
            DetectedPlane {
                half_extents: start,
                target_half_extents: target,
                growth_rate,
                detect_countdown: seed.detect_after,
                revealed: false,
            },
            Name::new(format!("detected_plane_{i}")),
        ));
    }

    println!("Session tracking {} plane seed(s)", config.planes.len());
}

/// Reveal planes once their detection delay has elapsed
pub fn reveal_detected_planes(
    time: Res<Time>,
    mut planes: Query<(&mut DetectedPlane, &mut Visibility, &Transform)>,
) {
    for (mut plane, mut visibility, transform) in &mut planes {
        if plane.revealed {
            continue;
        }

        plane.detect_countdown -= time.delta_secs();
        if plane.detect_countdown <= 0.0 {
            plane.revealed = true;
            *visibility = Visibility::Visible;
            info!("Plane detected at {}", transform.translation);
        }
    }
}

/// Grow revealed planes towards their final extents
pub fn grow_detected_planes(
    time: Res<Time>,
    mut planes: Query<(&mut DetectedPlane, &mut Transform)>,
) {
    for (mut plane, mut transform) in &mut planes {
        if !plane.revealed || plane.half_extents == plane.target_half_extents {
            continue;
        }

        let step = plane.growth_rate * time.delta_secs();
        plane.half_extents = grow_extents(plane.half_extents, plane.target_half_extents, step);
        transform.scale = Vec3::new(plane.half_extents.x, 1.0, plane.half_extents.y);
    }
}

/// Advance extents by `step`, clamped at the target per axis
pub fn grow_extents(current: Vec2, target: Vec2, step: Vec2) -> Vec2 {
    (current + step).min(target)
}
