use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::constants::RETICLE_SIZE;
use crate::engine::session::plane_detection::DetectedPlane;

use super::ray::ray_hits_plane;
use super::state::{PlacementLock, Reticle};

/// A successful screen-centre raycast against detected plane geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReticleHit {
    pub point: Vec3,
    pub normal: Vec3,
    pub distance: f32,
}

/// Spawn the hidden reticle disc once the scene exists
pub fn spawn_reticle(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(RETICLE_SIZE, RETICLE_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgba(0.2, 0.9, 1.0, 0.8),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            cull_mode: None,
            ..default()
        })),
        Transform::IDENTITY,
        Visibility::Hidden,
        Reticle,
        Name::new("reticle"),
    ));
}

/// Per-frame reticle placement from a screen-centre raycast
pub fn update_reticle(
    lock: Res<PlacementLock>,
    mut reticle_query: Query<(&mut Transform, &mut Visibility), With<Reticle>>,
    camera_query: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    planes: Query<(&GlobalTransform, &DetectedPlane), Without<Reticle>>,
) {
    // Locked: suspend the update entirely, pose and visibility stay put
    if lock.locked {
        return;
    }

    let Ok((mut transform, mut visibility)) = reticle_query.single_mut() else {
        return;
    };
    let Ok((camera_transform, camera)) = camera_query.single() else {
        return;
    };
    let Ok(window) = windows.single() else {
        return;
    };

    let screen_center = Vec2::new(window.width() * 0.5, window.height() * 0.5);
    let Ok(ray) = camera.viewport_to_world(camera_transform, screen_center) else {
        *visibility = Visibility::Hidden;
        return;
    };

    let hit = nearest_plane_hit(
        ray.origin,
        *ray.direction,
        planes
            .iter()
            .filter(|(_, plane)| plane.revealed)
            .map(|(xf, plane)| (xf, plane.half_extents)),
    );

    apply_reticle_hit(&mut transform, &mut visibility, hit);
}

/// Closest bounded-plane intersection along the ray, by world distance
pub fn nearest_plane_hit<'a>(
    origin: Vec3,
    dir: Vec3,
    planes: impl IntoIterator<Item = (&'a GlobalTransform, Vec2)>,
) -> Option<ReticleHit> {
    let mut nearest: Option<ReticleHit> = None;

    for (xf, half_extents) in planes {
        let Some(t) = ray_hits_plane(origin, dir, xf, half_extents) else {
            continue;
        };

        if nearest.map_or(true, |hit| t < hit.distance) {
            let (_, rotation, _) = xf.to_scale_rotation_translation();
            nearest = Some(ReticleHit {
                point: origin + dir * t,
                normal: rotation * Vec3::Y,
                distance: t,
            });
        }
    }

    nearest
}

/// Move and show the reticle on a hit, hide it on a miss
pub fn apply_reticle_hit(
    transform: &mut Transform,
    visibility: &mut Visibility,
    hit: Option<ReticleHit>,
) {
    match hit {
        Some(hit) => {
            transform.translation = hit.point;
            transform.rotation = Quat::from_rotation_arc(Vec3::Y, hit.normal);
            *visibility = Visibility::Visible;
        }
        None => *visibility = Visibility::Hidden,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal_plane(x: f32, y: f32, z: f32) -> GlobalTransform {
        GlobalTransform::from(Transform::from_xyz(x, y, z))
    }

    #[test]
    fn nearest_of_several_planes_wins() {
        let high = horizontal_plane(0.0, 1.0, 0.0);
        let low = horizontal_plane(0.0, 0.0, 0.0);
        let planes = [(&low, Vec2::ONE), (&high, Vec2::ONE)];

        let hit = nearest_plane_hit(Vec3::new(0.0, 3.0, 0.0), Vec3::NEG_Y, planes).unwrap();
        assert!((hit.distance - 2.0).abs() < 1e-6);
        assert!((hit.point - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-6);
        assert!((hit.normal - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn planes_outside_the_ray_are_skipped() {
        let near_but_missed = horizontal_plane(5.0, 1.0, 0.0);
        let far_but_hit = horizontal_plane(0.0, 0.0, 0.0);
        let planes = [(&near_but_missed, Vec2::ONE), (&far_but_hit, Vec2::ONE)];

        let hit = nearest_plane_hit(Vec3::new(0.0, 3.0, 0.0), Vec3::NEG_Y, planes).unwrap();
        assert!((hit.distance - 3.0).abs() < 1e-6);
    }

    #[test]
    fn no_planes_means_no_hit() {
        let hit = nearest_plane_hit(Vec3::new(0.0, 3.0, 0.0), Vec3::NEG_Y, []);
        assert!(hit.is_none());
    }

    #[test]
    fn hit_moves_and_shows_the_reticle() {
        let mut transform = Transform::IDENTITY;
        let mut visibility = Visibility::Hidden;
        let hit = ReticleHit {
            point: Vec3::new(0.5, 0.0, -0.5),
            normal: Vec3::Y,
            distance: 2.0,
        };

        apply_reticle_hit(&mut transform, &mut visibility, Some(hit));

        assert_eq!(transform.translation, hit.point);
        assert_eq!(visibility, Visibility::Visible);
    }

    #[test]
    fn miss_hides_without_touching_the_pose() {
        let mut transform = Transform::from_xyz(1.0, 2.0, 3.0);
        let mut visibility = Visibility::Visible;

        apply_reticle_hit(&mut transform, &mut visibility, None);

        assert_eq!(visibility, Visibility::Hidden);
        assert_eq!(transform.translation, Vec3::new(1.0, 2.0, 3.0));
    }

    fn reticle_app(locked: bool) -> (App, Entity) {
        let mut app = App::new();
        app.insert_resource(PlacementLock { locked })
            .add_systems(Update, update_reticle);

        // Camera and window exist, but headless the centre ray never resolves,
        // so an unlocked frame must hide the reticle
        app.world_mut().spawn(Camera3d::default());
        app.world_mut()
            .spawn((Window::default(), bevy::window::PrimaryWindow));

        let reticle = app
            .world_mut()
            .spawn((
                Transform::from_xyz(1.0, 2.0, 3.0),
                Visibility::Visible,
                Reticle,
            ))
            .id();

        (app, reticle)
    }

    #[test]
    fn engaged_lock_suspends_the_update() {
        let (mut app, reticle) = reticle_app(true);
        app.update();

        let transform = app.world().get::<Transform>(reticle).unwrap();
        let visibility = app.world().get::<Visibility>(reticle).unwrap();
        assert_eq!(transform.translation, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(*visibility, Visibility::Visible);
    }

    #[test]
    fn released_lock_lets_a_missed_frame_hide_the_reticle() {
        let (mut app, reticle) = reticle_app(false);
        app.update();

        let transform = app.world().get::<Transform>(reticle).unwrap();
        let visibility = app.world().get::<Visibility>(reticle).unwrap();
        assert_eq!(*visibility, Visibility::Hidden);
        assert_eq!(transform.translation, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn hit_normal_aligns_the_reticle() {
        let mut transform = Transform::IDENTITY;
        let mut visibility = Visibility::Hidden;
        let hit = ReticleHit {
            point: Vec3::ZERO,
            normal: Vec3::X,
            distance: 1.0,
        };

        apply_reticle_hit(&mut transform, &mut visibility, Some(hit));

        let up = transform.rotation * Vec3::Y;
        assert!((up - Vec3::X).length() < 1e-5);
    }
}
