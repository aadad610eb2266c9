use bevy::prelude::*;

/// Intersect a world-space ray with a bounded plane posed by `xf`.
///
/// The plane spans `±half_extents` around its origin in local XZ with a +Y
/// normal. Scale on the transform is ignored; extents are tested explicitly so
/// the returned `t` stays in world units.
pub fn ray_hits_plane(
    origin: Vec3,
    dir: Vec3,
    xf: &GlobalTransform,
    half_extents: Vec2,
) -> Option<f32> {
    let (_, rotation, translation) = xf.to_scale_rotation_translation();
    let inv = rotation.inverse();
    let o_local = inv * (origin - translation);
    let d_local = inv * dir;
    ray_bounded_plane_hit_t(o_local, d_local, half_extents)
}

// Local-space test against the y=0 rectangle spanning ±half_extents, returns Some(t) or None
pub fn ray_bounded_plane_hit_t(
    ray_origin: Vec3,
    ray_direction: Vec3,
    half_extents: Vec2,
) -> Option<f32> {
    if ray_direction.y.abs() < 1e-6 {
        return None;
    }

    let t = -ray_origin.y / ray_direction.y;
    if t <= 0.0 {
        return None;
    }

    let hit = ray_origin + ray_direction * t;
    if hit.x.abs() <= half_extents.x && hit.z.abs() <= half_extents.y {
        Some(t)
    } else {
        None
    }
}
