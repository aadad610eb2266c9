use bevy::prelude::*;

use crate::constants::{GRID_DIM, MATERIAL_STEPS, SPHERE_RADIUS, SPHERE_SPACING};

/// Marker for spheres belonging to the material sweep.
#[derive(Component)]
pub struct GridSphere;

/// One entry of the roughness × metallic sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereParams {
    pub row: usize,
    pub col: usize,
    pub roughness: f32,
    pub metallic: f32,
}

impl SphereParams {
    /// Local position relative to the anchor plane, resting on its surface
    pub fn local_position(&self) -> Vec3 {
        let offset = (GRID_DIM as f32 - 1.0) * 0.5;
        Vec3::new(
            (self.col as f32 - offset) * SPHERE_SPACING,
            SPHERE_RADIUS,
            (self.row as f32 - offset) * SPHERE_SPACING,
        )
    }
}

/// Fixed parameter sweep in row-major order: roughness by row, metallic by column
pub fn sphere_grid_params() -> Vec<SphereParams> {
    let mut params = Vec::with_capacity(GRID_DIM * GRID_DIM);
    for row in 0..GRID_DIM {
        for col in 0..GRID_DIM {
            params.push(SphereParams {
                row,
                col,
                roughness: MATERIAL_STEPS[row],
                metallic: MATERIAL_STEPS[col],
            });
        }
    }
    params
}

/// Spawn the sweep spheres as children of the anchor entity
pub fn spawn_sphere_grid(
    commands: &mut Commands,
    anchor: Entity,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let sphere_mesh = meshes.add(Sphere::new(SPHERE_RADIUS));
    let params = sphere_grid_params();

    commands.entity(anchor).with_children(|parent| {
        for p in &params {
            parent.spawn((
                Mesh3d(sphere_mesh.clone()),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgb(0.85, 0.85, 0.9),
                    perceptual_roughness: p.roughness,
                    metallic: p.metallic,
                    ..default()
                })),
                Transform::from_translation(p.local_position()),
                GridSphere,
                Name::new(format!("sphere_r{}_c{}", p.row, p.col)),
            ));
        }
    });

    println!("Spawned {} material sweep spheres", params.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_contains_exactly_nine_entries() {
        assert_eq!(sphere_grid_params().len(), 9);
    }

    #[test]
    fn parameters_come_from_the_fixed_steps() {
        for p in sphere_grid_params() {
            assert!(MATERIAL_STEPS.contains(&p.roughness));
            assert!(MATERIAL_STEPS.contains(&p.metallic));
        }
    }

    #[test]
    fn pairing_order_is_row_major() {
        let params = sphere_grid_params();

        // Roughness varies by row, metallic by column
        assert_eq!((params[0].roughness, params[0].metallic), (0.0, 0.0));
        assert_eq!((params[1].roughness, params[1].metallic), (0.0, 0.5));
        assert_eq!((params[4].roughness, params[4].metallic), (0.5, 0.5));
        assert_eq!((params[8].roughness, params[8].metallic), (1.0, 1.0));

        // Every roughness/metallic pairing appears exactly once
        for a in MATERIAL_STEPS {
            for b in MATERIAL_STEPS {
                let count = params
                    .iter()
                    .filter(|p| p.roughness == a && p.metallic == b)
                    .count();
                assert_eq!(count, 1, "pairing ({a}, {b}) should appear once");
            }
        }
    }

    #[test]
    fn grid_is_centred_on_the_anchor() {
        let sum: Vec3 = sphere_grid_params()
            .iter()
            .map(|p| p.local_position())
            .sum();
        let mean = sum / 9.0;
        assert!((mean.x).abs() < 1e-6);
        assert!((mean.z).abs() < 1e-6);
        assert_eq!(mean.y, SPHERE_RADIUS);
    }
}
