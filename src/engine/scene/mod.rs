//! One-time static scene construction.
//!
//! The scene graph is fixed for the lifetime of the run: lights, a
//! checkerboard anchor plane at the configured pose, and a 3×3 grid of PBR
//! spheres parented under the anchor. Nothing here is mutated after spawn.

/// Directional and ambient lighting for the PBR sweep.
pub mod lighting;

/// Procedural checkerboard texture and anchor plane entity.
pub mod checkerboard;

/// Roughness × metallic sphere grid parented under the anchor.
pub mod sphere_grid;

use bevy::prelude::*;

use crate::engine::session::config::SessionConfig;
use checkerboard::spawn_checkerboard_anchor;
use lighting::spawn_lighting;
use sphere_grid::spawn_sphere_grid;

/// Build the full static scene once the session config is available
pub fn build_static_scene(
    mut commands: Commands,
    config: Res<SessionConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
) {
    spawn_lighting(&mut commands);

    let anchor = spawn_checkerboard_anchor(
        &mut commands,
        &config.anchor,
        &mut meshes,
        &mut materials,
        &mut images,
    );

    spawn_sphere_grid(&mut commands, anchor, &mut meshes, &mut materials);
}
