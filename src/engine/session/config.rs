use bevy::prelude::*;
use serde::{Deserialize, Serialize};

pub const SESSION_CONFIG_PATH: &'static str = "session/session.json";

/// One plane anchor the simulated session will report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaneSeed {
    /// World-space centre of the plane
    pub center: [f32; 3],
    /// Final half-extents in the plane's local XZ, metres
    pub half_extents: [f32; 2],
    /// Seconds after session start before this plane is reported
    pub detect_after: f32,
}

impl PlaneSeed {
    pub fn center(&self) -> Vec3 {
        Vec3::from_array(self.center)
    }

    pub fn target_half_extents(&self) -> Vec2 {
        Vec2::from_array(self.half_extents)
    }
}

/// Pose and size of the checkerboard anchor plane.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnchorConfig {
    pub position: [f32; 3],
    /// Rotation about world Y, degrees
    pub yaw_degrees: f32,
    /// Half the checkerboard edge length, metres
    pub half_extent: f32,
}

impl AnchorConfig {
    pub fn transform(&self) -> Transform {
        Transform::from_translation(Vec3::from_array(self.position))
            .with_rotation(Quat::from_rotation_y(self.yaw_degrees.to_radians()))
    }
}

/// Complete session description as a Bevy asset. Mirrors the JSON structure exactly.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath, Resource)]
pub struct SessionConfig {
    pub planes: Vec<PlaneSeed>,
    /// Seconds a detected plane takes to grow to its final extents
    pub plane_growth_secs: f32,
    /// Half-extent each plane starts from when first reported, metres
    pub initial_plane_extent: f32,
    pub anchor: AnchorConfig,
}

#[derive(Resource, Default)]
pub struct SessionConfigLoader {
    pub handle: Option<Handle<SessionConfig>>,
    pub loaded: bool,
}

/// Load the session config JSON and publish it as a typed resource
pub fn load_session_config(
    mut loader: ResMut<SessionConfigLoader>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    configs: Res<Assets<SessionConfig>>,
) {
    // Start loading if not already started
    if loader.handle.is_none() {
        loader.handle = Some(asset_server.load(SESSION_CONFIG_PATH));
        return;
    }

    // Check if loaded and not yet processed
    if !loader.loaded {
        if let Some(ref handle) = loader.handle {
            if let Some(config) = configs.get(handle) {
                println!(
                    "Successfully loaded session config ({} plane seed{})",
                    config.planes.len(),
                    if config.planes.len() == 1 { "" } else { "s" }
                );
                commands.insert_resource(config.clone());
                loader.loaded = true;
            }
        }
    }
}
