/// Shared configuration for the material grid scene

/// Parameter steps swept across the sphere grid (roughness by row, metallic by column)
pub const MATERIAL_STEPS: [f32; 3] = [0.0, 0.5, 1.0];

/// Sphere grid dimension (grid is GRID_DIM x GRID_DIM)
pub const GRID_DIM: usize = 3;

/// Sphere radius in metres
pub const SPHERE_RADIUS: f32 = 0.08;

/// Centre-to-centre sphere spacing in metres
pub const SPHERE_SPACING: f32 = 0.22;

/// Checkerboard texture edge length in pixels
pub const CHECKER_TEXTURE_SIZE: usize = 256;

/// Checkerboard cells per texture edge
pub const CHECKER_CELLS: usize = 8;

/// Reticle disc diameter in metres
pub const RETICLE_SIZE: f32 = 0.18;
