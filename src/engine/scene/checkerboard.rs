use bevy::asset::RenderAssetUsages;
use bevy::image::ImageSampler;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use crate::constants::{CHECKER_CELLS, CHECKER_TEXTURE_SIZE};
use crate::engine::session::config::AnchorConfig;

/// Marker for the checkerboard plane the sphere grid is parented under.
#[derive(Component)]
pub struct AnchorPlane;

const LIGHT_CELL: [u8; 4] = [230, 230, 230, 255];
const DARK_CELL: [u8; 4] = [40, 40, 40, 255];

/// Spawn the anchor plane at the configured pose, returning its entity
pub fn spawn_checkerboard_anchor(
    commands: &mut Commands,
    anchor: &AnchorConfig,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    images: &mut ResMut<Assets<Image>>,
) -> Entity {
    let texture = images.add(create_checkerboard_image(
        CHECKER_TEXTURE_SIZE,
        CHECKER_CELLS,
    ));

    let material = materials.add(StandardMaterial {
        base_color_texture: Some(texture),
        perceptual_roughness: 0.9,
        metallic: 0.0,
        ..default()
    });

    let edge = anchor.half_extent * 2.0;

    commands
        .spawn((
            Mesh3d(meshes.add(Plane3d::default().mesh().size(edge, edge))),
            MeshMaterial3d(material),
            anchor.transform(),
            AnchorPlane,
            Name::new("checkerboard_anchor"),
        ))
        .id()
}

/// Build the checker texture with nearest sampling for crisp cell edges
fn create_checkerboard_image(size: usize, cells: usize) -> Image {
    let mut image = Image::new(
        Extent3d {
            width: size as u32,
            height: size as u32,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        checkerboard_pixels(size, cells),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    );
    image.sampler = ImageSampler::nearest();
    image
}

/// Generate RGBA8 pixel data for a `cells` x `cells` checker pattern
pub fn checkerboard_pixels(size: usize, cells: usize) -> Vec<u8> {
    let cell_px = (size / cells).max(1);
    let mut pixels = Vec::with_capacity(size * size * 4);

    for y in 0..size {
        for x in 0..size {
            let light = ((x / cell_px) + (y / cell_px)) % 2 == 0;
            pixels.extend_from_slice(if light { &LIGHT_CELL } else { &DARK_CELL });
        }
    }

    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(pixels: &[u8], size: usize, x: usize, y: usize) -> [u8; 4] {
        let i = (y * size + x) * 4;
        [pixels[i], pixels[i + 1], pixels[i + 2], pixels[i + 3]]
    }

    #[test]
    fn pixel_buffer_covers_full_texture() {
        let pixels = checkerboard_pixels(64, 8);
        assert_eq!(pixels.len(), 64 * 64 * 4);
    }

    #[test]
    fn adjacent_cells_alternate() {
        let size = 64;
        let cells = 8;
        let cell_px = size / cells;
        let pixels = checkerboard_pixels(size, cells);

        let origin = pixel(&pixels, size, 0, 0);
        let right = pixel(&pixels, size, cell_px, 0);
        let below = pixel(&pixels, size, 0, cell_px);
        let diagonal = pixel(&pixels, size, cell_px, cell_px);

        assert_eq!(origin, LIGHT_CELL);
        assert_eq!(right, DARK_CELL);
        assert_eq!(below, DARK_CELL);
        assert_eq!(diagonal, LIGHT_CELL);
    }

    #[test]
    fn pixels_within_one_cell_match() {
        let size = 64;
        let pixels = checkerboard_pixels(size, 8);
        assert_eq!(pixel(&pixels, size, 1, 1), pixel(&pixels, size, 6, 6));
    }
}
