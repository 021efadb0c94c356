//! Render geometry for tile grids
//!
//! Converts a level's grid into a flat list of positioned render objects:
//! a floor and ceiling quad per tile, plus a full-tile cube for every solid
//! block. The list is built once per level load and consumed by the draw
//! pass; no rendering state lives here.

use macroquad::math::{vec3, Vec3};

use super::blocks::block_type;
use super::level::{tile_to_world, Level, TILE_SIZE};

/// Which surface of a tile a render object covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    Floor,
    Ceiling,
    Wall,
}

/// One positioned quad or cube with the block whose texture it uses.
#[derive(Debug, Clone, Copy)]
pub struct RenderObject {
    pub surface: Surface,
    pub block: u8,
    /// World-space center of the quad/cube.
    pub center: Vec3,
}

/// Build the render list for a level.
///
/// Floors sit at y=0, ceilings at y=`TILE_SIZE`, wall cubes are centered at
/// half height. Solid tiles keep their floor and ceiling underneath the
/// cube, so carving a block out of a map never exposes a hole.
pub fn build_level_geometry(level: &Level) -> Vec<RenderObject> {
    let mut objects = Vec::with_capacity(level.width() * level.height() * 2);

    for (z, row) in level.grid.iter().enumerate() {
        for (x, &id) in row.iter().enumerate() {
            let cx = tile_to_world(x as i32);
            let cz = tile_to_world(z as i32);

            objects.push(RenderObject {
                surface: Surface::Floor,
                block: id,
                center: vec3(cx, 0.0, cz),
            });
            objects.push(RenderObject {
                surface: Surface::Ceiling,
                block: id,
                center: vec3(cx, TILE_SIZE, cz),
            });

            if block_type(id).is_some_and(|b| b.solid) {
                objects.push(RenderObject {
                    surface: Surface::Wall,
                    block: id,
                    center: vec3(cx, TILE_SIZE / 2.0, cz),
                });
            }
        }
    }

    objects
}
