//! Tile collision detection
//!
//! Pure functions from continuous world coordinates to tile solidity. The
//! player is treated as a circle and each solid tile as a square with a
//! combined radius threshold, so detection near tile corners is slightly
//! approximate. All functions are total: out-of-bounds queries read as
//! solid instead of failing.

use macroquad::math::vec2;

use crate::world::{block_type, tile_to_world, world_to_tile, Level, TILE_SIZE};

/// Radius of the player's collision circle in world units.
pub const PLAYER_RADIUS: f32 = 20.0;

/// A detected wall contact: the world-space center of the blocking tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub wall_x: f32,
    pub wall_z: f32,
}

/// Whether the tile at `(tile_x, tile_z)` blocks movement.
///
/// Anything outside the grid is solid, so missing geometry at the level
/// boundary can never be walked through. A block id missing from the
/// catalog reads as solid for the same reason (load-time validation makes
/// that unreachable for store levels).
pub fn is_wall_at(level: &Level, tile_x: i32, tile_z: i32) -> bool {
    match level.block_id_at(tile_x, tile_z) {
        Some(id) => block_type(id).map_or(true, |b| b.solid),
        None => true,
    }
}

/// Test a world-space position against the walls around it.
///
/// Examines the 3x3 tile neighborhood of the containing tile, rows first
/// (z outer, x inner), and reports the first solid tile whose center lies
/// within `PLAYER_RADIUS + TILE_SIZE / 2` of the position. First hit in
/// iteration order wins; there is no search for the nearest wall, so the
/// reported contact is deterministic but not necessarily the closest.
pub fn check_collision(level: &Level, x: f32, z: f32) -> Option<Contact> {
    let map_x = world_to_tile(x);
    let map_z = world_to_tile(z);

    for offset_z in -1..=1 {
        for offset_x in -1..=1 {
            let tile_x = map_x + offset_x;
            let tile_z = map_z + offset_z;
            if !is_wall_at(level, tile_x, tile_z) {
                continue;
            }

            let wall_x = tile_to_world(tile_x);
            let wall_z = tile_to_world(tile_z);
            let distance = vec2(x, z).distance(vec2(wall_x, wall_z));

            if distance < PLAYER_RADIUS + TILE_SIZE / 2.0 {
                return Some(Contact { wall_x, wall_z });
            }
        }
    }

    None
}
