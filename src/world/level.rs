//! Level data: tile grids, spawn descriptors and the built-in level table
//!
//! Levels are authored as RON (Rusty Object Notation) under `assets/levels/`
//! and embedded into the binary. Every level is validated on load so the
//! collision and geometry code can trust the grid afterwards.

use std::collections::HashMap;
use std::f32::consts::{FRAC_PI_2, PI};

use macroquad::math::{vec3, Vec3};
use serde::{Deserialize, Serialize};

use super::blocks::block_type;

/// Side length of one grid tile in world units.
pub const TILE_SIZE: f32 = 64.0;

/// Tile index containing a continuous world coordinate (many-to-one).
pub fn world_to_tile(coord: f32) -> i32 {
    (coord / TILE_SIZE).floor() as i32
}

/// World coordinate of a tile's center.
pub fn tile_to_world(tile: i32) -> f32 {
    tile as f32 * TILE_SIZE + TILE_SIZE / 2.0
}

/// Error type for level lookup and loading
#[derive(Debug)]
pub enum LevelError {
    /// Requested level id is not in the store.
    NotFound(String),
    ParseError(ron::error::SpannedError),
    /// The level data itself is malformed (caught at load, never at runtime).
    Invalid { level: String, reason: String },
}

impl From<ron::error::SpannedError> for LevelError {
    fn from(e: ron::error::SpannedError) -> Self {
        LevelError::ParseError(e)
    }
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::NotFound(id) => write!(f, "level '{}' not found", id),
            LevelError::ParseError(e) => write!(f, "parse error: {}", e),
            LevelError::Invalid { level, reason } => {
                write!(f, "invalid level '{}': {}", level, reason)
            }
        }
    }
}

/// Cardinal facing direction for spawn descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    North,
    East,
    South,
    West,
}

impl Facing {
    /// Yaw angle in radians. East is 0 and yaw grows toward south, so the
    /// forward vector is `(cos yaw, 0, sin yaw)`.
    pub fn yaw(self) -> f32 {
        match self {
            Facing::North => -FRAC_PI_2,
            Facing::East => 0.0,
            Facing::South => FRAC_PI_2,
            Facing::West => PI,
        }
    }
}

/// Spawn descriptor: tile coordinates plus initial facing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Spawn {
    pub x: i32,
    pub z: i32,
    pub facing: Facing,
}

/// A playable level: rectangular grid of block-type ids plus a spawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    /// Rows of block-type ids; `grid[z][x]`, row 0 is the north edge.
    pub grid: Vec<Vec<u8>>,
    pub spawn: Spawn,
}

impl Level {
    /// Grid width in tiles.
    pub fn width(&self) -> usize {
        self.grid.first().map_or(0, |row| row.len())
    }

    /// Grid height in tiles.
    pub fn height(&self) -> usize {
        self.grid.len()
    }

    /// Block-type id at a tile, if the tile is in bounds.
    pub fn block_id_at(&self, tile_x: i32, tile_z: i32) -> Option<u8> {
        if tile_x < 0 || tile_z < 0 {
            return None;
        }
        self.grid
            .get(tile_z as usize)
            .and_then(|row| row.get(tile_x as usize))
            .copied()
    }

    /// World-space spawn position: spawn tile center, eye height at half a
    /// tile.
    pub fn spawn_position(&self) -> Vec3 {
        vec3(
            tile_to_world(self.spawn.x),
            TILE_SIZE * 0.5,
            tile_to_world(self.spawn.z),
        )
    }

    /// Check structural invariants. Called once at load so collision lookups
    /// never see malformed data.
    pub fn validate(&self) -> Result<(), String> {
        if self.grid.is_empty() {
            return Err("grid has no rows".to_string());
        }
        let width = self.grid[0].len();
        if width == 0 {
            return Err("grid rows are empty".to_string());
        }
        for (z, row) in self.grid.iter().enumerate() {
            if row.len() != width {
                return Err(format!(
                    "grid is not rectangular: row {} has {} tiles, expected {}",
                    z,
                    row.len(),
                    width
                ));
            }
            for (x, &id) in row.iter().enumerate() {
                if block_type(id).is_none() {
                    return Err(format!("unknown block id {} at tile ({}, {})", id, x, z));
                }
            }
        }
        let (w, h) = (width as i32, self.grid.len() as i32);
        if self.spawn.x < 0 || self.spawn.x >= w || self.spawn.z < 0 || self.spawn.z >= h {
            return Err(format!(
                "spawn tile ({}, {}) is outside the {}x{} grid",
                self.spawn.x, self.spawn.z, w, h
            ));
        }
        Ok(())
    }
}

/// Parse and validate a level from a RON string.
pub fn load_level_from_str(id: &str, s: &str) -> Result<Level, LevelError> {
    let level: Level = ron::from_str(s)?;
    level.validate().map_err(|reason| LevelError::Invalid {
        level: id.to_string(),
        reason,
    })?;
    Ok(level)
}

/// Levels bundled into the binary, keyed by id.
const BUILTIN_LEVELS: [(&str, &str); 1] = [(
    "starter-dungeon",
    include_str!("../../assets/levels/starter-dungeon.ron"),
)];

/// Immutable table of loaded levels, keyed by id.
pub struct LevelStore {
    levels: HashMap<String, Level>,
}

impl LevelStore {
    /// Parse and validate all built-in levels.
    pub fn builtin() -> Result<Self, LevelError> {
        let mut levels = HashMap::new();
        for (id, source) in BUILTIN_LEVELS {
            let level = load_level_from_str(id, source)?;
            levels.insert(id.to_string(), level);
        }
        Ok(Self { levels })
    }

    /// Look up a level by id.
    pub fn get(&self, id: &str) -> Result<&Level, LevelError> {
        self.levels
            .get(id)
            .ok_or_else(|| LevelError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_room(spawn: Spawn) -> Level {
        Level {
            name: "room".to_string(),
            grid: vec![vec![1, 1, 1], vec![1, 0, 1], vec![1, 1, 1]],
            spawn,
        }
    }

    #[test]
    fn test_tile_mapping_round_trip() {
        assert_eq!(world_to_tile(0.0), 0);
        assert_eq!(world_to_tile(63.9), 0);
        assert_eq!(world_to_tile(64.0), 1);
        assert_eq!(world_to_tile(-0.1), -1);
        assert_eq!(tile_to_world(0), 32.0);
        assert_eq!(tile_to_world(6), 416.0);
        assert_eq!(world_to_tile(tile_to_world(5)), 5);
    }

    #[test]
    fn test_facing_yaw_table() {
        assert_eq!(Facing::North.yaw(), -FRAC_PI_2);
        assert_eq!(Facing::East.yaw(), 0.0);
        assert_eq!(Facing::South.yaw(), FRAC_PI_2);
        assert_eq!(Facing::West.yaw(), PI);
    }

    #[test]
    fn test_spawn_position_from_tile() {
        let store = LevelStore::builtin().unwrap();
        let level = store.get("starter-dungeon").unwrap();
        assert_eq!(level.spawn.x, 6);
        assert_eq!(level.spawn.z, 3);
        assert_eq!(level.spawn_position(), vec3(416.0, 32.0, 224.0));
        assert_eq!(level.spawn.facing.yaw(), FRAC_PI_2);
    }

    #[test]
    fn test_builtin_store_contains_starter_dungeon() {
        let store = LevelStore::builtin().unwrap();
        let level = store.get("starter-dungeon").unwrap();
        assert_eq!(level.width(), 8);
        assert_eq!(level.height(), 8);
        assert_eq!(level.block_id_at(2, 2), Some(2));
        assert_eq!(level.block_id_at(5, 2), Some(3));
        assert_eq!(level.block_id_at(8, 0), None);
    }

    #[test]
    fn test_unknown_level_id_is_reported_not_panicked() {
        let store = LevelStore::builtin().unwrap();
        match store.get("nonexistent") {
            Err(LevelError::NotFound(id)) => assert_eq!(id, "nonexistent"),
            other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_validate_rejects_ragged_grid() {
        let mut level = open_room(Spawn { x: 1, z: 1, facing: Facing::North });
        level.grid[1].push(0);
        let err = level.validate().unwrap_err();
        assert!(err.contains("not rectangular"), "{}", err);
    }

    #[test]
    fn test_validate_rejects_empty_grid() {
        let level = Level {
            name: "empty".to_string(),
            grid: Vec::new(),
            spawn: Spawn { x: 0, z: 0, facing: Facing::North },
        };
        assert!(level.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_bounds_spawn() {
        let level = open_room(Spawn { x: 3, z: 1, facing: Facing::East });
        let err = level.validate().unwrap_err();
        assert!(err.contains("spawn"), "{}", err);

        let level = open_room(Spawn { x: 1, z: -1, facing: Facing::East });
        assert!(level.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_block_id() {
        let mut level = open_room(Spawn { x: 1, z: 1, facing: Facing::West });
        level.grid[0][0] = 9;
        let err = level.validate().unwrap_err();
        assert!(err.contains("unknown block id 9"), "{}", err);
    }

    #[test]
    fn test_load_from_str_validates() {
        let ron = r#"(
            name: "bad",
            grid: [[1, 1], [1]],
            spawn: (x: 0, z: 0, facing: North),
        )"#;
        match load_level_from_str("bad", ron) {
            Err(LevelError::Invalid { level, .. }) => assert_eq!(level, "bad"),
            other => panic!("expected Invalid, got {:?}", other.map(|_| ())),
        }
    }
}
