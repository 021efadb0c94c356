//! Block catalog
//!
//! Static lookup from block-type id to its properties. Defined once,
//! read-only for the lifetime of the process.

/// A tile block type: solidity plus the texture files for each surface.
///
/// Texture fields name files under `assets/textures/`; a `None` (or a
/// missing file) renders as a flat-colored surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockType {
    pub id: u8,
    pub name: &'static str,
    /// True if this block fills its tile and blocks player movement.
    pub solid: bool,
    pub wall_texture: Option<&'static str>,
    pub floor_texture: Option<&'static str>,
    pub ceiling_texture: Option<&'static str>,
}

/// The fixed set of block types levels may reference.
pub const BLOCK_TYPES: [BlockType; 4] = [
    BlockType {
        id: 0,
        name: "Stone empty",
        solid: false,
        wall_texture: None,
        floor_texture: Some("stone_floor.png"),
        ceiling_texture: Some("stone_ceiling.png"),
    },
    BlockType {
        id: 1,
        name: "Stone wall",
        solid: true,
        wall_texture: Some("stone_wall.png"),
        floor_texture: Some("stone_floor.png"),
        ceiling_texture: Some("stone_ceiling.png"),
    },
    BlockType {
        id: 2,
        name: "Wood wall",
        solid: true,
        wall_texture: Some("wood_wall.png"),
        floor_texture: Some("stone_floor.png"),
        ceiling_texture: Some("stone_ceiling.png"),
    },
    BlockType {
        id: 3,
        name: "Dirt wall",
        solid: true,
        wall_texture: Some("dirt_wall.png"),
        floor_texture: Some("stone_floor.png"),
        ceiling_texture: Some("stone_ceiling.png"),
    },
];

/// Look up a block type by id.
pub fn block_type(id: u8) -> Option<&'static BlockType> {
    BLOCK_TYPES.iter().find(|b| b.id == id)
}
