//! Tile texture loading
//!
//! Decodes the block catalog's PNG files from `assets/textures/` and
//! uploads them as nearest-filtered textures (crisp texels, no smearing).
//! Missing or broken files fall back to a generated checker so the game
//! stays runnable without any assets on disk.

use std::collections::HashMap;
use std::path::Path;

use macroquad::prelude::{FilterMode, Texture2D};

use crate::world::{Surface, BLOCK_TYPES};

const CHECKER_SIZE: u16 = 64;

/// Loaded textures keyed by block id and surface. An empty set is valid:
/// every miss draws as a flat-colored surface.
#[derive(Default)]
pub struct TileTextures {
    map: HashMap<(u8, Surface), Texture2D>,
}

impl TileTextures {
    /// Load every texture the block catalog references.
    pub fn load() -> Self {
        let mut map = HashMap::new();

        for block in &BLOCK_TYPES {
            let surfaces = [
                (Surface::Wall, block.wall_texture),
                (Surface::Floor, block.floor_texture),
                (Surface::Ceiling, block.ceiling_texture),
            ];
            for (surface, file) in surfaces {
                let Some(file) = file else { continue };
                let texture = match load_png(file) {
                    Some(texture) => texture,
                    None => {
                        println!("No {:?} texture for '{}', using placeholder", surface, block.name);
                        checker_texture(surface)
                    }
                };
                texture.set_filter(FilterMode::Nearest);
                map.insert((block.id, surface), texture);
            }
        }

        println!("Loaded {} tile textures", map.len());
        Self { map }
    }

    pub fn get(&self, block: u8, surface: Surface) -> Option<&Texture2D> {
        self.map.get(&(block, surface))
    }
}

/// Decode one PNG from the textures directory.
fn load_png(file: &str) -> Option<Texture2D> {
    let path = Path::new("assets/textures").join(file);
    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(_) => return None,
    };
    match image::load_from_memory(&bytes) {
        Ok(decoded) => {
            let rgba = decoded.to_rgba8();
            let (w, h) = (rgba.width() as u16, rgba.height() as u16);
            Some(Texture2D::from_rgba8(w, h, &rgba.into_raw()))
        }
        Err(e) => {
            eprintln!("Failed to decode {}: {}", path.display(), e);
            None
        }
    }
}

/// Two-tone placeholder checker, shaded per surface so walls, floors and
/// ceilings stay distinguishable without assets.
fn checker_texture(surface: Surface) -> Texture2D {
    let (bright, dark) = match surface {
        Surface::Floor => ([112, 106, 98], [90, 85, 78]),
        Surface::Ceiling => ([74, 70, 64], [58, 55, 50]),
        Surface::Wall => ([130, 128, 132], [104, 102, 106]),
    };

    let size = CHECKER_SIZE as usize;
    let mut bytes = Vec::with_capacity(size * size * 4);
    for y in 0..size {
        for x in 0..size {
            let cell = (x / 8 + y / 8) % 2 == 0;
            let [r, g, b] = if cell { bright } else { dark };
            bytes.extend_from_slice(&[r, g, b, 255]);
        }
    }

    Texture2D::from_rgba8(CHECKER_SIZE, CHECKER_SIZE, &bytes)
}
