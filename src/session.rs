//! Game session
//!
//! Owns everything a playable level needs: the level data, its render
//! list, the tile textures, the first-person camera and the motion
//! controller. The per-frame work is split into `tick` (fixed-step
//! integration, gated on pointer capture) and `draw`.

use macroquad::prelude::*;

use crate::camera::FirstPersonCamera;
use crate::input::InputState;
use crate::sim::{MotionController, FIXED_TIMESTEP};
use crate::textures::TileTextures;
use crate::world::{build_level_geometry, Level, LevelError, LevelStore, RenderObject, Surface, TILE_SIZE};

pub struct GameSession {
    level: Level,
    geometry: Vec<RenderObject>,
    textures: TileTextures,
    pub camera: FirstPersonCamera,
    motion: MotionController,
}

impl GameSession {
    /// Load a level from the store and spawn the player on it.
    ///
    /// Fails with the store's error for unknown ids; the caller decides
    /// whether that leaves it without a session.
    pub fn load(store: &LevelStore, id: &str, textures: TileTextures) -> Result<Self, LevelError> {
        let level = store.get(id)?.clone();
        let geometry = build_level_geometry(&level);
        let camera = FirstPersonCamera::new(level.spawn_position(), level.spawn.facing.yaw());

        println!(
            "Loaded '{}' ({}x{} tiles, {} render objects)",
            level.name,
            level.width(),
            level.height(),
            geometry.len()
        );

        Ok(Self {
            level,
            geometry,
            textures,
            camera,
            motion: MotionController::new(),
        })
    }

    /// Advance one fixed timestep. Input is ignored (but not reset) while
    /// the cursor is not captured, mirroring pointer-lock behavior.
    pub fn tick(&mut self, input: &InputState) {
        if !self.camera.captured {
            return;
        }
        self.motion
            .update(&self.level, input, &mut self.camera, FIXED_TIMESTEP);
    }

    /// Draw the level and the 2D overlay.
    pub fn draw(&self) {
        clear_background(Color::from_rgba(12, 10, 14, 255));
        set_camera(&self.camera.to_camera3d());

        let half = TILE_SIZE / 2.0;
        for object in &self.geometry {
            let texture = self.textures.get(object.block, object.surface);
            let color = if texture.is_some() {
                WHITE
            } else {
                // Untextured surfaces get flat shading so geometry stays
                // readable.
                match object.surface {
                    Surface::Floor => DARKGRAY,
                    Surface::Ceiling => Color::from_rgba(60, 56, 52, 255),
                    Surface::Wall => GRAY,
                }
            };

            match object.surface {
                Surface::Floor | Surface::Ceiling => {
                    draw_plane(object.center, vec2(half, half), texture, color);
                }
                Surface::Wall => {
                    draw_cube(object.center, vec3(TILE_SIZE, TILE_SIZE, TILE_SIZE), texture, color);
                }
            }
        }

        set_default_camera();
        self.draw_overlay();
    }

    fn draw_overlay(&self) {
        let (cx, cy) = (screen_width() / 2.0, screen_height() / 2.0);
        draw_line(cx - 6.0, cy, cx + 6.0, cy, 1.5, WHITE);
        draw_line(cx, cy - 6.0, cx, cy + 6.0, 1.5, WHITE);

        if !self.camera.captured {
            let hint = "Click to capture the mouse - WASD to move, Esc to release";
            let size = measure_text(hint, None, 24, 1.0);
            draw_text(
                hint,
                cx - size.width / 2.0,
                cy - 40.0,
                24.0,
                WHITE,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_load_spawns_camera_from_level() {
        let store = LevelStore::builtin().unwrap();
        let session = GameSession::load(&store, "starter-dungeon", TileTextures::default()).unwrap();
        assert_eq!(session.camera.position, vec3(416.0, 32.0, 224.0));
        assert_eq!(session.camera.yaw, FRAC_PI_2);
        assert!(!session.camera.captured);
        assert_eq!(session.geometry.len(), 128 + 35);
    }

    #[test]
    fn test_load_unknown_level_reports_error() {
        let store = LevelStore::builtin().unwrap();
        match GameSession::load(&store, "nonexistent", TileTextures::default()) {
            Err(LevelError::NotFound(id)) => assert_eq!(id, "nonexistent"),
            _ => panic!("expected NotFound"),
        }
    }

    #[test]
    fn test_tick_is_inert_until_captured() {
        let store = LevelStore::builtin().unwrap();
        let mut session =
            GameSession::load(&store, "starter-dungeon", TileTextures::default()).unwrap();
        let input = InputState { forward: true, ..Default::default() };

        session.tick(&input);
        assert_eq!(session.camera.position, vec3(416.0, 32.0, 224.0));

        session.camera.captured = true;
        session.tick(&input);
        assert_ne!(session.camera.position, vec3(416.0, 32.0, 224.0));
    }
}
