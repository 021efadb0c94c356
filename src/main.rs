//! Delve Engine: first-person grid-based dungeon walker
//!
//! A tile-indexed map rendered as floor/ceiling/wall geometry, walked by a
//! pointer-captured first-person camera:
//! - Velocity-based motion with per-axis wall collision
//! - Wall-sliding so blocked movement stays smooth
//! - RON level table with load-time validation

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod camera;
mod input;
mod session;
mod sim;
mod textures;
mod world;

use macroquad::prelude::*;

use input::InputState;
use session::GameSession;
use textures::TileTextures;
use world::LevelStore;

const START_LEVEL: &str = "starter-dungeon";

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Delve Engine v{}", VERSION),
        window_width: 1280,
        window_height: 720,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    println!("=== Delve Engine ===");

    let store = match LevelStore::builtin() {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Failed to load built-in levels: {}", e);
            return;
        }
    };

    // A failed load leaves us without a playable session; report and quit
    // rather than crash.
    let mut session = match GameSession::load(&store, START_LEVEL, TileTextures::load()) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Failed to start level '{}': {}", START_LEVEL, e);
            return;
        }
    };

    let mut last_mouse = mouse_position();

    loop {
        // Pointer capture: click grabs the cursor, Escape releases it.
        // Movement only integrates while captured.
        if is_mouse_button_pressed(MouseButton::Left) && !session.camera.captured {
            set_cursor_grab(true);
            show_mouse(false);
            session.camera.captured = true;
            last_mouse = mouse_position();
        }
        if is_key_pressed(KeyCode::Escape) && session.camera.captured {
            set_cursor_grab(false);
            show_mouse(true);
            session.camera.captured = false;
        }

        let mouse = mouse_position();
        if session.camera.captured {
            session.camera.look(mouse.0 - last_mouse.0, mouse.1 - last_mouse.1);
        }
        last_mouse = mouse;

        let input = InputState::poll();
        session.tick(&input);
        session.draw();

        next_frame().await;
    }
}
