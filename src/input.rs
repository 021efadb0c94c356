//! Keyboard input snapshot
//!
//! Movement is driven from a momentary snapshot of key state taken once at
//! the top of each tick (last-known-state, no queuing). The snapshot is a
//! plain value so the simulation can be exercised without a window.

use macroquad::prelude::{is_key_down, KeyCode};

/// Pressed-state of the four movement keys for one tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    /// Snapshot the movement keys (WASD plus arrows).
    pub fn poll() -> Self {
        Self {
            forward: is_key_down(KeyCode::W) || is_key_down(KeyCode::Up),
            backward: is_key_down(KeyCode::S) || is_key_down(KeyCode::Down),
            left: is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
        }
    }
}
