//! First-person camera
//!
//! Position, yaw and pitch plus the capture flag that gates movement.
//! Yaw follows the spawn-facing convention: east is 0 and yaw grows toward
//! south, so the horizontal forward vector is `(cos yaw, 0, sin yaw)`.

use macroquad::prelude::{vec3, Camera3D, Vec3};

use crate::sim::CameraRig;

/// Vertical look limit, just short of straight up/down.
const PITCH_LIMIT: f32 = 1.55;
/// Mouse-look radians per pixel of mouse travel.
const MOUSE_SENSITIVITY: f32 = 0.002;

/// First-person camera with pointer-capture state.
pub struct FirstPersonCamera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    /// True while the cursor is grabbed; motion only integrates then.
    pub captured: bool,
}

impl FirstPersonCamera {
    pub fn new(position: Vec3, yaw: f32) -> Self {
        Self {
            position,
            yaw,
            pitch: 0.0,
            captured: false,
        }
    }

    /// Horizontal forward direction (ignores pitch).
    fn forward_flat(&self) -> Vec3 {
        vec3(self.yaw.cos(), 0.0, self.yaw.sin())
    }

    /// Horizontal right direction.
    fn right_flat(&self) -> Vec3 {
        vec3(-self.yaw.sin(), 0.0, self.yaw.cos())
    }

    /// Apply a mouse delta in pixels to yaw/pitch. Pitch is clamped so the
    /// view never flips over the vertical.
    pub fn look(&mut self, delta_x: f32, delta_y: f32) {
        self.yaw += delta_x * MOUSE_SENSITIVITY;
        self.pitch = (self.pitch - delta_y * MOUSE_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// View direction including pitch, for rendering.
    pub fn look_dir(&self) -> Vec3 {
        vec3(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
    }

    /// Build the macroquad 3D camera for this frame.
    pub fn to_camera3d(&self) -> Camera3D {
        Camera3D {
            position: self.position,
            target: self.position + self.look_dir(),
            up: vec3(0.0, 1.0, 0.0),
            ..Default::default()
        }
    }
}

impl CameraRig for FirstPersonCamera {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn move_forward(&mut self, amount: f32) {
        self.position += self.forward_flat() * amount;
    }

    fn move_right(&mut self, amount: f32) {
        self.position += self.right_flat() * amount;
    }
}
