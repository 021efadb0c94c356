//! Player motion integration and wall response
//!
//! Per-tick transform over the player's velocity and the camera position:
//! damping, input acceleration, axis-separated collision resolution and
//! wall-sliding. Collision is tested per axis so being blocked on one axis
//! never cancels motion on the other.
//!
//! Integration uses a fixed step of 1/60 s per tick rather than a measured
//! frame delta, preserving the movement feel this tuning was done against.
//! At other refresh rates the walk speed scales with the frame rate.

use macroquad::math::{Vec3, vec3};

use crate::input::InputState;
use crate::world::Level;

use super::collision::{check_collision, Contact};

/// Exponential velocity decay factor, per second.
pub const DAMPING: f32 = 10.0;
/// Acceleration applied while a movement key is held, world units/s^2.
pub const ACCELERATION: f32 = 400.0;
/// Fixed integration step, in seconds.
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;

/// Horizontal world axis a collision blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Z,
}

/// Camera-position sink the motion controller drives.
///
/// `move_forward`/`move_right` translate along the camera's forward/right
/// directions projected onto the horizontal plane; `set_position` writes
/// world space directly (used by wall-sliding).
pub trait CameraRig {
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);
    fn move_forward(&mut self, amount: f32);
    fn move_right(&mut self, amount: f32);
}

/// Velocity-based walker with wall collision and sliding.
///
/// Sign convention: a positive input direction *decreases* the velocity
/// component, and translations are applied with the negated component, so
/// the two inversions cancel. Tentative positions are computed on world
/// axes while free-axis moves are applied camera-locally; changing either
/// half alone changes the movement feel.
pub struct MotionController {
    pub velocity: Vec3,
}

impl MotionController {
    pub fn new() -> Self {
        Self { velocity: Vec3::ZERO }
    }

    /// Advance one tick: damp, accelerate from input, then resolve and
    /// apply each axis independently against the level's walls.
    pub fn update(
        &mut self,
        level: &Level,
        input: &InputState,
        rig: &mut impl CameraRig,
        dt: f32,
    ) {
        self.velocity.x -= self.velocity.x * DAMPING * dt;
        self.velocity.z -= self.velocity.z * DAMPING * dt;

        let direction = vec3(
            (input.right as i32 - input.left as i32) as f32,
            0.0,
            (input.forward as i32 - input.backward as i32) as f32,
        )
        .normalize_or_zero();

        if input.forward || input.backward {
            self.velocity.z -= direction.z * ACCELERATION * dt;
        }
        if input.left || input.right {
            self.velocity.x -= direction.x * ACCELERATION * dt;
        }

        let position = rig.position();
        let new_x = position.x - self.velocity.x * dt;
        let new_z = position.z - self.velocity.z * dt;

        // Each axis is tested on its own against the tick-start partner
        // coordinate, which is what lets the player slide along a wall
        // instead of sticking to it.
        let collision_x = check_collision(level, new_x, position.z);
        let collision_z = check_collision(level, position.x, new_z);

        match collision_x {
            None => rig.move_right(-self.velocity.x * dt),
            Some(contact) => {
                self.velocity.x = 0.0;
                self.slide_along_wall(level, contact, Axis::X, rig, dt);
            }
        }

        match collision_z {
            None => rig.move_forward(-self.velocity.z * dt),
            Some(contact) => {
                self.velocity.z = 0.0;
                self.slide_along_wall(level, contact, Axis::Z, rig, dt);
            }
        }
    }

    /// Redirect blocked motion along the axis perpendicular to `axis`.
    ///
    /// The slide sign comes from the *blocked* axis's wall coordinate
    /// relative to the player even though the slide happens on the other
    /// axis, and the slide speed is the velocity magnitude left after the
    /// blocked component was zeroed. Both details are load-bearing for the
    /// movement feel; the tests pin them down. The slide is applied only
    /// if the destination itself is clear, otherwise the player simply
    /// stops on this axis for the tick.
    fn slide_along_wall(
        &self,
        level: &Level,
        contact: Contact,
        axis: Axis,
        rig: &mut impl CameraRig,
        dt: f32,
    ) {
        let position = rig.position();

        let mut slide = Vec3::ZERO;
        match axis {
            Axis::X => slide.z = if contact.wall_x > position.x { 1.0 } else { -1.0 },
            Axis::Z => slide.x = if contact.wall_z > position.z { 1.0 } else { -1.0 },
        }

        let speed = self.velocity.length();
        let target = position + slide * speed * dt;

        if check_collision(level, target.x, target.z).is_none() {
            rig.set_position(target);
        }
    }
}

impl Default for MotionController {
    fn default() -> Self {
        Self::new()
    }
}
