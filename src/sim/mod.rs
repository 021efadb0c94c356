//! Simulation module - movement and collision
//!
//! The core of the walker: pure tile collision queries and the per-tick
//! motion integrator that drives the camera position through them.

mod collision;
mod motion;

pub use collision::*;
pub use motion::*;
