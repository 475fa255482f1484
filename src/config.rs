//! Simulation Constants
//!
//! All physics and tile constants live in one frozen structure that is
//! passed by reference to the body, the collision resolver, and the pickup
//! scan. Nothing here is mutable at runtime.

use serde::{Serialize, Deserialize};

/// Width of the game window (pixels)
pub const WINDOW_WIDTH: i32 = 800;
/// Height of the game window (pixels)
pub const WINDOW_HEIGHT: i32 = 600;

/// Physics and tile configuration, fixed for the whole session.
///
/// Units are pixels and frames: the simulation runs one fixed step per
/// frame, so velocities are pixels/frame and gravity is pixels/frame^2.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Downward acceleration added to vertical velocity every step.
    /// There is no terminal-velocity clamp.
    pub gravity: f32,
    /// Horizontal speed while a move intent is held
    pub move_speed: f32,
    /// Vertical velocity set by a jump (negative is up)
    pub jump_velocity: f32,
    /// Width and height of each tile (pixels)
    pub tile_size: f32,
    /// Inset applied to box edges before tile-index conversion, so a body
    /// flush against a tile boundary does not register in the next tile
    pub collision_epsilon: f32,
}

impl PhysicsConfig {
    pub const DEFAULT: Self = Self {
        gravity: 0.8,
        move_speed: 5.0,
        jump_velocity: -18.0,
        tile_size: 40.0,
        collision_epsilon: 0.01,
    };
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_ron_round_trip() {
        let config = PhysicsConfig::DEFAULT;
        let text = ron::to_string(&config).unwrap();
        let back: PhysicsConfig = ron::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
