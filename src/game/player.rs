//! Player Body
//!
//! Kinematic state for the player: an axis-aligned box (center position +
//! fixed half-extents), a velocity, a grounded flag, and the coin score.
//! Pure data and integration; collision corrections live in `collision`.

use macroquad::prelude::{vec2, Rect, Vec2};

use crate::config::PhysicsConfig;

/// The player's physics state. Rendering reads this; it never reads back.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    /// Center of the bounding box (pixels)
    pub position: Vec2,
    /// Velocity in pixels/frame
    pub velocity: Vec2,
    /// Standing on a solid tile? Set by the resolver each step.
    pub grounded: bool,
    /// Coins collected
    pub score: u32,
    // Fixed for the body's lifetime
    half_extents: Vec2,
}

impl Player {
    /// Create a player centered at `position`. The box is slightly smaller
    /// than a tile (0.8 x 0.95 of the tile size) so it fits through
    /// single-tile gaps.
    pub fn new(position: Vec2, config: &PhysicsConfig) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            grounded: false,
            score: 0,
            half_extents: vec2(config.tile_size * 0.8, config.tile_size * 0.95) / 2.0,
        }
    }

    /// Half-extents of the bounding box (constant)
    pub fn half_extents(&self) -> Vec2 {
        self.half_extents
    }

    /// Bounding box in world space (top-left + size)
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x - self.half_extents.x,
            self.position.y - self.half_extents.y,
            self.half_extents.x * 2.0,
            self.half_extents.y * 2.0,
        )
    }

    /// Set horizontal velocity from a move intent (-1, 0, +1)
    pub fn set_move_intent(&mut self, dir: f32, config: &PhysicsConfig) {
        self.velocity.x = dir * config.move_speed;
    }

    /// Add gravity to the vertical velocity. Unconditional and unclamped;
    /// velocity grows without bound while airborne.
    pub fn apply_gravity(&mut self, config: &PhysicsConfig) {
        self.velocity.y += config.gravity;
    }

    /// Jump if grounded. No-op while airborne (no double jumps).
    pub fn jump(&mut self, config: &PhysicsConfig) {
        if self.grounded {
            self.velocity.y = config.jump_velocity;
            self.grounded = false;
        }
    }

    /// Commit the step's velocity to the position. Runs after all
    /// collision corrections for the step.
    pub fn integrate(&mut self) {
        self.position += self.velocity;
    }
}
