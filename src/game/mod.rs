//! Simulation Module
//!
//! The per-frame step of the platformer: a kinematic player body, the
//! tile collision resolver, the level-bounds clamp, and coin pickup
//! resolution. Single-threaded and frame-stepped; the caller (the render
//! loop) invokes `step` exactly once per frame with that frame's input.

pub mod collision;
pub mod pickups;
pub mod player;

pub use collision::{clamp_to_level_bounds, resolve_tile_collisions, spawn_point};
pub use pickups::collect_coins;
pub use player::Player;

use crate::config::PhysicsConfig;
use crate::world::Level;

/// One frame's worth of input, sampled by the caller
#[derive(Debug, Clone, Copy, Default)]
pub struct StepInput {
    /// Horizontal intent: -1 (left), 0, or +1 (right)
    pub move_dir: f32,
    /// Edge-triggered jump request
    pub jump: bool,
}

/// Advance the simulation by one fixed step.
///
/// Order matters and is fixed: move intent and jump, gravity, vertical
/// then horizontal collision, bounds clamp, position integration, coin
/// pickup. The level is only mutated by the pickup phase.
pub fn step(player: &mut Player, level: &mut Level, input: StepInput, config: &PhysicsConfig) {
    player.set_move_intent(input.move_dir, config);
    if input.jump {
        player.jump(config);
    }
    player.apply_gravity(config);
    collision::resolve_tile_collisions(player, level, config);
    collision::clamp_to_level_bounds(player, level, config);
    player.integrate();
    pickups::collect_coins(player, level, config);
}
