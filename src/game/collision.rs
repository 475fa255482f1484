//! Collision System
//!
//! Axis-separated collision of the player's box against the tile grid.
//! Each step resolves the vertical axis first, then the horizontal axis:
//! the box is translated by that axis' pending velocity, the tiles under
//! its leading edge are scanned in order, and the first solid hit snaps
//! the facing edge flush against the tile and zeroes that axis' velocity.
//!
//! Resolving one axis at a time is the standard tile-platformer
//! simplification. Vertical runs first so a diagonal move into a corner
//! lands on the floor instead of tunneling. Corners still resolve each
//! axis independently, so a body can snag on an inside corner; that is
//! accepted behavior and the scan order (columns left to right, rows top
//! to bottom) is the tie-break that keeps it reproducible.

use macroquad::prelude::{vec2, Vec2};

use crate::config::PhysicsConfig;
use crate::world::{Level, Tile};
use super::player::Player;

/// Inclusive tile-index range spanned by the interval [min, max], with the
/// epsilon inset keeping edges flush on a tile boundary out of the
/// neighboring tile. Conversion truncates toward zero.
pub(crate) fn tile_span(min: f32, max: f32, tile_size: f32, epsilon: f32) -> (i32, i32) {
    (
        ((min + epsilon) / tile_size) as i32,
        ((max - epsilon) / tile_size) as i32,
    )
}

/// Resolve the player's pending motion against the level's solid tiles.
///
/// Clears `grounded` first; only a downward contact this step re-sets it.
pub fn resolve_tile_collisions(player: &mut Player, level: &Level, config: &PhysicsConfig) {
    player.grounded = false;
    let ts = level.tile_size();
    let eps = config.collision_epsilon;

    // Vertical pass: box translated by the pending y-velocity, x unmoved.
    let bounds = player.bounds();
    let (left, right) = tile_span(bounds.x, bounds.right(), ts, eps);
    let top = ((bounds.y + player.velocity.y + eps) / ts) as i32;
    let bottom = ((bounds.bottom() + player.velocity.y - eps) / ts) as i32;

    for x in left..=right {
        if player.velocity.y > 0.0 && level.get(x, bottom) == Tile::Solid {
            // Bottom edge sits exactly on top of the tile
            player.position.y = bottom as f32 * ts - player.half_extents().y;
            player.velocity.y = 0.0;
            player.grounded = true;
            break;
        }
        if player.velocity.y < 0.0 && level.get(x, top) == Tile::Solid {
            // Top edge sits exactly below the tile
            player.position.y = (top + 1) as f32 * ts + player.half_extents().y;
            player.velocity.y = 0.0;
            break;
        }
    }

    // Horizontal pass: box re-read after any vertical snap, translated by
    // the pending x-velocity. Rows come from the current position.
    let bounds = player.bounds();
    let (top, bottom) = tile_span(bounds.y, bounds.bottom(), ts, eps);
    let left = ((bounds.x + player.velocity.x + eps) / ts) as i32;
    let right = ((bounds.right() + player.velocity.x - eps) / ts) as i32;

    for y in top..=bottom {
        if player.velocity.x > 0.0 && level.get(right, y) == Tile::Solid {
            // Right edge flush against the tile's left face
            player.position.x = right as f32 * ts - player.half_extents().x;
            player.velocity.x = 0.0;
            break;
        }
        if player.velocity.x < 0.0 && level.get(left, y) == Tile::Solid {
            // Left edge flush against the tile's right face
            player.position.x = (left + 1) as f32 * ts + player.half_extents().x;
            player.velocity.x = 0.0;
            break;
        }
    }
}

/// Fixed respawn point: 1.5 tiles from the left, 3 tiles above the floor
pub fn spawn_point(level: &Level, config: &PhysicsConfig) -> Vec2 {
    vec2(
        config.tile_size * 1.5,
        config.tile_size * (level.height() as f32 - 3.0),
    )
}

/// Keep the player inside the level's pixel extents.
///
/// Left, right, and top edges clamp the position and zero that axis'
/// velocity. Falling past the bottom edge respawns the player instead:
/// back to the spawn point with zero velocity, score untouched.
pub fn clamp_to_level_bounds(player: &mut Player, level: &Level, config: &PhysicsConfig) {
    let half = player.half_extents();
    let size = level.size_pixels();

    if player.position.x - half.x < 0.0 {
        player.position.x = half.x;
        player.velocity.x = 0.0;
    }
    if player.position.x + half.x > size.x {
        player.position.x = size.x - half.x;
        player.velocity.x = 0.0;
    }
    if player.position.y - half.y < 0.0 {
        player.position.y = half.y;
        player.velocity.y = 0.0;
    }
    if player.position.y + half.y > size.y {
        println!("Player fell out of bounds!");
        player.position = spawn_point(level, config);
        player.velocity = Vec2::ZERO;
        player.grounded = false;
    }
}
