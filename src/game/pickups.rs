//! Pickup Resolution
//!
//! After the step's final position is known, every coin tile overlapped by
//! the player's box is collected: score goes up by one and the tile is
//! rewritten to air through the grid's bounds-checked setter, so a coin
//! can never be collected twice.

use crate::config::PhysicsConfig;
use crate::world::{Level, Tile};
use super::collision::tile_span;
use super::player::Player;

/// Collect every coin under the player's bounding box. Multiple coins may
/// be collected in one step if the box spans several coin tiles.
pub fn collect_coins(player: &mut Player, level: &mut Level, config: &PhysicsConfig) {
    let bounds = player.bounds();
    let ts = level.tile_size();
    let eps = config.collision_epsilon;
    let (left, right) = tile_span(bounds.x, bounds.right(), ts, eps);
    let (top, bottom) = tile_span(bounds.y, bounds.bottom(), ts, eps);

    for y in top..=bottom {
        for x in left..=right {
            if level.get(x, y) == Tile::Coin {
                player.score += 1;
                level.set(x, y, Tile::Air);
                println!("Coin collected! Score: {}", player.score);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::create_demo_level;
    use macroquad::prelude::vec2;

    const CONFIG: PhysicsConfig = PhysicsConfig::DEFAULT;

    /// Center of a tile in world space
    fn tile_center(x: i32, y: i32) -> macroquad::prelude::Vec2 {
        vec2(
            x as f32 * CONFIG.tile_size + CONFIG.tile_size / 2.0,
            y as f32 * CONFIG.tile_size + CONFIG.tile_size / 2.0,
        )
    }

    #[test]
    fn test_collects_all_demo_coins() {
        let mut level = create_demo_level(&CONFIG);
        let mut player = Player::new(vec2(0.0, 0.0), &CONFIG);

        let coins = [(7, 9), (14, 7), (27, 9), (34, 6), (21, 11)];
        for &(x, y) in &coins {
            player.position = tile_center(x, y);
            collect_coins(&mut player, &mut level, &CONFIG);
        }

        assert_eq!(player.score, 5);
        for &(x, y) in &coins {
            assert_eq!(level.get(x, y), Tile::Air);
        }
    }

    #[test]
    fn test_coin_collected_once() {
        let mut level = Level::new(5, 5, CONFIG.tile_size);
        level.set(2, 2, Tile::Coin);
        let mut player = Player::new(tile_center(2, 2), &CONFIG);

        collect_coins(&mut player, &mut level, &CONFIG);
        collect_coins(&mut player, &mut level, &CONFIG);
        assert_eq!(player.score, 1);
        assert_eq!(level.get(2, 2), Tile::Air);
    }

    #[test]
    fn test_two_coins_in_one_step() {
        let mut level = Level::new(5, 5, CONFIG.tile_size);
        level.set(1, 1, Tile::Coin);
        level.set(2, 1, Tile::Coin);
        // Box straddles the column boundary at x = 80, spanning both tiles
        let mut player = Player::new(vec2(80.0, 60.0), &CONFIG);

        collect_coins(&mut player, &mut level, &CONFIG);
        assert_eq!(player.score, 2);
        assert_eq!(level.get(1, 1), Tile::Air);
        assert_eq!(level.get(2, 1), Tile::Air);
    }

    #[test]
    fn test_no_pickup_without_overlap() {
        let mut level = Level::new(5, 5, CONFIG.tile_size);
        level.set(3, 3, Tile::Coin);
        let mut player = Player::new(tile_center(1, 1), &CONFIG);

        collect_coins(&mut player, &mut level, &CONFIG);
        assert_eq!(player.score, 0);
        assert_eq!(level.get(3, 3), Tile::Coin);
    }
}
