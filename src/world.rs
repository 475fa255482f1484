//! Level Data
//!
//! The tile grid the simulation runs against: a fixed-size, row-major map
//! of tile classifications plus the level's pixel extents, derived once at
//! construction. All access is bounds-checked; reads outside the grid see
//! `Tile::Air`, writes outside the grid are rejected.

use macroquad::prelude::{vec2, Rect, Vec2};
use serde::{Serialize, Deserialize};

use crate::config::PhysicsConfig;

/// Classification of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Air,
    Solid,
    Coin,
}

/// A tile-grid level with fixed dimensions.
///
/// Tiles are stored row-major. Solid tiles never change at runtime; the
/// only mutation is coin collection rewriting `Coin` cells to `Air`.
pub struct Level {
    tiles: Vec<Tile>,
    width: i32,
    height: i32,
    tile_size: f32,
    size_pixels: Vec2,
}

impl Level {
    /// Create a level of `width` x `height` tiles, all `Air`
    pub fn new(width: i32, height: i32, tile_size: f32) -> Self {
        Self {
            tiles: vec![Tile::Air; (width * height) as usize],
            width,
            height,
            tile_size,
            size_pixels: vec2(width as f32 * tile_size, height as f32 * tile_size),
        }
    }

    /// Tile at grid coordinates (x, y); out of bounds reads as `Air`
    pub fn get(&self, x: i32, y: i32) -> Tile {
        if x >= 0 && x < self.width && y >= 0 && y < self.height {
            self.tiles[(y * self.width + x) as usize]
        } else {
            Tile::Air
        }
    }

    /// Store a tile at (x, y). Returns false (no mutation) out of bounds.
    pub fn set(&mut self, x: i32, y: i32, tile: Tile) -> bool {
        if x >= 0 && x < self.width && y >= 0 && y < self.height {
            self.tiles[(y * self.width + x) as usize] = tile;
            true
        } else {
            false
        }
    }

    /// Level width in tiles
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Level height in tiles
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Edge length of a tile in pixels
    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Level extents in pixels
    pub fn size_pixels(&self) -> Vec2 {
        self.size_pixels
    }

    /// Grid ranges intersecting a world-space view rectangle, clamped to
    /// the level bounds. The renderer iterates these for culled drawing.
    pub fn visible_range(
        &self,
        view: Rect,
    ) -> (std::ops::Range<i32>, std::ops::Range<i32>) {
        let start_x = ((view.x / self.tile_size) as i32).max(0);
        let end_x = ((view.right() / self.tile_size) as i32 + 1).min(self.width);
        let start_y = ((view.y / self.tile_size) as i32).max(0);
        let end_y = ((view.bottom() / self.tile_size) as i32 + 1).min(self.height);
        (start_x..end_x, start_y..end_y)
    }
}

/// Build the hand-authored demo level: a 40x15 playfield with a solid
/// floor, a handful of platforms and walls, and five coins.
pub fn create_demo_level(config: &PhysicsConfig) -> Level {
    let mut level = Level::new(40, 15, config.tile_size);

    // Floor
    for x in 0..level.width() {
        level.set(x, 14, Tile::Solid);
    }

    // Platforms
    for x in 5..10 {
        level.set(x, 10, Tile::Solid);
    }
    for x in 12..16 {
        level.set(x, 8, Tile::Solid);
    }
    level.set(15, 6, Tile::Solid);
    level.set(16, 6, Tile::Solid);
    for x in 25..30 {
        level.set(x, 10, Tile::Solid);
    }
    for x in 32..36 {
        level.set(x, 7, Tile::Solid);
    }
    level.set(21, 12, Tile::Solid);
    level.set(22, 12, Tile::Solid);

    // Walls
    for y in 11..14 {
        level.set(2, y, Tile::Solid);
    }
    for y in 6..11 {
        level.set(18, y, Tile::Solid);
    }
    for y in 8..14 {
        level.set(38, y, Tile::Solid);
    }

    // Coins
    level.set(7, 9, Tile::Coin);
    level.set(14, 7, Tile::Coin);
    level.set(27, 9, Tile::Coin);
    level.set(34, 6, Tile::Coin);
    level.set(21, 11, Tile::Coin);

    level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_out_of_bounds_is_air() {
        let level = Level::new(4, 3, 40.0);
        assert_eq!(level.get(-1, 0), Tile::Air);
        assert_eq!(level.get(0, -1), Tile::Air);
        assert_eq!(level.get(4, 0), Tile::Air);
        assert_eq!(level.get(0, 3), Tile::Air);
    }

    #[test]
    fn test_set_out_of_bounds_rejected() {
        let mut level = Level::new(4, 3, 40.0);
        assert!(!level.set(-1, 0, Tile::Solid));
        assert!(!level.set(4, 0, Tile::Solid));
        assert!(!level.set(0, 3, Tile::Solid));
        // No cell may have changed
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(level.get(x, y), Tile::Air);
            }
        }
    }

    #[test]
    fn test_set_get_round_trip() {
        let mut level = Level::new(4, 3, 40.0);
        assert!(level.set(2, 1, Tile::Coin));
        assert_eq!(level.get(2, 1), Tile::Coin);
        assert!(level.set(2, 1, Tile::Solid));
        assert_eq!(level.get(2, 1), Tile::Solid);
    }

    #[test]
    fn test_pixel_extents() {
        let level = Level::new(40, 15, 40.0);
        assert!((level.size_pixels().x - 1600.0).abs() < 0.001);
        assert!((level.size_pixels().y - 600.0).abs() < 0.001);
    }

    #[test]
    fn test_demo_level_layout() {
        let level = create_demo_level(&PhysicsConfig::DEFAULT);
        assert_eq!(level.width(), 40);
        assert_eq!(level.height(), 15);

        // Floor row is fully solid
        for x in 0..40 {
            assert_eq!(level.get(x, 14), Tile::Solid);
        }

        // Platform spot checks
        assert_eq!(level.get(5, 10), Tile::Solid);
        assert_eq!(level.get(9, 10), Tile::Solid);
        assert_eq!(level.get(10, 10), Tile::Air);
        assert_eq!(level.get(12, 8), Tile::Solid);
        assert_eq!(level.get(15, 6), Tile::Solid);
        assert_eq!(level.get(35, 7), Tile::Solid);

        // Wall spot checks
        assert_eq!(level.get(2, 11), Tile::Solid);
        assert_eq!(level.get(2, 13), Tile::Solid);
        assert_eq!(level.get(2, 10), Tile::Air);
        assert_eq!(level.get(18, 6), Tile::Solid);
        assert_eq!(level.get(38, 8), Tile::Solid);

        // Exactly five coins, at the documented coordinates
        let coins = [(7, 9), (14, 7), (27, 9), (34, 6), (21, 11)];
        for &(x, y) in &coins {
            assert_eq!(level.get(x, y), Tile::Coin, "missing coin at ({}, {})", x, y);
        }
        let mut count = 0;
        for y in 0..level.height() {
            for x in 0..level.width() {
                if level.get(x, y) == Tile::Coin {
                    count += 1;
                }
            }
        }
        assert_eq!(count, 5);
    }

    #[test]
    fn test_tile_ron_round_trip() {
        for tile in [Tile::Air, Tile::Solid, Tile::Coin] {
            let text = ron::to_string(&tile).unwrap();
            let back: Tile = ron::from_str(&text).unwrap();
            assert_eq!(back, tile);
        }
    }

    #[test]
    fn test_visible_range_clamped() {
        let level = Level::new(40, 15, 40.0);
        // View hanging off the top-left corner
        let (cols, rows) = level.visible_range(Rect::new(-100.0, -100.0, 300.0, 300.0));
        assert_eq!(cols, 0..6);
        assert_eq!(rows, 0..6);
        // View past the bottom-right corner
        let (cols, rows) = level.visible_range(Rect::new(1500.0, 500.0, 400.0, 400.0));
        assert_eq!(cols, 37..40);
        assert_eq!(rows, 12..15);
    }
}
