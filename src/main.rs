//! Scrolling Platformer
//!
//! A minimal tile-based platformer demo: a hand-authored level, a player
//! with gravity/jump/collision, coin pickups, a scrolling camera, and a
//! score HUD. The simulation lives in `game` and `world`; this file is
//! the macroquad glue (window, input polling, camera, drawing) and calls
//! the core exactly once per frame.

mod config;
mod game;
mod world;

use macroquad::prelude::*;

use config::{PhysicsConfig, WINDOW_HEIGHT, WINDOW_WIDTH};
use game::{spawn_point, step, Player, StepInput};
use world::{create_demo_level, Level, Tile};

const SKY_COLOR: Color = Color::new(0.39, 0.59, 1.0, 1.0);

fn window_conf() -> Conf {
    Conf {
        window_title: "Scrolling Platformer".to_string(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

/// World-space view rectangle centered on the player, clamped so the view
/// never leaves the level. An axis smaller than the view is centered.
fn camera_view(player: &Player, level: &Level) -> Rect {
    let view_w = WINDOW_WIDTH as f32;
    let view_h = WINDOW_HEIGHT as f32;
    let level_size = level.size_pixels();
    let mut center = player.position;

    let (min_x, max_x) = if level_size.x < view_w {
        (level_size.x / 2.0, level_size.x / 2.0)
    } else {
        (view_w / 2.0, level_size.x - view_w / 2.0)
    };
    let (min_y, max_y) = if level_size.y < view_h {
        (level_size.y / 2.0, level_size.y / 2.0)
    } else {
        (view_h / 2.0, level_size.y - view_h / 2.0)
    };
    center.x = center.x.clamp(min_x, max_x);
    center.y = center.y.clamp(min_y, max_y);

    Rect::new(center.x - view_w / 2.0, center.y - view_h / 2.0, view_w, view_h)
}

/// Draw the tiles intersecting the view. Culling iterates only the grid
/// range the level reports for the view rectangle.
fn draw_level(level: &Level, view: Rect) {
    let ts = level.tile_size();
    let (cols, rows) = level.visible_range(view);
    for y in rows {
        for x in cols.clone() {
            match level.get(x, y) {
                Tile::Solid => {
                    draw_rectangle(x as f32 * ts, y as f32 * ts, ts, ts, BLUE);
                }
                Tile::Coin => {
                    draw_circle(
                        x as f32 * ts + ts / 2.0,
                        y as f32 * ts + ts / 2.0,
                        ts * 0.3,
                        YELLOW,
                    );
                }
                Tile::Air => {}
            }
        }
    }
}

fn draw_hud(score: u32, font: Option<&Font>) {
    let text = format!("Score: {}", score);
    draw_text_ex(
        &text,
        10.0,
        34.0,
        TextParams {
            font,
            font_size: 30,
            color: WHITE,
            ..Default::default()
        },
    );
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let physics = PhysicsConfig::DEFAULT;
    let mut level = create_demo_level(&physics);
    let mut player = Player::new(spawn_point(&level, &physics), &physics);

    // HUD font; a missing file degrades to the built-in font
    let font = match load_ttf_font("arial.ttf").await {
        Ok(font) => Some(font),
        Err(err) => {
            eprintln!("Error loading font arial.ttf: {:?}", err);
            None
        }
    };

    loop {
        // --- Input ---
        let mut move_dir = 0.0;
        if is_key_down(KeyCode::Left) || is_key_down(KeyCode::A) {
            move_dir = -1.0;
        }
        if is_key_down(KeyCode::Right) || is_key_down(KeyCode::D) {
            move_dir = 1.0;
        }
        let jump = is_key_pressed(KeyCode::Space) || is_key_pressed(KeyCode::Up);

        // --- Simulation (one fixed step per frame) ---
        step(&mut player, &mut level, StepInput { move_dir, jump }, &physics);

        // --- Rendering ---
        clear_background(SKY_COLOR);

        let view = camera_view(&player, &level);
        let mut camera = Camera2D::from_display_rect(view);
        // from_display_rect yields a y-up camera; this world is y-down
        camera.zoom.y = -camera.zoom.y;
        set_camera(&camera);

        draw_level(&level, view);
        let bounds = player.bounds();
        draw_rectangle(bounds.x, bounds.y, bounds.w, bounds.h, GREEN);

        // HUD in screen space
        set_default_camera();
        draw_hud(player.score, font.as_ref());

        next_frame().await;
    }
}
