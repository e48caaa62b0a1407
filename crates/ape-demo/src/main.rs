use anyhow::{Context, Result};

use ape_engine::coords::{Point, Rectangle, RectangleAlignment, Size};
use ape_engine::logging::{init_logging, LoggingConfig};
use ape_engine::paint::{known, Color};
use ape_engine::render::{RecordingRenderer, Renderer, Sprite};
use ape_engine::window::{HeadlessWindow, Window, WindowBuilder};

const FRAMES: u32 = 5;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    // Optional first argument: background color (`#rrggbb[aa]` or a color name).
    let background: Color = std::env::args()
        .nth(1)
        .as_deref()
        .unwrap_or("Midnight Blue")
        .parse()
        .context("invalid background color argument")?;

    let window = WindowBuilder::<HeadlessWindow>::new()
        .title("Game Window")
        .size(Size::new(800, 500))
        .centered()
        .bordered(true)
        .visible(true)
        .build();

    log::info!(
        "window {} \"{}\" at {:?}, {}x{} (ratio {:.3})",
        window.id(),
        window.title(),
        window.position(),
        window.size().width,
        window.size().height,
        window.ratio()
    );

    let mut renderer = RecordingRenderer::new(window.size());
    let screen = Rectangle::from_position_size(Point::ZERO, window.size());

    // Player quad centered on screen, health bar pinned to the bottom edge.
    let player = screen.local_to_global(Rectangle::new(0, 0, 64, 64), RectangleAlignment::MiddleCenter);
    let health_bar = screen.local_to_global(Rectangle::new(0, -16, 300, 12), RectangleAlignment::BottomCenter);

    for frame in 0..FRAMES {
        let t = frame as f32 / (FRAMES - 1) as f32;

        renderer.clear(background.darken(t * 50.0));

        let tint = Color::lerp(known::CRIMSON, known::SKY_BLUE, t);
        let sprite = Sprite::quad(player, tint);
        sprite
            .validate()
            .with_context(|| format!("player sprite invalid in frame {frame}"))?;
        renderer.render_sprite(&sprite);

        renderer.set_draw_color(Color::WHITE.with_alpha(200));
        renderer.draw_rounded_rectangle(health_bar, 4);
        renderer.set_draw_color(tint.lighten(25.0));
        let mut filled = health_bar;
        filled.width = health_bar.width * (frame as i32 + 1) / FRAMES as i32;
        renderer.fill_rectangle(filled);

        // A marker drifting off screen exercises culling.
        renderer.fill_circle(Point::new(700 + frame as i32 * 60, 50), 10);

        renderer.present();
    }

    let frames = renderer.take_frames();
    let drawn: usize = frames.iter().map(|f| f.items.len()).sum();
    let culled: usize = frames.iter().map(|f| f.culled).sum();
    log::info!("{} frames recorded: {drawn} commands drawn, {culled} culled", frames.len());
    log::info!(
        "player at {:?}, health bar at {:?}, background {background}",
        player.top_left(),
        health_bar.top_left()
    );

    Ok(())
}
