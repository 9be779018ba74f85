//! Headless carousel walkthrough
//!
//! Builds a carousel against a recording renderer, rotates it for a few
//! seconds of simulated frames and prints what a host would draw.
//!
//! RUST_LOG=debug cargo run --example carousel_demo

use anyhow::Result;
use hearth_carousel::{
    CarouselConfig, CarouselState, InputEvent, Key, ManualClock, PlaneTextures,
    RecordingRenderer, TextureInfo,
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => CarouselConfig::load(&path)?,
        None => CarouselConfig::default(),
    };

    // Dimensions of the bundled plane art
    let textures = PlaneTextures {
        frame: TextureInfo {
            name: config.frame_texture.clone(),
            width: 300,
            height: 400,
        },
        face: TextureInfo {
            name: config.face_texture.clone(),
            width: 300,
            height: 400,
        },
    };

    let fps = config.fps_max;
    let mut carousel = CarouselState::new(
        config,
        textures,
        RecordingRenderer::default(),
        ManualClock::default(),
    )?;

    if let Some(backdrop) = carousel.backdrop() {
        println!(
            "backdrop: {:.1} x {:.1} at {:?}",
            backdrop.width(),
            backdrop.height(),
            backdrop.min
        );
    }

    carousel.handle_input(InputEvent::PointerDown)?;
    let mut relinks = 0;
    for _ in 0..fps * 5 {
        let report = carousel.tick(1.0)?;
        relinks += report.relinked.len();
    }
    carousel.handle_input(InputEvent::KeyUp {
        key: Key::Space,
        ctrl: false,
    })?;

    println!(
        "rotated for {} frames: {} relinks, slot order {:?}",
        fps * 5,
        relinks,
        carousel.ring.ordered
    );
    println!(
        "{} quads visible, {} map calls",
        carousel.quad_vertices().len(),
        carousel.renderer.map_calls
    );

    carousel.handle_input(InputEvent::KeyUp {
        key: Key::Space,
        ctrl: true,
    })?;
    println!("static layout restored: slot order {:?}", carousel.ring.ordered);
    Ok(())
}
