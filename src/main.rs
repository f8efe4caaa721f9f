#![warn(clippy::all)]

fn main() -> eframe::Result<()> {
    use eframe::egui::{vec2, ViewportBuilder};

    env_logger::init();

    let world = gameoflife::WorldConfig::from_env().unwrap_or_else(|e| {
        log::warn!("{e}; using default world settings");
        gameoflife::WorldConfig::default()
    });
    log::info!("starting with {world:?}");

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(1280., 800.))
            .with_min_inner_size(vec2(640.0, 360.0)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Ok(Box::new(gameoflife::App::new(world)?))),
    )
}
