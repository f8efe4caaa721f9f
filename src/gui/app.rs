use super::{Camera, Config, FpsLimiter, TickScheduler};
use crate::{
    blank_engine, load_rle_file, new_engine, patterns, Cell, Engine, Error, Pattern, Result, Seed,
    Topology, WorldConfig,
};
use eframe::egui::{CentralPanel, Color32, Context, Frame, Key, Margin, Rect, Response};
use std::{
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

pub struct App {
    pub(super) life_engine: Box<dyn Engine>, // Conway's GoL engine.
    pub(super) world: WorldConfig,           // Settings the current engine was built with.
    pub(super) next_topology: Topology,      // Topology selected for the next reset.
    pub(super) next_side: usize,             // Grid side selected for the next reset.
    pub(super) tick_ms: u64,                 // Period between generations in milliseconds.
    pub(super) preset: usize,                // Index into `patterns::PRESETS`.
    pub(super) generation: u64,              // Current generation number.
    pub(super) last_update_duration: f64,    // Duration of the last life update in seconds.
    pub(super) camera: Camera,
    pub(super) scheduler: TickScheduler,
    pub(super) fps_limiter: FpsLimiter, // Limits the frame rate to a certain value.
    pub(super) file_dialog: Option<egui_file::FileDialog>,
    pub(super) last_rle_dir: Option<PathBuf>,
    pub(super) status: String, // Result of the last load, shown under the controls.
    pub(super) field_rect: Option<Rect>, // Part of the window displaying the field.
}

impl App {
    /// Unbounded worlds start with the glider gun, bounded ones with random cells.
    pub fn new(world: WorldConfig) -> Result<Self> {
        let life_engine = new_engine(&world)?;
        let mut app = Self {
            life_engine,
            next_topology: world.topology,
            next_side: world.side,
            tick_ms: world.tick_interval.as_millis() as u64,
            preset: 0,
            generation: 0,
            last_update_duration: 0.,
            camera: Camera::default(),
            scheduler: TickScheduler::new(world.tick_interval),
            fps_limiter: FpsLimiter::new(Config::MAX_FPS),
            file_dialog: None,
            last_rle_dir: None,
            status: String::new(),
            field_rect: None,
            world,
        };
        if app.world.topology == Topology::Unbounded {
            app.load_pattern(Pattern::from_offsets(patterns::GLIDER_GUN), "glider gun");
        } else {
            app.center_camera();
        }
        Ok(app)
    }

    fn center_camera(&mut self) {
        let center = match self.world.topology {
            Topology::Unbounded => match self.life_engine.current_state().bounding_box() {
                Some((lo, hi)) => (
                    (lo.x as f64 + hi.x as f64 + 1.) / 2.,
                    (lo.y as f64 + hi.y as f64 + 1.) / 2.,
                ),
                None => (0., 0.),
            },
            _ => (self.world.side as f64 / 2., self.world.side as f64 / 2.),
        };
        self.camera.center_on(center.0, center.1);
    }

    /// World described by the topology and side picked in the controls.
    fn selected_world(&self) -> WorldConfig {
        WorldConfig {
            topology: self.next_topology,
            side: self.next_side,
            ..self.world.clone()
        }
    }

    /// Installs an engine built for `world`; the current one stays on error.
    fn replace_engine(&mut self, world: WorldConfig, built: Result<Box<dyn Engine>>, name: &str) {
        match built {
            Ok(engine) => {
                log::info!("loaded {name}: {} cells", engine.population());
                self.life_engine = engine;
                self.world = world;
                self.generation = 0;
                self.status = format!("Loaded {name}");
                self.center_camera();
            }
            Err(e) => {
                log::warn!("cannot load {name}: {e}");
                self.status = format!("Cannot load {name}: {e}");
            }
        }
    }

    /// Rebuilds the engine with random cells using the selected topology and size.
    pub fn reset_random(&mut self) {
        let world = self.selected_world();
        let built = new_engine(&world);
        self.replace_engine(world, built, "random field");
    }

    /// Replaces the field with `pattern`, centred on dense grids.
    ///
    /// On failure the current field is kept and the error is shown.
    pub fn load_pattern(&mut self, pattern: Pattern, name: &str) {
        let world = self.selected_world();
        let built = engine_with_pattern(&world, pattern);
        self.replace_engine(world, built, name);
    }

    pub fn load_file(&mut self, path: &Path) {
        self.last_rle_dir = path.parent().map(Path::to_path_buf);
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        match load_rle_file(path) {
            Ok(pattern) => self.load_pattern(pattern, &name),
            Err(e) => {
                log::warn!("cannot read {}: {e}", path.display());
                self.status = format!("Cannot load {name}: {e}");
            }
        }
    }

    pub(super) fn open_file_dialog(&mut self) {
        let mut dialog = egui_file::FileDialog::open_file(self.last_rle_dir.clone());
        dialog.open();
        self.file_dialog = Some(dialog);
    }

    fn update_file_dialog(&mut self, ctx: &Context) {
        let mut selected = None;
        if let Some(dialog) = &mut self.file_dialog {
            if dialog.show(ctx).selected() {
                selected = dialog.path().map(Path::to_path_buf);
            }
        }
        if let Some(path) = selected {
            self.file_dialog = None;
            self.load_file(&path);
        }
    }

    fn update_engine(&mut self) {
        self.scheduler
            .set_interval(Duration::from_millis(self.tick_ms.max(1)));
        if !self.scheduler.poll(Instant::now()) {
            return;
        }

        let timer = Instant::now();
        self.life_engine.step();
        // updating frame counter
        self.last_update_duration = timer.elapsed().as_secs_f64();
        self.generation += 1;
    }

    pub(super) fn update_viewport(&mut self, ctx: &Context, response: &Response) {
        let rect = response.rect;
        let viewport = [rect.width() as f64, rect.height() as f64];

        if response.dragged() {
            let d = response.drag_delta();
            self.camera.drag(d.x as f64, d.y as f64);
        }

        ctx.input(|input| {
            if let Some(pos) = response.hover_pos() {
                if input.raw_scroll_delta.y != 0. {
                    let factor = Config::ZOOM_STEP
                        .powf((input.raw_scroll_delta.y / Config::SCROLL_SCALE) as f64);
                    let pivot = pos - rect.left_top();
                    self.camera
                        .zoom_toward(factor, [pivot.x as f64, pivot.y as f64], viewport);
                }
            }

            let (mut dx, mut dy) = (0., 0.);
            if input.key_pressed(Key::ArrowLeft) {
                dx -= 1.;
            }
            if input.key_pressed(Key::ArrowRight) {
                dx += 1.;
            }
            if input.key_pressed(Key::ArrowUp) {
                dy -= 1.;
            }
            if input.key_pressed(Key::ArrowDown) {
                dy += 1.;
            }
            if dx != 0. || dy != 0. {
                self.camera.pan(dx, dy);
            }

            if input.key_pressed(Key::Space) {
                self.scheduler.request_single_step();
            }
            if input.key_pressed(Key::E) && !input.modifiers.ctrl {
                self.scheduler.toggle_pause();
            }
        });
    }

    /// When the next frame is needed without user input: right away while the
    /// camera is moving, else at the next tick; `None` while paused and still.
    fn next_frame_delay(&self, now: Instant) -> Option<Duration> {
        if !self.camera.is_settled() {
            return Some(Duration::ZERO);
        }
        self.scheduler.time_to_next_tick(now)
    }

    /// Zooms around the centre of the field, as the +/- buttons do.
    pub(super) fn zoom_center(&mut self, factor: f64) {
        if let Some(rect) = self.field_rect {
            let viewport = [rect.width() as f64, rect.height() as f64];
            self.camera
                .zoom_toward(factor, [viewport[0] / 2., viewport[1] / 2.], viewport);
        }
    }
}

/// Builds an engine for `world` holding `pattern`, centred on a dense grid.
fn engine_with_pattern(world: &WorldConfig, pattern: Pattern) -> Result<Box<dyn Engine>> {
    let origin = match (world.topology, pattern.bounding_box()) {
        (Topology::Unbounded, _) | (_, None) => Cell::default(),
        (_, Some((lo, hi))) => {
            let side = world.side as i64;
            let (width, height) = (hi.x - lo.x + 1, hi.y - lo.y + 1);
            if width > side || height > side {
                return Err(Error::PatternTooLarge {
                    width,
                    height,
                    side: world.side,
                });
            }
            Cell::new((side - width) / 2 - lo.x, (side - height) / 2 - lo.y)
        }
    };

    let mut engine = blank_engine(world.topology, world.side)?;
    engine.seed(&Seed::Pattern { pattern, origin })?;
    Ok(engine)
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| {
                // the field is drawn from the state settled by the previous tick
                self.camera.smooth();
                self.draw(ctx, ui);

                self.update_engine();
            });

        self.update_file_dialog(ctx);
        if let Some(delay) = self.next_frame_delay(Instant::now()) {
            ctx.request_repaint_after(delay);
        }
        self.fps_limiter.delay();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn torus_app() -> App {
        App::new(WorldConfig {
            topology: Topology::Torus,
            side: 64,
            rng_seed: Some(1),
            ..Default::default()
        })
        .unwrap()
    }

    fn gun() -> Pattern {
        Pattern::from_offsets(patterns::GLIDER_GUN)
    }

    #[test]
    fn failed_load_keeps_current_world() {
        let mut app = torus_app();
        let before = app.life_engine.current_state();
        app.next_topology = Topology::Bounded;
        app.next_side = 3;
        app.load_pattern(gun(), "gun");

        assert!(app.status.starts_with("Cannot load gun"), "{}", app.status);
        assert_eq!((app.world.topology, app.world.side), (Topology::Torus, 64));
        assert_eq!(app.life_engine.topology(), Topology::Torus);
        assert_eq!(app.life_engine.current_state(), before);
        assert_eq!(app.camera.position(), (32., 32., 1.));

        app.next_side = 0;
        app.reset_random();
        assert!(app.status.starts_with("Cannot load"), "{}", app.status);
        assert_eq!((app.world.topology, app.world.side), (Topology::Torus, 64));
        assert_eq!(app.life_engine.current_state(), before);
    }

    #[test]
    fn successful_load_switches_world() {
        let mut app = torus_app();
        app.generation = 7;
        app.next_topology = Topology::Bounded;
        app.next_side = 40;
        app.load_pattern(gun(), "gun");

        assert_eq!(app.status, "Loaded gun");
        assert_eq!((app.world.topology, app.world.side), (Topology::Bounded, 40));
        assert_eq!(app.life_engine.topology(), Topology::Bounded);
        assert_eq!(app.generation, 0);
        // 36x9 gun centred in 40x40
        let (lo, hi) = app.life_engine.current_state().bounding_box().unwrap();
        assert_eq!((lo.x, lo.y, hi.x, hi.y), (2, 15, 37, 23));
    }

    #[test]
    fn pattern_larger_than_grid_is_reported_by_size() {
        let world = WorldConfig {
            topology: Topology::Bounded,
            side: 20,
            ..Default::default()
        };
        assert!(matches!(
            engine_with_pattern(&world, gun()),
            Err(Error::PatternTooLarge {
                width: 36,
                height: 9,
                side: 20
            })
        ));

        let mut app = torus_app();
        app.next_side = 20;
        app.load_pattern(gun(), "gun");
        assert_eq!(
            app.status,
            "Cannot load gun: pattern of 36x9 cells does not fit the 20x20 grid"
        );

        // exactly fitting is fine
        let world = WorldConfig { side: 36, ..world };
        assert_eq!(engine_with_pattern(&world, gun()).unwrap().population(), 36);
    }

    #[test]
    fn repaints_follow_camera_and_ticks() {
        let mut app = torus_app();
        let now = Instant::now();
        assert_eq!(app.next_frame_delay(now), Some(Duration::ZERO));
        assert!(app.scheduler.poll(now));
        assert_eq!(app.next_frame_delay(now), Some(app.world.tick_interval));

        app.scheduler.set_paused(true);
        assert_eq!(app.next_frame_delay(now), None);
        app.camera.pan(1., 0.);
        assert_eq!(app.next_frame_delay(now), Some(Duration::ZERO));
    }
}
