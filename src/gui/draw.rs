use super::{App, Config};
use crate::{patterns, Cell, Pattern, Topology, WorldConfig};
use eframe::egui::{
    pos2, vec2, Button, ComboBox, Context, DragValue, Rect, RichText, Sense, Slider, Stroke, Ui,
    Vec2,
};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_simulation_controls(&mut self, ui: &mut Ui) {
        let text = if self.scheduler.is_paused() {
            "Play"
        } else {
            "Pause"
        };
        if ui.add(Self::new_button(text)).clicked() {
            self.scheduler.toggle_pause();
        }

        if ui
            .add_enabled(self.scheduler.is_paused(), Self::new_button("Next step"))
            .clicked()
        {
            self.scheduler.request_single_step();
        }

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Tick: "));
            ui.add(
                Slider::new(&mut self.tick_ms, WorldConfig::TICK_MS_RANGE)
                    .logarithmic(true)
                    .suffix(" ms"),
            );
        });

        ui.label(Self::new_text(&format!("Generation: {}", self.generation)));
        ui.label(Self::new_text(&format!(
            "Last field update: {:.3} ms",
            self.last_update_duration * 1e3
        )));
    }

    fn draw_world_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(Self::new_text("Topology: "));
            for topology in Topology::ALL {
                ui.radio_value(
                    &mut self.next_topology,
                    topology,
                    Self::new_text(topology.name()),
                );
            }
        });

        ui.add_enabled_ui(self.next_topology != Topology::Unbounded, |ui| {
            ui.horizontal(|ui| {
                ui.label(Self::new_text("Grid side: "));
                ui.add(DragValue::new(&mut self.next_side).range(3..=1024));
            });
        });

        if ui.add(Self::new_button("Random field")).clicked() {
            self.reset_random();
        }

        ui.horizontal(|ui| {
            let (name, _) = patterns::PRESETS[self.preset];
            ComboBox::from_id_source("preset")
                .selected_text(name)
                .show_ui(ui, |ui| {
                    for (i, (name, _)) in patterns::PRESETS.iter().enumerate() {
                        ui.selectable_value(&mut self.preset, i, *name);
                    }
                });
            if ui.add(Self::new_button("Load")).clicked() {
                let (name, offsets) = patterns::PRESETS[self.preset];
                self.load_pattern(Pattern::from_offsets(offsets), name);
            }
        });

        if ui.add(Self::new_button("Open RLE file")).clicked() {
            self.open_file_dialog();
        }

        if !self.status.is_empty() {
            ui.label(Self::new_text(&self.status));
        }
    }

    fn draw_appearance_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(Self::new_text("Zoom: "));
            if ui.add(Self::new_button("+")).clicked() {
                self.zoom_center(Config::ZOOM_STEP);
            }
            if ui.add(Self::new_button("-")).clicked() {
                self.zoom_center(1. / Config::ZOOM_STEP);
            }
            ui.label(Self::new_text(&format!("{:.2}x", self.camera.position().2)));
        });

        ui.label(Self::new_text(&format!(
            "FPS: {:3}",
            self.fps_limiter.fps().round() as u32
        )));
        ui.horizontal(|ui| {
            ui.label(Self::new_text("Max FPS: "));
            ui.add(Slider::new(self.fps_limiter.max_fps_mut(), 5.0..=480.0).logarithmic(true));
        });

        ui.add_space(Config::GAP_ABOVE_STATS);
        ui.label(Self::new_text(&self.life_engine.stats()));
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            ui.set_width(Config::CONTROL_PANEL_WIDTH);
            ui.group(|ui| {
                ui.vertical(|ui| self.draw_simulation_controls(ui));
            });
            ui.group(|ui| {
                ui.vertical(|ui| self.draw_world_controls(ui));
            });
            ui.group(|ui| {
                ui.vertical(|ui| self.draw_appearance_controls(ui));
            });
        });
    }

    fn draw_gol_field(&mut self, ctx: &Context, ui: &mut Ui, size: Vec2) {
        let (response, painter) = ui.allocate_painter(size, Sense::drag());
        let rect = response.rect;
        self.field_rect.replace(rect);
        self.update_viewport(ctx, &response);

        painter.rect_filled(rect, 0., Config::FIELD_COLOR);

        let viewport = [rect.width() as f64, rect.height() as f64];
        let cell_px = self.camera.cell_size_px() as f32;
        let to_screen = |cell: Cell| {
            let [x, y] = self.camera.cell_to_screen(cell, viewport);
            rect.min + vec2(x as f32, y as f32)
        };

        let (lo, hi) = self.camera.visible_cells(viewport);
        let visible = |c: &Cell| (lo.x..=hi.x).contains(&c.x) && (lo.y..=hi.y).contains(&c.y);
        for cell in self.life_engine.alive_cells().filter(visible) {
            painter.rect_filled(
                Rect::from_min_size(to_screen(cell), Vec2::splat(cell_px)),
                0.,
                Config::CELL_COLOR,
            );
        }

        if self.camera.show_grid_lines() {
            let stroke = Stroke::new(Config::GRID_LINE_WIDTH, Config::GRID_LINE_COLOR);
            for x in lo.x..=hi.x {
                let sx = to_screen(Cell::new(x, lo.y)).x;
                painter.line_segment([pos2(sx, rect.top()), pos2(sx, rect.bottom())], stroke);
            }
            for y in lo.y..=hi.y {
                let sy = to_screen(Cell::new(lo.x, y)).y;
                painter.line_segment([pos2(rect.left(), sy), pos2(rect.right(), sy)], stroke);
            }
        }

        if self.world.topology != Topology::Unbounded {
            let side = self.world.side as i64;
            let border = Rect::from_two_pos(
                to_screen(Cell::new(0, 0)),
                to_screen(Cell::new(side, side)),
            );
            painter.rect_stroke(
                border,
                0.,
                Stroke::new(Config::BUTTON_STROKE_WIDTH, Config::BUTTON_STROKE_COLOR),
            );
        }
    }

    pub fn draw(&mut self, ctx: &Context, ui: &mut Ui) {
        let area = ui.available_size();
        let field_size = vec2(
            (area.x - Config::CONTROL_PANEL_WIDTH - Config::FRAME_MARGIN).max(0.),
            area.y,
        );
        ui.horizontal(|ui| {
            self.draw_controls(ui);
            ui.add_space(Config::FRAME_MARGIN);
            self.draw_gol_field(ctx, ui, field_size);
        });
    }
}
