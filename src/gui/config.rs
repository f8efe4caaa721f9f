use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const MAX_FPS: f64 = 60.;

    /// Side of a cell in pixels at zoom 1.
    pub const CELL_SIZE: f64 = 10.;
    /// Camera shift per arrow key press, in cells.
    pub const MOVE_SPEED: f64 = 1.;
    pub const ZOOM_STEP: f64 = 1.2;
    pub const MIN_ZOOM: f64 = 0.1;
    pub const MAX_ZOOM: f64 = 50.;
    pub const SMOOTHING: f64 = 0.5;
    pub const SCROLL_SCALE: f32 = 50.;
    /// Grid lines are hidden when cells are smaller than this (in pixels).
    pub const GRID_LINES_MIN_CELL_SIZE: f64 = 5.;

    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 300.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const FIELD_COLOR: Color32 = Color32::WHITE;
    pub const CELL_COLOR: Color32 = Color32::BLACK;
    pub const GRID_LINE_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const GRID_LINE_WIDTH: f32 = 0.5;

    pub const GAP_ABOVE_STATS: f32 = 30.;
}
