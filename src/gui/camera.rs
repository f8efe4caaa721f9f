use super::Config;
use crate::Cell;

/// Viewport over the field: the centre of the view (in cells) and the zoom rate.
///
/// Input moves the *target* position and zoom; [`Camera::smooth`] moves the
/// current ones towards the target once per rendered frame. Cell `(x, y)`
/// covers the world square `[x, x + 1) x [y, y + 1)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    x: f64,
    y: f64,
    zoom: f64,
    target_x: f64,
    target_y: f64,
    target_zoom: f64,
    smoothing: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self::with_smoothing(Config::SMOOTHING)
    }
}

impl Camera {
    /// `smoothing` - fraction of the remaining distance covered per frame, in `(0, 1]`.
    pub fn with_smoothing(smoothing: f64) -> Self {
        Self {
            x: 0.,
            y: 0.,
            zoom: 1.,
            target_x: 0.,
            target_y: 0.,
            target_zoom: 1.,
            smoothing: smoothing.clamp(f64::EPSILON, 1.),
        }
    }

    /// Current `(x, y, zoom)`.
    pub fn position(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.zoom)
    }

    pub fn target(&self) -> (f64, f64, f64) {
        (self.target_x, self.target_y, self.target_zoom)
    }

    /// Jumps to the given centre without smoothing.
    pub fn center_on(&mut self, x: f64, y: f64) {
        (self.x, self.y) = (x, y);
        (self.target_x, self.target_y) = (x, y);
    }

    /// Moves the target by `dx`, `dy` steps of [`Config::MOVE_SPEED`] cells.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.target_x += dx * Config::MOVE_SPEED;
        self.target_y += dy * Config::MOVE_SPEED;
    }

    /// Follows a pointer drag of `dx`, `dy` pixels immediately.
    pub fn drag(&mut self, dx: f64, dy: f64) {
        let s = self.cell_size_px();
        self.center_on(self.x - dx / s, self.y - dy / s);
    }

    /// Multiplies the target zoom by `factor`, keeping the world point under
    /// `pivot` (pixels from the viewport's top-left corner) in place.
    pub fn zoom_toward(&mut self, factor: f64, pivot: [f64; 2], viewport: [f64; 2]) {
        let old_size = Config::CELL_SIZE * self.target_zoom;
        self.target_zoom = (self.target_zoom * factor).clamp(Config::MIN_ZOOM, Config::MAX_ZOOM);
        let new_size = Config::CELL_SIZE * self.target_zoom;

        let (px, py) = (pivot[0] - viewport[0] / 2., pivot[1] - viewport[1] / 2.);
        let world_x = self.target_x + px / old_size;
        let world_y = self.target_y + py / old_size;
        self.target_x = world_x - px / new_size;
        self.target_y = world_y - py / new_size;
    }

    pub fn smooth(&mut self) {
        let k = self.smoothing;
        self.x += (self.target_x - self.x) * k;
        self.y += (self.target_y - self.y) * k;
        self.zoom += (self.target_zoom - self.zoom) * k;
    }

    /// `true` once the current position and zoom are within a thousandth of the target.
    pub fn is_settled(&self) -> bool {
        const EPS: f64 = 1e-3;
        (self.target_x - self.x).abs() < EPS
            && (self.target_y - self.y).abs() < EPS
            && (self.target_zoom - self.zoom).abs() < EPS
    }

    pub fn cell_size_px(&self) -> f64 {
        Config::CELL_SIZE * self.zoom
    }

    pub fn show_grid_lines(&self) -> bool {
        self.cell_size_px() > Config::GRID_LINES_MIN_CELL_SIZE
    }

    /// Top-left corner of the cell in viewport pixels.
    pub fn cell_to_screen(&self, cell: Cell, viewport: [f64; 2]) -> [f64; 2] {
        let s = self.cell_size_px();
        [
            (cell.x as f64 - self.x) * s + viewport[0] / 2.,
            (cell.y as f64 - self.y) * s + viewport[1] / 2.,
        ]
    }

    pub fn screen_to_world(&self, p: [f64; 2], viewport: [f64; 2]) -> [f64; 2] {
        let s = self.cell_size_px();
        [
            self.x + (p[0] - viewport[0] / 2.) / s,
            self.y + (p[1] - viewport[1] / 2.) / s,
        ]
    }

    /// Inclusive rectangle of cells intersecting the viewport, with a one-cell margin.
    pub fn visible_cells(&self, viewport: [f64; 2]) -> (Cell, Cell) {
        let [x1, y1] = self.screen_to_world([0., 0.], viewport);
        let [x2, y2] = self.screen_to_world(viewport, viewport);
        (
            Cell::new(x1.floor() as i64 - 1, y1.floor() as i64 - 1),
            Cell::new(x2.ceil() as i64 + 1, y2.ceil() as i64 + 1),
        )
    }
}
