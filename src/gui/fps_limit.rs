use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Caps the render loop and tracks a smoothed frame rate.
pub struct FpsLimiter {
    max_fps: f64,
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl FpsLimiter {
    pub fn new(max_fps: f64) -> Self {
        Self {
            max_fps,
            frame_timer: Instant::now(),
            frametime_smoothed: 0.,
        }
    }

    pub fn fps(&self) -> f64 {
        if self.frametime_smoothed > 0. {
            1. / self.frametime_smoothed
        } else {
            0.
        }
    }

    pub fn max_fps_mut(&mut self) -> &mut f64 {
        &mut self.max_fps
    }

    /// Sleeps for the rest of the frame and starts the next one.
    pub fn delay(&mut self) {
        let target = Duration::from_secs_f64(1. / self.max_fps.max(1.));
        let elapsed = self.frame_timer.elapsed();
        if target > elapsed {
            sleep(target - elapsed);
        }

        let frametime = self.frame_timer.elapsed().as_secs_f64();
        self.frametime_smoothed += (frametime - self.frametime_smoothed) * 0.1;
        self.frame_timer = Instant::now();
    }
}
