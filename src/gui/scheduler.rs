use std::time::{Duration, Instant};

/// Decides when the next generation is due.
///
/// Ticks come at a fixed period while running; at most one tick is reported
/// per call, so a slow frame never triggers a burst of steps.
pub struct TickScheduler {
    interval: Duration,
    last_tick: Option<Instant>,
    is_paused: bool,
    single_step: bool,
}

impl TickScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: None,
            is_paused: false,
            single_step: false,
        }
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.is_paused = paused;
        if !paused {
            self.last_tick = None;
        }
    }

    pub fn toggle_pause(&mut self) {
        self.set_paused(!self.is_paused);
    }

    /// Makes the next [`TickScheduler::poll`] report a tick even when paused.
    pub fn request_single_step(&mut self) {
        self.single_step = true;
    }

    /// Returns `true` if the engine should advance one generation now.
    pub fn poll(&mut self, now: Instant) -> bool {
        if std::mem::take(&mut self.single_step) {
            self.last_tick = Some(now);
            return true;
        }
        if self.is_paused {
            return false;
        }
        match self.last_tick {
            Some(last) if now.saturating_duration_since(last) < self.interval => false,
            _ => {
                self.last_tick = Some(now);
                true
            }
        }
    }

    /// Time left until the next tick, for scheduling a repaint.
    pub fn time_to_next_tick(&self, now: Instant) -> Option<Duration> {
        if self.is_paused {
            return None;
        }
        Some(match self.last_tick {
            Some(last) => self
                .interval
                .saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        })
    }
}
