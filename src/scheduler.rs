//! Fixed-interval tick scheduler using an accumulator pattern.
//!
//! `draw_web()` calls at ~60fps with variable delta. The scheduler turns
//! host timestamps into whole ticks of a fixed interval and hands each one
//! to a callback as `interval_seconds`, so passive income accrues the same
//! regardless of frame rate. Nothing fires until [`Scheduler::start`], and
//! tests feed synthetic timestamps instead of waiting on a real clock.

use crate::config::GameConfig;

pub struct Scheduler {
    /// Milliseconds per tick (e.g. 100ms = 10 ticks/sec)
    interval_ms: f64,
    /// Upper bound on a single frame delta
    max_frame_ms: f64,
    /// Accumulated milliseconds not yet consumed as ticks
    accumulator: f64,
    /// Timestamp of the last update (ms), None until the first frame after start
    last_timestamp: Option<f64>,
    running: bool,
    /// Total ticks fired since creation
    pub total_ticks: u64,
}

impl Scheduler {
    /// Create a stopped scheduler firing every `interval_ms` (at least 1ms).
    pub fn new(interval_ms: u32, max_frame_ms: f64) -> Self {
        Self {
            interval_ms: interval_ms.max(1) as f64,
            max_frame_ms,
            accumulator: 0.0,
            last_timestamp: None,
            running: false,
            total_ticks: 0,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.tick_ms, config.max_frame_ms)
    }

    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.last_timestamp = None;
        log::debug!("scheduler started ({}ms interval)", self.interval_ms);
    }

    /// Stop firing. Any partially accumulated interval is discarded.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.accumulator = 0.0;
        self.last_timestamp = None;
        log::debug!("scheduler stopped after {} ticks", self.total_ticks);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Tick length as a fraction of a second.
    pub fn interval_seconds(&self) -> f64 {
        self.interval_ms / 1000.0
    }

    /// Feed a wall-clock timestamp (from `performance.now()` or similar).
    /// Returns the number of ticks due this frame; always 0 while stopped.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        if !self.running {
            return 0;
        }
        let delta = match self.last_timestamp {
            Some(prev) => (now_ms - prev).clamp(0.0, self.max_frame_ms),
            None => 0.0, // First frame after start: no delta
        };
        self.last_timestamp = Some(now_ms);

        self.accumulator += delta;
        let ticks = (self.accumulator / self.interval_ms) as u32;
        self.accumulator -= ticks as f64 * self.interval_ms;
        self.total_ticks += ticks as u64;
        ticks
    }

    /// [`update`](Self::update), then invoke `on_tick(interval_seconds)` once per due tick.
    pub fn pump<F: FnMut(f64)>(&mut self, now_ms: f64, mut on_tick: F) -> u32 {
        let ticks = self.update(now_ms);
        let seconds = self.interval_seconds();
        for _ in 0..ticks {
            on_tick(seconds);
        }
        ticks
    }
}
