/// Frames-per-second counter driven by the host clock.
///
/// The counter owns the optional millisecond clock captured from the
/// host window at construction. Without one it degrades silently: ticks
/// are ignored and no measurement is ever reported.

use crate::host::ClockFn;

/// Length of one measurement window, in milliseconds.
pub const MEASUREMENT_WINDOW_MS: f64 = 1000.0;

/// Tracks the frame rate over one-second measurement windows.
///
/// The first tick opens a window without counting a frame (it only
/// marks the boundary); every later tick counts one frame interval.
/// When a window has run for at least a second, the measurement is
/// refreshed and a new window starts at the current tick.
pub struct FpsCounter {
    /// Millisecond clock, absent on clockless hosts
    clock: Option<ClockFn>,
    /// Timestamp the current window opened at
    window_start: Option<f64>,
    /// Frames counted in the current window
    frames_in_window: u32,
    /// Most recent settled measurement
    measurement: Option<f32>,
}

impl FpsCounter {
    /// Create a counter over the host clock, if the host has one.
    pub fn new(clock: Option<ClockFn>) -> Self {
        Self {
            clock,
            window_start: None,
            frames_in_window: 0,
            measurement: None,
        }
    }

    /// True if a host clock is available to measure against.
    pub fn has_clock(&self) -> bool {
        self.clock.is_some()
    }

    /// Count one frame.
    ///
    /// No-op without a host clock.
    pub fn tick(&mut self) {
        let Some(clock) = &self.clock else {
            return;
        };
        let now = clock();
        let Some(start) = self.window_start else {
            self.window_start = Some(now);
            return;
        };
        self.frames_in_window += 1;
        let elapsed = now - start;
        if elapsed >= MEASUREMENT_WINDOW_MS {
            self.measurement =
                Some((self.frames_in_window as f64 * 1000.0 / elapsed) as f32);
            self.window_start = Some(now);
            self.frames_in_window = 0;
        }
    }

    /// Most recent measurement in frames per second.
    ///
    /// None until a full window has settled, and always None on
    /// clockless hosts.
    pub fn fps(&self) -> Option<f32> {
        self.measurement
    }
}

#[cfg(test)]
#[path = "fps_tests.rs"]
mod tests;
