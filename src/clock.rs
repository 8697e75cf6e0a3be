//! Fixed-tick accumulator
//!
//! Frames arrive at whatever rate the host renders; the simulation only
//! steps once the accumulated frame time reaches the tick duration.

/// Accumulates frame time and reports when a tick is due
#[derive(Debug, Clone)]
pub struct TickClock {
    tick_time: f32,
    accumulator: f32,
}

impl TickClock {
    pub fn new(tick_time: f32) -> Self {
        Self {
            tick_time,
            accumulator: 0.0,
        }
    }

    /// Feed one frame's elapsed time. Returns true when a tick should run.
    ///
    /// A due tick resets the accumulator to zero and the frame's `dt` is
    /// dropped, so at most one tick runs per frame.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.accumulator >= self.tick_time {
            self.accumulator = 0.0;
            true
        } else {
            self.accumulator += dt.max(0.0);
            false
        }
    }
}
