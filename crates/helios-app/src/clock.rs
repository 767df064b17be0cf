//! Frame timing and scaled simulation time.
//!
//! [`FrameClock`] measures real frame time and accumulates a separate
//! simulation time scaled by the config's time multiplier, so orbits can
//! run faster or slower than wall clock without affecting camera speed.

use std::time::Instant;
use tracing::warn;

/// Maximum frame time clamp. A stall (debugger, window drag) otherwise
/// teleports every planet along its orbit on the next frame.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Per-frame clock with real delta time and scaled simulation time.
pub struct FrameClock {
    previous_time: Instant,
    state: ClockState,
}

/// The time-keeping core, separated from wall-clock sampling for testing.
#[derive(Debug, Clone, Copy)]
struct ClockState {
    sim_time: f64,
    time_multiplier: f64,
    frame_count: u64,
}

impl ClockState {
    fn new(time_multiplier: f64) -> Self {
        Self {
            sim_time: 0.0,
            time_multiplier,
            frame_count: 0,
        }
    }

    /// Advance by a frame time in seconds, returning the clamped delta.
    fn advance(&mut self, frame_time: f64) -> f64 {
        let dt = if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            MAX_FRAME_TIME
        } else {
            frame_time
        };
        self.sim_time += dt * self.time_multiplier;
        self.frame_count += 1;
        dt
    }
}

impl FrameClock {
    /// Create a clock starting now with the given simulation multiplier.
    #[must_use]
    pub fn new(time_multiplier: f64) -> Self {
        Self {
            previous_time: Instant::now(),
            state: ClockState::new(time_multiplier),
        }
    }

    /// Measure the elapsed time since the last tick.
    ///
    /// Returns the real (clamped) frame delta in seconds for camera movement;
    /// the scaled simulation time advances as a side effect.
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.previous_time).as_secs_f64();
        self.previous_time = now;
        self.state.advance(frame_time)
    }

    /// Total scaled simulation time in seconds, the `t` of the orbit math.
    #[must_use]
    pub fn sim_time(&self) -> f64 {
        self.state.sim_time
    }

    /// Number of frames ticked so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.state.frame_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_returns_real_delta() {
        let mut state = ClockState::new(4.0);
        let dt = state.advance(0.016);
        assert!((dt - 0.016).abs() < 1e-12);
    }

    #[test]
    fn test_sim_time_is_scaled() {
        let mut state = ClockState::new(4.0);
        state.advance(0.5 * MAX_FRAME_TIME);
        assert!((state.sim_time - 4.0 * 0.5 * MAX_FRAME_TIME).abs() < 1e-12);
    }

    #[test]
    fn test_frame_time_clamped() {
        let mut state = ClockState::new(1.0);
        let dt = state.advance(10.0);
        assert!((dt - MAX_FRAME_TIME).abs() < 1e-12);
        assert!((state.sim_time - MAX_FRAME_TIME).abs() < 1e-12);
    }

    #[test]
    fn test_zero_multiplier_freezes_sim_time() {
        let mut state = ClockState::new(0.0);
        let dt = state.advance(0.016);
        assert!(dt > 0.0, "camera time still advances");
        assert_eq!(state.sim_time, 0.0);
    }

    #[test]
    fn test_sim_time_accumulates_across_frames() {
        let mut state = ClockState::new(2.0);
        for _ in 0..10 {
            state.advance(0.01);
        }
        assert!((state.sim_time - 0.2).abs() < 1e-10);
        assert_eq!(state.frame_count, 10);
    }
}
