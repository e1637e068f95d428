//! Fixed-timestep frame clock using an accumulator pattern.
//!
//! `draw_web()` fires at ~60fps with variable delta. FrameClock converts
//! that into a fixed number of discrete ticks per second, so every timed
//! behavior (modal auto-dismiss, the startup keyboard hint) is expressed
//! in ticks and fully testable without wall-clock time.

/// Tick rate shared by all deck timers.
pub const TICKS_PER_SEC: u32 = 10;

pub struct FrameClock {
    /// Milliseconds per tick (100ms at 10 ticks/sec)
    ms_per_tick: f64,
    /// Accumulated milliseconds not yet consumed as ticks
    accumulator: f64,
    /// Total elapsed ticks since creation
    pub total_ticks: u64,
    /// Timestamp of the last update (ms), None if first frame
    last_timestamp: Option<f64>,
}

impl FrameClock {
    /// Create a new FrameClock ticking `ticks_per_sec` times per second.
    pub fn new(ticks_per_sec: u32) -> Self {
        Self {
            ms_per_tick: 1000.0 / ticks_per_sec as f64,
            accumulator: 0.0,
            total_ticks: 0,
            last_timestamp: None,
        }
    }

    /// Feed a wall-clock timestamp (from `performance.now()`).
    /// Returns the number of discrete ticks to process this frame.
    ///
    /// Call once per draw frame; pass the returned count to the deck's
    /// `tick(delta_ticks)`.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        let delta = match self.last_timestamp {
            Some(prev) => {
                let d = now_ms - prev;
                // Clamp to avoid a tick flood after the tab was backgrounded
                d.clamp(0.0, 500.0)
            }
            None => 0.0, // First frame: no delta
        };
        self.last_timestamp = Some(now_ms);

        self.accumulator += delta;
        let ticks = (self.accumulator / self.ms_per_tick) as u32;
        self.accumulator -= ticks as f64 * self.ms_per_tick;
        self.total_ticks += ticks as u64;
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_returns_zero_ticks() {
        let mut clock = FrameClock::new(10);
        assert_eq!(clock.update(0.0), 0);
    }

    #[test]
    fn one_tick_at_100ms() {
        let mut clock = FrameClock::new(10); // 100ms per tick
        clock.update(0.0); // first frame
        assert_eq!(clock.update(100.0), 1);
        assert_eq!(clock.total_ticks, 1);
    }

    #[test]
    fn multiple_ticks_accumulated() {
        let mut clock = FrameClock::new(10);
        clock.update(0.0);
        assert_eq!(clock.update(350.0), 3); // 350ms = 3 ticks + 50ms remainder
        assert_eq!(clock.total_ticks, 3);
    }

    #[test]
    fn remainder_carried_over() {
        let mut clock = FrameClock::new(10);
        clock.update(0.0);
        clock.update(150.0); // 1 tick, 50ms remainder
        assert_eq!(clock.total_ticks, 1);
        // 50ms delta + 50ms carried = 100ms = 1 tick
        assert_eq!(clock.update(200.0), 1);
        assert_eq!(clock.total_ticks, 2);
    }

    #[test]
    fn clamp_large_delta() {
        let mut clock = FrameClock::new(10);
        clock.update(0.0);
        // 10 second gap (tab backgrounded) → clamped to 500ms = 5 ticks,
        // so a stale auto-dismiss timer cannot fire the instant the tab
        // regains focus after a long absence
        let ticks = clock.update(10000.0);
        assert_eq!(ticks, 5);
    }

    #[test]
    fn sub_tick_frames_accumulate() {
        let mut clock = FrameClock::new(10); // 100ms/tick
        clock.update(0.0);
        for frame in 1..=6 {
            assert_eq!(clock.update(frame as f64 * 16.0), 0); // under 100ms total
        }
        assert_eq!(clock.update(112.0), 1); // crosses 100ms
        assert_eq!(clock.total_ticks, 1);
    }

    #[test]
    fn steady_60fps() {
        let mut clock = FrameClock::new(10);
        clock.update(0.0);
        let mut total = 0u32;
        // 60 frames at ~16.67ms each = 1 second
        for i in 1..=60 {
            total += clock.update(i as f64 * 16.667);
        }
        // Approximately 10 ticks (1 second at 10 ticks/sec)
        assert!((9..=11).contains(&total), "expected ~10 ticks, got {}", total);
    }
}
