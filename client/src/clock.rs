//! Fixed-rate frame pacing

use std::time::{Duration, Instant};

/// Paces the main loop at a target frame rate.
///
/// The event loop sleeps until [`FrameClock::deadline`]; when it wakes and the
/// clock is due, [`FrameClock::tick`] returns the time since the previous
/// frame and schedules the next one.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    frame: Duration,
    last: Instant,
    next: Instant,
}

impl FrameClock {
    pub fn new(fps: u32, now: Instant) -> Self {
        let frame = Duration::from_secs(1) / fps.max(1);
        Self {
            frame,
            last: now,
            next: now + frame,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// When the next frame should run
    pub fn deadline(&self) -> Instant {
        self.next
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Start a frame at `now` and return the time elapsed since the last one
    pub fn tick(&mut self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.last);
        self.last = now;
        self.next += self.frame;
        // Fell more than a frame behind (window drag, debugger); don't burst
        if self.next <= now {
            self.next = now + self.frame;
        }
        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sixty_hz_frame_duration() {
        let clock = FrameClock::new(60, Instant::now());
        assert_eq!(clock.frame_duration(), Duration::from_nanos(16_666_666));
    }

    #[test]
    fn test_due_only_after_deadline() {
        let start = Instant::now();
        let clock = FrameClock::new(60, start);
        assert!(!clock.is_due(start));
        assert!(!clock.is_due(start + Duration::from_millis(10)));
        assert!(clock.is_due(start + Duration::from_millis(17)));
    }

    #[test]
    fn test_tick_schedules_next_frame_on_grid() {
        let start = Instant::now();
        let mut clock = FrameClock::new(60, start);
        let frame = clock.frame_duration();

        let late = start + frame + Duration::from_millis(2);
        let elapsed = clock.tick(late);

        assert_eq!(elapsed, frame + Duration::from_millis(2));
        assert_eq!(clock.deadline(), start + frame * 2, "Stays on the frame grid");
    }

    #[test]
    fn test_tick_resyncs_after_long_stall() {
        let start = Instant::now();
        let mut clock = FrameClock::new(60, start);
        let stalled = start + Duration::from_secs(1);

        clock.tick(stalled);

        assert_eq!(clock.deadline(), stalled + clock.frame_duration());
        assert!(!clock.is_due(stalled));
    }
}
