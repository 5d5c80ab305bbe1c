//! Wall-clock pacing for the generation animation and the game clock.
//!
//! The maze is carved a few cells per frame so the player can watch it grow. How many cells depends
//! on how much time passed since the previous frame, which keeps the animation speed independent of
//! the terminal's redraw rate.

use std::time::{Duration, Instant};

/// Default delay between two carving steps, in milliseconds.
///
/// This constant controls the speed of the generation animation. A lower value carves the maze
/// faster, while a higher value slows it down to make the frontier growth easier to follow.
pub(crate) const DEFAULT_CARVE_DELAY_MS: u64 = 15;

/// Pacing state for the animated maze generation.
///
/// This structure releases generation steps according to the configured delay. Each released step
/// is carved in full before the next frame is drawn.
pub(crate) struct CarveAnimation {
    /// Delay between two carving steps. A zero delay carves the whole maze on the next frame.
    pub(crate) delay: Duration,
    /// Timestamp of the last released step.
    pub(crate) last_update_time: Instant,
}

impl CarveAnimation {
    /// Creates a new animation releasing one step every `delay`.
    pub(crate) fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_update_time: Instant::now(),
        }
    }

    /// Restarts the pacing from now.
    pub(crate) fn reset(&mut self) {
        self.last_update_time = Instant::now();
    }

    /// Returns how many steps are due since the last call.
    pub(crate) fn due_steps(&mut self) -> usize {
        self.due_steps_at(Instant::now())
    }

    /// Returns how many steps are due at `now`.
    ///
    /// The time left over after the due steps carries over to the next call, so no step is lost to
    /// rounding between frames.
    fn due_steps_at(&mut self, now: Instant) -> usize {
        if self.delay.is_zero() {
            self.last_update_time = now;
            return usize::MAX;
        }

        let elapsed = now.saturating_duration_since(self.last_update_time);
        let due = elapsed.as_nanos() / self.delay.as_nanos();
        if due == 0 {
            return 0;
        }

        let consumed = u32::try_from(due)
            .ok()
            .and_then(|steps| self.delay.checked_mul(steps));
        match consumed {
            Some(consumed) => self.last_update_time += consumed,
            None => self.last_update_time = now,
        }

        usize::try_from(due).unwrap_or(usize::MAX)
    }
}

/// Stopwatch measuring the time between two frames.
pub(crate) struct FrameClock {
    /// Timestamp of the previous lap.
    pub(crate) last_lap: Instant,
}

impl FrameClock {
    /// Creates a clock whose first lap starts now.
    pub(crate) fn new() -> Self {
        Self {
            last_lap: Instant::now(),
        }
    }

    /// Restarts the current lap from now.
    pub(crate) fn reset(&mut self) {
        self.last_lap = Instant::now();
    }

    /// Returns the time elapsed since the previous lap and starts a new one.
    pub(crate) fn lap(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(self.last_lap);
        self.last_lap = now;

        elapsed
    }
}
