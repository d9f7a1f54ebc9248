use std::{
    thread,
    time::{Duration, Instant},
};

/// Paces the host loop at a fixed frame interval
///
/// Deadlines are scheduled from the previous deadline rather than from when
/// the frame finished, so short frames don't accumulate drift. A frame that
/// overruns by more than a full interval resets the schedule instead of
/// trying to catch up.
pub struct FrameClock {
    interval: Option<Duration>,
    next_frame: Instant,
}

impl FrameClock {
    pub fn new(interval: Option<Duration>) -> Self {
        Self {
            interval,
            next_frame: Instant::now(),
        }
    }

    /// Blocks until the next frame is due; returns whether it slept at all
    pub fn wait(&mut self) -> bool {
        let Some(interval) = self.interval else {
            return false;
        };

        let now = Instant::now();
        self.next_frame += interval;
        if self.next_frame > now {
            thread::sleep(self.next_frame - now);
            true
        } else {
            if now - self.next_frame > interval {
                self.next_frame = now;
            }
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unthrottled_never_sleeps() {
        let mut clock = FrameClock::new(None);

        let start = Instant::now();
        assert!(!clock.wait());
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[test]
    fn throttled_waits_for_interval() {
        let interval = Duration::from_millis(50);
        let start = Instant::now();
        let mut clock = FrameClock::new(Some(interval));

        assert!(clock.wait());
        assert!(clock.wait());
        assert!(start.elapsed() >= interval * 2);
    }

    #[test]
    fn overrun_resets_schedule() {
        let interval = Duration::from_millis(1);
        let mut clock = FrameClock::new(Some(interval));
        thread::sleep(Duration::from_millis(10));
        let late = Instant::now();

        assert!(!clock.wait());
        assert!(clock.next_frame >= late);
    }
}
