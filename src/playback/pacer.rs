use std::time::{Duration, Instant};

/// Fixed-rate frame scheduler
///
/// Decides when the next update+redraw is due so the clock advances exactly
/// once per frame, independent of how often the event loop wakes.
#[derive(Debug, Clone)]
pub struct FramePacer {
    period: Duration,
    next_frame: Instant,
}

impl FramePacer {
    pub fn new(rate_hz: u32, now: Instant) -> Self {
        Self {
            period: Duration::from_secs(1) / rate_hz.max(1),
            next_frame: now,
        }
    }

    /// When the event loop should wake next
    pub fn next_frame(&self) -> Instant {
        self.next_frame
    }

    /// Returns true if a frame is due at `now`, scheduling the following one.
    /// A pacer that fell behind resynchronises instead of bursting frames.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_frame {
            return false;
        }

        self.next_frame += self.period;
        if self.next_frame <= now {
            self.next_frame = now + self.period;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_poll_is_due() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(60, start);
        assert!(pacer.poll(start));
        assert!(!pacer.poll(start));
    }

    #[test]
    fn test_one_frame_per_period() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(50, start);
        assert_eq!(pacer.period, Duration::from_millis(20));

        let frames = (0..100)
            .map(|ms| start + Duration::from_millis(ms))
            .filter(|&now| pacer.poll(now))
            .count();
        assert_eq!(frames, 5);
    }

    #[test]
    fn test_stall_does_not_burst() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(60, start);
        assert!(pacer.poll(start));

        let late = start + Duration::from_secs(1);
        assert!(pacer.poll(late));
        assert!(!pacer.poll(late));
        assert_eq!(pacer.next_frame(), late + pacer.period);
    }

    #[test]
    fn test_zero_rate_is_treated_as_one_hz() {
        let pacer = FramePacer::new(0, Instant::now());
        assert_eq!(pacer.period, Duration::from_secs(1));
    }
}
