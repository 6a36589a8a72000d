use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Gates how often generations are advanced, independent of how often the
/// board is drawn.
pub struct GenerationPacer {
    interval: Duration,
    started: Instant,
}

impl GenerationPacer {
    pub fn new(generations_per_second: f64) -> Self {
        let mut pacer = Self {
            interval: Duration::ZERO,
            started: Instant::now(),
        };
        pacer.set_rate(generations_per_second);
        pacer
    }

    /// Non-positive or non-finite rates disable pacing
    pub fn set_rate(&mut self, generations_per_second: f64) {
        self.interval = if generations_per_second.is_finite() && generations_per_second > 0. {
            Duration::from_secs_f64(1. / generations_per_second)
        } else {
            Duration::ZERO
        };
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Restart the current interval
    pub fn mark(&mut self) {
        self.started = Instant::now();
    }

    pub fn is_due(&self) -> bool {
        self.started.elapsed() >= self.interval
    }

    /// Time left before the next generation is due
    pub fn remaining(&self) -> Duration {
        self.interval.saturating_sub(self.started.elapsed())
    }

    /// Sleep out the rest of the interval, then start the next one
    pub fn wait(&mut self) {
        let remaining = self.remaining();
        if !remaining.is_zero() {
            sleep(remaining);
        }
        self.mark();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_from_rate() {
        let pacer = GenerationPacer::new(4.0);
        assert_eq!(pacer.interval(), Duration::from_millis(250));
    }

    #[test]
    fn test_zero_rate_never_waits() {
        let pacer = GenerationPacer::new(0.0);
        assert_eq!(pacer.interval(), Duration::ZERO);
        assert!(pacer.is_due());
        assert_eq!(pacer.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_not_due_right_after_mark() {
        let mut pacer = GenerationPacer::new(0.5);
        pacer.mark();
        assert!(!pacer.is_due());
        assert!(pacer.remaining() > Duration::from_secs(1));
    }

    #[test]
    fn test_wait_blocks_for_interval() {
        let mut pacer = GenerationPacer::new(50.0);
        pacer.mark();
        let before = Instant::now();
        pacer.wait();
        assert!(before.elapsed() >= Duration::from_millis(15));
    }
}
