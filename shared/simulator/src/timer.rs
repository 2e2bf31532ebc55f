/// Elapsed-time marker over the level's logical millisecond clock.
///
/// The clock advances `TICK_LENGTH_MS` per update call, so cooldowns,
/// respawn delays and animation pacing are deterministic under test.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timer {
    origin_ms: u64,
}

impl Timer {
    pub fn new(now_ms: u64) -> Timer {
        Timer { origin_ms: now_ms }
    }

    pub fn reset(&mut self, now_ms: u64) {
        self.origin_ms = now_ms;
    }

    pub fn elapsed(&self, now_ms: u64, threshold_ms: u64) -> bool {
        now_ms.saturating_sub(self.origin_ms) >= threshold_ms
    }
}

#[cfg(test)]
mod test {
    use super::Timer;

    #[test]
    fn test_elapsed() {
        let mut timer = Timer::new(100);
        assert!(!timer.elapsed(100, 50));
        assert!(!timer.elapsed(149, 50));
        assert!(timer.elapsed(150, 50));
        assert!(timer.elapsed(1000, 50));

        timer.reset(1000);
        assert!(!timer.elapsed(1049, 50));
        assert!(timer.elapsed(1050, 50));
    }
}
