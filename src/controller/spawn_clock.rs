/// Fixed-period spawn timer for hosts that poll elapsed time instead of
/// registering an interval callback.
#[derive(Debug, Clone)]
pub struct SpawnClock {
    period_ms: f64,
    elapsed_ms: f64,
}

impl SpawnClock {
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms: f64::from(period_ms.max(1)),
            elapsed_ms: 0.0,
        }
    }

    /// Add elapsed time and return how many spawn ticks fell due.
    pub fn tick(&mut self, dt_ms: f64) -> u32 {
        self.elapsed_ms += dt_ms.max(0.0);
        let mut due = 0;
        while self.elapsed_ms >= self.period_ms {
            self.elapsed_ms -= self.period_ms;
            due += 1;
        }
        due
    }

    /// Time carried towards the next tick.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_once_per_period() {
        let mut clock = SpawnClock::new(1200);
        assert_eq!(clock.tick(1199.0), 0);
        assert_eq!(clock.tick(1.0), 1);
        assert_eq!(clock.tick(600.0), 0);
        assert_eq!(clock.tick(600.0), 1);
    }

    #[test]
    fn test_long_stall_catches_up() {
        let mut clock = SpawnClock::new(1200);
        assert_eq!(clock.tick(3700.0), 3);
        assert_eq!(clock.tick(1100.0), 1);
    }

    #[test]
    fn test_reset_discards_partial_period() {
        let mut clock = SpawnClock::new(1200);
        clock.tick(1000.0);
        clock.reset();
        assert_eq!(clock.tick(1000.0), 0);
    }
}
