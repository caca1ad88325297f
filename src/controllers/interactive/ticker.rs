use std::time::Duration;

// Durations are nanosecond-rounded; absorb that when counting whole ticks.
const TICK_EPSILON: f64 = 1e-6;

/// Turns elapsed wall time into whole fixed-rate ticks.
///
/// Leftover time carries into the next call. When more than
/// `max_ticks_per_advance` ticks are owed the excess is dropped rather than
/// replayed.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedRateTicker {
    period_secs: f64,
    max_ticks_per_advance: u32,
    accumulator_secs: f64,
}

impl FixedRateTicker {
    /// A non-positive or non-finite period never ticks.
    #[must_use]
    pub fn new(period_secs: f64, max_ticks_per_advance: u32) -> Self {
        Self {
            period_secs,
            max_ticks_per_advance,
            accumulator_secs: 0.0,
        }
    }

    /// Number of ticks that fall due within `elapsed`.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let dt = self.period_secs;
        if !dt.is_finite() || dt <= 0.0 {
            return 0;
        }

        self.accumulator_secs += elapsed.as_secs_f64();
        if !self.accumulator_secs.is_finite() || self.accumulator_secs < 0.0 {
            self.accumulator_secs = 0.0;
        }

        let ticks_available = (self.accumulator_secs / dt + TICK_EPSILON).floor();
        let max_ticks = f64::from(self.max_ticks_per_advance);
        let ticks_run = ticks_available.min(max_ticks) as u32;

        if ticks_available > max_ticks {
            self.accumulator_secs = 0.0;
        } else {
            self.accumulator_secs = (self.accumulator_secs - f64::from(ticks_run) * dt).max(0.0);
        }

        ticks_run
    }
}

#[cfg(test)]
mod tests {
    use super::FixedRateTicker;
    use crate::controllers::interactive::data::explorer_config::ExplorerConfig;
    use std::time::Duration;

    fn ticker() -> FixedRateTicker {
        FixedRateTicker::new(1.0 / 60.0, 10)
    }

    #[test]
    fn exact_period_runs_one_tick() {
        let mut ticker = ticker();
        assert_eq!(ticker.advance(Duration::from_secs_f64(1.0 / 60.0)), 1);
    }

    #[test]
    fn partial_periods_accumulate() {
        let mut ticker = ticker();
        let half = Duration::from_secs_f64(1.0 / 120.0);

        assert_eq!(ticker.advance(half), 0);
        assert_eq!(ticker.advance(half), 1);
        assert_eq!(ticker.advance(half), 0);
    }

    #[test]
    fn one_second_runs_sixty_ticks_in_capped_batches() {
        let mut ticker = ticker();
        let mut total = 0;

        for _ in 0..6 {
            total += ticker.advance(Duration::from_secs_f64(1.0 / 6.0));
        }

        assert_eq!(total, 60);
    }

    #[test]
    fn excess_beyond_cap_is_dropped() {
        let mut ticker = ticker();

        assert_eq!(ticker.advance(Duration::from_secs(5)), 10);
        assert_eq!(ticker.advance(Duration::ZERO), 0);
    }

    #[test]
    fn zero_rate_never_ticks() {
        let mut ticker = FixedRateTicker::new(0.0, 10);
        assert_eq!(ticker.advance(Duration::from_secs(1)), 0);
    }

    #[test]
    fn period_from_config_ticks_at_configured_rate() {
        let config = ExplorerConfig {
            tick_hz: 30,
            ..ExplorerConfig::default()
        };
        let mut ticker = FixedRateTicker::new(config.dt(), config.max_ticks_per_advance);

        assert_eq!(ticker.advance(Duration::from_secs_f64(1.0 / 60.0)), 0);
        assert_eq!(ticker.advance(Duration::from_secs_f64(1.0 / 60.0)), 1);
        assert_eq!(ticker.advance(Duration::from_secs_f64(0.2)), 6);
    }
}
