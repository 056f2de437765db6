//! Strobe effect
//!
//! Alternates between the incoming snapshot and off at a fixed period.
//! During the on phase the snapshot passes through unchanged.

use embassy_time::{Duration, Instant};

use super::Effect;
use crate::color::ColorValues;

const DEFAULT_PERIOD_MS: u64 = 500;

/// Hard on/off alternation effect
#[derive(Debug, Clone)]
pub struct StrobeEffect {
    /// Duration of one on/off cycle
    period: Duration,
}

impl Default for StrobeEffect {
    fn default() -> Self {
        Self {
            period: Duration::from_millis(DEFAULT_PERIOD_MS),
        }
    }
}

impl StrobeEffect {
    #[must_use]
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }
}

impl Effect for StrobeEffect {
    fn apply(&mut self, now: Instant, values: &ColorValues) -> ColorValues {
        let period_ms = self.period.as_millis().max(1);
        let phase_ms = now.as_millis() % period_ms;

        if phase_ms < period_ms / 2 {
            *values
        } else {
            values.with_on(false)
        }
    }
}
