//! Pulse (breathing) effect
//!
//! Modulates brightness on a sine wave between a floor level and the
//! snapshot's own brightness.

use core::f32::consts::PI;

use embassy_time::{Duration, Instant};
use libm::sinf;

use super::Effect;
use crate::color::ColorValues;

const DEFAULT_PERIOD_MS: u64 = 3_000;
const DEFAULT_FLOOR: f32 = 0.2;

/// Brightness breathing effect
#[derive(Debug, Clone)]
pub struct PulseEffect {
    /// Duration of one full breath
    period: Duration,
    /// Lowest brightness fraction reached at the bottom of a breath
    floor: f32,
}

impl Default for PulseEffect {
    fn default() -> Self {
        Self {
            period: Duration::from_millis(DEFAULT_PERIOD_MS),
            floor: DEFAULT_FLOOR,
        }
    }
}

impl PulseEffect {
    #[must_use]
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    #[must_use]
    pub fn with_floor(mut self, floor: f32) -> Self {
        self.floor = floor.clamp(0.0, 1.0);
        self
    }
}

impl Effect for PulseEffect {
    fn apply(&mut self, now: Instant, values: &ColorValues) -> ColorValues {
        let period_ms = self.period.as_millis().max(1);
        let phase_ms = now.as_millis() % period_ms;
        #[allow(clippy::cast_precision_loss)]
        let phase = phase_ms as f32 / period_ms as f32;

        // Raised sine in [0, 1], starting at the top of the breath.
        let wave = 0.5 + 0.5 * sinf(2.0 * PI * phase + PI / 2.0);
        let level = self.floor + (1.0 - self.floor) * wave;

        values.with_brightness(values.brightness() * level)
    }
}
