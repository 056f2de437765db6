//! Rainbow cycling effect
//!
//! Rotates the snapshot's color through the HSV hue wheel while keeping
//! its on/off state and brightness.

use embassy_time::{Duration, Instant};
use smart_leds::hsv::{Hsv, hsv2rgb};

use super::Effect;
use crate::color::ColorValues;

const DEFAULT_CYCLE_MS: u64 = 12_000;

/// Hue rotation effect
#[derive(Debug, Clone)]
pub struct RainbowEffect {
    /// Duration of one complete hue cycle
    cycle_duration: Duration,
    /// Saturation (0-255)
    saturation: u8,
}

impl Default for RainbowEffect {
    fn default() -> Self {
        Self {
            cycle_duration: Duration::from_millis(DEFAULT_CYCLE_MS),
            saturation: 255,
        }
    }
}

impl RainbowEffect {
    /// Set the cycle duration
    #[must_use]
    pub fn with_cycle_duration(mut self, duration: Duration) -> Self {
        self.cycle_duration = duration;
        self
    }

    /// Set the saturation
    #[must_use]
    pub fn with_saturation(mut self, saturation: u8) -> Self {
        self.saturation = saturation;
        self
    }
}

impl Effect for RainbowEffect {
    fn apply(&mut self, now: Instant, values: &ColorValues) -> ColorValues {
        let cycle_ms = self.cycle_duration.as_millis().max(1);
        let progress_ms = now.as_millis() % cycle_ms;
        #[allow(clippy::cast_possible_truncation)]
        let hue = ((progress_ms * 255) / cycle_ms) as u8;

        let rgb = hsv2rgb(Hsv {
            hue,
            sat: self.saturation,
            val: 255,
        });

        values.with_rgb(
            f32::from(rgb.r) / 255.0,
            f32::from(rgb.g) / 255.0,
            f32::from(rgb.b) / 255.0,
        )
    }
}
