//! Normalized color value model
//!
//! A [`ColorValues`] is an immutable-style record of a light's visual state
//! at one instant: on/off plus normalized channel scalars. All scalars live
//! in `[0, 1]`; which of them are meaningful for a given light is decided
//! by its [`LightTraits`](crate::traits::LightTraits).

use smart_leds::RGB8;

use crate::traits::LightTraits;

/// Re-export of the hardware color type used by downstream strip drivers.
pub type Rgb = RGB8;

fn lerp_f(start: f32, end: f32, completion: f32) -> f32 {
    start + (end - start) * completion
}

/// Snapshot of a light's visual state.
///
/// Pure value semantics: setters return a modified copy, never mutate a
/// shared instance. Every scalar is clamped to `[0, 1]` on the way in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorValues {
    on: bool,
    brightness: f32,
    red: f32,
    green: f32,
    blue: f32,
    white: f32,
    color_temperature: f32,
}

impl Default for ColorValues {
    /// Off, with all channels at full scale.
    fn default() -> Self {
        Self {
            on: false,
            brightness: 1.0,
            red: 1.0,
            green: 1.0,
            blue: 1.0,
            white: 1.0,
            color_temperature: 0.0,
        }
    }
}

impl ColorValues {
    /// Create a snapshot from raw field values, clamping every scalar.
    pub fn new(
        on: bool,
        brightness: f32,
        red: f32,
        green: f32,
        blue: f32,
        white: f32,
        color_temperature: f32,
    ) -> Self {
        Self {
            on,
            brightness,
            red,
            green,
            blue,
            white,
            color_temperature,
        }
        .clamped()
    }

    /// Linearly blend two snapshots.
    ///
    /// Each scalar is interpolated field-wise. The `on` flag flips to the
    /// end value as soon as `completion > 0`, so a light turning on is
    /// visible from the first animated frame.
    pub fn lerp(start: &Self, end: &Self, completion: f32) -> Self {
        let completion = completion.clamp(0.0, 1.0);
        Self {
            on: if completion > 0.0 { end.on } else { start.on },
            brightness: lerp_f(start.brightness, end.brightness, completion),
            red: lerp_f(start.red, end.red, completion),
            green: lerp_f(start.green, end.green, completion),
            blue: lerp_f(start.blue, end.blue, completion),
            white: lerp_f(start.white, end.white, completion),
            color_temperature: lerp_f(
                start.color_temperature,
                end.color_temperature,
                completion,
            ),
        }
    }

    /// Copy of this snapshot with every scalar clamped to `[0, 1]`.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.brightness = self.brightness.clamp(0.0, 1.0);
        self.red = self.red.clamp(0.0, 1.0);
        self.green = self.green.clamp(0.0, 1.0);
        self.blue = self.blue.clamp(0.0, 1.0);
        self.white = self.white.clamp(0.0, 1.0);
        self.color_temperature = self.color_temperature.clamp(0.0, 1.0);
        self
    }

    /// Compare two snapshots over the fields a light actually supports.
    ///
    /// The `on` flag is always compared; every other field only participates
    /// when the corresponding trait is set.
    #[allow(clippy::float_cmp)]
    pub fn matches(&self, other: &Self, traits: &LightTraits) -> bool {
        if self.on != other.on {
            return false;
        }
        if traits.supports_brightness() && self.brightness != other.brightness {
            return false;
        }
        if traits.supports_rgb()
            && (self.red != other.red || self.green != other.green || self.blue != other.blue)
        {
            return false;
        }
        if traits.supports_white() && self.white != other.white {
            return false;
        }
        if traits.supports_color_temperature()
            && self.color_temperature != other.color_temperature
        {
            return false;
        }
        true
    }

    #[must_use]
    pub fn with_on(mut self, on: bool) -> Self {
        self.on = on;
        self
    }

    #[must_use]
    pub fn with_brightness(mut self, brightness: f32) -> Self {
        self.brightness = brightness.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn with_red(mut self, red: f32) -> Self {
        self.red = red.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn with_green(mut self, green: f32) -> Self {
        self.green = green.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn with_blue(mut self, blue: f32) -> Self {
        self.blue = blue.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn with_rgb(self, red: f32, green: f32, blue: f32) -> Self {
        self.with_red(red).with_green(green).with_blue(blue)
    }

    #[must_use]
    pub fn with_white(mut self, white: f32) -> Self {
        self.white = white.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn with_color_temperature(mut self, color_temperature: f32) -> Self {
        self.color_temperature = color_temperature.clamp(0.0, 1.0);
        self
    }

    pub const fn is_on(&self) -> bool {
        self.on
    }

    pub const fn brightness(&self) -> f32 {
        self.brightness
    }

    pub const fn red(&self) -> f32 {
        self.red
    }

    pub const fn green(&self) -> f32 {
        self.green
    }

    pub const fn blue(&self) -> f32 {
        self.blue
    }

    pub const fn white(&self) -> f32 {
        self.white
    }

    pub const fn color_temperature(&self) -> f32 {
        self.color_temperature
    }

    /// Project this snapshot to a driver-ready [`Rgb`] value.
    ///
    /// Channels are scaled by brightness; an off light maps to black.
    /// This is the seam towards hardware output components, which own the
    /// actual strip/PWM writes.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn as_rgb(&self) -> Rgb {
        let scale = if self.on { self.brightness * 255.0 } else { 0.0 };
        Rgb {
            r: (self.red * scale) as u8,
            g: (self.green * scale) as u8,
            b: (self.blue * scale) as u8,
        }
    }
}
