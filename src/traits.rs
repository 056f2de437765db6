//! Light capability flags
//!
//! [`LightTraits`] declares which visual capabilities a light instance
//! supports. The set is fixed at configuration time and gates which JSON
//! fields are accepted/emitted and whether transition commands are honored.

/// Capability set of a light, fixed after construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LightTraits {
    brightness: bool,
    rgb: bool,
    white: bool,
    color_temperature: bool,
    transition: bool,
}

impl LightTraits {
    /// A light with no capabilities beyond on/off.
    pub const fn new() -> Self {
        Self {
            brightness: false,
            rgb: false,
            white: false,
            color_temperature: false,
            transition: false,
        }
    }

    #[must_use]
    pub const fn with_brightness(mut self) -> Self {
        self.brightness = true;
        self
    }

    #[must_use]
    pub const fn with_rgb(mut self) -> Self {
        self.rgb = true;
        self
    }

    #[must_use]
    pub const fn with_white(mut self) -> Self {
        self.white = true;
        self
    }

    #[must_use]
    pub const fn with_color_temperature(mut self) -> Self {
        self.color_temperature = true;
        self
    }

    #[must_use]
    pub const fn with_transition(mut self) -> Self {
        self.transition = true;
        self
    }

    pub const fn supports_brightness(&self) -> bool {
        self.brightness
    }

    pub const fn supports_rgb(&self) -> bool {
        self.rgb
    }

    pub const fn supports_white(&self) -> bool {
        self.white
    }

    pub const fn supports_color_temperature(&self) -> bool {
        self.color_temperature
    }

    pub const fn supports_transition(&self) -> bool {
        self.transition
    }
}
