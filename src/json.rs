//! JSON wire bridge
//!
//! Maps remote-control payloads onto light commands and renders the
//! steady-state snapshot back out. Fields not enabled by the light's
//! traits are dropped on input and omitted on output.

use embassy_time::{Duration, Instant};
use heapless::String;
use serde::{Deserialize, Serialize};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::effect::EFFECT_NAME_NONE;
use crate::state::LightState;

/// Wire value for an on light.
pub const STATE_ON: &str = "ON";
/// Wire value for an off light.
pub const STATE_OFF: &str = "OFF";

/// Failure while parsing or rendering a payload. Never fatal; the light
/// keeps running with its previous state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonError {
    /// Payload did not deserialize
    Malformed,
    /// Output buffer too small for the rendered state
    Overflow,
}

/// RGB color as sent over the wire, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorJson {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Wire schema of a light payload. Every field is optional; absent fields
/// are skipped on output and leave the corresponding state untouched on
/// input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LightJson<'a> {
    /// `"ON"` or `"OFF"`
    #[serde(skip_serializing_if = "Option::is_none", borrow)]
    pub state: Option<&'a str>,
    /// Brightness, 0-255
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<u8>,
    /// RGB color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorJson>,
    /// White channel value, 0-255
    #[serde(skip_serializing_if = "Option::is_none")]
    pub white_value: Option<u8>,
    /// Color temperature, 0-255 across the light's range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_temp: Option<u8>,
    /// Effect name, case insensitive; `"None"` clears
    #[serde(skip_serializing_if = "Option::is_none", borrow)]
    pub effect: Option<&'a str>,
    /// Transition length in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<u32>,
    /// Flash length in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flash: Option<u32>,
}

fn to_scalar(value: u8) -> f32 {
    f32::from(value) / 255.0
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_wire(value: f32) -> u8 {
    (value * 255.0 + 0.5) as u8
}

/// Parse a payload and apply it to the light.
///
/// Only the fields present are applied, and only those the light's traits
/// enable. If `flash` is present it takes precedence; otherwise any changed
/// color or brightness field starts a transition with the given or default
/// length. An unknown effect name is reported by the light itself and the
/// rest of the payload still applies.
pub fn parse_json(
    light: &mut LightState<'_>,
    payload: &[u8],
    now: Instant,
) -> Result<(), JsonError> {
    let Ok((request, _)) = serde_json_core::de::from_slice::<LightJson>(payload) else {
        #[cfg(feature = "esp32-log")]
        println!("light '{}': malformed payload", light.name());
        return Err(JsonError::Malformed);
    };

    let traits = *light.traits();
    let current = light.get_remote_values();
    let mut target = current;

    if let Some(state) = request.state {
        if state.eq_ignore_ascii_case(STATE_ON) {
            target = target.with_on(true);
        } else if state.eq_ignore_ascii_case(STATE_OFF) {
            target = target.with_on(false);
        }
    }
    if let Some(brightness) = request.brightness {
        if traits.supports_brightness() {
            target = target.with_brightness(to_scalar(brightness));
        }
    }
    if let Some(color) = request.color {
        if traits.supports_rgb() {
            target = target.with_rgb(
                to_scalar(color.r),
                to_scalar(color.g),
                to_scalar(color.b),
            );
        }
    }
    if let Some(white) = request.white_value {
        if traits.supports_white() {
            target = target.with_white(to_scalar(white));
        }
    }
    if let Some(color_temp) = request.color_temp {
        if traits.supports_color_temperature() {
            target = target.with_color_temperature(to_scalar(color_temp));
        }
    }

    if let Some(name) = request.effect {
        if name.eq_ignore_ascii_case(EFFECT_NAME_NONE) {
            light.stop_effect();
        } else {
            let _ = light.start_effect(name);
        }
    }

    if let Some(flash_ms) = request.flash {
        light.start_flash(&target, Duration::from_millis(u64::from(flash_ms)), now);
    } else if !target.matches(&current, &traits) {
        match request.transition {
            Some(transition_ms) => light.start_transition(
                &target,
                Duration::from_millis(u64::from(transition_ms)),
                now,
            ),
            None => light.start_default_transition(&target, now),
        }
    }

    Ok(())
}

/// Render the light's steady-state snapshot as JSON.
///
/// Emits every field enabled by the light's traits from
/// [`get_remote_values`](LightState::get_remote_values), plus the current
/// effect name.
pub fn dump_json<const N: usize>(light: &LightState<'_>) -> Result<String<N>, JsonError> {
    let traits = light.traits();
    let values = light.get_remote_values();

    let response = LightJson {
        state: Some(if values.is_on() { STATE_ON } else { STATE_OFF }),
        brightness: traits
            .supports_brightness()
            .then(|| to_wire(values.brightness())),
        color: traits.supports_rgb().then(|| ColorJson {
            r: to_wire(values.red()),
            g: to_wire(values.green()),
            b: to_wire(values.blue()),
        }),
        white_value: traits.supports_white().then(|| to_wire(values.white())),
        color_temp: traits
            .supports_color_temperature()
            .then(|| to_wire(values.color_temperature())),
        effect: Some(light.get_effect_name()),
        transition: None,
        flash: None,
    };

    serde_json_core::ser::to_string(&response).map_err(|_| JsonError::Overflow)
}
