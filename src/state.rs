//! Light state orchestrator
//!
//! [`LightState`] reconciles three sources of truth into one output stream:
//! the last committed snapshot, an in-flight time-bounded transformer
//! (transition or flash) and an optionally running effect. It is driven by
//! one tick per scheduler iteration on a single cooperative control loop;
//! nothing here blocks or performs I/O.

use embassy_time::{Duration, Instant};
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::ColorValues;
use crate::effect::{EFFECT_NAME_NONE, EffectRegistry, EffectSlot, UnknownEffectError};
use crate::traits::LightTraits;
use crate::transformer::{Flash, Transition, TransformerSlot};
use crate::{Component, setup_priority};

/// Default transition length used when a command carries none.
pub const DEFAULT_TRANSITION_LENGTH: Duration = Duration::from_millis(1000);

/// Maximum number of change-notification subscribers.
pub const MAX_SUBSCRIBERS: usize = 8;

/// The subscriber list is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberCapacityError;

/// On/brightness state restored from persistence by the device firmware.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestoredState {
    pub on: bool,
    pub brightness: f32,
}

/// Configuration for a light instance.
pub struct LightStateConfig<'a> {
    /// Human-readable light name
    pub name: &'a str,
    /// Capabilities, fixed for the light's lifetime
    pub traits: LightTraits,
    /// Effects selectable by name
    pub effects: EffectRegistry,
    /// Transition length used when a command carries none
    pub default_transition_length: Duration,
    /// State loaded from persistence, applied during setup
    pub restored: Option<RestoredState>,
}

impl Default for LightStateConfig<'_> {
    fn default() -> Self {
        Self {
            name: "light",
            traits: LightTraits::new(),
            effects: EffectRegistry::new(),
            default_transition_length: DEFAULT_TRANSITION_LENGTH,
            restored: None,
        }
    }
}

/// Light state machine - the main orchestrator.
///
/// Owns at most one active transformer and at most one active effect, both
/// in exclusive single slots that are replaced wholesale by each command.
/// Cancellation is just replacement; transformers hold no external
/// resources, only captured values and timestamps.
pub struct LightState<'a> {
    name: &'a str,
    traits: LightTraits,
    effects: EffectRegistry,
    default_transition_length: Duration,

    // Internal state
    values: ColorValues,
    last_values: ColorValues,
    transformer: Option<TransformerSlot>,
    effect: Option<EffectSlot>,
    restored: Option<RestoredState>,

    send_callbacks: Vec<&'a dyn Fn(), MAX_SUBSCRIBERS>,
}

impl<'a> LightState<'a> {
    /// Create a new light from its configuration.
    pub fn new(config: LightStateConfig<'a>) -> Self {
        Self {
            name: config.name,
            traits: config.traits,
            effects: config.effects,
            default_transition_length: config.default_transition_length,
            values: ColorValues::default(),
            last_values: ColorValues::default(),
            transformer: None,
            effect: None,
            restored: config.restored,
            send_callbacks: Vec::new(),
        }
    }

    pub const fn name(&self) -> &str {
        self.name
    }

    pub const fn traits(&self) -> &LightTraits {
        &self.traits
    }

    pub const fn default_transition_length(&self) -> Duration {
        self.default_transition_length
    }

    pub fn set_default_transition_length(&mut self, length: Duration) {
        self.default_transition_length = length;
    }

    /// Whether any effects are registered for this light.
    pub fn supports_effects(&self) -> bool {
        !self.effects.is_empty()
    }

    /// Set the color values immediately.
    ///
    /// Clears any active transformer. An active effect is left untouched
    /// and keeps deriving its animation from the new committed snapshot.
    pub fn set_immediately(&mut self, target: &ColorValues) {
        self.transformer = None;
        self.values = target.clamped();
        self.send_values();
    }

    /// Start a linear transition to the target values.
    ///
    /// If this light doesn't support transitions, or the length is zero,
    /// the target is applied immediately instead.
    pub fn start_transition(&mut self, target: &ColorValues, length: Duration, now: Instant) {
        if !self.traits.supports_transition() || length.as_millis() == 0 {
            self.set_immediately(target);
            return;
        }
        self.transformer = Some(TransformerSlot::Transition(Transition::new(
            self.values,
            target.clamped(),
            length,
            now,
        )));
        self.send_values();
    }

    /// Start a transition using the configured default length.
    pub fn start_default_transition(&mut self, target: &ColorValues, now: Instant) {
        self.start_transition(target, self.default_transition_length, now);
    }

    /// Start a flash: hold the target for `length`, then revert to the
    /// values that were active when the flash started.
    ///
    /// A zero length shows nothing and is a no-op.
    pub fn start_flash(&mut self, target: &ColorValues, length: Duration, now: Instant) {
        if length.as_millis() == 0 {
            return;
        }
        self.transformer = Some(TransformerSlot::Flash(Flash::new(
            self.values,
            target.clamped(),
            length,
            now,
        )));
        self.send_values();
    }

    /// Start an effect by name, case insensitive.
    ///
    /// The sentinel name `"None"` clears the active effect. An unknown name
    /// is reported and leaves the previous effect (if any) running.
    pub fn start_effect(&mut self, name: &str) -> Result<(), UnknownEffectError> {
        if name.eq_ignore_ascii_case(EFFECT_NAME_NONE) {
            self.stop_effect();
            return Ok(());
        }
        let Some(id) = self.effects.lookup(name) else {
            #[cfg(feature = "esp32-log")]
            println!("light '{}': unknown effect '{}'", self.name, name);
            return Err(UnknownEffectError);
        };
        if let Some(effect) = &mut self.effect {
            effect.stop();
        }
        let mut slot = id.to_slot();
        slot.start();
        self.effect = Some(slot);
        self.send_values();
        Ok(())
    }

    /// Stop the current effect, if one is active. Idempotent.
    pub fn stop_effect(&mut self) {
        if let Some(mut effect) = self.effect.take() {
            effect.stop();
            self.send_values();
        }
    }

    /// Name of the active effect, or `"None"`.
    pub fn get_effect_name(&self) -> &'static str {
        match &self.effect {
            Some(effect) => effect.name(),
            None => EFFECT_NAME_NONE,
        }
    }

    /// Advance the transformer and effect, and return the composed output
    /// snapshot for this tick.
    ///
    /// A transformer observed finished here commits its finish values into
    /// the light (the transition target, or the flash's captured begin) and
    /// is dropped; the value returned for this tick is still the one just
    /// computed, the commit shows from the next tick on. An active effect
    /// layers its animation on top of the transformer's output.
    pub fn get_current_values(&mut self, now: Instant) -> ColorValues {
        let mut result = self.values;

        if let Some(transformer) = self.transformer {
            result = transformer.value_at(now);
            if transformer.is_finished(now) {
                self.values = transformer.finish_values();
                self.transformer = None;
            }
        }

        if let Some(effect) = &mut self.effect {
            result = effect.apply(now, &result);
        }

        let result = result.clamped();
        self.last_values = result;
        result
    }

    /// Last snapshot returned by [`get_current_values`](Self::get_current_values),
    /// without recomputation.
    pub const fn get_current_values_lazy(&self) -> &ColorValues {
        &self.last_values
    }

    /// The steady-state snapshot for external reporting.
    ///
    /// During a transition this is the target (intent, not progress);
    /// during a flash it is the pre-flash snapshot. Effect animation is
    /// never reflected here.
    pub fn get_remote_values(&self) -> ColorValues {
        match &self.transformer {
            Some(transformer @ TransformerSlot::Transition(_)) => *transformer.target(),
            Some(transformer @ TransformerSlot::Flash(_)) => *transformer.begin(),
            None => self.values,
        }
    }

    /// Subscribe to light change events.
    ///
    /// Callbacks are invoked in registration order and carry no payload;
    /// subscribers pull the data they need through
    /// [`get_remote_values`](Self::get_remote_values). A callback must not
    /// issue commands on the light it was notified from within the same
    /// tick; flag the notification and act on it from the control loop.
    pub fn add_send_callback(
        &mut self,
        callback: &'a dyn Fn(),
    ) -> Result<(), SubscriberCapacityError> {
        self.send_callbacks
            .push(callback)
            .map_err(|_| SubscriberCapacityError)
    }

    /// Invoke every registered subscriber callback, in registration order.
    pub fn send_values(&self) {
        for callback in &self.send_callbacks {
            callback();
        }
    }
}

impl Component for LightState<'_> {
    /// Apply the restored on/brightness state before the first tick.
    fn setup(&mut self) {
        if let Some(restored) = self.restored.take() {
            self.values = self
                .values
                .with_on(restored.on)
                .with_brightness(restored.brightness);
            self.last_values = self.values;
        }
    }

    /// Shortly after hardware, so the first reported state reflects real
    /// output capability.
    fn setup_priority(&self) -> f32 {
        setup_priority::LIGHT
    }

    /// Per-tick update hook: recompute the composed output.
    fn update(&mut self, now: Instant) {
        let _ = self.get_current_values(now);
    }
}
