//! Effect system with compile-time known effect variants
//!
//! An effect is a continuous animation that derives the output snapshot on
//! every tick while active. All effects are stored in an enum to avoid heap
//! allocations. Each effect implements the [`Effect`] trait and is selected
//! by case-insensitive name from an [`EffectRegistry`] built at
//! configuration time.

mod pulse;
mod rainbow;
mod strobe;

use embassy_time::Instant;
use heapless::Vec;

pub use pulse::PulseEffect;
pub use rainbow::RainbowEffect;
pub use strobe::StrobeEffect;

use crate::color::ColorValues;

/// Name reported when no effect is active, and accepted to clear one.
pub const EFFECT_NAME_NONE: &str = "None";

const EFFECT_NAME_PULSE: &str = "pulse";
const EFFECT_NAME_RAINBOW: &str = "rainbow";
const EFFECT_NAME_STROBE: &str = "strobe";

/// Maximum number of effects a registry can hold.
pub const MAX_EFFECTS: usize = 8;

pub trait Effect {
    /// Called once when the effect becomes active
    fn start(&mut self) {}

    /// Called once when the effect is stopped or replaced
    fn stop(&mut self) {}

    /// Derive the output snapshot for one tick
    fn apply(&mut self, now: Instant, values: &ColorValues) -> ColorValues;
}

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectId {
    Pulse,
    Rainbow,
    Strobe,
}

impl EffectId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pulse => EFFECT_NAME_PULSE,
            Self::Rainbow => EFFECT_NAME_RAINBOW,
            Self::Strobe => EFFECT_NAME_STROBE,
        }
    }

    /// Construct a fresh effect instance for this id.
    pub fn to_slot(self) -> EffectSlot {
        match self {
            Self::Pulse => EffectSlot::Pulse(PulseEffect::default()),
            Self::Rainbow => EffectSlot::Rainbow(RainbowEffect::default()),
            Self::Strobe => EffectSlot::Strobe(StrobeEffect::default()),
        }
    }
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    /// Brightness breathing on a sine wave
    Pulse(PulseEffect),
    /// Hue rotation through the HSV wheel
    Rainbow(RainbowEffect),
    /// Hard on/off alternation
    Strobe(StrobeEffect),
}

impl EffectSlot {
    /// Get the effect ID for external observation
    pub const fn id(&self) -> EffectId {
        match self {
            Self::Pulse(_) => EffectId::Pulse,
            Self::Rainbow(_) => EffectId::Rainbow,
            Self::Strobe(_) => EffectId::Strobe,
        }
    }

    /// Declared name of the active effect
    pub const fn name(&self) -> &'static str {
        self.id().as_str()
    }

    pub fn start(&mut self) {
        match self {
            Self::Pulse(effect) => Effect::start(effect),
            Self::Rainbow(effect) => Effect::start(effect),
            Self::Strobe(effect) => Effect::start(effect),
        }
    }

    pub fn stop(&mut self) {
        match self {
            Self::Pulse(effect) => Effect::stop(effect),
            Self::Rainbow(effect) => Effect::stop(effect),
            Self::Strobe(effect) => Effect::stop(effect),
        }
    }

    /// Derive the output snapshot for one tick
    pub fn apply(&mut self, now: Instant, values: &ColorValues) -> ColorValues {
        match self {
            Self::Pulse(effect) => effect.apply(now, values),
            Self::Rainbow(effect) => effect.apply(now, values),
            Self::Strobe(effect) => effect.apply(now, values),
        }
    }
}

/// Requested effect name is not present in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownEffectError;

/// Fixed mapping from case-insensitive effect name to effect factory.
///
/// Built once at configuration time and owned by the orchestrator; never
/// mutated at runtime.
#[derive(Debug, Clone, Default)]
pub struct EffectRegistry {
    entries: Vec<EffectId, MAX_EFFECTS>,
}

impl EffectRegistry {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Registry with every built-in effect enabled.
    pub fn all() -> Self {
        let mut registry = Self::new();
        let _ = registry.register(EffectId::Pulse);
        let _ = registry.register(EffectId::Rainbow);
        let _ = registry.register(EffectId::Strobe);
        registry
    }

    /// Enable an effect.
    ///
    /// Returns the id if the registry is full.
    pub fn register(&mut self, id: EffectId) -> Result<(), EffectId> {
        if self.entries.contains(&id) {
            return Ok(());
        }
        self.entries.push(id)
    }

    /// Look up an effect by name, ignoring ASCII case.
    pub fn lookup(&self, name: &str) -> Option<EffectId> {
        self.entries
            .iter()
            .copied()
            .find(|id| id.as_str().eq_ignore_ascii_case(name))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
