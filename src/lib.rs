#![no_std]

pub mod color;
pub mod effect;
pub mod json;
pub mod state;
pub mod traits;
pub mod transformer;

pub use color::{ColorValues, Rgb};
pub use effect::{
    EFFECT_NAME_NONE, Effect, EffectId, EffectRegistry, EffectSlot, UnknownEffectError,
};
pub use json::{ColorJson, JsonError, LightJson, dump_json, parse_json};
pub use state::{
    DEFAULT_TRANSITION_LENGTH, LightState, LightStateConfig, MAX_SUBSCRIBERS, RestoredState,
    SubscriberCapacityError,
};
pub use traits::LightTraits;
pub use transformer::{Flash, Transition, TransformerSlot};

pub use embassy_time::{Duration, Instant};

/// Initialization ordering hints for the device scheduler.
///
/// Higher priorities are set up earlier.
pub mod setup_priority {
    /// Raw hardware and output drivers.
    pub const HARDWARE: f32 = 800.0;
    /// Light state middleware, shortly after hardware.
    pub const LIGHT: f32 = 790.0;
    /// Protocol and transport components.
    pub const COMMUNICATION: f32 = 600.0;
    /// Anything without ordering requirements.
    pub const DEFAULT: f32 = 0.0;
}

/// Lifecycle hooks consumed by the scheduler framework.
///
/// `setup` is called exactly once before the first tick, ordered by
/// [`setup_priority`](Component::setup_priority); `update` is invoked once
/// per control loop iteration.
pub trait Component {
    /// One-time initialization before the first tick
    fn setup(&mut self) {}

    /// Per-tick update hook
    fn update(&mut self, _now: Instant) {}

    /// Ordering hint relative to other components
    fn setup_priority(&self) -> f32 {
        setup_priority::DEFAULT
    }
}
