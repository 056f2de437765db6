//! Time-bounded value transformers
//!
//! A transformer computes an interpolated snapshot as a pure function of
//! elapsed time and becomes finished once its duration has passed. Both
//! variants are stored in an enum to avoid heap allocations, mirroring the
//! effect slot design.

use embassy_time::{Duration, Instant};

use crate::color::ColorValues;

/// Linear blend from a captured begin snapshot to a target snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    begin: ColorValues,
    target: ColorValues,
    start_time: Instant,
    duration: Duration,
}

impl Transition {
    pub const fn new(
        begin: ColorValues,
        target: ColorValues,
        duration: Duration,
        start_time: Instant,
    ) -> Self {
        Self {
            begin,
            target,
            start_time,
            duration,
        }
    }

    fn value_at(&self, now: Instant) -> ColorValues {
        let completion = progress(self.start_time, self.duration, now);
        if completion >= 1.0 {
            // Return the target verbatim so the final frame carries no
            // floating point drift.
            return self.target;
        }
        ColorValues::lerp(&self.begin, &self.target, completion)
    }
}

/// Holds a target snapshot for a duration, then reverts to the captured
/// begin snapshot.
///
/// The revert is not animated: the orchestrator commits `begin` back as
/// soon as the flash finishes.
#[derive(Debug, Clone, Copy)]
pub struct Flash {
    begin: ColorValues,
    target: ColorValues,
    start_time: Instant,
    duration: Duration,
}

impl Flash {
    pub const fn new(
        begin: ColorValues,
        target: ColorValues,
        duration: Duration,
        start_time: Instant,
    ) -> Self {
        Self {
            begin,
            target,
            start_time,
            duration,
        }
    }
}

/// Progress of a transformer in `[0, 1]`.
///
/// A zero duration reports full progress on the first evaluation. A `now`
/// before `start_time` (clock anomaly) clamps to zero instead of panicking.
fn progress(start_time: Instant, duration: Duration, now: Instant) -> f32 {
    if duration.as_millis() == 0 {
        return 1.0;
    }
    if now.as_millis() < start_time.as_millis() {
        return 0.0;
    }
    let elapsed_ms = now.as_millis() - start_time.as_millis();
    if elapsed_ms >= duration.as_millis() {
        return 1.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let completion = elapsed_ms as f32 / duration.as_millis() as f32;
    completion.clamp(0.0, 1.0)
}

/// Transformer slot - enum containing all transformer variants.
///
/// The orchestrator owns at most one of these at a time; starting a new
/// transition or flash replaces the slot wholesale.
#[derive(Debug, Clone, Copy)]
pub enum TransformerSlot {
    /// Linear interpolation towards a target
    Transition(Transition),
    /// Temporary override that reverts when done
    Flash(Flash),
}

impl TransformerSlot {
    /// Interpolated snapshot for the given instant.
    pub fn value_at(&self, now: Instant) -> ColorValues {
        match self {
            Self::Transition(transition) => transition.value_at(now),
            Self::Flash(flash) => flash.target,
        }
    }

    /// Whether the transformer's duration has fully elapsed.
    ///
    /// Finishing is one-way: elapsed time only grows.
    pub fn is_finished(&self, now: Instant) -> bool {
        let (start_time, duration) = match self {
            Self::Transition(transition) => (transition.start_time, transition.duration),
            Self::Flash(flash) => (flash.start_time, flash.duration),
        };
        progress(start_time, duration, now) >= 1.0
    }

    /// Snapshot the orchestrator should commit once the transformer is
    /// finished.
    ///
    /// A transition settles on its target; a flash restores the snapshot
    /// captured when it started.
    pub fn finish_values(&self) -> ColorValues {
        match self {
            Self::Transition(transition) => transition.target,
            Self::Flash(flash) => flash.begin,
        }
    }

    /// The snapshot this transformer is heading towards.
    pub const fn target(&self) -> &ColorValues {
        match self {
            Self::Transition(transition) => &transition.target,
            Self::Flash(flash) => &flash.target,
        }
    }

    /// The snapshot captured when this transformer started.
    pub const fn begin(&self) -> &ColorValues {
        match self {
            Self::Transition(transition) => &transition.begin,
            Self::Flash(flash) => &flash.begin,
        }
    }
}
