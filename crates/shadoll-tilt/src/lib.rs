//! Interactive tilt controller for the shadoll logo.
//!
//! Raw pointer and orientation events flow through three stages:
//!
//! 1. [`InputArbiter`] timestamps each sample and decides which source is
//!    authoritative, switching only after the other source has been silent
//!    for longer than the switch-over threshold.
//! 2. [`TiltMapper`] turns the forwarded sample into a clamped [`TiltVector`].
//! 3. [`ModeController`] decides whether the vector is applied to the
//!    [`PresentationSink`] and runs the idle fallback of mixed mode.
//!
//! Everything is single-threaded and event-driven. The owner of the
//! controller supplies an [`InputHost`] that holds subscriptions and timers
//! and calls back into the controller when events arrive.

mod arbiter;
mod controller;
mod host;
mod mapper;
mod permission;
mod presentation;
mod sample;
mod settings;

#[cfg(test)]
mod testing;

pub use arbiter::{ArbitrationState, InputArbiter};
pub use controller::{ControllerPlan, MixedPhase, ModeController, PresentationMode};
pub use host::{InputChannel, InputHost, ListenerId, TimerId};
pub use mapper::{TiltMapper, TiltVector};
pub use permission::{PermissionError, PermissionPrompt, PermissionSource, PermissionState};
pub use presentation::{PresentationClass, PresentationSink};
pub use sample::{InputSample, InputSource, OrientationEvent, PointerEvent, Viewport};
pub use settings::TiltSettings;
