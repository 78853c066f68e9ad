//! Presentation mode state machine.

use shadoll_core::{DisplayConfig, LogoAnimation, LogoDisplay};
use tracing::{debug, info, trace};

use crate::arbiter::InputArbiter;
use crate::host::{InputChannel, InputHost, ListenerId, TimerId};
use crate::mapper::{TiltMapper, TiltVector};
use crate::permission::PermissionSource;
use crate::presentation::{PresentationClass, PresentationSink};
use crate::sample::{InputSample, InputSource, OrientationEvent, PointerEvent};
use crate::settings::TiltSettings;

/// Presentation modes supervised by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationMode {
    /// A declarative animation owns the logo.
    Scripted,
    /// Live input owns the logo indefinitely.
    InteractivePure,
    /// Scripted animation that hands over to live input while input flows.
    InteractiveMixed,
}

/// Sub-phase of [`PresentationMode::InteractiveMixed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixedPhase {
    ScriptedPresentation,
    InteractivePresentation,
}

/// What the controller should do for a given configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ControllerPlan {
    /// Static logo: no subscriptions and no transform.
    #[default]
    Disabled,
    /// Declarative animation only; the controller stays inert.
    Scripted,
    InteractivePure,
    InteractiveMixed,
}

impl ControllerPlan {
    pub fn for_config(config: &DisplayConfig) -> Self {
        if config.logo == LogoDisplay::Static {
            return ControllerPlan::Disabled;
        }
        match config.logo_anim {
            LogoAnimation::Interactive => ControllerPlan::InteractivePure,
            LogoAnimation::Mixed => ControllerPlan::InteractiveMixed,
            LogoAnimation::Shake | LogoAnimation::Rotate | LogoAnimation::Tilt | LogoAnimation::All => {
                ControllerPlan::Scripted
            }
        }
    }

    pub fn mode(&self) -> Option<PresentationMode> {
        match self {
            ControllerPlan::Disabled => None,
            ControllerPlan::Scripted => Some(PresentationMode::Scripted),
            ControllerPlan::InteractivePure => Some(PresentationMode::InteractivePure),
            ControllerPlan::InteractiveMixed => Some(PresentationMode::InteractiveMixed),
        }
    }
}

/// Drives the tilt of one logo element.
///
/// While active the controller holds exactly one subscription set on the
/// host and at most one pending idle timer. [`ModeController::stop`]
/// releases both before returning; the owner must call it before dropping
/// the controller or handing the element elsewhere.
#[derive(Debug)]
pub struct ModeController<S> {
    sink: S,
    settings: TiltSettings,
    permission: PermissionSource,
    arbiter: InputArbiter,
    mapper: TiltMapper,
    plan: ControllerPlan,
    phase: MixedPhase,
    active: bool,
    listeners: Vec<ListenerId>,
    idle_timer: Option<TimerId>,
}

impl<S: PresentationSink> ModeController<S> {
    pub fn new(sink: S, settings: TiltSettings, permission: PermissionSource) -> Self {
        Self {
            sink,
            arbiter: InputArbiter::new(settings.switch_over_ms),
            mapper: TiltMapper::new(&settings),
            settings,
            permission,
            plan: ControllerPlan::Disabled,
            phase: MixedPhase::ScriptedPresentation,
            active: false,
            listeners: Vec::new(),
            idle_timer: None,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn plan(&self) -> ControllerPlan {
        self.plan
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn active_source(&self) -> InputSource {
        self.arbiter.active_source()
    }

    /// Current mixed-mode sub-phase, if mixed mode is running.
    pub fn phase(&self) -> Option<MixedPhase> {
        (self.active && self.plan == ControllerPlan::InteractiveMixed).then_some(self.phase)
    }

    /// Follow a configuration change.
    ///
    /// A running controller is stopped before the new plan starts, so at
    /// most one subscription set exists at any time. Returns whether the
    /// plan changed.
    pub fn apply_config(&mut self, host: &mut dyn InputHost, config: &DisplayConfig) -> bool {
        let plan = ControllerPlan::for_config(config);
        let settled = self.active
            || matches!(plan, ControllerPlan::Disabled | ControllerPlan::Scripted);
        if plan == self.plan && settled {
            return false;
        }

        self.stop(host);
        debug!(from = ?self.plan, to = ?plan, "switching tilt controller plan");
        match plan {
            ControllerPlan::InteractivePure => self.start(host, false),
            ControllerPlan::InteractiveMixed => self.start(host, true),
            ControllerPlan::Disabled | ControllerPlan::Scripted => self.plan = plan,
        }
        true
    }

    /// Start interactive tilt. A second start while active is a no-op.
    pub fn start(&mut self, host: &mut dyn InputHost, mixed: bool) {
        if self.active {
            debug!("tilt controller already active");
            return;
        }

        self.plan = if mixed {
            ControllerPlan::InteractiveMixed
        } else {
            ControllerPlan::InteractivePure
        };
        self.arbiter.reset();
        self.phase = MixedPhase::ScriptedPresentation;

        self.listeners.push(host.subscribe(InputChannel::Pointer));
        if self.permission.allows_orientation() {
            self.listeners.push(host.subscribe(InputChannel::Orientation));
        }

        if mixed {
            self.show_class(PresentationClass::TiltAnimationActive);
        } else {
            self.show_class(PresentationClass::InteractiveModeActive);
        }

        self.active = true;
        info!(
            plan = ?self.plan,
            listeners = self.listeners.len(),
            "tilt controller started"
        );
    }

    /// Release every listener and timer and hand the element back to the
    /// declarative styles. Safe to call in any state, any number of times.
    pub fn stop(&mut self, host: &mut dyn InputHost) {
        if !self.active {
            return;
        }

        for listener in self.listeners.drain(..) {
            host.unsubscribe(listener);
        }
        if let Some(timer) = self.idle_timer.take() {
            host.cancel(timer);
        }

        self.sink.clear_transform();
        self.sink
            .set_class(PresentationClass::TiltAnimationActive, false);
        self.sink
            .set_class(PresentationClass::InteractiveModeActive, false);

        self.active = false;
        self.phase = MixedPhase::ScriptedPresentation;
        info!(plan = ?self.plan, "tilt controller stopped");
    }

    /// Handle a pointer-move event. Returns the tilt applied, if any.
    pub fn on_pointer(
        &mut self,
        host: &mut dyn InputHost,
        event: &PointerEvent,
    ) -> Option<TiltVector> {
        if !self.active {
            return None;
        }
        let sample = InputSample::from_pointer(event)?;
        self.handle_sample(host, sample)
    }

    /// Handle a device-orientation event. Returns the tilt applied, if any.
    pub fn on_orientation(
        &mut self,
        host: &mut dyn InputHost,
        event: &OrientationEvent,
    ) -> Option<TiltVector> {
        if !self.active {
            return None;
        }
        let Some(sample) = InputSample::from_orientation(event) else {
            trace!("dropping orientation event without both axes");
            return None;
        };
        self.handle_sample(host, sample)
    }

    /// Handle a fired timer. Returns whether it was the live idle timer.
    pub fn on_timer(&mut self, timer: TimerId) -> bool {
        if !self.active || self.idle_timer != Some(timer) {
            return false;
        }
        self.idle_timer = None;
        self.phase = MixedPhase::ScriptedPresentation;
        self.sink.clear_transform();
        self.show_class(PresentationClass::TiltAnimationActive);
        debug!("input idle, returning to scripted presentation");
        true
    }

    fn handle_sample(&mut self, host: &mut dyn InputHost, sample: InputSample) -> Option<TiltVector> {
        let forwarded = self.arbiter.observe(sample)?;
        let tilt = self.mapper.map(&forwarded);

        if self.plan == ControllerPlan::InteractiveMixed {
            if self.phase == MixedPhase::ScriptedPresentation {
                self.phase = MixedPhase::InteractivePresentation;
                self.show_class(PresentationClass::InteractiveModeActive);
                debug!(source = ?forwarded.source, "input detected, entering interactive presentation");
            }
            self.rearm_idle_timer(host);
        }

        self.sink.apply_transform(tilt);
        Some(tilt)
    }

    fn rearm_idle_timer(&mut self, host: &mut dyn InputHost) {
        if let Some(timer) = self.idle_timer.take() {
            host.cancel(timer);
        }
        self.idle_timer = Some(host.schedule(self.settings.idle_timeout_ms));
    }

    fn show_class(&mut self, class: PresentationClass) {
        let other = match class {
            PresentationClass::TiltAnimationActive => PresentationClass::InteractiveModeActive,
            PresentationClass::InteractiveModeActive => PresentationClass::TiltAnimationActive,
        };
        self.sink.set_class(other, false);
        self.sink.set_class(class, true);
        trace!(class = class.class_name(), "presentation class shown");
    }
}
