//! Boundary to the styling layer.

use crate::mapper::TiltVector;

/// Presentation classes toggled by the controller. At most one is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PresentationClass {
    /// The scripted tilt animation owns the logo.
    TiltAnimationActive,
    /// Live input owns the logo.
    InteractiveModeActive,
}

impl PresentationClass {
    pub fn class_name(&self) -> &'static str {
        match self {
            PresentationClass::TiltAnimationActive => "tilt-animation-active",
            PresentationClass::InteractiveModeActive => "interactive-mode-active",
        }
    }
}

/// The controlled logo element.
pub trait PresentationSink {
    /// Apply a transform directly, overriding declarative animation.
    fn apply_transform(&mut self, tilt: TiltVector);
    /// Remove the directly applied transform.
    fn clear_transform(&mut self);
    fn set_class(&mut self, class: PresentationClass, enabled: bool);
}
