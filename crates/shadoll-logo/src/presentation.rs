//! The logo element as seen by the tilt controller.

use std::collections::BTreeSet;

use shadoll_core::LogoAnimation;
use shadoll_tilt::{PresentationClass, PresentationSink, TiltVector};

use crate::motion::{Pose, scripted_pose};

/// Controller-owned state of the logo: the direct transform and the mode
/// classes. The renderer reads it every frame.
#[derive(Debug, Default)]
pub struct LogoPresentation {
    transform: Option<TiltVector>,
    classes: BTreeSet<PresentationClass>,
}

impl LogoPresentation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transform(&self) -> Option<TiltVector> {
        self.transform
    }

    pub fn has_class(&self, class: PresentationClass) -> bool {
        self.classes.contains(&class)
    }

    /// Resolve the pose to draw.
    ///
    /// A direct transform wins over every class. `tilt-animation-active`
    /// runs the scripted tilt, `interactive-mode-active` without a transform
    /// holds the logo upright, and otherwise the body animation plays.
    pub fn pose(&self, body: Option<LogoAnimation>, anim_ms: f64) -> Pose {
        if let Some(tilt) = self.transform {
            return Pose::tilted(tilt);
        }
        if self.has_class(PresentationClass::TiltAnimationActive) {
            return scripted_pose(LogoAnimation::Tilt, anim_ms);
        }
        if self.has_class(PresentationClass::InteractiveModeActive) {
            return Pose::REST;
        }
        body.map_or(Pose::REST, |anim| scripted_pose(anim, anim_ms))
    }
}

impl PresentationSink for LogoPresentation {
    fn apply_transform(&mut self, tilt: TiltVector) {
        self.transform = Some(tilt);
    }

    fn clear_transform(&mut self) {
        self.transform = None;
    }

    fn set_class(&mut self, class: PresentationClass, enabled: bool) {
        if enabled {
            self.classes.insert(class);
        } else {
            self.classes.remove(&class);
        }
    }
}
