//! Transfer functions from input samples to tilt angles.

use crate::sample::{InputSample, InputSource};
use crate::settings::TiltSettings;

/// Rotation about the two screen axes, in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TiltVector {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl TiltVector {
    /// No rotation.
    pub const NEUTRAL: TiltVector = TiltVector {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    pub fn new(rotate_x: f64, rotate_y: f64) -> Self {
        Self { rotate_x, rotate_y }
    }

    /// Clamp both axes to `[-max, max]`.
    pub fn clamped(self, max: f64) -> Self {
        Self {
            rotate_x: self.rotate_x.clamp(-max, max),
            rotate_y: self.rotate_y.clamp(-max, max),
        }
    }
}

/// Maps samples to tilt vectors. Stateless: no smoothing between samples.
#[derive(Debug, Clone, Copy)]
pub struct TiltMapper {
    max_angle: f64,
    beta_divisor: f64,
    gamma_divisor: f64,
}

impl Default for TiltMapper {
    fn default() -> Self {
        Self::new(&TiltSettings::default())
    }
}

impl TiltMapper {
    pub fn new(settings: &TiltSettings) -> Self {
        Self {
            max_angle: settings.max_angle_deg.abs(),
            beta_divisor: settings.beta_divisor,
            gamma_divisor: settings.gamma_divisor,
        }
    }

    pub fn map(&self, sample: &InputSample) -> TiltVector {
        let raw = match sample.source {
            // Moving right turns the logo about its vertical axis, moving
            // down tips it away from the viewer.
            InputSource::Cursor => {
                TiltVector::new(-sample.y * self.max_angle, sample.x * self.max_angle)
            }
            InputSource::Gyroscope => TiltVector::new(
                sample.x / self.beta_divisor,
                sample.y / self.gamma_divisor,
            ),
        };
        raw.clamped(self.max_angle)
    }
}
