//! Scripted full-body motion of the logo.

use std::f64::consts::TAU;

use shadoll_core::LogoAnimation;
use shadoll_tilt::TiltVector;

const SHAKE_PERIOD_MS: f64 = 400.0;
const SHAKE_AMPLITUDE_COLS: f64 = 1.5;
const ROTATE_PERIOD_MS: f64 = 6000.0;
const TILT_PERIOD_MS: f64 = 5000.0;
const TILT_AMPLITUDE_DEG: f64 = 15.0;

/// Where the logo body is at one instant.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pose {
    pub tilt: TiltVector,
    /// Horizontal jitter in cells.
    pub shake_cols: f64,
}

impl Pose {
    /// Upright and still.
    pub const REST: Pose = Pose {
        tilt: TiltVector::NEUTRAL,
        shake_cols: 0.0,
    };

    pub fn tilted(tilt: TiltVector) -> Self {
        Self {
            tilt,
            shake_cols: 0.0,
        }
    }
}

/// Fraction of the current cycle, in `[0, 1)`.
fn phase(anim_ms: f64, period_ms: f64) -> f64 {
    anim_ms.rem_euclid(period_ms) / period_ms
}

fn shake(anim_ms: f64) -> f64 {
    SHAKE_AMPLITUDE_COLS * (phase(anim_ms, SHAKE_PERIOD_MS) * TAU).sin()
}

fn tilt(anim_ms: f64) -> TiltVector {
    let p = phase(anim_ms, TILT_PERIOD_MS) * TAU;
    TiltVector::new(TILT_AMPLITUDE_DEG * p.sin(), TILT_AMPLITUDE_DEG * p.cos())
}

/// Pose of a declarative body animation at `anim_ms` of speed-scaled time.
///
/// `Interactive` has no scripted motion. `Mixed` runs the scripted tilt
/// that live input replaces.
pub fn scripted_pose(anim: LogoAnimation, anim_ms: f64) -> Pose {
    match anim {
        LogoAnimation::Shake => Pose {
            tilt: TiltVector::NEUTRAL,
            shake_cols: shake(anim_ms),
        },
        LogoAnimation::Rotate => Pose::tilted(TiltVector::new(
            0.0,
            phase(anim_ms, ROTATE_PERIOD_MS) * 360.0,
        )),
        LogoAnimation::Tilt | LogoAnimation::Mixed => Pose::tilted(tilt(anim_ms)),
        LogoAnimation::Interactive => Pose::REST,
        LogoAnimation::All => Pose {
            tilt: tilt(anim_ms),
            shake_cols: shake(anim_ms),
        },
    }
}
