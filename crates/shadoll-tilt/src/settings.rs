//! Tunable constants of the tilt controller.

use serde::{Deserialize, Serialize};

/// Thresholds and sensitivity scalers for the tilt controller.
///
/// The defaults are empirical; they are exposed so a settings file can
/// adjust them without touching the arbitration rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TiltSettings {
    /// Silence required from the active source before the other one takes over.
    pub switch_over_ms: u64,
    /// Time without qualifying input before mixed mode returns to scripted.
    pub idle_timeout_ms: u64,
    /// Largest absolute rotation on either axis, in degrees.
    pub max_angle_deg: f64,
    /// Orientation `beta` degrees per degree of `rotate_x`.
    pub beta_divisor: f64,
    /// Orientation `gamma` degrees per degree of `rotate_y`.
    pub gamma_divisor: f64,
}

impl Default for TiltSettings {
    fn default() -> Self {
        Self {
            switch_over_ms: 1000,
            idle_timeout_ms: 2000,
            max_angle_deg: 20.0,
            beta_divisor: 4.0,
            gamma_divisor: 3.0,
        }
    }
}
