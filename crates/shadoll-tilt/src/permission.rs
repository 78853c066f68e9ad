//! Access to orientation sensors that sit behind a permission prompt.

use std::fmt;

use thiserror::Error;
use tracing::{info, warn};

/// Outcome of a permission prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    Granted,
    Denied,
}

/// A permission prompt that could not be completed.
#[derive(Error, Debug)]
pub enum PermissionError {
    #[error("Permission prompt failed: {0}")]
    Prompt(String),

    #[error("Orientation sensor unavailable: {0}")]
    Unavailable(String),
}

/// Platform hook that asks for orientation access.
pub trait PermissionPrompt {
    fn request(&mut self) -> Result<PermissionState, PermissionError>;
}

/// Whether orientation access must be requested before subscribing.
#[derive(Default)]
pub enum PermissionSource {
    /// No permission API: subscribe unconditionally.
    #[default]
    Unsupported,
    /// Access is granted through a prompt.
    Supported(Box<dyn PermissionPrompt>),
}

impl fmt::Debug for PermissionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermissionSource::Unsupported => f.write_str("Unsupported"),
            PermissionSource::Supported(_) => f.write_str("Supported(..)"),
        }
    }
}

impl PermissionSource {
    /// Decide whether the orientation channel may be subscribed.
    ///
    /// Prompts at most once per call. Denial or failure degrades to
    /// pointer-only tilt and is never an error for the caller.
    pub fn allows_orientation(&mut self) -> bool {
        match self {
            PermissionSource::Unsupported => true,
            PermissionSource::Supported(prompt) => match prompt.request() {
                Ok(PermissionState::Granted) => {
                    info!("orientation permission granted");
                    true
                }
                Ok(PermissionState::Denied) => {
                    warn!("orientation permission denied, continuing with pointer tilt only");
                    false
                }
                Err(e) => {
                    warn!(error = %e, "orientation permission request failed, continuing with pointer tilt only");
                    false
                }
            },
        }
    }
}
