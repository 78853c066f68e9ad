//! The live display configuration.

use shadoll_core::{DisplayConfig, SPEED_STEP, clamp_speed};
use tracing::debug;

/// Owns the current [`DisplayConfig`] and the defaults it resets to.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    current: DisplayConfig,
    defaults: DisplayConfig,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(DisplayConfig::default())
    }
}

impl ConfigStore {
    /// A store whose current configuration equals its defaults.
    pub fn new(defaults: DisplayConfig) -> Self {
        Self::with_current(defaults, defaults)
    }

    pub fn with_current(current: DisplayConfig, defaults: DisplayConfig) -> Self {
        Self { current, defaults }
    }

    pub fn current(&self) -> &DisplayConfig {
        &self.current
    }

    /// Apply an arbitrary edit. The speed is re-clamped afterwards.
    pub fn update(&mut self, edit: impl FnOnce(&mut DisplayConfig)) -> &DisplayConfig {
        edit(&mut self.current);
        self.current.speed = clamp_speed(self.current.speed);
        debug!(config = ?self.current, "configuration updated");
        &self.current
    }

    /// Restore every option to its default.
    pub fn reset(&mut self) -> &DisplayConfig {
        self.current = self.defaults;
        debug!("configuration reset to defaults");
        &self.current
    }

    pub fn toggle_background(&mut self) -> &DisplayConfig {
        self.update(|c| c.background = c.background.toggle())
    }

    pub fn cycle_gradient(&mut self) -> &DisplayConfig {
        self.update(|c| c.gradient = c.gradient.next())
    }

    pub fn cycle_logo(&mut self) -> &DisplayConfig {
        self.update(|c| c.logo = c.logo.next())
    }

    pub fn cycle_logo_animation(&mut self) -> &DisplayConfig {
        self.update(|c| c.logo_anim = c.logo_anim.next())
    }

    pub fn cycle_element_animation(&mut self) -> &DisplayConfig {
        self.update(|c| c.element_anim = c.element_anim.next())
    }

    pub fn speed_up(&mut self) -> &DisplayConfig {
        self.update(|c| c.speed += SPEED_STEP)
    }

    pub fn speed_down(&mut self) -> &DisplayConfig {
        self.update(|c| c.speed -= SPEED_STEP)
    }

    /// Back to real time (1x), not to the default speed.
    pub fn reset_speed(&mut self) -> &DisplayConfig {
        self.update(|c| c.speed = 1.0)
    }

    /// Query string of the options that differ from the defaults.
    pub fn to_query(&self) -> String {
        crate::query::to_query(&self.current, &self.defaults)
    }
}
