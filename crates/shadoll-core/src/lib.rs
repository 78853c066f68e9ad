//! Core types for the shadoll animated placeholder.
//!
//! Every display option is a small enum that knows how to cycle to its
//! successor and how to spell itself in a query string.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

pub mod color;

/// Slowest allowed animation speed multiplier.
pub const MIN_SPEED: f64 = 0.1;
/// Fastest allowed animation speed multiplier.
pub const MAX_SPEED: f64 = 5.0;
/// Step applied by the speed up / speed down controls.
pub const SPEED_STEP: f64 = 0.25;
/// Speed multiplier used when nothing else is configured.
pub const DEFAULT_SPEED: f64 = 0.5;

/// Clamp a speed multiplier into the supported range, rounded to hundredths.
pub fn clamp_speed(speed: f64) -> f64 {
    let clamped = speed.clamp(MIN_SPEED, MAX_SPEED);
    (clamped * 100.0).round() / 100.0
}

/// Speed-scaled animation time.
///
/// Wall-clock deltas are multiplied by the speed in effect when they
/// elapse, so changing the speed never makes an animation jump.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationClock {
    anim_ms: f64,
    last_update_ms: u64,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to `elapsed_ms` of wall-clock time and return the animation time.
    pub fn tick(&mut self, elapsed_ms: u64, speed: f64) -> f64 {
        let delta_ms = elapsed_ms.saturating_sub(self.last_update_ms);
        self.last_update_ms = self.last_update_ms.max(elapsed_ms);
        self.anim_ms += delta_ms as f64 * speed;
        self.anim_ms
    }
}

/// Brand colors of the two logo glyphs.
pub mod palette {
    use super::Color;

    /// Base color of the "L" glyph.
    pub const LOGO_L: Color = Color::Rgb(255, 94, 168);
    /// Base color of the "S" glyph.
    pub const LOGO_S: Color = Color::Rgb(94, 200, 255);
    /// Muted foreground for chrome (hints, borders).
    pub const MUTED: Color = Color::Rgb(120, 120, 150);
}

/// Whether the background gradient moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundMode {
    Static,
    #[default]
    Animated,
}

impl BackgroundMode {
    /// Toggle between static and animated.
    pub fn toggle(&self) -> Self {
        match self {
            BackgroundMode::Static => BackgroundMode::Animated,
            BackgroundMode::Animated => BackgroundMode::Static,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BackgroundMode::Static => "static",
            BackgroundMode::Animated => "animated",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "static" => Some(BackgroundMode::Static),
            "animated" => Some(BackgroundMode::Animated),
            _ => None,
        }
    }
}

/// Shape of the background gradient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
    Conic,
}

impl GradientKind {
    /// Cycle to the next gradient shape.
    pub fn next(&self) -> Self {
        match self {
            GradientKind::Linear => GradientKind::Radial,
            GradientKind::Radial => GradientKind::Conic,
            GradientKind::Conic => GradientKind::Linear,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GradientKind::Linear => "linear",
            GradientKind::Radial => "radial",
            GradientKind::Conic => "conic",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "linear" => Some(GradientKind::Linear),
            "radial" => Some(GradientKind::Radial),
            "conic" => Some(GradientKind::Conic),
            _ => None,
        }
    }
}

/// How much of the logo is animated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoDisplay {
    /// No animation at all.
    Static,
    /// Element animations only.
    Animated,
    /// Element animations plus a full-body animation.
    #[default]
    Full,
}

impl LogoDisplay {
    /// Cycle to the next logo display mode.
    pub fn next(&self) -> Self {
        match self {
            LogoDisplay::Static => LogoDisplay::Animated,
            LogoDisplay::Animated => LogoDisplay::Full,
            LogoDisplay::Full => LogoDisplay::Static,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogoDisplay::Static => "static",
            LogoDisplay::Animated => "animated",
            LogoDisplay::Full => "full",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "static" => Some(LogoDisplay::Static),
            "animated" => Some(LogoDisplay::Animated),
            "full" => Some(LogoDisplay::Full),
            _ => None,
        }
    }

    /// Whether element animations run in this mode.
    pub fn animates_elements(&self) -> bool {
        matches!(self, LogoDisplay::Animated | LogoDisplay::Full)
    }
}

/// Full-body animation of the logo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoAnimation {
    Shake,
    Rotate,
    #[default]
    Tilt,
    /// Tilt follows pointer or orientation input indefinitely.
    Interactive,
    /// Scripted tilt that hands over to input while input is live.
    Mixed,
    All,
}

impl LogoAnimation {
    /// Cycle to the next body animation.
    pub fn next(&self) -> Self {
        match self {
            LogoAnimation::Shake => LogoAnimation::Rotate,
            LogoAnimation::Rotate => LogoAnimation::Tilt,
            LogoAnimation::Tilt => LogoAnimation::Interactive,
            LogoAnimation::Interactive => LogoAnimation::Mixed,
            LogoAnimation::Mixed => LogoAnimation::All,
            LogoAnimation::All => LogoAnimation::Shake,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogoAnimation::Shake => "shake",
            LogoAnimation::Rotate => "rotate",
            LogoAnimation::Tilt => "tilt",
            LogoAnimation::Interactive => "interactive",
            LogoAnimation::Mixed => "mixed",
            LogoAnimation::All => "all",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "shake" => Some(LogoAnimation::Shake),
            "rotate" => Some(LogoAnimation::Rotate),
            "tilt" => Some(LogoAnimation::Tilt),
            "interactive" => Some(LogoAnimation::Interactive),
            "mixed" => Some(LogoAnimation::Mixed),
            "all" => Some(LogoAnimation::All),
            _ => None,
        }
    }
}

/// Per-glyph animation of the logo elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementAnimation {
    #[default]
    Neon,
    Color,
    Explosion,
    Fly,
    All,
}

impl ElementAnimation {
    /// Cycle to the next element animation.
    pub fn next(&self) -> Self {
        match self {
            ElementAnimation::Neon => ElementAnimation::Color,
            ElementAnimation::Color => ElementAnimation::Explosion,
            ElementAnimation::Explosion => ElementAnimation::Fly,
            ElementAnimation::Fly => ElementAnimation::All,
            ElementAnimation::All => ElementAnimation::Neon,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementAnimation::Neon => "neon",
            ElementAnimation::Color => "color",
            ElementAnimation::Explosion => "explosion",
            ElementAnimation::Fly => "fly",
            ElementAnimation::All => "all",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "neon" => Some(ElementAnimation::Neon),
            "color" => Some(ElementAnimation::Color),
            "explosion" => Some(ElementAnimation::Explosion),
            "fly" => Some(ElementAnimation::Fly),
            "all" => Some(ElementAnimation::All),
            _ => None,
        }
    }
}

/// The complete set of display options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayConfig {
    #[serde(rename = "bg")]
    pub background: BackgroundMode,
    pub gradient: GradientKind,
    pub logo: LogoDisplay,
    pub logo_anim: LogoAnimation,
    pub element_anim: ElementAnimation,
    /// Animation speed multiplier in `[MIN_SPEED, MAX_SPEED]`.
    pub speed: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            background: BackgroundMode::default(),
            gradient: GradientKind::default(),
            logo: LogoDisplay::default(),
            logo_anim: LogoAnimation::default(),
            element_anim: ElementAnimation::default(),
            speed: DEFAULT_SPEED,
        }
    }
}

impl DisplayConfig {
    /// Human readable summary used by the configuration toast.
    pub fn summary(&self) -> String {
        let background = match self.background {
            BackgroundMode::Static => format!("Background: Static {}", self.gradient.as_str()),
            BackgroundMode::Animated => format!("Background: Animated {}", self.gradient.as_str()),
        };
        let logo = match self.logo {
            LogoDisplay::Static => "Logo: Static".to_string(),
            LogoDisplay::Animated => format!("Logo: Elements ({})", self.element_anim.as_str()),
            LogoDisplay::Full => format!(
                "Logo: Full ({} + {})",
                self.logo_anim.as_str(),
                self.element_anim.as_str()
            ),
        };
        format!("{background} • {logo} • Speed: {}x", self.speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_animation_cycle_visits_every_option() {
        let mut anim = LogoAnimation::Shake;
        let mut seen = Vec::new();
        for _ in 0..6 {
            seen.push(anim.as_str());
            anim = anim.next();
        }
        assert_eq!(anim, LogoAnimation::Shake);
        assert_eq!(
            seen,
            ["shake", "rotate", "tilt", "interactive", "mixed", "all"]
        );
    }

    #[test]
    fn test_parse_round_trips_names() {
        assert_eq!(GradientKind::parse("conic"), Some(GradientKind::Conic));
        assert_eq!(LogoDisplay::parse("full"), Some(LogoDisplay::Full));
        assert_eq!(ElementAnimation::parse("fly"), Some(ElementAnimation::Fly));
        assert_eq!(LogoAnimation::parse("wobble"), None);
        assert_eq!(BackgroundMode::parse(""), None);
    }

    #[test]
    fn test_clamp_speed() {
        assert_eq!(clamp_speed(0.0), MIN_SPEED);
        assert_eq!(clamp_speed(12.0), MAX_SPEED);
        assert_eq!(clamp_speed(0.1 + 0.25), 0.35);
    }

    #[test]
    fn test_clock_scales_deltas_by_current_speed() {
        let mut clock = AnimationClock::new();
        assert_eq!(clock.tick(1000, 0.5), 500.0);
        assert_eq!(clock.tick(2000, 2.0), 2500.0);
        // Time never runs backwards.
        assert_eq!(clock.tick(1500, 1.0), 2500.0);
        assert_eq!(clock.tick(2100, 1.0), 2600.0);
    }

    #[test]
    fn test_summary() {
        let config = DisplayConfig::default();
        assert_eq!(
            config.summary(),
            "Background: Animated linear • Logo: Full (tilt + neon) • Speed: 0.5x"
        );

        let config = DisplayConfig {
            background: BackgroundMode::Static,
            gradient: GradientKind::Radial,
            logo: LogoDisplay::Animated,
            element_anim: ElementAnimation::Color,
            speed: 1.0,
            ..Default::default()
        };
        assert_eq!(
            config.summary(),
            "Background: Static radial • Logo: Elements (color) • Speed: 1x"
        );
    }
}
