//! The `key=value&…` form of a display configuration.
//!
//! Keys: `bg`, `gradient`, `logo`, `logoAnim`, `elementAnim`, `speed`.

use shadoll_core::{
    BackgroundMode, DisplayConfig, ElementAnimation, GradientKind, LogoAnimation, LogoDisplay,
    clamp_speed,
};
use tracing::debug;

/// Parse a query string on top of `defaults`.
///
/// Unknown keys are ignored and unknown values keep the default. A missing,
/// unparsable or zero speed keeps the default speed; any other speed is
/// clamped into the supported range.
pub fn parse(query: &str, defaults: &DisplayConfig) -> DisplayConfig {
    let mut config = *defaults;
    let query = query.trim().trim_start_matches('?');

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let value = value.trim();
        let known = match key.trim() {
            "bg" => BackgroundMode::parse(value).map(|v| config.background = v),
            "gradient" => GradientKind::parse(value).map(|v| config.gradient = v),
            "logo" => LogoDisplay::parse(value).map(|v| config.logo = v),
            "logoAnim" => LogoAnimation::parse(value).map(|v| config.logo_anim = v),
            "elementAnim" => ElementAnimation::parse(value).map(|v| config.element_anim = v),
            "speed" => parse_speed(value).map(|v| config.speed = v),
            other => {
                debug!(key = other, "ignoring unknown query key");
                Some(())
            }
        };
        if known.is_none() {
            debug!(key, value, "unknown option value, keeping default");
        }
    }

    config
}

fn parse_speed(value: &str) -> Option<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v != 0.0)
        .map(clamp_speed)
}

/// Serialize the options that differ from `defaults`, in a fixed key order.
///
/// Returns an empty string when nothing differs.
pub fn to_query(config: &DisplayConfig, defaults: &DisplayConfig) -> String {
    let mut pairs: Vec<String> = Vec::new();

    if config.background != defaults.background {
        pairs.push(format!("bg={}", config.background.as_str()));
    }
    if config.gradient != defaults.gradient {
        pairs.push(format!("gradient={}", config.gradient.as_str()));
    }
    if config.logo != defaults.logo {
        pairs.push(format!("logo={}", config.logo.as_str()));
    }
    if config.logo_anim != defaults.logo_anim {
        pairs.push(format!("logoAnim={}", config.logo_anim.as_str()));
    }
    if config.element_anim != defaults.element_anim {
        pairs.push(format!("elementAnim={}", config.element_anim.as_str()));
    }
    if (config.speed - defaults.speed).abs() > f64::EPSILON {
        pairs.push(format!("speed={}", config.speed));
    }

    pairs.join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use shadoll_core::{DEFAULT_SPEED, MAX_SPEED, MIN_SPEED};

    #[test]
    fn test_parse_empty_is_default() {
        let defaults = DisplayConfig::default();
        assert_eq!(parse("", &defaults), defaults);
        assert_eq!(parse("?", &defaults), defaults);
    }

    #[test]
    fn test_parse_all_keys() {
        let config = parse(
            "?bg=static&gradient=conic&logo=animated&logoAnim=mixed&elementAnim=fly&speed=2",
            &DisplayConfig::default(),
        );
        assert_eq!(config.background, BackgroundMode::Static);
        assert_eq!(config.gradient, GradientKind::Conic);
        assert_eq!(config.logo, LogoDisplay::Animated);
        assert_eq!(config.logo_anim, LogoAnimation::Mixed);
        assert_eq!(config.element_anim, ElementAnimation::Fly);
        assert_eq!(config.speed, 2.0);
    }

    #[test]
    fn test_parse_unknown_values_fall_back() {
        let config = parse(
            "logoAnim=wobble&gradient=&colour=red&speed=fast",
            &DisplayConfig::default(),
        );
        assert_eq!(config, DisplayConfig::default());
    }

    #[test]
    fn test_parse_speed_bounds() {
        let defaults = DisplayConfig::default();
        assert_eq!(parse("speed=0", &defaults).speed, DEFAULT_SPEED);
        assert_eq!(parse("speed=0.01", &defaults).speed, MIN_SPEED);
        assert_eq!(parse("speed=-3", &defaults).speed, MIN_SPEED);
        assert_eq!(parse("speed=99", &defaults).speed, MAX_SPEED);
        assert_eq!(parse("speed=1.25", &defaults).speed, 1.25);
    }

    #[test]
    fn test_to_query_only_non_defaults() {
        let defaults = DisplayConfig::default();
        assert_eq!(to_query(&defaults, &defaults), "");

        let config = DisplayConfig {
            gradient: GradientKind::Radial,
            logo_anim: LogoAnimation::Interactive,
            speed: 0.75,
            ..defaults
        };
        assert_eq!(
            to_query(&config, &defaults),
            "gradient=radial&logoAnim=interactive&speed=0.75"
        );
        assert_eq!(parse(&to_query(&config, &defaults), &defaults), config);
    }
}
