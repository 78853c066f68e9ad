//! Color helpers shared by the logo and background renderers.

use ratatui::style::Color;

/// Convert HSL to RGB color. Hue in degrees, saturation and lightness in `[0, 1]`.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Color {
    if s == 0.0 {
        let v = (l * 255.0) as u8;
        return Color::Rgb(v, v, v);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    let h = h.rem_euclid(360.0) / 360.0;

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

    Color::Rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Scale an RGB color's brightness. Non-RGB colors pass through unchanged.
pub fn scale(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let f = factor.max(0.0);
            Color::Rgb(
                (r as f32 * f).min(255.0) as u8,
                (g as f32 * f).min(255.0) as u8,
                (b as f32 * f).min(255.0) as u8,
            )
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Color::Rgb(255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), Color::Rgb(0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), Color::Rgb(0, 0, 255));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 1.0), Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(hsl_to_rgb(360.0, 1.0, 0.5), hsl_to_rgb(0.0, 1.0, 0.5));
        assert_eq!(hsl_to_rgb(-120.0, 1.0, 0.5), hsl_to_rgb(240.0, 1.0, 0.5));
    }

    #[test]
    fn test_scale() {
        assert_eq!(scale(Color::Rgb(100, 50, 200), 0.5), Color::Rgb(50, 25, 100));
        assert_eq!(scale(Color::Rgb(200, 200, 200), 2.0), Color::Rgb(255, 255, 255));
        assert_eq!(scale(Color::Cyan, 0.1), Color::Cyan);
    }
}
