//! Stateless gradients (computed from position and time only).

use std::f32::consts::{PI, TAU};

use ratatui::style::Color;
use shadoll_core::{GradientKind, color::hsl_to_rgb};

/// Milliseconds of animation time for one full color cycle.
const CYCLE_PERIOD_MS: f64 = 15_000.0;

/// Hue at the start of the gradient (deep violet).
const BASE_HUE: f32 = 260.0;
/// How far the hue travels across the gradient (toward magenta).
const HUE_SPAN: f32 = 70.0;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f32 = 2.0;

/// Background color of the cell at `(x, y)` in a `width` × `height` area.
pub fn gradient_color(
    kind: GradientKind,
    x: u16,
    y: u16,
    width: u16,
    height: u16,
    anim_ms: f64,
) -> Color {
    let time_phase = (anim_ms.rem_euclid(CYCLE_PERIOD_MS) / CYCLE_PERIOD_MS) as f32;

    let x_norm = x as f32 / width.max(1) as f32;
    let y_norm = y as f32 / height.max(1) as f32;

    let position = match kind {
        // Diagonal sweep from the top-left corner
        GradientKind::Linear => x_norm * 0.7 + y_norm * 0.3,
        GradientKind::Radial => {
            let dx = x_norm - 0.5;
            let dy = (y_norm - 0.5) * height as f32 / (width.max(1) as f32 / CELL_ASPECT);
            (dx * dx + dy * dy).sqrt() * 1.4
        }
        GradientKind::Conic => {
            let dx = x_norm - 0.5;
            let dy = (y_norm - 0.5) * CELL_ASPECT * height as f32 / width.max(1) as f32;
            dy.atan2(dx) / TAU + 0.5
        }
    };

    // Periodic in t, so the conic seam and the cycle wrap stay continuous
    let t = position + time_phase;
    let wave = ((t * TAU - PI / 2.0).sin() + 1.0) / 2.0;

    hsl_to_rgb(BASE_HUE + HUE_SPAN * wave, 0.55, 0.12 + 0.08 * wave)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_frame_is_deterministic() {
        for kind in [GradientKind::Linear, GradientKind::Radial, GradientKind::Conic] {
            assert_eq!(
                gradient_color(kind, 3, 4, 80, 24, 0.0),
                gradient_color(kind, 3, 4, 80, 24, 0.0)
            );
        }
    }

    #[test]
    fn test_animation_moves_colors() {
        let start = gradient_color(GradientKind::Linear, 10, 5, 80, 24, 0.0);
        let later = gradient_color(GradientKind::Linear, 10, 5, 80, 24, CYCLE_PERIOD_MS / 4.0);
        assert_ne!(start, later);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        for kind in [GradientKind::Linear, GradientKind::Radial, GradientKind::Conic] {
            assert_eq!(
                gradient_color(kind, 7, 2, 40, 12, 0.0),
                gradient_color(kind, 7, 2, 40, 12, CYCLE_PERIOD_MS)
            );
        }
    }

    #[test]
    fn test_radial_is_symmetric_about_center() {
        assert_eq!(
            gradient_color(GradientKind::Radial, 10, 6, 40, 12, 500.0),
            gradient_color(GradientKind::Radial, 30, 6, 40, 12, 500.0)
        );
    }

    #[test]
    fn test_degenerate_area() {
        gradient_color(GradientKind::Conic, 0, 0, 0, 0, 100.0);
        gradient_color(GradientKind::Radial, 0, 0, 0, 0, 100.0);
    }
}
