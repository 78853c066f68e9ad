//! Rendering the logo art with its pose and element animations.

use std::f64::consts::{PI, TAU};

use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};
use shadoll_core::{
    color::{hsl_to_rgb, scale},
    palette,
};

use crate::art::{LogoArt, Part};
use crate::classes::{ElementClass, LogoClasses};
use crate::motion::Pose;

/// Columns the logo drifts toward a fully turned side.
const SHIFT_COLS: f64 = 4.0;
/// Rows the logo drifts toward a fully tipped edge.
const SHIFT_ROWS: f64 = 1.5;
/// Narrowing of the far edge per row when tipped.
const PERSPECTIVE: f64 = 0.08;
/// Brightness of the mirrored back face.
const BACK_FACE_DIM: f32 = 0.5;

const NEON_PERIOD_MS: f64 = 2000.0;
const PULSE_PERIOD_MS: f64 = 1200.0;
const COLOR_PERIOD_MS: f64 = 4000.0;
const EXPLOSION_PERIOD_MS: f64 = 3000.0;
const FLY_PERIOD_MS: f64 = 3000.0;
const FLY_DISTANCE_COLS: f64 = 4.0;

const L_HUE: f32 = 330.0;
const S_HUE: f32 = 200.0;

const SOLID: &str = "█";
const DEBRIS: [&str; 3] = ["▓", "▒", "░"];

/// Draws the logo centered in its area.
#[derive(Debug, Clone, Copy)]
pub struct LogoWidget<'a> {
    art: &'a LogoArt,
    pose: Pose,
    classes: LogoClasses,
    anim_ms: f64,
}

impl<'a> LogoWidget<'a> {
    pub fn new(art: &'a LogoArt) -> Self {
        Self {
            art,
            pose: Pose::REST,
            classes: LogoClasses::default(),
            anim_ms: 0.0,
        }
    }

    pub fn pose(mut self, pose: Pose) -> Self {
        self.pose = pose;
        self
    }

    pub fn classes(mut self, classes: LogoClasses) -> Self {
        self.classes = classes;
        self
    }

    /// Speed-scaled animation time in milliseconds.
    pub fn anim_time(mut self, anim_ms: f64) -> Self {
        self.anim_ms = anim_ms;
        self
    }

    fn class_for(&self, part: Part) -> Option<ElementClass> {
        match part {
            Part::L => self.classes.l,
            Part::SPath1 => self.classes.s_path_1.or(self.classes.s),
            Part::SPath2 => self.classes.s_path_2.or(self.classes.s),
        }
    }
}

/// How one cell is drawn after its element animation.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Styled {
    symbol: &'static str,
    color: Color,
    dx: f64,
    dy: f64,
}

fn phase(anim_ms: f64, period_ms: f64) -> f64 {
    anim_ms.rem_euclid(period_ms) / period_ms
}

/// Smooth `0..1..0` wave over one period.
fn wave(anim_ms: f64, period_ms: f64) -> f32 {
    (((phase(anim_ms, period_ms) * TAU).sin() + 1.0) / 2.0) as f32
}

fn cycled_color(base_hue: f32, anim_ms: f64) -> Color {
    let shift = phase(anim_ms, COLOR_PERIOD_MS) as f32 * 360.0;
    hsl_to_rgb(base_hue + shift, 0.85, 0.62)
}

/// Offset of a flying S path, growing and shrinking once per period.
fn fly_offset(anim_ms: f64) -> f64 {
    (phase(anim_ms, FLY_PERIOD_MS) * PI).sin().powi(2) * FLY_DISTANCE_COLS
}

/// Apply an element animation to a cell at `(dx, dy)` from the logo center.
fn element_style(
    class: Option<ElementClass>,
    part: Part,
    anim_ms: f64,
    (dx, dy): (f64, f64),
) -> Styled {
    let (base, hue) = match part {
        Part::L => (palette::LOGO_L, L_HUE),
        Part::SPath1 | Part::SPath2 => (palette::LOGO_S, S_HUE),
    };
    let plain = Styled {
        symbol: SOLID,
        color: base,
        dx: 0.0,
        dy: 0.0,
    };

    match class {
        None => plain,
        Some(ElementClass::Neon) => Styled {
            color: scale(base, 0.7 + 0.3 * wave(anim_ms, NEON_PERIOD_MS)),
            ..plain
        },
        Some(ElementClass::Pulse) => Styled {
            color: scale(base, 0.55 + 0.45 * wave(anim_ms, PULSE_PERIOD_MS)),
            ..plain
        },
        Some(ElementClass::LColor | ElementClass::SColor) => Styled {
            color: cycled_color(hue, anim_ms),
            ..plain
        },
        Some(ElementClass::LExplosion | ElementClass::SExplosion) => {
            // Quiet for most of the cycle, then bursts outward.
            let burst = ((phase(anim_ms, EXPLOSION_PERIOD_MS) - 0.7) / 0.3).max(0.0);
            let symbol = if burst == 0.0 {
                SOLID
            } else {
                DEBRIS[((burst * DEBRIS.len() as f64) as usize).min(DEBRIS.len() - 1)]
            };
            Styled {
                symbol,
                color: scale(base, 1.0 + burst as f32 * 0.5),
                dx: dx * burst * 1.5,
                dy: dy * burst * 1.5,
            }
        }
        Some(ElementClass::SPath1Fly) => {
            let lift = fly_offset(anim_ms);
            Styled {
                dx: -lift,
                dy: -lift / 2.0,
                ..plain
            }
        }
        Some(ElementClass::SPath2Fly) => {
            let lift = fly_offset(anim_ms);
            Styled {
                dx: lift,
                dy: lift / 2.0,
                ..plain
            }
        }
        Some(ElementClass::LAll | ElementClass::SAll) => Styled {
            color: scale(
                cycled_color(hue, anim_ms),
                0.7 + 0.3 * wave(anim_ms, NEON_PERIOD_MS),
            ),
            ..plain
        },
    }
}

impl Widget for LogoWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let cx = (self.art.width() as f64 - 1.0) / 2.0;
        let cy = (self.art.height() as f64 - 1.0) / 2.0;
        let anchor_x = area.x as f64 + (area.width / 2) as f64;
        let anchor_y = area.y as f64 + (area.height / 2) as f64;

        let rx = self.pose.tilt.rotate_x.to_radians();
        let ry = self.pose.tilt.rotate_y.to_radians();
        let facing = ry.cos();

        for (col, row, part) in self.art.filled() {
            let dx = col as f64 - cx;
            let dy = row as f64 - cy;
            let styled = element_style(self.class_for(part), part, self.anim_ms, (dx, dy));

            let x = (dx + styled.dx) * facing * (1.0 + dy * rx.sin() * PERSPECTIVE)
                + ry.sin() * SHIFT_COLS
                + self.pose.shake_cols;
            let y = (dy + styled.dy) * rx.cos() - rx.sin() * SHIFT_ROWS;

            let screen_x = (anchor_x + x).round();
            let screen_y = (anchor_y + y).round();
            if screen_x < area.left() as f64
                || screen_x >= area.right() as f64
                || screen_y < area.top() as f64
                || screen_y >= area.bottom() as f64
            {
                continue;
            }

            let color = if facing < 0.0 {
                scale(styled.color, BACK_FACE_DIM)
            } else {
                styled.color
            };
            if let Some(cell) = buf.cell_mut((screen_x as u16, screen_y as u16)) {
                cell.set_symbol(styled.symbol).set_fg(color);
            }
        }
    }
}
