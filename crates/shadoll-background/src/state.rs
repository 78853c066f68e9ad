//! Background render state.

use ratatui::{
    Frame,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use shadoll_core::{BackgroundMode, DisplayConfig, GradientKind};

use crate::gradient::gradient_color;

/// Background rendering state.
///
/// A static background never changes, so its lines are kept until the
/// terminal size or the gradient kind changes.
#[derive(Debug, Default)]
pub struct BackgroundState {
    /// Cached static frame.
    static_lines: Vec<Line<'static>>,
    /// Key of the cached frame.
    cached: Option<(GradientKind, u16, u16)>,
}

impl BackgroundState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the background to the frame at `anim_ms` of speed-scaled time.
    pub fn render(&mut self, frame: &mut Frame, config: &DisplayConfig, anim_ms: f64) {
        let area = frame.area();
        let lines = self.lines(config, area.width, area.height, anim_ms);
        frame.render_widget(Paragraph::new(lines), area);
    }

    /// Build the background lines for an area of the given size.
    pub fn lines(
        &mut self,
        config: &DisplayConfig,
        width: u16,
        height: u16,
        anim_ms: f64,
    ) -> Vec<Line<'static>> {
        match config.background {
            BackgroundMode::Animated => build_lines(config.gradient, width, height, anim_ms),
            BackgroundMode::Static => {
                let key = (config.gradient, width, height);
                if self.cached != Some(key) {
                    self.static_lines = build_lines(config.gradient, width, height, 0.0);
                    self.cached = Some(key);
                }
                self.static_lines.clone()
            }
        }
    }
}

fn build_lines(kind: GradientKind, width: u16, height: u16, anim_ms: f64) -> Vec<Line<'static>> {
    (0..height)
        .map(|y| {
            let spans: Vec<Span> = (0..width)
                .map(|x| {
                    let color = gradient_color(kind, x, y, width, height, anim_ms);
                    Span::styled(" ", Style::new().bg(color))
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(background: BackgroundMode) -> DisplayConfig {
        DisplayConfig {
            background,
            ..Default::default()
        }
    }

    #[test]
    fn test_lines_cover_area() {
        let mut state = BackgroundState::new();
        let lines = state.lines(&config(BackgroundMode::Animated), 12, 4, 0.0);
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|line| line.spans.len() == 12));
    }

    #[test]
    fn test_static_ignores_time() {
        let mut state = BackgroundState::new();
        let cfg = config(BackgroundMode::Static);
        assert_eq!(state.lines(&cfg, 10, 3, 0.0), state.lines(&cfg, 10, 3, 4321.0));
        assert_eq!(state.lines(&cfg, 10, 3, 99.0).len(), 3);
    }

    #[test]
    fn test_animated_follows_time() {
        let mut state = BackgroundState::new();
        let cfg = config(BackgroundMode::Animated);
        assert_ne!(state.lines(&cfg, 10, 3, 0.0), state.lines(&cfg, 10, 3, 4000.0));
    }

    #[test]
    fn test_static_cache_tracks_size_and_kind() {
        let mut state = BackgroundState::new();
        let mut cfg = config(BackgroundMode::Static);
        assert_eq!(state.lines(&cfg, 10, 3, 0.0).len(), 3);
        assert_eq!(state.lines(&cfg, 10, 5, 0.0).len(), 5);

        let linear = state.lines(&cfg, 10, 5, 0.0);
        cfg.gradient = GradientKind::Conic;
        assert_ne!(state.lines(&cfg, 10, 5, 0.0), linear);
    }
}
