//! Transient notification in the bottom-right corner.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Clear, Paragraph, Wrap},
};
use shadoll_core::palette;

/// How long a toast stays on screen after the last show.
pub const TOAST_DURATION_MS: u64 = 2500;

const MAX_WIDTH: u16 = 48;

#[derive(Debug, Default)]
pub struct Toast {
    title: String,
    message: String,
    shown_at_ms: Option<u64>,
}

impl Toast {
    /// Show a toast. Showing again restarts the countdown.
    pub fn show(&mut self, title: impl Into<String>, message: impl Into<String>, now_ms: u64) {
        self.title = title.into();
        self.message = message.into();
        self.shown_at_ms = Some(now_ms);
    }

    pub fn is_visible(&self, now_ms: u64) -> bool {
        self.shown_at_ms
            .is_some_and(|shown| now_ms.saturating_sub(shown) < TOAST_DURATION_MS)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn render(&self, frame: &mut Frame, now_ms: u64) {
        if !self.is_visible(now_ms) {
            return;
        }
        let area = toast_area(frame.area(), self.message());
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(palette::MUTED))
            .title(Line::from(self.title()).bold());
        let body = Paragraph::new(self.message())
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(Clear, area);
        frame.render_widget(body, area);
    }
}

/// Bottom-right box sized for `message`, clipped to `area`.
fn toast_area(area: Rect, message: &str) -> Rect {
    let width = MAX_WIDTH.min(area.width);
    let inner = width.saturating_sub(2).max(1) as usize;
    let lines = message.chars().count().div_ceil(inner).max(1) as u16;
    let height = (lines + 2).min(area.height);
    Rect {
        x: area.right().saturating_sub(width + 1).max(area.x),
        y: area.bottom().saturating_sub(height + 2).max(area.y),
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hides_after_duration() {
        let mut toast = Toast::default();
        assert!(!toast.is_visible(0));

        toast.show("Configuration Updated", "Speed: 1x", 1_000);
        assert!(toast.is_visible(1_000));
        assert!(toast.is_visible(1_000 + TOAST_DURATION_MS - 1));
        assert!(!toast.is_visible(1_000 + TOAST_DURATION_MS));
    }

    #[test]
    fn test_show_again_restarts_countdown() {
        let mut toast = Toast::default();
        toast.show("a", "first", 0);
        toast.show("b", "second", 2_000);
        assert!(toast.is_visible(4_000));
        assert_eq!(toast.title(), "b");
        assert_eq!(toast.message(), "second");
    }

    #[test]
    fn test_area_fits_terminal() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = toast_area(area, &"x".repeat(70));
        assert_eq!(rect.width, MAX_WIDTH);
        assert_eq!(rect.height, 4);
        assert!(rect.right() <= area.right());
        assert!(rect.bottom() <= area.bottom());

        let tiny = Rect::new(0, 0, 10, 3);
        let rect = toast_area(tiny, "hello world");
        assert!(rect.width <= 10 && rect.height <= 3);
    }
}
