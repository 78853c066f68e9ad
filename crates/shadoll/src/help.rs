//! Keyboard help overlay and the `[?]` button that opens it.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Position, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph},
};
use shadoll_core::palette;

const POPUP_WIDTH: u16 = 52;
const BUTTON_LABEL: &str = "[?]";
const CLOSE_LABEL: &str = "[x]";

/// Key bindings shown in the overlay.
const BINDINGS: [(&str, &str); 11] = [
    ("b", "Toggle background (static / animated)"),
    ("g", "Cycle gradient (linear / radial / conic)"),
    ("l", "Cycle logo (static / animated / full)"),
    ("a", "Cycle logo animation"),
    ("e", "Cycle element animation"),
    ("+ / -", "Speed up / slow down"),
    ("0", "Reset speed to 1x"),
    ("r", "Reset everything"),
    ("h ? /", "Toggle this help"),
    ("Esc", "Close help"),
    ("q", "Quit"),
];

#[derive(Debug, Default)]
pub struct HelpOverlay {
    open: bool,
}

impl HelpOverlay {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Handle a left click. Returns whether the click belonged to the help UI.
    ///
    /// While open, the close button and any click outside the window close it.
    pub fn click(&mut self, position: Position, area: Rect) -> bool {
        if self.open {
            let popup = popup_area(area);
            if close_button(popup).contains(position) || !popup.contains(position) {
                self.open = false;
            }
            return true;
        }
        if help_button(area).contains(position) {
            self.open = true;
            return true;
        }
        false
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(
            Span::styled(BUTTON_LABEL, Style::new().fg(palette::MUTED)),
            help_button(area),
        );

        if !self.open {
            return;
        }

        let popup = popup_area(area);
        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(key, action)| {
                Line::from(vec![
                    Span::styled(format!("{key:>7}"), Style::new().fg(palette::LOGO_S).bold()),
                    Span::raw("  "),
                    Span::raw(*action),
                ])
            })
            .chain([
                Line::raw(""),
                Line::from("Move the mouse over the logo to tilt it.".dark_gray()),
            ])
            .collect();

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(palette::LOGO_L))
            .title(Line::from(" Keyboard Shortcuts ").bold());

        frame.render_widget(Clear, popup);
        frame.render_widget(Paragraph::new(lines).block(block), popup);
        frame.render_widget(
            Span::styled(CLOSE_LABEL, Style::new().fg(palette::LOGO_L)),
            close_button(popup),
        );
    }
}

/// The `[?]` button in the top-right corner.
pub fn help_button(area: Rect) -> Rect {
    let width = (BUTTON_LABEL.len() as u16).min(area.width);
    Rect {
        x: area.right().saturating_sub(width + 1).max(area.x),
        y: area.y,
        width,
        height: area.height.min(1),
    }
}

/// Centered overlay window.
pub fn popup_area(area: Rect) -> Rect {
    let height = BINDINGS.len() as u16 + 4;
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(POPUP_WIDTH)])
        .flex(Flex::Center)
        .areas(row);
    popup
}

/// The close button on the overlay's top border.
fn close_button(popup: Rect) -> Rect {
    let width = (CLOSE_LABEL.len() as u16).min(popup.width);
    Rect {
        x: popup.right().saturating_sub(width + 1).max(popup.x),
        y: popup.y,
        width,
        height: popup.height.min(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    #[test]
    fn test_button_opens_overlay() {
        let mut help = HelpOverlay::default();
        let button = help_button(AREA);
        assert_eq!(button, Rect::new(76, 0, 3, 1));

        assert!(!help.click(Position::new(10, 10), AREA));
        assert!(!help.is_open());

        assert!(help.click(Position::new(77, 0), AREA));
        assert!(help.is_open());
    }

    #[test]
    fn test_click_inside_keeps_overlay_open() {
        let mut help = HelpOverlay::default();
        help.toggle();
        let popup = popup_area(AREA);
        assert!(help.click(Position::new(popup.x + 2, popup.y + 3), AREA));
        assert!(help.is_open());
    }

    #[test]
    fn test_click_outside_or_close_button_closes() {
        let mut help = HelpOverlay::default();
        help.toggle();
        assert!(help.click(Position::new(0, 23), AREA));
        assert!(!help.is_open());

        help.toggle();
        let close = close_button(popup_area(AREA));
        assert!(help.click(Position::new(close.x + 1, close.y), AREA));
        assert!(!help.is_open());
    }

    #[test]
    fn test_popup_is_centered() {
        let popup = popup_area(AREA);
        assert_eq!(popup.width, POPUP_WIDTH);
        assert_eq!(popup.height, BINDINGS.len() as u16 + 4);
        assert_eq!(popup.x, (80 - POPUP_WIDTH) / 2);
    }
}
