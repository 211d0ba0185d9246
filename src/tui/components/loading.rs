//! # Loading Indicator
//!
//! Centered spinner shown while the one fetch is outstanding. The frame
//! index comes from the event loop's animation clock.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::theme::Theme;

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct LoadingIndicator {
    frame_index: usize,
    theme: Theme,
}

impl LoadingIndicator {
    pub fn new(frame_index: usize, theme: Theme) -> Self {
        Self { frame_index, theme }
    }

    fn glyph(&self) -> &'static str {
        SPINNER[self.frame_index % SPINNER.len()]
    }
}

impl Component for LoadingIndicator {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                self.glyph(),
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Fetching prayer times...",
                Style::default().fg(self.theme.muted),
            )),
        ];

        let [center] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_wraps() {
        let a = LoadingIndicator::new(0, Theme::LIGHT);
        let b = LoadingIndicator::new(SPINNER.len(), Theme::LIGHT);
        assert_eq!(a.glyph(), b.glyph());
        assert_ne!(a.glyph(), LoadingIndicator::new(1, Theme::LIGHT).glyph());
    }
}
