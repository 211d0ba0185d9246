//! # TitleBar Component
//!
//! Top line of the screen: title and location on the left, status text in
//! the middle, toggle indicators on the right.
//!
//! ```text
//! Prayer Times · London, UK | Loading...            [n] Bell off  [d] Light
//! ```
//!
//! Purely presentational. It receives everything as props and keeps no
//! state, so tests only need a `TestBackend` and a string search.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::aladhan::client::{CITY, COUNTRY};
use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct TitleBar {
    pub status_message: String,
    pub notifications_enabled: bool,
    pub dark_mode: bool,
    pub theme: Theme,
}

impl TitleBar {
    pub fn new(
        status_message: String,
        notifications_enabled: bool,
        dark_mode: bool,
        theme: Theme,
    ) -> Self {
        Self {
            status_message,
            notifications_enabled,
            dark_mode,
            theme,
        }
    }

    fn title_line(&self) -> Line<'static> {
        let mut spans = vec![
            Span::styled(
                "Prayer Times",
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" · {}, {}", CITY, COUNTRY),
                Style::default().fg(self.theme.muted),
            ),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }
        Line::from(spans)
    }

    fn toggles_line(&self) -> Line<'static> {
        let bell = if self.notifications_enabled {
            Span::styled("Bell on", Style::default().fg(self.theme.accent))
        } else {
            Span::styled("Bell off", Style::default().fg(self.theme.muted))
        };
        let mode = if self.dark_mode {
            Span::styled("Dark", Style::default().fg(self.theme.highlight))
        } else {
            Span::styled("Light", Style::default().fg(self.theme.highlight))
        };
        Line::from(vec![
            Span::styled("[n] ", Style::default().fg(self.theme.muted)),
            bell,
            Span::styled("  [d] ", Style::default().fg(self.theme.muted)),
            mode,
        ])
        .right_aligned()
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(26)]).areas(area);
        frame.render_widget(Paragraph::new(self.title_line()), left);
        frame.render_widget(Paragraph::new(self.toggles_line()), right);
    }
}
