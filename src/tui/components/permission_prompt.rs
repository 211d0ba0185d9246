//! # Permission Dialog
//!
//! Modal overlay asking whether the app may show notifications. While it
//! is open the event loop routes every key here.
//!
//! - `y` grants
//! - `n` denies
//! - `Esc` dismisses (permission stays undecided)

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use crate::platform::{Permission, PermissionPrompt};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

const DIALOG_WIDTH: u16 = 46;
const DIALOG_HEIGHT: u16 = 6;

pub struct PermissionPromptState {
    prompt: PermissionPrompt,
}

impl PermissionPromptState {
    pub fn new(prompt: PermissionPrompt) -> Self {
        Self { prompt }
    }

    /// Close the dialog with the user's answer.
    pub fn resolve(self, permission: Permission) {
        self.prompt.answer(permission);
    }
}

impl EventHandler for PermissionPromptState {
    type Event = Permission;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Permission> {
        match event {
            TuiEvent::InputChar('y') => Some(Permission::Granted),
            TuiEvent::InputChar('n') => Some(Permission::Denied),
            TuiEvent::Escape => Some(Permission::Default),
            _ => None,
        }
    }
}

/// Stateless renderer for the dialog.
pub struct PermissionDialog {
    pub theme: Theme,
}

impl Component for PermissionDialog {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [row] = Layout::vertical([Constraint::Length(DIALOG_HEIGHT)])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::horizontal([Constraint::Length(DIALOG_WIDTH)])
            .flex(Flex::Center)
            .areas(row);

        let key = Style::default()
            .fg(self.theme.accent)
            .add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::from("Allow prayer time notifications?"),
            Line::from(""),
            Line::from(vec![
                Span::styled("[y]", key),
                Span::raw(" Allow   "),
                Span::styled("[n]", key),
                Span::raw(" Block   "),
                Span::styled("[Esc]", key),
                Span::raw(" Later"),
            ]),
        ];

        let dialog = Paragraph::new(lines)
            .block(
                Block::bordered()
                    .title("Notifications")
                    .border_style(Style::default().fg(self.theme.accent)),
            )
            .style(self.theme.card_style())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(Clear, popup);
        frame.render_widget(dialog, popup);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_keys_map_to_answers() {
        let (prompt, _answer) = PermissionPrompt::channel();
        let mut state = PermissionPromptState::new(prompt);

        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('y')),
            Some(Permission::Granted)
        );
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('n')),
            Some(Permission::Denied)
        );
        assert_eq!(
            state.handle_event(&TuiEvent::Escape),
            Some(Permission::Default)
        );
        assert_eq!(state.handle_event(&TuiEvent::InputChar('d')), None);
    }

    #[test]
    fn test_resolve_sends_answer() {
        let (prompt, mut answer) = PermissionPrompt::channel();
        PermissionPromptState::new(prompt).resolve(Permission::Granted);
        assert_eq!(answer.try_recv().unwrap(), Permission::Granted);
    }

    #[test]
    fn test_dialog_renders() {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                PermissionDialog {
                    theme: Theme::DARK,
                }
                .render(f, f.area());
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Allow prayer time notifications?"));
        assert!(text.contains("[Esc]"));
    }
}
