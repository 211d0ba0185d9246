//! A single bordered card: prayer name in the border, 12-hour time inside.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::core::view::PrayerCard;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub const CARD_HEIGHT: u16 = 5;

pub struct PrayerCardView<'a> {
    pub card: &'a PrayerCard,
    pub theme: Theme,
}

impl<'a> PrayerCardView<'a> {
    pub fn new(card: &'a PrayerCard, theme: Theme) -> Self {
        Self { card, theme }
    }
}

impl Component for PrayerCardView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(self.card.name)
            .title_style(
                Style::default()
                    .fg(self.theme.foreground)
                    .add_modifier(Modifier::BOLD),
            )
            .border_style(Style::default().fg(self.theme.muted))
            .style(self.theme.card_style());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [time_area] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(inner);
        let time = Paragraph::new(self.card.time.as_str())
            .style(
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(time, time_area);
    }
}
