use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::view::{PrayerCard, Screen, View};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    CARD_HEIGHT, LoadingIndicator, PermissionDialog, PrayerCardView, TitleBar,
};
use crate::tui::theme::Theme;

const CARDS_PER_ROW: usize = 3;

pub fn draw_ui(
    frame: &mut Frame,
    view: &View,
    status_message: &str,
    tui: &TuiState,
    spinner_frame: usize,
) {
    use Constraint::{Length, Min};

    let theme = Theme::for_mode(view.prefs.dark_mode);
    frame.render_widget(Block::default().style(theme.base()), frame.area());

    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, footer_area] = layout.areas(frame.area());

    TitleBar::new(
        status_message.to_string(),
        view.prefs.notifications_enabled,
        view.prefs.dark_mode,
        theme,
    )
    .render(frame, title_area);

    match &view.screen {
        Screen::Loading => LoadingIndicator::new(spinner_frame, theme).render(frame, main_area),
        Screen::Error { message } => draw_error_view(frame, main_area, message, theme),
        Screen::Ready {
            gregorian_date,
            hijri_date,
            cards,
        } => draw_timetable(frame, main_area, gregorian_date, hijri_date, cards, theme),
    }

    draw_footer(frame, footer_area, theme);

    if tui.permission_prompt.is_some() {
        PermissionDialog { theme }.render(frame, main_area);
    }
}

fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str, theme: Theme) {
    let [row] = Layout::vertical([Constraint::Length(5)])
        .flex(Flex::Center)
        .areas(area);

    let error_paragraph = Paragraph::new(error_msg)
        .block(
            Block::bordered()
                .title("ERROR")
                .border_style(Style::default().fg(theme.error)),
        )
        .style(Style::default().fg(theme.error))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(error_paragraph, row);
}

fn draw_timetable(
    frame: &mut Frame,
    area: Rect,
    gregorian_date: &str,
    hijri_date: &str,
    cards: &[PrayerCard],
    theme: Theme,
) {
    let rows = cards.len().div_ceil(CARDS_PER_ROW);
    let mut constraints = vec![Constraint::Length(4)];
    constraints.extend(std::iter::repeat_n(Constraint::Length(CARD_HEIGHT), rows));
    let areas = Layout::vertical(constraints)
        .flex(Flex::Start)
        .split(area);

    let dates = Paragraph::new(vec![
        Line::from(Span::styled(
            gregorian_date.to_string(),
            Style::default().fg(theme.foreground),
        )),
        Line::from(Span::styled(
            hijri_date.to_string(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .block(Block::bordered().border_style(Style::default().fg(theme.muted)))
    .alignment(Alignment::Center);
    frame.render_widget(dates, areas[0]);

    for (row_index, row_cards) in cards.chunks(CARDS_PER_ROW).enumerate() {
        let row_area = areas[row_index + 1];
        let columns = Layout::horizontal(
            (0..CARDS_PER_ROW).map(|_| Constraint::Ratio(1, CARDS_PER_ROW as u32)),
        )
        .split(row_area);
        for (card, card_area) in row_cards.iter().zip(columns.iter()) {
            PrayerCardView::new(card, theme).render(frame, *card_area);
        }
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, theme: Theme) {
    let footer = Line::from(vec![
        Span::raw("Prayer times provided by Aladhan API"),
        Span::raw("  ·  d theme · n notifications · q quit"),
    ])
    .style(Style::default().fg(theme.muted))
    .centered();
    frame.render_widget(Paragraph::new(footer), area);
}
