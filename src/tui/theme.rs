//! Light and dark palettes. Dark mode swaps the palette for the whole
//! frame; nothing else about the layout changes.

use ratatui::style::{Color, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub card: Color,
    pub error: Color,
    pub highlight: Color,
}

impl Theme {
    pub const LIGHT: Theme = Theme {
        background: Color::Rgb(243, 244, 246),
        foreground: Color::Rgb(17, 24, 39),
        muted: Color::Rgb(75, 85, 99),
        accent: Color::Rgb(5, 150, 105),
        card: Color::Rgb(249, 250, 251),
        error: Color::Rgb(220, 38, 38),
        highlight: Color::Rgb(75, 85, 99),
    };

    pub const DARK: Theme = Theme {
        background: Color::Rgb(17, 24, 39),
        foreground: Color::Rgb(243, 244, 246),
        muted: Color::Rgb(156, 163, 175),
        accent: Color::Rgb(52, 211, 153),
        card: Color::Rgb(55, 65, 81),
        error: Color::Rgb(248, 113, 113),
        highlight: Color::Rgb(250, 204, 21),
    };

    pub fn for_mode(dark_mode: bool) -> Theme {
        if dark_mode { Theme::DARK } else { Theme::LIGHT }
    }

    /// Root style painted under everything else.
    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn card_style(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.card)
    }
}
