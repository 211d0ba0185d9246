//! # View Projection
//!
//! `project()` turns `App` into a plain view model. Any front end can draw
//! it; the TUI does, and tests assert on it directly.

use chrono::NaiveTime;

use crate::core::state::{App, DisplayState, UiPreferences};

/// One prayer card: name plus its time on a 12-hour clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerCard {
    pub name: &'static str,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Error {
        message: String,
    },
    Ready {
        gregorian_date: String,
        hijri_date: String,
        cards: Vec<PrayerCard>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub screen: Screen,
    pub prefs: UiPreferences,
}

impl View {
    pub fn cards(&self) -> &[PrayerCard] {
        match &self.screen {
            Screen::Ready { cards, .. } => cards,
            _ => &[],
        }
    }
}

pub fn project(app: &App) -> View {
    let screen = match &app.display {
        DisplayState::Loading => Screen::Loading,
        DisplayState::Error(message) => Screen::Error {
            message: message.clone(),
        },
        DisplayState::Ready(timetable) => Screen::Ready {
            gregorian_date: timetable.gregorian_date.clone(),
            hijri_date: timetable.hijri_date.clone(),
            cards: timetable
                .timings
                .iter()
                .map(|(prayer, time)| PrayerCard {
                    name: prayer.name(),
                    time: to_12_hour(time),
                })
                .collect(),
        },
    };

    View {
        screen,
        prefs: app.prefs,
    }
}

/// `"13:05"` → `"01:05 PM"`.
///
/// A trailing annotation like `"05:30 (BST)"` is ignored. Text that still
/// does not parse is returned unchanged.
pub fn to_12_hour(time: &str) -> String {
    let clock = time.split_whitespace().next().unwrap_or_default();
    match NaiveTime::parse_from_str(clock, "%H:%M") {
        Ok(t) => t.format("%I:%M %p").to_string(),
        Err(_) => time.to_string(),
    }
}
