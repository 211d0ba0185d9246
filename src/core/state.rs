//! # Application State
//!
//! Core state for the prayer times view. No TUI types here; presentation
//! state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── display: DisplayState        // Loading | Error | Ready
//! ├── prefs: UiPreferences         // dark mode, notifications
//! ├── fetch_issued: bool           // the one fetch has been started
//! └── status_message: String       // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::aladhan::{PrayerTimes, TimingsResponse};

/// Everything the Ready screen needs, already in display form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timetable {
    pub timings: PrayerTimes,
    pub gregorian_date: String,
    pub hijri_date: String,
}

impl From<TimingsResponse> for Timetable {
    fn from(response: TimingsResponse) -> Self {
        let data = response.data;
        Self {
            hijri_date: data.date.hijri.display_text(),
            gregorian_date: data.date.readable,
            timings: data.timings,
        }
    }
}

/// Lifecycle of the one fetch. `Ready` and `Error` are terminal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DisplayState {
    #[default]
    Loading,
    Error(String),
    Ready(Timetable),
}

impl DisplayState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, DisplayState::Loading)
    }
}

/// Session-only toggles. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiPreferences {
    pub dark_mode: bool,
    pub notifications_enabled: bool,
}

pub struct App {
    pub display: DisplayState,
    pub prefs: UiPreferences,
    pub fetch_issued: bool,
    pub status_message: String,
}

impl App {
    pub fn new() -> Self {
        Self {
            display: DisplayState::Loading,
            prefs: UiPreferences::default(),
            fetch_issued: false,
            status_message: String::from("Loading prayer times..."),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_response;

    #[test]
    fn test_app_new_defaults() {
        let app = App::new();
        assert_eq!(app.display, DisplayState::Loading);
        assert!(!app.prefs.dark_mode);
        assert!(!app.prefs.notifications_enabled);
        assert!(!app.fetch_issued);
    }

    #[test]
    fn test_timetable_from_response() {
        let response = sample_response();
        let timetable = Timetable::from(response.clone());
        assert_eq!(timetable.timings, response.data.timings);
        assert_eq!(timetable.gregorian_date, "01 Jan 2024");
        assert_eq!(timetable.hijri_date, "19 Jumada al-Akhirah 1445");
    }

    #[test]
    fn test_only_loading_is_not_terminal() {
        assert!(!DisplayState::Loading.is_terminal());
        assert!(DisplayState::Error("x".into()).is_terminal());
        assert!(DisplayState::Ready(Timetable::from(sample_response())).is_terminal());
    }
}
