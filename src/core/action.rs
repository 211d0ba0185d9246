//! # Actions
//!
//! Everything that can happen in the app becomes an `Action`.
//! User presses `d`? That's `Action::ToggleDarkMode`.
//! The API answers? That's `Action::TimingsLoaded(response)`.
//!
//! `update()` applies an action to the state and returns an [`Effect`]
//! describing any I/O the caller must start. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::aladhan::{FetchError, TimingsResponse};
use crate::core::state::{App, DisplayState, Timetable};
use crate::platform::Permission;

pub const GENERIC_FETCH_ERROR: &str = "Failed to fetch prayer times. Please try again later.";

#[derive(Debug)]
pub enum Action {
    /// First activation of the view.
    Initialize,
    TimingsLoaded(Box<TimingsResponse>),
    FetchFailed(String),
    ToggleDarkMode,
    /// Notification toggle pressed; carries the permission queried just before.
    ToggleNotifications(Permission),
    PermissionResolved(Permission),
    Quit,
}

impl From<Result<TimingsResponse, FetchError>> for Action {
    fn from(result: Result<TimingsResponse, FetchError>) -> Self {
        match result {
            Ok(response) => Action::TimingsLoaded(Box::new(response)),
            Err(e) => Action::FetchFailed(fetch_error_message(&e.to_string())),
        }
    }
}

/// User-facing error text for a failed fetch.
pub fn fetch_error_message(detail: &str) -> String {
    let detail = detail.trim();
    if detail.is_empty() {
        GENERIC_FETCH_ERROR.to_string()
    } else {
        format!("Failed to fetch prayer times: {detail}")
    }
}

/// I/O the event loop has to perform after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    FetchTimings,
    RequestPermission,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Initialize => {
            if app.fetch_issued {
                debug!("Initialize ignored: fetch already issued");
                return Effect::None;
            }
            app.fetch_issued = true;
            app.display = DisplayState::Loading;
            app.status_message = String::from("Loading prayer times...");
            Effect::FetchTimings
        }
        Action::TimingsLoaded(response) => {
            if app.display.is_terminal() {
                warn!("Late fetch result ignored: state already terminal");
                return Effect::None;
            }
            let timetable = Timetable::from(*response);
            info!(
                "Prayer times ready for {} ({})",
                timetable.gregorian_date, timetable.hijri_date
            );
            app.display = DisplayState::Ready(timetable);
            app.status_message.clear();
            Effect::None
        }
        Action::FetchFailed(message) => {
            if app.display.is_terminal() {
                warn!("Late fetch failure ignored: state already terminal");
                return Effect::None;
            }
            warn!("Prayer times unavailable: {}", message);
            let message = if message.trim().is_empty() {
                GENERIC_FETCH_ERROR.to_string()
            } else {
                message
            };
            app.display = DisplayState::Error(message);
            app.status_message.clear();
            Effect::None
        }
        Action::ToggleDarkMode => {
            app.prefs.dark_mode = !app.prefs.dark_mode;
            debug!("Dark mode: {}", app.prefs.dark_mode);
            Effect::None
        }
        Action::ToggleNotifications(permission) => {
            if permission.is_granted() {
                app.prefs.notifications_enabled = !app.prefs.notifications_enabled;
                debug!("Notifications: {}", app.prefs.notifications_enabled);
                Effect::None
            } else {
                Effect::RequestPermission
            }
        }
        Action::PermissionResolved(permission) => {
            if permission.is_granted() {
                app.prefs.notifications_enabled = true;
            } else {
                debug!("Notification permission not granted: {:?}", permission);
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_response;

    fn loaded() -> Action {
        Action::TimingsLoaded(Box::new(sample_response()))
    }

    #[test]
    fn test_initialize_fetches_exactly_once() {
        let mut app = App::new();
        assert_eq!(update(&mut app, Action::Initialize), Effect::FetchTimings);
        assert!(app.fetch_issued);
        assert_eq!(app.display, DisplayState::Loading);
        assert_eq!(update(&mut app, Action::Initialize), Effect::None);
    }

    #[test]
    fn test_initialize_after_ready_does_not_refetch() {
        let mut app = App::new();
        update(&mut app, Action::Initialize);
        update(&mut app, loaded());
        assert_eq!(update(&mut app, Action::Initialize), Effect::None);
        assert!(matches!(app.display, DisplayState::Ready(_)));
    }

    #[test]
    fn test_loaded_passes_all_six_timings_through() {
        let mut app = App::new();
        update(&mut app, Action::Initialize);
        update(&mut app, loaded());
        match &app.display {
            DisplayState::Ready(t) => {
                assert_eq!(t.timings, sample_response().data.timings);
                assert_eq!(t.timings.iter().count(), 6);
            }
            other => panic!("expected Ready, got {:?}", other),
        }
    }

    #[test]
    fn test_failure_yields_error_never_ready() {
        let mut app = App::new();
        update(&mut app, Action::Initialize);
        update(
            &mut app,
            Action::from(Err::<TimingsResponse, _>(FetchError::Network(
                "connection refused".into(),
            ))),
        );
        assert_eq!(
            app.display,
            DisplayState::Error(
                "Failed to fetch prayer times: network error: connection refused".into()
            )
        );

        // Terminal: a late success does not flip it to Ready.
        update(&mut app, loaded());
        assert!(matches!(app.display, DisplayState::Error(_)));
    }

    #[test]
    fn test_ready_is_terminal() {
        let mut app = App::new();
        update(&mut app, Action::Initialize);
        update(&mut app, loaded());
        update(&mut app, Action::FetchFailed("boom".into()));
        assert!(matches!(app.display, DisplayState::Ready(_)));
    }

    #[test]
    fn test_empty_failure_message_uses_fallback() {
        assert_eq!(fetch_error_message("  "), GENERIC_FETCH_ERROR);

        let mut app = App::new();
        update(&mut app, Action::FetchFailed(String::new()));
        assert_eq!(app.display, DisplayState::Error(GENERIC_FETCH_ERROR.into()));
    }

    #[test]
    fn test_toggle_dark_mode_is_involution() {
        let mut app = App::new();
        let before = app.prefs;
        update(&mut app, Action::ToggleDarkMode);
        assert!(app.prefs.dark_mode);
        update(&mut app, Action::ToggleDarkMode);
        assert_eq!(app.prefs, before);
    }

    #[test]
    fn test_dark_mode_does_not_touch_display() {
        let mut app = App::new();
        update(&mut app, Action::Initialize);
        update(&mut app, Action::ToggleDarkMode);
        assert_eq!(app.display, DisplayState::Loading);
    }

    #[test]
    fn test_notifications_granted_is_pure_flip() {
        let mut app = App::new();
        assert_eq!(
            update(&mut app, Action::ToggleNotifications(Permission::Granted)),
            Effect::None
        );
        assert!(app.prefs.notifications_enabled);
        assert_eq!(
            update(&mut app, Action::ToggleNotifications(Permission::Granted)),
            Effect::None
        );
        assert!(!app.prefs.notifications_enabled);
        assert_eq!(app.display, DisplayState::Loading);
        assert!(!app.fetch_issued);
    }

    #[test]
    fn test_notifications_not_granted_requests_permission() {
        let mut app = App::new();
        assert_eq!(
            update(&mut app, Action::ToggleNotifications(Permission::Default)),
            Effect::RequestPermission
        );
        assert_eq!(
            update(&mut app, Action::ToggleNotifications(Permission::Denied)),
            Effect::RequestPermission
        );
        assert!(!app.prefs.notifications_enabled);
    }

    #[test]
    fn test_permission_resolution() {
        let mut app = App::new();
        update(&mut app, Action::PermissionResolved(Permission::Denied));
        assert!(!app.prefs.notifications_enabled);
        update(&mut app, Action::PermissionResolved(Permission::Default));
        assert!(!app.prefs.notifications_enabled);
        update(&mut app, Action::PermissionResolved(Permission::Granted));
        assert!(app.prefs.notifications_enabled);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
