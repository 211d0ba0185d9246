//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the view
//! model, and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle** (Ready or Error): sleeps up to 500ms, only redraws on events,
//!   background results or terminal resize.
//!
//! ## Keys
//!
//! `d` dark mode, `n` notifications, `q`/`Esc` quit, `Ctrl+C` always quits.
//! While the permission dialog is open it receives every key.

mod component;
mod components;
mod event;
pub mod tasks;
pub mod theme;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;

use crate::aladhan::{AladhanClient, TimingsSource};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, DisplayState};
use crate::core::view::project;
use crate::platform::{NotificationPermission, PermissionPrompt, TerminalPermission};
use crate::tui::component::EventHandler;
use crate::tui::components::PermissionPromptState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::tasks::{spawn_fetch, spawn_permission_request};

/// TUI-specific presentation state (not part of core state)
pub struct TuiState {
    /// Permission dialog overlay (None = hidden)
    pub permission_prompt: Option<PermissionPromptState>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            permission_prompt: None,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Hide)?;
        info!("Terminal modes enabled (hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// Collaborators the event loop hands work to.
struct Runtime {
    source: Arc<dyn TimingsSource>,
    permission: Arc<dyn NotificationPermission>,
    tx: mpsc::Sender<Action>,
}

impl Runtime {
    /// Start whatever I/O the effect asks for. Returns true on quit.
    fn perform(&self, effect: Effect) -> bool {
        match effect {
            Effect::None => false,
            Effect::Quit => true,
            Effect::FetchTimings => {
                spawn_fetch(self.source.clone(), self.tx.clone());
                false
            }
            Effect::RequestPermission => {
                spawn_permission_request(self.permission.clone(), self.tx.clone());
                false
            }
        }
    }
}

/// Maps a key outside any dialog to an action.
fn key_action(event: &TuiEvent, permission: &dyn NotificationPermission) -> Option<Action> {
    match event {
        TuiEvent::InputChar('d') => Some(Action::ToggleDarkMode),
        TuiEvent::InputChar('n') => Some(Action::ToggleNotifications(
            permission.query_permission(),
        )),
        TuiEvent::InputChar('q') | TuiEvent::Escape | TuiEvent::ForceQuit => Some(Action::Quit),
        _ => None,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let (prompt_tx, prompt_rx) = mpsc::channel::<PermissionPrompt>();
    let (tx, rx) = mpsc::channel();
    let runtime = Runtime {
        source: Arc::new(AladhanClient::new(Some(config.base_url.clone()))),
        permission: Arc::new(TerminalPermission::new(prompt_tx)),
        tx,
    };

    let mut app = App::new();
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // The one and only fetch.
    let effect = update(&mut app, Action::Initialize);
    runtime.perform(effect);

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = matches!(app.display, DisplayState::Loading);
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            let view = project(&app);
            terminal.draw(|f| ui::draw_ui(f, &view, &app.status_message, &tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // When the permission dialog is open, route all events to it
            if !matches!(event, TuiEvent::ForceQuit) && tui.permission_prompt.is_some() {
                let answer = tui
                    .permission_prompt
                    .as_mut()
                    .and_then(|prompt| prompt.handle_event(&event));
                if let Some(answer) = answer
                    && let Some(prompt) = tui.permission_prompt.take()
                {
                    prompt.resolve(answer);
                }
                continue;
            }

            if let Some(action) = key_action(&event, runtime.permission.as_ref()) {
                let effect = update(&mut app, action);
                if runtime.perform(effect) {
                    should_quit = true;
                }
            }
        }

        if should_quit {
            break;
        }

        // Permission questions raised by the platform capability
        while let Ok(prompt) = prompt_rx.try_recv() {
            needs_redraw = true;
            debug!("Showing notification permission dialog");
            // A replaced prompt is dropped, which resolves it as dismissed.
            tui.permission_prompt = Some(PermissionPromptState::new(prompt));
        }

        // Handle background task actions (fetch result, permission answer)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if runtime.perform(effect) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Permission;
    use crate::test_support::FakePermission;

    #[test]
    fn test_key_action_mapping() {
        let permission = FakePermission::new(Permission::Granted, Permission::Granted);
        assert!(matches!(
            key_action(&TuiEvent::InputChar('d'), &permission),
            Some(Action::ToggleDarkMode)
        ));
        assert!(matches!(
            key_action(&TuiEvent::InputChar('n'), &permission),
            Some(Action::ToggleNotifications(Permission::Granted))
        ));
        assert!(matches!(
            key_action(&TuiEvent::InputChar('q'), &permission),
            Some(Action::Quit)
        ));
        assert!(matches!(
            key_action(&TuiEvent::ForceQuit, &permission),
            Some(Action::Quit)
        ));
        assert!(key_action(&TuiEvent::InputChar('x'), &permission).is_none());
        assert_eq!(permission.prompt_count(), 0);
    }

    #[test]
    fn test_tui_state_starts_without_dialog() {
        assert!(TuiState::new().permission_prompt.is_none());
    }
}
