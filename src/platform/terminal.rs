//! # Terminal Permission
//!
//! In a terminal there is no OS-level permission store, so the "host
//! platform" is the UI loop itself. `request_permission` hands a
//! [`PermissionPrompt`] to the loop, which shows a confirmation dialog and
//! answers through the embedded oneshot.
//!
//! ```text
//! request task                     UI loop
//!     │  PermissionPrompt ──────────▶ │ show dialog
//!     │                               │ y / n / Esc
//!     │ ◀────────── reply(Permission) │
//! ```
//!
//! The answer is remembered for the session only. A dismissal stays
//! `Default` so the user is asked again next time, like a browser.

use std::sync::{Mutex, mpsc};

use async_trait::async_trait;
use log::{debug, info, warn};
use tokio::sync::oneshot;

use super::permission::{NotificationPermission, Permission};

/// A pending permission question for the UI loop.
#[derive(Debug)]
pub struct PermissionPrompt {
    reply: oneshot::Sender<Permission>,
}

impl PermissionPrompt {
    /// A prompt plus the receiver its answer arrives on.
    pub fn channel() -> (Self, oneshot::Receiver<Permission>) {
        let (reply, answer) = oneshot::channel();
        (Self { reply }, answer)
    }

    /// Resolve the prompt. Dropping it unanswered counts as a dismissal.
    pub fn answer(self, permission: Permission) {
        if self.reply.send(permission).is_err() {
            warn!("Permission answer dropped: requester went away");
        }
    }
}

pub struct TerminalPermission {
    state: Mutex<Permission>,
    prompts: mpsc::Sender<PermissionPrompt>,
}

impl TerminalPermission {
    pub fn new(prompts: mpsc::Sender<PermissionPrompt>) -> Self {
        Self {
            state: Mutex::new(Permission::Default),
            prompts,
        }
    }

    fn remember(&self, permission: Permission) {
        if let Ok(mut state) = self.state.lock() {
            *state = permission;
        }
    }
}

#[async_trait]
impl NotificationPermission for TerminalPermission {
    fn query_permission(&self) -> Permission {
        self.state.lock().map(|s| *s).unwrap_or_default()
    }

    async fn request_permission(&self) -> Permission {
        let current = self.query_permission();
        if current != Permission::Default {
            debug!("Permission already decided: {:?}", current);
            return current;
        }

        let (prompt, answer) = PermissionPrompt::channel();
        if self.prompts.send(prompt).is_err() {
            warn!("Permission prompt not shown: UI loop gone");
            return current;
        }

        let permission = answer.await.unwrap_or_default();
        info!("Notification permission answered: {:?}", permission);
        if permission != Permission::Default {
            self.remember(permission);
        }
        permission
    }
}
