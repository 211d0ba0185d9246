//! Background work spawned by the event loop.
//!
//! Each task runs once and reports back as a single `Action` on the loop's
//! channel. Nothing here touches `App` directly.

use std::sync::{Arc, mpsc};

use log::{info, warn};

use crate::aladhan::TimingsSource;
use crate::core::action::Action;
use crate::platform::NotificationPermission;

/// Fetch the timings and turn the outcome into an action.
pub async fn load_timings(source: &dyn TimingsSource) -> Action {
    info!("Loading timings from {}", source.name());
    Action::from(source.fetch_timings().await)
}

/// Ask for notification permission and turn the answer into an action.
pub async fn ask_permission(permission: &dyn NotificationPermission) -> Action {
    Action::PermissionResolved(permission.request_permission().await)
}

pub fn spawn_fetch(source: Arc<dyn TimingsSource>, tx: mpsc::Sender<Action>) {
    info!("Spawning timings fetch");
    tokio::spawn(async move {
        let action = load_timings(source.as_ref()).await;
        if tx.send(action).is_err() {
            warn!("Failed to deliver fetch result: receiver dropped");
        }
    });
}

pub fn spawn_permission_request(
    permission: Arc<dyn NotificationPermission>,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning notification permission request");
    tokio::spawn(async move {
        let action = ask_permission(permission.as_ref()).await;
        if tx.send(action).is_err() {
            warn!("Failed to deliver permission answer: receiver dropped");
        }
    });
}
