//! # TUI Components
//!
//! ## Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: title, location, status and toggle indicators
//! - `PrayerCardView`: one prayer card
//! - `LoadingIndicator`: spinner shown while fetching
//! - `PermissionDialog`: the notification permission overlay
//!
//! ## Stateful Components (Event-Driven)
//!
//! - `PermissionPromptState`: holds the pending prompt and turns keys into
//!   an answer
//!
//! Components receive external data as props, not by reading `App`
//! directly, so each one can be rendered alone against a `TestBackend`.

pub mod loading;
pub mod permission_prompt;
pub mod prayer_card;
mod title_bar;

pub use loading::LoadingIndicator;
pub use permission_prompt::{PermissionDialog, PermissionPromptState};
pub use prayer_card::{CARD_HEIGHT, PrayerCardView};
pub use title_bar::TitleBar;
