//! Host platform capabilities.

pub mod permission;
pub mod terminal;

pub use permission::{NotificationPermission, Permission};
pub use terminal::{PermissionPrompt, TerminalPermission};
