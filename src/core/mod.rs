//! # Core Application Logic
//!
//! The prayer times view model. It knows nothing about any specific UI
//! technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • project() (view)     │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `App`, `DisplayState`, `UiPreferences`
//! - [`action`]: `Action`, `Effect` and `update()`
//! - [`view`]: the render projection and 12-hour time formatting
//! - [`config`]: config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod state;
pub mod view;
