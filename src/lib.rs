//! Prayer times library exports for testing

pub mod aladhan;
pub mod core;
pub mod platform;
pub mod tui;

#[cfg(test)]
pub mod test_support;
