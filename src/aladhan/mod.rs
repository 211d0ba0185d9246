pub mod client;
pub mod source;
pub mod types;

pub use client::{AladhanClient, DEFAULT_BASE_URL};
pub use source::{FetchError, TimingsSource};
pub use types::{DateInfo, HijriDate, HijriMonth, Prayer, PrayerTimes, TimingsData, TimingsResponse};
