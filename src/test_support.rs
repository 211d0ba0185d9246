//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;

use async_trait::async_trait;

use crate::aladhan::{
    DateInfo, FetchError, HijriDate, HijriMonth, PrayerTimes, TimingsData, TimingsResponse,
    TimingsSource,
};
use crate::platform::{NotificationPermission, Permission};

/// The London response used throughout the tests.
pub fn sample_response() -> TimingsResponse {
    TimingsResponse {
        code: 200,
        status: "OK".to_string(),
        data: TimingsData {
            timings: PrayerTimes {
                fajr: "05:30".to_string(),
                sunrise: "07:00".to_string(),
                dhuhr: "12:15".to_string(),
                asr: "14:45".to_string(),
                maghrib: "16:30".to_string(),
                isha: "18:00".to_string(),
            },
            date: DateInfo {
                readable: "01 Jan 2024".to_string(),
                timestamp: "1704096000".to_string(),
                hijri: HijriDate {
                    date: "19".to_string(),
                    month: HijriMonth {
                        en: "Jumada al-Akhirah".to_string(),
                    },
                    year: "1445".to_string(),
                },
            },
        },
    }
}

/// A source that returns a canned result.
pub struct FakeSource {
    pub result: Result<TimingsResponse, FetchError>,
}

#[async_trait]
impl TimingsSource for FakeSource {
    fn name(&self) -> &str {
        "fake"
    }

    async fn fetch_timings(&self) -> Result<TimingsResponse, FetchError> {
        self.result.clone()
    }
}

/// A permission host whose answer is scripted and whose prompts are counted.
pub struct FakePermission {
    pub current: Mutex<Permission>,
    pub answer: Permission,
    pub prompts: Mutex<usize>,
}

impl FakePermission {
    pub fn new(current: Permission, answer: Permission) -> Self {
        Self {
            current: Mutex::new(current),
            answer,
            prompts: Mutex::new(0),
        }
    }

    pub fn prompt_count(&self) -> usize {
        *self.prompts.lock().unwrap()
    }
}

#[async_trait]
impl NotificationPermission for FakePermission {
    fn query_permission(&self) -> Permission {
        *self.current.lock().unwrap()
    }

    async fn request_permission(&self) -> Permission {
        *self.prompts.lock().unwrap() += 1;
        *self.current.lock().unwrap() = self.answer;
        self.answer
    }
}
