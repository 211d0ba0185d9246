//! Wire types for the Aladhan `timingsByCity` endpoint.
//!
//! Only the fields the app displays are modelled. Everything else the API
//! returns (Sunset, Imsak, Midnight, meta, ...) is skipped by serde.

use serde::{Deserialize, Serialize};

/// The six daily prayers, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    /// Fixed display order. Cards are always rendered in this order.
    pub const ALL: [Prayer; 6] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Sunrise => "Sunrise",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }
}

/// Clock times for the six prayers as `HH:MM` 24-hour text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrayerTimes {
    pub fajr: String,
    pub sunrise: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
}

impl PrayerTimes {
    pub fn get(&self, prayer: Prayer) -> &str {
        match prayer {
            Prayer::Fajr => &self.fajr,
            Prayer::Sunrise => &self.sunrise,
            Prayer::Dhuhr => &self.dhuhr,
            Prayer::Asr => &self.asr,
            Prayer::Maghrib => &self.maghrib,
            Prayer::Isha => &self.isha,
        }
    }

    /// Iterates `(prayer, time)` pairs in [`Prayer::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, &str)> + '_ {
        Prayer::ALL.into_iter().map(move |p| (p, self.get(p)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HijriMonth {
    pub en: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HijriDate {
    /// Day of month, e.g. `"19"`.
    pub date: String,
    pub month: HijriMonth,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DateInfo {
    /// Human-readable Gregorian date, e.g. `"01 Jan 2024"`.
    pub readable: String,
    pub timestamp: String,
    pub hijri: HijriDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TimingsData {
    pub timings: PrayerTimes,
    pub date: DateInfo,
}

/// Full response body of `GET /timingsByCity`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TimingsResponse {
    pub code: u16,
    pub status: String,
    pub data: TimingsData,
}

impl HijriDate {
    /// `"{day} {month} {year}"`, e.g. `"1 Muharram 1446"`.
    pub fn display_text(&self) -> String {
        format!("{} {} {}", self.date, self.month.en, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "code": 200,
        "status": "OK",
        "data": {
            "timings": {
                "Fajr": "05:30",
                "Sunrise": "07:00",
                "Dhuhr": "12:15",
                "Asr": "14:45",
                "Sunset": "16:28",
                "Maghrib": "16:30",
                "Isha": "18:00",
                "Imsak": "05:20",
                "Midnight": "00:08"
            },
            "date": {
                "readable": "01 Jan 2024",
                "timestamp": "1704096000",
                "hijri": {
                    "date": "19",
                    "format": "DD-MM-YYYY",
                    "month": { "number": 6, "en": "Jumada al-Akhirah", "ar": "جُمادى الآخرة" },
                    "year": "1445"
                }
            },
            "meta": { "latitude": 51.5073509 }
        }
    }"#;

    #[test]
    fn test_decode_ignores_extra_fields() {
        let resp: TimingsResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(resp.code, 200);
        assert_eq!(resp.status, "OK");
        assert_eq!(resp.data.timings.maghrib, "16:30");
        assert_eq!(resp.data.date.timestamp, "1704096000");
        assert_eq!(resp.data.date.hijri.month.en, "Jumada al-Akhirah");
    }

    #[test]
    fn test_decode_missing_prayer_fails() {
        let broken = SAMPLE.replace("\"Isha\": \"18:00\",", "");
        assert!(serde_json::from_str::<TimingsResponse>(&broken).is_err());
    }

    #[test]
    fn test_iter_follows_fixed_order() {
        let resp: TimingsResponse = serde_json::from_str(SAMPLE).unwrap();
        let names: Vec<&str> = resp.data.timings.iter().map(|(p, _)| p.name()).collect();
        assert_eq!(
            names,
            vec!["Fajr", "Sunrise", "Dhuhr", "Asr", "Maghrib", "Isha"]
        );
        let times: Vec<&str> = resp.data.timings.iter().map(|(_, t)| t).collect();
        assert_eq!(
            times,
            vec!["05:30", "07:00", "12:15", "14:45", "16:30", "18:00"]
        );
    }

    #[test]
    fn test_hijri_display_text() {
        let hijri = HijriDate {
            date: "1".to_string(),
            month: HijriMonth {
                en: "Muharram".to_string(),
            },
            year: "1446".to_string(),
        };
        assert_eq!(hijri.display_text(), "1 Muharram 1446");
    }
}
