//! Aladhan REST client.
//!
//! One plain GET against `timingsByCity`. City, country and calculation
//! method are fixed; only the base URL can be pointed elsewhere (mirrors,
//! mock servers in tests).

use async_trait::async_trait;
use log::{debug, info, warn};

use super::source::{FetchError, TimingsSource};
use super::types::TimingsResponse;

pub const DEFAULT_BASE_URL: &str = "https://api.aladhan.com/v1";

pub const CITY: &str = "London";
pub const COUNTRY: &str = "UK";
/// Calculation method 2: Islamic Society of North America.
pub const METHOD: u8 = 2;

pub struct AladhanClient {
    base_url: String,
    client: reqwest::Client,
}

impl AladhanClient {
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Full request URL, query string included.
    pub fn timings_url(&self) -> String {
        format!(
            "{}/timingsByCity?city={}&country={}&method={}",
            self.base_url, CITY, COUNTRY, METHOD
        )
    }
}

impl Default for AladhanClient {
    fn default() -> Self {
        Self::new(None)
    }
}

#[async_trait]
impl TimingsSource for AladhanClient {
    fn name(&self) -> &str {
        "aladhan"
    }

    async fn fetch_timings(&self) -> Result<TimingsResponse, FetchError> {
        let url = self.timings_url();
        info!("Fetching prayer times: GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!("Aladhan response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Aladhan API error: {} - {}", status, message);
            return Err(FetchError::Status { status, message });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        debug!("Aladhan response body: {} bytes", body.len());

        let timings: TimingsResponse = serde_json::from_str(&body).map_err(|e| {
            warn!("Failed to decode Aladhan response: {}", e);
            FetchError::Decode(e.to_string())
        })?;

        info!(
            "Prayer times received: code={}, status={}, date={}",
            timings.code, timings.status, timings.data.date.readable
        );
        Ok(timings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url_is_london() {
        let client = AladhanClient::default();
        assert_eq!(
            client.timings_url(),
            "https://api.aladhan.com/v1/timingsByCity?city=London&country=UK&method=2"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = AladhanClient::new(Some("http://localhost:8080/v1/".to_string()));
        assert_eq!(
            client.timings_url(),
            "http://localhost:8080/v1/timingsByCity?city=London&country=UK&method=2"
        );
    }

    #[test]
    fn test_name() {
        assert_eq!(AladhanClient::default().name(), "aladhan");
    }
}
