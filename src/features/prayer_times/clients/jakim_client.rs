use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::features::prayer_times::models::UpstreamError;

/// One day of times as the upstream reports it, before validation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamPrayerDay {
    pub imsak: Option<String>,
    pub fajr: Option<String>,
    pub syuruk: Option<String>,
    pub dhuhr: Option<String>,
    pub asr: Option<String>,
    pub maghrib: Option<String>,
    pub isha: Option<String>,
}

/// Source of official daily prayer times
#[async_trait]
pub trait PrayerTimeUpstream: Send + Sync {
    async fn fetch_day(
        &self,
        zone_code: &str,
        date: NaiveDate,
    ) -> Result<UpstreamPrayerDay, UpstreamError>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TakwimResponse {
    #[serde(default)]
    prayer_time: Vec<UpstreamPrayerDay>,
}

/// HTTP client for the JAKIM e-solat `takwimsolat` API
pub struct JakimClient {
    client: reqwest::Client,
    base_url: String,
}

impl JakimClient {
    pub fn new(base_url: &str, user_agent: &str) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn day_url(&self, zone_code: &str, date: NaiveDate) -> String {
        format!(
            "{}?r=esolatApi/takwimsolat&period=date&zone={}&date={}",
            self.base_url,
            urlencoding::encode(zone_code),
            date.format("%Y-%m-%d")
        )
    }
}

fn first_day(body: TakwimResponse) -> Result<UpstreamPrayerDay, UpstreamError> {
    body.prayer_time
        .into_iter()
        .next()
        .ok_or_else(|| UpstreamError::Malformed("response has no prayerTime[0]".to_string()))
}

#[async_trait]
impl PrayerTimeUpstream for JakimClient {
    async fn fetch_day(
        &self,
        zone_code: &str,
        date: NaiveDate,
    ) -> Result<UpstreamPrayerDay, UpstreamError> {
        let url = self.day_url(zone_code, date);
        tracing::debug!("Requesting JAKIM times: {}", url);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let body: TakwimResponse = response
            .json()
            .await
            .map_err(|e| UpstreamError::Malformed(e.to_string()))?;

        first_day(body)
    }
}
