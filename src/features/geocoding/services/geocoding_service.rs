use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::core::error::Result;
use crate::features::geocoding::dtos::ReverseGeocodeQuery;
use crate::features::prayer_times::UpstreamError;

/// Reverse geocoding backend
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    async fn reverse(&self, query: &ReverseGeocodeQuery) -> std::result::Result<Value, UpstreamError>;
}

/// Nominatim `/reverse` client
pub struct NominatimClient {
    client: reqwest::Client,
    base_url: String,
}

impl NominatimClient {
    pub fn new(base_url: &str, user_agent: &str) -> reqwest::Result<Self> {
        Ok(Self {
            client: reqwest::Client::builder().user_agent(user_agent).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn reverse_url(&self, query: &ReverseGeocodeQuery) -> String {
        format!(
            "{}/reverse?format=json&lat={}&lon={}&zoom={}&addressdetails={}",
            self.base_url,
            query.lat,
            query.lon,
            query.zoom(),
            query.address_details()
        )
    }
}

#[async_trait]
impl ReverseGeocoder for NominatimClient {
    async fn reverse(&self, query: &ReverseGeocodeQuery) -> std::result::Result<Value, UpstreamError> {
        let url = self.reverse_url(query);
        tracing::debug!("Reverse geocoding: {}", url);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Nominatim request failed: {:?}", e);
                UpstreamError::from(e)
            })?;

        if !response.status().is_success() {
            tracing::warn!("Nominatim returned status: {}", response.status());
            return Err(UpstreamError::Status(response.status().as_u16()));
        }

        response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Nominatim response: {:?}", e);
            UpstreamError::Malformed(e.to_string())
        })
    }
}

/// Proxies reverse geocoding so browsers never call Nominatim directly
pub struct GeocodingService {
    geocoder: Arc<dyn ReverseGeocoder>,
    timeout: Duration,
}

impl GeocodingService {
    pub fn new(geocoder: Arc<dyn ReverseGeocoder>, timeout: Duration) -> Self {
        Self { geocoder, timeout }
    }

    pub async fn reverse(&self, query: &ReverseGeocodeQuery) -> Result<Value> {
        let body = tokio::time::timeout(self.timeout, self.geocoder.reverse(query))
            .await
            .map_err(|_| UpstreamError::Timeout(self.timeout))??;

        tracing::debug!("Reverse geocoded {}, {}", query.lat, query.lon);
        Ok(body)
    }
}
