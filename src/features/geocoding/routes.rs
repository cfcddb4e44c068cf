use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::geocoding::handlers;
use crate::features::geocoding::services::GeocodingService;

pub fn routes(service: Arc<GeocodingService>) -> Router {
    Router::new()
        .route("/api/nominatim-proxy", get(handlers::nominatim_proxy))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::geocoding::dtos::ReverseGeocodeQuery;
    use crate::features::geocoding::services::ReverseGeocoder;
    use crate::features::prayer_times::UpstreamError;
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use std::time::Duration;

    enum FakeGeocoder {
        Echo,
        Down,
        Hanging,
    }

    #[async_trait]
    impl ReverseGeocoder for FakeGeocoder {
        async fn reverse(&self, query: &ReverseGeocodeQuery) -> Result<Value, UpstreamError> {
            match self {
                FakeGeocoder::Echo => Ok(json!({
                    "display_name": "Kuala Lumpur, Malaysia",
                    "lat": query.lat.to_string(),
                    "lon": query.lon.to_string(),
                    "zoom": query.zoom(),
                    "address": { "city": "Kuala Lumpur", "country_code": "my" }
                })),
                FakeGeocoder::Down => Err(UpstreamError::Status(503)),
                FakeGeocoder::Hanging => std::future::pending().await,
            }
        }
    }

    fn server(geocoder: FakeGeocoder) -> TestServer {
        let service = GeocodingService::new(Arc::new(geocoder), Duration::from_millis(50));
        TestServer::new(routes(Arc::new(service))).unwrap()
    }

    #[tokio::test]
    async fn test_passes_body_through() {
        let response = server(FakeGeocoder::Echo)
            .get("/api/nominatim-proxy")
            .add_query_param("lat", 3.139)
            .add_query_param("lon", 101.6869)
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["display_name"], "Kuala Lumpur, Malaysia");
        assert_eq!(body["zoom"], 10);
        assert!(body.get("success").is_none());
    }

    #[tokio::test]
    async fn test_missing_or_bad_params() {
        let server = server(FakeGeocoder::Echo);

        server
            .get("/api/nominatim-proxy")
            .add_query_param("lat", 3.139)
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        server
            .get("/api/nominatim-proxy")
            .add_query_param("lat", "here")
            .add_query_param("lon", 101.6)
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        server
            .get("/api/nominatim-proxy")
            .add_query_param("lat", 95.0)
            .add_query_param("lon", 101.6)
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upstream_failure_is_bad_gateway() {
        let response = server(FakeGeocoder::Down)
            .get("/api/nominatim-proxy")
            .add_query_param("lat", 3.139)
            .add_query_param("lon", 101.6869)
            .await;

        response.assert_status(StatusCode::BAD_GATEWAY);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_upstream_timeout_is_gateway_timeout() {
        server(FakeGeocoder::Hanging)
            .get("/api/nominatim-proxy")
            .add_query_param("lat", 3.139)
            .add_query_param("lon", 101.6869)
            .await
            .assert_status(StatusCode::GATEWAY_TIMEOUT);
    }
}
