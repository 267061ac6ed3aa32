//! TfL unified API HTTP client.

use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::Itinerary;

use super::api::TransitApi;
use super::convert::{convert_journeys, convert_stop_point_names};
use super::error::TflError;
use super::types::{JourneyResultsDto, LineDto, StopPointsDto};

/// Default base URL for the TfL unified API.
const DEFAULT_BASE_URL: &str = "https://api.tfl.gov.uk";

/// Default transport mode for line and stop point queries.
const DEFAULT_MODE: &str = "tube";

/// Configuration for the TfL client.
#[derive(Debug, Clone)]
pub struct TflConfig {
    /// Base URL for the API (defaults to production TfL)
    pub base_url: String,
    /// Transport mode used for line and stop point lookups
    pub mode: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TflConfig {
    /// Create a config pointing at the production API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            mode: DEFAULT_MODE.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the transport mode, e.g. `tube` or `dlr`.
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for TflConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// TfL API client.
///
/// Plain unauthenticated GETs. Station names go into the journey URL as
/// percent-encoded path segments.
#[derive(Debug, Clone)]
pub struct TflClient {
    http: reqwest::Client,
    base_url: Url,
    mode: String,
}

impl TflClient {
    /// Create a new TfL client with the given configuration.
    pub fn new(config: TflConfig) -> Result<Self, TflError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| TflError::Config(format!("base URL {}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(TflError::Config(format!(
                "base URL {} cannot have path segments",
                config.base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url,
            mode: config.mode,
        })
    }

    /// The transport mode this client queries.
    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// Build an endpoint URL from path segments below the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, TflError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| TflError::Config("base URL cannot have path segments".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, TflError> {
        debug!(%url, "GET");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TflError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| TflError::json(e, &body))
    }
}

impl TransitApi for TflClient {
    async fn lines(&self) -> Result<Vec<LineDto>, TflError> {
        let url = self.endpoint(&["Line", "Mode", self.mode.as_str()])?;
        self.get_json(url).await
    }

    async fn stop_point_names(&self) -> Result<Vec<String>, TflError> {
        let url = self.endpoint(&["StopPoint", "Mode", self.mode.as_str()])?;
        let dto: StopPointsDto = self.get_json(url).await?;
        Ok(convert_stop_point_names(&dto))
    }

    async fn journeys(&self, from: &str, to: &str) -> Result<Vec<Itinerary>, TflError> {
        let url = self.endpoint(&["journey", "journeyresults", from, "to", to])?;
        let dto: JourneyResultsDto = self.get_json(url).await?;
        Ok(convert_journeys(&dto)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, extract::Path, http::StatusCode, routing::get};
    use serde_json::json;

    #[test]
    fn config_builder() {
        let config = TflConfig::new()
            .with_base_url("http://localhost:8080")
            .with_mode("dlr")
            .with_timeout(60);

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.mode, "dlr");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn config_defaults() {
        let config = TflConfig::default();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.mode, DEFAULT_MODE);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn rejects_unusable_base_url() {
        assert!(matches!(
            TflClient::new(TflConfig::new().with_base_url("not a url")),
            Err(TflError::Config(_))
        ));
        assert!(matches!(
            TflClient::new(TflConfig::new().with_base_url("mailto:someone@example.com")),
            Err(TflError::Config(_))
        ));
    }

    #[test]
    fn journey_url_encodes_station_names() {
        let client = TflClient::new(TflConfig::new()).unwrap();
        let url = client
            .endpoint(&["journey", "journeyresults", "Baker Street", "to", "Elephant & Castle"])
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://api.tfl.gov.uk/journey/journeyresults/Baker%20Street/to/Elephant%20&%20Castle"
        );
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let client =
            TflClient::new(TflConfig::new().with_base_url("http://localhost:9000/tfl/")).unwrap();
        let url = client.endpoint(&["Line", "Mode", "tube"]).unwrap();

        assert_eq!(url.as_str(), "http://localhost:9000/tfl/Line/Mode/tube");
    }

    /// Serve a fake TfL API on an ephemeral port and return its base URL.
    async fn serve_fake_tfl() -> String {
        let app = Router::new()
            .route(
                "/Line/Mode/:mode",
                get(|Path(mode): Path<String>| async move {
                    Json(json!([
                        {"id": "bakerloo", "name": "Bakerloo", "modeName": mode},
                        {"id": "central", "name": "Central", "modeName": mode}
                    ]))
                }),
            )
            .route(
                "/StopPoint/Mode/:mode",
                get(|| async {
                    Json(json!({"stopPoints": [
                        {"commonName": "Baker Street Underground Station"},
                        {"commonName": "Baker Street Underground Station"},
                        {"commonName": "Bank Underground Station"}
                    ]}))
                }),
            )
            .route(
                "/journey/journeyresults/:from/to/:to",
                get(|Path((from, to)): Path<(String, String)>| async move {
                    if to == "Nowhere" {
                        return Err(StatusCode::NOT_FOUND);
                    }
                    Ok(Json(json!({"journeys": [{
                        "startDateTime": "2024-03-15T10:00:00",
                        "arrivalDateTime": "2024-03-15T10:12:00",
                        "duration": 12,
                        "fare": {"totalCost": 280},
                        "legs": [{
                            "departurePoint": {"commonName": from, "platformName": "1"},
                            "arrivalPoint": {"commonName": to},
                            "lineIdentifier": "bakerloo",
                            "mode": {"id": "tube", "name": "tube"}
                        }]
                    }]})))
                }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client_for(base_url: &str) -> TflClient {
        TflClient::new(TflConfig::new().with_base_url(base_url).with_timeout(5)).unwrap()
    }

    #[tokio::test]
    async fn fetches_lines() {
        let client = client_for(&serve_fake_tfl().await);
        let lines = client.lines().await.unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].id, "bakerloo");
        assert_eq!(lines[1].name, "Central");
    }

    #[tokio::test]
    async fn fetches_stop_point_names() {
        let client = client_for(&serve_fake_tfl().await);
        let names = client.stop_point_names().await.unwrap();

        assert_eq!(names.len(), 3);
        assert_eq!(names[2], "Bank Underground Station");
    }

    #[tokio::test]
    async fn fetches_journeys_with_decoded_names() {
        let client = client_for(&serve_fake_tfl().await);
        let itineraries = client
            .journeys("Baker Street", "Regent's Park")
            .await
            .unwrap();

        assert_eq!(itineraries.len(), 1);
        let leg = &itineraries[0].legs[0];
        assert_eq!(leg.departure.common_name, "Baker Street");
        assert_eq!(leg.arrival.common_name, "Regent's Park");
        assert_eq!(leg.departure.platform.as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn error_status_is_api_error() {
        let client = client_for(&serve_fake_tfl().await);
        let result = client.journeys("Bank", "Nowhere").await;

        assert!(matches!(result, Err(TflError::Api { status: 404, .. })));
    }

    #[tokio::test]
    async fn unreachable_host_is_http_error() {
        // Bind then drop to get a port nothing listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(&format!("http://{addr}"));
        assert!(matches!(client.lines().await, Err(TflError::Http(_))));
    }
}
