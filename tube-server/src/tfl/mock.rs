//! Offline stand-ins for the TfL API.
//!
//! `FixtureTflClient` serves canned JSON from a directory so the server can
//! run without network access. `StaticApi` is an in-memory double for unit
//! tests.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::domain::Itinerary;

use super::api::TransitApi;
use super::convert::{convert_journeys, convert_stop_point_names};
use super::error::TflError;
use super::types::{JourneyResultsDto, LineDto, StopPointsDto};

const LINES_FILE: &str = "lines.json";
const STOP_POINTS_FILE: &str = "stop_points.json";
const DEFAULT_JOURNEY_FILE: &str = "journey.json";
const JOURNEYS_DIR: &str = "journeys";

/// Separator between station names in journey fixture file names.
const PAIR_SEPARATOR: &str = "--";

/// Fixture data, loaded once.
#[derive(Debug, Default)]
struct Fixtures {
    lines: Option<String>,
    stop_points: Option<String>,
    default_journey: Option<String>,
    /// Raw journey responses keyed by (from, to).
    journeys: HashMap<(String, String), String>,
}

/// TfL client that serves responses from JSON files.
///
/// Expected layout:
///
/// ```text
/// lines.json                     GET /Line/Mode/{mode}
/// stop_points.json               GET /StopPoint/Mode/{mode}
/// journeys/{from}--{to}.json     GET /journey/journeyresults/{from}/to/{to}
/// journey.json                   any journey pair without its own file
/// ```
///
/// A missing file answers like upstream would: a 404.
#[derive(Debug, Clone)]
pub struct FixtureTflClient {
    fixtures: Arc<Fixtures>,
}

impl FixtureTflClient {
    /// Load fixtures from a directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, TflError> {
        let data_dir = data_dir.as_ref();
        if !data_dir.is_dir() {
            return Err(TflError::Fixture {
                message: format!("fixture directory {} not found", data_dir.display()),
            });
        }

        let mut fixtures = Fixtures {
            lines: read_optional(&data_dir.join(LINES_FILE))?,
            stop_points: read_optional(&data_dir.join(STOP_POINTS_FILE))?,
            default_journey: read_optional(&data_dir.join(DEFAULT_JOURNEY_FILE))?,
            journeys: HashMap::new(),
        };

        let journeys_dir = data_dir.join(JOURNEYS_DIR);
        if journeys_dir.is_dir() {
            let entries = std::fs::read_dir(&journeys_dir).map_err(|e| TflError::Fixture {
                message: format!("failed to read {}: {e}", journeys_dir.display()),
            })?;

            for entry in entries {
                let path = entry
                    .map_err(|e| TflError::Fixture {
                        message: format!("failed to read directory entry: {e}"),
                    })?
                    .path();
                if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                    continue;
                }

                let Some((from, to)) = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .and_then(|stem| stem.split_once(PAIR_SEPARATOR))
                else {
                    tracing::warn!(path = %path.display(), "ignoring journey fixture without a station pair");
                    continue;
                };
                let key = (from.to_string(), to.to_string());

                if let Some(json) = read_optional(&path)? {
                    fixtures.journeys.insert(key, json);
                }
            }
        }

        Ok(Self {
            fixtures: Arc::new(fixtures),
        })
    }

    /// Number of station pairs with their own journey fixture.
    pub fn journey_pair_count(&self) -> usize {
        self.fixtures.journeys.len()
    }
}

fn read_optional(path: &Path) -> Result<Option<String>, TflError> {
    if !path.exists() {
        return Ok(None);
    }
    std::fs::read_to_string(path)
        .map(Some)
        .map_err(|e| TflError::Fixture {
            message: format!("failed to read {}: {e}", path.display()),
        })
}

fn not_found(what: &str) -> TflError {
    TflError::Api {
        status: 404,
        message: format!("no fixture for {what}"),
    }
}

impl TransitApi for FixtureTflClient {
    async fn lines(&self) -> Result<Vec<LineDto>, TflError> {
        let body = self
            .fixtures
            .lines
            .as_deref()
            .ok_or_else(|| not_found("lines"))?;
        serde_json::from_str(body).map_err(|e| TflError::json(e, body))
    }

    async fn stop_point_names(&self) -> Result<Vec<String>, TflError> {
        let body = self
            .fixtures
            .stop_points
            .as_deref()
            .ok_or_else(|| not_found("stop points"))?;
        let dto: StopPointsDto = serde_json::from_str(body).map_err(|e| TflError::json(e, body))?;
        Ok(convert_stop_point_names(&dto))
    }

    async fn journeys(&self, from: &str, to: &str) -> Result<Vec<Itinerary>, TflError> {
        let body = self
            .fixtures
            .journeys
            .get(&(from.to_string(), to.to_string()))
            .or(self.fixtures.default_journey.as_ref())
            .ok_or_else(|| not_found(&format!("journey {from} to {to}")))?;
        let dto: JourneyResultsDto =
            serde_json::from_str(body).map_err(|e| TflError::json(e, body))?;
        Ok(convert_journeys(&dto)?)
    }
}

/// In-memory `TransitApi` for unit tests.
///
/// Every endpoint answers with a fixed value or error and counts its calls.
#[cfg(test)]
pub struct StaticApi {
    lines: Result<Vec<LineDto>, TflError>,
    station_names: Result<Vec<String>, TflError>,
    journeys: Result<Vec<Itinerary>, TflError>,
    calls: std::sync::Mutex<HashMap<&'static str, usize>>,
}

#[cfg(test)]
impl StaticApi {
    pub fn new() -> Self {
        Self {
            lines: Ok(vec![]),
            station_names: Ok(vec![]),
            journeys: Ok(vec![]),
            calls: std::sync::Mutex::new(HashMap::new()),
        }
    }

    pub fn with_lines(mut self, lines: Vec<LineDto>) -> Self {
        self.lines = Ok(lines);
        self
    }

    pub fn with_lines_error(mut self, err: TflError) -> Self {
        self.lines = Err(err);
        self
    }

    pub fn with_station_names(mut self, names: Vec<String>) -> Self {
        self.station_names = Ok(names);
        self
    }

    pub fn with_stations_error(mut self, err: TflError) -> Self {
        self.station_names = Err(err);
        self
    }

    pub fn with_journeys(mut self, journeys: Vec<Itinerary>) -> Self {
        self.journeys = Ok(journeys);
        self
    }

    pub fn with_journeys_error(mut self, err: TflError) -> Self {
        self.journeys = Err(err);
        self
    }

    /// How many times `endpoint` ("lines", "stop_points", "journeys") was called.
    pub fn call_count(&self, endpoint: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .get(endpoint)
            .copied()
            .unwrap_or(0)
    }

    /// Total calls across every endpoint.
    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }

    fn record(&self, endpoint: &'static str) {
        *self.calls.lock().unwrap().entry(endpoint).or_insert(0) += 1;
    }
}

/// Rebuild an error so a canned one can be returned more than once.
#[cfg(test)]
fn replay(err: &TflError) -> TflError {
    match err {
        TflError::Api { status, message } => TflError::Api {
            status: *status,
            message: message.clone(),
        },
        TflError::Json { message, body } => TflError::Json {
            message: message.clone(),
            body: body.clone(),
        },
        TflError::Conversion(e) => TflError::Conversion(e.clone()),
        TflError::Config(message) => TflError::Config(message.clone()),
        TflError::Fixture { message } => TflError::Fixture {
            message: message.clone(),
        },
        TflError::Http(e) => TflError::Api {
            status: 0,
            message: e.to_string(),
        },
    }
}

#[cfg(test)]
impl TransitApi for StaticApi {
    async fn lines(&self) -> Result<Vec<LineDto>, TflError> {
        self.record("lines");
        self.lines.as_ref().map(Clone::clone).map_err(replay)
    }

    async fn stop_point_names(&self) -> Result<Vec<String>, TflError> {
        self.record("stop_points");
        self.station_names.as_ref().map(Clone::clone).map_err(replay)
    }

    async fn journeys(&self, _from: &str, _to: &str) -> Result<Vec<Itinerary>, TflError> {
        self.record("journeys");
        self.journeys.as_ref().map(Clone::clone).map_err(replay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const JOURNEY: &str = r#"{"journeys": [{
        "startDateTime": "2024-03-15T10:00:00",
        "arrivalDateTime": "2024-03-15T10:20:00",
        "duration": 20,
        "legs": [{
            "departurePoint": {"commonName": "Bank"},
            "arrivalPoint": {"commonName": "Stratford"},
            "lineIdentifier": "central"
        }]
    }]}"#;

    #[test]
    fn missing_directory_is_error() {
        let result = FixtureTflClient::new("/nonexistent/fixtures");
        assert!(matches!(result, Err(TflError::Fixture { .. })));
    }

    #[tokio::test]
    async fn serves_lines_and_stop_points() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(LINES_FILE),
            r#"[{"id": "central", "name": "Central"}]"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join(STOP_POINTS_FILE),
            r#"{"stopPoints": [{"commonName": "Bank"}, {"commonName": "Bank"}]}"#,
        )
        .unwrap();

        let client = FixtureTflClient::new(dir.path()).unwrap();

        let lines = client.lines().await.unwrap();
        assert_eq!(lines[0].name, "Central");

        let names = client.stop_point_names().await.unwrap();
        assert_eq!(names, vec!["Bank", "Bank"]);
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let client = FixtureTflClient::new(dir.path()).unwrap();

        assert!(matches!(
            client.lines().await,
            Err(TflError::Api { status: 404, .. })
        ));
        assert!(matches!(
            client.journeys("Bank", "Stratford").await,
            Err(TflError::Api { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn pair_fixture_preferred_over_default() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join(JOURNEYS_DIR)).unwrap();
        std::fs::write(
            dir.path().join(JOURNEYS_DIR).join("Bank--Stratford.json"),
            JOURNEY,
        )
        .unwrap();
        std::fs::write(dir.path().join(DEFAULT_JOURNEY_FILE), r#"{"journeys": []}"#).unwrap();

        let client = FixtureTflClient::new(dir.path()).unwrap();
        assert_eq!(client.journey_pair_count(), 1);

        let paired = client.journeys("Bank", "Stratford").await.unwrap();
        assert_eq!(paired.len(), 1);
        assert_eq!(paired[0].legs[0].line_id.as_deref(), Some("central"));

        let fallback = client.journeys("Bank", "Epping").await.unwrap();
        assert!(fallback.is_empty());
    }

    #[tokio::test]
    async fn malformed_fixture_is_json_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(STOP_POINTS_FILE), "not json").unwrap();

        let client = FixtureTflClient::new(dir.path()).unwrap();
        assert!(matches!(
            client.stop_point_names().await,
            Err(TflError::Json { .. })
        ));
    }

    #[tokio::test]
    async fn bundled_fixtures_load() {
        let client = FixtureTflClient::new("data/fixtures").unwrap();

        assert!(!client.lines().await.unwrap().is_empty());
        assert!(!client.stop_point_names().await.unwrap().is_empty());
        assert!(!client.journeys("Paddington", "Bank").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn static_api_counts_calls() {
        let api = StaticApi::new().with_journeys_error(TflError::Api {
            status: 500,
            message: "boom".into(),
        });

        assert!(api.journeys("A", "B").await.is_err());
        assert!(api.journeys("A", "B").await.is_err());
        assert!(api.lines().await.unwrap().is_empty());

        assert_eq!(api.call_count("journeys"), 2);
        assert_eq!(api.call_count("lines"), 1);
        assert_eq!(api.total_calls(), 3);
    }
}
