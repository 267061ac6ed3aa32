//! TfL API response DTOs.
//!
//! These map directly onto the JSON the unified API returns. Nearly every
//! field is optional because TfL omits fields freely; `convert` decides
//! which ones are required.

use serde::{Deserialize, Serialize};

/// An entry from `GET /Line/Mode/{mode}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LineDto {
    /// Line identifier, e.g. `hammersmith-city`.
    pub id: String,
    /// Display name, e.g. `Hammersmith & City`.
    pub name: String,
}

/// Response from `GET /StopPoint/Mode/{mode}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopPointsDto {
    pub stop_points: Option<Vec<StopPointDto>>,
}

/// A stop point. The same station appears once per entrance or platform.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopPointDto {
    pub naptan_id: Option<String>,
    pub common_name: Option<String>,
}

/// Response from `GET /journey/journeyresults/{from}/to/{to}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyResultsDto {
    pub journeys: Option<Vec<JourneyDto>>,
}

/// One itinerary.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyDto {
    /// Local time, `YYYY-MM-DDTHH:MM:SS`.
    pub start_date_time: Option<String>,
    pub arrival_date_time: Option<String>,
    /// Minutes.
    pub duration: Option<u32>,
    pub fare: Option<FareDto>,
    pub legs: Option<Vec<LegDto>>,
    /// Only present when the whole itinerary runs on one line.
    pub line_identifier: Option<LineRef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareDto {
    /// Pence.
    pub total_cost: Option<u32>,
}

/// One leg of an itinerary.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegDto {
    pub departure_point: Option<PointDto>,
    pub arrival_point: Option<PointDto>,
    pub line_identifier: Option<LineRef>,
    pub mode: Option<ModeDto>,
    pub instruction: Option<InstructionDto>,
    /// Live responses carry the line here rather than on the leg.
    pub route_options: Option<Vec<RouteOptionDto>>,
}

impl LegDto {
    /// The leg's line identifier, from the leg itself or its first route option.
    pub fn line_id(&self) -> Option<&str> {
        self.line_identifier
            .as_ref()
            .or_else(|| {
                self.route_options
                    .iter()
                    .flatten()
                    .find_map(|option| option.line_identifier.as_ref())
            })
            .map(LineRef::id)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointDto {
    pub common_name: Option<String>,
    #[serde(alias = "platformName")]
    pub platform: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModeDto {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstructionDto {
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteOptionDto {
    pub line_identifier: Option<LineRef>,
}

/// A line reference: either a bare identifier or an identifier object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LineRef {
    Id(String),
    Detailed { id: String, name: Option<String> },
}

impl LineRef {
    pub fn id(&self) -> &str {
        match self {
            LineRef::Id(id) => id,
            LineRef::Detailed { id, .. } => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_ref_accepts_both_shapes() {
        let bare: LineRef = serde_json::from_str(r#""bakerloo""#).unwrap();
        assert_eq!(bare.id(), "bakerloo");

        let detailed: LineRef =
            serde_json::from_str(r#"{"id": "central", "name": "Central", "uri": "/Line/central"}"#)
                .unwrap();
        assert_eq!(detailed.id(), "central");
    }

    #[test]
    fn leg_line_from_route_options() {
        let leg: LegDto = serde_json::from_str(
            r#"{
                "departurePoint": {"commonName": "Bank"},
                "arrivalPoint": {"commonName": "Stratford"},
                "routeOptions": [{"name": "Central", "lineIdentifier": {"id": "central", "name": "Central"}}]
            }"#,
        )
        .unwrap();

        assert_eq!(leg.line_id(), Some("central"));
    }

    #[test]
    fn leg_line_prefers_own_identifier() {
        let leg: LegDto = serde_json::from_str(
            r#"{
                "lineIdentifier": "bakerloo",
                "routeOptions": [{"lineIdentifier": {"id": "central"}}]
            }"#,
        )
        .unwrap();

        assert_eq!(leg.line_id(), Some("bakerloo"));
    }

    #[test]
    fn platform_name_alias() {
        let point: PointDto =
            serde_json::from_str(r#"{"commonName": "Oxford Circus", "platformName": "4"}"#)
                .unwrap();
        assert_eq!(point.platform.as_deref(), Some("4"));
    }

    #[test]
    fn missing_fields_are_none() {
        let journey: JourneyDto = serde_json::from_str("{}").unwrap();
        assert!(journey.start_date_time.is_none());
        assert!(journey.legs.is_none());
        assert!(journey.fare.is_none());
    }
}
