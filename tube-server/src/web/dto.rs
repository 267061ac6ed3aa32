//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{JourneyDetails, LineColor, LineDirectory, RouteStep, color_of};
use crate::presenter::{AlternativeSummary, ChangePoint, RouteDiagram};

/// Timestamp layout used in JSON responses.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Request to filter station names.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Case-insensitive substring to match; empty matches everything
    #[serde(default)]
    pub q: String,

    /// Max results (defaults to all matches)
    pub limit: Option<usize>,
}

/// Station search response.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    pub stations: Vec<String>,
}

/// Request to plan a journey.
#[derive(Debug, Deserialize)]
pub struct PlanJourneyRequest {
    /// Origin station name
    pub from: Option<String>,

    /// Destination station name
    pub to: Option<String>,
}

/// A planned journey in JSON form.
#[derive(Debug, Serialize)]
pub struct JourneyResult {
    pub from_station: String,
    pub to_station: String,
    pub start_date_time: String,
    pub arrival_time: String,
    pub duration_mins: u32,

    /// Fare in pounds (e.g. "2.50"); absent when upstream gave none
    pub price: Option<String>,

    pub platform: String,
    pub direct_line: String,
    pub is_direct: bool,
    pub line_changes: usize,
    pub route: Vec<RouteStepResult>,

    /// Drawing primitives for the route diagram
    pub diagram: RouteDiagram,

    pub alternative_journeys: Vec<AlternativeResult>,
}

impl JourneyResult {
    /// Convert from planner output, naming alternative legs with `lines`.
    pub fn from_details(details: &JourneyDetails, lines: &LineDirectory) -> Self {
        Self {
            from_station: details.from_station.clone(),
            to_station: details.to_station.clone(),
            start_date_time: details.start_date_time.format(TIMESTAMP_FORMAT).to_string(),
            arrival_time: details.arrival_time.format(TIMESTAMP_FORMAT).to_string(),
            duration_mins: details.duration_mins,
            price: details.price.map(|p| p.to_string()),
            platform: details.platform.clone(),
            direct_line: details.direct_line.clone(),
            is_direct: details.is_direct(),
            line_changes: details.line_change_count(),
            route: details.route().iter().map(RouteStepResult::from_step).collect(),
            diagram: RouteDiagram::layout(details.route()),
            alternative_journeys: details
                .alternative_journeys
                .iter()
                .map(|it| {
                    AlternativeResult::from_summary(&AlternativeSummary::from_itinerary(it, lines))
                })
                .collect(),
        }
    }
}

/// One step of the route.
#[derive(Debug, Serialize)]
pub struct RouteStepResult {
    pub from_station: String,
    pub to_station: String,
    pub line_name: String,
    pub color: LineColor,
}

impl RouteStepResult {
    fn from_step(step: &RouteStep) -> Self {
        Self {
            from_station: step.from_station.clone(),
            to_station: step.to_station.clone(),
            line_name: step.line_name.clone(),
            color: color_of(&step.line_name),
        }
    }
}

/// An alternative itinerary summary.
#[derive(Debug, Serialize)]
pub struct AlternativeResult {
    pub start_date_time: String,
    pub duration_mins: u32,

    /// Pounds with two decimals, or "N/A"
    pub price: String,

    pub instructions: Vec<String>,
    pub changes: Vec<ChangeResult>,
}

impl AlternativeResult {
    fn from_summary(summary: &AlternativeSummary) -> Self {
        Self {
            start_date_time: summary.start.format(TIMESTAMP_FORMAT).to_string(),
            duration_mins: summary.duration_mins,
            price: summary.price_display(),
            instructions: summary.instructions.clone(),
            changes: summary.changes.iter().map(ChangeResult::from_change).collect(),
        }
    }
}

/// A line change within an alternative.
#[derive(Debug, Serialize)]
pub struct ChangeResult {
    pub station: String,
    pub line_name: String,
}

impl ChangeResult {
    fn from_change(change: &ChangePoint) -> Self {
        Self {
            station: change.station.clone(),
            line_name: change.line_name.clone(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
