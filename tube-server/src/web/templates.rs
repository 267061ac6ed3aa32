//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{JourneyDetails, LineDirectory};
use crate::presenter::{AlternativeSummary, RouteDiagram};

/// Timestamp layout shown on the page.
const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M";

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Planner page with the station pickers.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Initial picker options (the full directory, unfiltered)
    pub stations: Vec<String>,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Planned journey fragment.
#[derive(Template)]
#[template(path = "journey_details.html")]
pub struct JourneyDetailsTemplate {
    pub journey: JourneyView,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Journey view model for templates.
#[derive(Debug, Clone)]
pub struct JourneyView {
    pub from_station: String,
    pub to_station: String,
    pub start: String,
    pub arrival: String,
    pub duration_mins: u32,
    pub price: String,
    pub platform: String,
    /// Set when upstream named a single line for the whole journey
    pub direct_line: Option<String>,
    pub is_direct: bool,
    pub line_changes: usize,
    pub diagram: RouteDiagram,
    /// One "{from} to {to}" row per route step
    pub station_changes: Vec<String>,
    pub alternatives: Vec<AlternativeView>,
}

impl JourneyView {
    /// Create from planner output.
    ///
    /// Alternatives are left out when the journey has a direct line.
    pub fn from_details(details: &JourneyDetails, lines: &LineDirectory) -> Self {
        let direct_line = Some(details.direct_line.clone()).filter(|l| !l.is_empty());

        let alternatives = if direct_line.is_some() {
            Vec::new()
        } else {
            details
                .alternative_journeys
                .iter()
                .map(|it| {
                    AlternativeView::from_summary(&AlternativeSummary::from_itinerary(it, lines))
                })
                .collect()
        };

        Self {
            from_station: details.from_station.clone(),
            to_station: details.to_station.clone(),
            start: details.start_date_time.format(DISPLAY_FORMAT).to_string(),
            arrival: details.arrival_time.format(DISPLAY_FORMAT).to_string(),
            duration_mins: details.duration_mins,
            price: details
                .price
                .map(|p| p.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            platform: details.platform.clone(),
            direct_line,
            is_direct: details.is_direct(),
            line_changes: details.line_change_count(),
            diagram: RouteDiagram::layout(details.route()),
            station_changes: details
                .route()
                .iter()
                .map(|step| format!("{} to {}", step.from_station, step.to_station))
                .collect(),
            alternatives,
        }
    }

    /// Whether there is anything to list under "Alternative Journeys".
    pub fn has_alternatives(&self) -> bool {
        !self.alternatives.is_empty()
    }
}

/// Alternative itinerary view model.
#[derive(Debug, Clone)]
pub struct AlternativeView {
    pub start: String,
    pub duration_mins: u32,
    pub price: String,
    pub instructions: Vec<String>,
    /// "Change at {station} to {line}" rows
    pub changes: Vec<String>,
}

impl AlternativeView {
    pub fn from_summary(summary: &AlternativeSummary) -> Self {
        Self {
            start: summary.start.format(DISPLAY_FORMAT).to_string(),
            duration_mins: summary.duration_mins,
            price: summary.price_display(),
            instructions: summary.instructions.clone(),
            changes: summary
                .changes
                .iter()
                .map(|c| format!("Change at {} to {}", c.station, c.line_name))
                .collect(),
        }
    }
}
