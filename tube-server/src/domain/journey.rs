//! Itineraries and the normalized journey display model.

use chrono::NaiveDateTime;

use super::Price;

/// Line name shown when a leg's line cannot be resolved.
pub const UNKNOWN_LINE: &str = "Unknown Line";

/// Platform shown when no leg exposes one.
pub const UNKNOWN_PLATFORM: &str = "Unknown";

/// A stop or station at either end of a leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacePoint {
    pub common_name: String,
    pub platform: Option<String>,
}

impl PlacePoint {
    pub fn new(common_name: impl Into<String>) -> Self {
        Self {
            common_name: common_name.into(),
            platform: None,
        }
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }
}

/// Transport mode of a leg, e.g. `tube` / "Tube".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mode {
    pub id: String,
    pub name: String,
}

impl Mode {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// One uninterrupted segment of an itinerary on a single mode or line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    pub departure: PlacePoint,
    pub arrival: PlacePoint,
    /// Upstream line identifier (e.g. `bakerloo`), if the leg is on a line.
    pub line_id: Option<String>,
    pub mode: Option<Mode>,
    /// Free-text instruction summary, e.g. "Walk to Oxford Circus".
    pub instruction: Option<String>,
}

impl Leg {
    pub fn new(departure: PlacePoint, arrival: PlacePoint) -> Self {
        Self {
            departure,
            arrival,
            line_id: None,
            mode: None,
            instruction: None,
        }
    }

    pub fn on_line(mut self, line_id: impl Into<String>) -> Self {
        self.line_id = Some(line_id.into());
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_instruction(mut self, summary: impl Into<String>) -> Self {
        self.instruction = Some(summary.into());
        self
    }
}

/// One complete proposed journey from the journey-search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    pub start: NaiveDateTime,
    pub arrival: NaiveDateTime,
    pub duration_mins: u32,
    pub fare: Option<Price>,
    pub legs: Vec<Leg>,
    /// Top-level line identifier, present only for single-line itineraries.
    pub line_id: Option<String>,
}

impl Itinerary {
    /// The first platform exposed by any leg's departure point, in leg order.
    pub fn first_platform(&self) -> Option<&str> {
        self.legs
            .iter()
            .find_map(|leg| leg.departure.platform.as_deref())
    }
}

/// One step of the displayed route: a leg with its line name resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteStep {
    pub from_station: String,
    pub to_station: String,
    /// Resolved display name, or [`UNKNOWN_LINE`].
    pub line_name: String,
}

/// The normalized result of one planning request.
///
/// Built fresh for every request by `planner::normalize`; the route is
/// never empty.
#[derive(Debug, Clone)]
pub struct JourneyDetails {
    pub from_station: String,
    pub to_station: String,
    pub start_date_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    pub duration_mins: u32,
    /// `None` when upstream reported no fare.
    pub price: Option<Price>,
    /// First platform found on the route, or [`UNKNOWN_PLATFORM`].
    pub platform: String,
    /// Upstream's top-level line identifier; empty when the journey changes line.
    pub direct_line: String,
    pub(crate) route: Vec<RouteStep>,
    /// Remaining itineraries in upstream order, primary excluded.
    pub alternative_journeys: Vec<Itinerary>,
}

impl JourneyDetails {
    /// The route steps, in travel order. Never empty.
    pub fn route(&self) -> &[RouteStep] {
        &self.route
    }

    /// Whether the journey needs no line change.
    ///
    /// Upstream signals this two ways (a top-level line identifier, or a
    /// single-leg route). Either one counts.
    pub fn is_direct(&self) -> bool {
        !self.direct_line.is_empty() || self.route.len() == 1
    }

    /// Number of places where consecutive steps are on different lines.
    pub fn line_change_count(&self) -> usize {
        self.route
            .windows(2)
            .filter(|pair| pair[0].line_name != pair[1].line_name)
            .count()
    }
}
