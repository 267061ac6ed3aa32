//! Conversion from TfL DTOs to domain types.
//!
//! This is the one place upstream's optional fields are checked. Everything
//! downstream works on validated `Itinerary` values.

use chrono::NaiveDateTime;
use tracing::warn;

use crate::domain::{Itinerary, Leg, Mode, PlacePoint, Price};

use super::types::{JourneyDto, JourneyResultsDto, LegDto, PointDto, StopPointsDto};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Missing required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Failed to parse a timestamp
    #[error("invalid time: {0}")]
    InvalidTime(String),
}

/// Convert a journey-search response into itineraries, preserving order.
///
/// The first itinerary is the one the planner presents, so it must convert
/// cleanly. Later itineraries that fail validation are logged and skipped.
pub fn convert_journeys(dto: &JourneyResultsDto) -> Result<Vec<Itinerary>, ConversionError> {
    let journeys = dto.journeys.as_deref().unwrap_or(&[]);
    let mut results = Vec::with_capacity(journeys.len());

    for (index, journey) in journeys.iter().enumerate() {
        match convert_journey(journey) {
            Ok(itinerary) => results.push(itinerary),
            Err(e) if index == 0 => return Err(e),
            Err(e) => warn!(index, error = %e, "skipping alternative journey"),
        }
    }

    Ok(results)
}

/// Convert a single itinerary.
pub fn convert_journey(dto: &JourneyDto) -> Result<Itinerary, ConversionError> {
    let start = parse_time(
        dto.start_date_time
            .as_deref()
            .ok_or(ConversionError::MissingField("startDateTime"))?,
    )?;
    let arrival = parse_time(
        dto.arrival_date_time
            .as_deref()
            .ok_or(ConversionError::MissingField("arrivalDateTime"))?,
    )?;
    let duration_mins = dto
        .duration
        .ok_or(ConversionError::MissingField("duration"))?;

    let fare = dto
        .fare
        .as_ref()
        .and_then(|f| f.total_cost)
        .map(Price::from_minor_units);

    let legs = dto
        .legs
        .iter()
        .flatten()
        .map(convert_leg)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Itinerary {
        start,
        arrival,
        duration_mins,
        fare,
        legs,
        line_id: dto.line_identifier.as_ref().map(|l| l.id().to_string()),
    })
}

fn convert_leg(dto: &LegDto) -> Result<Leg, ConversionError> {
    let departure = convert_point(
        dto.departure_point
            .as_ref()
            .ok_or(ConversionError::MissingField("departurePoint"))?,
        "departurePoint.commonName",
    )?;
    let arrival = convert_point(
        dto.arrival_point
            .as_ref()
            .ok_or(ConversionError::MissingField("arrivalPoint"))?,
        "arrivalPoint.commonName",
    )?;

    let mode = dto.mode.as_ref().and_then(|m| {
        let id = m.id.clone()?;
        let name = m.name.clone().unwrap_or_else(|| id.clone());
        Some(Mode::new(id, name))
    });

    Ok(Leg {
        departure,
        arrival,
        line_id: dto.line_id().map(str::to_string),
        mode,
        instruction: dto.instruction.as_ref().and_then(|i| i.summary.clone()),
    })
}

fn convert_point(dto: &PointDto, field: &'static str) -> Result<PlacePoint, ConversionError> {
    let common_name = dto
        .common_name
        .clone()
        .ok_or(ConversionError::MissingField(field))?;

    // TfL sends "" rather than omitting the platform
    let platform = dto.platform.clone().filter(|p| !p.trim().is_empty());

    Ok(PlacePoint {
        common_name,
        platform,
    })
}

fn parse_time(s: &str) -> Result<NaiveDateTime, ConversionError> {
    s.parse::<NaiveDateTime>()
        .map_err(|_| ConversionError::InvalidTime(s.to_string()))
}

/// Station common names from a stop point response, in response order.
///
/// Stop points without a name are dropped. Duplicates are kept; the
/// station directory removes them.
pub fn convert_stop_point_names(dto: &StopPointsDto) -> Vec<String> {
    dto.stop_points
        .iter()
        .flatten()
        .filter_map(|s| s.common_name.clone())
        .collect()
}
