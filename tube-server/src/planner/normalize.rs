//! Itineraries → `JourneyDetails`.

use crate::domain::{
    Itinerary, JourneyDetails, LineDirectory, RouteStep, UNKNOWN_PLATFORM,
};

use super::PlanError;

/// Normalize upstream itineraries for one station pair.
///
/// The first itinerary becomes the presented journey; the rest are kept, in
/// order, as alternatives. Fails with `EmptyResult` if there are no
/// itineraries or the first one has no legs.
pub fn normalize(
    from: &str,
    to: &str,
    itineraries: Vec<Itinerary>,
    lines: &LineDirectory,
) -> Result<JourneyDetails, PlanError> {
    let empty = || PlanError::EmptyResult {
        from: from.to_string(),
        to: to.to_string(),
    };

    let mut itineraries = itineraries.into_iter();
    let primary = itineraries.next().ok_or_else(empty)?;
    if primary.legs.is_empty() {
        return Err(empty());
    }

    // One leg is one step, however the leg is made up internally
    let route = primary
        .legs
        .iter()
        .map(|leg| RouteStep {
            from_station: leg.departure.common_name.clone(),
            to_station: leg.arrival.common_name.clone(),
            line_name: lines.resolve(leg.line_id.as_deref()).to_string(),
        })
        .collect();

    let platform = primary
        .first_platform()
        .unwrap_or(UNKNOWN_PLATFORM)
        .to_string();

    Ok(JourneyDetails {
        from_station: from.to_string(),
        to_station: to.to_string(),
        start_date_time: primary.start,
        arrival_time: primary.arrival,
        duration_mins: primary.duration_mins,
        price: primary.fare,
        platform,
        direct_line: primary.line_id.clone().unwrap_or_default(),
        route,
        alternative_journeys: itineraries.collect(),
    })
}
