//! Summaries of alternative itineraries.

use chrono::NaiveDateTime;

use crate::domain::{Itinerary, Leg, LineDirectory, Price};

/// A place where an alternative itinerary changes line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangePoint {
    /// Station where the traveller changes.
    pub station: String,
    /// Line (resolved name) they change onto.
    pub line_name: String,
}

/// What the page shows for one alternative itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternativeSummary {
    pub start: NaiveDateTime,
    pub duration_mins: u32,
    pub price: Option<Price>,
    /// One line per leg whose mode has a phrasing.
    pub instructions: Vec<String>,
    pub changes: Vec<ChangePoint>,
}

impl AlternativeSummary {
    pub fn from_itinerary(itinerary: &Itinerary, lines: &LineDirectory) -> Self {
        let instructions = itinerary.legs.iter().filter_map(leg_instruction).collect();

        // Only legs on a line take part; walks between them don't count
        let line_legs: Vec<&Leg> = itinerary
            .legs
            .iter()
            .filter(|leg| leg.line_id.is_some())
            .collect();
        let changes = line_legs
            .windows(2)
            .filter(|pair| pair[0].line_id != pair[1].line_id)
            .map(|pair| ChangePoint {
                station: pair[1].departure.common_name.clone(),
                line_name: lines.resolve(pair[1].line_id.as_deref()).to_string(),
            })
            .collect();

        Self {
            start: itinerary.start,
            duration_mins: itinerary.duration_mins,
            price: itinerary.fare,
            instructions,
            changes,
        }
    }

    /// Price for display: pounds with two decimals, or `N/A`.
    pub fn price_display(&self) -> String {
        self.price
            .map(|p| p.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }
}

/// A one-line travel instruction for a leg, phrased by mode.
///
/// Modes other than tube, bus, walking and national rail have no phrasing.
pub fn leg_instruction(leg: &Leg) -> Option<String> {
    let mode = leg.mode.as_ref()?;
    let arrival = &leg.arrival.common_name;
    let summary = leg.instruction.as_deref().unwrap_or_default();

    match mode.id.as_str() {
        "tube" | "national-rail" => Some(format!("Take {} to {}", mode.name, arrival)),
        "bus" => Some(format!("Take {} {}", mode.name, summary)),
        "walking" => Some(format!("Walk to {arrival}, {summary}")),
        _ => None,
    }
}
