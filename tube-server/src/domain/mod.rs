//! Domain types for the tube journey planner.
//!
//! Upstream responses are validated once in `tfl::convert`; everything in
//! this module can trust its inputs.

mod color;
mod journey;
mod line;
mod price;
mod station;

pub use color::{DEFAULT_LINE_COLOR, LineColor, color_of, known_lines};
pub use journey::{
    Itinerary, JourneyDetails, Leg, Mode, PlacePoint, RouteStep, UNKNOWN_LINE, UNKNOWN_PLATFORM,
};
pub use line::LineDirectory;
pub use price::Price;
pub use station::StationDirectory;
