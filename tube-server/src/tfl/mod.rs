//! TfL unified API client.
//!
//! Read-only access to the three endpoints the planner needs:
//!
//! - `GET /Line/Mode/{mode}`: line identifiers and display names
//! - `GET /StopPoint/Mode/{mode}`: stop points, one per entrance or platform
//! - `GET /journey/journeyresults/{from}/to/{to}`: candidate itineraries
//!
//! Response bodies are deserialized into the loose DTOs in `types` and
//! validated into domain types once, in `convert`.

mod api;
mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use api::{TransitApi, TransitBackend};
pub use client::{TflClient, TflConfig};
pub use convert::{ConversionError, convert_journeys, convert_stop_point_names};
pub use error::TflError;
pub use mock::FixtureTflClient;
#[cfg(test)]
pub use mock::StaticApi;
pub use types::{
    FareDto, InstructionDto, JourneyDto, JourneyResultsDto, LegDto, LineDto, LineRef, ModeDto,
    PointDto, StopPointDto, StopPointsDto,
};
