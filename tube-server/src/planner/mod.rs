//! Journey planning: fetch itineraries for a station pair and normalize
//! the first one into a display model.
//!
//! Each request is independent. The only state shared between requests is
//! the cached line directory.

mod error;
mod normalize;
mod plan;

pub use error::PlanError;
pub use normalize::normalize;
pub use plan::JourneyPlanner;
