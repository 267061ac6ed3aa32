//! Presentation models for a planned journey.
//!
//! Pure functions from domain types to what the page shows: the route
//! diagram's drawing primitives and per-alternative summaries. The web
//! layer owns the actual rendering.

mod alternative;
mod diagram;

pub use alternative::{AlternativeSummary, ChangePoint, leg_instruction};
pub use diagram::{ChangeIndicator, Label, Marker, RouteDiagram, Stroke};
