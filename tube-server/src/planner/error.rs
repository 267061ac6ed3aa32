//! Planning error types.

use crate::tfl::TflError;

/// Why a planning request produced no journey.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// Required user input is missing
    #[error("{0}")]
    Validation(&'static str),

    /// Upstream journey search failed
    #[error("failed to fetch journey details: {0}")]
    Fetch(#[from] TflError),

    /// Upstream answered but offered nothing usable
    #[error("no journeys found from {from} to {to}")]
    EmptyResult { from: String, to: String },
}

impl PlanError {
    /// The message shown to the person planning the journey.
    pub fn user_message(&self) -> String {
        match self {
            PlanError::Validation(msg) => (*msg).to_string(),
            PlanError::Fetch(_) => "Failed to fetch journey details.".to_string(),
            PlanError::EmptyResult { .. } => self.to_string(),
        }
    }
}
