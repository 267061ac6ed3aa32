//! Web layer for the tube journey planner.
//!
//! Serves the planner page, a station search endpoint for the station
//! pickers, and the journey planning endpoint.

mod dto;
mod routes;
mod state;
pub mod templates;


pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
