//! The seam between the planner and its data source.

use std::future::Future;

use crate::domain::Itinerary;

use super::client::TflClient;
use super::error::TflError;
use super::mock::FixtureTflClient;
use super::types::LineDto;

/// Read-only access to transit data.
///
/// Implemented by the live client, the fixture client, and test doubles.
pub trait TransitApi {
    /// All lines for the configured mode.
    fn lines(&self) -> impl Future<Output = Result<Vec<LineDto>, TflError>> + Send;

    /// Common names of every stop point for the configured mode, duplicates included.
    fn stop_point_names(&self) -> impl Future<Output = Result<Vec<String>, TflError>> + Send;

    /// Itineraries between two stations, in upstream order.
    fn journeys(
        &self,
        from: &str,
        to: &str,
    ) -> impl Future<Output = Result<Vec<Itinerary>, TflError>> + Send;
}

/// The data source the server runs against.
#[derive(Debug, Clone)]
pub enum TransitBackend {
    /// The live TfL API.
    Live(TflClient),
    /// Canned responses from disk.
    Fixture(FixtureTflClient),
}

impl TransitApi for TransitBackend {
    async fn lines(&self) -> Result<Vec<LineDto>, TflError> {
        match self {
            TransitBackend::Live(client) => client.lines().await,
            TransitBackend::Fixture(client) => client.lines().await,
        }
    }

    async fn stop_point_names(&self) -> Result<Vec<String>, TflError> {
        match self {
            TransitBackend::Live(client) => client.stop_point_names().await,
            TransitBackend::Fixture(client) => client.stop_point_names().await,
        }
    }

    async fn journeys(&self, from: &str, to: &str) -> Result<Vec<Itinerary>, TflError> {
        match self {
            TransitBackend::Live(client) => client.journeys(from, to).await,
            TransitBackend::Fixture(client) => client.journeys(from, to).await,
        }
    }
}
