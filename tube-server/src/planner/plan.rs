//! The journey planner.

use std::sync::Arc;

use tracing::{debug, info};

use crate::cache::CachedLineDirectory;
use crate::domain::{JourneyDetails, LineDirectory};
use crate::tfl::TransitApi;

use super::{PlanError, normalize};

/// Message for a request missing either station.
const MISSING_STATIONS: &str = "Please select both from and to stations.";

/// Plans journeys against a transit data source.
pub struct JourneyPlanner<'a, A> {
    api: &'a A,
    lines: &'a CachedLineDirectory,
}

impl<'a, A: TransitApi> JourneyPlanner<'a, A> {
    pub fn new(api: &'a A, lines: &'a CachedLineDirectory) -> Self {
        Self { api, lines }
    }

    /// Plan a journey between two stations.
    ///
    /// Blank input fails with `Validation` before anything is fetched. The
    /// journey search runs first, then the line directory is looked up
    /// (from cache when warm) to name each leg.
    pub async fn plan_journey(
        &self,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<JourneyDetails, PlanError> {
        self.plan_with_lines(from, to)
            .await
            .map(|(details, _)| details)
    }

    /// Like [`plan_journey`](Self::plan_journey), also returning the line
    /// directory the route was named with.
    ///
    /// Callers presenting the alternatives should name them with the same
    /// directory, so one response never mixes two directory loads.
    pub async fn plan_with_lines(
        &self,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<(JourneyDetails, Arc<LineDirectory>), PlanError> {
        let (from, to) = match (non_blank(from), non_blank(to)) {
            (Some(from), Some(to)) => (from, to),
            _ => return Err(PlanError::Validation(MISSING_STATIONS)),
        };

        debug!(from, to, "searching journeys");
        let itineraries = self.api.journeys(from, to).await?;
        let lines = self.lines.get(self.api).await;

        let details = normalize(from, to, itineraries, &lines)?;
        info!(
            from,
            to,
            steps = details.route().len(),
            alternatives = details.alternative_journeys.len(),
            "planned journey"
        );
        Ok((details, lines))
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}
