//! Station name directory.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::tfl::{TflError, TransitApi};

/// The set of station names offered for selection.
///
/// Names double as station identifiers for journey search. Each name
/// appears once, in the order upstream first listed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationDirectory {
    names: Vec<String>,
}

impl StationDirectory {
    /// Create an empty directory.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a directory from raw names, dropping repeats.
    ///
    /// Upstream lists one stop point per entrance or platform, so the same
    /// common name can occur many times.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let names = names
            .into_iter()
            .map(Into::into)
            .filter(|name: &String| seen.insert(name.clone()))
            .collect();
        Self { names }
    }

    /// Fetch all station names from upstream.
    ///
    /// Transport failures and error statuses are returned. A payload that
    /// can't be parsed, or lists no stations, is logged and yields an empty
    /// directory.
    pub async fn load(api: &impl TransitApi) -> Result<Self, TflError> {
        match api.stop_point_names().await {
            Ok(names) if names.is_empty() => {
                warn!("no station names found in upstream response");
                Ok(Self::empty())
            }
            Ok(names) => {
                let directory = Self::from_names(names);
                debug!(stations = directory.len(), "loaded station directory");
                Ok(directory)
            }
            Err(TflError::Json { message, .. }) => {
                warn!(%message, "malformed stop point response");
                Ok(Self::empty())
            }
            Err(e) => Err(e),
        }
    }

    /// Names containing `query`, compared case-insensitively.
    ///
    /// An empty query matches every station.
    pub fn filter(&self, query: &str) -> Vec<&str> {
        let query = query.to_lowercase();
        self.names
            .iter()
            .filter(|name| name.to_lowercase().contains(&query))
            .map(String::as_str)
            .collect()
    }

    /// All names, in directory order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
