//! Line identifier → display name lookup.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::tfl::TransitApi;

use super::UNKNOWN_LINE;

/// Mapping from upstream line identifiers (`bakerloo`) to display names
/// (`Bakerloo`).
///
/// Immutable once built. A failed load yields an empty directory, which
/// resolves every leg to [`UNKNOWN_LINE`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineDirectory {
    names: HashMap<String, String>,
}

impl LineDirectory {
    /// Create an empty directory.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a directory from `(id, name)` pairs. Later duplicates win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            names: pairs
                .into_iter()
                .map(|(id, name)| (id.into(), name.into()))
                .collect(),
        }
    }

    /// Fetch the directory from upstream.
    ///
    /// Never fails: any error is logged and an empty directory returned.
    pub async fn load(api: &impl TransitApi) -> Self {
        match api.lines().await {
            Ok(lines) if lines.is_empty() => {
                warn!("no lines found in upstream response");
                Self::empty()
            }
            Ok(lines) => {
                let directory =
                    Self::from_pairs(lines.into_iter().map(|line| (line.id, line.name)));
                debug!(lines = directory.len(), "loaded line directory");
                directory
            }
            Err(e) => {
                warn!(error = %e, "failed to fetch lines");
                Self::empty()
            }
        }
    }

    /// Look up a line's display name.
    pub fn get(&self, line_id: &str) -> Option<&str> {
        self.names.get(line_id).map(String::as_str)
    }

    /// Resolve an optional line identifier, falling back to [`UNKNOWN_LINE`].
    pub fn resolve(&self, line_id: Option<&str>) -> &str {
        line_id
            .and_then(|id| self.get(id))
            .unwrap_or(UNKNOWN_LINE)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
