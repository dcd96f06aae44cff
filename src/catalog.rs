//! The track catalog side of search.
//!
//! The catalog compiles the user's query, ANDs it with its own access
//! restrictions and runs the result over its tracks. A malformed query is
//! rejected as a whole; it is never retried or partially applied.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{ast::Predicate, error::SyntaxError, evaluator::TrackMatcher, parser::build};

/// A track as the catalog stores it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Track {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub albums: Vec<String>,
    #[serde(default)]
    pub artists: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub year: Option<u32>,
    /// Length in seconds
    #[serde(default)]
    pub duration: Option<u32>,
    /// Bitrate in kbps
    #[serde(default)]
    pub bitrate: Option<u32>,
    #[serde(default)]
    pub explicit: Option<bool>,
}

/// Restrictions applied to every search regardless of the query.
///
/// Blocked tags become part of the search predicate and so reach every
/// backend. Blocked artists have no predicate form (the tree has no negated
/// artist match) and are enforced by [`Catalog::search`] in memory only;
/// a SQL caller has to filter them itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPolicy {
    #[serde(default)]
    pub blocked_tags: Vec<String>,
    #[serde(default)]
    pub blocked_artists: Vec<String>,
}

impl AccessPolicy {
    /// Blocked tags as tag exclusions, `Always(true)` when nothing is blocked.
    pub fn predicate(&self) -> Predicate {
        Predicate::fold(
            crate::ast::Combinator::And,
            self.blocked_tags.iter().map(|tag| Predicate::tag(false, tag.clone())),
        )
        .unwrap_or(Predicate::Always(true))
    }

    /// Whether none of the track's artists is blocked. Names are compared
    /// whole, ignoring case, the same way tag names are.
    pub fn permits_artists(&self, track: &Track) -> bool {
        let blocked: Vec<String> = self
            .blocked_artists
            .iter()
            .map(|artist| artist.to_lowercase())
            .collect();
        !track
            .artists
            .iter()
            .any(|artist| blocked.contains(&artist.to_lowercase()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("invalid search syntax: {0}")]
    InvalidSyntax(#[from] SyntaxError),
}

/// An in-memory collection of tracks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    pub tracks: Vec<Track>,
}

impl Catalog {
    pub fn new(tracks: Vec<Track>) -> Self {
        Catalog { tracks }
    }

    /// Parse a catalog from a JSON array of tracks.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Run a user query under `policy`, returning matches in catalog order.
    pub fn search(&self, query: &str, policy: &AccessPolicy) -> Result<Vec<&Track>, SearchError> {
        let user = build(query)?;
        let combined = Predicate::and(user, policy.predicate());

        let matches: Vec<&Track> = self
            .tracks
            .iter()
            .filter(|track| TrackMatcher::new(track).matches(&combined))
            .filter(|track| policy.permits_artists(track))
            .collect();

        tracing::debug!(
            query,
            leaves = combined.leaf_count(),
            matched = matches.len(),
            total = self.tracks.len(),
            "catalog search"
        );
        Ok(matches)
    }
}
