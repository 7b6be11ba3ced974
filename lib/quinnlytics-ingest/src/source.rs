//! Collaborators that supply raw provider data. The network clients live in
//! the binary; tests substitute in-memory fakes.

use crate::error::Error;
use crate::raw::{RawItemData, RawMatch, RawTimeline, RuneTable};

/// Per-match data from the match-v5 API.
pub trait MatchSource {
    /// Fetch a match. `Ok(None)` means the provider has no such match.
    async fn get_match(&self, match_id: &str) -> Result<Option<RawMatch>, Error>;

    /// Fetch the event timeline of a match. `Ok(None)` means the provider has
    /// no timeline for it.
    async fn get_timeline(&self, match_id: &str) -> Result<Option<RawTimeline>, Error>;
}

/// Versioned reference data (Data Dragon).
pub trait ReferenceSource {
    /// The provider's current full game version, e.g. `14.14.1`.
    async fn current_version(&self) -> Result<String, Error>;

    async fn runes(&self, version: &str) -> Result<RuneTable, Error>;

    async fn items(&self, version: &str) -> Result<RawItemData, Error>;
}
