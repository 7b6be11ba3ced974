use super::RiotClient;
use quinnlytics_ingest::raw::{RawMatch, RawTimeline};
use quinnlytics_ingest::{Error, MatchSource};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Re-read a riven model as one of the ingestion payload shapes. Both follow
/// the match-v5 field names, so the JSON form carries over unchanged.
fn to_raw<T: Serialize, R: DeserializeOwned>(match_id: &str, model: &T) -> Result<R, Error> {
    serde_json::to_value(model)
        .and_then(serde_json::from_value)
        .map_err(|e| Error::UpstreamUnavailable(format!("Decoding {match_id}: {e}")))
}

impl MatchSource for RiotClient {
    async fn get_match(&self, match_id: &str) -> Result<Option<RawMatch>, Error> {
        let data = self
            .riot_api
            .match_v5()
            .get_match(self.region.route(), match_id)
            .await
            .map_err(|e| Error::UpstreamUnavailable(format!("Match {match_id}: {e}")))?;
        debug!("Fetched match data: {match_id}");
        data.map(|data| to_raw(match_id, &data)).transpose()
    }

    async fn get_timeline(&self, match_id: &str) -> Result<Option<RawTimeline>, Error> {
        let data = self
            .riot_api
            .match_v5()
            .get_timeline(self.region.route(), match_id)
            .await
            .map_err(|e| Error::UpstreamUnavailable(format!("Timeline {match_id}: {e}")))?;
        debug!("Fetched match timeline: {match_id}");
        data.map(|data| to_raw(match_id, &data)).transpose()
    }
}
