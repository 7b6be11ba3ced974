use super::RiotClient;
use tracing::debug;

impl RiotClient {
    /// Get the IDs of the player's `count` most recent matches, oldest first.
    pub async fn get_match_ids(&self, puuid: &str, count: i32) -> anyhow::Result<Vec<String>> {
        let mut match_ids = self
            .riot_api
            .match_v5()
            .get_match_ids_by_puuid(
                self.region.route(),
                puuid,
                Some(count),
                None,
                None,
                None,
                None,
                None,
            )
            .await?;
        // Reverse the match IDs to iterate in the correct order
        match_ids.reverse();
        debug!("Got match IDs: {match_ids:?}");
        Ok(match_ids)
    }
}
