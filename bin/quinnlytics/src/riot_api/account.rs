use super::RiotClient;
use anyhow::Context;
use tracing::debug;

impl RiotClient {
    /// Look up the PUUID of a player by Riot ID.
    pub async fn get_puuid(&self, game_name: &str, tag_line: &str) -> anyhow::Result<String> {
        let account = self
            .riot_api
            .account_v1()
            .get_by_riot_id(self.region.route(), game_name, tag_line)
            .await?
            .with_context(|| format!("No account found for {game_name}#{tag_line}"))?;
        debug!("Fetched account: {account:?}");
        Ok(account.puuid)
    }
}
