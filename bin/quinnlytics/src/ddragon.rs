use quinnlytics_ingest::raw::{rune_table, RawItemData, RawRuneTree, RuneTable};
use quinnlytics_ingest::{Error, ReferenceSource};
use serde::de::DeserializeOwned;
use tracing::debug;

const VERSIONS_URL: &str = "https://ddragon.leagueoflegends.com/api/versions.json";

/// Client for Data Dragon, Riot's static reference data CDN.
#[derive(Debug, Default)]
pub struct DataDragon {
    http: reqwest::Client,
}

impl DataDragon {
    pub fn new() -> Self {
        Self::default()
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
        let upstream = |e: reqwest::Error| Error::UpstreamUnavailable(format!("GET {url}: {e}"));
        self.http
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(upstream)?
            .json()
            .await
            .map_err(upstream)
    }
}

fn data_url(version: &str, file: &str) -> String {
    format!("https://ddragon.leagueoflegends.com/cdn/{version}/data/en_US/{file}")
}

impl ReferenceSource for DataDragon {
    /// The newest version listed by Data Dragon.
    async fn current_version(&self) -> Result<String, Error> {
        let versions: Vec<String> = self.fetch(VERSIONS_URL).await?;
        let version = versions
            .into_iter()
            .next()
            .ok_or_else(|| Error::UpstreamUnavailable("Data Dragon listed no versions".into()))?;
        debug!("Current game version: {version}");
        Ok(version)
    }

    async fn runes(&self, version: &str) -> Result<RuneTable, Error> {
        let trees: Vec<RawRuneTree> = self.fetch(&data_url(version, "runesReforged.json")).await?;
        Ok(rune_table(&trees))
    }

    async fn items(&self, version: &str) -> Result<RawItemData, Error> {
        self.fetch(&data_url(version, "item.json")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn versioned_data_url() {
        assert_eq!(
            data_url("14.14.1", "item.json"),
            "https://ddragon.leagueoflegends.com/cdn/14.14.1/data/en_US/item.json"
        );
    }
}
