use crate::riot_api::Region;
use anyhow::Context;
use quinnlytics_ingest::catalog::ItemPolicy;
use serde::Deserialize;
use std::path::Path;
use tokio::fs::read_to_string;

// Max value that Riot API accepts for getting match IDs
const MAX_MATCHES: i32 = 100;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database_url: String,
    pub rgapi_key: String,
    /// Riot ID of the tracked player, `game_name#tag_line`
    pub game_name: String,
    pub tag_line: String,
    pub region: Region,
    /// Number of recent match IDs to request
    pub match_count: i32,
    pub items: ItemPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://quinnlytics.db".into(),
            rgapi_key: String::new(),
            game_name: String::new(),
            tag_line: String::new(),
            region: Region::default(),
            match_count: 20,
            items: ItemPolicy::default(),
        }
    }
}

impl Config {
    pub async fn load(path: Option<impl AsRef<Path>>) -> anyhow::Result<Self> {
        let config = match path {
            Some(path) => Self::load_file(path).await?,
            None => Default::default(),
        };
        let config = config.with_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    async fn load_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let contents = read_to_string(path).await?;
        Ok(toml::from_str(&contents)?)
    }

    /// Replace fields with the values of their environment variables, if set.
    fn with_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        self.database_url = var("DATABASE_URL").unwrap_or(self.database_url);
        self.rgapi_key = var("RGAPI_KEY").unwrap_or(self.rgapi_key);
        self.game_name = var("GAME_NAME").unwrap_or(self.game_name);
        self.tag_line = var("TAG_LINE").unwrap_or(self.tag_line);
        if let Some(region) = var("REGION") {
            self.region = region.parse()?;
        }
        if let Some(count) = var("MATCH_COUNT") {
            self.match_count = count.parse().context("MATCH_COUNT should be numeric")?;
        }
        Ok(self)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.rgapi_key.is_empty() {
            anyhow::bail!("No Riot API key configured (RGAPI_KEY)");
        }
        if self.game_name.is_empty() || self.tag_line.is_empty() {
            anyhow::bail!("No player configured (GAME_NAME, TAG_LINE)");
        }
        if !(1..=MAX_MATCHES).contains(&self.match_count) {
            anyhow::bail!("match_count must be between 1 and {MAX_MATCHES}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn file_values_with_defaults() {
        let config: Config = toml::from_str(
            r#"
            rgapi_key = "RGAPI-test"
            game_name = "Quinn Main"
            tag_line = "EUW"
            region = "americas"

            [items]
            excluded = [2003, 3340]
            "#,
        )
        .unwrap();

        assert_eq!(config.region, Region::Americas);
        assert_eq!(config.match_count, 20);
        assert_eq!(config.database_url, "sqlite://quinnlytics.db");
        assert!(config.items.excluded.contains(&3340));
        // A partial [items] table keeps the default exceptions
        assert!(config.items.exceptions.contains(&3006));
        assert!(config.items.exceptions.contains(&3010));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn environment_overrides_file() {
        let env = HashMap::from([
            ("RGAPI_KEY", "RGAPI-env"),
            ("REGION", "sea"),
            ("MATCH_COUNT", "50"),
        ]);
        let config = Config::default()
            .with_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.rgapi_key, "RGAPI-env");
        assert_eq!(config.region, Region::Sea);
        assert_eq!(config.match_count, 50);
        assert!(config.items.exceptions.contains(&3006));
    }

    #[test]
    fn bad_environment_values_rejected() {
        let config = Config::default().with_overrides(|key| {
            (key == "MATCH_COUNT").then(|| "lots".to_string())
        });
        assert!(config.is_err());
        let config = Config::default().with_overrides(|key| (key == "REGION").then(|| "moon".to_string()));
        assert!(config.is_err());
    }

    #[test]
    fn validation() {
        let mut config = Config {
            rgapi_key: "RGAPI-test".into(),
            game_name: "Quinn Main".into(),
            tag_line: "EUW".into(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        config.match_count = 101;
        assert!(config.validate().is_err());
        config.match_count = 20;
        config.tag_line.clear();
        assert!(config.validate().is_err());
    }
}
