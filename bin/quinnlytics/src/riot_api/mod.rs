use riven::consts::RegionalRoute;
use riven::RiotApi;
use serde::Deserialize;
use std::str::FromStr;

pub mod account;
pub mod match_data;
pub mod match_ids;

/// Regional routing value for account and match-v5 requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Americas,
    Asia,
    #[default]
    Europe,
    Sea,
}

impl Region {
    pub fn route(self) -> RegionalRoute {
        match self {
            Region::Americas => RegionalRoute::AMERICAS,
            Region::Asia => RegionalRoute::ASIA,
            Region::Europe => RegionalRoute::EUROPE,
            Region::Sea => RegionalRoute::SEA,
        }
    }
}

impl FromStr for Region {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "americas" => Ok(Region::Americas),
            "asia" => Ok(Region::Asia),
            "europe" => Ok(Region::Europe),
            "sea" => Ok(Region::Sea),
            _ => anyhow::bail!("Unknown region {s:?}"),
        }
    }
}

/// Client for the Riot API. Every request goes through [`RiotApi`], which
/// applies the key's rate limits and retries throttled or failed requests.
pub struct RiotClient {
    riot_api: RiotApi,
    region: Region,
}

impl std::fmt::Debug for RiotClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RiotClient")
            .field("region", &self.region)
            .finish()
    }
}

impl RiotClient {
    pub fn new(api_key: String, region: Region) -> Self {
        Self {
            riot_api: RiotApi::new(api_key),
            region,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_from_config_string() {
        assert_eq!("EUROPE".parse::<Region>().unwrap(), Region::Europe);
        assert_eq!("americas".parse::<Region>().unwrap(), Region::Americas);
        assert!("euw1".parse::<Region>().is_err());
    }

    #[test]
    fn region_routes() {
        assert_eq!(Region::Sea.route(), RegionalRoute::SEA);
        assert_eq!(Region::default().route(), RegionalRoute::EUROPE);
    }
}
