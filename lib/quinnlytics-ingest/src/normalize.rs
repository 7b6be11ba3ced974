use crate::build::{reconstruct_build, ItemCatalog};
use crate::error::{Anomaly, Error};
use crate::raw::{RawMatch, RawParticipant, RawTimeline, RuneTable};
use quinnlytics_db::model::Match;
use quinnlytics_db::{Json, Role};

/// Opponent champion when no enemy shares the tracked player's position.
pub const UNKNOWN_OPPONENT: &str = "Unknown";

/// Turns raw match payloads into [`Match`] records for one tracked player.
#[derive(Debug)]
pub struct MatchNormalizer<'a> {
    runes: &'a RuneTable,
    catalog: &'a ItemCatalog,
}

impl<'a> MatchNormalizer<'a> {
    pub fn new(runes: &'a RuneTable, catalog: &'a ItemCatalog) -> Self {
        Self { runes, catalog }
    }

    /// Normalize `raw` from the point of view of `puuid`. Without a timeline
    /// the build is left empty.
    pub fn normalize(
        &self,
        raw: &RawMatch,
        timeline: Option<&RawTimeline>,
        puuid: &str,
    ) -> Result<Match, Error> {
        let match_id = &raw.metadata.match_id;
        let anomaly = |anomaly| Error::DataAnomaly {
            match_id: match_id.clone(),
            anomaly,
        };

        let player = raw
            .info
            .participants
            .iter()
            .find(|p| p.puuid == puuid)
            .ok_or_else(|| Error::NotFound {
                match_id: match_id.clone(),
                puuid: puuid.to_string(),
            })?;

        let role = Role::from_position(&player.team_position)
            .ok_or_else(|| anomaly(Anomaly::UnknownPosition(player.team_position.clone())))?;

        if raw.info.game_duration <= 0 {
            return Err(anomaly(Anomaly::ZeroDuration));
        }
        let total_minions_killed = player.total_minions_killed + player.neutral_minions_killed;
        let minions_per_minute =
            f64::from(total_minions_killed) / (raw.info.game_duration as f64 / 60.0);

        let build = match timeline {
            Some(timeline) => reconstruct_build(
                timeline,
                player.participant_id,
                &player.final_inventory(),
                self.catalog,
            ),
            None => Vec::new(),
        };

        Ok(Match {
            match_id: match_id.clone(),
            match_date: raw.info.game_creation,
            role: role.to_string(),
            win: player.win,
            champion: player.champion_name.clone(),
            opponent_champion: find_opponent(&raw.info.participants, player),
            game_version: short_version(&raw.info.game_version),
            game_duration: raw.info.game_duration,
            kills: player.kills.into(),
            deaths: player.deaths.into(),
            assists: player.assists.into(),
            total_minions_killed: total_minions_killed.into(),
            minions_per_minute,
            summoner_spells: format!(
                "Summoner1: {}, Summoner2: {}",
                player.summoner1_id, player.summoner2_id
            ),
            rune_details: Json(self.rune_details(player)),
            q_casts: player.spell1_casts.into(),
            w_casts: player.spell2_casts.into(),
            e_casts: player.spell3_casts.into(),
            r_casts: player.spell4_casts.into(),
            all_in_pings: player.all_in_pings.map(i64::from),
            assist_me_pings: player.assist_me_pings.map(i64::from),
            command_pings: player.command_pings.map(i64::from),
            enemy_missing_pings: player.enemy_missing_pings.map(i64::from),
            enemy_vision_pings: player.enemy_vision_pings.map(i64::from),
            get_back_pings: player.get_back_pings.map(i64::from),
            need_vision_pings: player.need_vision_pings.map(i64::from),
            on_my_way_pings: player.on_my_way_pings.map(i64::from),
            push_pings: player.push_pings.map(i64::from),
            gold_earned: player.gold_earned.into(),
            gold_spent: player.gold_spent.into(),
            build: Json(build),
        })
    }

    /// Selected runes in selection order. Unknown IDs are kept as a
    /// placeholder rather than dropped.
    fn rune_details(&self, player: &RawParticipant) -> Vec<String> {
        player
            .perks
            .styles
            .iter()
            .flat_map(|style| style.selections.iter())
            .map(|selection| match self.runes.get(&selection.perk) {
                Some(name) => name.clone(),
                None => format!("Rune ID: {}", selection.perk),
            })
            .collect()
    }
}

/// Champion of the enemy playing the same position as `player`.
fn find_opponent(participants: &[RawParticipant], player: &RawParticipant) -> String {
    participants
        .iter()
        .find(|p| p.team_id != player.team_id && p.team_position == player.team_position)
        .map(|p| p.champion_name.clone())
        .unwrap_or_else(|| UNKNOWN_OPPONENT.to_string())
}

/// Truncate a game version to `major.minor`, e.g. `14.14.604.8` to `14.14`.
pub fn short_version(version: &str) -> String {
    version.split('.').take(2).collect::<Vec<&str>>().join(".")
}
