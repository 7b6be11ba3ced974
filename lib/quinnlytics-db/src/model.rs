use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};

/// One ingested game, seen from the tracked player's side. Never updated
/// once written.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Match {
    pub match_id: String,
    /// Game creation time, epoch millis
    pub match_date: i64,
    pub role: String,
    pub win: bool,
    pub champion: String,
    pub opponent_champion: String,
    /// `major.minor` only
    pub game_version: String,
    pub game_duration: i64,
    pub kills: i64,
    pub deaths: i64,
    pub assists: i64,
    pub total_minions_killed: i64,
    pub minions_per_minute: f64,
    pub summoner_spells: String,
    pub rune_details: Json<Vec<String>>,
    pub q_casts: i64,
    pub w_casts: i64,
    pub e_casts: i64,
    pub r_casts: i64,
    // Pings are absent for older matches; keep that distinct from zero.
    pub all_in_pings: Option<i64>,
    pub assist_me_pings: Option<i64>,
    pub command_pings: Option<i64>,
    pub enemy_missing_pings: Option<i64>,
    pub enemy_vision_pings: Option<i64>,
    pub get_back_pings: Option<i64>,
    pub need_vision_pings: Option<i64>,
    pub on_my_way_pings: Option<i64>,
    pub push_pings: Option<i64>,
    pub gold_earned: i64,
    pub gold_spent: i64,
    /// Final build in purchase order, at most six item names
    pub build: Json<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
}

/// The game version the item catalog was last refreshed for.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct GameVersion {
    pub id: i64,
    pub version: String,
}
