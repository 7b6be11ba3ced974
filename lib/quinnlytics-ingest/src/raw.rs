//! Shapes of the provider payloads, reduced to the fields ingestion reads.
//!
//! Field names follow the match-v5 and Data Dragon JSON documents.

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// Event type of a purchase in a match timeline.
pub const ITEM_PURCHASED: &str = "ITEM_PURCHASED";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMatch {
    pub metadata: RawMetadata,
    pub info: RawMatchInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMetadata {
    pub match_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMatchInfo {
    /// Epoch millis
    pub game_creation: i64,
    /// Seconds
    pub game_duration: i64,
    pub game_version: String,
    pub queue_id: u16,
    pub participants: Vec<RawParticipant>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawParticipant {
    pub participant_id: i32,
    pub puuid: String,
    pub team_id: u16,
    pub team_position: String,
    pub champion_name: String,
    pub win: bool,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub total_minions_killed: u32,
    pub neutral_minions_killed: u32,
    pub summoner1_id: i32,
    pub summoner2_id: i32,
    pub spell1_casts: u32,
    pub spell2_casts: u32,
    pub spell3_casts: u32,
    pub spell4_casts: u32,
    pub gold_earned: u32,
    pub gold_spent: u32,
    pub item0: i32,
    pub item1: i32,
    pub item2: i32,
    pub item3: i32,
    pub item4: i32,
    pub item5: i32,
    pub perks: RawPerks,
    pub all_in_pings: Option<u32>,
    pub assist_me_pings: Option<u32>,
    pub command_pings: Option<u32>,
    pub enemy_missing_pings: Option<u32>,
    pub enemy_vision_pings: Option<u32>,
    pub get_back_pings: Option<u32>,
    pub need_vision_pings: Option<u32>,
    pub on_my_way_pings: Option<u32>,
    pub push_pings: Option<u32>,
}

impl RawParticipant {
    /// The six inventory slots at the end of the match. The trinket slot
    /// (`item6`) is not part of a build.
    pub fn final_inventory(&self) -> [i32; 6] {
        [
            self.item0, self.item1, self.item2, self.item3, self.item4, self.item5,
        ]
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPerks {
    pub styles: Vec<RawPerkStyle>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPerkStyle {
    pub selections: Vec<RawPerkSelection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPerkSelection {
    pub perk: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTimeline {
    pub info: RawTimelineInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTimelineInfo {
    pub frames: Vec<RawFrame>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawFrame {
    pub events: Vec<RawEvent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub timestamp: i64,
    pub participant_id: Option<i32>,
    pub item_id: Option<i32>,
}

impl RawTimeline {
    pub fn events(&self) -> impl Iterator<Item = &RawEvent> {
        self.info.frames.iter().flat_map(|frame| frame.events.iter())
    }
}

/// Map of rune ID to rune display name
pub type RuneTable = HashMap<i64, String>;

/// A rune tree from `runesReforged.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRuneTree {
    pub slots: Vec<RawRuneSlot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawRuneSlot {
    pub runes: Vec<RawRune>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawRune {
    pub id: i64,
    pub name: String,
}

/// Flatten rune trees into a lookup of every selectable rune.
pub fn rune_table(trees: &[RawRuneTree]) -> RuneTable {
    trees
        .iter()
        .flat_map(|tree| tree.slots.iter())
        .flat_map(|slot| slot.runes.iter())
        .map(|rune| (rune.id, rune.name.clone()))
        .collect()
}

/// Contents of `item.json`, keyed by the item ID as a string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawItemData {
    pub data: BTreeMap<String, RawItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawItem {
    pub name: String,
    /// IDs of the items this one upgrades into
    #[serde(default)]
    pub into: Vec<String>,
}
