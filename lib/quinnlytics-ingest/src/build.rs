//! Reconstruction of a player's final build from their purchase history.
//!
//! The end-of-match inventory says what the player held, but not in which
//! order it was bought. Purchase events give the order; intersecting the two
//! yields the build. An item that was bought, sold and bought again is only
//! counted at its first purchase.

use crate::raw::{RawTimeline, ITEM_PURCHASED};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Inventory slots available to a player, excluding the trinket.
pub const MAX_BUILD_SLOTS: usize = 6;

/// Map of item ID to item display name
pub type ItemCatalog = HashMap<i64, String>;

/// Items from `final_inventory` in the order `participant_id` first bought
/// them, resolved to names via `catalog`.
///
/// Items missing from the catalog (components, consumables, or a stale
/// catalog) are dropped. At most [`MAX_BUILD_SLOTS`] names are returned.
pub fn reconstruct_build(
    timeline: &RawTimeline,
    participant_id: i32,
    final_inventory: &[i32],
    catalog: &ItemCatalog,
) -> Vec<String> {
    let mut purchases: Vec<_> = timeline
        .events()
        .filter(|event| event.kind == ITEM_PURCHASED && event.participant_id == Some(participant_id))
        .filter_map(|event| event.item_id.map(|item_id| (event.timestamp, item_id)))
        .collect();
    // Stable, so purchases sharing a timestamp keep their event order
    purchases.sort_by_key(|(timestamp, _)| *timestamp);

    let inventory: HashSet<i32> = final_inventory.iter().copied().collect();
    let mut seen = HashSet::new();

    purchases
        .into_iter()
        .map(|(_, item_id)| item_id)
        .filter(|item_id| inventory.contains(item_id))
        .filter(|item_id| seen.insert(*item_id))
        .filter_map(|item_id| match catalog.get(&i64::from(item_id)) {
            Some(name) => Some(name.clone()),
            None => {
                debug!("Item {item_id} is not in the catalog, leaving it out of the build");
                None
            }
        })
        .take(MAX_BUILD_SLOTS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    const A: i32 = 3031;
    const B: i32 = 3006;
    const C: i32 = 3072;

    fn purchase(timestamp: i64, participant_id: i32, item_id: i32) -> Value {
        json!({
            "type": ITEM_PURCHASED,
            "timestamp": timestamp,
            "participantId": participant_id,
            "itemId": item_id,
        })
    }

    fn timeline(events: Vec<Value>) -> RawTimeline {
        serde_json::from_value(json!({ "info": { "frames": [{ "events": events }] } })).unwrap()
    }

    fn catalog(ids: &[i32]) -> ItemCatalog {
        ids.iter()
            .map(|id| (i64::from(*id), format!("item-{id}")))
            .collect()
    }

    #[test]
    fn sold_items_excluded_and_repurchase_collapsed() {
        let timeline = timeline(vec![
            purchase(1_000, 1, A),
            purchase(2_000, 1, B),
            purchase(3_000, 1, C),
            purchase(4_000, 1, A),
        ]);

        let build = reconstruct_build(&timeline, 1, &[B, C, 0, 0, 0, 0], &catalog(&[A, B, C]));
        assert_eq!(build, ["item-3006", "item-3072"]);
    }

    #[test]
    fn repurchase_of_kept_item_counts_once_at_first_purchase() {
        let timeline = timeline(vec![
            purchase(1_000, 1, A),
            purchase(2_000, 1, B),
            purchase(3_000, 1, A),
        ]);

        let build = reconstruct_build(&timeline, 1, &[B, A, 0, 0, 0, 0], &catalog(&[A, B]));
        assert_eq!(build, ["item-3031", "item-3006"]);
    }

    #[test]
    fn ordered_by_timestamp_not_event_position() {
        let timeline = timeline(vec![purchase(9_000, 1, C), purchase(1_000, 1, B)]);

        let build = reconstruct_build(&timeline, 1, &[C, B, 0, 0, 0, 0], &catalog(&[B, C]));
        assert_eq!(build, ["item-3006", "item-3072"]);
    }

    #[test]
    fn only_the_tracked_participants_purchases() {
        let timeline = timeline(vec![
            purchase(1_000, 2, A),
            json!({ "type": "ITEM_SOLD", "timestamp": 1_500, "participantId": 1, "itemId": C }),
            purchase(2_000, 1, B),
        ]);

        let build = reconstruct_build(&timeline, 1, &[A, B, C, 0, 0, 0], &catalog(&[A, B, C]));
        assert_eq!(build, ["item-3006"]);
    }

    #[test]
    fn items_missing_from_catalog_are_dropped() {
        let timeline = timeline(vec![purchase(1_000, 1, 1055), purchase(2_000, 1, B)]);

        let build = reconstruct_build(&timeline, 1, &[1055, B, 0, 0, 0, 0], &catalog(&[B]));
        assert_eq!(build, ["item-3006"]);
    }

    #[test]
    fn capped_at_six_items() {
        let ids = [3001, 3002, 3003, 3004, 3005, 3006, 3007];
        let events = ids
            .iter()
            .enumerate()
            .map(|(i, id)| purchase(i as i64 * 1_000, 1, *id))
            .collect();

        let build = reconstruct_build(&timeline(events), 1, &ids, &catalog(&ids));
        assert_eq!(build.len(), MAX_BUILD_SLOTS);
        assert_eq!(build.last().unwrap(), "item-3006");
    }

    #[test]
    fn empty_timeline_gives_empty_build() {
        let build = reconstruct_build(&RawTimeline::default(), 1, &[A, B, C, 0, 0, 0], &catalog(&[A]));
        assert!(build.is_empty());
    }
}
