use crate::group_by_role;
use crate::tally::Tally;
use quinnlytics_db::model::Match;
use quinnlytics_db::Role;
use serde::Serialize;
use tracing::warn;

/// Item slots in a build.
pub const SLOT_COUNT: usize = 6;

/// Reported for a slot no build of the role reached.
pub const NO_ITEM: &str = "None";

/// Most popular item in each build slot for one role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleBuild {
    pub role: Role,
    pub slots: [String; SLOT_COUNT],
}

/// Most popular item per build slot, per role.
///
/// Each slot is tallied on its own; ties go to the item tallied first.
/// Builds longer than [`SLOT_COUNT`] are malformed and only their first
/// [`SLOT_COUNT`] items are counted.
pub fn popular_items_by_slot(matches: &[Match]) -> Vec<RoleBuild> {
    group_by_role(matches)
        .into_iter()
        .map(|(role, group)| {
            let mut tallies: [Tally<&str>; SLOT_COUNT] = std::array::from_fn(|_| Tally::new());
            for data in group {
                if data.build.len() > SLOT_COUNT {
                    warn!(
                        "Match {} has {} build items, ignoring those past slot {SLOT_COUNT}",
                        data.match_id,
                        data.build.len()
                    );
                }
                for (tally, item) in tallies.iter_mut().zip(data.build.iter()) {
                    tally.add(item.as_str());
                }
            }

            let slots = std::array::from_fn(|slot| {
                tallies[slot]
                    .most_common()
                    .copied()
                    .unwrap_or(NO_ITEM)
                    .to_string()
            });
            RoleBuild { role, slots }
        })
        .collect()
}
