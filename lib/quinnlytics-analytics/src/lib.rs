//! Per-role analytics over stored matches.

use quinnlytics_db::model::Match;
use quinnlytics_db::Role;
use tracing::warn;

pub mod report;
pub mod share;
pub mod slots;
pub mod stats;
pub mod tally;

pub use report::Report;
pub use share::{role_percentage, RolePercentage};
pub use slots::{popular_items_by_slot, RoleBuild, NO_ITEM, SLOT_COUNT};
pub use stats::{role_stats, RoleStats};

/// Group matches by role, roles in the order they first appear.
///
/// Stored roles are parsed again here, so a leftover `UTILITY` label still
/// lands in [`Role::Support`]. Rows with an unrecognized role are skipped.
pub fn group_by_role(matches: &[Match]) -> Vec<(Role, Vec<&Match>)> {
    let mut groups: Vec<(Role, Vec<&Match>)> = Vec::new();
    for data in matches {
        let Some(role) = Role::from_position(&data.role) else {
            warn!("Skipping match {} with unknown role {:?}", data.match_id, data.role);
            continue;
        };
        match groups.iter_mut().find(|(r, _)| *r == role) {
            Some((_, group)) => group.push(data),
            None => groups.push((role, vec![data])),
        }
    }
    groups
}

#[cfg(test)]
pub(crate) mod fixture {
    use quinnlytics_db::model::Match;
    use quinnlytics_db::Json;

    pub fn stored_match(role: &str, win: bool, kda: (i64, i64, i64), game_duration: i64) -> Match {
        let (kills, deaths, assists) = kda;
        Match {
            match_id: format!("EUW1_{role}_{kills}_{deaths}_{assists}_{game_duration}"),
            match_date: 1_722_000_000_000,
            role: role.into(),
            win,
            champion: "Thresh".into(),
            opponent_champion: "Unknown".into(),
            game_version: "14.14".into(),
            game_duration,
            kills,
            deaths,
            assists,
            total_minions_killed: 30,
            minions_per_minute: 1.0,
            summoner_spells: "Summoner1: 4, Summoner2: 3".into(),
            rune_details: Json(vec![]),
            q_casts: 0,
            w_casts: 0,
            e_casts: 0,
            r_casts: 0,
            all_in_pings: None,
            assist_me_pings: None,
            command_pings: None,
            enemy_missing_pings: None,
            enemy_vision_pings: None,
            get_back_pings: None,
            need_vision_pings: None,
            on_my_way_pings: None,
            push_pings: None,
            gold_earned: 0,
            gold_spent: 0,
            build: Json(vec![]),
        }
    }

    pub fn with_build(mut data: Match, build: &[&str]) -> Match {
        data.build = Json(build.iter().map(|s| s.to_string()).collect());
        data
    }
}

#[cfg(test)]
mod tests {
    use super::fixture::stored_match;
    use super::*;

    #[test]
    fn groups_in_first_seen_order() {
        let matches = [
            stored_match("MIDDLE", true, (1, 1, 1), 1200),
            stored_match("TOP", true, (2, 1, 1), 1200),
            stored_match("MIDDLE", false, (3, 1, 1), 1200),
        ];
        let groups = group_by_role(&matches);

        let summary: Vec<(Role, usize)> = groups.iter().map(|(r, g)| (*r, g.len())).collect();
        assert_eq!(summary, [(Role::Middle, 2), (Role::Top, 1)]);
    }

    #[test]
    fn utility_and_support_share_a_group() {
        let matches = [
            stored_match("UTILITY", true, (1, 1, 1), 1200),
            stored_match("SUPPORT", true, (2, 1, 1), 1200),
            stored_match("ARAM", true, (3, 1, 1), 1200),
        ];
        let groups = group_by_role(&matches);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, Role::Support);
        assert_eq!(groups[0].1.len(), 2);
    }
}
