use crate::group_by_role;
use crate::tally::Tally;
use quinnlytics_db::model::Match;
use quinnlytics_db::Role;
use serde::Serialize;

/// Reported when a role has no opponent data at all.
pub const UNKNOWN_OPPONENT: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleStats {
    pub role: Role,
    pub game_count: usize,
    /// Fraction of games won, `0.0..=1.0`
    pub win_ratio: f64,
    pub kda: f64,
    pub most_frequent_opponent: String,
    /// `HH:MM:SS`
    pub average_game_duration: String,
    pub minions_per_minute: f64,
}

/// Aggregate statistics per role, roles in the order they first appear.
pub fn role_stats(matches: &[Match]) -> Vec<RoleStats> {
    group_by_role(matches)
        .into_iter()
        .map(|(role, group)| summarize(role, &group))
        .collect()
}

fn summarize(role: Role, group: &[&Match]) -> RoleStats {
    let game_count = group.len();
    let games = game_count as f64;

    let wins = group.iter().filter(|m| m.win).count();
    let takedowns: i64 = group.iter().map(|m| m.kills + m.assists).sum();
    let deaths: i64 = group.iter().map(|m| m.deaths).sum();

    let mut opponents = Tally::new();
    for data in group {
        opponents.add(data.opponent_champion.as_str());
    }

    let total_duration: i64 = group.iter().map(|m| m.game_duration).sum();
    let total_minions_per_minute: f64 = group.iter().map(|m| m.minions_per_minute).sum();

    RoleStats {
        role,
        game_count,
        win_ratio: wins as f64 / games,
        kda: kda(takedowns, deaths),
        most_frequent_opponent: opponents
            .most_common()
            .copied()
            .unwrap_or(UNKNOWN_OPPONENT)
            .to_string(),
        average_game_duration: format_duration(total_duration as f64 / games),
        minions_per_minute: total_minions_per_minute / games,
    }
}

/// `(kills + assists) / deaths`, counting a deathless record as one death.
pub fn kda(takedowns: i64, deaths: i64) -> f64 {
    takedowns as f64 / deaths.max(1) as f64
}

/// Format seconds as `HH:MM:SS`, dropping fractional seconds.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        total % 3600 / 60,
        total % 60
    )
}
