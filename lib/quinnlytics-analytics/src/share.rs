use crate::group_by_role;
use quinnlytics_db::model::Match;
use quinnlytics_db::Role;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RolePercentage {
    pub role: Role,
    pub game_count: usize,
    /// Fraction of all matches, `0.0..=1.0`
    pub share: f64,
}

/// Share of matches played in each role. Empty when there are no matches.
pub fn role_percentage(matches: &[Match]) -> Vec<RolePercentage> {
    let groups = group_by_role(matches);
    let total: usize = groups.iter().map(|(_, group)| group.len()).sum();
    if total == 0 {
        return Vec::new();
    }

    groups
        .into_iter()
        .map(|(role, group)| RolePercentage {
            role,
            game_count: group.len(),
            share: group.len() as f64 / total as f64,
        })
        .collect()
}
