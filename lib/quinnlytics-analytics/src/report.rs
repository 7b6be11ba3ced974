use crate::{popular_items_by_slot, role_percentage, role_stats};
use crate::{RoleBuild, RolePercentage, RoleStats};
use quinnlytics_db::model::Match;
use serde::Serialize;

/// Every analytic for one game version.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub game_version: String,
    pub role_stats: Vec<RoleStats>,
    pub role_percentages: Vec<RolePercentage>,
    pub popular_items: Vec<RoleBuild>,
}

impl Report {
    /// Build the report from the matches of `game_version`.
    pub fn from_matches(game_version: impl Into<String>, matches: &[Match]) -> Self {
        Self {
            game_version: game_version.into(),
            role_stats: role_stats(matches),
            role_percentages: role_percentage(matches),
            popular_items: popular_items_by_slot(matches),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.role_stats.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::stored_match;

    #[test]
    fn empty_version_gives_empty_report() {
        let report = Report::from_matches("14.15", &[]);
        assert!(report.is_empty());
        assert!(report.role_percentages.is_empty());
        assert!(report.popular_items.is_empty());
    }

    #[test]
    fn sections_share_role_order() {
        let matches = [
            stored_match("BOTTOM", true, (1, 1, 1), 1200),
            stored_match("TOP", true, (1, 1, 1), 1200),
        ];
        let report = Report::from_matches("14.14", &matches);

        let stats_roles: Vec<_> = report.role_stats.iter().map(|s| s.role).collect();
        let share_roles: Vec<_> = report.role_percentages.iter().map(|s| s.role).collect();
        let build_roles: Vec<_> = report.popular_items.iter().map(|s| s.role).collect();
        assert_eq!(stats_roles, share_roles);
        assert_eq!(stats_roles, build_roles);
    }
}
