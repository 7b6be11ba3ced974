use quinnlytics_analytics::Report;
use std::fmt::Write;

/// Render a [`Report`] as plain text tables.
pub fn render(report: &Report) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_report(&mut out, report);
    out
}

fn write_report(out: &mut String, report: &Report) -> std::fmt::Result {
    writeln!(out, "Game version: {}", report.game_version)?;
    if report.is_empty() {
        writeln!(out, "No matches for this version yet.")?;
        return Ok(());
    }

    writeln!(
        out,
        "ROLE | Game Count | Win Ratio | KDA | Most Frequent Opponent | Avg Game Duration | Avg CS/min"
    )?;
    for stats in &report.role_stats {
        writeln!(
            out,
            "{} | {} | {:.2}% | {:.2} | {} | {} | {:.2}",
            stats.role,
            stats.game_count,
            stats.win_ratio * 100.0,
            stats.kda,
            stats.most_frequent_opponent,
            stats.average_game_duration,
            stats.minions_per_minute
        )?;
    }

    writeln!(out)?;
    writeln!(out, "ROLE | Game Count | Percentage")?;
    for share in &report.role_percentages {
        writeln!(
            out,
            "{} | {} | {:.2}%",
            share.role,
            share.game_count,
            share.share * 100.0
        )?;
    }

    writeln!(out)?;
    writeln!(out, "MOST POPULAR ITEM PER SLOT")?;
    for build in &report.popular_items {
        writeln!(out, "{}", build.role)?;
        for (slot, item) in build.slots.iter().enumerate() {
            writeln!(out, "  Slot {}: {item}", slot + 1)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quinnlytics_analytics::{RoleBuild, RolePercentage, RoleStats, NO_ITEM};
    use quinnlytics_db::Role;

    #[test]
    fn empty_report() {
        let report = Report::from_matches("14.15", &[]);
        assert_eq!(
            render(&report),
            "Game version: 14.15\nNo matches for this version yet.\n"
        );
    }

    #[test]
    fn tables() {
        let report = Report {
            game_version: "14.14".into(),
            role_stats: vec![RoleStats {
                role: Role::Support,
                game_count: 2,
                win_ratio: 0.5,
                kda: 9.0,
                most_frequent_opponent: "Nautilus".into(),
                average_game_duration: "00:22:30".into(),
                minions_per_minute: 1.25,
            }],
            role_percentages: vec![RolePercentage {
                role: Role::Support,
                game_count: 2,
                share: 1.0,
            }],
            popular_items: vec![RoleBuild {
                role: Role::Support,
                slots: std::array::from_fn(|slot| match slot {
                    0 => "Celestial Opposition".to_string(),
                    _ => NO_ITEM.to_string(),
                }),
            }],
        };

        let text = render(&report);
        assert!(text.contains("SUPPORT | 2 | 50.00% | 9.00 | Nautilus | 00:22:30 | 1.25\n"));
        assert!(text.contains("SUPPORT | 2 | 100.00%\n"));
        assert!(text.contains("  Slot 1: Celestial Opposition\n  Slot 2: None\n"));
        assert!(text.ends_with("  Slot 6: None\n"));
    }
}
