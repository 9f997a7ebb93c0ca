//! Plain-text rendering of command results.

use std::fmt::Write;

use treekin_carbon::{AdopterEntry, CarbonEntry, CarbonEstimate, PlanterEntry};
use treekin_tredits::constants::TREDITS_PER_TREE;
use treekin_tredits::{format_tredits, TreeAccrual, TreditsBreakdown};
use treekin_utils::format_duration;

pub fn render_breakdown(b: &TreditsBreakdown) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total Tredits     {}", format_tredits(b.total));
    let _ = writeln!(
        out,
        "  from trees      +{}  ({} trees x {})",
        format_tredits(b.from_trees),
        b.trees_planted,
        TREDITS_PER_TREE
    );
    let _ = writeln!(
        out,
        "  from CO2        +{}  ({} kg absorbed, {} units)",
        format_tredits(b.from_co2),
        b.co2_absorbed_kg,
        b.co2_units()
    );
    let _ = writeln!(
        out,
        "  from water      +{}  ({} kg filtered, {} units)",
        format_tredits(b.from_water),
        b.water_filtered_kg,
        b.water_units()
    );
    let _ = writeln!(out, "O2 released       {} kg (tracked only)", b.o2_released_kg);
    out
}

pub fn render_accruals(rows: &[TreeAccrual]) -> String {
    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        match row.planted_at {
            Some(planted_at) => {
                let _ = writeln!(
                    out,
                    "#{:<3} {}  age {:<8} {} kg",
                    i + 1,
                    planted_at,
                    format_duration(row.age_millis),
                    row.kg
                );
            }
            None => {
                let _ = writeln!(out, "#{:<3} {:?}  unparseable, 0 kg", i + 1, row.source);
            }
        }
    }
    out
}

pub fn render_estimate(e: &CarbonEstimate) -> String {
    format!(
        "{}: {} kg CO2/year, worth {} Tredits ({})\n",
        e.species, e.annual_co2_kg, e.tredits_value, e.method
    )
}

pub fn render_planters(entries: &[PlanterEntry]) -> String {
    let mut out = String::new();
    for e in entries {
        let _ = writeln!(
            out,
            "{:>3}. {:<20} {} trees, {} updates",
            e.rank, e.username, e.total_trees_planted, e.total_growth_updates
        );
    }
    out
}

pub fn render_adopters(entries: &[AdopterEntry]) -> String {
    let mut out = String::new();
    for e in entries {
        let _ = writeln!(
            out,
            "{:>3}. {:<20} {} adopted, score {}",
            e.rank, e.username, e.total_trees_adopted, e.adoption_score
        );
    }
    out
}

pub fn render_carbon(entries: &[CarbonEntry]) -> String {
    let mut out = String::new();
    for e in entries {
        let _ = writeln!(
            out,
            "{:>3}. {:<20} {} kg CO2 over {} trees",
            e.rank, e.username, e.total_carbon_offset, e.total_trees
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use treekin_carbon::leaderboard::{adopters, carbon, planters, OwnedTree};
    use treekin_carbon::{estimate, TreeMeasurements, UserRecord};
    use treekin_types::{Timestamp, TreeAgeSample};

    fn member(user_id: u64, username: &str, updates: &[u32]) -> UserRecord {
        UserRecord {
            user_id,
            username: username.to_string(),
            active: true,
            joined_at: Timestamp::from_secs(user_id as i64),
            trees: updates
                .iter()
                .map(|&growth_updates| OwnedTree { growth_updates })
                .collect(),
            trees_adopted: 0,
            credits_spent: 0.0,
        }
    }

    #[test]
    fn breakdown_lines_use_compact_amounts() {
        let b = TreditsBreakdown::from_parts(30, 25);
        let text = render_breakdown(&b);
        assert!(text.contains("Total Tredits     1.5k"), "{text}");
        assert!(text.contains("+1.5k  (30 trees x 50)"), "{text}");
        assert!(text.contains("+20  (25 kg absorbed, 2 units)"), "{text}");
        assert!(text.contains("O2 released       25 kg (tracked only)"), "{text}");
    }

    #[test]
    fn accrual_rows_flag_unparseable_input() {
        let now = Timestamp::from_secs(1_710_504_000);
        let rows = vec![
            TreeAccrual::new("2024-02-23T12:00:00Z", &TreeAgeSample::new(now.plus_days(-21)), now),
            TreeAccrual::new("soon", &TreeAgeSample::unknown(), now),
        ];
        let text = render_accruals(&rows);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("age 3w 0d"), "{}", lines[0]);
        assert!(lines[0].ends_with("3 kg"), "{}", lines[0]);
        assert!(lines[1].contains("\"soon\"  unparseable, 0 kg"), "{}", lines[1]);
    }

    #[test]
    fn planter_board_lines() {
        let users = [member(1, "cedar", &[0, 0]), member(2, "alder", &[2, 1])];
        let text = render_planters(&planters(&users, 10));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "  1. alder                2 trees, 3 updates");
        assert_eq!(lines[1], "  2. cedar                2 trees, 0 updates");
    }

    #[test]
    fn adopter_board_lines() {
        let mut birch = member(3, "birch", &[]);
        birch.trees_adopted = 3;
        birch.credits_spent = 5.0;
        let text = render_adopters(&adopters(&[birch], 10).unwrap());
        assert_eq!(text, "  1. birch                3 adopted, score 32.5\n");
    }

    #[test]
    fn carbon_board_lines() {
        let users = [member(1, "cedar", &[0, 0]), member(2, "alder", &[2, 1])];
        let text = render_carbon(&carbon(&users, 10));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "  1. alder                11.5 kg CO2 over 2 trees");
        assert_eq!(lines[1], "  2. cedar                10 kg CO2 over 2 trees");
    }

    #[test]
    fn empty_boards_render_nothing() {
        assert_eq!(render_planters(&[]), "");
        assert_eq!(render_adopters(&[]), "");
        assert_eq!(render_carbon(&[]), "");
    }

    #[test]
    fn estimate_line() {
        let e = estimate(&TreeMeasurements {
            species: Some("oak".into()),
            age_months: Some(24),
            height_cm: Some(200.0),
        })
        .unwrap();
        assert_eq!(
            render_estimate(&e),
            "oak: 22 kg CO2/year, worth 2.2 Tredits (formula_v1)\n"
        );
    }
}
