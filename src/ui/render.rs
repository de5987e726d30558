//! Terminal rendering of the catalog, the feed and the session metrics.
//! Every function returns the text so handlers decide where it goes.

use crate::core::engine::{Progress, Stats, TARGET_UNITS};
use crate::models::{CheckIn, DrinkType};
use crate::utils::colors::{GREY, color_for_percentage, colorize_optional, paint};
use crate::utils::formatting::{bold, format_pace, format_units, units_label};
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_elapsed, time_ago};
use chrono::{DateTime, Utc};

const BAR_WIDTH: usize = 24;
pub const EMPTY_FEED: &str = "No check-ins yet. Start your bakdag to begin!";

pub fn drinks_grid(drinks: &[DrinkType]) -> String {
    let mut table = Table::new(vec![
        Column::new("#", 2),
        Column::new("", 2),
        Column::new("Drink", 12),
        Column::new("Units", 8),
    ]);

    for (i, d) in drinks.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            d.emoji.clone(),
            d.name.clone(),
            units_label(d.units),
        ]);
    }

    table.render()
}

fn feed_card(c: &CheckIn, now: DateTime<Utc>, separator: &str) -> String {
    let when = format!("· {}", time_ago(c.timestamp, now));
    let mut out = format!("👤 You {}\n", paint(GREY, &when));

    let photo = if c.photo_data.is_some() { "  📷" } else { "" };
    out.push_str(&format!(
        "   {}  {}{}\n",
        bold(&c.drink_name),
        units_label(c.units),
        photo
    ));

    if let Some(notes) = &c.notes {
        out.push_str(&format!("   {notes}\n"));
    }

    out.push_str(&separator.repeat(40));
    out.push('\n');
    out
}

/// Newest first; `limit == 0` shows everything.
pub fn feed(check_ins: &[CheckIn], now: DateTime<Utc>, limit: usize, separator: &str) -> String {
    if check_ins.is_empty() {
        return format!("{EMPTY_FEED}\n");
    }

    let take = if limit == 0 { check_ins.len() } else { limit };
    check_ins
        .iter()
        .take(take)
        .map(|c| feed_card(c, now, separator))
        .collect()
}

pub fn progress_bar(p: &Progress) -> String {
    let filled = ((p.percentage / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    let color = color_for_percentage(p.percentage);

    format!(
        "[{}{}] {} / {} units ({:.1}%)  pace {} u/h",
        paint(color, &"█".repeat(filled)),
        "░".repeat(BAR_WIDTH - filled),
        format_units(p.total_units),
        format_units(TARGET_UNITS),
        p.percentage,
        colorize_optional(&format_pace(p.pace)),
    )
}

pub fn stats_panel(s: &Stats) -> String {
    let rows = [
        ("Total units", format_units(s.total_units)),
        ("Pace (u/h)", colorize_optional(&format_pace(s.pace))),
        (
            "Time elapsed",
            format_elapsed(s.elapsed_hours, s.elapsed_minutes),
        ),
        ("Check-ins", s.checkin_count.to_string()),
        (
            "Projected finish",
            colorize_optional(&s.projected_finish.to_string()),
        ),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        out.push_str(&format!("  {:<17}{}\n", format!("{label}:"), value));
    }
    out.push('\n');
    out.push_str(&format!("  {}\n", s.status));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::{ProjectedFinish, StatusBand};
    use crate::models::drink::default_catalog;
    use chrono::{Duration, TimeZone};

    #[test]
    fn grid_lists_catalog_in_order() {
        let grid = drinks_grid(&default_catalog());
        let lines: Vec<_> = grid.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[1].contains("Standard Lager") && lines[1].contains("1 unit"));
        assert!(lines[2].contains("IPA") && lines[2].contains("1.5 units"));
        assert!(lines[4].starts_with("4 "));
    }

    #[test]
    fn feed_empty_and_limited() {
        let now = Utc.with_ymd_and_hms(2025, 6, 7, 22, 0, 0).unwrap();
        assert_eq!(feed(&[], now, 0, "-"), format!("{EMPTY_FEED}\n"));

        let drinks = default_catalog();
        let log: Vec<_> = (0..3)
            .map(|i| {
                CheckIn::new(
                    &drinks[i],
                    Some(format!("note {i}")),
                    None,
                    now - Duration::minutes(5 * i as i64),
                )
            })
            .collect();

        let all = feed(&log, now, 0, "-");
        assert!(all.contains("note 2") && all.contains("10m ago"));

        let one = feed(&log, now, 1, "-");
        assert!(one.contains("Standard Lager") && one.contains("Just now"));
        assert!(!one.contains("IPA"));
    }

    #[test]
    fn bar_fills_proportionally() {
        let p = Progress {
            total_units: 12.0,
            percentage: 50.0,
            pace: 2.0,
        };
        let bar = progress_bar(&p);
        assert_eq!(bar.matches('█').count(), 12);
        assert_eq!(bar.matches('░').count(), 12);
        assert!(bar.contains("12 / 24 units (50.0%)"));
    }

    #[test]
    fn stats_panel_shows_all_figures() {
        let s = Stats {
            total_units: 3.5,
            pace: 1.75,
            elapsed_hours: 2,
            elapsed_minutes: 0,
            checkin_count: 2,
            projected_finish: ProjectedFinish::Unknown,
            status: StatusBand::WarmingUp,
        };
        let panel = stats_panel(&s);
        assert!(panel.contains("3.5"));
        assert!(panel.contains("1.75"));
        assert!(panel.contains("2h 0m"));
        assert!(panel.contains("--:--"));
        assert!(panel.contains("Just getting warmed up!"));
    }
}
