use std::io::{self, Write};

use crate::data::model::InningsRecord;
use crate::state::DashboardState;

// ---------------------------------------------------------------------------
// Text dashboard
// ---------------------------------------------------------------------------

/// Width in columns of a full-length bar.
const BAR_WIDTH: usize = 40;

/// Render the whole dashboard for the current state.
///
/// With no dataset loaded, only the status message is printed.
pub fn render<W: Write>(out: &mut W, state: &DashboardState) -> io::Result<()> {
    writeln!(out, "Century Lens – Cricket Centuries Dashboard")?;
    writeln!(out, "==========================================")?;
    writeln!(out)?;

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            let message = state.status_message.as_deref().unwrap_or("No data loaded.");
            writeln!(out, "{message}")?;
            return Ok(());
        }
    };

    let summary = state.summary();
    let tables = state.tables();

    writeln!(out, "Summary  (showing {} of {} innings)", summary.centuries, dataset.len())?;
    writeln!(out, "  Centuries      {}", summary.centuries)?;
    writeln!(out, "  Total score    {}", summary.total_score)?;
    match summary.average_score {
        Some(avg) => writeln!(out, "  Average score  {avg:.2}")?,
        None => writeln!(out, "  Average score  n/a")?,
    }
    writeln!(out)?;

    let by_year: Vec<(String, u32)> = tables
        .centuries_by_year
        .iter()
        .map(|(year, count)| (year.to_string(), *count))
        .collect();
    bar_section(out, "Centuries by year", &by_year)?;
    bar_section(out, "Centuries by opponent", &tables.centuries_by_opponent)?;
    share_section(out, "Score by format (share of total)", &tables.score_by_format)?;
    top_section(out, "Top 10 highest scores", &tables.top_scores)?;
    average_section(out, "Average score by format", &tables.average_score_by_format)?;
    share_section(out, "Centuries by opponent (share)", &tables.opponent_share)?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// One bar row per key, scaled to the table maximum.
fn bar_section<W: Write>(out: &mut W, title: &str, rows: &[(String, u32)]) -> io::Result<()> {
    writeln!(out, "{title}")?;
    if rows.is_empty() {
        writeln!(out, "  (none)")?;
        writeln!(out)?;
        return Ok(());
    }

    let key_width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let max = rows.iter().map(|(_, value)| *value).max().unwrap_or(1);
    let width = BAR_WIDTH;
    for (key, value) in rows {
        let bar = bar(*value, max);
        writeln!(out, "  {key:<key_width$}  {bar:<width$}  {value}")?;
    }
    writeln!(out)?;
    Ok(())
}

/// Key, value, and percentage of the section total (pie feed).
fn share_section<W: Write>(out: &mut W, title: &str, rows: &[(String, u32)]) -> io::Result<()> {
    writeln!(out, "{title}")?;
    let total: u32 = rows.iter().map(|(_, value)| value).sum();
    if total == 0 {
        writeln!(out, "  (none)")?;
        writeln!(out)?;
        return Ok(());
    }

    let key_width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (key, value) in rows {
        let share = f64::from(*value) / f64::from(total) * 100.0;
        writeln!(out, "  {key:<key_width$}  {value:>5}  {share:>5.1}%")?;
    }
    writeln!(out)?;
    Ok(())
}

/// Ranked list of the highest-scoring innings.
fn top_section<W: Write>(out: &mut W, title: &str, rows: &[InningsRecord]) -> io::Result<()> {
    writeln!(out, "{title}")?;
    if rows.is_empty() {
        writeln!(out, "  (none)")?;
        writeln!(out)?;
        return Ok(());
    }

    for (rank, rec) in rows.iter().enumerate() {
        let year = rec
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "----".to_string());
        writeln!(
            out,
            "  {:>2}. {:>3}  vs {:<12} {:<5} {year}",
            rank + 1,
            rec.score,
            rec.against,
            rec.format,
        )?;
    }
    writeln!(out)?;
    Ok(())
}

/// Mean values per key, two decimals.
fn average_section<W: Write>(out: &mut W, title: &str, rows: &[(String, f64)]) -> io::Result<()> {
    writeln!(out, "{title}")?;
    if rows.is_empty() {
        writeln!(out, "  (none)")?;
        writeln!(out)?;
        return Ok(());
    }

    let key_width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (key, value) in rows {
        writeln!(out, "  {key:<key_width$}  {value:>7.2}")?;
    }
    writeln!(out)?;
    Ok(())
}

fn bar(value: u32, max: u32) -> String {
    let len = (value as usize * BAR_WIDTH / max as usize).max(1);
    "█".repeat(len)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CenturyDataset;

    fn record(format: &str, against: &str, year: Option<i32>, score: u32) -> InningsRecord {
        InningsRecord {
            format: format.to_string(),
            against: against.to_string(),
            date: None,
            year,
            score,
        }
    }

    fn rendered(state: &DashboardState) -> String {
        let mut buf = Vec::new();
        render(&mut buf, state).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_render_without_dataset_prints_status() {
        let mut state = DashboardState::default();
        state.status_message = Some("Data file missing.".to_string());
        let text = rendered(&state);

        assert!(text.contains("Data file missing."));
        assert!(!text.contains("Summary"));
    }

    #[test]
    fn test_render_full_dashboard_sections() {
        let mut state = DashboardState::default();
        state.set_dataset(CenturyDataset::from_records(vec![
            record("ODI", "SL", Some(2017), 122),
            record("Test", "AUS", Some(2017), 141),
        ]));
        let text = rendered(&state);

        assert!(text.contains("Centuries by year"));
        assert!(text.contains("Top 10 highest scores"));
        assert!(text.contains("Average score by format"));
        assert!(text.contains("Total score    263"));
    }

    #[test]
    fn test_render_empty_view_uses_na_average() {
        let mut state = DashboardState::default();
        state.set_dataset(CenturyDataset::from_records(vec![record(
            "ODI",
            "SL",
            Some(2017),
            122,
        )]));
        state.select_none(crate::state::Dimension::Format);
        let text = rendered(&state);

        assert!(text.contains("Average score  n/a"));
        assert!(text.contains("(none)"));
    }
}
