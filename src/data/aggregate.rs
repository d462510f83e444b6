use std::cmp::Reverse;
use std::collections::BTreeMap;

use super::model::InningsRecord;

// ---------------------------------------------------------------------------
// Summary metrics
// ---------------------------------------------------------------------------

/// The three headline metrics of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Number of innings in the filtered view.
    pub centuries: usize,
    /// Sum of all scores in the view.
    pub total_score: u32,
    /// Mean score rounded to 2 decimals; `None` for the empty view.
    pub average_score: Option<f64>,
}

impl Summary {
    pub fn of(rows: &[&InningsRecord]) -> Self {
        let centuries = rows.len();
        let total_score: u32 = rows.iter().map(|r| r.score).sum();
        let average_score = if centuries == 0 {
            None
        } else {
            Some(round2(f64::from(total_score) / centuries as f64))
        };
        Summary {
            centuries,
            total_score,
            average_score,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Aggregate tables
// ---------------------------------------------------------------------------

/// Century count per year, ascending. Records without a year are excluded
/// from this table only.
pub fn centuries_by_year(rows: &[&InningsRecord]) -> Vec<(i32, u32)> {
    let mut map: BTreeMap<i32, u32> = BTreeMap::new();
    for rec in rows {
        if let Some(year) = rec.year {
            *map.entry(year).or_default() += 1;
        }
    }
    map.into_iter().collect()
}

/// Century count per opponent, first-appearance order.
pub fn centuries_by_opponent(rows: &[&InningsRecord]) -> Vec<(String, u32)> {
    let mut table: Vec<(String, u32)> = Vec::new();
    for rec in rows {
        match table.iter_mut().find(|(against, _)| against == &rec.against) {
            Some((_, count)) => *count += 1,
            None => table.push((rec.against.clone(), 1)),
        }
    }
    table
}

/// Total score per format, first-appearance order.
pub fn score_by_format(rows: &[&InningsRecord]) -> Vec<(String, u32)> {
    let mut table: Vec<(String, u32)> = Vec::new();
    for rec in rows {
        match table.iter_mut().find(|(format, _)| format == &rec.format) {
            Some((_, total)) => *total += rec.score,
            None => table.push((rec.format.clone(), rec.score)),
        }
    }
    table
}

/// The `n` highest-scoring innings, descending; ties keep original row order.
pub fn top_scores(rows: &[&InningsRecord], n: usize) -> Vec<InningsRecord> {
    let mut ranked: Vec<&InningsRecord> = rows.to_vec();
    // sort_by_key is stable, so equal scores stay in view order
    ranked.sort_by_key(|r| Reverse(r.score));
    ranked.into_iter().take(n).cloned().collect()
}

/// Mean score per format rounded to 2 decimals, first-appearance order.
pub fn average_score_by_format(rows: &[&InningsRecord]) -> Vec<(String, f64)> {
    let mut sums: Vec<(String, u32, u32)> = Vec::new();
    for rec in rows {
        match sums.iter_mut().find(|(format, _, _)| format == &rec.format) {
            Some((_, total, count)) => {
                *total += rec.score;
                *count += 1;
            }
            None => sums.push((rec.format.clone(), rec.score, 1)),
        }
    }
    sums.into_iter()
        .map(|(format, total, count)| (format, round2(f64::from(total) / f64::from(count))))
        .collect()
}

// ---------------------------------------------------------------------------
// DashboardTables – the six chart feeds
// ---------------------------------------------------------------------------

/// Everything the presentation layer needs to draw the six charts, computed
/// in one pass over the filtered view.
#[derive(Debug, Clone)]
pub struct DashboardTables {
    /// Vertical bar: centuries per year.
    pub centuries_by_year: Vec<(i32, u32)>,
    /// Vertical bar: centuries per opponent.
    pub centuries_by_opponent: Vec<(String, u32)>,
    /// Pie: total score per format.
    pub score_by_format: Vec<(String, u32)>,
    /// Horizontal bar: the ten highest scores.
    pub top_scores: Vec<InningsRecord>,
    /// Vertical bar: average score per format.
    pub average_score_by_format: Vec<(String, f64)>,
    /// Pie: century count per opponent. Same definition as
    /// `centuries_by_opponent`, kept as its own output because it feeds a
    /// different chart type.
    pub opponent_share: Vec<(String, u32)>,
}

impl DashboardTables {
    /// Number of innings shown in the top-scores chart.
    pub const TOP_N: usize = 10;

    pub fn compute(rows: &[&InningsRecord]) -> Self {
        DashboardTables {
            centuries_by_year: centuries_by_year(rows),
            centuries_by_opponent: centuries_by_opponent(rows),
            score_by_format: score_by_format(rows),
            top_scores: top_scores(rows, Self::TOP_N),
            average_score_by_format: average_score_by_format(rows),
            opponent_share: centuries_by_opponent(rows),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
