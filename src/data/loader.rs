use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{CenturyDataset, InningsRecord};

// ---------------------------------------------------------------------------
// LoadError
// ---------------------------------------------------------------------------

/// Failures while loading the innings table.
///
/// A load either fully succeeds or fully fails: there is no row-level
/// recovery, since the dataset is small and hand-curated.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The path does not resolve to a readable file.
    #[error("data source not found: {path}")]
    DataSourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A required column is absent, a row fails to decode, or a score cannot
    /// be reduced to an integer. `row` is the 1-based data row; 0 denotes
    /// the header.
    #[error("malformed row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    /// File extension not recognised by the loader.
    #[error("unsupported file extension: .{extension}")]
    UnsupportedFormat { extension: String },
}

fn malformed(row: usize, reason: impl Into<String>) -> LoadError {
    LoadError::MalformedRow {
        row,
        reason: reason.into(),
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load an innings dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with `Format`, `Against`, `Score`, `Date`/`Year`
/// * `.json` – array of objects with the same keys
pub fn load_file(path: &Path) -> Result<CenturyDataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(LoadError::UnsupportedFormat {
            extension: other.to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Raw row shape + normalization (shared by both loaders)
// ---------------------------------------------------------------------------

/// One source row before normalization. Everything is kept textual so both
/// the CSV and JSON paths funnel through [`normalize`].
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Format")]
    format: String,
    #[serde(rename = "Against")]
    against: String,
    #[serde(rename = "Score")]
    score: String,
    #[serde(rename = "Date", default)]
    date: Option<String>,
    #[serde(rename = "Year", default)]
    year: Option<String>,
}

fn normalize(raw: RawRecord, row: usize) -> Result<InningsRecord, LoadError> {
    let score = parse_score(&raw.score)
        .ok_or_else(|| malformed(row, format!("score '{}' is not an integer", raw.score)))?;

    let date = raw
        .date
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(parse_date);

    // An explicit Year value wins; otherwise the year comes from the date.
    let year = raw
        .year
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(parse_year)
        .or_else(|| date.map(|d| d.year()));

    Ok(InningsRecord {
        format: raw.format.trim().to_string(),
        against: raw.against.trim().to_string(),
        date,
        year,
        score,
    })
}

/// Strip at most one trailing not-out marker, then parse base-10.
fn parse_score(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_suffix('*').unwrap_or(trimmed).trim_end();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Year values may arrive as integers or as floats from dataframe exports
/// (`"2017.0"`).
fn parse_year(raw: &str) -> Option<i32> {
    raw.parse::<i32>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().map(|f| f as i32))
}

/// Accepted date layouts, ISO first.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%d %b %Y", "%B %d, %Y"];

fn parse_date(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<CenturyDataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::DataSourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| malformed(0, e.to_string()))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    for required in ["Format", "Against", "Score"] {
        if !headers.iter().any(|h| h == required) {
            return Err(malformed(0, format!("required column '{required}' is missing")));
        }
    }
    if !headers.iter().any(|h| h == "Date" || h == "Year") {
        return Err(malformed(0, "neither 'Date' nor 'Year' column is present"));
    }

    let mut records = Vec::new();
    for (i, result) in reader.deserialize::<RawRecord>().enumerate() {
        let row = i + 1;
        let raw = result.map_err(|e| malformed(row, e.to_string()))?;
        records.push(normalize(raw, row)?);
    }

    log::debug!("parsed {} rows from {}", records.len(), path.display());
    Ok(CenturyDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   { "Format": "ODI", "Against": "SL", "Date": "2017-08-31", "Score": "131" },
///   ...
/// ]
/// ```
///
/// `Score` and `Year` values may be JSON strings or numbers.
fn load_json(path: &Path) -> Result<CenturyDataset, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::DataSourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let root: JsonValue = serde_json::from_str(&text).map_err(|e| malformed(0, e.to_string()))?;

    let rows = root
        .as_array()
        .ok_or_else(|| malformed(0, "expected a top-level JSON array"))?;

    let mut records = Vec::with_capacity(rows.len());
    for (i, value) in rows.iter().enumerate() {
        let row = i + 1;
        let obj = value
            .as_object()
            .ok_or_else(|| malformed(row, "not a JSON object"))?;

        let raw = RawRecord {
            format: require_string(obj, "Format", row)?,
            against: require_string(obj, "Against", row)?,
            score: scalar_to_string(obj.get("Score"))
                .ok_or_else(|| malformed(row, "missing or invalid 'Score' value"))?,
            date: obj.get("Date").and_then(JsonValue::as_str).map(str::to_string),
            year: scalar_to_string(obj.get("Year")),
        };
        records.push(normalize(raw, row)?);
    }

    log::debug!("parsed {} rows from {}", records.len(), path.display());
    Ok(CenturyDataset::from_records(records))
}

fn require_string(
    obj: &serde_json::Map<String, JsonValue>,
    key: &str,
    row: usize,
) -> Result<String, LoadError> {
    obj.get(key)
        .and_then(JsonValue::as_str)
        .map(str::to_string)
        .ok_or_else(|| malformed(row, format!("missing or invalid '{key}' value")))
}

fn scalar_to_string(value: Option<&JsonValue>) -> Option<String> {
    match value {
        Some(JsonValue::String(s)) => Some(s.clone()),
        Some(JsonValue::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn temp_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    // ── parse_score / parse_date ────────────────────────────────────────────

    #[test]
    fn test_parse_score_strips_not_out_marker() {
        assert_eq!(parse_score("149*"), Some(149));
        assert_eq!(parse_score("254"), Some(254));
        assert_eq!(parse_score(" 113* "), Some(113));
    }

    #[test]
    fn test_parse_score_rejects_garbage() {
        assert_eq!(parse_score("1x"), None);
        assert_eq!(parse_score("*"), None);
        assert_eq!(parse_score(""), None);
        assert_eq!(parse_score("-5"), None);
    }

    #[test]
    fn test_parse_date_formats() {
        let expect = NaiveDate::from_ymd_opt(2016, 12, 10).unwrap();
        assert_eq!(parse_date("2016-12-10"), Some(expect));
        assert_eq!(parse_date("10/12/2016"), Some(expect));
        assert_eq!(parse_date("10 Dec 2016"), Some(expect));
        assert_eq!(parse_date("not a date"), None);
    }

    // ── CSV path ────────────────────────────────────────────────────────────

    #[test]
    fn test_load_csv_normalizes_scores_and_years() {
        let file = temp_file(
            ".csv",
            "Format,Against,Date,Score\n\
             ODI,SL,2012-07-31,128*\n\
             Test,ENG,2016-12-10,235\n",
        );
        let ds = load_file(file.path()).unwrap();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].score, 128);
        assert_eq!(ds.records[0].year, Some(2012));
        assert_eq!(ds.records[1].score, 235);
        assert_eq!(ds.records[1].year, Some(2016));
        assert_eq!(ds.formats, vec!["ODI", "Test"]);
    }

    #[test]
    fn test_load_csv_year_column_wins_over_date() {
        let file = temp_file(
            ".csv",
            "Format,Against,Date,Year,Score\nODI,SL,2017-08-31,2015,131\n",
        );
        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.records[0].year, Some(2015));
    }

    #[test]
    fn test_load_csv_unparsable_date_retains_record() {
        let file = temp_file(
            ".csv",
            "Format,Against,Date,Score\nODI,SL,???,107\nODI,SL,2012-02-28,133\n",
        );
        let ds = load_file(file.path()).unwrap();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].year, None);
        assert_eq!(ds.years, vec![2012]);
    }

    #[test]
    fn test_load_csv_malformed_score_aborts() {
        let file = temp_file(
            ".csv",
            "Format,Against,Date,Score\nODI,SL,2012-07-31,128\nTest,ENG,2016-12-10,1x\n",
        );
        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::MalformedRow { row: 2, .. }));
    }

    #[test]
    fn test_load_csv_missing_required_column() {
        let file = temp_file(".csv", "Format,Against,Date\nODI,SL,2012-07-31\n");
        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::MalformedRow { row: 0, .. }));
    }

    #[test]
    fn test_load_csv_requires_date_or_year() {
        let file = temp_file(".csv", "Format,Against,Score\nODI,SL,107\n");
        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::MalformedRow { row: 0, .. }));
    }

    #[test]
    fn test_missing_file_is_data_source_not_found() {
        let err = load_file(Path::new("/no/such/dir/centuries.csv")).unwrap_err();
        assert!(matches!(err, LoadError::DataSourceNotFound { .. }));
    }

    #[test]
    fn test_unsupported_extension() {
        let file = temp_file(".txt", "Format,Against,Date,Score\n");
        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat { .. }));
    }

    // ── JSON path ───────────────────────────────────────────────────────────

    #[test]
    fn test_load_json_accepts_string_and_numeric_scores() {
        let file = temp_file(
            ".json",
            r#"[
                {"Format": "ODI", "Against": "SL", "Date": "2012-07-31", "Score": "128*"},
                {"Format": "Test", "Against": "ENG", "Date": "2016-12-10", "Score": 235}
            ]"#,
        );
        let ds = load_file(file.path()).unwrap();

        assert_eq!(ds.records[0].score, 128);
        assert_eq!(ds.records[1].score, 235);
        assert_eq!(ds.records[1].year, Some(2016));
    }

    #[test]
    fn test_load_json_matches_csv() {
        let csv = temp_file(
            ".csv",
            "Format,Against,Date,Score\nODI,SL,2012-07-31,128*\n",
        );
        let json = temp_file(
            ".json",
            r#"[{"Format": "ODI", "Against": "SL", "Date": "2012-07-31", "Score": "128*"}]"#,
        );
        assert_eq!(
            load_file(csv.path()).unwrap().records,
            load_file(json.path()).unwrap().records
        );
    }

    #[test]
    fn test_load_json_missing_key_is_malformed() {
        let file = temp_file(".json", r#"[{"Against": "SL", "Score": "128"}]"#);
        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::MalformedRow { row: 1, .. }));
    }
}
