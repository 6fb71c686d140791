//! CSV loading: turns the tournament table into sorted [`Record`]s.
//!
//! Expected header:
//!
//! ```text
//! YEAR,EDITION,LOCATION,WINNER,TEAMS,MATCHES,GOALS,AVERAGE_GOALS,AVERAGE_ATTENDANCE
//! ```
//!
//! `YEAR` must be a 4-digit year. Numeric columns are coerced the way a
//! browser coerces a string to a number: surrounding whitespace is ignored,
//! an empty cell becomes `0` and anything unparsable becomes `NaN`
//! ([`Coercion::Lenient`]) or an error ([`Coercion::Strict`]).

use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;

use super::record::Record;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: invalid YEAR `{value}`")]
    InvalidYear { row: usize, value: String },
    #[error("row {row}: year {year} appears more than once")]
    DuplicateYear { row: usize, year: i32 },
    #[error("row {row}: column {column} is not a number: `{value}`")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error("no data rows")]
    Empty,
}

/// How non-numeric cells in numeric columns are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Coercion {
    /// Unparsable cells become `NaN` and a warning is logged.
    #[default]
    Lenient,
    /// Unparsable cells abort the load.
    Strict,
}

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "YEAR")]
    year: String,
    #[serde(rename = "EDITION")]
    edition: String,
    #[serde(rename = "LOCATION")]
    location: String,
    #[serde(rename = "WINNER")]
    winner: String,
    #[serde(rename = "TEAMS")]
    teams: String,
    #[serde(rename = "MATCHES")]
    matches: String,
    #[serde(rename = "GOALS")]
    goals: String,
    #[serde(rename = "AVERAGE_GOALS")]
    average_goals: String,
    #[serde(rename = "AVERAGE_ATTENDANCE")]
    average_attendance: String,
}

/// Load and parse the CSV file at `path`.
pub fn load_records<P: AsRef<Path>>(path: P, coercion: Coercion) -> Result<Vec<Record>, LoadError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(file, coercion)?;
    tracing::info!(path = %path.display(), records = records.len(), "loaded dataset");
    Ok(records)
}

/// Parse CSV from any reader. The result has one record per data row and is
/// sorted ascending by year.
pub fn parse_records<R: Read>(reader: R, coercion: Coercion) -> Result<Vec<Record>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut seen = HashSet::new();
    let mut records = Vec::new();
    for (idx, result) in rdr.deserialize::<RawRow>().enumerate() {
        let row = idx + 1;
        let raw = result?;
        let year = parse_year(&raw.year).ok_or_else(|| LoadError::InvalidYear {
            row,
            value: raw.year.clone(),
        })?;
        if !seen.insert(year) {
            return Err(LoadError::DuplicateYear { row, year });
        }

        let num = |column: &'static str, value: &str| -> Result<f64, LoadError> {
            match coerce_number(value) {
                Some(v) => Ok(v),
                None => match coercion {
                    Coercion::Strict => Err(LoadError::InvalidNumber {
                        row,
                        column,
                        value: value.to_string(),
                    }),
                    Coercion::Lenient => {
                        tracing::warn!(row, column, value, "non-numeric cell coerced to NaN");
                        Ok(f64::NAN)
                    }
                },
            }
        };

        records.push(Record {
            year,
            teams: num("TEAMS", &raw.teams)?,
            matches: num("MATCHES", &raw.matches)?,
            goals: num("GOALS", &raw.goals)?,
            average_goals: num("AVERAGE_GOALS", &raw.average_goals)?,
            average_attendance: num("AVERAGE_ATTENDANCE", &raw.average_attendance)?,
            edition: raw.edition,
            location: raw.location,
            winner: raw.winner,
        });
    }

    if records.is_empty() {
        return Err(LoadError::Empty);
    }
    records.sort_by_key(|r| r.year);
    Ok(records)
}

/// A 4-digit year that is also a valid calendar date.
fn parse_year(s: &str) -> Option<i32> {
    let s = s.trim();
    if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = s.parse().ok()?;
    NaiveDate::from_ymd_opt(year, 1, 1).map(|_| year)
}

/// String to number with browser semantics: blank is zero, `Infinity` is
/// accepted, unsigned `0x`/`0o`/`0b` literals are read in their radix and
/// anything else that does not parse as a decimal is `None`.
pub fn coerce_number(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(0.0);
    }
    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return radix_literal(&s[2..], radix);
    }
    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    // Rust also accepts "inf"/"nan"; restrict to plain decimal notation.
    if !s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }
    s.parse::<f64>().ok()
}

fn radix_literal(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0, |acc, c| {
        c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "YEAR,EDITION,LOCATION,WINNER,TEAMS,MATCHES,GOALS,AVERAGE_GOALS,AVERAGE_ATTENDANCE\n";

    fn csv(rows: &[&str]) -> String {
        let mut s = HEADER.to_string();
        for r in rows {
            s.push_str(r);
            s.push('\n');
        }
        s
    }

    #[test]
    fn sorts_by_year_and_keeps_every_row() {
        let data = csv(&[
            "1938,1938 FIFA World Cup France,France,Italy,15,18,84,4.67,20872",
            "1930,1930 FIFA World Cup Uruguay,Uruguay,Uruguay,13,18,70,3.89,32808",
            "1934,1934 FIFA World Cup Italy,Italy,Italy,16,17,70,4.12,21352",
        ]);
        let records = parse_records(data.as_bytes(), Coercion::Lenient).unwrap();
        let years: Vec<i32> = records.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![1930, 1934, 1938]);
        assert_eq!(records[0].winner, "Uruguay");
        assert_eq!(records[2].average_goals, 4.67);
    }

    #[test]
    fn lenient_coercion_yields_nan() {
        let data = csv(&["1950,1950 FIFA World Cup Brazil,Brazil,Uruguay,13,22,n/a,4,47511"]);
        let records = parse_records(data.as_bytes(), Coercion::Lenient).unwrap();
        assert!(records[0].goals.is_nan());
        assert_eq!(records[0].average_goals, 4.0);
    }

    #[test]
    fn strict_coercion_rejects_bad_numbers() {
        let data = csv(&["1950,1950 FIFA World Cup Brazil,Brazil,Uruguay,13,22,n/a,4,47511"]);
        let err = parse_records(data.as_bytes(), Coercion::Strict).unwrap_err();
        match err {
            LoadError::InvalidNumber { row, column, value } => {
                assert_eq!(row, 1);
                assert_eq!(column, "GOALS");
                assert_eq!(value, "n/a");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn blank_numeric_cell_is_zero() {
        assert_eq!(coerce_number("  "), Some(0.0));
        assert_eq!(coerce_number(" 12 "), Some(12.0));
        assert_eq!(coerce_number("1e3"), Some(1000.0));
        assert_eq!(coerce_number("inf"), None);
        assert_eq!(coerce_number("NaN"), None);
    }

    #[test]
    fn prefixed_literals_use_their_radix() {
        assert_eq!(coerce_number("0x10"), Some(16.0));
        assert_eq!(coerce_number(" 0XfF "), Some(255.0));
        assert_eq!(coerce_number("0o17"), Some(15.0));
        assert_eq!(coerce_number("0b101"), Some(5.0));
        assert_eq!(coerce_number("0x"), None);
        assert_eq!(coerce_number("0b102"), None);
        assert_eq!(coerce_number("-0x10"), None);
    }

    #[test]
    fn rejects_bad_and_duplicate_years() {
        let data = csv(&["19x0,a,b,c,1,1,1,1,1"]);
        assert!(matches!(
            parse_records(data.as_bytes(), Coercion::Lenient),
            Err(LoadError::InvalidYear { row: 1, .. })
        ));

        let data = csv(&["1930,a,b,c,1,1,1,1,1", "1930,d,e,f,1,1,1,1,1"]);
        assert!(matches!(
            parse_records(data.as_bytes(), Coercion::Lenient),
            Err(LoadError::DuplicateYear { row: 2, year: 1930 })
        ));
    }

    #[test]
    fn header_only_is_empty() {
        assert!(matches!(
            parse_records(HEADER.as_bytes(), Coercion::Lenient),
            Err(LoadError::Empty)
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_records("/nonexistent/fifa.csv", Coercion::Lenient).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/fifa.csv"));
    }
}
