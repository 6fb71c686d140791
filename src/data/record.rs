//! Record and Metric: one tournament edition and the plottable fields on it.

use serde::Serialize;

/// One edition of the tournament, as loaded from a CSV row.
///
/// All numeric fields are `f64`: counts (`teams`, `matches`, `goals`) are
/// whole numbers in well-formed input, but leniently coerced input may carry
/// `NaN` in any of them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    #[serde(rename = "YEAR")]
    pub year: i32,
    #[serde(rename = "EDITION")]
    pub edition: String,
    #[serde(rename = "LOCATION")]
    pub location: String,
    #[serde(rename = "WINNER")]
    pub winner: String,
    #[serde(rename = "TEAMS", serialize_with = "serialize_number")]
    pub teams: f64,
    #[serde(rename = "MATCHES", serialize_with = "serialize_number")]
    pub matches: f64,
    #[serde(rename = "GOALS", serialize_with = "serialize_number")]
    pub goals: f64,
    #[serde(rename = "AVERAGE_GOALS", serialize_with = "serialize_number")]
    pub average_goals: f64,
    #[serde(rename = "AVERAGE_ATTENDANCE", serialize_with = "serialize_number")]
    pub average_attendance: f64,
}

/// Whole values are written without a fractional part, as in the input file.
fn serialize_number<S: serde::Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 9.0e15 {
        s.serialize_i64(*v as i64)
    } else {
        s.serialize_f64(*v)
    }
}

/// The numeric field plotted on the y-axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Metric {
    Teams,
    Matches,
    #[default]
    Goals,
    AverageGoals,
    AverageAttendance,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::Teams,
        Metric::Matches,
        Metric::Goals,
        Metric::AverageGoals,
        Metric::AverageAttendance,
    ];

    /// Column name in the input CSV (also used in tooltips).
    pub fn column(&self) -> &'static str {
        match self {
            Metric::Teams => "TEAMS",
            Metric::Matches => "MATCHES",
            Metric::Goals => "GOALS",
            Metric::AverageGoals => "AVERAGE_GOALS",
            Metric::AverageAttendance => "AVERAGE_ATTENDANCE",
        }
    }

    /// Human readable label for selectors and axis titles.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Teams => "Teams",
            Metric::Matches => "Matches",
            Metric::Goals => "Goals",
            Metric::AverageGoals => "Average Goals",
            Metric::AverageAttendance => "Average Attendance",
        }
    }

    pub fn value(&self, record: &Record) -> f64 {
        match self {
            Metric::Teams => record.teams,
            Metric::Matches => record.matches,
            Metric::Goals => record.goals,
            Metric::AverageGoals => record.average_goals,
            Metric::AverageAttendance => record.average_attendance,
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.column())
    }
}

/// Error returned when a string names no known metric.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown metric `{0}`")]
pub struct UnknownMetric(pub String);

impl std::str::FromStr for Metric {
    type Err = UnknownMetric;

    /// Accepts the CSV column name in any case, and the field names in
    /// camelCase or snake_case (`averageGoals`, `average_goals`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "teams" => Ok(Metric::Teams),
            "matches" => Ok(Metric::Matches),
            "goals" => Ok(Metric::Goals),
            "averagegoals" => Ok(Metric::AverageGoals),
            "averageattendance" => Ok(Metric::AverageAttendance),
            _ => Err(UnknownMetric(s.to_string())),
        }
    }
}
