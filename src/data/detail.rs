//! Detail card for one tournament edition.

use super::record::Record;

/// Fixed-structure text summary of a [`Record`]: a heading (the edition) and
/// labelled lines in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailCard {
    pub heading: String,
    pub lines: Vec<(&'static str, String)>,
}

impl DetailCard {
    pub fn from_record(r: &Record) -> Self {
        Self {
            heading: r.edition.clone(),
            lines: vec![
                ("Location", r.location.clone()),
                ("Winner", r.winner.clone()),
                ("Year", r.year.to_string()),
                ("Matches", r.matches.to_string()),
                ("Teams", r.teams.to_string()),
                ("Average Attendance", r.average_attendance.to_string()),
                ("Goals", r.goals.to_string()),
                ("Average Goals", r.average_goals.to_string()),
            ],
        }
    }

    /// `"Label: value"` strings in display order.
    pub fn text_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.lines.iter().map(|(k, v)| format!("{k}: {v}"))
    }

    pub fn value(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|(k, _)| *k == label)
            .map(|(_, v)| v.as_str())
    }
}

impl std::fmt::Display for DetailCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.heading)?;
        for line in self.text_lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_mirrors_record() {
        let r = Record {
            year: 1954,
            edition: "1954 FIFA World Cup Switzerland".into(),
            location: "Switzerland".into(),
            winner: "West Germany".into(),
            teams: 16.0,
            matches: 26.0,
            goals: 140.0,
            average_goals: 5.38,
            average_attendance: 29562.0,
        };
        let card = DetailCard::from_record(&r);
        assert_eq!(card.heading, "1954 FIFA World Cup Switzerland");
        assert_eq!(card.value("Winner"), Some("West Germany"));
        assert_eq!(card.value("Year"), Some("1954"));
        assert_eq!(card.value("Average Goals"), Some("5.38"));
        assert_eq!(card.value("Average Attendance"), Some("29562"));
        let text = card.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "1954 FIFA World Cup Switzerland");
        assert_eq!(lines[1], "Location: Switzerland");
        assert_eq!(lines[8], "Average Goals: 5.38");
        assert_eq!(lines.len(), 9);
    }
}
