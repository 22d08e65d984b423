use crate::records::MatchRecord;

/// Direct encounters against `opponent_id`, most recent first.
///
/// Pure filter + stable sort; records sharing a date keep the order they
/// had in the source history.
pub fn head_to_head(history: &[MatchRecord], opponent_id: u32) -> Vec<MatchRecord> {
    let mut encounters: Vec<MatchRecord> = history
        .iter()
        .filter(|m| m.opponent_id == opponent_id)
        .cloned()
        .collect();
    encounters.sort_by(|a, b| b.date.cmp(&a.date));
    encounters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::MatchOutcome;
    use chrono::NaiveDate;

    fn record(day: u32, opponent_id: u32, name: &str) -> MatchRecord {
        MatchRecord {
            date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            is_home: true,
            goals_scored: 1,
            goals_conceded: 0,
            opponent_id,
            opponent_name: name.to_string(),
            result: MatchOutcome::Win,
        }
    }

    #[test]
    fn filters_and_sorts_descending() {
        let history = vec![
            record(1, 7, "a"),
            record(5, 8, "b"),
            record(9, 7, "c"),
            record(3, 7, "d"),
        ];
        let h2h = head_to_head(&history, 7);
        let names: Vec<&str> = h2h.iter().map(|m| m.opponent_name.as_str()).collect();
        assert_eq!(names, vec!["c", "d", "a"]);
    }

    #[test]
    fn equal_dates_keep_source_order() {
        let history = vec![record(4, 7, "first"), record(4, 7, "second")];
        let h2h = head_to_head(&history, 7);
        assert_eq!(h2h[0].opponent_name, "first");
        assert_eq!(h2h[1].opponent_name, "second");
    }

    #[test]
    fn no_encounters_is_empty() {
        let history = vec![record(1, 8, "b")];
        assert!(head_to_head(&history, 7).is_empty());
    }
}
