use crate::records::{MatchRecord, Side, TrainingSample};

const ROLLING_WINDOW: usize = 5;

/// Training table for the regression component.
///
/// Each team's history contributes one row per match that has at least one
/// earlier match: the features are rolling means over the up-to-5 matches
/// strictly before it, so a row never sees its own outcome.
pub fn training_table(
    home_history: &[MatchRecord],
    away_history: &[MatchRecord],
) -> Vec<TrainingSample> {
    let mut table = Vec::new();
    push_team_rows(&mut table, home_history, Side::Home);
    push_team_rows(&mut table, away_history, Side::Away);
    table
}

fn push_team_rows(table: &mut Vec<TrainingSample>, history: &[MatchRecord], team_type: Side) {
    for (i, record) in history.iter().enumerate() {
        // The earliest match has no prior window and is dropped.
        if i == 0 {
            continue;
        }
        let start = i.saturating_sub(ROLLING_WINDOW);
        let window = &history[start..i];
        table.push(TrainingSample {
            team_type,
            is_home: record.is_home,
            rolling_scored: mean(window.iter().map(|m| m.goals_scored)),
            rolling_conceded: mean(window.iter().map(|m| m.goals_conceded)),
            target_goals: record.goals_scored as f64,
        });
    }
}

fn mean(values: impl Iterator<Item = u32>) -> f64 {
    let mut sum = 0u32;
    let mut n = 0usize;
    for v in values {
        sum += v;
        n += 1;
    }
    if n == 0 { 0.0 } else { sum as f64 / n as f64 }
}
