use std::collections::HashMap;

use crate::records::{StandingRow, StandingsTables};

// Priors reflect an assumed home advantage; used whenever the standings
// cannot support a league average or a team is missing from a table.
const PRIOR_HOME_XG: f64 = 1.5;
const PRIOR_AWAY_XG: f64 = 1.0;

/// Attack/defense strength baseline from the context-split standings.
///
/// Each team's per-game goal rates are normalized against the relevant
/// league average and combined into expected goals per side. Every
/// degenerate input has a defined numeric result; this never fails.
pub fn baseline_xg(tables: &StandingsTables, home_id: u32, away_id: u32) -> (f64, f64) {
    if tables.home.is_empty() || tables.away.is_empty() {
        return (PRIOR_HOME_XG, PRIOR_AWAY_XG);
    }

    let league_avg_home = league_goal_rate(&tables.home).unwrap_or(PRIOR_HOME_XG);
    let league_avg_away = league_goal_rate(&tables.away).unwrap_or(PRIOR_AWAY_XG);

    let (Some(home_row), Some(away_row)) = (tables.home.get(&home_id), tables.away.get(&away_id))
    else {
        return (PRIOR_HOME_XG, PRIOR_AWAY_XG);
    };

    let home_attack = strength_ratio(home_row.goals_for, home_row.played, league_avg_home);
    let away_defense = strength_ratio(away_row.goals_against, away_row.played, league_avg_home);
    let away_attack = strength_ratio(away_row.goals_for, away_row.played, league_avg_away);
    let home_defense = strength_ratio(home_row.goals_against, home_row.played, league_avg_away);

    let home_xg = home_attack * away_defense * league_avg_home;
    let away_xg = away_attack * home_defense * league_avg_away;
    (home_xg, away_xg)
}

fn league_goal_rate(table: &HashMap<u32, StandingRow>) -> Option<f64> {
    let goals: u32 = table.values().map(|row| row.goals_for).sum();
    let games: u32 = table.values().map(|row| row.played).sum();
    if games == 0 {
        return None;
    }
    Some(goals as f64 / games as f64)
}

// Per-game rate over the league average, neutral when no games played.
fn strength_ratio(goals: u32, played: u32, league_avg: f64) -> f64 {
    if played == 0 {
        return 1.0;
    }
    (goals as f64 / played as f64) / league_avg
}
