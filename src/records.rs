use std::collections::HashMap;

use chrono::NaiveDate;

/// Locale-free result alphabet. Display translation belongs to the report
/// layer; the engine only ever sees these three symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Win,
    Loss,
    Draw,
}

impl MatchOutcome {
    pub fn from_goals(scored: u32, conceded: u32) -> Self {
        if scored > conceded {
            MatchOutcome::Win
        } else if scored < conceded {
            MatchOutcome::Loss
        } else {
            MatchOutcome::Draw
        }
    }

    pub fn as_char(self) -> char {
        match self {
            MatchOutcome::Win => 'W',
            MatchOutcome::Loss => 'L',
            MatchOutcome::Draw => 'D',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'W' => Some(MatchOutcome::Win),
            'L' => Some(MatchOutcome::Loss),
            'D' => Some(MatchOutcome::Draw),
            _ => None,
        }
    }
}

/// Which side of the fixture a quantity refers to. Doubles as the venue
/// filter for the stats aggregator and as the team tag on training rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

/// One finished match from a team's own perspective. The API layer
/// produces these in chronological order, at most 30 per team.
#[derive(Debug, Clone)]
pub struct MatchRecord {
    pub date: NaiveDate,
    pub is_home: bool,
    pub goals_scored: u32,
    pub goals_conceded: u32,
    pub opponent_id: u32,
    pub opponent_name: String,
    pub result: MatchOutcome,
}

#[derive(Debug, Clone)]
pub struct StandingRow {
    pub played: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: i32,
    pub rank: u32,
    /// Recent results, most recent last as the league publishes them.
    /// `None` when the table does not carry form.
    pub form: Option<Vec<MatchOutcome>>,
}

/// Standings split by context. The strength model reads the home and away
/// tables; the report layer reads the total table for rank and points.
#[derive(Debug, Clone, Default)]
pub struct StandingsTables {
    pub total: HashMap<u32, StandingRow>,
    pub home: HashMap<u32, StandingRow>,
    pub away: HashMap<u32, StandingRow>,
}

/// Venue-weighted rolling metrics for one team, recomputed per request.
#[derive(Debug, Clone)]
pub struct WeightedStats {
    pub avg_scored: f64,
    pub avg_conceded: f64,
    pub win_rate: f64,
    pub raw_venue_scored: f64,
    pub raw_venue_win: f64,
    pub last_match_date: NaiveDate,
    /// Up to 5 results, most recent first.
    pub form: Vec<MatchOutcome>,
}

/// One row of the regression training table.
#[derive(Debug, Clone, Copy)]
pub struct TrainingSample {
    pub team_type: Side,
    pub is_home: bool,
    pub rolling_scored: f64,
    pub rolling_conceded: f64,
    pub target_goals: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct PredictionResult {
    pub statistical_home_xg: f64,
    pub statistical_away_xg: f64,
    pub regression_home_xg: f64,
    pub regression_away_xg: f64,
    pub final_home_xg: f64,
    pub final_away_xg: f64,
    pub adjusted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_from_goals_covers_all_cases() {
        assert_eq!(MatchOutcome::from_goals(2, 1), MatchOutcome::Win);
        assert_eq!(MatchOutcome::from_goals(0, 3), MatchOutcome::Loss);
        assert_eq!(MatchOutcome::from_goals(1, 1), MatchOutcome::Draw);
    }

    #[test]
    fn outcome_char_round_trip() {
        for o in [MatchOutcome::Win, MatchOutcome::Loss, MatchOutcome::Draw] {
            assert_eq!(MatchOutcome::from_char(o.as_char()), Some(o));
        }
        assert_eq!(MatchOutcome::from_char('?'), None);
    }
}
