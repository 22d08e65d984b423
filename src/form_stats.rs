use crate::records::{MatchOutcome, MatchRecord, Side, WeightedStats};

// Soft venue split: pure venue stats are noisy on small samples, pure
// overall stats ignore home/away asymmetry.
const VENUE_WEIGHT: f64 = 0.7;
const OVERALL_WEIGHT: f64 = 0.3;

const FORM_LEN: usize = 5;

/// Venue-weighted rolling metrics for one team's history.
///
/// Returns `None` for an empty history; callers must treat that as
/// insufficient data and abort the prediction rather than substitute
/// defaults.
pub fn weighted_stats(history: &[MatchRecord], venue: Side) -> Option<WeightedStats> {
    if history.is_empty() {
        return None;
    }

    let (overall_scored, overall_conceded, overall_win) = mean_metrics(history.iter());

    let at_venue = |m: &&MatchRecord| match venue {
        Side::Home => m.is_home,
        Side::Away => !m.is_home,
    };
    let venue_count = history.iter().filter(at_venue).count();
    let (venue_scored, venue_conceded, venue_win) = if venue_count == 0 {
        (overall_scored, overall_conceded, overall_win)
    } else {
        mean_metrics(history.iter().filter(at_venue))
    };

    let blend = |v: f64, o: f64| VENUE_WEIGHT * v + OVERALL_WEIGHT * o;

    // History is chronological, so the tail is the recent form.
    let form: Vec<MatchOutcome> = history
        .iter()
        .rev()
        .take(FORM_LEN)
        .map(|m| m.result)
        .collect();

    let last_match_date = history.last().map(|m| m.date)?;

    Some(WeightedStats {
        avg_scored: blend(venue_scored, overall_scored),
        avg_conceded: blend(venue_conceded, overall_conceded),
        win_rate: blend(venue_win, overall_win),
        raw_venue_scored: venue_scored,
        raw_venue_win: venue_win,
        last_match_date,
        form,
    })
}

fn mean_metrics<'a>(records: impl Iterator<Item = &'a MatchRecord>) -> (f64, f64, f64) {
    let mut scored = 0u32;
    let mut conceded = 0u32;
    let mut wins = 0usize;
    let mut n = 0usize;
    for m in records {
        scored += m.goals_scored;
        conceded += m.goals_conceded;
        if m.result == MatchOutcome::Win {
            wins += 1;
        }
        n += 1;
    }
    if n == 0 {
        return (0.0, 0.0, 0.0);
    }
    let n = n as f64;
    (scored as f64 / n, conceded as f64 / n, wins as f64 / n)
}
