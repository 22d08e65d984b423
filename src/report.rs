use std::fmt::Write;

use crate::api::{Fixture, Scorer};
use crate::commentary::{self, Tone};
use crate::records::{MatchOutcome, MatchRecord, PredictionResult, StandingsTables, WeightedStats};

// Under this many rest days a side is flagged as tired.
const FATIGUE_REST_DAYS: i64 = 4;

// A pick needs at least this much xG separation; anything closer is a draw.
const PICK_MARGIN: f64 = 0.5;

const H2H_SHOWN: usize = 3;

pub struct ReportContext<'a> {
    pub fixture: &'a Fixture,
    pub tables: &'a StandingsTables,
    pub home_stats: &'a WeightedStats,
    pub away_stats: &'a WeightedStats,
    pub home_rest_days: i64,
    pub away_rest_days: i64,
    pub scorers: &'a [Scorer],
    pub h2h: &'a [MatchRecord],
    pub prediction: &'a PredictionResult,
}

/// Console analysis report. All rounding and wording lives here; the
/// engine's numeric output is untouched.
pub fn render_report(ctx: &ReportContext) -> String {
    let mut out = String::new();
    let f = ctx.fixture;
    let p = ctx.prediction;

    let line = "=".repeat(60);
    let _ = writeln!(out, "\n{line}");
    let _ = writeln!(out, "MATCH ANALYSIS: {} vs {}", f.home_name, f.away_name);
    let _ = writeln!(out, "{line}");

    let _ = writeln!(out, "\nLeague table:");
    let _ = writeln!(
        out,
        "  [H] {}: {} | form {}",
        f.home_name,
        standing_line(ctx.tables, f.home_id),
        form_string(&ctx.home_stats.form),
    );
    let _ = writeln!(
        out,
        "  [A] {}: {} | form {}",
        f.away_name,
        standing_line(ctx.tables, f.away_id),
        form_string(&ctx.away_stats.form),
    );

    let _ = writeln!(out, "\nVenue performance:");
    let _ = writeln!(
        out,
        "  [H] {} at home: {:.1} goals/match, {:.0}% wins",
        f.home_name,
        ctx.home_stats.raw_venue_scored,
        ctx.home_stats.raw_venue_win * 100.0,
    );
    let _ = writeln!(
        out,
        "  [A] {} away: {:.1} goals/match, {:.0}% wins",
        f.away_name,
        ctx.away_stats.raw_venue_scored,
        ctx.away_stats.raw_venue_win * 100.0,
    );

    let _ = writeln!(out, "\nRest:");
    let _ = writeln!(
        out,
        "  [H] {}: {} days ({})",
        f.home_name,
        ctx.home_rest_days,
        fatigue_label(ctx.home_rest_days),
    );
    let _ = writeln!(
        out,
        "  [A] {}: {} days ({})",
        f.away_name,
        ctx.away_rest_days,
        fatigue_label(ctx.away_rest_days),
    );

    let key_scorers: Vec<&Scorer> = ctx
        .scorers
        .iter()
        .filter(|s| s.team_id == f.home_id || s.team_id == f.away_id)
        .collect();
    if !key_scorers.is_empty() {
        let _ = writeln!(out, "\nKey players:");
        for s in key_scorers {
            let _ = writeln!(out, "  - {} ({} goals)", s.name, s.goals);
        }
    }

    let _ = writeln!(out, "\nHead to head:");
    if ctx.h2h.is_empty() {
        let _ = writeln!(out, "  no recent meetings on record");
    } else {
        for m in ctx.h2h.iter().take(H2H_SHOWN) {
            let _ = writeln!(
                out,
                "  - {}: {} {}-{} {}",
                m.date, f.home_name, m.goals_scored, m.goals_conceded, m.opponent_name,
            );
        }
    }

    let _ = writeln!(out, "\nModel output:");
    let _ = writeln!(
        out,
        "  expected goals (xG): {:.2} - {:.2}",
        p.final_home_xg, p.final_away_xg,
    );
    let _ = writeln!(
        out,
        "  [H] {}: {}",
        f.home_name,
        tone_line(p.final_home_xg),
    );
    let _ = writeln!(
        out,
        "  [A] {}: {}",
        f.away_name,
        tone_line(p.final_away_xg),
    );
    if p.adjusted {
        let _ = writeln!(out, "  note: blend corrected toward the statistical form signal");
    }

    let _ = writeln!(out, "\nVerdict:");
    let _ = writeln!(
        out,
        "  scoreline: {} - {}",
        p.final_home_xg.round() as i64,
        p.final_away_xg.round() as i64,
    );
    let _ = writeln!(out, "  pick: {}", pick_label(ctx));
    let _ = writeln!(out, "{line}");

    out
}

fn standing_line(tables: &StandingsTables, team_id: u32) -> String {
    match tables.total.get(&team_id) {
        Some(row) => format!("#{} ({} pts)", row.rank, row.points),
        None => "unranked".to_string(),
    }
}

/// Most-recent-first results joined as "W-D-L".
pub fn form_string(form: &[MatchOutcome]) -> String {
    if form.is_empty() {
        return "?".to_string();
    }
    let symbols: Vec<String> = form.iter().map(|o| o.as_char().to_string()).collect();
    symbols.join("-")
}

fn fatigue_label(rest_days: i64) -> &'static str {
    if rest_days < FATIGUE_REST_DAYS { "tired" } else { "fresh" }
}

fn tone_line(xg: f64) -> String {
    let (tone, fraction) = commentary::fractional_tone(xg);
    let phrase = match tone {
        Tone::NearNextGoal => "close to the next goal",
        Tone::FragileScoreline => "may struggle to hold this scoreline",
        Tone::Unsettled => "shows an unsettled picture",
    };
    format!("expected to find {} goal(s), {} ({:.2})", xg as i64, phrase, fraction)
}

fn pick_label(ctx: &ReportContext) -> String {
    let diff = ctx.prediction.final_home_xg - ctx.prediction.final_away_xg;
    if diff > PICK_MARGIN {
        format!("{} to win", ctx.fixture.home_name)
    } else if diff < -PICK_MARGIN {
        format!("{} to win", ctx.fixture.away_name)
    } else {
        "draw".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::StandingRow;
    use chrono::NaiveDate;

    fn fixture() -> Fixture {
        Fixture {
            id: 1,
            date: NaiveDate::from_ymd_opt(2025, 5, 10).unwrap(),
            home_id: 10,
            home_name: "Alpha".to_string(),
            away_id: 20,
            away_name: "Omega".to_string(),
        }
    }

    fn stats(win_rate: f64) -> WeightedStats {
        WeightedStats {
            avg_scored: 1.4,
            avg_conceded: 1.0,
            win_rate,
            raw_venue_scored: 1.6,
            raw_venue_win: win_rate,
            last_match_date: NaiveDate::from_ymd_opt(2025, 5, 3).unwrap(),
            form: vec![MatchOutcome::Win, MatchOutcome::Draw],
        }
    }

    fn prediction(home: f64, away: f64, adjusted: bool) -> PredictionResult {
        PredictionResult {
            statistical_home_xg: home,
            statistical_away_xg: away,
            regression_home_xg: home,
            regression_away_xg: away,
            final_home_xg: home,
            final_away_xg: away,
            adjusted,
        }
    }

    #[test]
    fn form_string_joins_symbols() {
        assert_eq!(
            form_string(&[MatchOutcome::Win, MatchOutcome::Loss, MatchOutcome::Draw]),
            "W-L-D"
        );
        assert_eq!(form_string(&[]), "?");
    }

    #[test]
    fn fatigue_boundary_is_four_days() {
        assert_eq!(fatigue_label(3), "tired");
        assert_eq!(fatigue_label(4), "fresh");
    }

    #[test]
    fn report_includes_pick_and_adjustment_note() {
        let f = fixture();
        let mut tables = StandingsTables::default();
        tables.total.insert(
            10,
            StandingRow {
                played: 10,
                goals_for: 20,
                goals_against: 5,
                points: 24,
                rank: 1,
                form: None,
            },
        );
        let home_stats = stats(0.8);
        let away_stats = stats(0.2);
        let p = prediction(2.3, 0.7, true);
        let report = render_report(&ReportContext {
            fixture: &f,
            tables: &tables,
            home_stats: &home_stats,
            away_stats: &away_stats,
            home_rest_days: 6,
            away_rest_days: 2,
            scorers: &[],
            h2h: &[],
            prediction: &p,
        });
        assert!(report.contains("Alpha to win"));
        assert!(report.contains("blend corrected"));
        assert!(report.contains("#1 (24 pts)"));
        assert!(report.contains("no recent meetings"));
        assert!(report.contains("tired"));
    }

    #[test]
    fn narrow_margin_picks_draw() {
        let f = fixture();
        let tables = StandingsTables::default();
        let home_stats = stats(0.5);
        let away_stats = stats(0.5);
        let p = prediction(1.4, 1.1, false);
        let report = render_report(&ReportContext {
            fixture: &f,
            tables: &tables,
            home_stats: &home_stats,
            away_stats: &away_stats,
            home_rest_days: 7,
            away_rest_days: 7,
            scorers: &[],
            h2h: &[],
            prediction: &p,
        });
        assert!(report.contains("pick: draw"));
    }
}
