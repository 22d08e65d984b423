use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use scoreline::api::{
    parse_fixtures_json, parse_history_json, parse_scorers_json, parse_standings_json,
};
use scoreline::records::MatchOutcome;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn parses_scheduled_fixtures_sorted_by_kickoff() {
    let raw = read_fixture("matches_scheduled.json");
    let fixtures = parse_fixtures_json(&raw).expect("fixture should parse");
    assert_eq!(fixtures.len(), 2);
    // The payload lists the later match first; parsing sorts by kickoff.
    assert_eq!(fixtures[0].id, 2001);
    assert_eq!(fixtures[0].date, NaiveDate::from_ymd_opt(2025, 5, 10).unwrap());
    assert_eq!(fixtures[0].home_name, "Alpha");
    assert_eq!(fixtures[0].away_id, 20);
}

#[test]
fn parses_history_from_team_perspective() {
    let raw = read_fixture("team_history.json");
    let history = parse_history_json(&raw, 10).expect("fixture should parse");
    // Unscored match skipped, remaining two in chronological order.
    assert_eq!(history.len(), 2);

    let first = &history[0];
    assert!(!first.is_home);
    assert_eq!(first.goals_scored, 1);
    assert_eq!(first.goals_conceded, 1);
    assert_eq!(first.opponent_name, "Beta");
    assert_eq!(first.result, MatchOutcome::Draw);

    let second = &history[1];
    assert!(second.is_home);
    assert_eq!(second.goals_scored, 2);
    assert_eq!(second.opponent_id, 20);
    assert_eq!(second.result, MatchOutcome::Win);
}

#[test]
fn parses_standings_into_context_tables() {
    let raw = read_fixture("standings.json");
    let tables = parse_standings_json(&raw).expect("fixture should parse");

    let total = tables.total.get(&10).expect("total row");
    assert_eq!(total.rank, 1);
    assert_eq!(total.points, 24);
    assert_eq!(
        total.form.as_deref(),
        Some(
            &[
                MatchOutcome::Win,
                MatchOutcome::Win,
                MatchOutcome::Draw,
                MatchOutcome::Loss,
                MatchOutcome::Win,
            ][..]
        )
    );

    let home = tables.home.get(&10).expect("home row");
    assert_eq!(home.played, 5);
    assert_eq!(home.goals_for, 14);
    assert!(home.form.is_none());

    let away = tables.away.get(&10).expect("away row");
    assert_eq!(away.goals_against, 5);
    assert!(away.form.is_none());
}

#[test]
fn parses_scorers() {
    let raw = read_fixture("scorers.json");
    let scorers = parse_scorers_json(&raw).expect("fixture should parse");
    assert_eq!(scorers.len(), 2);
    assert_eq!(scorers[0].name, "J. Striker");
    assert_eq!(scorers[0].goals, 18);
    assert_eq!(scorers[1].team_id, 20);
}

#[test]
fn empty_payloads_parse_to_empty_collections() {
    assert!(parse_fixtures_json("{}").expect("parse").is_empty());
    assert!(parse_history_json("{}", 10).expect("parse").is_empty());
    let tables = parse_standings_json("{}").expect("parse");
    assert!(tables.total.is_empty() && tables.home.is_empty() && tables.away.is_empty());
    assert!(parse_scorers_json("{}").expect("parse").is_empty());
}
