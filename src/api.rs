use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::config::ApiConfig;
use crate::http_client::http_client;
use crate::records::{MatchOutcome, MatchRecord, StandingRow, StandingsTables};

// football-data.org free tier allows ~10 requests/minute; pace every call.
const PACING_DELAY_MS: u64 = 1200;
const RATE_LIMIT_WAIT_SECS: u64 = 5;
const MAX_ATTEMPTS: u32 = 3;

const FIXTURE_LIMIT: usize = 10;
const HISTORY_LIMIT: u32 = 30;

/// One scheduled match from the fixture list.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub id: u64,
    pub date: NaiveDate,
    pub home_id: u32,
    pub home_name: String,
    pub away_id: u32,
    pub away_name: String,
}

#[derive(Debug, Clone)]
pub struct Scorer {
    pub name: String,
    pub goals: u32,
    pub team_id: u32,
}

/// football-data.org v4 client supplying histories, standings and scorer
/// lists. The prediction engine only ever sees the structured records this
/// store produces.
pub struct RecordStore {
    config: ApiConfig,
}

impl RecordStore {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Next scheduled fixtures for a competition, earliest kickoff first,
    /// capped at 10.
    pub fn scheduled_fixtures(&self, competition: &str) -> Result<Vec<Fixture>> {
        let path = format!("competitions/{competition}/matches");
        let raw = self.get_json(&path, &[("status", "SCHEDULED")])?;
        parse_fixtures_json(&raw)
    }

    /// Last 30 finished matches for a team, chronological ascending.
    /// Matches without a full-time score are skipped.
    pub fn team_history(&self, team_id: u32) -> Result<Vec<MatchRecord>> {
        let path = format!("teams/{team_id}/matches");
        let limit = HISTORY_LIMIT.to_string();
        let raw = self.get_json(&path, &[("status", "FINISHED"), ("limit", &limit)])?;
        parse_history_json(&raw, team_id)
    }

    /// Standings split into TOTAL, HOME and AWAY tables.
    pub fn standings(&self, competition: &str) -> Result<StandingsTables> {
        let path = format!("competitions/{competition}/standings");
        let raw = self.get_json(&path, &[])?;
        parse_standings_json(&raw)
    }

    pub fn top_scorers(&self, competition: &str) -> Result<Vec<Scorer>> {
        let path = format!("competitions/{competition}/scorers");
        let raw = self.get_json(&path, &[])?;
        parse_scorers_json(&raw)
    }

    // Bounded retry on 429; any other non-success status is an error.
    fn get_json(&self, path: &str, params: &[(&str, &str)]) -> Result<String> {
        let client = http_client()?;
        let url = format!("{}/{path}", self.config.base_url.trim_end_matches('/'));

        let mut attempt = 0;
        loop {
            attempt += 1;
            thread::sleep(Duration::from_millis(PACING_DELAY_MS));

            let resp = client
                .get(&url)
                .query(params)
                .header("X-Auth-Token", &self.config.token)
                .send()
                .with_context(|| format!("request failed for {path}"))?;

            let status = resp.status();
            if status == StatusCode::TOO_MANY_REQUESTS {
                if attempt >= MAX_ATTEMPTS {
                    return Err(anyhow!("rate limited after {attempt} attempts for {path}"));
                }
                thread::sleep(Duration::from_secs(RATE_LIMIT_WAIT_SECS));
                continue;
            }
            if !status.is_success() {
                return Err(anyhow!("api error {status} for {path}"));
            }
            return resp.text().context("read response body");
        }
    }
}

#[derive(Debug, Deserialize)]
struct MatchesResponse {
    #[serde(default)]
    matches: Vec<ApiMatch>,
}

#[derive(Debug, Deserialize)]
struct ApiMatch {
    id: u64,
    #[serde(rename = "utcDate")]
    utc_date: String,
    #[serde(rename = "homeTeam")]
    home_team: ApiTeam,
    #[serde(rename = "awayTeam")]
    away_team: ApiTeam,
    #[serde(default)]
    score: Option<ApiScore>,
}

#[derive(Debug, Deserialize)]
struct ApiTeam {
    id: u32,
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct ApiScore {
    #[serde(rename = "fullTime")]
    full_time: ApiFullTime,
}

#[derive(Debug, Deserialize, Default)]
struct ApiFullTime {
    home: Option<u32>,
    away: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct StandingsResponse {
    #[serde(default)]
    standings: Vec<ApiStandingTable>,
}

#[derive(Debug, Deserialize)]
struct ApiStandingTable {
    #[serde(rename = "type")]
    table_type: String,
    #[serde(default)]
    table: Vec<ApiStandingRow>,
}

#[derive(Debug, Deserialize)]
struct ApiStandingRow {
    position: u32,
    team: ApiTeam,
    #[serde(rename = "playedGames")]
    played_games: u32,
    points: i32,
    #[serde(rename = "goalsFor")]
    goals_for: u32,
    #[serde(rename = "goalsAgainst")]
    goals_against: u32,
    #[serde(default)]
    form: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ScorersResponse {
    #[serde(default)]
    scorers: Vec<ApiScorer>,
}

#[derive(Debug, Deserialize)]
struct ApiScorer {
    player: ApiPlayer,
    goals: u32,
    team: ApiTeam,
}

#[derive(Debug, Deserialize)]
struct ApiPlayer {
    name: String,
}

pub fn parse_fixtures_json(raw: &str) -> Result<Vec<Fixture>> {
    let data: MatchesResponse = serde_json::from_str(raw).context("invalid fixtures json")?;

    let mut rows = data.matches;
    rows.sort_by(|a, b| a.utc_date.cmp(&b.utc_date));

    let mut fixtures = Vec::new();
    for m in rows.into_iter() {
        let Some(date) = parse_utc_date(&m.utc_date) else {
            continue;
        };
        fixtures.push(Fixture {
            id: m.id,
            date,
            home_id: m.home_team.id,
            home_name: m.home_team.name,
            away_id: m.away_team.id,
            away_name: m.away_team.name,
        });
        if fixtures.len() >= FIXTURE_LIMIT {
            break;
        }
    }
    Ok(fixtures)
}

pub fn parse_history_json(raw: &str, team_id: u32) -> Result<Vec<MatchRecord>> {
    let data: MatchesResponse = serde_json::from_str(raw).context("invalid history json")?;

    let mut history = Vec::new();
    for m in data.matches {
        let Some(date) = parse_utc_date(&m.utc_date) else {
            continue;
        };
        let full_time = m.score.map(|s| s.full_time).unwrap_or_default();
        let (Some(home_goals), Some(away_goals)) = (full_time.home, full_time.away) else {
            continue;
        };

        let is_home = m.home_team.id == team_id;
        let (goals_scored, goals_conceded) = if is_home {
            (home_goals, away_goals)
        } else {
            (away_goals, home_goals)
        };
        let opponent = if is_home { m.away_team } else { m.home_team };

        history.push(MatchRecord {
            date,
            is_home,
            goals_scored,
            goals_conceded,
            opponent_id: opponent.id,
            opponent_name: opponent.name,
            result: MatchOutcome::from_goals(goals_scored, goals_conceded),
        });
    }

    // The engine requires chronological order.
    history.sort_by(|a, b| a.date.cmp(&b.date));
    Ok(history)
}

pub fn parse_standings_json(raw: &str) -> Result<StandingsTables> {
    let data: StandingsResponse = serde_json::from_str(raw).context("invalid standings json")?;

    let mut tables = StandingsTables::default();
    for table in data.standings {
        let target = match table.table_type.as_str() {
            "TOTAL" => &mut tables.total,
            "HOME" => &mut tables.home,
            "AWAY" => &mut tables.away,
            _ => continue,
        };
        for row in table.table {
            target.insert(
                row.team.id,
                StandingRow {
                    played: row.played_games,
                    goals_for: row.goals_for,
                    goals_against: row.goals_against,
                    points: row.points,
                    rank: row.position,
                    form: row.form.as_deref().and_then(parse_form),
                },
            );
        }
    }
    Ok(tables)
}

pub fn parse_scorers_json(raw: &str) -> Result<Vec<Scorer>> {
    let data: ScorersResponse = serde_json::from_str(raw).context("invalid scorers json")?;
    Ok(data
        .scorers
        .into_iter()
        .map(|s| Scorer {
            name: s.player.name,
            goals: s.goals,
            team_id: s.team.id,
        })
        .collect())
}

// The API publishes form as "W,D,L,W,W"; anything unparseable means unknown.
fn parse_form(raw: &str) -> Option<Vec<MatchOutcome>> {
    let outcomes: Vec<MatchOutcome> = raw
        .split(',')
        .filter_map(|token| token.trim().chars().next())
        .filter_map(MatchOutcome::from_char)
        .collect();
    if outcomes.is_empty() { None } else { Some(outcomes) }
}

fn parse_utc_date(raw: &str) -> Option<NaiveDate> {
    let day = raw.get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}
