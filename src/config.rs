use std::env;

use anyhow::{Context, Result};

const DEFAULT_BASE_URL: &str = "https://api.football-data.org/v4";

/// Competition menu: display name and football-data.org code.
pub const COMPETITIONS: &[(&str, &str)] = &[
    ("Premier League (England)", "PL"),
    ("Champions League (Europe)", "CL"),
    ("Bundesliga (Germany)", "BL1"),
    ("Serie A (Italy)", "SA"),
    ("La Liga (Spain)", "PD"),
    ("Ligue 1 (France)", "FL1"),
    ("Eredivisie (Netherlands)", "DED"),
    ("Primeira Liga (Portugal)", "PPL"),
    ("Championship (England)", "ELC"),
    ("Serie A (Brazil)", "BSA"),
];

/// Explicit API configuration handed to the record store; nothing here is
/// process-global.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: String,
}

impl ApiConfig {
    /// Reads `FOOTBALL_DATA_TOKEN` (required) and
    /// `FOOTBALL_DATA_BASE_URL` (optional override).
    pub fn from_env() -> Result<Self> {
        let token = env::var("FOOTBALL_DATA_TOKEN")
            .context("FOOTBALL_DATA_TOKEN is not set (put it in .env or the environment)")?;
        let base_url =
            env::var("FOOTBALL_DATA_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self { base_url, token })
    }
}
