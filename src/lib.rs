//! Hybrid football score forecasting: a venue-weighted form model and an
//! attack/defense strength baseline blended with a rolling-feature
//! regression, plus the football-data.org client that feeds them.

pub mod api;
pub mod commentary;
pub mod config;
pub mod features;
pub mod form_stats;
pub mod h2h;
pub mod http_client;
pub mod hybrid;
pub mod records;
pub mod report;
pub mod strength;
