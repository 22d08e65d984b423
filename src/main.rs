use std::io::{self, Write};

use anyhow::Result;

use scoreline::api::RecordStore;
use scoreline::config::{ApiConfig, COMPETITIONS};
use scoreline::features::training_table;
use scoreline::form_stats::weighted_stats;
use scoreline::h2h::head_to_head;
use scoreline::hybrid::{self, Tunables};
use scoreline::records::Side;
use scoreline::report::{ReportContext, render_report};
use scoreline::strength::baseline_xg;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;
    let store = RecordStore::new(config);

    println!("==================================================");
    println!("scoreline - hybrid match score forecast");
    println!("==================================================");

    let competition_items: Vec<String> = COMPETITIONS
        .iter()
        .map(|(name, code)| format!("{name} [{code}]"))
        .collect();
    let Some(idx) = prompt_choice("Pick a competition", &competition_items)? else {
        return Ok(());
    };
    let (league_name, code) = COMPETITIONS[idx];

    println!("\nFetching {code} fixtures...");
    let fixtures = store.scheduled_fixtures(code)?;
    if fixtures.is_empty() {
        println!("No scheduled fixtures found for {league_name}.");
        return Ok(());
    }

    let fixture_items: Vec<String> = fixtures
        .iter()
        .map(|f| format!("{} vs {} ({})", f.home_name, f.away_name, f.date))
        .collect();
    let Some(idx) = prompt_choice("Pick a fixture to analyze", &fixture_items)? else {
        return Ok(());
    };
    let fixture = &fixtures[idx];

    println!(
        "\nAnalyzing {} vs {}...",
        fixture.home_name, fixture.away_name
    );
    println!("  collecting history, standings and scorers...");
    let home_history = store.team_history(fixture.home_id)?;
    let away_history = store.team_history(fixture.away_id)?;
    let tables = store.standings(code)?;
    let scorers = store.top_scorers(code)?;

    // An empty history means no stats to stand on; abort instead of
    // predicting from defaults.
    let (Some(home_stats), Some(away_stats)) = (
        weighted_stats(&home_history, Side::Home),
        weighted_stats(&away_history, Side::Away),
    ) else {
        println!("Insufficient match history for this fixture; no prediction.");
        return Ok(());
    };

    println!("  running hybrid model (strength baseline + regression)...");
    let h2h = head_to_head(&home_history, fixture.away_id);
    let baseline = baseline_xg(&tables, fixture.home_id, fixture.away_id);
    let table = training_table(&home_history, &away_history);
    let prediction = hybrid::predict(
        &home_stats,
        &away_stats,
        &table,
        baseline,
        &Tunables::default(),
    );

    let home_rest_days = (fixture.date - home_stats.last_match_date).num_days();
    let away_rest_days = (fixture.date - away_stats.last_match_date).num_days();

    print!(
        "{}",
        render_report(&ReportContext {
            fixture,
            tables: &tables,
            home_stats: &home_stats,
            away_stats: &away_stats,
            home_rest_days,
            away_rest_days,
            scorers: &scorers,
            h2h: &h2h,
            prediction: &prediction,
        })
    );
    Ok(())
}

/// Numbered menu over `items`; `None` means the user quit.
fn prompt_choice(title: &str, items: &[String]) -> Result<Option<usize>> {
    println!("\n{title}:");
    for (i, item) in items.iter().enumerate() {
        println!("{:>2}. {item}", i + 1);
    }
    loop {
        print!("Choice (q to quit): ");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        if let Ok(n) = line.parse::<usize>() {
            if (1..=items.len()).contains(&n) {
                return Ok(Some(n - 1));
            }
        }
        println!("Invalid choice.");
    }
}
