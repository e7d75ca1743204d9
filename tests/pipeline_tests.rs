use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use sheet_standings::config::{DataSourceConfig, SourceColumns};
use sheet_standings::config::settings::StatsSettings;
use sheet_standings::csv::tokenize;
use sheet_standings::errors::LoadError;
use sheet_standings::http::{FetchedBody, SheetFetch};
use sheet_standings::ingest::normalize;
use sheet_standings::services::loader::{LoadOutcome, StandingsLoader};
use sheet_standings::stats::{compute_summary, make_rating_histogram, make_winrate_scatter};

const SHEET: &str = "\
Player,ELO,Games,Wins,Losses,Draws,Peak ELO,Change,Last Active,Form\r\n\
Jan Novák,1612,40,25,14,1,1650,\"12,5\",2026-08-24,\"W,W,L\"\r\n\
Jan Novák,1480,22,9,13,0,1520,-4,2026-07-01,L L\r\n\
\"Böhm, Petra\",1537,31,17,13,1,1590,3,2026-08-20,W D\r\n\
Rookie,,0,0,0,0,,,,\r\n";

fn columns() -> SourceColumns {
    SourceColumns {
        name: "Player",
        rating: "ELO",
        games: "Games",
        wins: "Wins",
        losses: "Losses",
        draws: "Draws",
        peak: "Peak ELO",
        rating_delta: Some("Change"),
        last_active: Some("Last Active"),
        joined: None,
        form: Some("Form"),
    }
}

fn sheet_source() -> DataSourceConfig {
    DataSourceConfig {
        key: "elo",
        name: "ELO leaderboard",
        url_env: "UNSET_PIPELINE_TEST_URL",
        default_url: "https://example.com/pub?output=csv",
        columns: columns(),
    }
}

struct StaticFetch;

#[async_trait]
impl SheetFetch for StaticFetch {
    async fn fetch_text(&self, _url: &str) -> Result<FetchedBody, LoadError> {
        Ok(FetchedBody {
            status: 200,
            body: SHEET.to_string(),
        })
    }
}

#[test]
fn csv_text_becomes_typed_standings() {
    let rows = tokenize(SHEET);
    let (header, data) = rows.split_first().expect("header row");
    let players = normalize(header, data, &columns());

    assert_eq!(players.len(), 4);
    assert_eq!(players[0].id, "jan-novak");
    assert_eq!(players[1].id, "jan-novak-2");
    assert_eq!(players[2].id, "bohm-petra");
    assert_eq!(players[3].id, "rookie");

    // Quoted cells survive: decimal-comma delta and comma-separated form.
    assert_eq!(players[0].rating_delta, 12.5);
    assert_eq!(players[0].recent_form.len(), 3);
    assert_eq!(players[2].name, "Böhm, Petra");

    // The rookie row degrades instead of failing.
    assert!(players[3].rating.is_nan());
    assert_eq!(players[3].winrate, 0.0);
}

#[test]
fn statistics_follow_the_standings() {
    let rows = tokenize(SHEET);
    let (header, data) = rows.split_first().expect("header row");
    let players = normalize(header, data, &columns());

    let now = Utc.with_ymd_and_hms(2026, 8, 26, 0, 0, 0).unwrap();
    let summary = compute_summary(&players, now, &StatsSettings::default());

    assert_eq!(summary.player_count, 4);
    assert_eq!(summary.median_rating, 1537.0);
    assert_eq!(summary.total_games, 93.0);
    assert_eq!(summary.active_7d, 2);
    assert_eq!(summary.active_30d, 2);
    assert_eq!(summary.new_30d, 0);

    let histogram = make_rating_histogram(&players, 5);
    let bucketed: usize = histogram.iter().map(|b| b.count).sum();
    assert_eq!(bucketed, 3); // rookie's NaN rating is excluded

    let scatter = make_winrate_scatter(&players, true);
    assert_eq!(scatter.len(), 4);
    let filtered = make_winrate_scatter(&players, false);
    assert_eq!(filtered.len(), 3);
}

#[tokio::test]
async fn loader_publishes_the_full_pipeline_result() {
    let loader = StandingsLoader::new(Box::new(StaticFetch), "elo");

    let outcome = loader.refresh(&sheet_source()).await.unwrap();
    assert_eq!(outcome, LoadOutcome::Loaded { players: 4 });

    let state = loader.snapshot();
    assert_eq!(state.source, "elo");
    assert_eq!(state.players.len(), 4);
    assert!(state.error.is_none());
    assert!(!state.is_loading);
    assert!(state.refreshed_at.is_some());
}
