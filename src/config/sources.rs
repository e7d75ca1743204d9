/// Leaderboard data-source configuration.
///
/// Each source is one published tab of the club spreadsheet. To get the URL
/// for a tab: File → Share → Publish to web → select the tab, pick CSV, and
/// copy the generated link (it contains the tab's `gid`). The URL can be
/// overridden per source with the environment variable named in `url_env`.
///
/// Column labels are matched against the sheet header after key
/// normalization, so `"Peak Rating"`, `"peak  rating"` and `"PEAK-RATING"`
/// all resolve to the same column.
#[derive(Debug, Clone)]
pub struct SourceColumns {
    pub name: &'static str,
    pub rating: &'static str,
    pub games: &'static str,
    pub wins: &'static str,
    pub losses: &'static str,
    pub draws: &'static str,
    pub peak: &'static str,
    pub rating_delta: Option<&'static str>,
    pub last_active: Option<&'static str>,
    pub joined: Option<&'static str>,
    pub form: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub struct DataSourceConfig {
    pub key: &'static str,
    pub name: &'static str,
    pub url_env: &'static str,
    pub default_url: &'static str,
    pub columns: SourceColumns,
}

impl DataSourceConfig {
    /// Resolve the CSV URL, preferring the environment override.
    pub fn url(&self) -> String {
        std::env::var(self.url_env).unwrap_or_else(|_| self.default_url.to_string())
    }
}

/// The leaderboards the dashboard can switch between.
pub fn get_sources() -> Vec<DataSourceConfig> {
    vec![
        DataSourceConfig {
            key: "elo",
            name: "ELO leaderboard",
            url_env: "ELO_SHEET_URL",
            default_url: "https://docs.google.com/spreadsheets/d/e/2PACX-1vTlcQ1yX9mPpXhi/pub?gid=0&single=true&output=csv",
            columns: SourceColumns {
                name: "Player",
                rating: "ELO",
                games: "Games",
                wins: "Wins",
                losses: "Losses",
                draws: "Draws",
                peak: "Peak ELO",
                rating_delta: Some("Change"),
                last_active: Some("Last Active"),
                joined: Some("Joined"),
                form: Some("Form"),
            },
        },
        DataSourceConfig {
            key: "dcpr",
            name: "DCPR leaderboard",
            url_env: "DCPR_SHEET_URL",
            default_url: "https://docs.google.com/spreadsheets/d/e/2PACX-1vTlcQ1yX9mPpXhi/pub?gid=1408573594&single=true&output=csv",
            columns: SourceColumns {
                name: "Player",
                rating: "DCPR",
                games: "Matches",
                wins: "W",
                losses: "L",
                draws: "D",
                peak: "Peak",
                rating_delta: None,
                last_active: None,
                joined: None,
                form: None,
            },
        },
    ]
}

/// Look up a source by its selector key.
pub fn find_source(key: &str) -> Option<DataSourceConfig> {
    get_sources().into_iter().find(|s| s.key == key)
}
