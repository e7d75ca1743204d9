#[derive(Debug, Clone)]
pub struct LoaderSettings {
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub default_source: &'static str,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            user_agent: "SheetStandings/1.0",
            timeout_secs: 30,
            default_source: "elo",
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatsSettings {
    pub histogram_buckets: usize,
    pub active_short_days: i64,
    pub active_long_days: i64,
    pub new_window_days: i64,
}

impl Default for StatsSettings {
    fn default() -> Self {
        Self {
            histogram_buckets: 10,
            active_short_days: 7,
            active_long_days: 30,
            new_window_days: 30,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub loader: LoaderSettings,
    pub stats: StatsSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
