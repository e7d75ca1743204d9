use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::config::settings::StatsSettings;
use crate::domain::PlayerStanding;

/// Aggregate dashboard metrics. A pure projection of the standings: same
/// input and clock, same output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    /// Total population, including records whose numerics are `NaN`.
    pub player_count: usize,
    /// Median over finite ratings only; `NaN` when none exist.
    pub median_rating: f64,
    /// Sum of finite game counts; `NaN` games contribute zero.
    pub total_games: f64,
    pub active_7d: usize,
    pub active_30d: usize,
    pub new_30d: usize,
    /// Mean of per-player `rating_delta / games`; zero when no source column
    /// provides deltas.
    pub avg_rating_delta_per_match: f64,
    /// Share (in percent) of delta-carrying players who gained rating on a
    /// sub-.500 winrate; zero when no deltas are present.
    pub upset_pct: f64,
}

pub fn compute_summary(
    players: &[PlayerStanding],
    now: DateTime<Utc>,
    settings: &StatsSettings,
) -> SummaryStats {
    let short_cutoff = now - Duration::days(settings.active_short_days);
    let long_cutoff = now - Duration::days(settings.active_long_days);
    let new_cutoff = now - Duration::days(settings.new_window_days);

    SummaryStats {
        player_count: players.len(),
        median_rating: median_rating(players),
        total_games: total_games(players),
        active_7d: count_active_since(players, short_cutoff),
        active_30d: count_active_since(players, long_cutoff),
        new_30d: count_joined_since(players, new_cutoff),
        avg_rating_delta_per_match: avg_delta_per_match(players),
        upset_pct: upset_pct(players),
    }
}

fn median_rating(players: &[PlayerStanding]) -> f64 {
    let mut ratings: Vec<f64> = players
        .iter()
        .filter(|p| p.has_rating())
        .map(|p| p.rating)
        .collect();
    if ratings.is_empty() {
        return f64::NAN;
    }

    ratings.sort_by(f64::total_cmp);
    let mid = ratings.len() / 2;
    if ratings.len() % 2 == 1 {
        ratings[mid]
    } else {
        (ratings[mid - 1] + ratings[mid]) / 2.0
    }
}

fn total_games(players: &[PlayerStanding]) -> f64 {
    players
        .iter()
        .filter(|p| p.has_games())
        .map(|p| p.games)
        .sum()
}

fn count_active_since(players: &[PlayerStanding], cutoff: DateTime<Utc>) -> usize {
    players
        .iter()
        .filter(|p| p.last_active.is_some_and(|at| at >= cutoff))
        .count()
}

fn count_joined_since(players: &[PlayerStanding], cutoff: DateTime<Utc>) -> usize {
    players
        .iter()
        .filter(|p| p.joined.is_some_and(|at| at >= cutoff))
        .count()
}

fn avg_delta_per_match(players: &[PlayerStanding]) -> f64 {
    let per_match: Vec<f64> = players
        .iter()
        .filter(|p| p.rating_delta.is_finite() && p.has_games() && p.games > 0.0)
        .map(|p| p.rating_delta / p.games)
        .collect();
    if per_match.is_empty() {
        return 0.0;
    }
    per_match.iter().sum::<f64>() / per_match.len() as f64
}

fn upset_pct(players: &[PlayerStanding]) -> f64 {
    let with_delta: Vec<&PlayerStanding> = players
        .iter()
        .filter(|p| p.rating_delta.is_finite())
        .collect();
    if with_delta.is_empty() {
        return 0.0;
    }

    let upsets = with_delta
        .iter()
        .filter(|p| p.rating_delta > 0.0 && p.winrate < 0.5)
        .count();
    upsets as f64 / with_delta.len() as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn player(id: &str, rating: f64, games: f64, wins: f64) -> PlayerStanding {
        PlayerStanding {
            id: id.to_string(),
            name: id.to_string(),
            rating,
            games,
            wins,
            losses: 0.0,
            draws: 0.0,
            winrate: if games > 0.0 { wins / games } else { 0.0 },
            peak: rating,
            rating_delta: f64::NAN,
            last_active: None,
            joined: None,
            recent_form: Vec::new(),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 26, 0, 0, 0).unwrap()
    }

    #[test]
    fn median_averages_two_middles_for_even_counts() {
        let players = vec![
            player("a", 1400.0, 10.0, 5.0),
            player("b", 1500.0, 10.0, 5.0),
            player("c", 1600.0, 10.0, 5.0),
            player("d", 1700.0, 10.0, 5.0),
        ];
        let stats = compute_summary(&players, now(), &StatsSettings::default());
        assert_eq!(stats.median_rating, 1550.0);
    }

    #[test]
    fn nan_records_are_excluded_from_averages_but_counted() {
        let players = vec![
            player("a", 1400.0, 10.0, 5.0),
            player("b", f64::NAN, f64::NAN, f64::NAN),
            player("c", 1600.0, 20.0, 10.0),
        ];
        let stats = compute_summary(&players, now(), &StatsSettings::default());
        assert_eq!(stats.player_count, 3);
        assert_eq!(stats.median_rating, 1500.0);
        assert_eq!(stats.total_games, 30.0);
    }

    #[test]
    fn empty_standings_yield_nan_median_and_zero_games() {
        let stats = compute_summary(&[], now(), &StatsSettings::default());
        assert_eq!(stats.player_count, 0);
        assert!(stats.median_rating.is_nan());
        assert_eq!(stats.total_games, 0.0);
    }

    #[test]
    fn activity_windows_use_the_passed_clock() {
        let mut recent = player("a", 1500.0, 10.0, 5.0);
        recent.last_active = Some(now() - Duration::days(3));
        let mut older = player("b", 1500.0, 10.0, 5.0);
        older.last_active = Some(now() - Duration::days(20));
        let mut newcomer = player("c", 1500.0, 10.0, 5.0);
        newcomer.joined = Some(now() - Duration::days(10));
        let silent = player("d", 1500.0, 10.0, 5.0);

        let players = vec![recent, older, newcomer, silent];
        let stats = compute_summary(&players, now(), &StatsSettings::default());
        assert_eq!(stats.active_7d, 1);
        assert_eq!(stats.active_30d, 2);
        assert_eq!(stats.new_30d, 1);
    }

    #[test]
    fn windows_report_zero_without_timestamp_columns() {
        let players = vec![player("a", 1500.0, 10.0, 5.0)];
        let stats = compute_summary(&players, now(), &StatsSettings::default());
        assert_eq!(stats.active_7d, 0);
        assert_eq!(stats.active_30d, 0);
        assert_eq!(stats.new_30d, 0);
    }

    #[test]
    fn delta_metrics_report_zero_without_a_delta_column() {
        let players = vec![player("a", 1500.0, 10.0, 5.0)];
        let stats = compute_summary(&players, now(), &StatsSettings::default());
        assert_eq!(stats.avg_rating_delta_per_match, 0.0);
        assert_eq!(stats.upset_pct, 0.0);
    }

    #[test]
    fn delta_metrics_cover_delta_carrying_players() {
        let mut grinder = player("a", 1500.0, 20.0, 8.0); // winrate 0.4
        grinder.rating_delta = 30.0;
        let mut favorite = player("b", 1600.0, 10.0, 8.0); // winrate 0.8
        favorite.rating_delta = 10.0;

        let players = vec![grinder, favorite];
        let stats = compute_summary(&players, now(), &StatsSettings::default());
        assert!((stats.avg_rating_delta_per_match - (30.0 / 20.0 + 10.0 / 10.0) / 2.0).abs() < 1e-9);
        assert_eq!(stats.upset_pct, 50.0);
    }

    #[test]
    fn winrate_games_identity_holds() {
        let players = vec![
            player("a", 1500.0, 12.0, 7.0),
            player("b", 1450.0, 30.0, 11.0),
            player("c", 1390.0, 0.0, 0.0),
        ];
        let lhs: f64 = players.iter().map(|p| p.winrate * p.games).sum();
        let rhs: f64 = players.iter().map(|p| p.wins).sum();
        assert!((lhs - rhs).abs() < 1e-9);
    }
}
