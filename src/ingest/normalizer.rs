use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::config::SourceColumns;
use crate::domain::outcome::{classify, MatchOutcome};
use crate::domain::PlayerStanding;
use crate::text::{build_deterministic_slugs, normalize_key, to_number};

/// Map a header row plus data rows into typed standings.
///
/// Header matching is insensitive to case, diacritics and spacing. Rows with
/// an empty name cell are skipped; everything else degrades cell by cell
/// (missing or unparseable numerics become `NaN`) rather than aborting.
pub fn normalize(
    header: &[String],
    rows: &[Vec<String>],
    columns: &SourceColumns,
) -> Vec<PlayerStanding> {
    let index = HeaderIndex::new(header);

    let name_idx = index.resolve(columns.name);
    let rating_idx = index.resolve(columns.rating);
    let games_idx = index.resolve(columns.games);
    let wins_idx = index.resolve(columns.wins);
    let losses_idx = index.resolve(columns.losses);
    let draws_idx = index.resolve(columns.draws);
    let peak_idx = index.resolve(columns.peak);
    let delta_idx = columns.rating_delta.and_then(|l| index.resolve(l));
    let last_active_idx = columns.last_active.and_then(|l| index.resolve(l));
    let joined_idx = columns.joined.and_then(|l| index.resolve(l));
    let form_idx = columns.form.and_then(|l| index.resolve(l));

    let mut names: Vec<String> = Vec::new();
    let mut kept: Vec<&Vec<String>> = Vec::new();
    for row in rows {
        let name = cell(row, name_idx).trim();
        if name.is_empty() {
            continue;
        }
        names.push(name.to_string());
        kept.push(row);
    }

    let slugs = build_deterministic_slugs(&names);

    kept.iter()
        .zip(names)
        .zip(slugs)
        .map(|((row, name), id)| {
            let rating = number_at(row, rating_idx);
            let games = number_at(row, games_idx);
            let wins = number_at(row, wins_idx);
            let winrate = if games > 0.0 { wins / games } else { 0.0 };

            PlayerStanding {
                id,
                name,
                rating,
                games,
                wins,
                losses: number_at(row, losses_idx),
                draws: number_at(row, draws_idx),
                winrate,
                peak: number_at(row, peak_idx),
                rating_delta: number_at(row, delta_idx),
                last_active: date_at(row, last_active_idx),
                joined: date_at(row, joined_idx),
                recent_form: form_at(row, form_idx),
            }
        })
        .collect()
}

/// Normalized-header lookup table. The first occurrence of a duplicated
/// header wins.
struct HeaderIndex {
    positions: HashMap<String, usize>,
}

impl HeaderIndex {
    fn new(header: &[String]) -> Self {
        let mut positions = HashMap::new();
        for (idx, label) in header.iter().enumerate() {
            positions.entry(normalize_key(label)).or_insert(idx);
        }
        Self { positions }
    }

    fn resolve(&self, label: &str) -> Option<usize> {
        self.positions.get(&normalize_key(label)).copied()
    }
}

// --- Cell Accessors ---

fn cell(row: &[String], idx: Option<usize>) -> &str {
    idx.and_then(|i| row.get(i)).map(String::as_str).unwrap_or("")
}

fn number_at(row: &[String], idx: Option<usize>) -> f64 {
    to_number(cell(row, idx))
}

fn date_at(row: &[String], idx: Option<usize>) -> Option<DateTime<Utc>> {
    parse_date(cell(row, idx).trim())
}

/// Accept the timestamp shapes sheets commonly hold: RFC 3339, a naive
/// datetime, or a bare date (taken as midnight UTC).
fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn form_at(row: &[String], idx: Option<usize>) -> Vec<MatchOutcome> {
    cell(row, idx)
        .split([',', ';', '/', ' '])
        .filter(|token| !token.is_empty())
        .map(|token| classify(Some(token)))
        .collect()
}
