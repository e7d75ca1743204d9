use std::sync::{Mutex, RwLock};

use chrono::Utc;
use log::{debug, info, warn};

use crate::config::DataSourceConfig;
use crate::csv::tokenize;
use crate::domain::{PlayerStanding, StandingsResult};
use crate::errors::LoadError;
use crate::http::{build_request_url, SheetFetch};
use crate::ingest::normalize;
use crate::services::cancel::{cancel_pair, CancelHandle, CancelToken};

/// How a refresh resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { players: usize },
    /// Superseded by a newer request (or cancelled outright); the shared
    /// state was not touched.
    Cancelled,
}

/// The single current load: a monotonically increasing generation plus the
/// cancel handle for the request that owns it.
struct InFlight {
    generation: u64,
    handle: Option<CancelHandle>,
}

/// Owns the shared `StandingsResult` and the single in-flight load.
///
/// At most one load is current at a time: starting a refresh cancels the
/// previous one, so the last-requested source wins regardless of response
/// order. Every publish re-checks its generation under the `in_flight` lock,
/// making supersede-then-publish races impossible. The published state is
/// replaced atomically; a failed load keeps the last-known-good players
/// visible alongside the error, and a superseded load changes nothing at all.
pub struct StandingsLoader {
    fetcher: Box<dyn SheetFetch>,
    state: RwLock<StandingsResult>,
    in_flight: Mutex<InFlight>,
}

impl StandingsLoader {
    pub fn new(fetcher: Box<dyn SheetFetch>, default_source: &str) -> Self {
        Self {
            fetcher,
            state: RwLock::new(StandingsResult::empty(default_source)),
            in_flight: Mutex::new(InFlight {
                generation: 0,
                handle: None,
            }),
        }
    }

    /// Current externally observed state.
    pub fn snapshot(&self) -> StandingsResult {
        self.state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Cancel the in-flight load, if any, without starting a new one.
    pub fn cancel(&self) {
        let guard = self.lock_in_flight();
        if let Some(handle) = guard.handle.as_ref() {
            handle.cancel();
        }
    }

    /// Load the given source and publish the result. Cancels any previous
    /// load first.
    pub async fn refresh(&self, source: &DataSourceConfig) -> Result<LoadOutcome, LoadError> {
        let (token, generation) = self.begin(source.key);

        match self.load(source, token).await {
            Ok(Some(players)) => {
                let count = players.len();
                if self.publish_success(generation, source.key, players) {
                    info!("Loaded {} standings for source {}", count, source.key);
                    Ok(LoadOutcome::Loaded { players: count })
                } else {
                    info!("Discarding superseded load for source {}", source.key);
                    Ok(LoadOutcome::Cancelled)
                }
            }
            Ok(None) => {
                info!("Load cancelled for source {}", source.key);
                Ok(LoadOutcome::Cancelled)
            }
            Err(err) => {
                if self.publish_failure(generation, &err) {
                    warn!("Load failed for source {}: {}", source.key, err);
                    Err(err)
                } else {
                    // A newer request owns the state; this failure is moot.
                    Ok(LoadOutcome::Cancelled)
                }
            }
        }
    }

    // --- Load Pipeline ---

    /// Fetch, validate and parse one source. `Ok(None)` means cancelled.
    async fn load(
        &self,
        source: &DataSourceConfig,
        mut token: CancelToken,
    ) -> Result<Option<Vec<PlayerStanding>>, LoadError> {
        let url = build_request_url(&source.url(), Utc::now());
        debug!("Fetching standings from {}", url);

        let fetched = tokio::select! {
            _ = token.cancelled() => return Ok(None),
            fetched = self.fetcher.fetch_text(&url) => fetched?,
        };
        if token.is_cancelled() {
            return Ok(None);
        }

        if !(200..300).contains(&fetched.status) {
            return Err(LoadError::status(fetched.status));
        }
        if fetched.body.trim_start().starts_with('<') {
            return Err(LoadError::Format);
        }

        let rows = tokenize(&fetched.body);
        let Some((header, data)) = rows.split_first() else {
            return Err(LoadError::Parse("sheet contains no header row".to_string()));
        };

        Ok(Some(normalize(header, data, &source.columns)))
    }

    // --- State Transitions ---
    //
    // Lock order is in_flight before state, everywhere. Publishing holds the
    // in_flight lock across the state write so that a stale generation can
    // never slip in between the check and the write.

    /// Cancel the previous load, bump the generation, and mark the state
    /// loading. The previous players stay visible while the new load runs.
    fn begin(&self, source_key: &str) -> (CancelToken, u64) {
        let (handle, token) = cancel_pair();

        let mut guard = self.lock_in_flight();
        guard.generation += 1;
        let generation = guard.generation;
        if let Some(previous) = guard.handle.replace(handle) {
            previous.cancel();
        }

        let mut state = self.write_state();
        state.source = source_key.to_string();
        state.is_loading = true;

        (token, generation)
    }

    /// Publish a completed load. Returns false (and writes nothing) when the
    /// generation has been superseded by a newer `begin`.
    fn publish_success(
        &self,
        generation: u64,
        source_key: &str,
        players: Vec<PlayerStanding>,
    ) -> bool {
        let guard = self.lock_in_flight();
        if guard.generation != generation {
            return false;
        }

        let mut state = self.write_state();
        *state = StandingsResult {
            source: source_key.to_string(),
            players,
            is_loading: false,
            error: None,
            refreshed_at: Some(Utc::now()),
        };
        true
    }

    /// Publish a failed load. Same generation guard as `publish_success`;
    /// players and refreshed_at keep their last-known-good values.
    fn publish_failure(&self, generation: u64, err: &LoadError) -> bool {
        let guard = self.lock_in_flight();
        if guard.generation != generation {
            return false;
        }

        let mut state = self.write_state();
        state.is_loading = false;
        state.error = Some(err.to_string());
        true
    }

    fn lock_in_flight(&self) -> std::sync::MutexGuard<'_, InFlight> {
        self.in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, StandingsResult> {
        self.state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
