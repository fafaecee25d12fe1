//! Game flow: the state machine that owns sessions end to end.
//!
//! One logical thread of control per session: every transition runs under the
//! session's async mutex, so duplicate input events cannot double-score.
//! Scheduled work (settle delay, milestone clear, background preload) is
//! tagged with the session generation at the time it was scheduled and is
//! dropped on wake-up if the generation has moved on; `restart()` also
//! cancels pending timers outright.

use std::sync::Arc;

use dashmap::DashMap;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::GameConfig;
use crate::domain::snapshot::{self, SessionSnapshot};
use crate::domain::{GameRng, GameSession, Guess, GuessOutcome, Phase, Pokemon, Round, SeededRng};
use crate::errors::{DomainError, NotFoundKind};
use crate::services::progress::ProgressStore;
use crate::services::round_selector;
use crate::services::source::PokemonSource;

struct SessionEntry {
    session: GameSession,
    round: Option<Round>,
    /// Warmed candidate for the next right-hand slot. Validated against the
    /// current left-hand id before reuse.
    preloaded: Option<Pokemon>,
    rng: Box<dyn GameRng>,
    /// Bumped on restart; stale timers and fetches compare against it.
    generation: u64,
    /// Bumped per loaded round; a settle timer for round N must not fire
    /// into round N+1.
    round_no: u64,
    /// Cancelled wholesale on restart.
    timers: CancellationToken,
    /// Sticky while the session is stuck in `Loading` after a failed load.
    load_error: Option<String>,
}

struct Inner {
    sessions: DashMap<Uuid, Arc<Mutex<SessionEntry>>>,
    source: Arc<dyn PokemonSource>,
    store: Arc<dyn ProgressStore>,
    config: GameConfig,
}

/// Cheaply cloneable handle to the session registry and its collaborators.
#[derive(Clone)]
pub struct GameFlow {
    inner: Arc<Inner>,
}

impl GameFlow {
    pub fn new(
        source: Arc<dyn PokemonSource>,
        store: Arc<dyn ProgressStore>,
        config: GameConfig,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                sessions: DashMap::new(),
                source,
                store,
                config,
            }),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.inner.config
    }

    /// Create a session and load its first round.
    ///
    /// A `seed` makes round generation reproducible. Saved progress is
    /// resumed if present; a failed round load leaves the session in
    /// `Loading` with the error surfaced on the snapshot (the client
    /// recovers via restart).
    pub async fn create_session(&self, seed: Option<u64>) -> SessionSnapshot {
        let rng: Box<dyn GameRng> = match seed {
            Some(seed) => Box::new(SeededRng::seeded(seed)),
            None => Box::new(SeededRng::from_entropy()),
        };
        self.create_session_with_rng(rng).await
    }

    /// Create a session with an explicit RNG. Tests use this to script the
    /// exact draw sequence.
    pub async fn create_session_with_rng(&self, rng: Box<dyn GameRng>) -> SessionSnapshot {
        let id = Uuid::new_v4();

        let progress = match self.inner.store.load().await {
            Ok(progress) => progress,
            Err(e) => {
                warn!(error = %e, "failed to load saved progress; starting fresh");
                None
            }
        };
        let session = progress
            .as_ref()
            .map(GameSession::resume)
            .unwrap_or_default();

        let entry = Arc::new(Mutex::new(SessionEntry {
            session,
            round: None,
            preloaded: None,
            rng,
            generation: 0,
            round_no: 0,
            timers: CancellationToken::new(),
            load_error: None,
        }));
        self.inner.sessions.insert(id, entry.clone());
        info!(session_id = %id, "session created");

        let mut guard = entry.lock().await;
        self.load_round(&mut guard, id).await;
        Self::snapshot_of(id, &guard)
    }

    /// Read-only snapshot of the session.
    pub async fn snapshot(&self, id: Uuid) -> Result<SessionSnapshot, DomainError> {
        let entry = self.entry(id)?;
        let guard = entry.lock().await;
        Ok(Self::snapshot_of(id, &guard))
    }

    /// Consume a guess. No-op (current state returned unchanged) unless the
    /// session has an active, unresolved round.
    pub async fn submit_guess(
        &self,
        id: Uuid,
        guess: Guess,
    ) -> Result<SessionSnapshot, DomainError> {
        let entry = self.entry(id)?;
        let mut guard = entry.lock().await;

        if guard.session.phase != Phase::Active {
            return Ok(Self::snapshot_of(id, &guard));
        }
        let Some(round) = guard.round.as_mut() else {
            return Ok(Self::snapshot_of(id, &guard));
        };
        if round.resolved {
            return Ok(Self::snapshot_of(id, &guard));
        }

        let correct = round.resolve(guess);
        let outcome = guard.session.resolve_guess(correct);
        debug!(
            session_id = %id,
            guess = guess.as_str(),
            correct,
            score = guard.session.score,
            streak = guard.session.streak,
            "guess resolved"
        );

        // Records are persisted immediately, not batched.
        self.persist(&guard.session).await;

        let generation = guard.generation;
        let round_no = guard.round_no;
        let token = guard.timers.clone();
        self.spawn_settle(id, generation, round_no, correct, token.clone());

        if let GuessOutcome::Correct {
            milestone: Some(milestone),
        } = outcome
        {
            self.spawn_milestone_clear(id, generation, milestone, token);
        }

        Ok(Self::snapshot_of(id, &guard))
    }

    /// Start a fresh game on an existing session. Cancels pending timers,
    /// bumps the generation so in-flight work is discarded, and keeps the
    /// monotone records.
    pub async fn restart(&self, id: Uuid) -> Result<SessionSnapshot, DomainError> {
        let entry = self.entry(id)?;
        let mut guard = entry.lock().await;

        guard.timers.cancel();
        guard.timers = CancellationToken::new();
        guard.generation += 1;
        guard.preloaded = None;
        guard.round = None;
        guard.load_error = None;
        guard.session.reset_for_restart();
        info!(session_id = %id, generation = guard.generation, "session restarted");

        self.persist(&guard.session).await;
        self.load_round(&mut guard, id).await;
        Ok(Self::snapshot_of(id, &guard))
    }

    fn entry(&self, id: Uuid) -> Result<Arc<Mutex<SessionEntry>>, DomainError> {
        self.inner
            .sessions
            .get(&id)
            .map(|e| e.value().clone())
            .ok_or_else(|| {
                DomainError::not_found(NotFoundKind::Session, format!("session {id} not found"))
            })
    }

    fn snapshot_of(id: Uuid, entry: &SessionEntry) -> SessionSnapshot {
        snapshot::snapshot(
            &id.to_string(),
            &entry.session,
            entry.round.as_ref(),
            entry.load_error.as_deref(),
        )
    }

    /// Load a fresh pair into the session. On `SelectionExhausted` the whole
    /// load is retried once; any remaining failure leaves the session in
    /// `Loading` with the error recorded, never half-active.
    async fn load_round(&self, entry: &mut SessionEntry, id: Uuid) {
        entry.session.phase = Phase::Loading;
        entry.load_error = None;

        let max_id = self.inner.config.max_pokemon_id;
        let source = self.inner.source.as_ref();
        let result = match round_selector::new_pair(source, entry.rng.as_mut(), max_id).await {
            Err(DomainError::SelectionExhausted(detail)) => {
                debug!(session_id = %id, detail, "selection exhausted; retrying round load once");
                round_selector::new_pair(source, entry.rng.as_mut(), max_id).await
            }
            result => result,
        };

        self.install_round(entry, id, result);
    }

    /// Advance after a correct guess: the right-hand Pokémon becomes the new
    /// left-hand one, and a preloaded candidate is reused when still valid.
    async fn advance_round(&self, entry: &mut SessionEntry, id: Uuid) {
        let Some(previous) = entry.round.take() else {
            return;
        };
        let left = previous.right;
        let preloaded = entry.preloaded.take();

        entry.session.phase = Phase::Loading;
        entry.load_error = None;

        let max_id = self.inner.config.max_pokemon_id;
        let source = self.inner.source.as_ref();
        let result = match round_selector::select_round(
            source,
            entry.rng.as_mut(),
            max_id,
            left.clone(),
            preloaded,
        )
        .await
        {
            Err(DomainError::SelectionExhausted(detail)) => {
                debug!(session_id = %id, detail, "selection exhausted; retrying advance once");
                round_selector::select_round(source, entry.rng.as_mut(), max_id, left, None).await
            }
            result => result,
        };

        self.install_round(entry, id, result);
    }

    fn install_round(&self, entry: &mut SessionEntry, id: Uuid, result: Result<Round, DomainError>) {
        match result {
            Ok(round) => {
                entry.round = Some(round);
                entry.round_no += 1;
                entry.session.phase = Phase::Active;
                self.spawn_preload(id, entry.generation);
            }
            Err(e) => {
                warn!(session_id = %id, error = %e, "round load failed; session stays in loading");
                entry.round = None;
                entry.load_error = Some(e.to_string());
            }
        }
    }

    async fn persist(&self, session: &GameSession) {
        let progress = session.progress(OffsetDateTime::now_utc().unix_timestamp());
        // A failed save must never fail the guess that triggered it.
        if let Err(e) = self.inner.store.save(&progress).await {
            warn!(error = %e, "failed to persist progress");
        }
    }

    fn spawn_settle(
        &self,
        id: Uuid,
        generation: u64,
        round_no: u64,
        correct: bool,
        token: CancellationToken,
    ) {
        let flow = self.clone();
        let delay = self.inner.config.settle_delay;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => flow.settle(id, generation, round_no, correct).await,
            }
        });
    }

    async fn settle(&self, id: Uuid, generation: u64, round_no: u64, correct: bool) {
        let Ok(entry) = self.entry(id) else {
            return;
        };
        let mut guard = entry.lock().await;
        if guard.generation != generation || guard.round_no != round_no {
            // A restart or a newer round superseded this timer.
            return;
        }
        if guard.session.phase != Phase::Resolved {
            return;
        }

        if correct {
            self.advance_round(&mut guard, id).await;
        } else {
            guard.session.phase = Phase::GameOver;
            info!(session_id = %id, score = guard.session.score, "game over");
        }
    }

    fn spawn_milestone_clear(
        &self,
        id: Uuid,
        generation: u64,
        milestone: u32,
        token: CancellationToken,
    ) {
        let flow = self.clone();
        let delay = self.inner.config.milestone_clear;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    let Ok(entry) = flow.entry(id) else { return };
                    let mut guard = entry.lock().await;
                    if guard.generation == generation {
                        guard.session.clear_milestone(milestone);
                    }
                }
            }
        });
    }

    /// Warm the next round's right-hand candidate in the background.
    /// Failures degrade to "no preload"; they never surface to the player.
    fn spawn_preload(&self, id: Uuid, generation: u64) {
        let flow = self.clone();
        tokio::spawn(async move {
            let Ok(entry) = flow.entry(id) else {
                return;
            };

            // Draw under the lock, fetch outside it.
            let candidate_id = {
                let mut guard = entry.lock().await;
                if guard.generation != generation {
                    return;
                }
                let max_id = flow.inner.config.max_pokemon_id;
                guard.rng.pokemon_id(max_id)
            };

            match flow.inner.source.fetch(candidate_id).await {
                Ok(pokemon) => {
                    let mut guard = entry.lock().await;
                    if guard.generation == generation {
                        guard.preloaded = Some(pokemon);
                    }
                }
                Err(e) => {
                    debug!(error = %e, candidate_id, "preload fetch failed; continuing without")
                }
            }
        });
    }
}
