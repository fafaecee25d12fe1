#![allow(dead_code)]

//! Shared fixtures for integration tests.

use std::sync::Arc;
use std::time::Duration;

use actix_web::web;
use backend::config::GameConfig;
use backend::domain::snapshot::SessionSnapshot;
use backend::domain::Phase;
use backend::services::{GameFlow, PokemonSource, ProgressStore};
use backend::state::app_state::AppState;
use uuid::Uuid;

// Auto-initialize logging for all integration tests in this binary
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}

pub fn flow(
    source: Arc<dyn PokemonSource>,
    store: Arc<dyn ProgressStore>,
    config: GameConfig,
) -> GameFlow {
    GameFlow::new(source, store, config)
}

pub fn state(flow: GameFlow) -> web::Data<AppState> {
    web::Data::new(AppState::new(flow))
}

/// Poll until the session reaches `phase`, or panic after two seconds.
///
/// Settle and milestone timers run on spawned tasks, so tests observe their
/// effects by polling rather than sleeping for magic durations.
pub async fn wait_for_phase(flow: &GameFlow, id: Uuid, phase: Phase) -> SessionSnapshot {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    loop {
        let snap = flow.snapshot(id).await.expect("session should exist");
        if snap.phase == phase {
            return snap;
        }
        if tokio::time::Instant::now() >= deadline {
            panic!(
                "timed out waiting for phase {:?}; session stuck in {:?}",
                phase, snap.phase
            );
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

pub fn session_uuid(snapshot: &SessionSnapshot) -> Uuid {
    Uuid::parse_str(&snapshot.session_id).expect("snapshot carries a valid uuid")
}
