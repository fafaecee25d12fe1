//! Session HTTP routes: the imperative surface the presentation layer drives.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::domain::Guess;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::session_id::SessionId;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize, Default)]
struct CreateSessionRequest {
    /// Optional seed for reproducible round generation.
    seed: Option<u64>,
}

/// POST /api/sessions
///
/// Creates a session and loads its first round. Always returns the snapshot;
/// a failed initial load leaves the session in `loading` with `load_error`
/// set, and the client recovers via restart.
async fn create_session(
    app_state: web::Data<AppState>,
    body: Option<web::Json<CreateSessionRequest>>,
) -> Result<HttpResponse, AppError> {
    let seed = body.map(|b| b.into_inner()).unwrap_or_default().seed;
    let snapshot = app_state.game.create_session(seed).await;
    Ok(HttpResponse::Created().json(snapshot))
}

/// GET /api/sessions/{session_id}
async fn get_session(
    session_id: SessionId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let snapshot = app_state.game.snapshot(session_id.0).await?;
    Ok(HttpResponse::Ok().json(snapshot))
}

#[derive(Debug, Deserialize)]
struct GuessRequest {
    direction: String,
}

/// POST /api/sessions/{session_id}/guess
///
/// Submits a guess. Duplicate submissions against an already-resolved round
/// return the current state unchanged.
async fn submit_guess(
    session_id: SessionId,
    app_state: web::Data<AppState>,
    body: web::Json<GuessRequest>,
) -> Result<HttpResponse, AppError> {
    let guess = Guess::parse(&body.direction).ok_or_else(|| {
        AppError::bad_request(
            ErrorCode::InvalidDirection,
            format!("direction must be \"higher\" or \"lower\", got {:?}", body.direction),
        )
    })?;

    let snapshot = app_state.game.submit_guess(session_id.0, guess).await?;
    Ok(HttpResponse::Ok().json(snapshot))
}

/// POST /api/sessions/{session_id}/restart
async fn restart(
    session_id: SessionId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let snapshot = app_state.game.restart(session_id.0).await?;
    Ok(HttpResponse::Ok().json(snapshot))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(create_session)));
    cfg.service(web::resource("/{session_id}").route(web::get().to(get_session)));
    cfg.service(web::resource("/{session_id}/guess").route(web::post().to(submit_guess)));
    cfg.service(web::resource("/{session_id}/restart").route(web::post().to(restart)));
}
