use actix_web::http::StatusCode;

use crate::error::AppError;
use crate::errors::{DomainError, ErrorCode, NotFoundKind, UpstreamErrorKind};

fn mapped(e: DomainError) -> AppError {
    AppError::from(e)
}

#[test]
fn session_not_found_maps_to_404() {
    let app = mapped(DomainError::not_found(NotFoundKind::Session, "no such session"));
    assert_eq!(app.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.code(), ErrorCode::SessionNotFound);
}

#[test]
fn missing_pokemon_maps_to_upstream_unavailable() {
    let app = mapped(DomainError::not_found(NotFoundKind::Pokemon, "pokemon 9999"));
    assert_eq!(app.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(app.code(), ErrorCode::UpstreamUnavailable);
}

#[test]
fn selection_exhausted_maps_to_503() {
    let app = mapped(DomainError::selection_exhausted("50 attempts"));
    assert_eq!(app.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(app.code(), ErrorCode::SelectionExhausted);
}

#[test]
fn upstream_failures_map_to_502() {
    for kind in [
        UpstreamErrorKind::Network,
        UpstreamErrorKind::Timeout,
        UpstreamErrorKind::Status(500),
        UpstreamErrorKind::Decode,
    ] {
        let app = mapped(DomainError::upstream(kind, "pokeapi"));
        assert_eq!(app.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(app.code(), ErrorCode::UpstreamUnavailable);
    }
}

#[test]
fn validation_maps_to_400() {
    let app = mapped(DomainError::validation("bad input"));
    assert_eq!(app.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.code(), ErrorCode::ValidationError);
}

#[test]
fn store_failure_maps_to_500() {
    let app = mapped(DomainError::store("disk full"));
    assert_eq!(app.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(app.code(), ErrorCode::StoreError);
}
