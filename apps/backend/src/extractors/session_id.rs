use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use uuid::Uuid;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Session id extracted from the `session_id` path parameter.
///
/// Only validates the shape here; existence is checked by the game flow so
/// that a missing session maps to a 404 with a stable code.
#[derive(Debug, Clone, Copy)]
pub struct SessionId(pub Uuid);

impl FromRequest for SessionId {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .match_info()
            .get("session_id")
            .ok_or_else(|| {
                AppError::bad_request(ErrorCode::InvalidSessionId, "Missing session_id parameter")
            })
            .and_then(|raw| {
                Uuid::parse_str(raw).map(SessionId).map_err(|_| {
                    AppError::bad_request(
                        ErrorCode::InvalidSessionId,
                        format!("Invalid session id: {raw}"),
                    )
                })
            });
        std::future::ready(result)
    }
}
