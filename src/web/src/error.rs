use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use courtside_core::DomainError;
use log::error;
use serde_json::json;

pub type ApiResult<T> = Result<T, ApiError>;

/// Everything a handler can fail with. Domain failures keep their tagged
/// kind so clients can branch on it; the body shape is the same for all
/// three variants.
#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    BadRequest(String),
    InternalError(String),
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        ApiError::Domain(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match &self {
            ApiError::Domain(domain) => (status_for(domain), domain.kind(), domain.to_string()),
            ApiError::BadRequest(message) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "bad_request", message.clone())
            }
            ApiError::InternalError(message) => {
                error!("internal error: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", message.clone())
            }
        };

        (
            status,
            Json(json!({
                "error": {
                    "kind": kind,
                    "message": message,
                }
            })),
        )
            .into_response()
    }
}

fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::PlayerNotFound { .. }
        | DomainError::TeamNotFound { .. }
        | DomainError::SessionNotFound { .. }
        | DomainError::PropositionNotFound { .. }
        | DomainError::GameNotFound { .. } => StatusCode::NOT_FOUND,

        DomainError::AlreadySelected { .. }
        | DomainError::PropositionLocked { .. }
        | DomainError::PlayerCommitted { .. }
        | DomainError::SessionHasGames { .. } => StatusCode::CONFLICT,

        DomainError::OracleTimeout { .. } => StatusCode::GATEWAY_TIMEOUT,

        DomainError::OracleUnavailable { .. } | DomainError::InvalidOracleResult { .. } => {
            StatusCode::BAD_GATEWAY
        }

        DomainError::InvalidRosterSize { .. }
        | DomainError::DuplicateRosterEntry { .. }
        | DomainError::InvalidComposition { .. }
        | DomainError::NoPropositionSelected { .. }
        | DomainError::TeamNotInSelection { .. }
        | DomainError::TeamNotInGame { .. }
        | DomainError::InsufficientTeams { .. }
        | DomainError::DuplicateScoreEntry { .. }
        | DomainError::InvalidScore { .. }
        | DomainError::EmptyPositions
        | DomainError::EmptyName => StatusCode::UNPROCESSABLE_ENTITY,
    }
}
