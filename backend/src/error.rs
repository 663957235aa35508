//! Mapping of domain failures onto HTTP responses.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use calc_core::activities::RosterError;
use calc_core::auth::AuthError;
use calc_core::expression::EvalError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Activity not found")]
    ActivityNotFound(String),

    /// No usable `Authorization: Bearer` header
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Error calculating expression: {0}")]
    Calculation(#[from] EvalError),

    /// Evaluation succeeded but JSON has no encoding for the value
    #[error("Error calculating expression: result {0} is not a finite number")]
    NonFiniteResult(f64),

    /// Query string, path or body could not be decoded
    #[error("{message}")]
    InvalidRequest { status: StatusCode, message: String },
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::ActivityNotFound(name) => Self::ActivityNotFound(name),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::ActivityNotFound(_) => StatusCode::NOT_FOUND,
            Self::NotAuthenticated | Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::Calculation(_) | Self::NonFiniteResult(_) => StatusCode::BAD_REQUEST,
            Self::InvalidRequest { status, .. } => *status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "detail": self.to_string() }));
        let mut response = (status, body).into_response();

        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}
