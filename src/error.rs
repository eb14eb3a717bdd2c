// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Movies Gateway Contributors

//! Handler-facing error type.
//!
//! Every route funnels failures into [`ApiError`]; there is no local
//! recovery or retry anywhere in the gateway. The taxonomy is small:
//! unauthorized (bad or missing credentials, failed federated login),
//! implementation fault (the upstream answered with a status the route
//! contract does not allow), and bad gateway (transport-level failure
//! talking to the upstream).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::auth::oauth::OAuthError;
use crate::upstream::UpstreamError;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// The upstream responded with a status the route contract does not
    /// allow; its body is never relayed in that case.
    pub fn bad_implementation() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message)
    }
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Unauthorized => Self::unauthorized("invalid credentials"),
            UpstreamError::UnexpectedStatus { status } => {
                tracing::error!(%status, "upstream returned an unexpected status");
                Self::bad_implementation()
            }
            UpstreamError::Transport(e) => {
                tracing::error!(error = %e, "upstream request failed");
                Self::bad_gateway("upstream request failed")
            }
            UpstreamError::InvalidResponse(msg) => {
                tracing::error!(%msg, "upstream response was invalid");
                Self::bad_gateway("upstream response was invalid")
            }
        }
    }
}

impl From<OAuthError> for ApiError {
    fn from(err: OAuthError) -> Self {
        tracing::warn!(error = %err, "federated login failed");
        Self::unauthorized("federated login failed")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn constructors_set_status_and_message() {
        let unauthorized = ApiError::unauthorized("missing credentials");
        assert_eq!(unauthorized.status, StatusCode::UNAUTHORIZED);
        assert_eq!(unauthorized.message, "missing credentials");

        let fault = ApiError::bad_implementation();
        assert_eq!(fault.status, StatusCode::INTERNAL_SERVER_ERROR);

        let gateway = ApiError::bad_gateway("connection refused");
        assert_eq!(gateway.status, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn unexpected_upstream_status_maps_to_implementation_fault() {
        let err: ApiError = UpstreamError::UnexpectedStatus {
            status: StatusCode::OK,
        }
        .into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn upstream_rejection_maps_to_unauthorized() {
        let err: ApiError = UpstreamError::Unauthorized.into();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn into_response_returns_json_body() {
        let response = ApiError::unauthorized("bad credentials").into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body_bytes.to_vec()).unwrap();
        assert_eq!(body, r#"{"error":"bad credentials"}"#);
    }
}
