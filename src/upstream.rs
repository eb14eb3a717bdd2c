// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Movies Gateway Contributors

//! Upstream movies API client.
//!
//! Every authenticated mutation the gateway accepts is forwarded here. The
//! client owns no retry or caching behavior: one inbound request maps to at
//! most one upstream call, and the route contracts pin the exact status the
//! upstream must answer with (201 for creates, 200 for deletes). Anything
//! else is an implementation fault and the unexpected body is dropped.
//!
//! Handlers depend on the [`MoviesApi`] trait rather than the concrete
//! [`UpstreamClient`] so tests can substitute a stub.

use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode;
use reqwest::Client;
use serde_json::Value;

use crate::models::{AuthSession, ProviderIdentity};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The upstream rejected the presented credentials or identity.
    #[error("upstream rejected the credentials")]
    Unauthorized,

    /// The upstream answered, but with a status the route contract does
    /// not allow.
    #[error("upstream returned unexpected status {status}")]
    UnexpectedStatus { status: StatusCode },

    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream response was invalid: {0}")]
    InvalidResponse(String),
}

/// Operations the gateway proxies to the upstream movies API.
#[async_trait]
pub trait MoviesApi: Send + Sync {
    /// Validate Basic credentials and obtain a session token plus profile.
    async fn sign_in(&self, username: &str, password: &str)
        -> Result<AuthSession, UpstreamError>;

    /// Exchange a federated identity for the same session shape as
    /// [`sign_in`](Self::sign_in).
    async fn sign_provider(
        &self,
        identity: &ProviderIdentity,
    ) -> Result<AuthSession, UpstreamError>;

    /// Register a new user. The payload is opaque to the gateway.
    async fn sign_up(&self, user: &Value) -> Result<(), UpstreamError>;

    /// Create a user-movie association. Expects exactly 201 and relays the
    /// upstream body.
    async fn create_user_movie(
        &self,
        token: &str,
        payload: &Value,
    ) -> Result<Value, UpstreamError>;

    /// Delete a user-movie association. Expects exactly 200 and relays the
    /// upstream body.
    async fn delete_user_movie(
        &self,
        token: &str,
        user_movie_id: &str,
    ) -> Result<Value, UpstreamError>;
}

#[derive(Debug, Clone)]
pub struct UpstreamClient {
    api_url: String,
    http: Client,
}

impl UpstreamClient {
    pub fn new(api_url: impl Into<String>) -> Result<Self, UpstreamError> {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { api_url, http })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    async fn parse_session(response: reqwest::Response) -> Result<AuthSession, UpstreamError> {
        if !response.status().is_success() {
            return Err(UpstreamError::Unauthorized);
        }
        response
            .json()
            .await
            .map_err(|e| UpstreamError::InvalidResponse(format!("session body: {e}")))
    }

    async fn parse_relayed_body(
        response: reqwest::Response,
        expected: StatusCode,
    ) -> Result<Value, UpstreamError> {
        let status = response.status();
        if status != expected {
            return Err(UpstreamError::UnexpectedStatus { status });
        }
        response
            .json()
            .await
            .map_err(|e| UpstreamError::InvalidResponse(format!("relayed body: {e}")))
    }
}

#[async_trait]
impl MoviesApi for UpstreamClient {
    async fn sign_in(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthSession, UpstreamError> {
        let response = self
            .http
            .post(self.endpoint("/api/auth/sign-in"))
            .basic_auth(username, Some(password))
            .send()
            .await?;
        Self::parse_session(response).await
    }

    async fn sign_provider(
        &self,
        identity: &ProviderIdentity,
    ) -> Result<AuthSession, UpstreamError> {
        let response = self
            .http
            .post(self.endpoint("/api/auth/sign-provider"))
            .json(identity)
            .send()
            .await?;
        Self::parse_session(response).await
    }

    async fn sign_up(&self, user: &Value) -> Result<(), UpstreamError> {
        let response = self
            .http
            .post(self.endpoint("/api/auth/sign-up"))
            .json(user)
            .send()
            .await?;
        let status = response.status();
        if status != StatusCode::CREATED {
            return Err(UpstreamError::UnexpectedStatus { status });
        }
        Ok(())
    }

    async fn create_user_movie(
        &self,
        token: &str,
        payload: &Value,
    ) -> Result<Value, UpstreamError> {
        let response = self
            .http
            .post(self.endpoint("/api/user-movies"))
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;
        Self::parse_relayed_body(response, StatusCode::CREATED).await
    }

    async fn delete_user_movie(
        &self,
        token: &str,
        user_movie_id: &str,
    ) -> Result<Value, UpstreamError> {
        let response = self
            .http
            .delete(self.endpoint(&format!("/api/user-movies/{user_movie_id}")))
            .bearer_auth(token)
            .send()
            .await?;
        Self::parse_relayed_body(response, StatusCode::OK).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scriptable stand-in for the upstream API used by handler tests.

    use super::*;

    #[derive(Clone)]
    pub(crate) enum StubOutcome {
        Relay(Value),
        UnexpectedStatus(StatusCode),
    }

    impl StubOutcome {
        fn resolve(&self) -> Result<Value, UpstreamError> {
            match self {
                StubOutcome::Relay(body) => Ok(body.clone()),
                StubOutcome::UnexpectedStatus(status) => {
                    Err(UpstreamError::UnexpectedStatus { status: *status })
                }
            }
        }
    }

    pub(crate) struct StubApi {
        /// Session handed out by sign_in/sign_provider; `None` rejects.
        pub session: Option<AuthSession>,
        pub sign_up_status: StatusCode,
        pub create: StubOutcome,
        pub delete: StubOutcome,
    }

    impl Default for StubApi {
        fn default() -> Self {
            Self {
                session: Some(
                    serde_json::from_value(serde_json::json!({
                        "token": "stub-token",
                        "id": "user-1",
                        "name": "Stub User",
                        "email": "stub@example.com",
                    }))
                    .expect("stub session parses"),
                ),
                sign_up_status: StatusCode::CREATED,
                create: StubOutcome::Relay(serde_json::json!({ "id": "user-movie-1" })),
                delete: StubOutcome::Relay(serde_json::json!({ "id": "user-movie-1" })),
            }
        }
    }

    #[async_trait]
    impl MoviesApi for StubApi {
        async fn sign_in(
            &self,
            _username: &str,
            _password: &str,
        ) -> Result<AuthSession, UpstreamError> {
            self.session.clone().ok_or(UpstreamError::Unauthorized)
        }

        async fn sign_provider(
            &self,
            _identity: &ProviderIdentity,
        ) -> Result<AuthSession, UpstreamError> {
            self.session.clone().ok_or(UpstreamError::Unauthorized)
        }

        async fn sign_up(&self, _user: &Value) -> Result<(), UpstreamError> {
            if self.sign_up_status == StatusCode::CREATED {
                Ok(())
            } else {
                Err(UpstreamError::UnexpectedStatus {
                    status: self.sign_up_status,
                })
            }
        }

        async fn create_user_movie(
            &self,
            _token: &str,
            _payload: &Value,
        ) -> Result<Value, UpstreamError> {
            self.create.resolve()
        }

        async fn delete_user_movie(
            &self,
            _token: &str,
            _user_movie_id: &str,
        ) -> Result<Value, UpstreamError> {
            self.delete.resolve()
        }
    }
}
