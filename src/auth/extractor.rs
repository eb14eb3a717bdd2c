// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Movies Gateway Contributors

//! Axum extractors for the two credential shapes the gateway accepts.
//!
//! [`BasicCredentials`] parses the `Authorization: Basic` header on
//! sign-in. [`TokenCookie`] reads the session token from the `token`
//! request cookie on proxied resource routes. Both reject with 401; a
//! request missing its credential gets a single terminal outcome instead
//! of being forwarded with an empty token.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::auth::cookie::TOKEN_COOKIE;
use crate::error::ApiError;

/// Username and password taken from an `Authorization: Basic` header.
#[derive(Debug, Clone)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl<S> FromRequestParts<S> for BasicCredentials
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or_else(|| ApiError::unauthorized("missing credentials"))?
            .to_str()
            .map_err(|_| ApiError::unauthorized("invalid authorization header"))?;

        let encoded = header
            .strip_prefix("Basic ")
            .ok_or_else(|| ApiError::unauthorized("invalid authorization header"))?;

        let decoded = BASE64
            .decode(encoded)
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .ok_or_else(|| ApiError::unauthorized("invalid authorization header"))?;

        let (username, password) = decoded
            .split_once(':')
            .ok_or_else(|| ApiError::unauthorized("invalid authorization header"))?;

        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

/// Session token read from the `token` request cookie.
#[derive(Debug)]
pub struct TokenCookie(pub String);

impl<S> FromRequestParts<S> for TokenCookie
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::COOKIE)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("token cookie is required"))?;

        for cookie in cookie::Cookie::split_parse(header).flatten() {
            if cookie.name() == TOKEN_COOKIE {
                return Ok(Self(cookie.value().to_string()));
            }
        }

        Err(ApiError::unauthorized("token cookie is required"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};

    async fn basic_from(header_value: Option<&str>) -> Result<BasicCredentials, ApiError> {
        let mut builder = Request::builder().uri("/auth/sign-in");
        if let Some(value) = header_value {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let (mut parts, ()) = builder.body(()).unwrap().into_parts();
        BasicCredentials::from_request_parts(&mut parts, &()).await
    }

    async fn token_from(cookie_header: Option<&str>) -> Result<TokenCookie, ApiError> {
        let mut builder = Request::builder().uri("/user-movies");
        if let Some(value) = cookie_header {
            builder = builder.header(header::COOKIE, value);
        }
        let (mut parts, ()) = builder.body(()).unwrap().into_parts();
        TokenCookie::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn basic_credentials_decode_username_and_password() {
        // base64("user:secret")
        let credentials = basic_from(Some("Basic dXNlcjpzZWNyZXQ="))
            .await
            .expect("credentials parse");
        assert_eq!(credentials.username, "user");
        assert_eq!(credentials.password, "secret");
    }

    #[tokio::test]
    async fn basic_credentials_allow_colons_in_password() {
        // base64("user:se:cret")
        let credentials = basic_from(Some("Basic dXNlcjpzZTpjcmV0"))
            .await
            .expect("credentials parse");
        assert_eq!(credentials.password, "se:cret");
    }

    #[tokio::test]
    async fn missing_authorization_header_is_unauthorized() {
        let err = basic_from(None).await.unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn bearer_scheme_is_rejected_on_sign_in() {
        let err = basic_from(Some("Bearer signed-token")).await.unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn token_cookie_is_found_among_other_cookies() {
        let TokenCookie(token) = token_from(Some("theme=dark; token=signed-token; lang=en"))
            .await
            .expect("token cookie parses");
        assert_eq!(token, "signed-token");
    }

    #[tokio::test]
    async fn missing_token_cookie_is_unauthorized() {
        let err = token_from(Some("theme=dark")).await.unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);

        let err = token_from(None).await.unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }
}
