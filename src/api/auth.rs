// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Movies Gateway Contributors

//! Authentication endpoints.
//!
//! Successful sign-in and federated callbacks all converge on the same
//! terminal shape: the session token goes into the `token` cookie and the
//! response body carries the user profile only.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::{
    auth::{session_cookie, BasicCredentials, IdentityProvider},
    error::ApiError,
    models::{AuthSession, SignUpResponse},
    state::AppState,
};

/// Sign in with HTTP Basic credentials.
///
/// The upstream API validates the credentials and issues the session
/// token; the gateway keeps no login state of its own.
#[utoipa::path(
    post,
    path = "/auth/sign-in",
    tag = "Auth",
    responses(
        (status = 200, description = "User profile; session token set as cookie"),
        (status = 401, description = "Missing or invalid credentials"),
    )
)]
pub async fn sign_in(
    State(app): State<AppState>,
    credentials: BasicCredentials,
) -> Result<Response, ApiError> {
    let session = app
        .upstream
        .sign_in(&credentials.username, &credentials.password)
        .await?;
    Ok(session_response(session, app.config.dev))
}

/// Register a new user via the upstream API.
#[utoipa::path(
    post,
    path = "/auth/sign-up",
    tag = "Auth",
    responses(
        (status = 201, description = "User created", body = SignUpResponse),
    )
)]
pub async fn sign_up(
    State(app): State<AppState>,
    Json(user): Json<Value>,
) -> Result<(StatusCode, Json<SignUpResponse>), ApiError> {
    app.upstream.sign_up(&user).await?;
    Ok((StatusCode::CREATED, Json(SignUpResponse::user_created())))
}

/// Redirect to the Google consent page.
#[utoipa::path(
    get,
    path = "/auth/google-oauth",
    tag = "Auth",
    responses((status = 303, description = "Redirect to Google consent"))
)]
pub async fn google_oauth(State(app): State<AppState>) -> Redirect {
    oauth_redirect(app.google.as_ref())
}

/// Complete the Google login from the provider callback.
#[utoipa::path(
    get,
    path = "/auth/google-oauth/callback",
    tag = "Auth",
    responses(
        (status = 200, description = "User profile; session token set as cookie"),
        (status = 401, description = "Federated login failed"),
    )
)]
pub async fn google_oauth_callback(
    State(app): State<AppState>,
    Query(params): Query<OAuthCallbackParams>,
) -> Result<Response, ApiError> {
    complete_federated_login(&app, app.google.as_ref(), params).await
}

/// Redirect to the Facebook consent page.
#[utoipa::path(
    get,
    path = "/auth/facebook",
    tag = "Auth",
    responses((status = 303, description = "Redirect to Facebook consent"))
)]
pub async fn facebook_oauth(State(app): State<AppState>) -> Redirect {
    oauth_redirect(app.facebook.as_ref())
}

/// Complete the Facebook login from the provider callback.
#[utoipa::path(
    get,
    path = "/auth/facebook/callback",
    tag = "Auth",
    responses(
        (status = 200, description = "User profile; session token set as cookie"),
        (status = 401, description = "Federated login failed"),
    )
)]
pub async fn facebook_oauth_callback(
    State(app): State<AppState>,
    Query(params): Query<OAuthCallbackParams>,
) -> Result<Response, ApiError> {
    complete_federated_login(&app, app.facebook.as_ref(), params).await
}

#[derive(Debug, Deserialize)]
pub struct OAuthCallbackParams {
    pub code: Option<String>,
    #[allow(dead_code)]
    pub state: Option<String>,
    pub error: Option<String>,
}

fn oauth_redirect(provider: &dyn IdentityProvider) -> Redirect {
    // The state parameter is generated fresh per request but not persisted;
    // verifying it on the callback would need a session store the gateway
    // deliberately does not have.
    let state = Uuid::new_v4().to_string();
    Redirect::to(&provider.authorize_url(&state))
}

async fn complete_federated_login(
    app: &AppState,
    provider: &dyn IdentityProvider,
    params: OAuthCallbackParams,
) -> Result<Response, ApiError> {
    if let Some(error) = params.error {
        return Err(crate::auth::OAuthError::Denied(error).into());
    }
    let code = params
        .code
        .ok_or_else(|| ApiError::unauthorized("authorization code is missing"))?;

    let identity = provider.exchange_code(&code).await?;
    let session = app.upstream.sign_provider(&identity).await?;
    Ok(session_response(session, app.config.dev))
}

/// Bind the token to the session cookie and answer with the profile only.
fn session_response(session: AuthSession, dev: bool) -> Response {
    let cookie = session_cookie(&session.token, dev);
    (
        [(header::SET_COOKIE, cookie.to_string())],
        Json(Value::Object(session.profile)),
    )
        .into_response()
}
