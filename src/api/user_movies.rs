// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Movies Gateway Contributors

//! User-movie association endpoints.
//!
//! Pure proxies: the payload schema belongs to the upstream API and the
//! gateway does not interpret it. The bearer token comes from the session
//! cookie.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::{auth::TokenCookie, error::ApiError, state::AppState};

/// Create a user-movie association.
#[utoipa::path(
    post,
    path = "/user-movies",
    tag = "UserMovies",
    responses(
        (status = 201, description = "Upstream body, relayed"),
        (status = 401, description = "Missing token cookie"),
        (status = 500, description = "Upstream answered with an unexpected status"),
    )
)]
pub async fn create_user_movie(
    State(app): State<AppState>,
    TokenCookie(token): TokenCookie,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let body = app.upstream.create_user_movie(&token, &payload).await?;
    Ok((StatusCode::CREATED, Json(body)))
}

/// Delete a user-movie association.
#[utoipa::path(
    delete,
    path = "/user-movies/{user_movie_id}",
    params(
        ("user_movie_id" = String, Path, description = "Identifier of the association to delete")
    ),
    tag = "UserMovies",
    responses(
        (status = 200, description = "Upstream body, relayed"),
        (status = 401, description = "Missing token cookie"),
        (status = 500, description = "Upstream answered with an unexpected status"),
    )
)]
pub async fn delete_user_movie(
    State(app): State<AppState>,
    TokenCookie(token): TokenCookie,
    Path(user_movie_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let body = app
        .upstream
        .delete_user_movie(&token, &user_movie_id)
        .await?;
    Ok(Json(body))
}
