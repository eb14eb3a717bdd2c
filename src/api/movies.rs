// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Movies Gateway Contributors

//! Movie catalog endpoint.

use axum::response::Response;

/// Catalog listing stub.
///
/// The route exists but was never wired to the catalog API; requests to it
/// are left unanswered (no status is ever set). This documents the stub
/// rather than promising behavior.
#[utoipa::path(
    get,
    path = "/movies",
    tag = "Movies",
    responses((status = 200, description = "Unimplemented; never answers"))
)]
pub async fn list_movies() -> Response {
    std::future::pending::<()>().await;
    unreachable!()
}
