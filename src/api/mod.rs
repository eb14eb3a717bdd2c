// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Movies Gateway Contributors

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{models::SignUpResponse, state::AppState};

pub mod auth;
pub mod movies;
pub mod user_movies;

pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/auth/sign-in", post(auth::sign_in))
        .route("/auth/sign-up", post(auth::sign_up))
        .route("/auth/google-oauth", get(auth::google_oauth))
        .route(
            "/auth/google-oauth/callback",
            get(auth::google_oauth_callback),
        )
        .route("/auth/facebook", get(auth::facebook_oauth))
        .route("/auth/facebook/callback", get(auth::facebook_oauth_callback))
        .route("/movies", get(movies::list_movies))
        .route("/user-movies", post(user_movies::create_user_movie))
        .route(
            "/user-movies/{user_movie_id}",
            delete(user_movies::delete_user_movie),
        )
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::sign_in,
        auth::sign_up,
        auth::google_oauth,
        auth::google_oauth_callback,
        auth::facebook_oauth,
        auth::facebook_oauth_callback,
        movies::list_movies,
        user_movies::create_user_movie,
        user_movies::delete_user_movie
    ),
    components(schemas(SignUpResponse)),
    tags(
        (name = "Auth", description = "Sign-in, sign-up and federated login"),
        (name = "Movies", description = "Movie catalog"),
        (name = "UserMovies", description = "Proxied user-movie associations")
    )
)]
struct ApiDoc;
