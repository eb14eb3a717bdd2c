// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Movies Gateway Contributors

use std::{net::SocketAddr, sync::Arc};

use movies_gateway::{
    api::router,
    auth::OAuthProvider,
    config::Config,
    state::AppState,
    upstream::UpstreamClient,
};

#[tokio::main]
async fn main() {
    init_tracing();

    let config = Config::from_env().expect("configuration is incomplete");

    let upstream =
        UpstreamClient::new(config.api_url.clone()).expect("failed to build upstream client");
    let google =
        OAuthProvider::google(config.google.clone()).expect("failed to build Google provider");
    let facebook = OAuthProvider::facebook(config.facebook.clone())
        .expect("failed to build Facebook provider");

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("failed to parse bind address");

    let state = AppState::new(
        Arc::new(config),
        Arc::new(upstream),
        Arc::new(google),
        Arc::new(facebook),
    );
    let app = router(state);

    tracing::info!(%addr, "movies gateway listening (docs at /docs)");

    axum_server::bind(addr)
        .serve(app.into_make_service())
        .await
        .expect("HTTP server failed");
}

/// Initialize tracing from `RUST_LOG` and `LOG_FORMAT` (json or pretty).
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug"));

    let format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if format.eq_ignore_ascii_case("json") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
