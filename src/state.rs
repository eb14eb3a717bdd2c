// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Movies Gateway Contributors

//! Shared application state.
//!
//! Everything the router needs is constructed once at startup and injected
//! here: the upstream client and both identity providers sit behind traits
//! so tests can swap in stubs. Requests share nothing mutable.

use std::sync::Arc;

use crate::auth::IdentityProvider;
use crate::config::Config;
use crate::upstream::MoviesApi;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub upstream: Arc<dyn MoviesApi>,
    pub google: Arc<dyn IdentityProvider>,
    pub facebook: Arc<dyn IdentityProvider>,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        upstream: Arc<dyn MoviesApi>,
        google: Arc<dyn IdentityProvider>,
        facebook: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            config,
            upstream,
            google,
            facebook,
        }
    }

    #[cfg(test)]
    pub(crate) fn for_tests(upstream: Arc<dyn MoviesApi>, dev: bool) -> Self {
        use crate::auth::oauth::testing::StubProvider;
        use crate::config::OAuthCredentials;

        let stub_credentials = OAuthCredentials {
            client_id: "stub-client".to_string(),
            client_secret: "stub-secret".to_string(),
            redirect_uri: "http://localhost/callback".to_string(),
        };

        Self::new(
            Arc::new(Config {
                host: "127.0.0.1".to_string(),
                port: 0,
                api_url: "http://upstream.invalid".to_string(),
                dev,
                google: stub_credentials.clone(),
                facebook: stub_credentials,
            }),
            upstream,
            Arc::new(StubProvider::default()),
            Arc::new(StubProvider::default()),
        )
    }
}
