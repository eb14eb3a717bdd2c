// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Movies Gateway Contributors

//! Authentication for the gateway.
//!
//! - `cookie` - session cookie binding (token travels only via cookie)
//! - `extractor` - Basic credential and token cookie extractors
//! - `oauth` - federated identity providers (Google, Facebook)

pub mod cookie;
pub mod extractor;
pub mod oauth;

pub use cookie::{session_cookie, TOKEN_COOKIE};
pub use extractor::{BasicCredentials, TokenCookie};
pub use oauth::{IdentityProvider, OAuthError, OAuthProvider};
