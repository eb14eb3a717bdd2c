// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Movies Gateway Contributors

//! Session cookie binding.
//!
//! The upstream-issued token is communicated to clients exclusively via
//! this cookie; it never appears in a JSON response body.

use cookie::Cookie;

/// Name of the session cookie carrying the upstream token.
pub const TOKEN_COOKIE: &str = "token";

/// Build the session cookie for a freshly issued token.
///
/// `HttpOnly` and `Secure` toggle together off the development-mode flag:
/// both are set unless the gateway runs in permissive development mode.
pub fn session_cookie(token: &str, dev: bool) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token.to_owned()))
        .path("/")
        .http_only(!dev)
        .secure(!dev)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_cookie_sets_transport_flags() {
        let cookie = session_cookie("signed-token", false);
        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.value(), "signed-token");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn dev_cookie_relaxes_both_flags_together() {
        let cookie = session_cookie("signed-token", true);
        assert_ne!(cookie.http_only(), Some(true));
        assert_ne!(cookie.secure(), Some(true));
    }
}
