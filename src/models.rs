// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Movies Gateway Contributors

//! Wire types shared by the auth flows and the upstream client.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Successful authentication result issued by the upstream API.
///
/// The upstream answers `{"token": ..., ...user}`. The token is split off
/// structurally so it can only travel via the session cookie: serializing
/// the remaining [`profile`](Self::profile) map can never leak it into a
/// response body.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub token: String,
    /// Everything the upstream returned about the user, minus the token.
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

/// Identity proof obtained from an OAuth provider, exchanged with the
/// upstream API for an [`AuthSession`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderIdentity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
}

/// Response for POST /auth/sign-up.
#[derive(Debug, Serialize, ToSchema)]
pub struct SignUpResponse {
    pub message: String,
}

impl SignUpResponse {
    pub fn user_created() -> Self {
        Self {
            message: "user created".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_session_splits_token_from_profile() {
        let session: AuthSession = serde_json::from_value(serde_json::json!({
            "token": "signed-token",
            "id": "user-1",
            "email": "user@example.com",
        }))
        .expect("session parses");

        assert_eq!(session.token, "signed-token");
        assert_eq!(session.profile["id"], "user-1");
        assert_eq!(session.profile["email"], "user@example.com");
        assert!(!session.profile.contains_key("token"));
    }

    #[test]
    fn provider_identity_omits_absent_name() {
        let identity = ProviderIdentity {
            name: None,
            email: "user@example.com".to_string(),
        };
        let json = serde_json::to_value(&identity).unwrap();
        assert_eq!(json, serde_json::json!({ "email": "user@example.com" }));
    }
}
