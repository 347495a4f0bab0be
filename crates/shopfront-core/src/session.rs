//! # Session
//!
//! The locally persisted identity of the signed-in user. Created when an OTP
//! is verified, overwritten on every new login, never expired client-side.

use serde::{Deserialize, Serialize};

use crate::identity::UserId;

/// Authenticated user identity and token.
///
/// Stored as `{"userId": "...", "token": "..."}`. The custom `Debug`
/// implementation redacts the token.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: UserId,
    pub token: String,
}

impl Session {
    pub fn new(user_id: UserId, token: impl Into<String>) -> Self {
        Self {
            user_id,
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field("token", &"[REDACTED]")
            .finish()
    }
}
