//! # Response Normalization
//!
//! The storefront backend does not agree with itself on how to say "it
//! worked". Each endpoint family has its own rule, and the rules are kept
//! separate on purpose: the backend is fixed, so the asymmetry is modelled
//! rather than smoothed over.
//!
//! | Family | Field | Success when |
//! |--------|-------|--------------|
//! | OTP, addresses | `error` | `false` or `"false"` ([`ErrorFlag::Lenient`]) |
//! | Profile | `error` | `false` only ([`ErrorFlag::Strict`]), or an empty 200 body |
//! | Notifications | `status` | `true` only ([`SuccessRule::StatusFlag`]) |
//!
//! Anything else, including a missing field, is a failure.

use serde::de::DeserializeOwned;
use serde_json::Value;
use shopfront_core::wire::{scalar_count, scalar_text};
use shopfront_core::{OperationResult, Session, UserId};

/// Payload fields holding the user id, in order of precedence.
pub const USER_ID_FIELDS: &[&str] = &["id", "user_id"];

/// Payload fields holding the session token, in order of precedence.
pub const TOKEN_FIELDS: &[&str] = &["token", "api_token", "fcm_id"];

/// Response fields holding the unread notification count, in order of precedence.
pub const COUNT_FIELDS: &[&str] = &["count", "unread_count"];

/// How the `error` field is compared against `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorFlag {
    /// Boolean `false` or the string `"false"`.
    Lenient,
    /// Boolean `false` only.
    Strict,
}

/// Success rule for one endpoint family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessRule {
    /// Success is signalled by `error` being false.
    ErrorFlag(ErrorFlag),
    /// Success is signalled by `status` being boolean `true`.
    StatusFlag,
}

impl SuccessRule {
    pub const OTP: Self = Self::ErrorFlag(ErrorFlag::Lenient);
    pub const ADDRESS: Self = Self::ErrorFlag(ErrorFlag::Lenient);
    pub const PROFILE: Self = Self::ErrorFlag(ErrorFlag::Strict);
    pub const NOTIFICATION: Self = Self::StatusFlag;

    /// Apply the rule to a decoded response body.
    pub fn is_success(&self, body: &Value) -> bool {
        match self {
            Self::ErrorFlag(ErrorFlag::Lenient) => match body.get("error") {
                Some(Value::Bool(flag)) => !flag,
                Some(Value::String(s)) => s == "false",
                _ => false,
            },
            Self::ErrorFlag(ErrorFlag::Strict) => {
                matches!(body.get("error"), Some(Value::Bool(false)))
            }
            Self::StatusFlag => matches!(body.get("status"), Some(Value::Bool(true))),
        }
    }
}

/// Fixed messages for one operation, used when the backend sends none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub success: &'static str,
    pub failure: &'static str,
    /// Returned for transport failures instead of the technical error.
    pub network: &'static str,
}

/// Generic message for transport-level failures.
pub const NETWORK_ERROR: &str = "Network error occurred";

/// The backend's `message`, if it sent a non-empty string.
pub fn backend_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

/// Resolve the first candidate field carrying a string or number.
///
/// Candidates are tried in order; empty strings, `null` and non-scalar
/// values are skipped. Numbers are rendered as text (`42` becomes `"42"`).
pub fn resolve_field(payload: &Value, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .find_map(|field| payload.get(*field).and_then(scalar_text))
}

/// Resolve a count from the first candidate carrying a non-negative integer.
pub fn resolve_count(payload: &Value, candidates: &[&str]) -> Option<u64> {
    candidates
        .iter()
        .find_map(|field| payload.get(*field).and_then(scalar_count))
}

/// Build the `{success, message}` envelope for a decoded body.
pub fn envelope<T>(body: &Value, rule: SuccessRule, messages: &Messages) -> OperationResult<T> {
    let success = rule.is_success(body);
    let fallback = if success {
        messages.success
    } else {
        messages.failure
    };
    OperationResult {
        success,
        message: backend_message(body).unwrap_or_else(|| fallback.to_string()),
        data: None,
    }
}

/// The user payload of a login response: `data`, falling back to `user`.
pub fn user_payload(body: &Value) -> Option<&Value> {
    ["data", "user"]
        .iter()
        .filter_map(|field| body.get(*field))
        .find(|value| !value.is_null())
}

/// Build a session from a user payload, if both id and token resolve.
pub fn session_from_payload(payload: &Value) -> Option<Session> {
    let user_id = resolve_field(payload, USER_ID_FIELDS).and_then(|id| UserId::new(id).ok())?;
    let token = resolve_field(payload, TOKEN_FIELDS)?;
    Some(Session::new(user_id, token))
}

/// Items of the `data` array, or nothing when it is absent or not an array.
pub fn data_items(body: &Value) -> &[Value] {
    body.get("data")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Decode each item independently, skipping (and logging) malformed ones.
pub fn decode_items<T: DeserializeOwned>(items: &[Value], kind: &'static str) -> Vec<T> {
    items
        .iter()
        .filter_map(|item| match serde_json::from_value(item.clone()) {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                tracing::warn!(kind, "skipping malformed record: {err}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    const MESSAGES: Messages = Messages {
        success: "done",
        failure: "failed",
        network: NETWORK_ERROR,
    };

    #[test]
    fn lenient_error_flag_accepts_bool_and_string_false() {
        assert!(SuccessRule::OTP.is_success(&json!({"error": false})));
        assert!(SuccessRule::OTP.is_success(&json!({"error": "false"})));
    }

    #[test]
    fn lenient_error_flag_rejects_everything_else() {
        for body in [
            json!({"error": true}),
            json!({"error": "true"}),
            json!({"error": "False"}),
            json!({"error": 0}),
            json!({"error": null}),
            json!({}),
            json!("false"),
        ] {
            assert!(!SuccessRule::ADDRESS.is_success(&body), "{body}");
        }
    }

    #[test]
    fn strict_error_flag_rejects_string_false() {
        assert!(SuccessRule::PROFILE.is_success(&json!({"error": false})));
        assert!(!SuccessRule::PROFILE.is_success(&json!({"error": "false"})));
        assert!(!SuccessRule::PROFILE.is_success(&json!({"error": true})));
    }

    #[test]
    fn status_flag_ignores_error_field() {
        assert!(SuccessRule::NOTIFICATION.is_success(&json!({"status": true})));
        assert!(!SuccessRule::NOTIFICATION.is_success(&json!({"error": false})));
        assert!(!SuccessRule::NOTIFICATION.is_success(&json!({"status": "true"})));
        assert!(!SuccessRule::NOTIFICATION.is_success(&json!({"status": 1})));
    }

    #[test]
    fn envelope_prefers_backend_message() {
        let result: OperationResult<()> =
            envelope(&json!({"error": true, "message": "Not found"}), SuccessRule::ADDRESS, &MESSAGES);
        assert!(!result.success);
        assert_eq!(result.message, "Not found");
    }

    #[test]
    fn envelope_falls_back_per_outcome() {
        let ok: OperationResult<()> =
            envelope(&json!({"error": false, "message": "  "}), SuccessRule::ADDRESS, &MESSAGES);
        assert_eq!(ok.message, "done");
        let failed: OperationResult<()> = envelope(&json!({}), SuccessRule::ADDRESS, &MESSAGES);
        assert_eq!(failed.message, "failed");
    }

    #[test]
    fn field_resolution_follows_precedence() {
        let payload = json!({"user_id": "9", "id": 42});
        assert_eq!(resolve_field(&payload, USER_ID_FIELDS).as_deref(), Some("42"));

        let payload = json!({"id": "", "user_id": 9});
        assert_eq!(resolve_field(&payload, USER_ID_FIELDS).as_deref(), Some("9"));

        let payload = json!({"fcm_id": "push", "token": "jwt"});
        assert_eq!(resolve_field(&payload, TOKEN_FIELDS).as_deref(), Some("jwt"));

        assert_eq!(resolve_field(&json!({"name": "x"}), USER_ID_FIELDS), None);
    }

    #[test]
    fn user_payload_falls_back_to_user_field() {
        let body = json!({"data": null, "user": {"id": 1}});
        assert_eq!(user_payload(&body), Some(&json!({"id": 1})));

        let body = json!({"data": {"id": 2}, "user": {"id": 1}});
        assert_eq!(user_payload(&body), Some(&json!({"id": 2})));

        assert_eq!(user_payload(&json!({"error": false})), None);
    }

    #[test]
    fn session_requires_id_and_token() {
        let session = session_from_payload(&json!({"id": 42, "fcm_id": "tok"})).unwrap();
        assert_eq!(session.user_id.as_str(), "42");
        assert_eq!(session.token, "tok");

        assert!(session_from_payload(&json!({"id": 42})).is_none());
        assert!(session_from_payload(&json!({"fcm_id": "tok"})).is_none());
    }

    #[test]
    fn counts_resolve_from_numbers_or_strings() {
        assert_eq!(resolve_count(&json!({"count": "4"}), COUNT_FIELDS), Some(4));
        assert_eq!(resolve_count(&json!({"unread_count": 2}), COUNT_FIELDS), Some(2));
        assert_eq!(resolve_count(&json!({"count": "n/a"}), COUNT_FIELDS), None);
    }

    #[test]
    fn data_items_is_empty_for_non_arrays() {
        assert!(data_items(&json!({"data": {"id": 1}})).is_empty());
        assert!(data_items(&json!({})).is_empty());
        assert_eq!(data_items(&json!({"data": [1, 2]})).len(), 2);
    }

    #[test]
    fn decode_items_skips_malformed_records() {
        let items = [json!(1), json!("x"), json!({"id": 3})];
        let decoded: Vec<u32> = decode_items(&items, "number");
        assert_eq!(decoded, vec![1]);
    }

    proptest! {
        #[test]
        fn any_string_other_than_false_fails_lenient_rule(flag in "\\PC*") {
            prop_assume!(flag != "false");
            let body = json!({"error": flag});
            prop_assert!(!SuccessRule::OTP.is_success(&body));
        }

        #[test]
        fn any_number_fails_every_error_rule(flag in any::<i64>()) {
            let body = json!({"error": flag});
            prop_assert!(!SuccessRule::OTP.is_success(&body));
            prop_assert!(!SuccessRule::PROFILE.is_success(&body));
        }
    }
}
