//! Typed client for the profile update endpoint.
//!
//! Endpoint: `POST {base_url}/update-profile.php` (JSON body)
//!
//! Unlike the form endpoints, this one is judged by HTTP status first:
//!
//! | Status | Body | Outcome |
//! |--------|------|---------|
//! | 200 | empty | success |
//! | 200 | `error: false` | success |
//! | 200 | `error: true` or anything else | failure |
//! | not 200 | any | failure |

use serde_json::{Map, Value};
use shopfront_core::{OperationResult, ProfileUpdate};

use crate::error::GatewayError;
use crate::normalize::{backend_message, envelope, Messages, SuccessRule, NETWORK_ERROR};
use crate::transport::{Operation, Payload, RawResponse, Transport};

const UPDATE: Operation = Operation {
    name: "update_profile",
    endpoint: "update-profile.php",
    messages: Messages {
        success: "Profile updated successfully",
        failure: "Failed to update profile",
        network: NETWORK_ERROR,
    },
};

/// Client for the profile update endpoint.
#[derive(Debug, Clone)]
pub struct ProfileClient {
    transport: Transport,
}

impl ProfileClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Update name, email and optionally mobile of `profile.user_id`.
    pub async fn update_profile(&self, profile: &ProfileUpdate) -> OperationResult<()> {
        self.transport
            .call(&UPDATE, Payload::Json(request_body(profile)), None, |raw| {
                profile_outcome(&raw, &UPDATE)
            })
            .await
    }
}

fn request_body(profile: &ProfileUpdate) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert("user_id".into(), profile.user_id.as_str().into());
    body.insert("name".into(), profile.name.as_str().into());
    body.insert("email".into(), profile.email.as_str().into());
    if let Some(mobile) = &profile.mobile {
        body.insert("mobile".into(), mobile.as_str().into());
    }
    body
}

fn profile_outcome(
    raw: &RawResponse,
    op: &Operation,
) -> Result<OperationResult<()>, GatewayError> {
    if raw.status != 200 {
        tracing::info!(status = raw.status, "profile update rejected by status");
        let message = raw
            .json(op.endpoint)
            .ok()
            .and_then(|body| backend_message(&body))
            .unwrap_or_else(|| op.messages.failure.to_string());
        return Ok(OperationResult::failed(message));
    }
    if raw.body.trim().is_empty() {
        return Ok(OperationResult::succeeded(op.messages.success, None));
    }
    let body = raw.json(op.endpoint)?;
    Ok(envelope(&body, SuccessRule::PROFILE, &op.messages))
}
