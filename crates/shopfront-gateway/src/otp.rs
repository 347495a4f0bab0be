//! Typed client for the OTP login endpoint.
//!
//! Endpoint: `POST {base_url}/login.php` (form-encoded)
//!
//! | Flag field | Operation |
//! |------------|-----------|
//! | `send_otp=1` | Send (or resend) an OTP to `mobile` |
//! | `verify_otp=1` | Verify `otp` for `mobile`, returning the user |
//!
//! Success is `error` equal to `false` or `"false"`. A successful
//! verification persists the session from the returned user payload.

use serde_json::Value;
use shopfront_core::OperationResult;

use crate::normalize::{
    envelope, session_from_payload, user_payload, Messages, SuccessRule, NETWORK_ERROR,
};
use crate::session::SessionStore;
use crate::transport::{Operation, Payload, Transport};

const ENDPOINT: &str = "login.php";

/// Returned when the backend verified the OTP but the session could not be updated.
pub const SESSION_SAVE_FAILED: &str = "Unable to save session";

const SEND_MESSAGES: Messages = Messages {
    success: "OTP sent successfully",
    failure: "Failed to send OTP",
    network: NETWORK_ERROR,
};

const SEND: Operation = Operation {
    name: "send_otp",
    endpoint: ENDPOINT,
    messages: SEND_MESSAGES,
};

const RESEND: Operation = Operation {
    name: "resend_otp",
    endpoint: ENDPOINT,
    messages: SEND_MESSAGES,
};

const VERIFY: Operation = Operation {
    name: "verify_otp",
    endpoint: ENDPOINT,
    messages: Messages {
        success: "OTP verified successfully",
        failure: "Invalid OTP",
        network: NETWORK_ERROR,
    },
};

/// Client for OTP send, resend and verification.
#[derive(Debug, Clone)]
pub struct OtpClient {
    transport: Transport,
    sessions: SessionStore,
}

impl OtpClient {
    pub(crate) fn new(transport: Transport, sessions: SessionStore) -> Self {
        Self {
            transport,
            sessions,
        }
    }

    /// Ask the backend to send an OTP to `mobile`.
    pub async fn send_otp(&self, mobile: &str, country_code: &str) -> OperationResult<()> {
        self.request_otp(&SEND, mobile, country_code).await
    }

    /// Ask for another OTP. Same request as [`send_otp`](Self::send_otp);
    /// this is the only retry the gateway offers.
    pub async fn resend_otp(&self, mobile: &str, country_code: &str) -> OperationResult<()> {
        self.request_otp(&RESEND, mobile, country_code).await
    }

    /// Verify `otp` for `mobile`.
    ///
    /// On success `data` is the user payload (`data`, else `user`) exactly as
    /// the backend sent it. The stored session is replaced when the payload
    /// yields both a user id and a token, and cleared otherwise, so a new
    /// login never leaves the previous user signed in.
    pub async fn verify_otp(
        &self,
        mobile: &str,
        otp: &str,
        country_code: &str,
    ) -> OperationResult<Value> {
        let fields = [
            ("verify_otp", "1"),
            ("mobile", mobile),
            ("otp", otp),
            ("country_code", country_code),
        ];
        self.transport
            .call(&VERIFY, Payload::Form(&fields), None, |raw| {
                let body = raw.json(VERIFY.endpoint)?;
                let mut result = envelope(&body, SuccessRule::OTP, &VERIFY.messages);
                if !result.success {
                    return Ok(result);
                }
                let payload = user_payload(&body);
                let stored = match payload.and_then(session_from_payload) {
                    Some(session) => self.sessions.save_session(&session),
                    None => {
                        tracing::warn!(
                            "verified OTP carries no usable id or token; clearing previous session"
                        );
                        self.sessions.clear_session()
                    }
                };
                if let Err(err) = stored {
                    tracing::error!("failed to update session after OTP verification: {err}");
                    return Ok(OperationResult::failed(SESSION_SAVE_FAILED));
                }
                result.data = payload.cloned();
                Ok(result)
            })
            .await
    }

    async fn request_otp(
        &self,
        op: &Operation,
        mobile: &str,
        country_code: &str,
    ) -> OperationResult<()> {
        let fields = [
            ("send_otp", "1"),
            ("mobile", mobile),
            ("country_code", country_code),
        ];
        self.transport
            .call(op, Payload::Form(&fields), None, |raw| {
                let body = raw.json(op.endpoint)?;
                Ok(envelope(&body, SuccessRule::OTP, &op.messages))
            })
            .await
    }
}
