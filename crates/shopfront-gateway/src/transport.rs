//! HTTP plumbing shared by the endpoint clients.
//!
//! Sends form-encoded or JSON POSTs with the access key attached, runs the
//! caller's decoder on the raw response, and converts every transport
//! failure into the operation's network-error result. Nothing here retries:
//! the only retry is the user asking for another OTP.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::{Map, Value};
use shopfront_core::OperationResult;
use url::Url;
use zeroize::Zeroizing;

use crate::error::GatewayError;
use crate::normalize::Messages;
use crate::observe::{CallRecord, GatewayObserver};

/// Static description of one gateway operation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Operation {
    pub name: &'static str,
    pub endpoint: &'static str,
    pub messages: Messages,
}

/// Request body of a call.
pub(crate) enum Payload<'a> {
    /// `application/x-www-form-urlencoded` fields; `accesskey` is prepended.
    Form(&'a [(&'a str, &'a str)]),
    /// JSON object; `accesskey` is inserted.
    Json(Map<String, Value>),
}

/// Status and body of a completed HTTP exchange.
#[derive(Debug)]
pub(crate) struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    /// Decode the body as JSON.
    pub fn json(&self, endpoint: &str) -> Result<Value, GatewayError> {
        serde_json::from_str(&self.body).map_err(|source| GatewayError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}

/// Shared HTTP client, base URL, access key and observer.
#[derive(Clone)]
pub(crate) struct Transport {
    http: reqwest::Client,
    base_url: Url,
    access_key: Arc<Zeroizing<String>>,
    observer: Arc<dyn GatewayObserver>,
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url)
            .field("access_key", &"[REDACTED]")
            .field("observer", &self.observer)
            .finish()
    }
}

impl Transport {
    pub(crate) fn new(
        http: reqwest::Client,
        base_url: Url,
        access_key: Zeroizing<String>,
        observer: Arc<dyn GatewayObserver>,
    ) -> Self {
        Self {
            http,
            base_url,
            access_key: Arc::new(access_key),
            observer,
        }
    }

    /// Run one operation end to end.
    ///
    /// `timeout` replaces the client-wide timeout for this request only;
    /// callers pass a bound no longer than the client-wide one.
    /// `decode` maps a received response to the result; a decode error
    /// (non-JSON body) is treated like any other transport failure.
    pub(crate) async fn call<T>(
        &self,
        op: &Operation,
        payload: Payload<'_>,
        timeout: Option<Duration>,
        decode: impl FnOnce(RawResponse) -> Result<OperationResult<T>, GatewayError>,
    ) -> OperationResult<T> {
        let started = Instant::now();
        let outcome = match self.send(op.endpoint, payload, timeout).await {
            Ok(raw) => decode(raw),
            Err(err) => Err(err),
        };

        let (result, transport_error) = match outcome {
            Ok(result) => (result, None),
            Err(err) => (OperationResult::failed(op.messages.network), Some(err)),
        };

        self.observer.on_call(&CallRecord {
            operation: op.name,
            endpoint: op.endpoint,
            success: result.success,
            message: &result.message,
            elapsed: started.elapsed(),
            transport_error: transport_error.as_ref(),
        });
        result
    }

    async fn send(
        &self,
        endpoint: &'static str,
        payload: Payload<'_>,
        timeout: Option<Duration>,
    ) -> Result<RawResponse, GatewayError> {
        let url = self
            .base_url
            .join(endpoint)
            .map_err(|source| GatewayError::Endpoint {
                endpoint: endpoint.to_string(),
                source,
            })?;

        let mut request = match payload {
            Payload::Form(fields) => {
                let mut form: Vec<(&str, &str)> = Vec::with_capacity(fields.len() + 1);
                form.push(("accesskey", self.access_key.as_str()));
                form.extend_from_slice(fields);
                self.http.post(url).form(&form)
            }
            Payload::Json(mut body) => {
                body.insert(
                    "accesskey".to_string(),
                    Value::String(self.access_key.as_str().to_string()),
                );
                self.http.post(url).json(&body)
            }
        };
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        tracing::debug!(endpoint, "sending gateway request");
        let resp = request.send().await.map_err(|source| GatewayError::Http {
            endpoint: endpoint.to_string(),
            source,
        })?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|source| GatewayError::Http {
            endpoint: endpoint.to_string(),
            source,
        })?;
        Ok(RawResponse { status, body })
    }
}
