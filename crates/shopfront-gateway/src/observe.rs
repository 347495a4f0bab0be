//! Observability hook for gateway calls.
//!
//! Every operation reports one [`CallRecord`] to the configured
//! [`GatewayObserver`] after it has produced its result. The default
//! [`TracingObserver`] turns records into `tracing` events; embedders can
//! plug in their own (metrics, analytics, test recorders).

use std::time::Duration;

use crate::error::GatewayError;

/// Summary of one completed gateway call.
#[derive(Debug)]
pub struct CallRecord<'a> {
    /// Operation name, e.g. `verify_otp`.
    pub operation: &'static str,
    /// Endpoint path relative to the base URL.
    pub endpoint: &'static str,
    /// Outcome reported to the caller.
    pub success: bool,
    /// Message reported to the caller.
    pub message: &'a str,
    /// Wall time spent on the call.
    pub elapsed: Duration,
    /// Transport failure behind a network-error result, if any.
    pub transport_error: Option<&'a GatewayError>,
}

/// Receives a record for every completed gateway call.
pub trait GatewayObserver: Send + Sync + std::fmt::Debug {
    fn on_call(&self, record: &CallRecord<'_>);
}

/// Default observer: emits one `tracing` event per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl GatewayObserver for TracingObserver {
    fn on_call(&self, record: &CallRecord<'_>) {
        let elapsed_ms = u64::try_from(record.elapsed.as_millis()).unwrap_or(u64::MAX);
        match record.transport_error {
            Some(err) => tracing::warn!(
                operation = record.operation,
                endpoint = record.endpoint,
                elapsed_ms,
                timeout = err.is_timeout(),
                "gateway call failed in transport: {err}"
            ),
            None => tracing::debug!(
                operation = record.operation,
                endpoint = record.endpoint,
                success = record.success,
                elapsed_ms,
                message = record.message,
                "gateway call completed"
            ),
        }
    }
}

