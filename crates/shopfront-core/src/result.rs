//! # Operation Result Envelope
//!
//! `OperationResult<T>` is the single outcome type of every gateway call.
//! A business failure (wrong OTP, unknown address, network unreachable) is a
//! value with `success = false`, not an error.

use serde::{Deserialize, Serialize};

/// Uniform `{success, message, data?}` envelope returned by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationResult<T> {
    /// Whether the backend accepted the operation.
    pub success: bool,
    /// Human-readable message, from the backend when it supplied one.
    pub message: String,
    /// Operation payload, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> OperationResult<T> {
    /// A successful outcome carrying `data`.
    pub fn succeeded(message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }

    /// A failed outcome without payload.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }

    /// Fill in `fallback` when there is no payload, keeping success and message.
    ///
    /// Used by list and count operations whose payload must always be present.
    pub fn or_data(mut self, fallback: T) -> Self {
        if self.data.is_none() {
            self.data = Some(fallback);
        }
        self
    }

    /// Transform the payload, keeping success and message.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> OperationResult<U> {
        OperationResult {
            success: self.success,
            message: self.message,
            data: self.data.map(f),
        }
    }

    /// Borrow the payload.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Take the payload, or the type's default when absent.
    pub fn data_or_default(self) -> T
    where
        T: Default,
    {
        self.data.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_results_carry_no_data() {
        let result: OperationResult<u64> = OperationResult::failed("nope");
        assert!(!result.success);
        assert_eq!(result.data(), None);
        assert_eq!(result.data_or_default(), 0);
    }

    #[test]
    fn or_data_keeps_failure_flag() {
        let result = OperationResult::<Vec<u8>>::failed("down").or_data(Vec::new());
        assert!(!result.success);
        assert_eq!(result.data(), Some(&Vec::new()));
    }

    #[test]
    fn or_data_does_not_replace_existing_payload() {
        let result = OperationResult::succeeded("ok", Some(3u64)).or_data(0);
        assert_eq!(result.data, Some(3));
    }

    #[test]
    fn absent_data_is_omitted_from_json() {
        let result: OperationResult<String> = OperationResult::failed("Not found");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({"success": false, "message": "Not found"}));
    }

    #[test]
    fn map_transforms_payload() {
        let result = OperationResult::succeeded("ok", Some(2u8)).map(u32::from);
        assert_eq!(result.data, Some(2u32));
        assert!(result.success);
    }
}
