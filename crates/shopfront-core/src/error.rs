//! # Error Types
//!
//! Errors raised while constructing core values. Decoding failures of whole
//! backend responses are not errors at this layer; the gateway turns them into
//! failed `OperationResult`s.

use thiserror::Error;

/// Error constructing a core value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An identifier was empty or whitespace only.
    #[error("{kind} must not be empty")]
    EmptyIdentifier {
        /// Which identifier namespace rejected the value.
        kind: &'static str,
    },
}
