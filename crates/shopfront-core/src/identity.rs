//! # Identifier Newtypes
//!
//! Newtype wrappers for backend identifiers. These prevent passing an
//! `AddressId` where a `UserId` is expected when building requests.
//!
//! The backend assigns every identifier, so they are opaque strings on this
//! side. Decoding accepts JSON numbers as well as strings; encoding always
//! produces a string.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::wire::Scalar;

/// Identifier of a storefront user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Scalar", into = "String")]
pub struct UserId(String);

/// Identifier of a saved delivery address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Scalar", into = "String")]
pub struct AddressId(String);

/// Identifier of a notification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Scalar", into = "String")]
pub struct NotificationId(String);

fn non_empty(raw: String, kind: &'static str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::EmptyIdentifier { kind });
    }
    Ok(trimmed.to_string())
}

impl UserId {
    /// Wrap a backend user id. Surrounding whitespace is dropped.
    pub fn new(raw: impl Into<String>) -> Result<Self, CoreError> {
        non_empty(raw.into(), "user id").map(Self)
    }

    /// Access the raw identifier as sent to the backend.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AddressId {
    /// Wrap a backend address id. Surrounding whitespace is dropped.
    pub fn new(raw: impl Into<String>) -> Result<Self, CoreError> {
        non_empty(raw.into(), "address id").map(Self)
    }

    /// Access the raw identifier as sent to the backend.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl NotificationId {
    /// Wrap a backend notification id. Surrounding whitespace is dropped.
    pub fn new(raw: impl Into<String>) -> Result<Self, CoreError> {
        non_empty(raw.into(), "notification id").map(Self)
    }

    /// Access the raw identifier as sent to the backend.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<Scalar> for UserId {
    type Error = CoreError;

    fn try_from(value: Scalar) -> Result<Self, Self::Error> {
        Self::new(value.into_text())
    }
}

impl TryFrom<Scalar> for AddressId {
    type Error = CoreError;

    fn try_from(value: Scalar) -> Result<Self, Self::Error> {
        Self::new(value.into_text())
    }
}

impl TryFrom<Scalar> for NotificationId {
    type Error = CoreError;

    fn try_from(value: Scalar) -> Result<Self, Self::Error> {
        Self::new(value.into_text())
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl From<AddressId> for String {
    fn from(id: AddressId) -> Self {
        id.0
    }
}

impl From<NotificationId> for String {
    fn from(id: NotificationId) -> Self {
        id.0
    }
}

impl std::str::FromStr for UserId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::str::FromStr for AddressId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::str::FromStr for NotificationId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for AddressId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
