//! # shopfront-core: Foundational Types for the Shopfront Gateway
//!
//! Leaf crate of the workspace. Defines the records exchanged between the
//! storefront backend and its clients, and the uniform result envelope every
//! gateway call returns. It performs no I/O.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** `UserId`, `AddressId`,
//!    `NotificationId`, never bare strings. The backend sends ids as JSON
//!    numbers or numeric strings; both decode to the same identifier.
//!
//! 2. **`OperationResult<T>` is the only outcome shape.** Business failures
//!    are `success = false`, never `Err`.
//!
//! 3. **Lenient decoding lives in one place.** The [`wire`] module absorbs the
//!    backend's loose typing so record types stay plain.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `shopfront-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod address;
pub mod error;
pub mod identity;
pub mod notification;
pub mod profile;
pub mod result;
pub mod session;
pub mod wire;

pub use address::{Address, AddressDraft, AddressType};
pub use error::CoreError;
pub use identity::{AddressId, NotificationId, UserId};
pub use notification::Notification;
pub use profile::ProfileUpdate;
pub use result::OperationResult;
pub use session::Session;
