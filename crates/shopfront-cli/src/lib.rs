//! # shopfront-cli: Storefront Gateway Command-Line Interface
//!
//! Drives every gateway operation from a terminal. Each command prints the
//! resulting `OperationResult` as pretty JSON on stdout.
//!
//! ## Subcommands
//!
//! - `otp`: send, resend and verify login OTPs
//! - `address`: list, add, edit and delete saved addresses
//! - `profile`: update name, email and mobile
//! - `notifications`: list, unread count, mark as read
//! - `session`: show or clear the stored session
//!
//! ## Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | `success: true` |
//! | 1 | `success: false` (business or network failure) |
//! | 2 | local error: bad configuration, no session, unusable state dir |
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers.
//! - Handlers delegate to `shopfront-gateway`; no response interpretation here.

pub mod address;
pub mod context;
pub mod notifications;
pub mod otp;
pub mod profile;
pub mod session;
