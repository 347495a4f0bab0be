//! # shopfront-gateway -- Typed client for the storefront backend
//!
//! The layer between storefront front ends and the backend's PHP API:
//! - **OTP login** via `login.php` (send, resend, verify)
//! - **Address book** via `user-addresses.php` (list, add, edit, delete)
//! - **Profile** via `update-profile.php`
//! - **Notifications** via `notifications.php` (list, unread count, mark read)
//!
//! Plus the **session store** that keeps the signed-in user across restarts.
//!
//! ## Result Contract
//!
//! Every endpoint operation returns an [`OperationResult`]. Wrong OTPs,
//! backend rejections, timeouts and unreachable servers all come back as
//! `success = false` with a human-readable message; they are never `Err`.
//! Transport detail is logged and handed to the [`GatewayObserver`].
//!
//! The backend is inconsistent about how it signals success; see
//! [`normalize`] for the per-family rules.

pub mod address;
pub mod config;
pub mod error;
pub mod normalize;
pub mod notification;
pub mod observe;
pub mod otp;
pub mod profile;
pub mod session;
pub mod store;
pub(crate) mod transport;

pub use config::GatewayConfig;
pub use error::GatewayError;
pub use notification::NotificationPage;
pub use observe::{CallRecord, GatewayObserver, TracingObserver};
pub use session::SessionStore;
pub use shopfront_core::OperationResult;
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};

use std::sync::Arc;

use shopfront_core::Session;

/// Top-level gateway. Holds one sub-client per endpoint family and the
/// session store they share.
#[derive(Debug, Clone)]
pub struct Gateway {
    otp: otp::OtpClient,
    addresses: address::AddressClient,
    profile: profile::ProfileClient,
    notifications: notification::NotificationClient,
    sessions: SessionStore,
}

impl Gateway {
    /// Create a gateway that reports calls through [`TracingObserver`].
    pub fn new(config: GatewayConfig, store: Arc<dyn KeyValueStore>) -> Result<Self, GatewayError> {
        Self::with_observer(config, store, Arc::new(TracingObserver))
    }

    /// Create a gateway with a custom observability hook.
    pub fn with_observer(
        config: GatewayConfig,
        store: Arc<dyn KeyValueStore>,
        observer: Arc<dyn GatewayObserver>,
    ) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| GatewayError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        let list_timeout = config.notification_list_timeout();
        let transport = transport::Transport::new(http, config.base_url, config.access_key, observer);
        let sessions = SessionStore::new(store);

        Ok(Self {
            otp: otp::OtpClient::new(transport.clone(), sessions.clone()),
            addresses: address::AddressClient::new(transport.clone()),
            profile: profile::ProfileClient::new(transport.clone()),
            notifications: notification::NotificationClient::new(transport, list_timeout),
            sessions,
        })
    }

    /// Access the OTP login client.
    pub fn otp(&self) -> &otp::OtpClient {
        &self.otp
    }

    /// Access the address-book client.
    pub fn addresses(&self) -> &address::AddressClient {
        &self.addresses
    }

    /// Access the profile client.
    pub fn profile(&self) -> &profile::ProfileClient {
        &self.profile
    }

    /// Access the notification client.
    pub fn notifications(&self) -> &notification::NotificationClient {
        &self.notifications
    }

    /// Access the session store.
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// The signed-in session, if any.
    pub fn current_session(&self) -> Option<Session> {
        self.sessions.load_session()
    }

    /// Forget the signed-in session.
    pub fn logout(&self) -> Result<(), StoreError> {
        self.sessions.clear_session()
    }
}
