//! Typed client for the notification endpoint.
//!
//! Endpoint: `POST {base_url}/notifications.php` (form-encoded)
//!
//! | Flag field | Operation |
//! |------------|-----------|
//! | `get_notifications=1` | Page through a user's notifications |
//! | `get_unread_count=1` | Unread notification count |
//! | `mark_as_read=1` | Mark notification `id` as read |
//!
//! This family reports success with `status: true`, not `error: false`.
//! The list fetch is the one call with its own time bound.

use std::time::Duration;

use shopfront_core::{Notification, NotificationId, OperationResult, UserId};

use crate::normalize::{
    data_items, decode_items, envelope, resolve_count, Messages, SuccessRule, COUNT_FIELDS,
    NETWORK_ERROR,
};
use crate::transport::{Operation, Payload, Transport};

const ENDPOINT: &str = "notifications.php";

const LIST: Operation = Operation {
    name: "get_notification_list",
    endpoint: ENDPOINT,
    messages: Messages {
        success: "Notifications fetched successfully",
        failure: "Failed to fetch notifications",
        network: "Network error occurred while fetching notifications",
    },
};

const COUNT: Operation = Operation {
    name: "get_notification_count",
    endpoint: ENDPOINT,
    messages: Messages {
        success: "Notification count fetched successfully",
        failure: "Failed to fetch notification count",
        network: "Network error occurred while fetching notification count",
    },
};

const MARK_READ: Operation = Operation {
    name: "mark_notification_read",
    endpoint: ENDPOINT,
    messages: Messages {
        success: "Notification marked as read",
        failure: "Failed to mark notification as read",
        network: NETWORK_ERROR,
    },
};

/// Window of the notification list to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationPage {
    pub offset: u32,
    pub limit: u32,
}

impl Default for NotificationPage {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 20,
        }
    }
}

/// Client for notification listing, counting and read receipts.
#[derive(Debug, Clone)]
pub struct NotificationClient {
    transport: Transport,
    list_timeout: Duration,
}

impl NotificationClient {
    pub(crate) fn new(transport: Transport, list_timeout: Duration) -> Self {
        Self {
            transport,
            list_timeout,
        }
    }

    /// Fetch one page of notifications for `user_id`.
    ///
    /// Abandoned after the configured notification timeout. `data` is always
    /// present: empty on any failure.
    pub async fn get_notification_list(
        &self,
        user_id: &UserId,
        page: NotificationPage,
    ) -> OperationResult<Vec<Notification>> {
        let offset = page.offset.to_string();
        let limit = page.limit.to_string();
        let fields = [
            ("get_notifications", "1"),
            ("user_id", user_id.as_str()),
            ("offset", offset.as_str()),
            ("limit", limit.as_str()),
        ];
        self.transport
            .call(&LIST, Payload::Form(&fields), Some(self.list_timeout), |raw| {
                let body = raw.json(LIST.endpoint)?;
                let result = envelope(&body, SuccessRule::NOTIFICATION, &LIST.messages);
                if !result.success {
                    return Ok(result);
                }
                Ok(result.or_data(decode_items(data_items(&body), "notification")))
            })
            .await
            .or_data(Vec::new())
    }

    /// Unread notification count for `user_id`.
    ///
    /// `data` is always present: `0` on failure or when the backend omits
    /// the count.
    pub async fn get_notification_count(&self, user_id: &UserId) -> OperationResult<u64> {
        let fields = [("get_unread_count", "1"), ("user_id", user_id.as_str())];
        self.transport
            .call(&COUNT, Payload::Form(&fields), None, |raw| {
                let body = raw.json(COUNT.endpoint)?;
                let result = envelope(&body, SuccessRule::NOTIFICATION, &COUNT.messages);
                if !result.success {
                    return Ok(result);
                }
                Ok(result.or_data(resolve_count(&body, COUNT_FIELDS).unwrap_or(0)))
            })
            .await
            .or_data(0)
    }

    /// Mark notification `id` of `user_id` as read.
    pub async fn mark_notification_read(
        &self,
        id: &NotificationId,
        user_id: &UserId,
    ) -> OperationResult<()> {
        let fields = [
            ("mark_as_read", "1"),
            ("id", id.as_str()),
            ("user_id", user_id.as_str()),
        ];
        self.transport
            .call(&MARK_READ, Payload::Form(&fields), None, |raw| {
                let body = raw.json(MARK_READ.endpoint)?;
                Ok(envelope(&body, SuccessRule::NOTIFICATION, &MARK_READ.messages))
            })
            .await
    }
}
