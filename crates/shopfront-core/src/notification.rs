//! # Notifications
//!
//! Notification records as listed by the notification endpoints.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::identity::NotificationId;
use crate::wire;

/// A notification addressed to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    #[serde(default, deserialize_with = "wire::text")]
    pub title: String,
    #[serde(default, alias = "body", deserialize_with = "wire::text")]
    pub message: String,
    #[serde(
        default,
        rename = "type",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "wire::optional_text"
    )]
    pub kind: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "wire::optional_text"
    )]
    pub image: Option<String>,
    #[serde(default, alias = "read", deserialize_with = "wire::flag")]
    pub is_read: bool,
    #[serde(
        default,
        alias = "created_at",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "wire::timestamp"
    )]
    pub date_sent: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_backend_record() {
        let notification: Notification = serde_json::from_value(json!({
            "id": "31",
            "title": "Order shipped",
            "message": "Your order #991 is on the way",
            "type": "order",
            "image": "",
            "is_read": "0",
            "date_sent": "2024-05-01 09:30:00"
        }))
        .unwrap();

        assert_eq!(notification.id.as_str(), "31");
        assert_eq!(notification.kind.as_deref(), Some("order"));
        assert_eq!(notification.image, None);
        assert!(!notification.is_read);
        assert!(notification.date_sent.is_some());
    }

    #[test]
    fn tolerates_sparse_record() {
        let notification: Notification =
            serde_json::from_value(json!({"id": 5, "body": "hello", "read": 1})).unwrap();
        assert_eq!(notification.message, "hello");
        assert!(notification.is_read);
        assert_eq!(notification.title, "");
        assert_eq!(notification.date_sent, None);
    }
}
