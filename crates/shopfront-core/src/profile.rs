//! # Profile Updates

use serde::{Deserialize, Serialize};

use crate::identity::UserId;

/// Fields accepted by the profile update endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_is_omitted_when_unset() {
        let update = ProfileUpdate {
            user_id: UserId::new("3").unwrap(),
            name: "Asha".into(),
            email: "asha@example.com".into(),
            mobile: None,
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"user_id": "3", "name": "Asha", "email": "asha@example.com"})
        );
    }
}
