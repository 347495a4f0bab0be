//! # Delivery Addresses
//!
//! Address records as returned by the address-book endpoints, and the
//! writable draft used to add or edit one. Wire field names are the
//! backend's snake_case names; the address kind travels as `type`.

use serde::{Deserialize, Deserializer, Serialize};

use crate::identity::AddressId;
use crate::wire::{self, Scalar};

/// Kind of address, as shown in the address picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
    Home,
    Office,
    /// Anything the backend sends that is not home or office.
    #[default]
    Other,
}

impl AddressType {
    /// Case-insensitive mapping from the backend's free-form value.
    pub fn from_wire(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "home" => Self::Home,
            "office" | "work" => Self::Office,
            _ => Self::Other,
        }
    }

    /// Value sent in form submissions.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Office => "office",
            Self::Other => "other",
        }
    }
}

impl<'de> Deserialize<'de> for AddressType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Scalar>::deserialize(deserializer)?
            .map(|s| Self::from_wire(&s.into_text()))
            .unwrap_or_default())
    }
}

impl std::fmt::Display for AddressType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AddressType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_wire(s))
    }
}

/// A saved address owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    #[serde(default, deserialize_with = "wire::text")]
    pub name: String,
    #[serde(default, deserialize_with = "wire::text")]
    pub mobile: String,
    #[serde(default, deserialize_with = "wire::text")]
    pub address: String,
    #[serde(default, deserialize_with = "wire::text")]
    pub landmark: String,
    #[serde(default, deserialize_with = "wire::text")]
    pub city_id: String,
    #[serde(default, deserialize_with = "wire::text")]
    pub state_id: String,
    #[serde(default, deserialize_with = "wire::text")]
    pub area_id: String,
    #[serde(default, deserialize_with = "wire::text")]
    pub pincode: String,
    #[serde(default, rename = "type", alias = "address_type")]
    pub address_type: AddressType,
}

/// The writable fields of an address, used by add and edit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AddressDraft {
    pub name: String,
    pub mobile: String,
    pub address: String,
    pub landmark: String,
    pub city_id: String,
    pub state_id: String,
    pub area_id: String,
    pub pincode: String,
    #[serde(rename = "type")]
    pub address_type: AddressType,
}

impl AddressDraft {
    /// Form fields in the order the backend documents them.
    pub fn form_fields(&self) -> [(&'static str, &str); 9] {
        [
            ("name", self.name.as_str()),
            ("mobile", self.mobile.as_str()),
            ("address", self.address.as_str()),
            ("landmark", self.landmark.as_str()),
            ("city_id", self.city_id.as_str()),
            ("state_id", self.state_id.as_str()),
            ("area_id", self.area_id.as_str()),
            ("pincode", self.pincode.as_str()),
            ("type", self.address_type.as_str()),
        ]
    }
}

impl From<&Address> for AddressDraft {
    fn from(address: &Address) -> Self {
        Self {
            name: address.name.clone(),
            mobile: address.mobile.clone(),
            address: address.address.clone(),
            landmark: address.landmark.clone(),
            city_id: address.city_id.clone(),
            state_id: address.state_id.clone(),
            area_id: address.area_id.clone(),
            pincode: address.pincode.clone(),
            address_type: address.address_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_php_style_record() {
        let address: Address = serde_json::from_value(json!({
            "id": "7",
            "user_id": "3",
            "name": "Asha",
            "mobile": 9876543210u64,
            "address": "12 MG Road",
            "landmark": null,
            "city_id": 4,
            "state_id": "2",
            "area_id": "19",
            "pincode": 560001,
            "type": "Home",
            "is_default": "1"
        }))
        .unwrap();

        assert_eq!(address.id.as_str(), "7");
        assert_eq!(address.mobile, "9876543210");
        assert_eq!(address.landmark, "");
        assert_eq!(address.city_id, "4");
        assert_eq!(address.pincode, "560001");
        assert_eq!(address.address_type, AddressType::Home);
    }

    #[test]
    fn missing_id_rejects_the_record() {
        let result = serde_json::from_value::<Address>(json!({"name": "No id"}));
        assert!(result.is_err());
    }

    #[test]
    fn unknown_type_maps_to_other() {
        assert_eq!(AddressType::from_wire("Warehouse"), AddressType::Other);
        assert_eq!(AddressType::from_wire("WORK"), AddressType::Office);
        let address: Address =
            serde_json::from_value(json!({"id": 1, "type": null})).unwrap();
        assert_eq!(address.address_type, AddressType::Other);
    }

    #[test]
    fn draft_form_fields_use_backend_names() {
        let draft = AddressDraft {
            name: "Asha".into(),
            address_type: AddressType::Office,
            ..AddressDraft::default()
        };
        let fields = draft.form_fields();
        assert_eq!(fields[0], ("name", "Asha"));
        assert_eq!(fields[8], ("type", "office"));
    }
}
