//! Typed client for the address-book endpoint.
//!
//! Endpoint: `POST {base_url}/user-addresses.php` (form-encoded)
//!
//! | Flag field | Operation |
//! |------------|-----------|
//! | `get_addresses=1` | List a user's addresses |
//! | `add_address=1` | Add an address |
//! | `update_address=1` | Edit address `id` |
//! | `delete_address=1` | Delete address `id` |
//!
//! Success is `error` equal to `false` or `"false"`. Listing always yields a
//! vector; the client keeps no cache, so callers re-list after a mutation.

use shopfront_core::{Address, AddressDraft, AddressId, OperationResult, UserId};

use crate::normalize::{data_items, decode_items, envelope, Messages, SuccessRule, NETWORK_ERROR};
use crate::transport::{Operation, Payload, Transport};

const ENDPOINT: &str = "user-addresses.php";

const LIST: Operation = Operation {
    name: "list_addresses",
    endpoint: ENDPOINT,
    messages: Messages {
        success: "Addresses fetched successfully",
        failure: "Failed to fetch addresses",
        network: NETWORK_ERROR,
    },
};

const ADD: Operation = Operation {
    name: "add_address",
    endpoint: ENDPOINT,
    messages: Messages {
        success: "Address added successfully",
        failure: "Failed to add address",
        network: NETWORK_ERROR,
    },
};

const EDIT: Operation = Operation {
    name: "edit_address",
    endpoint: ENDPOINT,
    messages: Messages {
        success: "Address updated successfully",
        failure: "Failed to update address",
        network: NETWORK_ERROR,
    },
};

const DELETE: Operation = Operation {
    name: "delete_address",
    endpoint: ENDPOINT,
    messages: Messages {
        success: "Address deleted successfully",
        failure: "Failed to delete address",
        network: NETWORK_ERROR,
    },
};

/// Client for listing and mutating a user's addresses.
#[derive(Debug, Clone)]
pub struct AddressClient {
    transport: Transport,
}

impl AddressClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List the addresses of `user_id`.
    ///
    /// `data` is always present: empty on any failure. Records the client
    /// cannot decode are skipped.
    pub async fn list_addresses(&self, user_id: &UserId) -> OperationResult<Vec<Address>> {
        let fields = [("get_addresses", "1"), ("user_id", user_id.as_str())];
        self.transport
            .call(&LIST, Payload::Form(&fields), None, |raw| {
                let body = raw.json(LIST.endpoint)?;
                let result = envelope(&body, SuccessRule::ADDRESS, &LIST.messages);
                if !result.success {
                    return Ok(result);
                }
                Ok(result.or_data(decode_items(data_items(&body), "address")))
            })
            .await
            .or_data(Vec::new())
    }

    /// Add an address for `user_id`.
    pub async fn add_address(&self, user_id: &UserId, draft: &AddressDraft) -> OperationResult<()> {
        let mut fields = vec![("add_address", "1"), ("user_id", user_id.as_str())];
        fields.extend(draft.form_fields());
        self.mutate(&ADD, &fields).await
    }

    /// Replace the fields of address `id` owned by `user_id`.
    pub async fn edit_address(
        &self,
        id: &AddressId,
        user_id: &UserId,
        draft: &AddressDraft,
    ) -> OperationResult<()> {
        let mut fields = vec![
            ("update_address", "1"),
            ("id", id.as_str()),
            ("user_id", user_id.as_str()),
        ];
        fields.extend(draft.form_fields());
        self.mutate(&EDIT, &fields).await
    }

    /// Delete address `id` owned by `user_id`.
    pub async fn delete_address(&self, id: &AddressId, user_id: &UserId) -> OperationResult<()> {
        let fields = [
            ("delete_address", "1"),
            ("id", id.as_str()),
            ("user_id", user_id.as_str()),
        ];
        self.mutate(&DELETE, &fields).await
    }

    async fn mutate(&self, op: &Operation, fields: &[(&str, &str)]) -> OperationResult<()> {
        self.transport
            .call(op, Payload::Form(fields), None, |raw| {
                let body = raw.json(op.endpoint)?;
                Ok(envelope(&body, SuccessRule::ADDRESS, &op.messages))
            })
            .await
    }
}
