//! # Address Subcommand
//!
//! Address book management for the signed-in user (or `--user-id`).
//!
//! `edit` starts from the stored address and only replaces the fields given
//! on the command line.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use shopfront_core::{AddressDraft, AddressId, AddressType, UserId};

use crate::context::{emit, CliContext};

/// Arguments for the `shopfront address` subcommand.
#[derive(Args, Debug)]
pub struct AddressArgs {
    /// Act for this user instead of the signed-in one.
    #[arg(long, global = true)]
    pub user_id: Option<UserId>,

    #[command(subcommand)]
    pub command: AddressCommand,
}

/// Address subcommands.
#[derive(Subcommand, Debug)]
pub enum AddressCommand {
    /// List saved addresses.
    List,

    /// Save a new address.
    Add(NewAddress),

    /// Change fields of a saved address.
    Edit {
        /// Address to change.
        #[arg(long)]
        id: AddressId,
        #[command(flatten)]
        patch: AddressPatch,
    },

    /// Delete a saved address.
    Delete {
        /// Address to delete.
        #[arg(long)]
        id: AddressId,
    },
}

/// All fields of a new address.
#[derive(Args, Debug, Clone)]
pub struct NewAddress {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub mobile: String,
    #[arg(long)]
    pub address: String,
    #[arg(long, default_value = "")]
    pub landmark: String,
    #[arg(long)]
    pub city_id: String,
    #[arg(long)]
    pub state_id: String,
    #[arg(long)]
    pub area_id: String,
    #[arg(long)]
    pub pincode: String,
    /// home, office or other.
    #[arg(long = "type", default_value = "other")]
    pub address_type: AddressType,
}

impl From<NewAddress> for AddressDraft {
    fn from(new: NewAddress) -> Self {
        Self {
            name: new.name,
            mobile: new.mobile,
            address: new.address,
            landmark: new.landmark,
            city_id: new.city_id,
            state_id: new.state_id,
            area_id: new.area_id,
            pincode: new.pincode,
            address_type: new.address_type,
        }
    }
}

/// Fields to replace on an existing address.
#[derive(Args, Debug, Clone, Default)]
pub struct AddressPatch {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub mobile: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub landmark: Option<String>,
    #[arg(long)]
    pub city_id: Option<String>,
    #[arg(long)]
    pub state_id: Option<String>,
    #[arg(long)]
    pub area_id: Option<String>,
    #[arg(long)]
    pub pincode: Option<String>,
    #[arg(long = "type")]
    pub address_type: Option<AddressType>,
}

impl AddressPatch {
    /// Overwrite the fields of `draft` that this patch sets.
    pub fn apply(self, draft: &mut AddressDraft) {
        let text_fields = [
            (self.name, &mut draft.name),
            (self.mobile, &mut draft.mobile),
            (self.address, &mut draft.address),
            (self.landmark, &mut draft.landmark),
            (self.city_id, &mut draft.city_id),
            (self.state_id, &mut draft.state_id),
            (self.area_id, &mut draft.area_id),
            (self.pincode, &mut draft.pincode),
        ];
        for (value, slot) in text_fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
        if let Some(address_type) = self.address_type {
            draft.address_type = address_type;
        }
    }
}

/// Execute the address subcommand.
pub async fn run_address(args: &AddressArgs, ctx: &CliContext) -> Result<u8> {
    let gateway = ctx.gateway()?;
    let user_id = ctx.user_id(&gateway, args.user_id.as_ref())?;
    let addresses = gateway.addresses();

    match &args.command {
        AddressCommand::List => emit(&addresses.list_addresses(&user_id).await),
        AddressCommand::Add(new) => {
            let draft = AddressDraft::from(new.clone());
            emit(&addresses.add_address(&user_id, &draft).await)
        }
        AddressCommand::Edit { id, patch } => {
            let listed = addresses.list_addresses(&user_id).await;
            if !listed.success {
                return emit(&listed);
            }
            let mut draft = listed
                .data()
                .and_then(|items| items.iter().find(|a| &a.id == id))
                .map(AddressDraft::from)
                .with_context(|| format!("address {id} not found for user {user_id}"))?;
            patch.clone().apply(&mut draft);
            emit(&addresses.edit_address(id, &user_id, &draft).await)
        }
        AddressCommand::Delete { id } => emit(&addresses.delete_address(id, &user_id).await),
    }
}
