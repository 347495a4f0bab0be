//! # Profile Subcommand

use anyhow::Result;
use clap::{Args, Subcommand};
use shopfront_core::{ProfileUpdate, UserId};

use crate::context::{emit, CliContext};

/// Arguments for the `shopfront profile` subcommand.
#[derive(Args, Debug)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: ProfileCommand,
}

/// Profile subcommands.
#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Update name, email and optionally mobile.
    Update {
        /// Act for this user instead of the signed-in one.
        #[arg(long)]
        user_id: Option<UserId>,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        mobile: Option<String>,
    },
}

/// Execute the profile subcommand.
pub async fn run_profile(args: &ProfileArgs, ctx: &CliContext) -> Result<u8> {
    let gateway = ctx.gateway()?;
    match &args.command {
        ProfileCommand::Update {
            user_id,
            name,
            email,
            mobile,
        } => {
            let update = ProfileUpdate {
                user_id: ctx.user_id(&gateway, user_id.as_ref())?,
                name: name.clone(),
                email: email.clone(),
                mobile: mobile.clone(),
            };
            emit(&gateway.profile().update_profile(&update).await)
        }
    }
}
