//! # Notifications Subcommand

use anyhow::Result;
use clap::{Args, Subcommand};
use shopfront_core::{NotificationId, UserId};
use shopfront_gateway::NotificationPage;

use crate::context::{emit, CliContext};

/// Arguments for the `shopfront notifications` subcommand.
#[derive(Args, Debug)]
pub struct NotificationsArgs {
    /// Act for this user instead of the signed-in one.
    #[arg(long, global = true)]
    pub user_id: Option<UserId>,

    #[command(subcommand)]
    pub command: NotificationsCommand,
}

/// Notification subcommands.
#[derive(Subcommand, Debug)]
pub enum NotificationsCommand {
    /// List one page of notifications.
    List {
        #[arg(long, default_value_t = 0)]
        offset: u32,
        #[arg(long, default_value_t = 20)]
        limit: u32,
    },

    /// Show the unread count.
    Count,

    /// Mark a notification as read.
    Read {
        #[arg(long)]
        id: NotificationId,
    },
}

/// Execute the notifications subcommand.
pub async fn run_notifications(args: &NotificationsArgs, ctx: &CliContext) -> Result<u8> {
    let gateway = ctx.gateway()?;
    let user_id = ctx.user_id(&gateway, args.user_id.as_ref())?;
    let notifications = gateway.notifications();

    match &args.command {
        NotificationsCommand::List { offset, limit } => {
            let page = NotificationPage {
                offset: *offset,
                limit: *limit,
            };
            emit(&notifications.get_notification_list(&user_id, page).await)
        }
        NotificationsCommand::Count => {
            emit(&notifications.get_notification_count(&user_id).await)
        }
        NotificationsCommand::Read { id } => {
            emit(&notifications.mark_notification_read(id, &user_id).await)
        }
    }
}
