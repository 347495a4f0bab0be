//! # Session Subcommand
//!
//! Inspect or drop the stored session. Works offline: only the state
//! directory is touched.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde::Serialize;
use shopfront_core::{OperationResult, Session};

use crate::context::{emit, CliContext};

/// Arguments for the `shopfront session` subcommand.
#[derive(Args, Debug)]
pub struct SessionArgs {
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Session subcommands.
#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Show who is signed in. The token is not printed.
    Show,
    /// Sign out.
    Clear,
}

/// What `session show` prints about a session.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub user_id: String,
    pub has_token: bool,
}

impl From<&Session> for SessionSummary {
    fn from(session: &Session) -> Self {
        Self {
            user_id: session.user_id.to_string(),
            has_token: !session.token.is_empty(),
        }
    }
}

/// Execute the session subcommand.
pub fn run_session(args: &SessionArgs, ctx: &CliContext) -> Result<u8> {
    let sessions = ctx.sessions()?;
    match args.command {
        SessionCommand::Show => {
            let result = match sessions.load_session() {
                Some(session) => OperationResult::succeeded(
                    "Signed in",
                    Some(SessionSummary::from(&session)),
                ),
                None => OperationResult::failed("Not signed in"),
            };
            emit(&result)
        }
        SessionCommand::Clear => {
            sessions.clear_session().with_context(|| {
                format!("clearing session in {}", ctx.state_dir().display())
            })?;
            emit(&OperationResult::<()>::succeeded("Signed out", None))
        }
    }
}
