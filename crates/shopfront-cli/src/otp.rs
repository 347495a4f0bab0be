//! # OTP Subcommand
//!
//! Login by one-time password. A successful `verify` stores the session in
//! the state directory, and later commands pick the user id up from it.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::context::{emit, CliContext};

/// Arguments for the `shopfront otp` subcommand.
#[derive(Args, Debug)]
pub struct OtpArgs {
    #[command(subcommand)]
    pub command: OtpCommand,
}

/// Phone number an OTP is sent to.
#[derive(Args, Debug, Clone)]
pub struct MobileArgs {
    /// Mobile number without country code.
    #[arg(long)]
    pub mobile: String,

    /// Dialling code, e.g. "91".
    #[arg(long)]
    pub country_code: String,
}

/// OTP subcommands.
#[derive(Subcommand, Debug)]
pub enum OtpCommand {
    /// Send an OTP.
    Send(MobileArgs),

    /// Send another OTP to the same number.
    Resend(MobileArgs),

    /// Verify an OTP and store the session.
    Verify {
        #[command(flatten)]
        target: MobileArgs,
        /// The code the user received.
        #[arg(long)]
        otp: String,
    },
}

/// Execute the otp subcommand.
pub async fn run_otp(args: &OtpArgs, ctx: &CliContext) -> Result<u8> {
    let gateway = ctx.gateway()?;
    let otp = gateway.otp();
    match &args.command {
        OtpCommand::Send(target) => emit(&otp.send_otp(&target.mobile, &target.country_code).await),
        OtpCommand::Resend(target) => {
            emit(&otp.resend_otp(&target.mobile, &target.country_code).await)
        }
        OtpCommand::Verify { target, otp: code } => {
            let result = otp
                .verify_otp(&target.mobile, code, &target.country_code)
                .await;
            if result.success && gateway.current_session().is_none() {
                tracing::warn!("verified, but the backend sent no usable session; signed out");
            }
            emit(&result)
        }
    }
}
