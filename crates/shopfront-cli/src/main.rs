//! # shopfront CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use shopfront_cli::address::{run_address, AddressArgs};
use shopfront_cli::context::{CliContext, EXIT_LOCAL_ERROR};
use shopfront_cli::notifications::{run_notifications, NotificationsArgs};
use shopfront_cli::otp::{run_otp, OtpArgs};
use shopfront_cli::profile::{run_profile, ProfileArgs};
use shopfront_cli::session::{run_session, SessionArgs};

/// Storefront gateway CLI.
///
/// Backend location and access key come from `SHOPFRONT_API_URL` and
/// `SHOPFRONT_ACCESS_KEY`.
#[derive(Parser, Debug)]
#[command(name = "shopfront", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory holding the stored session.
    #[arg(
        long,
        global = true,
        env = "SHOPFRONT_STATE_DIR",
        default_value = ".shopfront"
    )]
    state_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Send, resend and verify login OTPs.
    Otp(OtpArgs),

    /// Manage saved addresses.
    Address(AddressArgs),

    /// Update the user profile.
    Profile(ProfileArgs),

    /// List, count and mark notifications.
    Notifications(NotificationsArgs),

    /// Show or clear the stored session.
    Session(SessionArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let ctx = CliContext::new(cli.state_dir);

    let result = match cli.command {
        Commands::Otp(args) => run_otp(&args, &ctx).await,
        Commands::Address(args) => run_address(&args, &ctx).await,
        Commands::Profile(args) => run_profile(&args, &ctx).await,
        Commands::Notifications(args) => run_notifications(&args, &ctx).await,
        Commands::Session(args) => run_session(&args, &ctx),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_LOCAL_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_cli::address::AddressCommand;
    use shopfront_cli::notifications::NotificationsCommand;
    use shopfront_cli::otp::OtpCommand;
    use shopfront_core::AddressType;

    #[test]
    fn cli_parse_otp_verify() {
        let cli = Cli::try_parse_from([
            "shopfront",
            "otp",
            "verify",
            "--mobile",
            "9876543210",
            "--country-code",
            "91",
            "--otp",
            "123456",
        ])
        .unwrap();
        let Commands::Otp(args) = cli.command else {
            panic!("expected otp command");
        };
        let OtpCommand::Verify { target, otp } = args.command else {
            panic!("expected verify");
        };
        assert_eq!(target.mobile, "9876543210");
        assert_eq!(target.country_code, "91");
        assert_eq!(otp, "123456");
    }

    #[test]
    fn cli_parse_otp_send_requires_mobile() {
        assert!(Cli::try_parse_from(["shopfront", "otp", "send", "--country-code", "91"]).is_err());
    }

    #[test]
    fn cli_parse_address_add_defaults() {
        let cli = Cli::try_parse_from([
            "shopfront",
            "address",
            "--user-id",
            "3",
            "add",
            "--name",
            "Asha",
            "--mobile",
            "9876543210",
            "--address",
            "12 MG Road",
            "--city-id",
            "4",
            "--state-id",
            "2",
            "--area-id",
            "19",
            "--pincode",
            "560001",
        ])
        .unwrap();
        let Commands::Address(args) = cli.command else {
            panic!("expected address command");
        };
        assert_eq!(args.user_id.as_ref().map(|u| u.as_str()), Some("3"));
        let AddressCommand::Add(new) = args.command else {
            panic!("expected add");
        };
        assert_eq!(new.landmark, "");
        assert_eq!(new.address_type, AddressType::Other);
    }

    #[test]
    fn cli_parse_address_edit_partial() {
        let cli = Cli::try_parse_from([
            "shopfront", "address", "edit", "--id", "7", "--type", "office",
        ])
        .unwrap();
        let Commands::Address(args) = cli.command else {
            panic!("expected address command");
        };
        assert!(args.user_id.is_none());
        let AddressCommand::Edit { id, patch } = args.command else {
            panic!("expected edit");
        };
        assert_eq!(id.as_str(), "7");
        assert_eq!(patch.address_type, Some(AddressType::Office));
        assert!(patch.name.is_none());
    }

    #[test]
    fn cli_parse_rejects_blank_id() {
        assert!(Cli::try_parse_from(["shopfront", "address", "delete", "--id", " "]).is_err());
    }

    #[test]
    fn cli_parse_notifications_list_window() {
        let cli = Cli::try_parse_from([
            "shopfront",
            "notifications",
            "list",
            "--offset",
            "40",
        ])
        .unwrap();
        let Commands::Notifications(args) = cli.command else {
            panic!("expected notifications command");
        };
        assert!(matches!(
            args.command,
            NotificationsCommand::List {
                offset: 40,
                limit: 20
            }
        ));
    }

    #[test]
    fn cli_parse_verbose_levels() {
        let cli0 = Cli::try_parse_from(["shopfront", "session", "show"]).unwrap();
        assert_eq!(cli0.verbose, 0);

        let cli2 = Cli::try_parse_from(["shopfront", "-vv", "session", "show"]).unwrap();
        assert_eq!(cli2.verbose, 2);
    }

    #[test]
    fn cli_parse_state_dir_option() {
        let cli = Cli::try_parse_from([
            "shopfront",
            "--state-dir",
            "/tmp/shop",
            "session",
            "clear",
        ])
        .unwrap();
        assert_eq!(cli.state_dir, PathBuf::from("/tmp/shop"));
    }

    #[test]
    fn cli_parse_no_subcommand_errors() {
        assert!(Cli::try_parse_from(["shopfront"]).is_err());
    }
}
