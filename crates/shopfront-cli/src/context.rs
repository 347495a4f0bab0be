//! Shared state for command handlers: the state directory, the gateway built
//! from the environment, and result output.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use shopfront_core::{OperationResult, UserId};
use shopfront_gateway::{FileStore, Gateway, GatewayConfig, SessionStore};

/// Exit code for `success: true`.
pub const EXIT_SUCCESS: u8 = 0;
/// Exit code for `success: false`.
pub const EXIT_FAILURE: u8 = 1;
/// Exit code for local errors.
pub const EXIT_LOCAL_ERROR: u8 = 2;

/// Where the CLI keeps its local state.
#[derive(Debug, Clone)]
pub struct CliContext {
    state_dir: PathBuf,
}

impl CliContext {
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            state_dir: state_dir.into(),
        }
    }

    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }

    fn store(&self) -> Result<Arc<FileStore>> {
        let store = FileStore::open(&self.state_dir).with_context(|| {
            format!("opening state directory {}", self.state_dir.display())
        })?;
        Ok(Arc::new(store))
    }

    /// Session store backed by the state directory. Needs no backend config.
    pub fn sessions(&self) -> Result<SessionStore> {
        Ok(SessionStore::new(self.store()?))
    }

    /// Gateway configured from `SHOPFRONT_*` environment variables.
    pub fn gateway(&self) -> Result<Gateway> {
        let config = GatewayConfig::from_env().context("loading gateway configuration")?;
        tracing::debug!(?config, state_dir = %self.state_dir.display(), "building gateway");
        Gateway::new(config, self.store()?).context("building gateway")
    }

    /// The explicit `--user-id`, else the signed-in user.
    pub fn user_id(&self, gateway: &Gateway, explicit: Option<&UserId>) -> Result<UserId> {
        if let Some(id) = explicit {
            return Ok(id.clone());
        }
        gateway
            .current_session()
            .map(|session| session.user_id)
            .context("no --user-id given and no stored session; run `shopfront otp verify` first")
    }
}

/// Print `result` as pretty JSON and map it to an exit code.
pub fn emit<T: Serialize>(result: &OperationResult<T>) -> Result<u8> {
    let rendered = serde_json::to_string_pretty(result).context("rendering result")?;
    println!("{rendered}");
    Ok(if result.success {
        EXIT_SUCCESS
    } else {
        EXIT_FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::Session;

    #[test]
    fn emit_maps_success_to_exit_code() {
        let ok: OperationResult<u64> = OperationResult::succeeded("fine", Some(3));
        assert_eq!(emit(&ok).unwrap(), EXIT_SUCCESS);

        let failed: OperationResult<u64> = OperationResult::failed("nope");
        assert_eq!(emit(&failed).unwrap(), EXIT_FAILURE);
    }

    #[test]
    fn sessions_live_in_state_dir() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = CliContext::new(dir.path().join("state"));

        let session = Session::new(UserId::new("42").unwrap(), "tok");
        ctx.sessions().unwrap().save_session(&session).unwrap();

        let reopened = CliContext::new(dir.path().join("state"));
        assert_eq!(reopened.sessions().unwrap().load_session(), Some(session));
    }
}
