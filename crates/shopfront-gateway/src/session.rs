//! # Session Store Adapter
//!
//! Persists the signed-in [`Session`] under a fixed key of any
//! [`KeyValueStore`]. Loading never fails: a missing key, an unreadable
//! store or corrupted JSON all read as "no session".

use std::sync::Arc;

use shopfront_core::Session;

use crate::store::{KeyValueStore, StoreError};

/// Key the session is stored under.
pub const SESSION_KEY: &str = "user_session";

/// Session persistence over a key-value store.
#[derive(Debug, Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Store `session`, replacing any previous one.
    pub fn save_session(&self, session: &Session) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(session).map_err(|source| StoreError::Encode {
            key: SESSION_KEY.to_string(),
            source,
        })?;
        self.store.set(SESSION_KEY, &encoded)
    }

    /// The stored session, or `None`.
    pub fn load_session(&self) -> Option<Session> {
        let raw = match self.store.get(SESSION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!("session storage unreadable, treating as signed out: {err}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!("stored session is corrupted, treating as signed out: {err}");
                None
            }
        }
    }

    /// Remove the stored session (logout).
    pub fn clear_session(&self) -> Result<(), StoreError> {
        self.store.remove(SESSION_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{FileStore, MemoryStore};
    use proptest::prelude::*;
    use shopfront_core::UserId;

    fn memory_sessions() -> (Arc<MemoryStore>, SessionStore) {
        let store = Arc::new(MemoryStore::new());
        (store.clone(), SessionStore::new(store))
    }

    fn session(id: &str, token: &str) -> Session {
        Session::new(UserId::new(id).unwrap(), token)
    }

    #[test]
    fn missing_session_loads_as_none() {
        let (_, sessions) = memory_sessions();
        assert_eq!(sessions.load_session(), None);
    }

    #[test]
    fn save_overwrites_previous_session() {
        let (_, sessions) = memory_sessions();
        sessions.save_session(&session("1", "a")).unwrap();
        sessions.save_session(&session("2", "b")).unwrap();
        assert_eq!(sessions.load_session(), Some(session("2", "b")));
    }

    #[test]
    fn clear_then_load_is_none() {
        let (_, sessions) = memory_sessions();
        sessions.save_session(&session("1", "a")).unwrap();
        sessions.clear_session().unwrap();
        assert_eq!(sessions.load_session(), None);
        sessions.clear_session().unwrap();
    }

    #[test]
    fn corrupted_json_loads_as_none() {
        let (store, sessions) = memory_sessions();
        store.set(SESSION_KEY, "{\"userId\":").unwrap();
        assert_eq!(sessions.load_session(), None);

        store.set(SESSION_KEY, "{\"userId\":\"\",\"token\":\"t\"}").unwrap();
        assert_eq!(sessions.load_session(), None);
    }

    #[test]
    fn corrupted_store_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(FileStore::open(dir.path()).unwrap());
        std::fs::write(store.path(), "garbage").unwrap();
        let sessions = SessionStore::new(store);
        assert_eq!(sessions.load_session(), None);

        sessions.save_session(&session("7", "t")).unwrap();
        assert_eq!(sessions.load_session(), Some(session("7", "t")));
    }

    proptest! {
        #[test]
        fn save_then_load_round_trips(id in "[0-9A-Za-z_-]{1,24}", token in "\\PC{0,64}") {
            let (_, sessions) = memory_sessions();
            let original = session(&id, &token);
            sessions.save_session(&original).unwrap();
            prop_assert_eq!(sessions.load_session(), Some(original));
        }
    }
}
