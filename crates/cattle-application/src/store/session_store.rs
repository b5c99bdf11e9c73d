use std::sync::{Arc, RwLock};

use cattle_core::GUEST_MOBILE;
use cattle_core::auth::{AuthSession, SessionRepository};

/// Holds the login state and persists every change.
///
/// Persistence failures are logged and otherwise ignored; the in-memory
/// state is always updated.
pub struct SessionStore {
    state: RwLock<AuthSession>,
    repository: Arc<dyn SessionRepository>,
}

impl SessionStore {
    /// Restores the last persisted session, or starts logged out.
    pub fn load(repository: Arc<dyn SessionRepository>) -> Self {
        let session = repository.load().unwrap_or_else(|e| {
            tracing::warn!("[SessionStore] Failed to restore session, starting logged out: {}", e);
            AuthSession::default()
        });

        Self {
            state: RwLock::new(session),
            repository,
        }
    }

    pub fn snapshot(&self) -> AuthSession {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.read().unwrap_or_else(|e| e.into_inner()).is_logged_in
    }

    pub fn user_mobile(&self) -> Option<String> {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .active_mobile()
            .map(str::to_string)
    }

    /// Mobile used for backend calls: the logged-in user, else the guest number.
    pub fn effective_mobile(&self) -> String {
        self.user_mobile()
            .unwrap_or_else(|| GUEST_MOBILE.to_string())
    }

    pub fn login(&self, mobile: impl Into<String>) {
        let session = AuthSession::logged_in(mobile);
        tracing::info!("[SessionStore] Logged in");
        self.replace(session);
    }

    pub fn logout(&self) {
        tracing::info!("[SessionStore] Logged out");
        self.replace(AuthSession::default());
    }

    /// Persists while holding the write lock so disk order matches memory order.
    fn replace(&self, session: AuthSession) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = self.repository.save(&session) {
            tracing::warn!("[SessionStore] Failed to persist session: {}", e);
        }
        *state = session;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cattle_core::CattleError;
    use cattle_core::error::Result;
    use cattle_infrastructure::{BlobSessionRepository, InMemoryBlobStore};

    struct BrokenRepository;

    impl SessionRepository for BrokenRepository {
        fn load(&self) -> Result<AuthSession> {
            Err(CattleError::io("disk unavailable"))
        }

        fn save(&self, _session: &AuthSession) -> Result<()> {
            Err(CattleError::io("disk unavailable"))
        }
    }

    fn memory_repository() -> Arc<dyn SessionRepository> {
        Arc::new(BlobSessionRepository::new(Arc::new(InMemoryBlobStore::new())))
    }

    #[test]
    fn test_login_then_logout() {
        let store = SessionStore::load(memory_repository());

        store.login("9876543210");
        assert!(store.is_logged_in());
        assert_eq!(store.user_mobile().as_deref(), Some("9876543210"));

        store.logout();
        assert!(!store.is_logged_in());
        assert!(store.user_mobile().is_none());
        assert_eq!(store.effective_mobile(), GUEST_MOBILE);
    }

    #[test]
    fn test_login_survives_restart() {
        let repository = memory_repository();
        SessionStore::load(repository.clone()).login("9876543210");

        let restored = SessionStore::load(repository);
        assert_eq!(restored.user_mobile().as_deref(), Some("9876543210"));
    }

    #[test]
    fn test_persistence_failure_does_not_block_login() {
        let store = SessionStore::load(Arc::new(BrokenRepository));
        assert!(!store.is_logged_in());

        store.login("9876543210");
        assert!(store.is_logged_in());
    }

    #[test]
    fn test_concurrent_logins_persist_final_state() {
        let repository = memory_repository();
        let store = Arc::new(SessionStore::load(repository.clone()));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        store.login(format!("98765432{:02}", i));
                        store.logout();
                        store.login(format!("98765432{:02}", i));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(repository.load().unwrap(), store.snapshot());
        assert!(store.is_logged_in());
    }
}
