//! Session repository trait.

use crate::auth::model::AuthSession;
use crate::error::Result;

/// Persistence for the login state.
///
/// Implementations are synchronous: a store writes through on every
/// mutation and the write is a single small blob.
pub trait SessionRepository: Send + Sync {
    /// Loads the persisted session, or the logged-out default when none exists.
    fn load(&self) -> Result<AuthSession>;

    /// Replaces the persisted session.
    fn save(&self, session: &AuthSession) -> Result<()>;
}
