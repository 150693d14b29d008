//! # Session Auth Component
//!
//! Login, the current-user lookup, and logout over the session slot.
//!
//! ## Session Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Session Lifecycle                                  │
//! │                                                                         │
//! │  session.json absent ──────► nobody is signed in (the default)          │
//! │       │                                                                 │
//! │       │  login(email, password) matches a stored account                │
//! │       ▼                                                                 │
//! │  session.json = User ──────► that user is signed in                     │
//! │       │                                                                 │
//! │       │  logout()                                                       │
//! │       ▼                                                                 │
//! │  session.json absent                                                    │
//! │                                                                         │
//! │  One slot, one signed-in user. A successful login replaces whoever      │
//! │  was signed in before; a failed one leaves the slot untouched.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Credential Check
//! Lookup is exact match on email AND password against the stored account
//! list. Failure is always the same [`CoreError::InvalidCredentials`], so
//! a caller cannot probe which of the two was wrong.

use tracing::debug;

use shoplite_core::types::User;
use shoplite_core::{policy, CoreError};

use crate::error::DataResult;
use crate::store::{KeyValueStore, StoreKey};

// =============================================================================
// Session Auth
// =============================================================================

/// Session operations over a key-value store.
pub struct SessionAuth<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionAuth<S> {
    /// Creates a session handler over the given store.
    pub fn new(store: S) -> Self {
        SessionAuth { store }
    }

    /// Signs a user in by exact email and password match.
    ///
    /// On success the session slot is replaced and the matched account is
    /// returned. On failure the slot is left exactly as it was.
    pub fn login(&self, email: &str, password: &str) -> DataResult<User> {
        let users: Vec<User> = self.store.read_or_default(StoreKey::Users)?;

        let user = users
            .into_iter()
            .find(|u| u.email == email && u.password == password)
            .ok_or(CoreError::InvalidCredentials)?;

        debug!(id = user.id, email = %user.email, "login");
        self.store.write(StoreKey::Session, &user)?;

        Ok(user)
    }

    /// Returns the signed-in user, or `None` when nobody is.
    pub fn current_user(&self) -> DataResult<Option<User>> {
        Ok(self.store.read(StoreKey::Session)?)
    }

    /// Whether the signed-in user (if any) holds admin rights.
    pub fn is_admin(&self) -> DataResult<bool> {
        Ok(policy::can_manage_catalog(self.current_user()?.as_ref()))
    }

    /// Signs out. Idempotent: logging out with nobody signed in is fine.
    pub fn logout(&self) -> DataResult<()> {
        debug!("logout");
        self.store.remove(StoreKey::Session)?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::store::MemoryStore;
    use chrono::Utc;

    fn user(id: i64, email: &str, password: &str) -> User {
        User {
            id,
            name: "Jane Doe".to_string(),
            email: email.to_string(),
            password: password.to_string(),
            created_at: Utc::now(),
            is_admin: false,
        }
    }

    fn store_with_users(users: &[User]) -> MemoryStore {
        let store = MemoryStore::new();
        store.write(StoreKey::Users, users).unwrap();
        store
    }

    #[test]
    fn test_login_with_good_credentials() {
        let store = store_with_users(&[user(1, "jane@example.com", "hunter22")]);
        let auth = SessionAuth::new(&store);

        let signed_in = auth.login("jane@example.com", "hunter22").unwrap();
        assert_eq!(signed_in.id, 1);

        let current = auth.current_user().unwrap().unwrap();
        assert_eq!(current, signed_in);
    }

    #[test]
    fn test_login_failure_is_uniform() {
        let store = store_with_users(&[user(1, "jane@example.com", "hunter22")]);
        let auth = SessionAuth::new(&store);

        // Wrong password and unknown email produce the same error
        let wrong_password = auth.login("jane@example.com", "nope").unwrap_err();
        let unknown_email = auth.login("ghost@example.com", "hunter22").unwrap_err();

        assert_eq!(wrong_password.code(), ErrorCode::InvalidCredentials);
        assert_eq!(unknown_email.code(), ErrorCode::InvalidCredentials);
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[test]
    fn test_failed_login_keeps_existing_session() {
        let store = store_with_users(&[
            user(1, "jane@example.com", "hunter22"),
            user(2, "john@example.com", "swordfish"),
        ]);
        let auth = SessionAuth::new(&store);

        auth.login("jane@example.com", "hunter22").unwrap();
        auth.login("john@example.com", "wrong").unwrap_err();

        let current = auth.current_user().unwrap().unwrap();
        assert_eq!(current.id, 1);
    }

    #[test]
    fn test_successful_login_replaces_session() {
        let store = store_with_users(&[
            user(1, "jane@example.com", "hunter22"),
            user(2, "john@example.com", "swordfish"),
        ]);
        let auth = SessionAuth::new(&store);

        auth.login("jane@example.com", "hunter22").unwrap();
        auth.login("john@example.com", "swordfish").unwrap();

        let current = auth.current_user().unwrap().unwrap();
        assert_eq!(current.id, 2);
    }

    #[test]
    fn test_nobody_signed_in_by_default() {
        let store = MemoryStore::new();
        let auth = SessionAuth::new(&store);

        assert!(auth.current_user().unwrap().is_none());
        assert!(!auth.is_admin().unwrap());
    }

    #[test]
    fn test_logout_clears_and_is_idempotent() {
        let store = store_with_users(&[user(1, "jane@example.com", "hunter22")]);
        let auth = SessionAuth::new(&store);

        auth.login("jane@example.com", "hunter22").unwrap();
        auth.logout().unwrap();
        assert!(auth.current_user().unwrap().is_none());

        // Logging out again is not an error
        auth.logout().unwrap();
    }

    #[test]
    fn test_is_admin_reflects_the_signed_in_user() {
        let mut flagged = user(1, "boss@example.com", "hunter22");
        flagged.is_admin = true;
        let store = store_with_users(&[
            flagged,
            user(2, "jane@example.com", "hunter22"),
            user(3, "admin@gmail.com", "hunter22"),
        ]);
        let auth = SessionAuth::new(&store);

        auth.login("boss@example.com", "hunter22").unwrap();
        assert!(auth.is_admin().unwrap());

        auth.login("jane@example.com", "hunter22").unwrap();
        assert!(!auth.is_admin().unwrap());

        // The reserved address counts as admin without the flag
        auth.login("admin@gmail.com", "hunter22").unwrap();
        assert!(auth.is_admin().unwrap());
    }

    #[test]
    fn test_empty_directory_rejects_everyone() {
        let store = MemoryStore::new();
        let auth = SessionAuth::new(&store);

        let err = auth.login("jane@example.com", "hunter22").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidCredentials);
    }
}
