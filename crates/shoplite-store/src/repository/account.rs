//! # Account Directory Component
//!
//! Registration against the stored account list.
//!
//! ## Two-Step Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Registration Flow                                    │
//! │                                                                         │
//! │  1. validate_registration(form)                                         │
//! │       │    returns field → message map; empty map means valid           │
//! │       │    (the UI paints these messages under each input)              │
//! │       ▼                                                                 │
//! │  2. register(form)       only called when step 1 came back empty        │
//! │       │    allocates id, stamps created_at, appends, writes             │
//! │       ▼                                                                 │
//! │     User                                                                │
//! │                                                                         │
//! │  register does NOT re-run the checks. Skipping step 1 can store a       │
//! │  record that step 1 would have rejected.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use chrono::Utc;
use tracing::debug;

use shoplite_core::types::{Registration, User};
use shoplite_core::validation;

use crate::error::DataResult;
use crate::repository::next_record_id;
use crate::store::{KeyValueStore, StoreKey};

// =============================================================================
// Account Directory
// =============================================================================

/// Registration operations over a key-value store.
pub struct AccountDirectory<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> AccountDirectory<S> {
    /// Creates a directory over the given store.
    pub fn new(store: S) -> Self {
        AccountDirectory { store }
    }

    /// Checks a registration form against the stored accounts.
    ///
    /// Returns a field → message map for the UI. An empty map means the
    /// form may be passed to [`register`](Self::register).
    pub fn validate_registration(
        &self,
        reg: &Registration,
    ) -> DataResult<BTreeMap<String, String>> {
        let users: Vec<User> = self.store.read_or_default(StoreKey::Users)?;
        Ok(validation::validate_registration(reg, &users))
    }

    /// Creates an account from an already-validated form.
    ///
    /// New accounts are never admins; the flag can only arrive by editing
    /// the stored record.
    pub fn register(&self, reg: &Registration) -> DataResult<User> {
        let mut users: Vec<User> = self.store.read_or_default(StoreKey::Users)?;

        let user = User {
            id: next_record_id(users.iter().map(|u| u.id)),
            name: reg.name.clone(),
            email: reg.email.clone(),
            password: reg.password.clone(),
            created_at: Utc::now(),
            is_admin: false,
        };

        debug!(id = user.id, email = %user.email, "registering account");

        users.push(user.clone());
        self.store.write(StoreKey::Users, &users)?;

        Ok(user)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
