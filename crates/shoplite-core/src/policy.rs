//! # Policy Module
//!
//! Who may do what. The only rule today is catalog management.
//!
//! ## The Admin Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  is_admin(user)?                                                        │
//! │                                                                         │
//! │  user.is_admin == true ──────────────┐                                  │
//! │                                      ├──► OR ──► admin                  │
//! │  user.email == ADMIN_EMAIL ──────────┘                                  │
//! │                                                                         │
//! │  Catalog mutations (add/update/delete) require an admin principal.      │
//! │  Everything else (browse, search, cart, register, login) is open.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::User;
use crate::ADMIN_EMAIL;

/// Checks whether a user holds admin rights.
///
/// Admin rights come from the stored flag or from the reserved address.
/// Every permission check in the system routes through here, so the rule
/// can change in one place.
///
/// ## Example
/// ```rust
/// use chrono::Utc;
/// use shoplite_core::policy::is_admin;
/// use shoplite_core::types::User;
///
/// let shopper = User {
///     id: 1,
///     name: "Jane".to_string(),
///     email: "jane@example.com".to_string(),
///     password: "hunter22".to_string(),
///     created_at: Utc::now(),
///     is_admin: false,
/// };
/// assert!(!is_admin(&shopper));
/// ```
#[inline]
pub fn is_admin(user: &User) -> bool {
    user.is_admin || user.email == ADMIN_EMAIL
}

/// Checks whether the current principal may mutate the catalog.
///
/// `None` means nobody is signed in, which is never allowed to mutate.
#[inline]
pub fn can_manage_catalog(principal: Option<&User>) -> bool {
    principal.is_some_and(is_admin)
}

// =============================================================================
// Unit Tests
// =============================================================================
