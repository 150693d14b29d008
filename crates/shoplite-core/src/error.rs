//! # Error Types
//!
//! Domain-specific error types for shoplite-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shoplite-core errors (this file)                                       │
//! │  ├── CoreError        - Business rule violations                        │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  shoplite-store errors (separate crate)                                 │
//! │  ├── StoreError       - Persistence failures                            │
//! │  └── DataError        - What the UI sees (serialized)                   │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → DataError → Storefront UI          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (id, field, action)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Caller is not allowed to perform a catalog mutation.
    ///
    /// ## When This Occurs
    /// - No user is signed in
    /// - The signed-in user fails the admin policy
    ///
    /// ## User Workflow
    /// ```text
    /// Click "Delete Product"
    ///      │
    ///      ▼
    /// policy::can_manage_catalog(current_user) → false
    ///      │
    ///      ▼
    /// PermissionDenied { action: "delete" }
    ///      │
    ///      ▼
    /// UI shows: "Only admins can delete products"
    /// ```
    #[error("Only admins can {action} products")]
    PermissionDenied { action: &'static str },

    /// Product cannot be found.
    ///
    /// ## When This Occurs
    /// - Product id doesn't exist in the catalog
    /// - Product was deleted between render and action
    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    /// Cart line cannot be found.
    #[error("Item not found in cart: {0}")]
    CartItemNotFound(i64),

    /// No account matches the submitted email and password.
    ///
    /// Deliberately silent about WHICH of the two was wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Validation error (wraps ValidationError).
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Invalid format (e.g., malformed email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., an email that is already registered).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },

    /// Password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// Numeric value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
