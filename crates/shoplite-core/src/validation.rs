//! # Validation Module
//!
//! Input validation utilities for Shoplite.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Storefront UI (JS)                                           │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (Rust)                                           │
//! │  ├── Field validators (one rule each)                                  │
//! │  └── validate_registration (assembles field → message map)             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store components                                             │
//! │  ├── Catalog boundary checks (name, price)                             │
//! │  └── Duplicate-email check against stored accounts                     │
//! │                                                                         │
//! │  Defense in depth: Multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shoplite_core::validation::{validate_name, validate_password};
//!
//! assert!(validate_name("Jane Doe").is_ok());
//! assert!(validate_password("hunter22").is_ok());
//! ```

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;
use crate::types::{Registration, User};
use crate::{MIN_NAME_LEN, MIN_PASSWORD_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Email shape check: something, an @, something, a dot, something.
/// No whitespace anywhere. Deliverability is not our problem.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex must compile")
});

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a display name for registration.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Trimmed length must be at least 3 characters
///
/// ## Example
/// ```rust
/// use shoplite_core::validation::validate_name;
///
/// assert!(validate_name("Jane Doe").is_ok());
/// assert!(validate_name("  Jo  ").is_err());
/// assert!(validate_name("").is_err());
/// ```
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() < MIN_NAME_LEN {
        return Err(ValidationError::TooShort {
            field: "name".to_string(),
            min: MIN_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates the shape of an email address.
///
/// ## Rules
/// - Must not be empty
/// - Must look like `local@domain.tld` (no whitespace, one @, a dot after it)
///
/// ## Example
/// ```rust
/// use shoplite_core::validation::validate_email_format;
///
/// assert!(validate_email_format("jane@example.com").is_ok());
/// assert!(validate_email_format("jane@example").is_err());
/// assert!(validate_email_format("not an email").is_err());
/// ```
pub fn validate_email_format(email: &str) -> ValidationResult<()> {
    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must look like name@example.com".to_string(),
        });
    }

    Ok(())
}

/// Validates a password.
///
/// ## Rules
/// - Must be at least 6 characters
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: MIN_PASSWORD_LEN,
        });
    }

    Ok(())
}

/// Validates a product name at the catalog boundary.
///
/// ## Rules
/// - Must not be empty after trimming
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use shoplite_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(19999).is_ok()); // $199.99
/// assert!(validate_price_cents(0).is_ok());     // Free item
/// assert!(validate_price_cents(-100).is_err()); // Invalid
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Registration
// =============================================================================

/// Validates a registration form against the existing account list.
///
/// Returns a map of field name → human-readable message. An empty map means
/// the form is valid. Rule violations are data, not an `Err` path; every
/// failing field appears at most once, with its most specific message.
///
/// ## Rules
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Registration Form Checks                                               │
/// │                                                                         │
/// │  name ────────► trimmed, at least 3 characters                          │
/// │  email ───────► local@domain.tld shape                                  │
/// │           └───► not already registered (exact, case-sensitive)          │
/// │  password ────► at least 6 characters                                   │
/// │  confirm ─────► equals password                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_registration(
    reg: &Registration,
    existing: &[User],
) -> BTreeMap<String, String> {
    let mut errors = BTreeMap::new();

    if let Err(e) = validate_name(&reg.name) {
        errors.insert("name".to_string(), e.to_string());
    }

    if let Err(e) = validate_email_format(&reg.email) {
        errors.insert("email".to_string(), e.to_string());
    } else if existing.iter().any(|u| u.email == reg.email) {
        let e = ValidationError::Duplicate {
            field: "email".to_string(),
            value: reg.email.clone(),
        };
        errors.insert("email".to_string(), e.to_string());
    }

    if let Err(e) = validate_password(&reg.password) {
        errors.insert("password".to_string(), e.to_string());
    }

    if reg.password != reg.confirm_password {
        errors.insert(
            "confirm_password".to_string(),
            ValidationError::PasswordMismatch.to_string(),
        );
    }

    errors
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn registration(name: &str, email: &str, password: &str, confirm: &str) -> Registration {
        Registration {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    fn existing_user(email: &str) -> User {
        User {
            id: 1700000000000,
            name: "Existing".to_string(),
            email: email.to_string(),
            password: "hunter22".to_string(),
            created_at: Utc::now(),
            is_admin: false,
        }
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Jane Doe").is_ok());
        assert!(validate_name("Ali").is_ok());

        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        // Trimming happens before the length check
        assert!(validate_name("  Jo  ").is_err());
    }

    #[test]
    fn test_validate_email_format() {
        assert!(validate_email_format("jane@example.com").is_ok());
        assert!(validate_email_format("a@b.co").is_ok());

        assert!(validate_email_format("").is_err());
        assert!(validate_email_format("janeexample.com").is_err());
        assert!(validate_email_format("jane@example").is_err());
        assert!(validate_email_format("jane doe@example.com").is_err());
        assert!(validate_email_format("jane@exam ple.com").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("hunter22").is_ok());
        assert!(validate_password("123456").is_ok());
        assert!(validate_password("12345").is_err());
        assert!(validate_password("").is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Gaming Mouse").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(19999).is_ok());
        assert!(validate_price_cents(-1).is_err());
    }

    #[test]
    fn test_validate_registration_all_good() {
        let reg = registration("Jane Doe", "jane@example.com", "hunter22", "hunter22");
        let errors = validate_registration(&reg, &[]);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_validate_registration_collects_every_failing_field() {
        let reg = registration("Jo", "not-an-email", "12345", "54321");
        let errors = validate_registration(&reg, &[]);

        assert_eq!(errors.len(), 4);
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("password"));
        assert!(errors.contains_key("confirm_password"));
    }

    #[test]
    fn test_validate_registration_duplicate_email() {
        let reg = registration("Jane Doe", "jane@example.com", "hunter22", "hunter22");
        let users = vec![existing_user("jane@example.com")];
        let errors = validate_registration(&reg, &users);

        assert_eq!(errors.len(), 1);
        assert!(errors["email"].contains("already exists"));
    }

    #[test]
    fn test_validate_registration_duplicate_check_is_case_sensitive() {
        let reg = registration("Jane Doe", "Jane@Example.com", "hunter22", "hunter22");
        let users = vec![existing_user("jane@example.com")];
        let errors = validate_registration(&reg, &users);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_validate_registration_malformed_email_skips_duplicate_check() {
        // A malformed email reports the format problem, not the duplicate.
        let reg = registration("Jane Doe", "broken", "hunter22", "hunter22");
        let users = vec![existing_user("broken")];
        let errors = validate_registration(&reg, &users);

        assert_eq!(errors.len(), 1);
        assert!(errors["email"].contains("invalid format"));
    }
}
