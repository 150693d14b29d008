//! # Store Error Types
//!
//! Error types for persistence, plus the unified error the UI receives.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds key/path context                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DataError (this module) ← Unifies with CoreError, serialized           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Storefront UI displays the message, branches on the code               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## UI Error Serialization
//! The storefront receives every failure in one shape, both a
//! machine-readable `code` and a human-readable `message`:
//! ```json
//! {
//!   "code": "PERMISSION_DENIED",
//!   "message": "Only admins can delete products"
//! }
//! ```

use std::path::PathBuf;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

use shoplite_core::{CoreError, ValidationError};

use crate::store::StoreKey;

// =============================================================================
// Store Error
// =============================================================================

/// Persistence failures.
///
/// These errors wrap I/O and JSON errors with the key or path involved,
/// so log lines say WHICH collection went wrong.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading a collection file failed.
    ///
    /// ## When This Occurs
    /// - File permissions problem
    /// - Disk error mid-read
    ///
    /// A missing file is NOT this error; absent keys read as empty.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a collection file failed.
    ///
    /// ## When This Occurs
    /// - Disk full
    /// - Data directory removed out from under us
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stored bytes under a key are not valid JSON for the expected type.
    ///
    /// ## When This Occurs
    /// - Hand-edited collection file
    /// - A different program wrote the key
    /// - Truncated write from a crashed process
    ///
    /// Raised at the decode boundary, so callers never see a bare
    /// serde error from deep inside an operation.
    #[error("corrupt data under key '{key}': {source}")]
    CorruptData {
        key: StoreKey,
        #[source]
        source: serde_json::Error,
    },

    /// Encoding a collection to JSON failed.
    ///
    /// Practically unreachable for our derived types, but the boundary
    /// reports it rather than panicking.
    #[error("failed to encode key '{key}': {source}")]
    Encode {
        key: StoreKey,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for raw store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Data Error (what the UI sees)
// =============================================================================

/// Unified error for every component operation.
///
/// Domain rules and persistence failures both end up here, so callers
/// handle exactly one error type.
#[derive(Debug, Error)]
pub enum DataError {
    /// A business rule said no.
    #[error(transparent)]
    Domain(#[from] CoreError),

    /// The store said no.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Error codes for UI responses.
///
/// ## Usage in Frontend
/// ```typescript
/// try {
///   await catalog.remove(id);
/// } catch (e) {
///   switch (e.code) {
///     case 'PERMISSION_DENIED':
///       showNotification(e.message);
///       break;
///     case 'NOT_FOUND':
///       refreshGrid();
///       break;
///     default:
///       showError('An error occurred');
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product or cart line not found.
    NotFound,

    /// Caller may not perform a catalog mutation.
    PermissionDenied,

    /// Login failed.
    InvalidCredentials,

    /// Input validation failed.
    ValidationError,

    /// Stored data under a key could not be decoded.
    CorruptData,

    /// Reading or writing the store failed.
    StorageFailed,
}

impl DataError {
    /// Machine-readable code for the UI to branch on.
    pub fn code(&self) -> ErrorCode {
        match self {
            DataError::Domain(CoreError::PermissionDenied { .. }) => ErrorCode::PermissionDenied,
            DataError::Domain(CoreError::ProductNotFound(_)) => ErrorCode::NotFound,
            DataError::Domain(CoreError::CartItemNotFound(_)) => ErrorCode::NotFound,
            DataError::Domain(CoreError::InvalidCredentials) => ErrorCode::InvalidCredentials,
            DataError::Domain(CoreError::Validation(_)) => ErrorCode::ValidationError,
            DataError::Store(StoreError::CorruptData { .. }) => ErrorCode::CorruptData,
            DataError::Store(_) => ErrorCode::StorageFailed,
        }
    }
}

/// Validation errors skip straight to DataError without the caller
/// spelling out the CoreError hop.
impl From<ValidationError> for DataError {
    fn from(err: ValidationError) -> Self {
        DataError::Domain(CoreError::Validation(err))
    }
}

/// Serializes as `{code, message}` for the storefront.
impl Serialize for DataError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("DataError", 2)?;
        state.serialize_field("code", &self.code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type for component operations.
pub type DataResult<T> = Result<T, DataError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn corrupt_json_error() -> serde_json::Error {
        serde_json::from_str::<Vec<i64>>("not json").unwrap_err()
    }

    #[test]
    fn test_codes_map_by_variant() {
        let err: DataError = CoreError::PermissionDenied { action: "add" }.into();
        assert_eq!(err.code(), ErrorCode::PermissionDenied);

        let err: DataError = CoreError::ProductNotFound(42).into();
        assert_eq!(err.code(), ErrorCode::NotFound);

        let err: DataError = CoreError::InvalidCredentials.into();
        assert_eq!(err.code(), ErrorCode::InvalidCredentials);

        let err: DataError = StoreError::CorruptData {
            key: StoreKey::Products,
            source: corrupt_json_error(),
        }
        .into();
        assert_eq!(err.code(), ErrorCode::CorruptData);
    }

    #[test]
    fn test_validation_error_shortcut() {
        let err: DataError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert_eq!(err.code(), ErrorCode::ValidationError);
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn test_serializes_as_code_and_message() {
        let err: DataError = CoreError::PermissionDenied { action: "delete" }.into();
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["code"], "PERMISSION_DENIED");
        assert_eq!(json["message"], "Only admins can delete products");
    }

    #[test]
    fn test_corrupt_data_names_the_key() {
        let err = StoreError::CorruptData {
            key: StoreKey::Users,
            source: corrupt_json_error(),
        };
        assert!(err.to_string().contains("'users'"));
    }
}
