//! # Validation Module
//!
//! Input validation utilities for ShoppingTime.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Storefront command                                           │
//! │  ├── Required fields (trimmed, non-empty)                              │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Shape rules (lengths, positive quantities)                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Pure collections                                             │
//! │  └── Quantity ≥ 1, one entry per product id                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Placeholder Login Policy
//! `validate_credentials` is NOT authentication. It accepts any username of
//! at least 3 characters with any password of at least 6 characters. No
//! credential is ever checked against an authority.
//!
//! ## Usage
//! ```rust
//! use shoptime_core::validation::{validate_credentials, validate_quantity};
//!
//! assert!(validate_credentials("abc", "longenough").is_ok());
//! assert!(validate_credentials("ab", "whatever123").is_err());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::{MIN_PASSWORD_LEN, MIN_USERNAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum accepted search query length.
pub const MAX_SEARCH_QUERY_LEN: usize = 100;

// =============================================================================
// Login Shape Checks
// =============================================================================

/// Validates a username by length only.
///
/// Lengths count characters, so "añb" is 3 long.
pub fn validate_username(username: &str) -> ValidationResult<()> {
    if username.chars().count() < MIN_USERNAME_LEN {
        return Err(ValidationError::TooShort {
            field: "username".to_string(),
            min: MIN_USERNAME_LEN,
        });
    }

    Ok(())
}

/// Validates a password by length only.
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: MIN_PASSWORD_LEN,
        });
    }

    Ok(())
}

/// Applies the placeholder login policy.
///
/// The username is checked first, matching the order messages are shown
/// on the login form.
pub fn validate_credentials(username: &str, password: &str) -> ValidationResult<()> {
    validate_username(username)?;
    validate_password(password)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value for "add N units".
///
/// ## Rules
/// - Must be positive (> 0)
///
/// There is no upper bound: adding N units must always yield N.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Example
/// ```rust
/// use shoptime_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(10995).is_ok());
/// assert!(validate_price_cents(0).is_ok());     // Free item
/// assert!(validate_price_cents(-100).is_err()); // Invalid
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (matches every product)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_SEARCH_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_SEARCH_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
