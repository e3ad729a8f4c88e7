//! # Error Types
//!
//! Domain-specific error types for standbook-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  standbook-core errors (this file)                                     │
//! │  ├── CoreError        - Ledger rule violations                         │
//! │  └── ValidationError  - Malformed input (money strings, names)         │
//! │                                                                         │
//! │  standbook-cli errors (app)                                            │
//! │  └── CliError         - Config, snapshot file, arguments               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → exit code              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item name, day index)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Ledger errors.
///
/// Every variant is deterministic: the same stand state and the same call
/// always produce the same error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A sales submission named an item that is not on the menu.
    ///
    /// ## User Workflow
    /// ```text
    /// enter_sales_for_today({"Lemonade": 19, "Water": 4})
    ///      │
    ///      ▼
    /// Menu lookup: "Water" missing
    ///      │
    ///      ▼
    /// InvalidSalesItem { name: "Water" }   (day NOT recorded)
    /// ```
    #[error("Sales entry references '{name}', which is not on the menu")]
    InvalidSalesItem { name: String },

    /// A profit query named an item that is not on the menu.
    #[error("Menu item not found: {0}")]
    UnknownMenuItem(String),

    /// A day-indexed query asked for a day that has not been recorded.
    #[error("Day {day} is out of range: {days_recorded} day(s) recorded")]
    DayOutOfRange { day: usize, days_recorded: usize },

    /// A restored snapshot breaks a ledger invariant.
    #[error("Invalid snapshot: {reason}")]
    InvalidSnapshot { reason: String },

    /// Snapshot JSON could not be encoded or decoded.
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// The mutex behind a shared stand was poisoned by a panicking holder.
    #[error("Stand lock poisoned")]
    LockPoisoned,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates an InvalidSnapshot error.
    pub fn invalid_snapshot(reason: impl Into<String>) -> Self {
        CoreError::InvalidSnapshot {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Serialization(err.to_string())
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by parsers and validators before any ledger state is touched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., unparsable amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
