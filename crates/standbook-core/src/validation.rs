//! # Validation Module
//!
//! Input validation for Standbook.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI configuration                                            │
//! │  ├── Stand / item names present and bounded                            │
//! │  └── Prices parse as Money                                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Ledger (LemonadeStand)                                       │
//! │  └── THIS MODULE: every sold item is on the menu                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Snapshot restore                                             │
//! │  └── Day indices and menu keys re-checked                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `MenuItem` construction itself is deliberately unvalidated; the name
//! checks here are for callers that accept untrusted text.

use std::collections::BTreeMap;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted stand or menu item name, in bytes.
pub const MAX_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a stand name.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most [`MAX_NAME_LEN`] bytes
///
/// ## Example
/// ```rust
/// use standbook_core::validation::validate_stand_name;
///
/// assert!(validate_stand_name("Irwin's Lemonade").is_ok());
/// assert!(validate_stand_name("  ").is_err());
/// ```
pub fn validate_stand_name(name: &str) -> ValidationResult<()> {
    validate_name("stand name", name)
}

/// Validates a menu item name. Same rules as [`validate_stand_name`].
pub fn validate_menu_item_name(name: &str) -> ValidationResult<()> {
    validate_name("menu item name", name)
}

fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Menu Membership
// =============================================================================

/// Returns the first sold item name (in key order) that is missing from `menu`.
///
/// ## User Workflow
/// ```text
/// Submitted: {"Big Bear Brownie": 6, "Water": 4}
///      │
///      ▼
/// first_unknown_item(menu, submitted) ← THIS FUNCTION
///      │
///      ├── Some("Water") → reject whole day
///      │
///      └── None          → record the day
/// ```
pub fn first_unknown_item<'a, V, Q>(
    menu: &BTreeMap<String, V>,
    sold: &'a BTreeMap<String, Q>,
) -> Option<&'a str> {
    sold.keys()
        .find(|name| !menu.contains_key(name.as_str()))
        .map(String::as_str)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_stand_name() {
        assert!(validate_stand_name("Irwin's Lemonade").is_ok());
        assert!(validate_stand_name("CyberLemon").is_ok());

        assert_eq!(
            validate_stand_name(""),
            Err(ValidationError::Required {
                field: "stand name".to_string()
            })
        );
        assert!(validate_stand_name("   ").is_err());
        assert!(validate_stand_name(&"L".repeat(MAX_NAME_LEN)).is_ok());
        assert!(validate_stand_name(&"L".repeat(MAX_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_menu_item_name() {
        assert!(validate_menu_item_name("Crikey Cookies").is_ok());
        assert!(matches!(
            validate_menu_item_name("\t"),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_first_unknown_item() {
        let menu: BTreeMap<String, ()> = [("Lemonade".to_string(), ())].into_iter().collect();

        let ok: BTreeMap<String, u64> = [("Lemonade".to_string(), 3)].into_iter().collect();
        assert_eq!(first_unknown_item(&menu, &ok), None);

        let empty: BTreeMap<String, u64> = BTreeMap::new();
        assert_eq!(first_unknown_item(&menu, &empty), None);

        let bad: BTreeMap<String, u64> = [
            ("Water".to_string(), 4),
            ("Lemonade".to_string(), 1),
            ("Brownie".to_string(), 2),
        ]
        .into_iter()
        .collect();
        // Key order, so "Brownie" before "Water"
        assert_eq!(first_unknown_item(&menu, &bad), Some("Brownie"));
    }
}
