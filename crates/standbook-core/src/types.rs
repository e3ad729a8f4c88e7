//! # Domain Types
//!
//! The two leaf value types of the ledger.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐          ┌─────────────────────┐              │
//! │  │      MenuItem       │          │     DailySales      │              │
//! │  │  ─────────────────  │          │  ─────────────────  │              │
//! │  │  name (menu key)    │◄─────────│  day (0-based)      │              │
//! │  │  wholesale_cost     │  by name │  quantities         │              │
//! │  │  selling_price      │          │   name → units      │              │
//! │  └─────────────────────┘          └─────────────────────┘              │
//! │                                                                         │
//! │  Both are immutable once built. LemonadeStand owns them.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Menu Item
// =============================================================================

/// A product offered for sale at a stand.
///
/// No checks run on construction: an empty name, a negative price or a
/// selling price below cost are all accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    name: String,

    /// What the stand pays per unit.
    #[serde(rename = "wholesale_cost_cents")]
    wholesale_cost: Money,

    /// What the customer pays per unit.
    #[serde(rename = "selling_price_cents")]
    selling_price: Money,
}

impl MenuItem {
    /// Creates a menu item.
    ///
    /// ## Example
    /// ```rust
    /// use standbook_core::{MenuItem, Money};
    ///
    /// let item = MenuItem::new("Lemur Love Lemonade", Money::from_cents(163), Money::from_cents(499));
    /// assert_eq!(item.margin().cents(), 336);
    /// ```
    pub fn new(name: impl Into<String>, wholesale_cost: Money, selling_price: Money) -> Self {
        MenuItem {
            name: name.into(),
            wholesale_cost,
            selling_price,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn wholesale_cost(&self) -> Money {
        self.wholesale_cost
    }

    #[inline]
    pub fn selling_price(&self) -> Money {
        self.selling_price
    }

    /// Profit per unit sold. Negative for a loss-making item.
    #[inline]
    pub fn margin(&self) -> Money {
        self.selling_price - self.wholesale_cost
    }
}

// =============================================================================
// Daily Sales
// =============================================================================

/// Units sold per item on one day of a stand's history.
///
/// Normally built by `LemonadeStand::enter_sales_for_today`, which checks
/// every name against the menu first. Building one directly skips that
/// check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySales {
    day: usize,
    quantities: BTreeMap<String, u64>,
}

impl DailySales {
    pub fn new(day: usize, quantities: BTreeMap<String, u64>) -> Self {
        DailySales { day, quantities }
    }

    /// Zero-based position of this day in the stand's history.
    #[inline]
    pub fn day(&self) -> usize {
        self.day
    }

    #[inline]
    pub fn quantities(&self) -> &BTreeMap<String, u64> {
        &self.quantities
    }

    /// Units of `name` sold this day; an item that was not submitted counts as 0.
    pub fn quantity_of(&self, name: &str) -> u64 {
        self.quantities.get(name).copied().unwrap_or(0)
    }

    /// Units sold across every item this day, saturating at `u64::MAX`.
    pub fn total_units(&self) -> u64 {
        self.quantities
            .values()
            .fold(0, |total, qty| total.saturating_add(*qty))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_accessors() {
        let item = MenuItem::new("French Limonade", Money::from_cents(85), Money::from_cents(2500));
        assert_eq!(item.name(), "French Limonade");
        assert_eq!(item.wholesale_cost().cents(), 85);
        assert_eq!(item.selling_price().cents(), 2500);
        assert_eq!(item.margin().cents(), 2415);
    }

    #[test]
    fn test_menu_item_accepts_loss_and_odd_values() {
        let loss = MenuItem::new("Loss Leader", Money::from_cents(300), Money::from_cents(250));
        assert_eq!(loss.margin().cents(), -50);

        let odd = MenuItem::new("", Money::from_cents(-10), Money::zero());
        assert_eq!(odd.name(), "");
        assert_eq!(odd.margin().cents(), 10);
    }

    #[test]
    fn test_daily_sales_absent_item_is_zero() {
        let sales = DailySales::new(
            2,
            [("Lemon Slushie".to_string(), 3)].into_iter().collect(),
        );
        assert_eq!(sales.day(), 2);
        assert_eq!(sales.quantity_of("Lemon Slushie"), 3);
        assert_eq!(sales.quantity_of("Water"), 0);
        assert_eq!(sales.total_units(), 3);
    }

    #[test]
    fn test_total_units_saturates() {
        let sales = DailySales::new(
            0,
            [("A".to_string(), u64::MAX), ("B".to_string(), 1)]
                .into_iter()
                .collect(),
        );
        assert_eq!(sales.total_units(), u64::MAX);
    }

    #[test]
    fn test_menu_item_json_field_names() {
        let item = MenuItem::new("Lemonade", Money::from_cents(75), Money::from_cents(799));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["name"], "Lemonade");
        assert_eq!(json["wholesale_cost_cents"], 75);
        assert_eq!(json["selling_price_cents"], 799);
    }
}
