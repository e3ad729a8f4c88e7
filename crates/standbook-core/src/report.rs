//! # Profit Report
//!
//! A per-item breakdown of a stand's history, ready for display or JSON.
//!
//! ```text
//! Irwin's Lemonade (3 day(s) recorded)
//!   Big Bear Brownie          15 units @ $3.86 = $57.90
//!   ...
//!   Total profit: $556.52
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::stand::LemonadeStand;

/// One menu item's line in a [`ProfitReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemProfit {
    pub name: String,
    pub units_sold: u64,
    pub unit_margin_cents: i64,
    pub profit_cents: i64,
}

impl ItemProfit {
    #[inline]
    pub fn unit_margin(&self) -> Money {
        Money::from_cents(self.unit_margin_cents)
    }

    #[inline]
    pub fn profit(&self) -> Money {
        Money::from_cents(self.profit_cents)
    }
}

/// Profit of every current menu item, in name order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitReport {
    pub stand: String,
    pub days_recorded: usize,
    pub items: Vec<ItemProfit>,
    pub total_profit_cents: i64,
}

impl ProfitReport {
    #[inline]
    pub fn total_profit(&self) -> Money {
        Money::from_cents(self.total_profit_cents)
    }
}

impl LemonadeStand {
    /// Builds the profit breakdown for the current menu.
    ///
    /// The report total always equals [`LemonadeStand::total_profit_for_stand`].
    pub fn profit_report(&self) -> ProfitReport {
        let items: Vec<ItemProfit> = self
            .menu()
            .values()
            .map(|item| ItemProfit {
                name: item.name().to_string(),
                units_sold: self.total_sales_for_menu_item(item.name()),
                unit_margin_cents: item.margin().cents(),
                profit_cents: self.profit_for(item).cents(),
            })
            .collect();

        ProfitReport {
            stand: self.name().to_string(),
            days_recorded: self.current_day(),
            items,
            total_profit_cents: self.total_profit_for_stand().cents(),
        }
    }
}

impl fmt::Display for ProfitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({} day(s) recorded)", self.stand, self.days_recorded)?;

        let width = self.items.iter().map(|i| i.name.len()).max().unwrap_or(0);
        for line in &self.items {
            writeln!(
                f,
                "  {:<width$}  {:>6} units @ {} = {}",
                line.name,
                line.units_sold,
                line.unit_margin(),
                line.profit(),
                width = width
            )?;
        }

        write!(f, "  Total profit: {}", self.total_profit())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MenuItem;

    fn frozen_lemon() -> LemonadeStand {
        let mut stand = LemonadeStand::new("Frozen Lemon");
        stand.add_menu_item(MenuItem::new("Lemon Slushie", Money::from_cents(200), Money::from_cents(800)));
        stand.add_menu_item(MenuItem::new("Ice", Money::from_cents(30), Money::from_cents(25)));
        stand.enter_sales_for_today([("Lemon Slushie", 3), ("Ice", 4)]).unwrap();
        stand.enter_sales_for_today([("Lemon Slushie", 2)]).unwrap();
        stand
    }

    #[test]
    fn test_report_lines() {
        let report = frozen_lemon().profit_report();

        assert_eq!(report.stand, "Frozen Lemon");
        assert_eq!(report.days_recorded, 2);
        assert_eq!(
            report.items,
            vec![
                ItemProfit {
                    name: "Ice".to_string(),
                    units_sold: 4,
                    unit_margin_cents: -5,
                    profit_cents: -20,
                },
                ItemProfit {
                    name: "Lemon Slushie".to_string(),
                    units_sold: 5,
                    unit_margin_cents: 600,
                    profit_cents: 3000,
                },
            ]
        );
        assert_eq!(report.total_profit(), Money::from_cents(2980));
    }

    #[test]
    fn test_report_total_matches_stand_total() {
        let stand = frozen_lemon();
        assert_eq!(stand.profit_report().total_profit(), stand.total_profit_for_stand());
    }

    #[test]
    fn test_empty_stand_report() {
        let report = LemonadeStand::new("CyberLemon").profit_report();
        assert!(report.items.is_empty());
        assert!(report.total_profit().is_zero());
        assert_eq!(report.to_string(), "CyberLemon (0 day(s) recorded)\n  Total profit: $0.00");
    }

    #[test]
    fn test_report_display() {
        let text = frozen_lemon().profit_report().to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Frozen Lemon (2 day(s) recorded)");
        assert_eq!(lines[1], "  Ice                 4 units @ -$0.05 = -$0.20");
        assert_eq!(lines[2], "  Lemon Slushie       5 units @ $6.00 = $30.00");
        assert_eq!(lines[3], "  Total profit: $29.80");
    }
}
