//! # Lemonade Stand Ledger
//!
//! `LemonadeStand` owns a menu and an append-only record of daily sales, and
//! derives unit and profit totals from them on demand.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Stand Lifecycle                                   │
//! │                                                                         │
//! │  new("Irwin's Lemonade")      menu = {}, sales_record = [], day 0      │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  add_menu_item(item) ×N       menu[item.name] = item (last write wins) │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  enter_sales_for_today(map)   all names on menu? ──no──► InvalidSales- │
//! │        │                            │                   Item, nothing  │
//! │        │                           yes                  recorded       │
//! │        │                            ▼                                   │
//! │        │                    push DailySales { day: current_day }       │
//! │        ▼                                                                │
//! │  total_profit_for_stand()     Σ margin × units over the menu           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - `sales_record[i].day() == i`
//! - `current_day() == sales_record.len()`
//! - every menu key equals its item's name

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::snapshot::StandSnapshot;
use crate::types::{DailySales, MenuItem};
use crate::validation::first_unknown_item;

/// A single stand: its menu and its day-by-day sales history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StandSnapshot", into = "StandSnapshot")]
pub struct LemonadeStand {
    pub(crate) name: String,
    pub(crate) menu: BTreeMap<String, MenuItem>,
    pub(crate) sales_record: Vec<DailySales>,
}

impl LemonadeStand {
    /// Creates an empty stand on day 0.
    pub fn new(name: impl Into<String>) -> Self {
        LemonadeStand {
            name: name.into(),
            menu: BTreeMap::new(),
            sales_record: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Index the next recorded day will get; equals the number of days recorded.
    pub fn current_day(&self) -> usize {
        self.sales_record.len()
    }

    pub fn menu(&self) -> &BTreeMap<String, MenuItem> {
        &self.menu
    }

    pub fn menu_item(&self, name: &str) -> Option<&MenuItem> {
        self.menu.get(name)
    }

    pub fn sales_record(&self) -> &[DailySales] {
        &self.sales_record
    }

    /// Adds `item` to the menu under its own name.
    ///
    /// An item already listed under that name is replaced.
    pub fn add_menu_item(&mut self, item: MenuItem) {
        let name = item.name().to_string();
        match self.menu.insert(name, item) {
            Some(previous) => debug!(
                stand = %self.name,
                item = %previous.name(),
                "Replaced menu item"
            ),
            None => debug!(stand = %self.name, menu_size = self.menu.len(), "Added menu item"),
        }
    }

    /// Records today's sales and advances the day counter.
    ///
    /// `sales` is any collection of `(item name, units sold)` pairs. If a name
    /// appears twice the later pair wins. Menu items left out count as zero
    /// sold that day.
    ///
    /// Returns the day index the sales were recorded under.
    ///
    /// ## Errors
    /// [`CoreError::InvalidSalesItem`] if any name is not on the menu; the
    /// first such name in sorted order is reported. Nothing is recorded.
    ///
    /// ## Example
    /// ```rust
    /// use standbook_core::{CoreError, LemonadeStand, MenuItem, Money};
    ///
    /// let mut stand = LemonadeStand::new("Frozen Lemon");
    /// stand.add_menu_item(MenuItem::new("Lemon Slushie", Money::from_cents(200), Money::from_cents(800)));
    ///
    /// assert_eq!(stand.enter_sales_for_today([("Lemon Slushie", 3)]), Ok(0));
    /// assert!(matches!(
    ///     stand.enter_sales_for_today([("Water", 4)]),
    ///     Err(CoreError::InvalidSalesItem { .. })
    /// ));
    /// assert_eq!(stand.current_day(), 1);
    /// ```
    pub fn enter_sales_for_today<I, K>(&mut self, sales: I) -> CoreResult<usize>
    where
        I: IntoIterator<Item = (K, u64)>,
        K: Into<String>,
    {
        let quantities: BTreeMap<String, u64> = sales
            .into_iter()
            .map(|(name, qty)| (name.into(), qty))
            .collect();

        if let Some(unknown) = first_unknown_item(&self.menu, &quantities) {
            warn!(
                stand = %self.name,
                day = self.current_day(),
                item = %unknown,
                "Rejected sales entry for item not on the menu"
            );
            return Err(CoreError::InvalidSalesItem {
                name: unknown.to_string(),
            });
        }

        let day = self.current_day();
        let record = DailySales::new(day, quantities);
        info!(
            stand = %self.name,
            day,
            units = record.total_units(),
            "Recorded daily sales"
        );
        self.sales_record.push(record);

        Ok(day)
    }

    /// Units of `name` sold on `day`.
    ///
    /// An item missing from that day's entry sold 0.
    ///
    /// ## Errors
    /// [`CoreError::DayOutOfRange`] if `day` has not been recorded yet.
    pub fn sales_of_menu_item_for_day(&self, day: usize, name: &str) -> CoreResult<u64> {
        self.sales_record
            .get(day)
            .map(|record| record.quantity_of(name))
            .ok_or(CoreError::DayOutOfRange {
                day,
                days_recorded: self.current_day(),
            })
    }

    /// Units of `name` sold over the whole history.
    ///
    /// Does not consult the menu: any name that was ever recorded counts.
    /// Saturates at `u64::MAX`.
    pub fn total_sales_for_menu_item(&self, name: &str) -> u64 {
        self.sales_record
            .iter()
            .map(|record| record.quantity_of(name))
            .fold(0, u64::saturating_add)
    }

    /// `(selling price - wholesale cost) × total units sold` for a menu item.
    ///
    /// ## Errors
    /// [`CoreError::UnknownMenuItem`] if `name` is not on the menu.
    pub fn total_profit_for_menu_item(&self, name: &str) -> CoreResult<Money> {
        self.menu
            .get(name)
            .map(|item| self.profit_for(item))
            .ok_or_else(|| CoreError::UnknownMenuItem(name.to_string()))
    }

    /// Profit summed over every item currently on the menu. `Money` addition
    /// saturates, so huge totals clamp rather than overflow.
    pub fn total_profit_for_stand(&self) -> Money {
        self.menu.values().map(|item| self.profit_for(item)).sum()
    }

    pub(crate) fn profit_for(&self, item: &MenuItem) -> Money {
        item.margin()
            .multiply_quantity(self.total_sales_for_menu_item(item.name()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
