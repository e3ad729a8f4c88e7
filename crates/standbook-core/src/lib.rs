//! # standbook-core: Pure Business Logic for Standbook
//!
//! Ledger for a single retail stand: a menu of items, an append-only record
//! of units sold per day, and profit figures derived from both.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Standbook Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    standbook CLI                                │   │
//! │  │    config.toml ──► build stand ──► profit report / snapshot    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ standbook-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   stand   │  │  report   │  │   │
//! │  │   │ MenuItem  │  │   Money   │  │ Lemonade- │  │  Profit-  │  │   │
//! │  │   │DailySales │  │  (cents)  │  │   Stand   │  │  Report   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO ENVIRONMENT • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `MenuItem` and `DailySales`
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`stand`] - `LemonadeStand`, the ledger itself
//! - [`report`] - per-item profit breakdown
//! - [`snapshot`] - serializable image of a stand
//! - [`shared`] - `Arc<Mutex<_>>` handle for multi-threaded callers
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use standbook_core::{LemonadeStand, MenuItem, Money};
//!
//! let mut stand = LemonadeStand::new("Zesty Cactina");
//! stand.add_menu_item(MenuItem::new("Lemon Tacos", Money::from_cents(612), Money::from_cents(857)));
//!
//! stand.enter_sales_for_today([("Lemon Tacos", 122)]).unwrap();
//! stand.enter_sales_for_today([("Lemon Tacos", 91)]).unwrap();
//!
//! // 213 units × $2.45
//! assert_eq!(stand.total_profit_for_menu_item("Lemon Tacos").unwrap().cents(), 52185);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod report;
pub mod shared;
pub mod snapshot;
pub mod stand;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use report::{ItemProfit, ProfitReport};
pub use shared::SharedStand;
pub use snapshot::StandSnapshot;
pub use stand::LemonadeStand;
pub use types::{DailySales, MenuItem};
