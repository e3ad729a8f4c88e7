//! # Snapshots
//!
//! Serialized form of a whole stand: name, menu and sales record.
//!
//! ## Snapshot Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  LemonadeStand ──► StandSnapshot ──► serde_json ──► caller writes file │
//! │                                                                         │
//! │  caller reads file ──► serde_json ──► StandSnapshot                    │
//! │                                            │                            │
//! │                                   TryFrom (re-checks invariants)        │
//! │                                            │                            │
//! │                                            ▼                            │
//! │                                      LemonadeStand                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Restoring checks what `enter_sales_for_today` would have enforced:
//! consecutive day indices, unique menu names, and no recorded sale of an
//! item missing from the menu (items are never removed, so every recorded
//! name must still be listed).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::stand::LemonadeStand;
use crate::types::{DailySales, MenuItem};
use crate::validation::first_unknown_item;

/// Plain-data image of a [`LemonadeStand`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandSnapshot {
    pub name: String,
    #[serde(default)]
    pub menu: Vec<MenuItem>,
    #[serde(default)]
    pub sales_record: Vec<DailySales>,
}

impl From<LemonadeStand> for StandSnapshot {
    fn from(stand: LemonadeStand) -> Self {
        StandSnapshot {
            name: stand.name,
            menu: stand.menu.into_values().collect(),
            sales_record: stand.sales_record,
        }
    }
}

impl TryFrom<StandSnapshot> for LemonadeStand {
    type Error = CoreError;

    fn try_from(snapshot: StandSnapshot) -> CoreResult<Self> {
        let mut menu = BTreeMap::new();
        for item in snapshot.menu {
            let name = item.name().to_string();
            if menu.insert(name.clone(), item).is_some() {
                return Err(CoreError::invalid_snapshot(format!(
                    "menu lists '{}' more than once",
                    name
                )));
            }
        }

        for (index, record) in snapshot.sales_record.iter().enumerate() {
            if record.day() != index {
                return Err(CoreError::invalid_snapshot(format!(
                    "sales record entry {} is labelled day {}",
                    index,
                    record.day()
                )));
            }
            if let Some(unknown) = first_unknown_item(&menu, record.quantities()) {
                return Err(CoreError::invalid_snapshot(format!(
                    "day {} records sales of '{}', which is not on the menu",
                    index, unknown
                )));
            }
        }

        debug!(
            stand = %snapshot.name,
            menu_size = menu.len(),
            days = snapshot.sales_record.len(),
            "Restored stand from snapshot"
        );

        Ok(LemonadeStand {
            name: snapshot.name,
            menu,
            sales_record: snapshot.sales_record,
        })
    }
}

impl LemonadeStand {
    /// Copies the stand into its snapshot form.
    pub fn snapshot(&self) -> StandSnapshot {
        StandSnapshot::from(self.clone())
    }

    /// Pretty-printed JSON snapshot.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    /// Rebuilds a stand from [`LemonadeStand::to_json`] output.
    ///
    /// ## Errors
    /// - [`CoreError::Serialization`] for malformed JSON
    /// - [`CoreError::InvalidSnapshot`] when the data breaks a ledger invariant
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let snapshot: StandSnapshot = serde_json::from_str(json)?;
        LemonadeStand::try_from(snapshot)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
