//! # Shared Stand
//!
//! Thread-safe handle around a [`LemonadeStand`].
//!
//! ## Thread Safety
//! Uses `Arc<Mutex<LemonadeStand>>`:
//! - `Arc`: shared ownership across threads
//! - `Mutex`: one lock guards menu AND sales record together, so the
//!   validate-then-append step of `enter_sales_for_today` runs under a single
//!   acquisition and can never interleave with another menu change
//!
//! Every stand operation is short, so a plain Mutex rather than an RwLock.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::stand::LemonadeStand;
use crate::types::MenuItem;

/// Cloneable, thread-safe handle to one stand.
#[derive(Debug, Clone)]
pub struct SharedStand {
    stand: Arc<Mutex<LemonadeStand>>,
}

impl SharedStand {
    pub fn new(stand: LemonadeStand) -> Self {
        SharedStand {
            stand: Arc::new(Mutex::new(stand)),
        }
    }

    fn lock(&self) -> CoreResult<MutexGuard<'_, LemonadeStand>> {
        self.stand.lock().map_err(|_| CoreError::LockPoisoned)
    }

    /// Executes a function with read access to the stand.
    ///
    /// ## Usage
    /// ```rust
    /// use standbook_core::{LemonadeStand, SharedStand};
    ///
    /// let shared = SharedStand::new(LemonadeStand::new("CyberLemon"));
    /// let day = shared.with_stand(|stand| stand.current_day()).unwrap();
    /// assert_eq!(day, 0);
    /// ```
    pub fn with_stand<F, R>(&self, f: F) -> CoreResult<R>
    where
        F: FnOnce(&LemonadeStand) -> R,
    {
        let stand = self.lock()?;
        Ok(f(&stand))
    }

    /// Executes a function with write access to the stand.
    pub fn with_stand_mut<F, R>(&self, f: F) -> CoreResult<R>
    where
        F: FnOnce(&mut LemonadeStand) -> R,
    {
        let mut stand = self.lock()?;
        Ok(f(&mut stand))
    }

    pub fn add_menu_item(&self, item: MenuItem) -> CoreResult<()> {
        self.with_stand_mut(|stand| stand.add_menu_item(item))
    }

    /// See [`LemonadeStand::enter_sales_for_today`].
    pub fn enter_sales_for_today<I, K>(&self, sales: I) -> CoreResult<usize>
    where
        I: IntoIterator<Item = (K, u64)>,
        K: Into<String>,
    {
        self.lock()?.enter_sales_for_today(sales)
    }

    pub fn total_profit_for_stand(&self) -> CoreResult<Money> {
        self.with_stand(LemonadeStand::total_profit_for_stand)
    }

    /// Clones the stand out from under the lock.
    pub fn to_stand(&self) -> CoreResult<LemonadeStand> {
        self.with_stand(LemonadeStand::clone)
    }
}

impl From<LemonadeStand> for SharedStand {
    fn from(stand: LemonadeStand) -> Self {
        SharedStand::new(stand)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn slushie_stand() -> SharedStand {
        let mut stand = LemonadeStand::new("Frozen Lemon");
        stand.add_menu_item(MenuItem::new(
            "Lemon Slushie",
            Money::from_cents(200),
            Money::from_cents(800),
        ));
        SharedStand::new(stand)
    }

    #[test]
    fn test_concurrent_submissions_get_distinct_days() {
        let shared = slushie_stand();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    (0..25)
                        .map(|_| shared.enter_sales_for_today([("Lemon Slushie", 1)]).unwrap())
                        .collect::<Vec<usize>>()
                })
            })
            .collect();

        let mut days: Vec<usize> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        days.sort_unstable();

        assert_eq!(days, (0..200).collect::<Vec<_>>());
        let stand = shared.to_stand().unwrap();
        assert_eq!(stand.current_day(), 200);
        for (index, record) in stand.sales_record().iter().enumerate() {
            assert_eq!(record.day(), index);
        }
        assert_eq!(shared.total_profit_for_stand(), Ok(Money::from_cents(200 * 600)));
    }

    #[test]
    fn test_rejected_submission_through_handle() {
        let shared = slushie_stand();
        assert!(matches!(
            shared.enter_sales_for_today([("Water", 1)]),
            Err(CoreError::InvalidSalesItem { .. })
        ));
        assert_eq!(shared.with_stand(|s| s.current_day()), Ok(0));
    }

    #[test]
    fn test_menu_added_through_handle_is_visible_to_clones() {
        let shared = slushie_stand();
        let other = shared.clone();
        other
            .add_menu_item(MenuItem::new("Ice", Money::from_cents(5), Money::from_cents(25)))
            .unwrap();

        assert_eq!(shared.with_stand(|s| s.menu().len()), Ok(2));
        assert_eq!(shared.enter_sales_for_today([("Ice", 2)]), Ok(0));
    }

    #[test]
    fn test_poisoned_lock_is_reported() {
        let shared = slushie_stand();
        let poisoner = shared.clone();

        let result = thread::spawn(move || {
            let _ = poisoner.with_stand_mut(|_| panic!("boom"));
        })
        .join();
        assert!(result.is_err());

        assert_eq!(
            shared.add_menu_item(MenuItem::new("Ice", Money::zero(), Money::zero())),
            Err(CoreError::LockPoisoned)
        );
        assert_eq!(shared.with_stand(|s| s.current_day()), Err(CoreError::LockPoisoned));
    }
}
