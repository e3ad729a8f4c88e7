//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Margin of a $4.99 item bought at $1.63, sold 60 times:                │
//! │    (4.99 - 1.63) * 60 = 201.60000000000002  ❌ in f64                   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    (499 - 163) * 60 = 20160 cents = $201.60 exactly                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use standbook_core::money::Money;
//!
//! let cost = Money::from_cents(612);            // $6.12
//! let price = Money::parse("8.57").unwrap();    // $8.57
//!
//! let margin = price - cost;                    // $2.45
//! assert_eq!(margin.multiply_quantity(213).cents(), 52185);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

use crate::error::ValidationError;
use crate::validation::ValidationResult;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: margins and profits may be negative (loss-making items)
/// - **Single field tuple struct**: serializes as a bare integer
/// - **No float constructor**: amounts enter as cents or as decimal strings
/// - **Saturating arithmetic**: sums and products clamp at the i64 bounds
///
/// ## Where Money is Used
/// ```text
/// MenuItem.wholesale_cost ──┐
///                           ├──► margin() ──► × units sold ──► item profit
/// MenuItem.selling_price ───┘                                      │
///                                                                  ▼
///                                              Σ over menu ──► stand profit
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use standbook_core::money::Money;
    ///
    /// let price = Money::from_cents(799); // $7.99
    /// assert_eq!(price.cents(), 799);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a decimal amount such as `"7.99"`, `"-0.5"`, `"$12"`.
    ///
    /// ## Rules
    /// - Optional leading `+` or `-`, then an optional `$`
    /// - At least one whole-unit digit
    /// - At most two fractional digits (`"0.5"` is 50 cents)
    ///
    /// ## Example
    /// ```rust
    /// use standbook_core::money::Money;
    ///
    /// assert_eq!(Money::parse("0.75").unwrap().cents(), 75);
    /// assert_eq!(Money::parse("-$5.5").unwrap().cents(), -550);
    /// assert!(Money::parse("1.999").is_err());
    /// ```
    pub fn parse(input: &str) -> ValidationResult<Money> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Required {
                field: "amount".to_string(),
            });
        }

        let (negative, unsigned) = match trimmed.as_bytes()[0] {
            b'-' => (true, &trimmed[1..]),
            b'+' => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let unsigned = unsigned.strip_prefix('$').unwrap_or(unsigned);

        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (unsigned, None),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid_amount(input, "expected digits before the decimal point"));
        }

        let minor = match fraction {
            None => 0,
            Some(f) if f.is_empty() || f.len() > 2 => {
                return Err(invalid_amount(input, "expected one or two digits after the decimal point"));
            }
            Some(f) if !f.bytes().all(|b| b.is_ascii_digit()) => {
                return Err(invalid_amount(input, "fractional part must be digits"));
            }
            // "5" means 50 cents, "05" means 5 cents
            Some(f) if f.len() == 1 => i64::from(f.as_bytes()[0] - b'0') * 10,
            Some(f) => i64::from(f.as_bytes()[0] - b'0') * 10 + i64::from(f.as_bytes()[1] - b'0'),
        };

        let cents = whole
            .parse::<i64>()
            .ok()
            .and_then(|major| major.checked_mul(100))
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(|| invalid_amount(input, "amount is too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use standbook_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies money by a unit count.
    ///
    /// Saturates at the i64 bounds instead of wrapping.
    ///
    /// ## Example
    /// ```rust
    /// use standbook_core::money::Money;
    ///
    /// let margin = Money::from_cents(245); // $2.45
    /// assert_eq!(margin.multiply_quantity(213).cents(), 52185);
    ///
    /// let loss = Money::from_cents(-30);
    /// assert_eq!(loss.multiply_quantity(10).cents(), -300);
    /// ```
    pub fn multiply_quantity(&self, qty: u64) -> Self {
        let product = self.0 as i128 * qty as i128;
        Money(product.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }
}

fn invalid_amount(input: &str, reason: &str) -> ValidationError {
    ValidationError::InvalidFormat {
        field: "amount".to_string(),
        reason: format!("'{}': {}", input.trim(), reason),
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Human-readable form: `$12.34`, `-$5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
