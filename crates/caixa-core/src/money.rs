//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Repeated additions at a till drift the same way:                       │
//! │    19 × R$ 0,10 can come out as R$ 1,8999999...                         │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    Every amount is an i64 count of centavos. Sums are exact, always.    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use caixa_core::money::Money;
//!
//! // Create from centavos (preferred)
//! let price = Money::from_centavos(1099); // R$ 10,99
//!
//! // Arithmetic operations
//! let doubled = price * 2;                       // R$ 21,98
//! let total = price + Money::from_centavos(500); // R$ 15,99
//! assert_eq!(total.centavos(), 1599);
//!
//! // NEVER do this:
//! // let bad = Money::from_float(10.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (centavos).
///
/// ## Design Decisions
/// - **i64 (signed)**: shortfalls and corrections are negative differences
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support; serializes as a plain integer
///
/// Every monetary value in the system flows through this type: unit prices,
/// line totals, the grand total, tendered cash, and change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use caixa_core::money::Money;
    ///
    /// let price = Money::from_centavos(1099); // R$ 10,99
    /// assert_eq!(price.centavos(), 1099);
    /// ```
    #[inline]
    pub const fn from_centavos(centavos: i64) -> Self {
        Money(centavos)
    }

    /// Creates a Money value from major and minor units (reais and centavos).
    ///
    /// ## Example
    /// ```rust
    /// use caixa_core::money::Money;
    ///
    /// let price = Money::from_major_minor(10, 99); // R$ 10,99
    /// assert_eq!(price.centavos(), 1099);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -R$ 5,50, not -R$ 4,50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn centavos(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (reais) portion.
    #[inline]
    pub const fn reais(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (centavos) portion, always 0-99.
    #[inline]
    pub const fn centavos_part(&self) -> i64 {
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use caixa_core::money::Money;
    ///
    /// let unit_price = Money::from_centavos(350); // R$ 3,50
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.centavos(), 1050); // R$ 10,50
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Groups the integer reais part with dots: 1234567 → "1.234.567".
fn group_reais(reais: i64) -> String {
    let digits = reais.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && i % 3 == offset % 3 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

/// Display implementation renders Brazilian-real currency text.
///
/// Dot groups the thousands, comma separates the centavos, sign leads:
///
/// ```rust
/// use caixa_core::money::Money;
///
/// assert_eq!(Money::from_centavos(1350).to_string(), "R$ 13,50");
/// assert_eq!(Money::from_centavos(123456).to_string(), "R$ 1.234,56");
/// assert_eq!(Money::from_centavos(-550).to_string(), "-R$ 5,50");
/// ```
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}R$ {},{:02}",
            sign,
            group_reais(self.reais().abs()),
            self.centavos_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Error parsing an operator-typed amount into [`Money`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseMoneyError {
    /// The input was empty (or only an `R$` prefix).
    #[error("amount is empty")]
    Empty,

    /// The input contained something other than digits and one separator.
    #[error("amount must be digits with an optional decimal separator")]
    InvalidDigit,

    /// More than two digits after the decimal separator.
    #[error("amount cannot have more than two decimal places")]
    TooManyDecimals,
}

/// Parses amounts the way an operator types them into the tendered field.
///
/// Accepts `"20"`, `"13,50"`, `"13.50"`, `"0,5"` (= 50 centavos) and an
/// optional leading `R$`. Thousands separators are not accepted; the input
/// is a raw field value, not formatted output.
///
/// ```rust
/// use caixa_core::money::Money;
///
/// let tendered: Money = "13,50".parse().unwrap();
/// assert_eq!(tendered.centavos(), 1350);
/// assert!("R$ 20".parse::<Money>().is_ok());
/// assert!("abc".parse::<Money>().is_err());
/// ```
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix("R$").map(str::trim_start).unwrap_or(s);
        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if s.is_empty() {
            return Err(ParseMoneyError::Empty);
        }

        let (int_part, frac_part) = match s.find([',', '.']) {
            Some(i) => (&s[..i], &s[i + 1..]),
            None => (s, ""),
        };
        if frac_part.contains([',', '.']) {
            return Err(ParseMoneyError::InvalidDigit);
        }
        if frac_part.len() > 2 {
            return Err(ParseMoneyError::TooManyDecimals);
        }
        if !int_part.chars().all(|c| c.is_ascii_digit())
            || !frac_part.chars().all(|c| c.is_ascii_digit())
        {
            return Err(ParseMoneyError::InvalidDigit);
        }
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(ParseMoneyError::Empty);
        }

        // "13" → 1300; "13,5" → 1350; "13,50" → 1350
        let reais: i64 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| ParseMoneyError::InvalidDigit)?
        };
        let mut centavos: i64 = frac_part.parse().unwrap_or(0);
        if frac_part.len() == 1 {
            centavos *= 10;
        }

        let total = reais
            .checked_mul(100)
            .and_then(|r| r.checked_add(centavos))
            .ok_or(ParseMoneyError::InvalidDigit)?;
        Ok(if negative { Money(-total) } else { Money(total) })
    }
}

// =============================================================================
// Arithmetic
// =============================================================================

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
