//! Unit price type.
//!
//! Prices are read as arbitrary-precision decimals and always rendered with
//! exactly two decimal places.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A product's unit price.
///
/// Wraps `rust_decimal::Decimal` so prices never pass through binary floating
/// point. The stored value keeps the precision it was read with; only the
/// rendered form is fixed to [`Price::SCALE`] places.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use inventory_reconciler::Price;
///
/// let price = Price::from_str("12.5").unwrap();
/// assert_eq!(price.to_string(), "12.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Price(Decimal);

impl Price {
    /// Number of decimal places used when rendering.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Price(Decimal::ZERO);

    /// Returns the underlying decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    fn rounded(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl FromStr for Price {
    type Err = rust_decimal::Error;

    /// Accepts plain (`4.25`) and scientific (`4.25e1`) notation.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let decimal = Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed))?;
        Ok(Price(decimal))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.rounded())
    }
}

impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_to_two_places() {
        assert_eq!(Price::from_str("5").unwrap().to_string(), "5.00");
        assert_eq!(Price::from_str("3.5").unwrap().to_string(), "3.50");
        assert_eq!(Price::from_str("19.99").unwrap().to_string(), "19.99");
        assert_eq!(Price::from_str("  0.1  ").unwrap().to_string(), "0.10");
    }

    #[test]
    fn test_display_rounds_extra_precision() {
        assert_eq!(Price::from_str("2.499").unwrap().to_string(), "2.50");
        assert_eq!(Price::from_str("2.501").unwrap().to_string(), "2.50");
        assert_eq!(Price::from_str("7.1234").unwrap().to_string(), "7.12");
    }

    #[test]
    fn test_value_keeps_input_precision() {
        let price = Price::from_str("7.1234").unwrap();
        assert_eq!(price.value(), Decimal::new(71234, 4));
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(Price::from_str("1.5e2").unwrap().to_string(), "150.00");
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(Price::from_str("abc").is_err());
        assert!(Price::from_str("").is_err());
        assert!(Price::from_str("12,50").is_err());
    }

    #[test]
    fn test_zero_constant() {
        assert_eq!(Price::ZERO.to_string(), "0.00");
    }
}
