//! Fuel price type.

use std::fmt;

/// Error returned when a price is not a positive amount.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid fuel price {0}: must be a positive amount below 100")]
pub struct InvalidPrice(pub f64);

/// Retail fuel price per gallon, in USD.
///
/// Stored as thousandths of a dollar so the catalog's 3-decimal precision
/// is exact. Always positive and below $100; the ceiling catches mistyped
/// catalog records, which the loader skips.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Price(u32);

impl Price {
    const MAX_MILLS: u32 = 99_999;

    /// Create a price from a dollar amount, rounding to the nearest 1/1000.
    pub fn from_dollars(dollars: f64) -> Result<Self, InvalidPrice> {
        if !dollars.is_finite() {
            return Err(InvalidPrice(dollars));
        }
        let mills = (dollars * 1000.0).round();
        if mills < 1.0 || mills > Self::MAX_MILLS as f64 {
            return Err(InvalidPrice(dollars));
        }
        Ok(Price(mills as u32))
    }

    /// Create a price from thousandths of a dollar.
    pub fn from_mills(mills: u32) -> Result<Self, InvalidPrice> {
        if mills == 0 || mills > Self::MAX_MILLS {
            return Err(InvalidPrice(mills as f64 / 1000.0));
        }
        Ok(Price(mills))
    }

    /// The price in dollars.
    pub fn dollars(&self) -> f64 {
        self.0 as f64 / 1000.0
    }

    /// The price in thousandths of a dollar.
    pub fn mills(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Price({})", self)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:03}", self.0 / 1000, self.0 % 1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_three_decimals() {
        let p = Price::from_dollars(3.4594).unwrap();
        assert_eq!(p.mills(), 3459);
        assert_eq!(p.dollars(), 3.459);
    }

    #[test]
    fn rejects_non_positive() {
        assert!(Price::from_dollars(0.0).is_err());
        assert!(Price::from_dollars(-1.0).is_err());
        assert!(Price::from_dollars(0.0004).is_err());
        assert!(Price::from_mills(0).is_err());
    }

    #[test]
    fn rejects_absurd_prices() {
        assert!(Price::from_dollars(100.0).is_err());
        assert!(Price::from_dollars(f64::NAN).is_err());
        assert!(Price::from_mills(100_000).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Price::from_mills(3059).unwrap().to_string(), "$3.059");
        assert_eq!(Price::from_mills(12).unwrap().to_string(), "$0.012");
    }

    #[test]
    fn ordering_follows_amount() {
        let cheap = Price::from_dollars(2.999).unwrap();
        let dear = Price::from_dollars(3.001).unwrap();
        assert!(cheap < dear);
    }
}
