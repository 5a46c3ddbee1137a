//! Price type for monetary values.
//!
//! Stored as an integer number of fen to avoid floating-point drift when
//! summing cart lines. The backend sends prices either as JSON numbers or as
//! decimal strings (`"159.00"`); both decode to the same value.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// An amount in yuan, held as fen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price {
    fen: i64,
}

impl Price {
    pub const ZERO: Price = Price { fen: 0 };

    /// Create a price from fen.
    pub fn from_fen(fen: i64) -> Self {
        Self { fen }
    }

    /// Create a price from a decimal yuan amount.
    ///
    /// ```
    /// use mart_commerce::Price;
    /// assert_eq!(Price::from_yuan(49.99).fen(), 4999);
    /// ```
    pub fn from_yuan(yuan: f64) -> Self {
        Self {
            fen: (yuan * 100.0).round() as i64,
        }
    }

    /// Parse a decimal string such as `"159.00"`.
    pub fn parse(s: &str) -> Option<Self> {
        s.trim().parse::<f64>().ok().filter(|v| v.is_finite()).map(Self::from_yuan)
    }

    pub fn fen(&self) -> i64 {
        self.fen
    }

    pub fn to_yuan(&self) -> f64 {
        self.fen as f64 / 100.0
    }

    pub fn is_zero(&self) -> bool {
        self.fen == 0
    }

    /// Multiply by a quantity, saturating on overflow.
    pub fn times(&self, quantity: i64) -> Price {
        Price::from_fen(self.fen.saturating_mul(quantity))
    }

    /// Format without currency symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let sign = if self.fen < 0 { "-" } else { "" };
        let abs = self.fen.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, other: Price) -> Price {
        Price::from_fen(self.fen.saturating_add(other.fen))
    }
}

impl Mul<i64> for Price {
    type Output = Price;

    fn mul(self, quantity: i64) -> Price {
        self.times(quantity)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, |acc, p| acc + p)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\u{00a5}{}", self.display_amount())
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_yuan())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PriceVisitor;

        impl Visitor<'_> for PriceVisitor {
            type Value = Price;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a price as number or decimal string")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Price, E> {
                Ok(Price::from_yuan(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Price, E> {
                Ok(Price::from_fen(v.saturating_mul(100)))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Price, E> {
                let fen = i64::try_from(v).unwrap_or(i64::MAX).saturating_mul(100);
                Ok(Price::from_fen(fen))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Price, E> {
                Price::parse(v).ok_or_else(|| E::custom(format!("invalid price: {:?}", v)))
            }
        }

        deserializer.deserialize_any(PriceVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_from_yuan() {
        assert_eq!(Price::from_yuan(49.99).fen(), 4999);
        assert_eq!(Price::from_yuan(0.1 + 0.2).fen(), 30);
    }

    #[test]
    fn test_price_display() {
        assert_eq!(Price::from_fen(4999).to_string(), "\u{00a5}49.99");
        assert_eq!(Price::from_fen(5).display_amount(), "0.05");
        assert_eq!(Price::from_fen(-150).display_amount(), "-1.50");
    }

    #[test]
    fn test_price_arithmetic() {
        let unit = Price::from_fen(1999);
        assert_eq!((unit * 3).fen(), 5997);
        let total: Price = vec![unit, Price::from_fen(1)].into_iter().sum();
        assert_eq!(total.fen(), 2000);
    }

    #[test]
    fn test_price_deserialize_number_and_string() {
        let a: Price = serde_json::from_str("159.5").unwrap();
        let b: Price = serde_json::from_str(r#""159.50""#).unwrap();
        let c: Price = serde_json::from_str("12").unwrap();
        assert_eq!(a, b);
        assert_eq!(c.fen(), 1200);
    }

    #[test]
    fn test_price_deserialize_garbage() {
        let result: Result<Price, _> = serde_json::from_str(r#""abc""#);
        assert!(result.is_err());
    }
}
