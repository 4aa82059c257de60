//! Value Objects for the storefront

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Product identifier value object
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

impl ProductId {
    pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
        let value = value.into().trim().to_string();
        if value.is_empty() { return Err(IdError::Empty); }
        Ok(Self(value))
    }
    pub fn from_seq(seq: u64) -> Self { Self(seq.to_string()) }
    pub fn as_str(&self) -> &str { &self.0 }
}

impl TryFrom<String> for ProductId {
    type Error = IdError;
    fn try_from(value: String) -> Result<Self, Self::Error> { Self::new(value) }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self { id.0 }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

/// Notification identifier value object
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NotificationId(String);

impl NotificationId {
    pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
        let value = value.into().trim().to_string();
        if value.is_empty() { return Err(IdError::Empty); }
        Ok(Self(value))
    }
    pub fn generate() -> Self { Self(uuid::Uuid::now_v7().to_string()) }
    pub fn from_seq(seq: u64) -> Self { Self(seq.to_string()) }
    pub fn as_str(&self) -> &str { &self.0 }
}

impl TryFrom<String> for NotificationId {
    type Error = IdError;
    fn try_from(value: String) -> Result<Self, Self::Error> { Self::new(value) }
}

impl From<NotificationId> for String {
    fn from(id: NotificationId) -> Self { id.0 }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

#[derive(Debug, Clone, PartialEq, Eq)] pub enum IdError { Empty }
impl std::error::Error for IdError {}
impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Identifier empty") }
}

/// Money value object
///
/// Prices are kept as decimals so that cart totals are exact sums of
/// `price * quantity`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self { Self(amount) }
    pub fn from_major(units: i64) -> Self { Self(Decimal::from(units)) }
    pub fn zero() -> Self { Self::ZERO }
    pub fn amount(&self) -> Decimal { self.0 }
    pub fn is_negative(&self) -> bool { self.0.is_sign_negative() && !self.0.is_zero() }

    /// `None` when the product does not fit a decimal.
    pub fn checked_multiply(&self, qty: Quantity) -> Option<Money> {
        self.0.checked_mul(Decimal::from(qty.value())).map(Money)
    }
    pub fn checked_add(&self, other: Money) -> Option<Money> { self.0.checked_add(other.0).map(Money) }
    pub fn saturating_add(&self, other: Money) -> Money { Money(self.0.saturating_add(other.0)) }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{:.2}", self.0) }
}

/// Quantity value object
///
/// Between one and `u32::MAX` units; a line can never hold zero units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    pub const ONE: Quantity = Quantity(1);

    pub fn new(value: i64) -> Result<Self, QuantityError> {
        if value <= 0 { return Err(QuantityError::NotPositive); }
        u32::try_from(value).map(Self).map_err(|_| QuantityError::TooLarge)
    }
    pub fn value(&self) -> u32 { self.0 }
    pub fn checked_add(&self, other: Quantity) -> Option<Self> { self.0.checked_add(other.0).map(Self) }
}

impl TryFrom<u32> for Quantity {
    type Error = QuantityError;
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Quantity::new(i64::from(value))
    }
}

impl From<Quantity> for u32 {
    fn from(q: Quantity) -> Self { q.0 }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)] pub enum QuantityError { NotPositive, TooLarge }
impl std::error::Error for QuantityError {}
impl fmt::Display for QuantityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantityError::NotPositive => write!(f, "Quantity must be positive"),
            QuantityError::TooLarge => write!(f, "Quantity exceeds {}", u32::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn test_product_id() {
        let id = ProductId::new("  42 ").unwrap();
        assert_eq!(id.as_str(), "42");
        assert_eq!(ProductId::new("   "), Err(IdError::Empty));
    }
    #[test]
    fn test_money_multiply_and_add() {
        let price = Money::new(Decimal::new(4550, 2));
        let line = price.checked_multiply(Quantity::new(3).unwrap()).unwrap();
        assert_eq!(line.amount(), Decimal::new(13650, 2));
        let total = line.checked_add(Money::from_major(10)).unwrap();
        assert_eq!(total.to_string(), "146.50");
    }
    #[test]
    fn test_money_overflow_is_reported() {
        let huge = Money::new(Decimal::MAX);
        assert_eq!(huge.checked_multiply(Quantity::new(2).unwrap()), None);
        assert_eq!(huge.checked_add(Money::from_major(1)), None);
        assert_eq!(huge.saturating_add(Money::from_major(1)), huge);
        let big_price = Money::new(Decimal::from_i128_with_scale(100_000_000_000_000_000_000, 0));
        assert_eq!(big_price.checked_multiply(Quantity::new(1_000_000_000).unwrap()), None);
    }
    #[test]
    fn test_quantity_rejects_non_positive() {
        assert_eq!(Quantity::new(0), Err(QuantityError::NotPositive));
        assert_eq!(Quantity::new(-3), Err(QuantityError::NotPositive));
        assert_eq!(Quantity::new(2).map(|q| q.value()), Ok(2));
        assert!(serde_json::from_str::<Quantity>("0").is_err());
    }
    #[test]
    fn test_quantity_rejects_counts_above_u32() {
        assert_eq!(Quantity::new(5_000_000_000), Err(QuantityError::TooLarge));
        assert_eq!(Quantity::new(i64::from(u32::MAX)).map(|q| q.value()), Ok(u32::MAX));
    }
    #[test]
    fn test_quantity_checked_add() {
        let big = Quantity::new(i64::from(u32::MAX)).unwrap();
        assert_eq!(big.checked_add(Quantity::ONE), None);
        assert_eq!(Quantity::ONE.checked_add(Quantity::ONE).map(|q| q.value()), Some(2));
    }
}
