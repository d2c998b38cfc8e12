use std::any::type_name;
use std::fmt;

use super::{Numeric, NumericKind};
use crate::error::Result;

/// Capability a user-defined number type implements to take part in dispatch.
///
/// Every method is total; a type that needs to signal failure (for example on
/// division by zero) encodes it in its own values, the way IEEE floats use
/// infinities and NaN.
///
/// Implementors get [`Numeric`] for free, so they work with every dispatch
/// function and with [`Vector2`](crate::vector::Vector2) directly.
pub trait ValuedNumber: Clone + fmt::Debug + PartialEq {
    /// Returns `-self`.
    #[must_use]
    fn negate(&self) -> Self;

    /// Returns `self + rhs`.
    #[must_use]
    fn add(&self, rhs: &Self) -> Self;

    /// Returns `self - rhs`.
    #[must_use]
    fn sub(&self, rhs: &Self) -> Self;

    /// Returns `self * rhs`.
    #[must_use]
    fn mul(&self, rhs: &Self) -> Self;

    /// Returns `self / rhs`.
    #[must_use]
    fn div(&self, rhs: &Self) -> Self;

    /// Returns the square root of `self`.
    #[must_use]
    fn sqrt(&self) -> Self;

    /// Returns `1 / sqrt(self)`.
    #[must_use]
    fn inv_sqrt(&self) -> Self;

    /// Four-quadrant arctangent of `self / rhs`.
    #[must_use]
    fn atan2(&self, rhs: &Self) -> Self;
}

impl<T: ValuedNumber> Numeric for T {
    fn kind(&self) -> NumericKind {
        NumericKind::Custom(type_name::<T>())
    }

    fn try_negate(&self) -> Result<Self> {
        Ok(ValuedNumber::negate(self))
    }

    fn try_add(&self, rhs: &Self) -> Result<Self> {
        Ok(ValuedNumber::add(self, rhs))
    }

    fn try_sub(&self, rhs: &Self) -> Result<Self> {
        Ok(ValuedNumber::sub(self, rhs))
    }

    fn try_mul(&self, rhs: &Self) -> Result<Self> {
        Ok(ValuedNumber::mul(self, rhs))
    }

    fn try_div(&self, rhs: &Self) -> Result<Self> {
        Ok(ValuedNumber::div(self, rhs))
    }

    fn try_atan2(&self, rhs: &Self) -> Result<Self> {
        Ok(ValuedNumber::atan2(self, rhs))
    }

    fn try_sqrt(&self) -> Result<Self> {
        Ok(ValuedNumber::sqrt(self))
    }

    fn try_inv_sqrt(&self) -> Result<Self> {
        Ok(ValuedNumber::inv_sqrt(self))
    }
}

/// Decimal fixed-point number with three fractional digits, used to exercise
/// the custom extension point in tests.
#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Milli(pub i64);

#[cfg(test)]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
impl Milli {
    const SCALE: i64 = 1000;

    pub(crate) fn from_int(value: i64) -> Self {
        Self(value * Self::SCALE)
    }

    fn to_f64(self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }

    fn from_f64(value: f64) -> Self {
        Self((value * Self::SCALE as f64).round() as i64)
    }
}

#[cfg(test)]
impl ValuedNumber for Milli {
    fn negate(&self) -> Self {
        Self(-self.0)
    }

    fn add(&self, rhs: &Self) -> Self {
        Self(self.0 + rhs.0)
    }

    fn sub(&self, rhs: &Self) -> Self {
        Self(self.0 - rhs.0)
    }

    fn mul(&self, rhs: &Self) -> Self {
        Self(self.0 * rhs.0 / Self::SCALE)
    }

    fn div(&self, rhs: &Self) -> Self {
        if rhs.0 == 0 {
            return Self(if self.0 < 0 { i64::MIN } else { i64::MAX });
        }
        Self(self.0 * Self::SCALE / rhs.0)
    }

    fn sqrt(&self) -> Self {
        Self::from_f64(self.to_f64().sqrt())
    }

    fn inv_sqrt(&self) -> Self {
        Self::from_f64(1.0 / self.to_f64().sqrt())
    }

    fn atan2(&self, rhs: &Self) -> Self {
        Self::from_f64(self.to_f64().atan2(rhs.to_f64()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::numeric::{self, Number};

    #[test]
    fn custom_kind_names_the_type() {
        assert!(matches!(
            Milli(1).kind(),
            NumericKind::Custom(name) if name.ends_with("Milli")
        ));
    }

    #[test]
    fn check_type_accepts_custom_values() {
        let kind = numeric::check_type(&Milli(1)).unwrap();
        assert_eq!(kind, Milli(1).kind());
        assert!(matches!(kind, NumericKind::Custom(_)));
        assert_eq!(
            numeric::check_any_type(&Number::custom(Milli(1))).unwrap(),
            kind
        );
    }

    #[test]
    fn dispatch_delegates_to_capability() {
        let a = Milli::from_int(6);
        let b = Milli(1500);
        assert_eq!(numeric::add(&a, &b).unwrap(), Milli(7500));
        assert_eq!(numeric::sub(&a, &b).unwrap(), Milli(4500));
        assert_eq!(numeric::mul(&a, &b).unwrap(), Milli::from_int(9));
        assert_eq!(numeric::div(&a, &b).unwrap(), Milli::from_int(4));
        assert_eq!(numeric::negate(&a).unwrap(), Milli::from_int(-6));
        assert_eq!(numeric::sqrt(&Milli::from_int(9)).unwrap(), Milli::from_int(3));
        assert_eq!(numeric::inv_sqrt(&Milli::from_int(4)).unwrap(), Milli(500));
        assert_eq!(
            numeric::atan2(&Milli::from_int(1), &Milli::from_int(0)).unwrap(),
            Milli(1571)
        );
    }

    #[test]
    fn custom_commutativity_and_double_negation() {
        let a = Milli(-2750);
        let b = Milli(125);
        assert_eq!(numeric::add(&a, &b).unwrap(), numeric::add(&b, &a).unwrap());
        assert_eq!(
            numeric::sub(&a, &b).unwrap(),
            numeric::negate(&numeric::sub(&b, &a).unwrap()).unwrap()
        );
        assert_eq!(numeric::negate(&numeric::negate(&a).unwrap()).unwrap(), a);
    }
}
