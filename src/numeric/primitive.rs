//! Native implementations of [`Numeric`] for the built-in representations.
//!
//! `i32` and `f32` evaluate `sqrt`, `inv_sqrt` and `atan2` in double precision
//! and narrow the result back (truncating for `i32`). Integer arithmetic wraps
//! on overflow like a fixed-width machine integer.

use super::{Numeric, NumericKind};
use crate::error::{DispatchError, Result};

/// Narrows a double-precision result to `i32`, truncating toward zero.
/// NaN maps to 0 and out-of-range values saturate.
#[allow(clippy::cast_possible_truncation)]
fn truncate_to_i32(value: f64) -> i32 {
    value as i32
}

#[allow(clippy::cast_possible_truncation)]
fn narrow_to_f32(value: f64) -> f32 {
    value as f32
}

impl Numeric for i32 {
    fn kind(&self) -> NumericKind {
        NumericKind::Integer
    }

    fn try_negate(&self) -> Result<Self> {
        Ok(self.wrapping_neg())
    }

    fn try_add(&self, rhs: &Self) -> Result<Self> {
        Ok(self.wrapping_add(*rhs))
    }

    fn try_sub(&self, rhs: &Self) -> Result<Self> {
        Ok(self.wrapping_sub(*rhs))
    }

    fn try_mul(&self, rhs: &Self) -> Result<Self> {
        Ok(self.wrapping_mul(*rhs))
    }

    fn try_div(&self, rhs: &Self) -> Result<Self> {
        if *rhs == 0 {
            return Err(DispatchError::DivisionByZero.into());
        }
        Ok(self.wrapping_div(*rhs))
    }

    fn try_atan2(&self, rhs: &Self) -> Result<Self> {
        Ok(truncate_to_i32(f64::from(*self).atan2(f64::from(*rhs))))
    }

    fn try_sqrt(&self) -> Result<Self> {
        Ok(truncate_to_i32(f64::from(*self).sqrt()))
    }

    fn try_inv_sqrt(&self) -> Result<Self> {
        if *self == 0 {
            return Err(DispatchError::DivisionByZero.into());
        }
        Ok(truncate_to_i32(1.0 / f64::from(*self).sqrt()))
    }
}

// Negation multiplies by -1 so that the sign of zero follows multiplication.
#[allow(clippy::neg_multiply)]
impl Numeric for f32 {
    fn kind(&self) -> NumericKind {
        NumericKind::Float32
    }

    fn try_negate(&self) -> Result<Self> {
        Ok(self * -1.0)
    }

    fn try_add(&self, rhs: &Self) -> Result<Self> {
        Ok(self + rhs)
    }

    fn try_sub(&self, rhs: &Self) -> Result<Self> {
        Ok(self - rhs)
    }

    fn try_mul(&self, rhs: &Self) -> Result<Self> {
        Ok(self * rhs)
    }

    fn try_div(&self, rhs: &Self) -> Result<Self> {
        Ok(self / rhs)
    }

    fn try_atan2(&self, rhs: &Self) -> Result<Self> {
        Ok(narrow_to_f32(f64::from(*self).atan2(f64::from(*rhs))))
    }

    fn try_sqrt(&self) -> Result<Self> {
        Ok(narrow_to_f32(f64::from(*self).sqrt()))
    }

    fn try_inv_sqrt(&self) -> Result<Self> {
        Ok(narrow_to_f32(1.0 / f64::from(*self).sqrt()))
    }
}

#[allow(clippy::neg_multiply)]
impl Numeric for f64 {
    fn kind(&self) -> NumericKind {
        NumericKind::Float64
    }

    fn try_negate(&self) -> Result<Self> {
        Ok(self * -1.0)
    }

    fn try_add(&self, rhs: &Self) -> Result<Self> {
        Ok(self + rhs)
    }

    fn try_sub(&self, rhs: &Self) -> Result<Self> {
        Ok(self - rhs)
    }

    fn try_mul(&self, rhs: &Self) -> Result<Self> {
        Ok(self * rhs)
    }

    fn try_div(&self, rhs: &Self) -> Result<Self> {
        Ok(self / rhs)
    }

    fn try_atan2(&self, rhs: &Self) -> Result<Self> {
        Ok(self.atan2(*rhs))
    }

    fn try_sqrt(&self) -> Result<Self> {
        Ok(self.sqrt())
    }

    fn try_inv_sqrt(&self) -> Result<Self> {
        Ok(1.0 / self.sqrt())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::NumeralError;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn integer_division_truncates_toward_zero() {
        assert_eq!(7_i32.try_div(&2).unwrap(), 3);
        assert_eq!((-7_i32).try_div(&2).unwrap(), -3);
        assert_eq!(i32::MIN.try_div(&-1).unwrap(), i32::MIN);
    }

    #[test]
    fn integer_arithmetic_wraps() {
        assert_eq!(i32::MAX.try_add(&1).unwrap(), i32::MIN);
        assert_eq!(i32::MIN.try_negate().unwrap(), i32::MIN);
    }

    #[test]
    fn integer_transcendentals_truncate() {
        assert_eq!(10_i32.try_sqrt().unwrap(), 3);
        assert_eq!((-4_i32).try_sqrt().unwrap(), 0);
        assert_eq!(1_i32.try_atan2(&-1).unwrap(), 2); // 3π/4 ≈ 2.356
        assert_eq!(4_i32.try_inv_sqrt().unwrap(), 0); // 0.5
        assert_eq!(1_i32.try_inv_sqrt().unwrap(), 1);
    }

    #[test]
    fn integer_inv_sqrt_of_zero_fails() {
        assert_eq!(
            0_i32.try_inv_sqrt().unwrap_err(),
            NumeralError::Dispatch(DispatchError::DivisionByZero)
        );
    }

    #[test]
    fn float32_goes_through_double_precision() {
        let expected = narrow_to_f32(2.0_f64.sqrt());
        assert_eq!(2.0_f32.try_sqrt().unwrap(), expected);
        assert_relative_eq!(1.0_f32.try_atan2(&0.0).unwrap(), std::f32::consts::FRAC_PI_2);
        assert_relative_eq!(4.0_f32.try_inv_sqrt().unwrap(), 0.5);
    }

    #[test]
    fn float_inv_sqrt_of_zero_is_infinite() {
        assert_eq!(0.0_f64.try_inv_sqrt().unwrap(), f64::INFINITY);
        assert_eq!(0.0_f32.try_inv_sqrt().unwrap(), f32::INFINITY);
    }

    #[test]
    fn float64_atan2_is_direct() {
        assert_eq!(0.0_f64.try_atan2(&-1.0).unwrap(), PI);
        assert_eq!(0.0_f64.try_atan2(&1.0).unwrap(), 0.0);
    }
}
