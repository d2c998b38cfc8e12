//! Numeric dispatch layer.
//!
//! Every scalar operation in the crate goes through the free functions in this
//! module. They check that both operands share a representation and then route
//! to the representation's own implementation of [`Numeric`]:
//!
//! - `i32`, `f32` and `f64` implement it natively (see `primitive`).
//! - Any type implementing [`ValuedNumber`] gets it through a blanket bridge.
//! - [`Number`] carries the representation at runtime, for callers that only
//!   learn the type of a value while running.

mod number;
mod primitive;
mod valued;

use std::any::{type_name, Any};
use std::fmt;

pub use number::{CustomNumber, Number};
pub use valued::ValuedNumber;

#[cfg(test)]
pub(crate) use valued::Milli;

use crate::error::{DispatchError, Result};

/// The representation a numeric value is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    /// 32-bit signed integer.
    Integer,
    /// Single-precision float.
    Float32,
    /// Double-precision float.
    Float64,
    /// A user-defined [`ValuedNumber`], identified by its type name.
    Custom(&'static str),
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => f.write_str("integer"),
            Self::Float32 => f.write_str("float32"),
            Self::Float64 => f.write_str("float64"),
            Self::Custom(name) => write!(f, "custom({name})"),
        }
    }
}

/// A numeric representation the dispatch layer can operate on.
///
/// Results are always of the same type as the operands, so no cast back to
/// the caller's type is ever needed. Implementations assume both operands of a
/// binary method have the same [`NumericKind`]; the free functions of this
/// module check that before calling in.
pub trait Numeric: Clone + fmt::Debug + PartialEq {
    /// Returns the representation of this value.
    fn kind(&self) -> NumericKind;

    /// Arithmetic negation, defined as multiplication by `-1`.
    ///
    /// # Errors
    ///
    /// Returns an error if the operand cannot be negated.
    fn try_negate(&self) -> Result<Self>;

    /// # Errors
    ///
    /// Returns an error if the operands have different representations.
    fn try_add(&self, rhs: &Self) -> Result<Self>;

    /// # Errors
    ///
    /// Returns an error if the operands have different representations.
    fn try_sub(&self, rhs: &Self) -> Result<Self>;

    /// # Errors
    ///
    /// Returns an error if the operands have different representations.
    fn try_mul(&self, rhs: &Self) -> Result<Self>;

    /// # Errors
    ///
    /// Returns an error if the operands have different representations, or on
    /// integer division by zero.
    fn try_div(&self, rhs: &Self) -> Result<Self>;

    /// Four-quadrant arctangent of `self / rhs`.
    ///
    /// # Errors
    ///
    /// Returns an error if the operands have different representations.
    fn try_atan2(&self, rhs: &Self) -> Result<Self>;

    /// # Errors
    ///
    /// Returns an error if the operand has no square root in its representation.
    fn try_sqrt(&self) -> Result<Self>;

    /// Reciprocal square root, `1 / sqrt(self)`.
    ///
    /// # Errors
    ///
    /// Returns an error on integer division by zero.
    fn try_inv_sqrt(&self) -> Result<Self>;
}

/// Checks that `value` belongs to the supported numeric set and returns its
/// representation.
///
/// The set is closed by the [`Numeric`] bound: `i32`, `f32`, `f64`,
/// [`Number`] and every [`ValuedNumber`] pass.
///
/// # Errors
///
/// Never fails for a `Numeric` value; values of unknown type go through
/// [`check_any_type`].
pub fn check_type<N: Numeric>(value: &N) -> Result<NumericKind> {
    Ok(value.kind())
}

/// Runtime form of [`check_type`] for values whose type is erased.
///
/// Accepts `i32`, `f32`, `f64` and [`Number`]. A type is only known to
/// implement [`ValuedNumber`] at compile time, so custom numbers must be
/// wrapped with [`Number::custom`] before they reach this check.
///
/// # Errors
///
/// Returns [`DispatchError::UnsupportedType`] naming the type of `value`
/// otherwise.
pub fn check_any_type<T: Any>(value: &T) -> Result<NumericKind> {
    let any: &dyn Any = value;
    if any.is::<i32>() {
        Ok(NumericKind::Integer)
    } else if any.is::<f32>() {
        Ok(NumericKind::Float32)
    } else if any.is::<f64>() {
        Ok(NumericKind::Float64)
    } else if let Some(number) = any.downcast_ref::<Number>() {
        Ok(number.kind())
    } else {
        Err(DispatchError::UnsupportedType {
            type_name: type_name::<T>(),
        }
        .into())
    }
}

/// Fails with [`DispatchError::TypeMismatch`] unless `a` and `b` share a
/// representation.
///
/// # Errors
///
/// See above.
pub fn check_same_kind<N: Numeric>(a: &N, b: &N) -> Result<NumericKind> {
    let (left, right) = (a.kind(), b.kind());
    if left == right {
        Ok(left)
    } else {
        Err(DispatchError::TypeMismatch { left, right }.into())
    }
}

/// Negates `value` (as `value * -1`, so `negate(0.0)` is `-0.0`).
///
/// # Errors
///
/// Propagates failures of the representation.
pub fn negate<N: Numeric>(value: &N) -> Result<N> {
    value.try_negate()
}

/// # Errors
///
/// Returns [`DispatchError::TypeMismatch`] if the operands differ in representation.
pub fn add<N: Numeric>(a: &N, b: &N) -> Result<N> {
    check_same_kind(a, b)?;
    a.try_add(b)
}

/// # Errors
///
/// Returns [`DispatchError::TypeMismatch`] if the operands differ in representation.
pub fn sub<N: Numeric>(a: &N, b: &N) -> Result<N> {
    check_same_kind(a, b)?;
    a.try_sub(b)
}

/// # Errors
///
/// Returns [`DispatchError::TypeMismatch`] if the operands differ in representation.
pub fn mul<N: Numeric>(a: &N, b: &N) -> Result<N> {
    check_same_kind(a, b)?;
    a.try_mul(b)
}

/// Divides `a` by `b`. Integers truncate toward zero; floats follow IEEE 754.
///
/// # Errors
///
/// Returns [`DispatchError::TypeMismatch`] if the operands differ in
/// representation, or [`DispatchError::DivisionByZero`] for an integer zero
/// divisor.
pub fn div<N: Numeric>(a: &N, b: &N) -> Result<N> {
    check_same_kind(a, b)?;
    a.try_div(b)
}

/// Computes `atan2(a, b)` in the representation of the operands.
///
/// # Errors
///
/// Returns [`DispatchError::TypeMismatch`] if the operands differ in representation.
pub fn atan2<N: Numeric>(a: &N, b: &N) -> Result<N> {
    check_same_kind(a, b)?;
    a.try_atan2(b)
}

/// # Errors
///
/// Propagates failures of the representation.
pub fn sqrt<N: Numeric>(value: &N) -> Result<N> {
    value.try_sqrt()
}

/// Computes `1 / sqrt(value)`.
///
/// # Errors
///
/// Returns [`DispatchError::DivisionByZero`] for an integer zero.
pub fn inv_sqrt<N: Numeric>(value: &N) -> Result<N> {
    value.try_inv_sqrt()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::NumeralError;

    #[test]
    fn check_type_accepts_builtin_kinds() {
        assert_eq!(check_type(&1_i32).unwrap(), NumericKind::Integer);
        assert_eq!(check_type(&1.0_f32).unwrap(), NumericKind::Float32);
        assert_eq!(check_type(&1.0_f64).unwrap(), NumericKind::Float64);
        assert_eq!(
            check_type(&Number::Float64(2.0)).unwrap(),
            NumericKind::Float64
        );
    }

    #[test]
    fn check_any_type_accepts_builtin_kinds() {
        assert_eq!(check_any_type(&1_i32).unwrap(), NumericKind::Integer);
        assert_eq!(check_any_type(&1.0_f32).unwrap(), NumericKind::Float32);
        assert_eq!(
            check_any_type(&Number::Integer(2)).unwrap(),
            NumericKind::Integer
        );
    }

    #[test]
    fn check_any_type_rejects_other_types() {
        let err = check_any_type(&7_u64).unwrap_err();
        assert_eq!(
            err,
            NumeralError::Dispatch(DispatchError::UnsupportedType { type_name: "u64" })
        );
        assert!(err.to_string().contains("u64"));
    }

    #[test]
    fn add_is_commutative() {
        assert_eq!(add(&3, &-8).unwrap(), add(&-8, &3).unwrap());
        assert_eq!(add(&1.5_f32, &2.25).unwrap(), add(&2.25_f32, &1.5).unwrap());
        assert_eq!(add(&0.1, &0.7).unwrap(), add(&0.7, &0.1).unwrap());
    }

    #[test]
    fn sub_is_negated_reverse_sub() {
        assert_eq!(sub(&10, &4).unwrap(), negate(&sub(&4, &10).unwrap()).unwrap());
        assert_eq!(
            sub(&1.25_f64, &3.5).unwrap(),
            negate(&sub(&3.5_f64, &1.25).unwrap()).unwrap()
        );
    }

    #[test]
    fn double_negation_is_identity() {
        assert_eq!(negate(&negate(&42).unwrap()).unwrap(), 42);
        assert_eq!(negate(&negate(&-3.75_f64).unwrap()).unwrap(), -3.75);
        assert_eq!(negate(&negate(&0.5_f32).unwrap()).unwrap(), 0.5);
    }

    #[test]
    fn negating_float_zero_gives_negative_zero() {
        let z = negate(&0.0_f64).unwrap();
        assert_eq!(z, 0.0);
        assert!(z.is_sign_negative());
        assert!(negate(&0.0_f32).unwrap().is_sign_negative());
    }

    #[test]
    fn integer_division_by_zero_fails() {
        assert_eq!(
            div(&5, &0).unwrap_err(),
            NumeralError::Dispatch(DispatchError::DivisionByZero)
        );
    }

    #[test]
    fn float_division_by_zero_follows_ieee() {
        assert_eq!(div(&5.0_f64, &0.0).unwrap(), f64::INFINITY);
        assert_eq!(div(&-5.0_f32, &0.0).unwrap(), f32::NEG_INFINITY);
        assert!(div(&0.0_f64, &0.0).unwrap().is_nan());
    }

    #[test]
    fn mixed_runtime_operands_are_rejected() {
        let err = mul(&Number::Integer(2), &Number::Float32(2.0)).unwrap_err();
        assert_eq!(
            err,
            NumeralError::Dispatch(DispatchError::TypeMismatch {
                left: NumericKind::Integer,
                right: NumericKind::Float32,
            })
        );
    }

    #[test]
    fn kind_display() {
        assert_eq!(NumericKind::Float64.to_string(), "float64");
        assert_eq!(NumericKind::Custom("Fixed").to_string(), "custom(Fixed)");
    }
}
