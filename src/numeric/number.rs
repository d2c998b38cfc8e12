use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;

use super::{Numeric, NumericKind, ValuedNumber};
use crate::error::{DispatchError, Result};

/// A numeric value whose representation is only known at runtime.
///
/// Arithmetic between two `Number`s succeeds only when both hold the same
/// variant; mixing variants is a [`DispatchError::TypeMismatch`], never an
/// implicit conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Integer(i32),
    Float32(f32),
    Float64(f64),
    Custom(CustomNumber),
}

impl Number {
    /// Wraps a user-defined number.
    pub fn custom<T>(value: T) -> Self
    where
        T: ValuedNumber + Send + Sync + 'static,
    {
        Self::Custom(CustomNumber(Arc::new(value)))
    }

    /// Converts an arbitrary value into a `Number`.
    ///
    /// Accepts `i32`, `f32`, `f64` and `Number`. Custom types must go through
    /// [`Number::custom`], which requires them to implement [`ValuedNumber`].
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnsupportedType`] naming `T` for any other type.
    pub fn try_from_value<T: Any>(value: T) -> Result<Self> {
        let any: &dyn Any = &value;
        if let Some(v) = any.downcast_ref::<i32>() {
            Ok(Self::Integer(*v))
        } else if let Some(v) = any.downcast_ref::<f32>() {
            Ok(Self::Float32(*v))
        } else if let Some(v) = any.downcast_ref::<f64>() {
            Ok(Self::Float64(*v))
        } else if let Some(v) = any.downcast_ref::<Number>() {
            Ok(v.clone())
        } else {
            Err(DispatchError::UnsupportedType {
                type_name: type_name::<T>(),
            }
            .into())
        }
    }

    /// Returns the value as `f64` for the built-in variants, `None` for custom
    /// numbers.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(v) => Some(f64::from(*v)),
            Self::Float32(v) => Some(f64::from(*v)),
            Self::Float64(v) => Some(*v),
            Self::Custom(_) => None,
        }
    }

    /// Returns the wrapped custom number if it is of type `T`.
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        match self {
            Self::Custom(custom) => custom.0.as_any().downcast_ref(),
            _ => None,
        }
    }

    fn unary(&self, op: UnaryOp) -> Result<Self> {
        Ok(match self {
            Self::Integer(v) => Self::Integer(op.apply(v)?),
            Self::Float32(v) => Self::Float32(op.apply(v)?),
            Self::Float64(v) => Self::Float64(op.apply(v)?),
            Self::Custom(v) => Self::Custom(v.0.unary(op)?),
        })
    }

    fn binary(&self, rhs: &Self, op: BinaryOp) -> Result<Self> {
        Ok(match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => Self::Integer(op.apply(a, b)?),
            (Self::Float32(a), Self::Float32(b)) => Self::Float32(op.apply(a, b)?),
            (Self::Float64(a), Self::Float64(b)) => Self::Float64(op.apply(a, b)?),
            (Self::Custom(a), Self::Custom(b)) => Self::Custom(a.0.binary(op, b.0.as_ref())?),
            _ => {
                return Err(DispatchError::TypeMismatch {
                    left: self.kind(),
                    right: rhs.kind(),
                }
                .into())
            }
        })
    }
}

impl Numeric for Number {
    fn kind(&self) -> NumericKind {
        match self {
            Self::Integer(_) => NumericKind::Integer,
            Self::Float32(_) => NumericKind::Float32,
            Self::Float64(_) => NumericKind::Float64,
            Self::Custom(v) => ErasedNumber::kind(v.0.as_ref()),
        }
    }

    fn try_negate(&self) -> Result<Self> {
        self.unary(UnaryOp::Negate)
    }

    fn try_add(&self, rhs: &Self) -> Result<Self> {
        self.binary(rhs, BinaryOp::Add)
    }

    fn try_sub(&self, rhs: &Self) -> Result<Self> {
        self.binary(rhs, BinaryOp::Sub)
    }

    fn try_mul(&self, rhs: &Self) -> Result<Self> {
        self.binary(rhs, BinaryOp::Mul)
    }

    fn try_div(&self, rhs: &Self) -> Result<Self> {
        self.binary(rhs, BinaryOp::Div)
    }

    fn try_atan2(&self, rhs: &Self) -> Result<Self> {
        self.binary(rhs, BinaryOp::Atan2)
    }

    fn try_sqrt(&self) -> Result<Self> {
        self.unary(UnaryOp::Sqrt)
    }

    fn try_inv_sqrt(&self) -> Result<Self> {
        self.unary(UnaryOp::InvSqrt)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Self::Float32(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float64(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float32(v) => write!(f, "{v}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::Custom(v) => write!(f, "{:?}", v.0),
        }
    }
}

/// A type-erased [`ValuedNumber`] held by [`Number::Custom`].
#[derive(Clone)]
pub struct CustomNumber(Arc<dyn ErasedNumber>);

impl fmt::Debug for CustomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl PartialEq for CustomNumber {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_erased(other.0.as_ref())
    }
}

#[derive(Debug, Clone, Copy)]
enum UnaryOp {
    Negate,
    Sqrt,
    InvSqrt,
}

impl UnaryOp {
    fn apply<N: Numeric>(self, value: &N) -> Result<N> {
        match self {
            Self::Negate => value.try_negate(),
            Self::Sqrt => value.try_sqrt(),
            Self::InvSqrt => value.try_inv_sqrt(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Atan2,
}

impl BinaryOp {
    fn apply<N: Numeric>(self, a: &N, b: &N) -> Result<N> {
        match self {
            Self::Add => a.try_add(b),
            Self::Sub => a.try_sub(b),
            Self::Mul => a.try_mul(b),
            Self::Div => a.try_div(b),
            Self::Atan2 => a.try_atan2(b),
        }
    }
}

/// Object-safe view of a [`ValuedNumber`].
trait ErasedNumber: fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn kind(&self) -> NumericKind;
    fn eq_erased(&self, other: &dyn ErasedNumber) -> bool;
    fn unary(&self, op: UnaryOp) -> Result<CustomNumber>;
    fn binary(&self, op: BinaryOp, rhs: &dyn ErasedNumber) -> Result<CustomNumber>;
}

impl<T> ErasedNumber for T
where
    T: ValuedNumber + Send + Sync + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn kind(&self) -> NumericKind {
        Numeric::kind(self)
    }

    fn eq_erased(&self, other: &dyn ErasedNumber) -> bool {
        other.as_any().downcast_ref::<T>() == Some(self)
    }

    fn unary(&self, op: UnaryOp) -> Result<CustomNumber> {
        Ok(CustomNumber(Arc::new(op.apply(self)?)))
    }

    fn binary(&self, op: BinaryOp, rhs: &dyn ErasedNumber) -> Result<CustomNumber> {
        let Some(rhs_value) = rhs.as_any().downcast_ref::<T>() else {
            return Err(DispatchError::TypeMismatch {
                left: Numeric::kind(self),
                right: ErasedNumber::kind(rhs),
            }
            .into());
        };
        Ok(CustomNumber(Arc::new(op.apply(self, rhs_value)?)))
    }
}
