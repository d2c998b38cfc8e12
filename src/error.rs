use thiserror::Error;

use crate::numeric::NumericKind;

/// Top-level error type for the numeral crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumeralError {
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error(transparent)]
    Vector(#[from] VectorError),
}

/// Errors raised by the numeric dispatch primitives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("unsupported numeric type: {type_name}")]
    UnsupportedType { type_name: &'static str },

    #[error("operand type mismatch: {left} and {right}")]
    TypeMismatch { left: NumericKind, right: NumericKind },

    #[error("integer division by zero")]
    DivisionByZero,
}

/// Errors related to vector construction and component access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    #[error("invalid component index {0}, expected 0 or 1")]
    InvalidIndex(usize),

    #[error("a 2D vector needs at least 2 components, got {len}")]
    NotEnoughComponents { len: usize },
}

/// Convenience type alias for results using [`NumeralError`].
pub type Result<T> = std::result::Result<T, NumeralError>;
