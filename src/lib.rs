//! Generic numeric dispatch and 2D vector algebra.
//!
//! Arithmetic is written once against the [`Numeric`] trait and works for
//! `i32`, `f32`, `f64`, user-defined [`ValuedNumber`] types, and the runtime
//! tagged union [`Number`]. [`Vector2`] builds all of its algebra on top of the
//! dispatch functions in [`numeric`].

pub mod error;
pub mod numeric;
pub mod vector;

pub use error::{DispatchError, NumeralError, Result, VectorError};
pub use numeric::{Number, Numeric, NumericKind, ValuedNumber};
pub use vector::Vector2;
