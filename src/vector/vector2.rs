use std::fmt;

use crate::error::{Result, VectorError};
use crate::numeric::{self, Numeric};

/// A 2D vector over any [`Numeric`] representation.
///
/// Both components always share one representation. Every operation returns
/// a new value and goes through the dispatch functions in [`crate::numeric`],
/// so the same code serves integers, floats and custom numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2<N> {
    x: N,
    y: N,
}

impl<N: Numeric> Vector2<N> {
    /// Creates a vector from its two components.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::TypeMismatch` if `x` and `y` hold different
    /// representations.
    pub fn new(x: N, y: N) -> Result<Self> {
        numeric::check_type(&x)?;
        numeric::check_type(&y)?;
        numeric::check_same_kind(&x, &y)?;
        Ok(Self { x, y })
    }

    /// Creates a vector with both components set to `value`.
    #[must_use]
    pub fn from_scalar(value: N) -> Self {
        Self {
            x: value.clone(),
            y: value,
        }
    }

    /// Copies `other` into this vector's representation, e.g. `f32` into `f64`
    /// or `i32` into [`Number`](crate::numeric::Number).
    #[must_use]
    pub fn from_vector<M>(other: &Vector2<M>) -> Self
    where
        M: Numeric,
        N: From<M>,
    {
        Self {
            x: N::from(other.x.clone()),
            y: N::from(other.y.clone()),
        }
    }

    /// Creates a vector from the first two elements of `values`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::NotEnoughComponents`] if `values` holds fewer
    /// than two elements, or `DispatchError::TypeMismatch` if the first two
    /// differ in representation.
    pub fn from_slice(values: &[N]) -> Result<Self> {
        match values {
            [x, y, ..] => Self::new(x.clone(), y.clone()),
            _ => Err(VectorError::NotEnoughComponents { len: values.len() }.into()),
        }
    }

    #[must_use]
    pub fn x(&self) -> &N {
        &self.x
    }

    #[must_use]
    pub fn y(&self) -> &N {
        &self.y
    }

    /// Returns the component at `index` (0 for x, 1 for y).
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidIndex`] for any other index.
    pub fn get(&self, index: usize) -> Result<&N> {
        match index {
            0 => Ok(&self.x),
            1 => Ok(&self.y),
            _ => Err(VectorError::InvalidIndex(index).into()),
        }
    }

    #[must_use]
    pub fn to_array(&self) -> [N; 2] {
        [self.x.clone(), self.y.clone()]
    }

    #[must_use]
    pub fn into_tuple(self) -> (N, N) {
        (self.x, self.y)
    }

    /// Returns the vector rotated a quarter turn clockwise, `(y, -x)`.
    ///
    /// # Errors
    ///
    /// Propagates dispatch failures.
    pub fn perpendicular(&self) -> Result<Self> {
        Ok(Self {
            x: self.y.clone(),
            y: numeric::negate(&self.x)?,
        })
    }

    /// Returns `(-x, -y)`.
    ///
    /// # Errors
    ///
    /// Propagates dispatch failures.
    pub fn negate(&self) -> Result<Self> {
        Ok(Self {
            x: numeric::negate(&self.x)?,
            y: numeric::negate(&self.y)?,
        })
    }

    // Componentwise arithmetic. Each operation comes in three forms that give
    // identical results: against a vector, a broadcast scalar, or two scalars.

    /// # Errors
    ///
    /// Propagates dispatch failures.
    pub fn add(&self, v: &Self) -> Result<Self> {
        self.add_xy(&v.x, &v.y)
    }

    /// # Errors
    ///
    /// Propagates dispatch failures.
    pub fn add_scalar(&self, scalar: &N) -> Result<Self> {
        self.add_xy(scalar, scalar)
    }

    /// # Errors
    ///
    /// Returns `DispatchError::TypeMismatch` if the operands differ in representation.
    pub fn add_xy(&self, x: &N, y: &N) -> Result<Self> {
        Ok(Self {
            x: numeric::add(&self.x, x)?,
            y: numeric::add(&self.y, y)?,
        })
    }

    /// # Errors
    ///
    /// Propagates dispatch failures.
    pub fn sub(&self, v: &Self) -> Result<Self> {
        self.sub_xy(&v.x, &v.y)
    }

    /// # Errors
    ///
    /// Propagates dispatch failures.
    pub fn sub_scalar(&self, scalar: &N) -> Result<Self> {
        self.sub_xy(scalar, scalar)
    }

    /// # Errors
    ///
    /// Returns `DispatchError::TypeMismatch` if the operands differ in representation.
    pub fn sub_xy(&self, x: &N, y: &N) -> Result<Self> {
        Ok(Self {
            x: numeric::sub(&self.x, x)?,
            y: numeric::sub(&self.y, y)?,
        })
    }

    /// # Errors
    ///
    /// Propagates dispatch failures.
    pub fn mul(&self, v: &Self) -> Result<Self> {
        self.mul_xy(&v.x, &v.y)
    }

    /// # Errors
    ///
    /// Propagates dispatch failures.
    pub fn mul_scalar(&self, scalar: &N) -> Result<Self> {
        self.mul_xy(scalar, scalar)
    }

    /// # Errors
    ///
    /// Returns `DispatchError::TypeMismatch` if the operands differ in representation.
    pub fn mul_xy(&self, x: &N, y: &N) -> Result<Self> {
        Ok(Self {
            x: numeric::mul(&self.x, x)?,
            y: numeric::mul(&self.y, y)?,
        })
    }

    /// # Errors
    ///
    /// Propagates dispatch failures, including integer division by zero.
    pub fn div(&self, v: &Self) -> Result<Self> {
        self.div_xy(&v.x, &v.y)
    }

    /// # Errors
    ///
    /// Propagates dispatch failures, including integer division by zero.
    pub fn div_scalar(&self, scalar: &N) -> Result<Self> {
        self.div_xy(scalar, scalar)
    }

    /// # Errors
    ///
    /// Returns `DispatchError::TypeMismatch` if the operands differ in
    /// representation, or `DispatchError::DivisionByZero` for an integer zero.
    pub fn div_xy(&self, x: &N, y: &N) -> Result<Self> {
        Ok(Self {
            x: numeric::div(&self.x, x)?,
            y: numeric::div(&self.y, y)?,
        })
    }

    /// Dot product `x * v.x + y * v.y`.
    ///
    /// # Errors
    ///
    /// Propagates dispatch failures.
    pub fn dot(&self, v: &Self) -> Result<N> {
        numeric::add(
            &numeric::mul(&self.x, &v.x)?,
            &numeric::mul(&self.y, &v.y)?,
        )
    }

    /// Signed angle from this vector to `v`, in `(-π, π]`.
    ///
    /// Computed as `atan2(cross, dot)`, so `angle(v, v)` is exactly zero and
    /// `angle(v, -v)` is exactly π in double precision.
    ///
    /// # Errors
    ///
    /// Propagates dispatch failures.
    pub fn angle(&self, v: &Self) -> Result<N> {
        let dot = self.dot(v)?;
        let det = numeric::sub(
            &numeric::mul(&self.x, &v.y)?,
            &numeric::mul(&self.y, &v.x)?,
        )?;
        numeric::atan2(&det, &dot)
    }

    /// # Errors
    ///
    /// Propagates dispatch failures.
    pub fn length_squared(&self) -> Result<N> {
        Self::length_squared_of(&self.x, &self.y)
    }

    /// # Errors
    ///
    /// Propagates dispatch failures.
    pub fn length(&self) -> Result<N> {
        numeric::sqrt(&self.length_squared()?)
    }

    /// Squared length of `(x, y)` without building a vector.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::TypeMismatch` if `x` and `y` differ in representation.
    pub fn length_squared_of(x: &N, y: &N) -> Result<N> {
        numeric::add(&numeric::mul(x, x)?, &numeric::mul(y, y)?)
    }

    /// Length of `(x, y)` without building a vector.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::TypeMismatch` if `x` and `y` differ in representation.
    pub fn length_of(x: &N, y: &N) -> Result<N> {
        numeric::sqrt(&Self::length_squared_of(x, y)?)
    }

    /// # Errors
    ///
    /// Propagates dispatch failures.
    pub fn distance(&self, v: &Self) -> Result<N> {
        self.distance_to_xy(&v.x, &v.y)
    }

    /// # Errors
    ///
    /// Propagates dispatch failures.
    pub fn distance_squared(&self, v: &Self) -> Result<N> {
        self.distance_squared_to_xy(&v.x, &v.y)
    }

    /// # Errors
    ///
    /// Propagates dispatch failures.
    pub fn distance_to_xy(&self, x: &N, y: &N) -> Result<N> {
        Self::distance_between(&self.x, &self.y, x, y)
    }

    /// # Errors
    ///
    /// Propagates dispatch failures.
    pub fn distance_squared_to_xy(&self, x: &N, y: &N) -> Result<N> {
        Self::distance_squared_between(&self.x, &self.y, x, y)
    }

    /// Euclidean distance between the points `(x1, y1)` and `(x2, y2)`.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::TypeMismatch` if the coordinates differ in
    /// representation.
    pub fn distance_between(x1: &N, y1: &N, x2: &N, y2: &N) -> Result<N> {
        numeric::sqrt(&Self::distance_squared_between(x1, y1, x2, y2)?)
    }

    /// Squared Euclidean distance between the points `(x1, y1)` and `(x2, y2)`.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::TypeMismatch` if the coordinates differ in
    /// representation.
    pub fn distance_squared_between(x1: &N, y1: &N, x2: &N, y2: &N) -> Result<N> {
        Self::length_squared_of(&numeric::sub(x1, x2)?, &numeric::sub(y1, y2)?)
    }

    /// Scales the vector to unit length.
    ///
    /// A zero vector is not special-cased: floats produce NaN components and
    /// integers fail with `DispatchError::DivisionByZero`.
    ///
    /// # Errors
    ///
    /// Propagates dispatch failures.
    pub fn normalize(&self) -> Result<Self> {
        let inv_length = numeric::inv_sqrt(&self.length_squared()?)?;
        self.mul_scalar(&inv_length)
    }

    /// Scales the vector to `length`. Zero vectors behave as in
    /// [`normalize`](Self::normalize).
    ///
    /// # Errors
    ///
    /// Propagates dispatch failures.
    pub fn normalize_to(&self, length: &N) -> Result<Self> {
        let inv_length = numeric::inv_sqrt(&self.length_squared()?)?;
        self.mul_scalar(&numeric::mul(&inv_length, length)?)
    }
}

impl<N: Numeric> TryFrom<&[N]> for Vector2<N> {
    type Error = crate::error::NumeralError;

    fn try_from(values: &[N]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl<N: Numeric> TryFrom<[N; 2]> for Vector2<N> {
    type Error = crate::error::NumeralError;

    fn try_from([x, y]: [N; 2]) -> Result<Self> {
        Self::new(x, y)
    }
}

impl<N: fmt::Display> fmt::Display for Vector2<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
