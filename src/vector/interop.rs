//! Conversions between [`Vector2`] and `nalgebra::Vector2`.

use nalgebra::Scalar;

use super::Vector2;
use crate::error::{NumeralError, Result};
use crate::numeric::Numeric;

impl<T: Numeric + Scalar> TryFrom<nalgebra::Vector2<T>> for Vector2<T> {
    type Error = NumeralError;

    /// # Errors
    ///
    /// Returns `DispatchError::TypeMismatch` if the components hold different
    /// runtime representations.
    fn try_from(v: nalgebra::Vector2<T>) -> Result<Self> {
        Self::new(v[0].clone(), v[1].clone())
    }
}

impl<T: Numeric + Scalar> From<Vector2<T>> for nalgebra::Vector2<T> {
    fn from(v: Vector2<T>) -> Self {
        let (x, y) = v.into_tuple();
        nalgebra::Vector2::new(x, y)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::DispatchError;
    use crate::numeric::{Number, NumericKind};

    #[test]
    fn converts_from_nalgebra() {
        let v = Vector2::try_from(nalgebra::Vector2::new(3.0, -4.0)).unwrap();
        assert_eq!(v, Vector2::new(3.0, -4.0).unwrap());
        assert_eq!(v.length().unwrap(), 5.0);
    }

    #[test]
    fn converts_to_nalgebra() {
        let v = Vector2::new(2, 7).unwrap();
        let n: nalgebra::Vector2<i32> = v.into();
        assert_eq!(n, nalgebra::Vector2::new(2, 7));
    }

    #[test]
    fn angle_matches_nalgebra() {
        let a = Vector2::new(-9.37_f64, 5.892).unwrap();
        let b = Vector2::new(1.5_f64, 2.5).unwrap();
        let unsigned = nalgebra::Vector2::from(a).angle(&nalgebra::Vector2::from(b));
        approx::assert_relative_eq!(a.angle(&b).unwrap().abs(), unsigned, epsilon = 1e-12);
    }

    #[test]
    fn mixed_runtime_components_are_rejected() {
        let n = nalgebra::Vector2::new(Number::Integer(1), Number::Float32(1.0));
        assert_eq!(
            Vector2::try_from(n).unwrap_err(),
            NumeralError::Dispatch(DispatchError::TypeMismatch {
                left: NumericKind::Integer,
                right: NumericKind::Float32,
            })
        );
    }
}
