#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::{Result, Shape, ShapeError};

/// Rank of a shape, either fixed in the type or carried at runtime.
pub trait Dimensionality {
    type Shape: Shape;

    /// Builds an all-zero shape of `n_dims` dimensions.
    ///
    /// # Panics
    ///
    /// Panics if the rank is fixed and differs from `n_dims`.
    fn shape_zeroed(n_dims: usize) -> Self::Shape;

    /// Returns the static rank, or `None` when the rank is only known at runtime.
    fn static_n_dims() -> Option<usize>;

    fn try_shape_zeroed(n_dims: usize) -> Result<Self::Shape> {
        if let Some(expected) = Self::static_n_dims() {
            ShapeError::check_rank(expected, n_dims)?;
        }
        Ok(Self::shape_zeroed(n_dims))
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NDims<const N: usize>;

impl<const N: usize> Dimensionality for NDims<N> {
    type Shape = [usize; N];

    fn shape_zeroed(n_dims: usize) -> Self::Shape {
        assert_eq!(n_dims, N);
        [0; N]
    }

    #[inline]
    fn static_n_dims() -> Option<usize> {
        Some(N)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DynDim;

impl Dimensionality for DynDim {
    type Shape = Vec<usize>;

    fn shape_zeroed(n_dims: usize) -> Self::Shape {
        let mut shape = Vec::<usize>::new();
        shape.reserve(n_dims);
        shape.resize(n_dims, 0);
        shape
    }

    #[inline]
    fn static_n_dims() -> Option<usize> {
        None
    }
}

#[cfg(test)]
mod tests {
    #[cfg(not(feature = "std"))]
    use alloc::vec;

    use super::{Dimensionality, DynDim, NDims};
    use crate::{Error, ShapeError};

    #[test]
    fn get_shape_zeroed() {
        assert_eq!(NDims::<3>::shape_zeroed(3), [0; 3]);
        assert_eq!(DynDim::shape_zeroed(3), vec![0; 3]);
    }

    #[test]
    #[should_panic]
    fn get_shape_zeroed_with_invalid_n_dims() {
        NDims::<3>::shape_zeroed(4);
    }

    #[test]
    fn try_shape_zeroed() {
        assert_eq!(NDims::<2>::try_shape_zeroed(2), Ok([0; 2]));
        assert_eq!(DynDim::try_shape_zeroed(5), Ok(vec![0; 5]));
        assert_eq!(
            NDims::<2>::try_shape_zeroed(1),
            Err(Error::Shape(ShapeError::RankMismatch {
                expected: 2,
                found: 1
            }))
        );
    }
}
