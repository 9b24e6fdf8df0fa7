use crate::Shape;

/// Storage order of the linear offsets an index maps to.
pub trait Order: 'static {
    fn convert_shape_to_strides<Sh>(shape: &Sh, base_stride: isize, strides: &mut Sh::Signed)
    where
        Sh: Shape;

    /// Maps an index to its linear offset. No bounds check is made, an
    /// out-of-range component yields an offset outside `0..size`.
    fn to_linear(shape: &[usize], index: &[usize]) -> usize;

    /// Writes the index at linear `offset` into `index`.
    ///
    /// The result is only meaningful for `offset < size`. Zero extents do not
    /// panic; the component is left as the remaining offset.
    fn from_linear(shape: &[usize], offset: usize, index: &mut [usize]);

    /// Advances `index` to its successor, returning `false` after the last index.
    fn increment(shape: &[usize], index: &mut [usize]) -> bool;

    fn convert_shape_to_default_strides<Sh>(shape: &Sh, strides: &mut Sh::Signed)
    where
        Sh: Shape,
    {
        Self::convert_shape_to_strides::<Sh>(shape, 1, strides)
    }
}

#[inline]
fn split_offset(rem: &mut usize, dim: usize) -> usize {
    let i = rem.checked_rem(dim).unwrap_or(*rem);
    *rem = rem.checked_div(dim).unwrap_or(0);
    i
}

#[inline]
fn bump<'a, I>(axes: I) -> bool
where
    I: Iterator<Item = (&'a mut usize, &'a usize)>,
{
    for (index, &dim) in axes {
        *index += 1;
        if *index >= dim {
            *index = 0;
        } else {
            return true;
        }
    }
    false
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct RowMajor;

impl Order for RowMajor {
    fn convert_shape_to_strides<S>(shape: &S, base_stride: isize, strides: &mut S::Signed)
    where
        S: Shape,
    {
        debug_assert_eq!(shape.n_dims(), strides.as_ref().len());

        strides
            .as_mut()
            .iter_mut()
            .zip(shape.as_ref().iter())
            .rfold(base_stride, |acc, (stride, &dim)| {
                *stride = acc;
                acc * (dim as isize).max(1)
            });
    }

    fn to_linear(shape: &[usize], index: &[usize]) -> usize {
        debug_assert_eq!(shape.len(), index.len());

        shape
            .iter()
            .zip(index)
            .fold(0, |acc, (&dim, &i)| acc * dim + i)
    }

    fn from_linear(shape: &[usize], offset: usize, index: &mut [usize]) {
        debug_assert_eq!(shape.len(), index.len());

        let mut rem = offset;
        for (i, &dim) in index.iter_mut().zip(shape).rev() {
            *i = split_offset(&mut rem, dim);
        }
    }

    fn increment(shape: &[usize], index: &mut [usize]) -> bool {
        bump(index.iter_mut().zip(shape).rev())
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ColumnMajor;

impl Order for ColumnMajor {
    fn convert_shape_to_strides<S>(shape: &S, base_stride: isize, strides: &mut S::Signed)
    where
        S: Shape,
    {
        debug_assert_eq!(shape.n_dims(), strides.as_ref().len());

        strides.as_mut().iter_mut().zip(shape.as_ref().iter()).fold(
            base_stride,
            |acc, (stride, &dim)| {
                *stride = acc;
                acc * (dim as isize).max(1)
            },
        );
    }

    fn to_linear(shape: &[usize], index: &[usize]) -> usize {
        debug_assert_eq!(shape.len(), index.len());

        shape
            .iter()
            .zip(index)
            .rfold(0, |acc, (&dim, &i)| acc * dim + i)
    }

    fn from_linear(shape: &[usize], offset: usize, index: &mut [usize]) {
        debug_assert_eq!(shape.len(), index.len());

        let mut rem = offset;
        for (i, &dim) in index.iter_mut().zip(shape) {
            *i = split_offset(&mut rem, dim);
        }
    }

    fn increment(shape: &[usize], index: &mut [usize]) -> bool {
        bump(index.iter_mut().zip(shape))
    }
}

#[cfg(test)]
mod tests {
    use super::{ColumnMajor, Order, RowMajor};

    #[test]
    fn convert_shape_to_stride_with_c_order() {
        let mut strides = [0_isize; 3];
        RowMajor::convert_shape_to_default_strides(&[2_usize, 3, 4], &mut strides);

        assert_eq!(strides, [12, 4, 1]);
    }

    #[test]
    fn convert_shape_to_stride_with_f_order() {
        let mut strides = [0_isize; 3];
        ColumnMajor::convert_shape_to_default_strides(&[2_usize, 3, 4], &mut strides);

        assert_eq!(strides, [1, 2, 6]);
    }

    #[test]
    fn convert_shape_with_zero_extent_to_strides() {
        let mut strides = [0_isize; 3];
        RowMajor::convert_shape_to_default_strides(&[2_usize, 0, 4], &mut strides);

        assert_eq!(strides, [4, 4, 1]);
    }

    #[test]
    fn to_linear_with_c_order() {
        assert_eq!(RowMajor::to_linear(&[3, 4], &[2, 1]), 9);
        assert_eq!(RowMajor::to_linear(&[2, 3, 4], &[1, 2, 3]), 23);
        assert_eq!(RowMajor::to_linear(&[], &[]), 0);
    }

    #[test]
    fn to_linear_with_f_order() {
        assert_eq!(ColumnMajor::to_linear(&[3, 4], &[2, 1]), 5);
        assert_eq!(ColumnMajor::to_linear(&[2, 3, 4], &[1, 2, 3]), 23);
    }

    #[test]
    fn to_linear_out_of_range_is_not_checked() {
        assert_eq!(RowMajor::to_linear(&[3, 4], &[3, 0]), 12);
        assert_eq!(RowMajor::to_linear(&[3, 4], &[0, 5]), 5);
    }

    #[test]
    fn from_linear_with_c_order() {
        let mut index = [0; 2];
        RowMajor::from_linear(&[3, 4], 9, &mut index);

        assert_eq!(index, [2, 1]);
    }

    #[test]
    fn from_linear_with_f_order() {
        let mut index = [0; 2];
        ColumnMajor::from_linear(&[3, 4], 5, &mut index);

        assert_eq!(index, [2, 1]);
    }

    #[test]
    fn from_linear_with_zero_extent_does_not_panic() {
        let mut index = [0; 2];
        RowMajor::from_linear(&[3, 0], 7, &mut index);

        assert_eq!(index, [0, 7]);
    }

    fn count_increments<O>(shape: &[usize; 2]) -> (usize, [usize; 2])
    where
        O: Order,
    {
        let mut index = [0; 2];
        let mut count = 1;
        while O::increment(shape, &mut index) {
            count += 1;
        }
        (count, index)
    }

    #[test]
    fn increment_visits_every_index() {
        assert_eq!(count_increments::<RowMajor>(&[2, 3]), (6, [0, 0]));
        assert_eq!(count_increments::<ColumnMajor>(&[2, 3]), (6, [0, 0]));
    }

    #[test]
    fn increment_rank_zero() {
        assert!(!RowMajor::increment(&[], &mut []));
        assert!(!ColumnMajor::increment(&[], &mut []));
    }
}
