mod indices;
pub use indices::Indices;

mod signed_index;
pub use signed_index::SignedIndex;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::{
    fmt::Debug,
    hash::Hash,
    ops::{Index, IndexMut},
};

use crate::{Order, Result, ShapeError};

/// Per-dimension extents of an array.
///
/// An index into a shape uses the same container type as the shape itself,
/// so `[usize; N]` shapes take `[usize; N]` indices and can never disagree in
/// rank. `Vec<usize>` shapes check the rank at runtime.
pub trait Shape:
    AsRef<[usize]>
    + AsMut<[usize]>
    + Clone
    + Debug
    + Eq
    + Hash
    + Index<usize, Output = usize>
    + IndexMut<usize, Output = usize>
    + PartialEq
    + Send
    + Sync
{
    type Signed: SignedIndex;

    fn n_dims(&self) -> usize;

    /// Converts every component to `isize`.
    fn try_to_signed(&self) -> Result<Self::Signed>;

    /// Number of addressable elements. A rank-0 shape addresses one element.
    fn size(&self) -> usize {
        self.as_ref().iter().product()
    }

    fn to_default_strides<O>(&self) -> Self::Signed
    where
        O: Order;

    /// Same rank as `self`, every component zero.
    fn zeroed(&self) -> Self {
        let mut out = self.clone();
        out.as_mut().iter_mut().for_each(|x| *x = 0);
        out
    }

    fn contains_index(&self, index: &Self) -> bool {
        self.n_dims() == index.n_dims()
            && index
                .as_ref()
                .iter()
                .zip(self.as_ref())
                .all(|(&i, &dim)| i < dim)
    }

    fn check_index(&self, index: &Self) -> Result<()> {
        ShapeError::check_rank(self.n_dims(), index.n_dims())?;
        for (axis, (&i, &dim)) in index.as_ref().iter().zip(self.as_ref()).enumerate() {
            if i >= dim {
                return Err(ShapeError::OutOfRangeIndex {
                    axis,
                    index: i,
                    extent: dim,
                }
                .into());
            }
        }
        Ok(())
    }

    #[inline]
    fn to_linear<O>(&self, index: &Self) -> usize
    where
        O: Order,
    {
        O::to_linear(self.as_ref(), index.as_ref())
    }

    fn from_linear<O>(&self, offset: usize) -> Self
    where
        O: Order,
    {
        let mut index = self.clone();
        O::from_linear(self.as_ref(), offset, index.as_mut());
        index
    }

    fn checked_to_linear<O>(&self, index: &Self) -> Result<usize>
    where
        O: Order,
    {
        self.check_index(index)?;
        Ok(self.to_linear::<O>(index))
    }

    fn checked_from_linear<O>(&self, offset: usize) -> Result<Self>
    where
        O: Order,
    {
        let size = self.size();
        if offset >= size {
            return Err(ShapeError::OffsetOutOfRange { offset, size }.into());
        }
        Ok(self.from_linear::<O>(offset))
    }

    /// Component-wise minimum, the extent both operands cover.
    fn intersect(&self, other: &Self) -> Result<Self> {
        zip_extents(self, other, core::cmp::min)
    }

    /// Component-wise maximum.
    fn union(&self, other: &Self) -> Result<Self> {
        zip_extents(self, other, core::cmp::max)
    }

    fn indices<O>(&self) -> Indices<Self, O>
    where
        O: Order,
    {
        Indices::new(self)
    }
}

fn zip_extents<Sh, F>(lhs: &Sh, rhs: &Sh, f: F) -> Result<Sh>
where
    Sh: Shape,
    F: Fn(usize, usize) -> usize,
{
    ShapeError::check_rank(lhs.n_dims(), rhs.n_dims())?;
    let mut out = lhs.clone();
    for (dst, &r) in out.as_mut().iter_mut().zip(rhs.as_ref()) {
        *dst = f(*dst, r);
    }
    Ok(out)
}

impl<const N: usize> Shape for [usize; N] {
    type Signed = [isize; N];

    #[inline]
    fn n_dims(&self) -> usize {
        N
    }

    fn try_to_signed(&self) -> Result<Self::Signed> {
        let mut out = [0_isize; N];
        for (dst, &src) in out.iter_mut().zip(self.iter()) {
            *dst = isize::try_from(src)?;
        }
        Ok(out)
    }

    fn to_default_strides<O>(&self) -> Self::Signed
    where
        O: Order,
    {
        let mut strides = [0; N];
        O::convert_shape_to_default_strides(self, &mut strides);
        strides
    }
}

impl Shape for Vec<usize> {
    type Signed = Vec<isize>;

    #[inline]
    fn n_dims(&self) -> usize {
        self.len()
    }

    fn try_to_signed(&self) -> Result<Self::Signed> {
        Ok(self
            .iter()
            .map(|&x| isize::try_from(x))
            .collect::<core::result::Result<Vec<_>, _>>()?)
    }

    fn to_default_strides<O>(&self) -> Self::Signed
    where
        O: Order,
    {
        let mut strides = Vec::<isize>::new();
        strides.reserve(self.len());
        strides.resize(self.len(), 0);
        O::convert_shape_to_default_strides(self, &mut strides);
        strides
    }
}
