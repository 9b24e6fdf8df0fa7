#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::{Dimensionality, ReplicateIndex, Result, Shape, ShapeError, SliceIndex};

/// A slice specification: which dimensions of a full shape survive, and the
/// coordinates the others are pinned to.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SliceInfo<T> {
    pub indices: T,
}

impl<T> AsRef<[SliceIndex]> for SliceInfo<T>
where
    T: AsRef<[SliceIndex]>,
{
    fn as_ref(&self) -> &[SliceIndex] {
        self.indices.as_ref()
    }
}

impl From<Vec<SliceIndex>> for SliceInfo<Vec<SliceIndex>> {
    fn from(indices: Vec<SliceIndex>) -> Self {
        Self { indices }
    }
}

impl<T> SliceInfo<T>
where
    T: AsRef<[SliceIndex]>,
{
    pub const fn new(indices: T) -> Self {
        Self { indices }
    }

    /// Rank of the shape the specification applies to.
    pub fn full_n_dims(&self) -> usize {
        self.as_ref().len()
    }

    /// Rank of the sliced shape.
    pub fn sliced_n_dims(&self) -> usize {
        self.as_ref().iter().filter(|x| x.is_all()).count()
    }

    pub fn dim_diff(&self) -> isize {
        self.sliced_n_dims() as isize - self.full_n_dims() as isize
    }

    /// Shape of the slice taken from an array of shape `full`.
    ///
    /// Fixed coordinates are checked against their extents.
    pub fn sliced_shape<D, Sh>(&self, full: &Sh) -> Result<D::Shape>
    where
        D: Dimensionality,
        Sh: Shape,
    {
        ShapeError::check_rank(self.full_n_dims(), full.n_dims())?;
        let mut out = D::try_shape_zeroed(self.sliced_n_dims())?;

        let mut dst = out.as_mut().iter_mut();
        for (axis, (index, &dim)) in self.as_ref().iter().zip(full.as_ref()).enumerate() {
            match *index {
                SliceIndex::All => {
                    if let Some(d) = dst.next() {
                        *d = dim;
                    }
                }
                SliceIndex::Fixed(i) => {
                    if i >= dim {
                        return Err(ShapeError::OutOfRangeIndex {
                            axis,
                            index: i,
                            extent: dim,
                        }
                        .into());
                    }
                }
            }
        }

        Ok(out)
    }

    /// Index into the full array that element `sliced_index` of the slice
    /// reads.
    pub fn full_index<D, Sh>(&self, sliced_index: &Sh) -> Result<D::Shape>
    where
        D: Dimensionality,
        Sh: Shape,
    {
        ShapeError::check_rank(self.sliced_n_dims(), sliced_index.n_dims())?;
        let mut out = D::try_shape_zeroed(self.full_n_dims())?;

        let mut src = sliced_index.as_ref().iter();
        for (dst, index) in out.as_mut().iter_mut().zip(self.as_ref()) {
            *dst = match *index {
                SliceIndex::All => src.next().copied().unwrap_or_default(),
                SliceIndex::Fixed(i) => i,
            };
        }

        Ok(out)
    }

    /// The replicate specification that rebuilds `full` from the slice:
    /// every fixed coordinate becomes a count equal to its extent.
    pub fn to_replicate_with<Sh>(&self, full: &Sh) -> Result<ReplicateInfo<Vec<ReplicateIndex>>>
    where
        Sh: Shape,
    {
        ShapeError::check_rank(self.full_n_dims(), full.n_dims())?;
        Ok(ReplicateInfo::new(
            self.as_ref()
                .iter()
                .zip(full.as_ref())
                .map(|(index, &dim)| match index {
                    SliceIndex::All => ReplicateIndex::All,
                    SliceIndex::Fixed(_) => ReplicateIndex::Count(dim),
                })
                .collect(),
        ))
    }
}

/// A replicate specification: which dimensions of the full shape come from
/// the source, and how many copies make up each new one.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ReplicateInfo<T> {
    pub indices: T,
}

impl<T> AsRef<[ReplicateIndex]> for ReplicateInfo<T>
where
    T: AsRef<[ReplicateIndex]>,
{
    fn as_ref(&self) -> &[ReplicateIndex] {
        self.indices.as_ref()
    }
}

impl From<Vec<ReplicateIndex>> for ReplicateInfo<Vec<ReplicateIndex>> {
    fn from(indices: Vec<ReplicateIndex>) -> Self {
        Self { indices }
    }
}

impl<T> ReplicateInfo<T>
where
    T: AsRef<[ReplicateIndex]>,
{
    pub const fn new(indices: T) -> Self {
        Self { indices }
    }

    pub fn full_n_dims(&self) -> usize {
        self.as_ref().len()
    }

    pub fn sliced_n_dims(&self) -> usize {
        self.as_ref().iter().filter(|x| x.is_all()).count()
    }

    pub fn dim_diff(&self) -> isize {
        self.full_n_dims() as isize - self.sliced_n_dims() as isize
    }

    /// Shape of the array produced by replicating an array of shape `sliced`.
    pub fn replicated_shape<D, Sh>(&self, sliced: &Sh) -> Result<D::Shape>
    where
        D: Dimensionality,
        Sh: Shape,
    {
        ShapeError::check_rank(self.sliced_n_dims(), sliced.n_dims())?;
        let mut out = D::try_shape_zeroed(self.full_n_dims())?;

        let mut src = sliced.as_ref().iter();
        for (dst, index) in out.as_mut().iter_mut().zip(self.as_ref()) {
            *dst = match *index {
                ReplicateIndex::All => src.next().copied().unwrap_or_default(),
                ReplicateIndex::Count(n) => n,
            };
        }

        Ok(out)
    }

    /// Index into the source array that element `full_index` of the
    /// replicated array reads.
    pub fn sliced_index<D, Sh>(&self, full_index: &Sh) -> Result<D::Shape>
    where
        D: Dimensionality,
        Sh: Shape,
    {
        ShapeError::check_rank(self.full_n_dims(), full_index.n_dims())?;
        let mut out = D::try_shape_zeroed(self.sliced_n_dims())?;

        let mut dst = out.as_mut().iter_mut();
        for (axis, (index, &i)) in self.as_ref().iter().zip(full_index.as_ref()).enumerate() {
            match *index {
                ReplicateIndex::All => {
                    if let Some(d) = dst.next() {
                        *d = i;
                    }
                }
                ReplicateIndex::Count(n) => {
                    if i >= n {
                        return Err(ShapeError::OutOfRangeIndex {
                            axis,
                            index: i,
                            extent: n,
                        }
                        .into());
                    }
                }
            }
        }

        Ok(out)
    }
}

/// Builds a [`SliceInfo`] from `..` (keep the dimension) and coordinates.
///
/// ```
/// use katachi::{s, DynDim};
///
/// let info = s![.., 2, ..];
/// let sliced = info.sliced_shape::<DynDim, _>(&[4_usize, 3, 5]).unwrap();
/// assert_eq!(sliced, vec![4, 5]);
/// ```
#[macro_export]
macro_rules! s {
    ($( $idx:expr ),+ $(,)?) => {
        $crate::SliceInfo::new([$( $crate::SliceIndex::from($idx) ),+])
    };
}

/// Builds a [`ReplicateInfo`] from `..` (take the dimension from the source)
/// and replication counts.
///
/// ```
/// use katachi::{r, NDims};
///
/// let info = r![3, ..];
/// let full = info.replicated_shape::<NDims<2>, _>(&[5_usize]).unwrap();
/// assert_eq!(full, [3, 5]);
/// ```
#[macro_export]
macro_rules! r {
    ($( $idx:expr ),+ $(,)?) => {
        $crate::ReplicateInfo::new([$( $crate::ReplicateIndex::from($idx) ),+])
    };
}
