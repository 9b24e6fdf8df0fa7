use crate::{Result, RowMajor, Shape};

/// Row-major linear offset of `index`. Out-of-range components are not
/// rejected; they produce an offset outside `0..shape.size()`.
#[inline]
pub fn to_index<Sh>(shape: &Sh, index: &Sh) -> usize
where
    Sh: Shape,
{
    shape.to_linear::<RowMajor>(index)
}

/// Row-major index at linear `offset`, the inverse of [`to_index`] for
/// offsets in `0..shape.size()`.
#[inline]
pub fn from_index<Sh>(shape: &Sh, offset: usize) -> Sh
where
    Sh: Shape,
{
    shape.from_linear::<RowMajor>(offset)
}

pub fn checked_to_index<Sh>(shape: &Sh, index: &Sh) -> Result<usize>
where
    Sh: Shape,
{
    shape.checked_to_linear::<RowMajor>(index)
}

pub fn checked_from_index<Sh>(shape: &Sh, offset: usize) -> Result<Sh>
where
    Sh: Shape,
{
    shape.checked_from_linear::<RowMajor>(offset)
}

pub fn intersect_shape<Sh>(lhs: &Sh, rhs: &Sh) -> Result<Sh>
where
    Sh: Shape,
{
    lhs.intersect(rhs)
}

pub fn union_shape<Sh>(lhs: &Sh, rhs: &Sh) -> Result<Sh>
where
    Sh: Shape,
{
    lhs.union(rhs)
}

/// Extent of a binary elementwise operation: only the positions both
/// operands define.
pub fn zip_shape<Sh>(lhs: &Sh, rhs: &Sh) -> Result<Sh>
where
    Sh: Shape,
{
    let shape = lhs.intersect(rhs)?;
    if shape.size() == 0 {
        tracing::debug!(?lhs, ?rhs, "elementwise operands have no common extent");
    }
    Ok(shape)
}
