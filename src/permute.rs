#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::{Result, RowMajor, Shape, ShapeError};

/// Destination offset of every source element, in row-major source order.
///
/// `f` maps a source index to its destination index, or to `None` to drop
/// the element. Destinations are checked against `dst_shape`.
pub fn permute_offsets<Sh, Dh, F>(
    src_shape: &Sh,
    dst_shape: &Dh,
    f: F,
) -> Result<Vec<Option<usize>>>
where
    Sh: Shape,
    Dh: Shape,
    F: Fn(&Sh) -> Option<Dh>,
{
    let _span = tracing::trace_span!("permute", src = ?src_shape, dst = ?dst_shape).entered();

    let offsets = src_shape
        .indices::<RowMajor>()
        .map(|index| match f(&index) {
            Some(target) => dst_shape.checked_to_linear::<RowMajor>(&target).map(Some),
            None => Ok(None),
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::trace!(
        dropped = offsets.iter().filter(|x| x.is_none()).count(),
        "permutation resolved"
    );
    Ok(offsets)
}

/// Source offset read by every destination element, in row-major
/// destination order. Sources are checked against `src_shape`.
pub fn backpermute_offsets<Sh, Dh, F>(dst_shape: &Dh, src_shape: &Sh, f: F) -> Result<Vec<usize>>
where
    Sh: Shape,
    Dh: Shape,
    F: Fn(&Dh) -> Sh,
{
    dst_shape
        .indices::<RowMajor>()
        .map(|index| src_shape.checked_to_linear::<RowMajor>(&f(&index)))
        .collect()
}

/// Scatters `src` into a copy of `defaults`, merging collisions with
/// `combine(incoming, existing)`.
pub fn permute<Sh, Dh, T, C, F>(
    combine: C,
    defaults: &[T],
    dst_shape: &Dh,
    src: &[T],
    src_shape: &Sh,
    f: F,
) -> Result<Vec<T>>
where
    Sh: Shape,
    Dh: Shape,
    T: Clone,
    C: Fn(T, T) -> T,
    F: Fn(&Sh) -> Option<Dh>,
{
    check_len(dst_shape, defaults.len())?;
    check_len(src_shape, src.len())?;

    let mut out = defaults.to_vec();
    for (value, target) in src.iter().zip(permute_offsets(src_shape, dst_shape, f)?) {
        if let Some(offset) = target {
            out[offset] = combine(value.clone(), out[offset].clone());
        }
    }
    Ok(out)
}

/// Gathers one element of `src` for every index of `dst_shape`.
pub fn backpermute<Sh, Dh, T, F>(
    dst_shape: &Dh,
    src: &[T],
    src_shape: &Sh,
    f: F,
) -> Result<Vec<T>>
where
    Sh: Shape,
    Dh: Shape,
    T: Clone,
    F: Fn(&Dh) -> Sh,
{
    check_len(src_shape, src.len())?;
    Ok(backpermute_offsets(dst_shape, src_shape, f)?
        .into_iter()
        .map(|offset| src[offset].clone())
        .collect())
}

fn check_len<Sh>(shape: &Sh, found: usize) -> Result<()>
where
    Sh: Shape,
{
    let expected = shape.size();
    if expected == found {
        Ok(())
    } else {
        Err(ShapeError::LengthMismatch { expected, found }.into())
    }
}
