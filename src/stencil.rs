#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::{Boundary, BoundaryError, Resolved, Result, RowMajor, Shape, ShapeError, SignedIndex};

/// A rectangular window of `2 * radius + 1` positions per dimension, centred
/// on the focal element.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Neighbourhood<Sh>
where
    Sh: Shape,
{
    radii: Sh,
}

impl<Sh> Neighbourhood<Sh>
where
    Sh: Shape,
{
    pub fn new(radii: Sh) -> Self {
        Self { radii }
    }

    pub fn radii(&self) -> &Sh {
        &self.radii
    }

    /// Extent of the window in each dimension.
    ///
    /// # Panics
    ///
    /// Panics if `2 * radius + 1` overflows `usize` in any dimension. Radii
    /// accepted by [`Neighbourhood::validate`] never do.
    pub fn window(&self) -> Sh {
        let mut window = self.radii.clone();
        window.as_mut().iter_mut().for_each(|r| {
            assert!(*r <= (usize::MAX - 1) / 2, "stencil radius {} overflows", r);
            *r = 2 * *r + 1;
        });
        window
    }

    /// Number of positions in the window.
    ///
    /// # Panics
    ///
    /// Panics under the same condition as [`Neighbourhood::window`].
    pub fn len(&self) -> usize {
        self.window().size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rejects radii that do not fit inside `shape`, where mirroring and
    /// wrapping stop being well defined.
    pub fn validate(&self, shape: &Sh) -> Result<()> {
        ShapeError::check_rank(shape.n_dims(), self.radii.n_dims())?;
        for (axis, (&radius, &extent)) in
            self.radii.as_ref().iter().zip(shape.as_ref()).enumerate()
        {
            if radius >= extent {
                tracing::debug!(axis, radius, extent, "rejecting stencil radius");
                return Err(BoundaryError::DegenerateRadius {
                    axis,
                    radius,
                    extent,
                }
                .into());
            }
        }
        Ok(())
    }

    /// Offsets of every window position relative to the focal element, in
    /// row-major window order.
    ///
    /// # Panics
    ///
    /// Panics under the same condition as [`Neighbourhood::window`].
    pub fn offsets(&self) -> Result<Vec<Sh::Signed>> {
        let radii = self.radii.try_to_signed()?;
        self.window()
            .indices::<RowMajor>()
            .map(|position| -> Result<Sh::Signed> {
                let mut offset = position.try_to_signed()?;
                for (o, &r) in offset.as_mut().iter_mut().zip(radii.as_ref()) {
                    *o -= r;
                }
                Ok(offset)
            })
            .collect()
    }
}

/// A row-major source array together with the boundary it is read under.
#[derive(Clone, Debug)]
pub struct Source<'a, Sh, T>
where
    Sh: Shape,
{
    shape: Sh,
    data: &'a [T],
    boundary: Boundary<T>,
}

impl<'a, Sh, T> Source<'a, Sh, T>
where
    Sh: Shape,
    T: Clone,
{
    pub fn new(shape: Sh, data: &'a [T], boundary: Boundary<T>) -> Result<Self> {
        let expected = shape.size();
        if data.len() != expected {
            return Err(ShapeError::LengthMismatch {
                expected,
                found: data.len(),
            }
            .into());
        }
        Ok(Self {
            shape,
            data,
            boundary,
        })
    }

    pub fn shape(&self) -> &Sh {
        &self.shape
    }

    pub fn boundary(&self) -> &Boundary<T> {
        &self.boundary
    }

    /// Reads the element at `requested`, which may lie outside the array.
    pub fn read(&self, requested: &Sh::Signed) -> Result<T> {
        ShapeError::check_rank(self.shape.n_dims(), requested.n_dims())?;
        match self.boundary.resolve(&self.shape, requested) {
            Resolved::Index(index) => {
                let offset = crate::checked_to_index(&self.shape, &index)?;
                Ok(self.data[offset].clone())
            }
            Resolved::Value(v) => Ok(v),
        }
    }

    fn gather(&self, focal: &Sh::Signed, offsets: &[Sh::Signed], buf: &mut Vec<T>) -> Result<()> {
        buf.clear();
        for offset in offsets {
            let mut requested = focal.clone();
            for (r, &o) in requested.as_mut().iter_mut().zip(offset.as_ref()) {
                *r += o;
            }
            buf.push(self.read(&requested)?);
        }
        Ok(())
    }
}

/// Applies `f` to the neighbourhood of every element of `source`.
///
/// The output has the source's shape and is laid out row-major. `f` sees the
/// neighbourhood values in row-major window order.
pub fn stencil<Sh, T, U, F>(
    source: &Source<'_, Sh, T>,
    neighbourhood: &Neighbourhood<Sh>,
    f: F,
) -> Result<Vec<U>>
where
    Sh: Shape,
    T: Clone,
    F: Fn(&[T]) -> U,
{
    if source.shape().size() == 0 {
        ShapeError::check_rank(source.shape().n_dims(), neighbourhood.radii().n_dims())?;
        return Ok(Vec::new());
    }
    neighbourhood.validate(source.shape())?;
    let offsets = neighbourhood.offsets()?;
    let _span = tracing::trace_span!(
        "stencil",
        shape = ?source.shape(),
        radii = ?neighbourhood.radii()
    )
    .entered();

    let mut out = Vec::with_capacity(source.shape().size());
    let mut buf = Vec::with_capacity(offsets.len());
    for index in source.shape().indices::<RowMajor>() {
        let focal = index.try_to_signed()?;
        source.gather(&focal, &offsets, &mut buf)?;
        out.push(f(&buf));
    }
    Ok(out)
}

/// Applies `f` to matching neighbourhoods of two sources.
///
/// The output covers only the extent both sources share. Each source is read
/// under its own boundary.
pub fn stencil2<Sh, T, V, U, F>(
    lhs: &Source<'_, Sh, T>,
    rhs: &Source<'_, Sh, V>,
    neighbourhood: &Neighbourhood<Sh>,
    f: F,
) -> Result<(Sh, Vec<U>)>
where
    Sh: Shape,
    T: Clone,
    V: Clone,
    F: Fn(&[T], &[V]) -> U,
{
    let shape = crate::zip_shape(lhs.shape(), rhs.shape())?;
    if shape.size() == 0 {
        ShapeError::check_rank(shape.n_dims(), neighbourhood.radii().n_dims())?;
        return Ok((shape, Vec::new()));
    }
    neighbourhood.validate(lhs.shape())?;
    neighbourhood.validate(rhs.shape())?;
    let offsets = neighbourhood.offsets()?;
    let _span = tracing::trace_span!(
        "stencil2",
        shape = ?shape,
        radii = ?neighbourhood.radii()
    )
    .entered();

    let mut out = Vec::with_capacity(shape.size());
    let mut lhs_buf = Vec::with_capacity(offsets.len());
    let mut rhs_buf = Vec::with_capacity(offsets.len());
    for index in shape.indices::<RowMajor>() {
        let focal = index.try_to_signed()?;
        lhs.gather(&focal, &offsets, &mut lhs_buf)?;
        rhs.gather(&focal, &offsets, &mut rhs_buf)?;
        out.push(f(&lhs_buf, &rhs_buf));
    }
    Ok((shape, out))
}

#[cfg(test)]
mod tests {
    #[cfg(not(feature = "std"))]
    use alloc::{vec, vec::Vec};

    use super::{stencil, stencil2, Neighbourhood, Source};
    use crate::{Boundary, BoundaryError, Error, Result, ShapeError};

    #[test]
    fn window_and_offsets() -> Result<()> {
        let n = Neighbourhood::new([1_usize, 0]);

        assert_eq!(n.window(), [3, 1]);
        assert_eq!(n.len(), 3);
        assert_eq!(n.offsets()?, vec![[-1, 0], [0, 0], [1, 0]]);

        Ok(())
    }

    #[test]
    #[should_panic]
    fn window_panics_on_overflowing_radius() {
        Neighbourhood::new([usize::MAX / 2 + 1]).window();
    }

    #[test]
    fn validate_rejects_degenerate_radius() {
        let n = Neighbourhood::new([1_usize, 2]);

        assert_eq!(n.validate(&[3, 3]), Ok(()));
        assert_eq!(
            n.validate(&[3, 2]),
            Err(Error::Boundary(BoundaryError::DegenerateRadius {
                axis: 1,
                radius: 2,
                extent: 2
            }))
        );
        assert!(Neighbourhood::new(vec![0_usize]).validate(&vec![0]).is_err());
        assert!(Neighbourhood::new(vec![0_usize]).validate(&vec![1, 1]).is_err());
    }

    #[test]
    fn source_rejects_length_mismatch() {
        let data = [1, 2, 3];

        assert_eq!(
            Source::new([2_usize, 2], &data, Boundary::Clamp).err(),
            Some(Error::Shape(ShapeError::LengthMismatch {
                expected: 4,
                found: 3
            }))
        );
    }

    #[test]
    fn read_under_each_boundary() -> Result<()> {
        let data = [10, 11, 12, 13, 14];

        assert_eq!(Source::new([5_usize], &data, Boundary::Clamp)?.read(&[-1])?, 10);
        assert_eq!(Source::new([5_usize], &data, Boundary::Clamp)?.read(&[5])?, 14);
        assert_eq!(Source::new([5_usize], &data, Boundary::Wrap)?.read(&[-1])?, 14);
        assert_eq!(Source::new([5_usize], &data, Boundary::Wrap)?.read(&[5])?, 10);
        assert_eq!(Source::new([5_usize], &data, Boundary::Mirror)?.read(&[-2])?, 11);
        assert_eq!(Source::new([5_usize], &data, Boundary::Constant(0))?.read(&[7])?, 0);
        assert_eq!(
            Source::new([5_usize], &data, Boundary::function(|c| c[0] as i32 * 100))?
                .read(&[-3])?,
            -300
        );

        Ok(())
    }

    #[test]
    fn read_empty_source_fails() -> Result<()> {
        let data: [i32; 0] = [];
        let source = Source::new([0_usize], &data, Boundary::Clamp)?;

        assert!(source.read(&[0]).is_err());

        Ok(())
    }

    #[test]
    fn read_rejects_rank_mismatch() -> Result<()> {
        let data = (0..12).collect::<Vec<i32>>();
        let source = Source::new(vec![3_usize, 4], &data, Boundary::Clamp)?;

        assert_eq!(
            source.read(&vec![1]),
            Err(Error::Shape(ShapeError::RankMismatch {
                expected: 2,
                found: 1
            }))
        );
        assert_eq!(source.read(&vec![1, 0])?, 4);

        Ok(())
    }

    #[test]
    fn sum_three_points_with_clamp() -> Result<()> {
        let data = [1, 2, 3, 4];
        let source = Source::new([4_usize], &data, Boundary::Clamp)?;
        let out = stencil(&source, &Neighbourhood::new([1_usize]), |xs| {
            xs.iter().sum::<i32>()
        })?;

        assert_eq!(out, vec![4, 6, 9, 11]);

        Ok(())
    }

    #[test]
    fn neighbourhood_values_are_row_major() -> Result<()> {
        let data = (0..9).collect::<Vec<i32>>();
        let source = Source::new([3_usize, 3], &data, Boundary::zero())?;
        let out = stencil(&source, &Neighbourhood::new([1_usize, 1]), |xs| xs.to_vec())?;

        assert_eq!(out[4], data);
        assert_eq!(out[0], vec![0, 0, 0, 0, 0, 1, 0, 3, 4]);

        Ok(())
    }

    #[test]
    fn stencil_rejects_degenerate_radius() -> Result<()> {
        let data = [1, 2];
        let source = Source::new([2_usize], &data, Boundary::Wrap)?;

        assert!(stencil(&source, &Neighbourhood::new([2_usize]), |xs| xs.len()).is_err());

        Ok(())
    }

    #[test]
    fn stencil2_uses_intersection_and_own_boundaries() -> Result<()> {
        let a = [1, 2, 3, 4, 5, 6];
        let b = [10, 20, 30, 40];
        let lhs = Source::new([2_usize, 3], &a, Boundary::Clamp)?;
        let rhs = Source::new([4_usize, 1], &b, Boundary::Constant(0))?;
        let (shape, out) = stencil2(&lhs, &rhs, &Neighbourhood::new([0_usize, 0]), |x, y| {
            x[0] + y[0]
        })?;

        assert_eq!(shape, [2, 1]);
        assert_eq!(out, vec![11, 24]);

        let (_, edges) = stencil2(&lhs, &rhs, &Neighbourhood::new([1_usize, 0]), |x, y| {
            (x[0], y[0])
        })?;

        assert_eq!(edges, vec![(1, 0), (1, 10)]);

        Ok(())
    }

    #[test]
    fn empty_sources_yield_empty_output() -> Result<()> {
        let a = [1, 2, 3, 4, 5, 6];
        let empty: [i32; 0] = [];
        let lhs = Source::new([2_usize, 3], &a, Boundary::Clamp)?;
        let rhs = Source::new([0_usize, 3], &empty, Boundary::Constant(0))?;

        let (shape, out) = stencil2(&lhs, &rhs, &Neighbourhood::new([0_usize, 0]), |x, y| {
            x[0] + y[0]
        })?;

        assert_eq!(shape, [0, 3]);
        assert_eq!(out, Vec::<i32>::new());

        let out = stencil(&rhs, &Neighbourhood::new([1_usize, 1]), |xs| xs.len())?;

        assert_eq!(out, Vec::<usize>::new());
        assert!(
            stencil(
                &Source::new(vec![0_usize, 3], &empty, Boundary::Clamp)?,
                &Neighbourhood::new(vec![0_usize]),
                |xs| xs.len()
            )
            .is_err()
        );

        Ok(())
    }
}
