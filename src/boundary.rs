#[cfg(not(feature = "std"))]
use alloc::sync::Arc;
use core::fmt;
#[cfg(feature = "std")]
use std::sync::Arc;

use num_traits::Zero;

use crate::{Shape, SignedIndex};

type BoundaryFn<T> = Arc<dyn Fn(&[isize]) -> T + Send + Sync>;

/// What a stencil reads at coordinates outside its source array.
#[derive(Clone)]
pub enum Boundary<T> {
    /// Repeat the nearest edge element.
    Clamp,
    /// Reflect about the edge, repeating the edge element.
    Mirror,
    /// Wrap around to the opposite edge.
    Wrap,
    /// Read a fixed value.
    Constant(T),
    /// Compute the value from the requested coordinate.
    Function(BoundaryFn<T>),
}

impl<T> fmt::Debug for Boundary<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clamp => f.write_str("Clamp"),
            Self::Mirror => f.write_str("Mirror"),
            Self::Wrap => f.write_str("Wrap"),
            Self::Constant(v) => f.debug_tuple("Constant").field(v).finish(),
            Self::Function(_) => f.write_str("Function(..)"),
        }
    }
}

impl<T> Boundary<T> {
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&[isize]) -> T + Send + Sync + 'static,
    {
        Self::Function(Arc::new(f))
    }

    /// Zero padding.
    pub fn zero() -> Self
    where
        T: Zero,
    {
        Self::Constant(T::zero())
    }

    /// Resolves `requested` against `shape`.
    ///
    /// In-range coordinates resolve to themselves under every policy.
    /// Otherwise `Clamp`, `Mirror` and `Wrap` map each dimension back into
    /// range independently, while `Constant` and `Function` produce the value
    /// directly. A dimension of extent zero resolves to coordinate zero.
    pub fn resolve<Sh>(&self, shape: &Sh, requested: &Sh::Signed) -> Resolved<Sh, T>
    where
        Sh: Shape,
        T: Clone,
    {
        debug_assert_eq!(shape.n_dims(), requested.n_dims());

        let in_range = requested
            .as_ref()
            .iter()
            .zip(shape.as_ref())
            .all(|(&r, &n)| r >= 0 && (r as usize) < n);

        let axis_fn: fn(isize, usize) -> usize = match self {
            _ if in_range => |r, _| r as usize,
            Self::Clamp => clamp,
            Self::Mirror => mirror,
            Self::Wrap => wrap,
            Self::Constant(v) => return Resolved::Value(v.clone()),
            Self::Function(f) => return Resolved::Value(f(requested.as_ref())),
        };

        let mut index = shape.zeroed();
        for ((dst, &r), &n) in index
            .as_mut()
            .iter_mut()
            .zip(requested.as_ref())
            .zip(shape.as_ref())
        {
            *dst = axis_fn(r, n);
        }
        Resolved::Index(index)
    }
}

/// Outcome of resolving a stencil coordinate.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Resolved<Sh, T> {
    /// An in-range index to read from the source.
    Index(Sh),
    /// A value supplied by the boundary itself.
    Value(T),
}

fn clamp(r: isize, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    r.clamp(0, n as isize - 1) as usize
}

fn mirror(r: isize, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let period = 2 * n as isize;
    let m = r.rem_euclid(period);
    if m < n as isize {
        m as usize
    } else {
        (period - m - 1) as usize
    }
}

fn wrap(r: isize, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    r.rem_euclid(n as isize) as usize
}
