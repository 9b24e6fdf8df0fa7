use core::num::TryFromIntError;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error(transparent)]
    Boundary(#[from] BoundaryError),
    #[error(transparent)]
    TryFromInt(#[from] TryFromIntError),
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ShapeError {
    #[error("rank mismatch: expected {expected} dimensions, found {found}")]
    RankMismatch { expected: usize, found: usize },
    #[error("index {index} is out of range for axis {axis} of extent {extent}")]
    OutOfRangeIndex {
        axis: usize,
        index: usize,
        extent: usize,
    },
    #[error("offset {offset} is out of range for shape of size {size}")]
    OffsetOutOfRange { offset: usize, size: usize },
    #[error("buffer holds {found} elements but the shape requires {expected}")]
    LengthMismatch { expected: usize, found: usize },
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum BoundaryError {
    #[error("stencil radius {radius} on axis {axis} does not fit within extent {extent}")]
    DegenerateRadius {
        axis: usize,
        radius: usize,
        extent: usize,
    },
}

impl ShapeError {
    pub(crate) fn check_rank(expected: usize, found: usize) -> core::result::Result<(), Self> {
        if expected == found {
            Ok(())
        } else {
            Err(Self::RankMismatch { expected, found })
        }
    }
}
