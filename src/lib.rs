//! Shape, index, slice and stencil-boundary algebra for data-parallel array
//! languages.
//!
//! Every operation is a pure function of its arguments, safe to evaluate
//! independently for each element from any number of threads.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

mod boundary;
pub use boundary::{Boundary, Resolved};

mod dimension;
pub use dimension::{Dimensionality, DynDim, NDims};

mod error;
pub use error::{BoundaryError, Error, Result, ShapeError};

mod order;
pub use order::{ColumnMajor, Order, RowMajor};

mod permute;
pub use permute::{backpermute, backpermute_offsets, permute, permute_offsets};

mod routine;
pub use routine::{
    checked_from_index, checked_to_index, from_index, intersect_shape, to_index, union_shape,
    zip_shape,
};

mod shape;
pub use shape::{Indices, Shape, SignedIndex};

mod slice_index;
pub use slice_index::{ReplicateIndex, SliceIndex};

mod slice_info;
pub use slice_info::{ReplicateInfo, SliceInfo};

mod stencil;
pub use stencil::{stencil, stencil2, Neighbourhood, Source};
