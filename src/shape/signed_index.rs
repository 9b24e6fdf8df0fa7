#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::{
    fmt::Debug,
    hash::Hash,
    ops::{Index, IndexMut},
};

/// Per-dimension signed integers: strides, or coordinates that may fall
/// outside a shape (stencil neighbours).
pub trait SignedIndex:
    AsRef<[isize]>
    + AsMut<[isize]>
    + Clone
    + Debug
    + Eq
    + Hash
    + Index<usize, Output = isize>
    + IndexMut<usize, Output = isize>
    + PartialEq
    + Send
    + Sync
{
    fn n_dims(&self) -> usize;
}

impl<const N: usize> SignedIndex for [isize; N] {
    #[inline]
    fn n_dims(&self) -> usize {
        N
    }
}

impl SignedIndex for Vec<isize> {
    #[inline]
    fn n_dims(&self) -> usize {
        self.len()
    }
}
