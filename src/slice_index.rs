use core::ops::RangeFull;

/// One position of a slice specification.
///
/// `Fixed` carries the coordinate the dimension is pinned to; the dimension
/// is dropped from the sliced shape.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SliceIndex {
    All,
    Fixed(usize),
}

impl SliceIndex {
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub const fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }
}

impl From<usize> for SliceIndex {
    fn from(v: usize) -> Self {
        Self::Fixed(v)
    }
}

impl From<RangeFull> for SliceIndex {
    fn from(_: RangeFull) -> Self {
        Self::All
    }
}

/// One position of a replicate specification.
///
/// `Count` carries the number of copies along a new dimension, a size rather
/// than a coordinate.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ReplicateIndex {
    All,
    Count(usize),
}

impl ReplicateIndex {
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub const fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }
}

impl From<usize> for ReplicateIndex {
    fn from(v: usize) -> Self {
        Self::Count(v)
    }
}

impl From<RangeFull> for ReplicateIndex {
    fn from(_: RangeFull) -> Self {
        Self::All
    }
}

#[cfg(test)]
mod tests {
    use super::{ReplicateIndex, SliceIndex};

    #[test]
    fn convert_from_index() {
        let idx = SliceIndex::from(3);

        assert!(idx.is_fixed());
        assert_eq!(idx, SliceIndex::Fixed(3));
    }

    #[test]
    fn convert_from_range_full() {
        assert!(SliceIndex::from(..).is_all());
        assert!(ReplicateIndex::from(..).is_all());
    }

    #[test]
    fn convert_from_count() {
        let idx = ReplicateIndex::from(4);

        assert!(idx.is_count());
        assert_eq!(idx, ReplicateIndex::Count(4));
    }
}
