use core::{iter::FusedIterator, marker::PhantomData};

use crate::{Order, Shape};

/// Every index of a shape, visited in storage order `O`.
#[derive(Clone, Debug)]
pub struct Indices<Sh, O>
where
    Sh: Shape,
{
    shape: Sh,
    next: Option<Sh>,
    len: usize,
    phantom: PhantomData<O>,
}

impl<Sh, O> Indices<Sh, O>
where
    Sh: Shape,
    O: Order,
{
    pub(crate) fn new(shape: &Sh) -> Self {
        let len = shape.size();
        Self {
            shape: shape.clone(),
            next: if len == 0 { None } else { Some(shape.zeroed()) },
            len,
            phantom: PhantomData,
        }
    }
}

impl<Sh, O> Iterator for Indices<Sh, O>
where
    Sh: Shape,
    O: Order,
{
    type Item = Sh;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.len -= 1;
        if self.len > 0 {
            let mut successor = current.clone();
            O::increment(self.shape.as_ref(), successor.as_mut());
            self.next = Some(successor);
        }
        Some(current)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<Sh, O> ExactSizeIterator for Indices<Sh, O>
where
    Sh: Shape,
    O: Order,
{
}

impl<Sh, O> FusedIterator for Indices<Sh, O>
where
    Sh: Shape,
    O: Order,
{
}
