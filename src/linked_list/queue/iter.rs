use core::{iter::FusedIterator, marker::PhantomData};

use super::node::Chain;

/// A front-to-back iterator over the elements of a [`StrQueue`](super::StrQueue).
///
/// The iterator borrows the queue, so the chain cannot change while it is alive.
pub struct Iter<'a> {
    current: Chain,
    remaining: usize,
    _queue: PhantomData<&'a str>,
}

impl<'a> Iter<'a> {
    pub(super) fn new(head: Chain, len: usize) -> Self {
        Self {
            current: head,
            remaining: len,
            _queue: PhantomData,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = unsafe { self.current?.as_ref() };
        self.current = node.next();
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

unsafe impl Send for Iter<'_> {}
unsafe impl Sync for Iter<'_> {}
