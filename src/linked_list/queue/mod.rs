//! # String Queue
//!
//! A singly linked queue of owned strings with O(1) insertion at both ends
//! and O(1) removal from the front.
//!
//! ## Core Components
//!
//! - [`StrQueue`]: the queue itself. Owns every node and every string copy.
//! - [`iter::Iter`]: a borrowing front-to-back iterator.
//! - [`handle`]: a boolean-returning facade for callers holding possibly absent
//!   queue handles, strings or buffers.
//! - [`locked::LockedStrQueue`]: a spin-locked wrapper for sharing one queue
//!   between threads.
//!
//! ## Layout
//!
//! Nodes are linked through raw `NonNull` pointers. The queue is the sole owner
//! of the chain starting at `head`; `tail` is a non-owning pointer to the last
//! node of that chain and exists only to make [`StrQueue::insert_tail`] O(1).
//! At every call boundary:
//!
//! - `len == 0`, `head` is `None` and `tail` is `None` all hold or none do.
//! - The chain from `head` has exactly `len` nodes and ends at `tail`.
//!
//! [`StrQueue::reverse`] and [`StrQueue::sort`] rewire existing nodes only; they
//! never allocate, free or copy a value.

use alloc::{
    alloc::{Layout, alloc, handle_alloc_error},
    boxed::Box,
};
use core::{fmt, marker::PhantomData, ptr::NonNull};

use tracing::{debug, trace};

use crate::error::QueueError;

use self::{
    iter::Iter,
    node::{Chain, Node},
};

pub mod handle;
pub mod iter;
pub mod locked;
mod node;
mod sort;

#[cfg(test)]
mod tests;

/// A singly linked queue of owned strings.
pub struct StrQueue {
    head: Chain,
    tail: Chain,
    len: usize,
    _owns: PhantomData<Box<Node>>,
}

impl StrQueue {
    /// Creates a new, empty queue.
    pub const fn new() -> Self {
        StrQueue {
            head: None,
            tail: None,
            len: 0,
            _owns: PhantomData,
        }
    }

    /// Creates a new, empty queue on the heap, reporting allocation failure
    /// instead of aborting.
    pub fn try_new() -> Result<Box<Self>, QueueError> {
        let layout = Layout::new::<Self>();
        let ptr = NonNull::new(unsafe { alloc(layout) }.cast::<Self>())
            .ok_or(QueueError::AllocationFailure)?;
        unsafe {
            ptr.as_ptr().write(Self::new());
            Ok(Box::from_raw(ptr.as_ptr()))
        }
    }

    /// Inserts a copy of `s` at the front of the queue.
    pub fn insert_head(&mut self, s: &str) -> Result<(), QueueError> {
        let mut node = alloc_node(s)?;
        unsafe { node.as_mut().set_next(self.head) };
        self.head = Some(node);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.len += 1;
        trace!(len = self.len, "inserted at head");
        Ok(())
    }

    /// Appends a copy of `s` at the back of the queue.
    pub fn insert_tail(&mut self, s: &str) -> Result<(), QueueError> {
        let node = alloc_node(s)?;
        self.link_tail(node);
        Ok(())
    }

    fn link_tail(&mut self, node: NonNull<Node>) {
        match self.tail {
            Some(mut tail) => unsafe { tail.as_mut().set_next(Some(node)) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
        trace!(len = self.len, "inserted at tail");
    }

    /// Removes the front element, copying its text into `out`.
    ///
    /// At most `out.len() - 1` bytes are copied and the rest of `out` is
    /// zero-filled, so the copy is always terminated. Longer values are
    /// truncated silently. Returns the number of text bytes copied.
    ///
    /// Fails with [`QueueError::InvalidArgument`] if `out` has no room for the
    /// terminator and [`QueueError::EmptyQueue`] if there is nothing to remove;
    /// the queue is left untouched in both cases.
    pub fn remove_head(&mut self, out: &mut [u8]) -> Result<usize, QueueError> {
        if out.is_empty() {
            return Err(QueueError::InvalidArgument);
        }
        let value = self.pop_head().ok_or(QueueError::EmptyQueue)?;

        let copied = value.len().min(out.len() - 1);
        out[..copied].copy_from_slice(&value.as_bytes()[..copied]);
        out[copied..].fill(0);
        if copied < value.len() {
            trace!(len = value.len(), copied, "removed value truncated");
        }
        Ok(copied)
    }

    /// Removes the front element and returns its value.
    pub fn pop_head(&mut self) -> Option<Box<str>> {
        let head = self.head?;
        unsafe {
            self.head = head.as_ref().next();
            if self.head.is_none() {
                self.tail = None;
            }
            self.len -= 1;
            trace!(len = self.len, "removed head");
            Some(Node::free(head))
        }
    }

    /// Returns the number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the front element, if any.
    pub fn head(&self) -> Option<&str> {
        self.head.map(|node| unsafe { node.as_ref() }.value())
    }

    /// Returns the back element, if any.
    pub fn tail(&self) -> Option<&str> {
        self.tail.map(|node| unsafe { node.as_ref() }.value())
    }

    /// Returns a front-to-back iterator over the elements.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.head, self.len)
    }

    /// Reverses the order of the elements in place.
    ///
    /// Walks the chain once, pointing each node back at the node visited
    /// before it. No node is allocated or freed.
    pub fn reverse(&mut self) {
        if self.len < 2 {
            return;
        }

        let mut prev: Chain = None;
        let mut current = self.head;
        while let Some(mut node) = current {
            unsafe {
                let node = node.as_mut();
                current = node.next();
                node.set_next(prev);
            }
            prev = Some(node);
        }

        self.tail = self.head;
        self.head = prev;
        debug!(len = self.len, "reversed queue");
    }

    /// Sorts the elements into ascending byte-wise order.
    ///
    /// This is a merge sort that relinks the existing nodes: values are never
    /// copied or moved, and nothing is allocated. Equal values keep their
    /// relative order.
    pub fn sort(&mut self) {
        if self.len < 2 {
            return;
        }

        let (head, tail) = unsafe { sort::merge_sort(self.head) };
        self.head = head;
        self.tail = tail;
        debug!(len = self.len, "sorted queue");
    }

    /// Removes and releases every element.
    pub fn clear(&mut self) {
        while self.pop_head().is_some() {}
    }
}

impl Default for StrQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for StrQueue {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for StrQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Appends copies of every string, in order.
///
/// Like the std collections, an allocation failure here goes to
/// [`handle_alloc_error`] with the layout of the request that failed (the node
/// or the string copy).
impl<'a> Extend<&'a str> for StrQueue {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for s in iter {
            let node = match Node::try_alloc(s) {
                Ok(node) => node,
                Err(failed) => handle_alloc_error(failed),
            };
            self.link_tail(node);
        }
    }
}

impl<'a> FromIterator<&'a str> for StrQueue {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<'a> IntoIterator for &'a StrQueue {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

fn alloc_node(s: &str) -> Result<NonNull<Node>, QueueError> {
    Node::try_alloc(s).map_err(|_| QueueError::AllocationFailure)
}

unsafe impl Send for StrQueue {}
unsafe impl Sync for StrQueue {}
