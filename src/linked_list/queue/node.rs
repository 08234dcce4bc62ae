use alloc::{
    alloc::{Layout, alloc, dealloc},
    boxed::Box,
    string::String,
};
use core::ptr::NonNull;

use tracing::warn;

/// A raw chain of nodes: the first node, or `None` for an empty chain.
pub(super) type Chain = Option<NonNull<Node>>;

/// One queue element: an owned copy of a string and the link to the next node.
pub(super) struct Node {
    value: Box<str>,
    next: Chain,
}

impl Node {
    /// Allocates a detached node holding a copy of `s`.
    ///
    /// The node storage is obtained first and the string copy second; if the
    /// copy cannot be allocated the node storage is released before returning,
    /// so a failure never leaks. On failure, returns the layout of the request
    /// that could not be satisfied.
    pub(super) fn try_alloc(s: &str) -> Result<NonNull<Node>, Layout> {
        let layout = Layout::new::<Node>();
        let Some(ptr) = NonNull::new(unsafe { alloc(layout) }.cast::<Node>()) else {
            warn!(size = layout.size(), "node allocation failed");
            return Err(layout);
        };

        let value = match copy_str(s) {
            Ok(value) => value,
            Err(failed) => {
                unsafe { dealloc(ptr.as_ptr().cast(), layout) };
                warn!(len = s.len(), "string copy allocation failed");
                return Err(failed);
            }
        };

        unsafe { ptr.as_ptr().write(Node { value, next: None }) };
        Ok(ptr)
    }

    /// Releases a node allocated by [`Node::try_alloc`], returning its value.
    ///
    /// # Safety
    ///
    /// `ptr` must come from [`Node::try_alloc`], must no longer be reachable
    /// from any chain, and must not be used afterwards.
    pub(super) unsafe fn free(ptr: NonNull<Node>) -> Box<str> {
        let node = unsafe { Box::from_raw(ptr.as_ptr()) };
        node.value
    }

    #[inline]
    pub(super) fn value(&self) -> &str {
        &self.value
    }

    #[inline]
    pub(super) fn next(&self) -> Chain {
        self.next
    }

    #[inline]
    pub(super) fn set_next(&mut self, next: Chain) {
        self.next = next;
    }
}

/// Copies `s` into a fresh allocation of exactly its length.
fn copy_str(s: &str) -> Result<Box<str>, Layout> {
    let mut copy = String::new();
    copy.try_reserve_exact(s.len())
        .map_err(|_| Layout::for_value(s))?;
    copy.push_str(s);
    Ok(copy.into_boxed_str())
}
