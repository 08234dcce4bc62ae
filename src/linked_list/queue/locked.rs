use alloc::boxed::Box;

use spin::Mutex;

use crate::error::QueueError;

use super::StrQueue;

/// A [`StrQueue`] behind a spin lock, for sharing one queue between threads.
///
/// [`StrQueue`] itself does no locking; every operation here takes the lock
/// for the duration of a single queue call.
#[derive(Default)]
pub struct LockedStrQueue {
    inner: Mutex<StrQueue>,
}

impl LockedStrQueue {
    /// Creates a new, empty locked queue.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(StrQueue::new()),
        }
    }

    /// Inserts a copy of `s` at the front. See [`StrQueue::insert_head`].
    pub fn insert_head(&self, s: &str) -> Result<(), QueueError> {
        self.inner.lock().insert_head(s)
    }

    /// Appends a copy of `s` at the back. See [`StrQueue::insert_tail`].
    pub fn insert_tail(&self, s: &str) -> Result<(), QueueError> {
        self.inner.lock().insert_tail(s)
    }

    /// Removes the front element into `out`. See [`StrQueue::remove_head`].
    pub fn remove_head(&self, out: &mut [u8]) -> Result<usize, QueueError> {
        self.inner.lock().remove_head(out)
    }

    /// Removes the front element and returns its value.
    pub fn pop_head(&self) -> Option<Box<str>> {
        self.inner.lock().pop_head()
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Reverses the elements in place. See [`StrQueue::reverse`].
    pub fn reverse(&self) {
        self.inner.lock().reverse();
    }

    /// Sorts the elements in place. See [`StrQueue::sort`].
    pub fn sort(&self) {
        self.inner.lock().sort();
    }

    /// Runs `f` with exclusive access to the queue, for multi-step operations
    /// that must not interleave with other threads.
    pub fn with<R>(&self, f: impl FnOnce(&mut StrQueue) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Consumes the lock and returns the queue.
    pub fn into_inner(self) -> StrQueue {
        self.inner.into_inner()
    }
}

impl From<StrQueue> for LockedStrQueue {
    fn from(queue: StrQueue) -> Self {
        Self {
            inner: Mutex::new(queue),
        }
    }
}
