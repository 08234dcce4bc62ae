//! Boolean-returning queue operations over possibly absent arguments.
//!
//! These mirror [`StrQueue`]'s methods for callers that hold an optional queue
//! handle, string or output buffer. An absent argument is reported as
//! [`QueueError::InvalidArgument`] in the log and as `false` (or a no-op) to the
//! caller; the queue is never modified by a failed call.

use alloc::boxed::Box;

use tracing::warn;

use crate::error::QueueError;

use super::StrQueue;

/// Creates an empty queue, or `None` if its storage could not be allocated.
pub fn queue_new() -> Option<Box<StrQueue>> {
    StrQueue::try_new()
        .inspect_err(|err| warn!(%err, "queue allocation failed"))
        .ok()
}

/// Releases a queue together with every element it holds.
///
/// Passing `None` does nothing.
pub fn queue_free(queue: Option<Box<StrQueue>>) {
    drop(queue);
}

/// Inserts a copy of `s` at the front of `queue`.
pub fn queue_insert_head(queue: Option<&mut StrQueue>, s: Option<&str>) -> bool {
    insert_with(queue, s, "insert_head", StrQueue::insert_head).is_ok()
}

/// Appends a copy of `s` at the back of `queue`.
pub fn queue_insert_tail(queue: Option<&mut StrQueue>, s: Option<&str>) -> bool {
    insert_with(queue, s, "insert_tail", StrQueue::insert_tail).is_ok()
}

/// Removes the front element of `queue`, copying its text into `out`.
///
/// See [`StrQueue::remove_head`] for the truncation rules.
pub fn queue_remove_head(queue: Option<&mut StrQueue>, out: Option<&mut [u8]>) -> bool {
    remove_into(queue, out).is_ok()
}

/// Returns the number of elements in `queue`, or `0` if it is absent.
pub fn queue_size(queue: Option<&StrQueue>) -> usize {
    queue.map_or(0, StrQueue::len)
}

/// Reverses `queue` in place. Does nothing if it is absent.
pub fn queue_reverse(queue: Option<&mut StrQueue>) {
    if let Some(queue) = queue {
        queue.reverse();
    }
}

/// Sorts `queue` in place. Does nothing if it is absent.
pub fn queue_sort(queue: Option<&mut StrQueue>) {
    if let Some(queue) = queue {
        queue.sort();
    }
}

fn insert_with(
    queue: Option<&mut StrQueue>,
    s: Option<&str>,
    op: &'static str,
    insert: fn(&mut StrQueue, &str) -> Result<(), QueueError>,
) -> Result<(), QueueError> {
    let queue = present(queue, op)?;
    let s = present(s, op)?;
    insert(queue, s)
}

fn remove_into(queue: Option<&mut StrQueue>, out: Option<&mut [u8]>) -> Result<usize, QueueError> {
    let queue = present(queue, "remove_head")?;
    let out = present(out, "remove_head")?;
    queue.remove_head(out)
}

fn present<T>(arg: Option<T>, op: &'static str) -> Result<T, QueueError> {
    arg.ok_or_else(|| {
        warn!(op, "absent argument");
        QueueError::InvalidArgument
    })
}
