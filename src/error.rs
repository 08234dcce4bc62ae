use thiserror::Error;

/// Every way a queue operation can fail.
///
/// A failed operation never leaves the queue partially modified: the chain,
/// its length and its head/tail are exactly as they were before the call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    #[error("Invalid argument: absent queue, string or output buffer")]
    InvalidArgument,

    #[error("Allocation failure")]
    AllocationFailure,

    #[error("Queue is empty")]
    EmptyQueue,
}
