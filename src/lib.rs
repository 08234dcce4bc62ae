//! A singly linked queue of owned strings.
//!
//! [`StrQueue`] supports O(1) insertion at both ends, O(1) removal from the
//! front, in-place reversal and an in-place merge sort that only relinks
//! nodes. See [`linked_list::queue`] for details.
#![no_std]

extern crate alloc;

pub mod error;
pub mod linked_list;

pub use error::QueueError;
pub use linked_list::queue::StrQueue;
