//! Linked list based collections.
//!
//! The queue owns every node it links: strings are copied in on insertion and
//! handed back (or copied out into a caller buffer) on removal, so nothing the
//! caller passes in is ever aliased.
//!
//! # Examples
//!
//! ```
//! use mola_strqueue::StrQueue;
//!
//! let mut queue = StrQueue::new();
//! queue.insert_tail("b").unwrap();
//! queue.insert_tail("a").unwrap();
//! queue.insert_head("c").unwrap();
//!
//! queue.sort();
//! assert_eq!(queue.iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
//!
//! queue.reverse();
//! let mut buf = [0u8; 2];
//! assert_eq!(queue.remove_head(&mut buf), Ok(1));
//! assert_eq!(&buf, b"c\0");
//! assert_eq!(queue.len(), 2);
//! ```
pub mod queue;
