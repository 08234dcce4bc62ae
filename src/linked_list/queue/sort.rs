//! Merge sort over a raw singly linked chain.
//!
//! Nothing here allocates or touches a value: halves are produced by cutting a
//! link and merged by relinking nodes.

use core::ptr::NonNull;

use super::node::{Chain, Node};

/// Sorts the chain starting at `head`, returning its new first and last nodes.
///
/// # Safety
///
/// `head` must be a well-formed, acyclic chain of live nodes that nothing else
/// is reading or writing for the duration of the call.
pub(super) unsafe fn merge_sort(head: Chain) -> (Chain, Chain) {
    let Some(first) = head else {
        return (None, None);
    };
    if unsafe { first.as_ref() }.next().is_none() {
        return (head, head);
    }

    let second = unsafe { split(first) };
    let (left, _) = unsafe { merge_sort(Some(first)) };
    let (right, _) = unsafe { merge_sort(second) };
    unsafe { merge(left, right) }
}

/// Cuts the chain after its midpoint and returns the second half.
///
/// `fast` moves two links for every link `slow` moves, so when `fast` has no
/// node two links ahead `slow` is the last node of the first half. For an odd
/// length the first half gets the extra node.
///
/// # Safety
///
/// Same contract as [`merge_sort`].
pub(super) unsafe fn split(head: NonNull<Node>) -> Chain {
    let mut slow = head;
    let mut fast = head;

    // `slow` never passes `fast`, so whenever `fast` has a node two links
    // ahead, `slow` has a successor too.
    while let (Some(next), Some(ahead)) = unsafe {
        (
            slow.as_ref().next(),
            fast.as_ref().next().and_then(|step| step.as_ref().next()),
        )
    } {
        slow = next;
        fast = ahead;
    }

    let slow = unsafe { slow.as_mut() };
    let second = slow.next();
    slow.set_next(None);
    second
}

/// Merges two sorted chains, returning the first and last nodes of the result.
///
/// On equal values the node from `left` goes first. Once either side runs out
/// the rest of the other is spliced on whole, then walked to find the last
/// node.
///
/// # Safety
///
/// `left` and `right` must be disjoint chains, each satisfying the contract of
/// [`merge_sort`].
pub(super) unsafe fn merge(mut left: Chain, mut right: Chain) -> (Chain, Chain) {
    let mut head: Chain = None;
    let mut tail: Chain = None;

    while let (Some(l), Some(r)) = (left, right) {
        let picked = unsafe {
            if l.as_ref().value() <= r.as_ref().value() {
                left = l.as_ref().next();
                l
            } else {
                right = r.as_ref().next();
                r
            }
        };
        match tail {
            Some(mut last) => unsafe { last.as_mut().set_next(Some(picked)) },
            None => head = Some(picked),
        }
        tail = Some(picked);
    }

    let rest = left.or(right);
    match tail {
        Some(mut last) => unsafe { last.as_mut().set_next(rest) },
        None => head = rest,
    }

    let mut cursor = rest;
    while let Some(node) = cursor {
        tail = Some(node);
        cursor = unsafe { node.as_ref() }.next();
    }

    (head, tail)
}
