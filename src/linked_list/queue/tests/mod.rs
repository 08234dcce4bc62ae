extern crate std;

use alloc::{string::String, vec::Vec};
use core::{cell::Cell, ptr};
use std::alloc::{GlobalAlloc, Layout, System};

use rand::{Rng, SeedableRng, distr::Alphanumeric, rngs::StdRng};

use super::StrQueue;


/// Passes every request to the system allocator unless told to fail one.
struct FailingAlloc;

std::thread_local! {
    static FAIL_IN: Cell<Option<usize>> = const { Cell::new(None) };
}

unsafe impl GlobalAlloc for FailingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let fail = FAIL_IN
            .try_with(|fail_in| match fail_in.get() {
                Some(0) => {
                    fail_in.set(None);
                    true
                }
                Some(n) => {
                    fail_in.set(Some(n - 1));
                    false
                }
                None => false,
            })
            .unwrap_or(false);
        if fail {
            return ptr::null_mut();
        }
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static GLOBAL: FailingAlloc = FailingAlloc;

/// Fails the allocation `n` allocations from now on this thread.
fn fail_in(n: usize) {
    FAIL_IN.with(|fail_in| fail_in.set(Some(n)));
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Removes every element, returning them in removal order.
fn drain(queue: &mut StrQueue) -> Vec<String> {
    let mut values = Vec::new();
    while let Some(value) = queue.pop_head() {
        values.push(value.into());
    }
    values
}

/// Checks the chain against the recorded length, head and tail.
fn assert_well_formed(queue: &StrQueue) {
    let mut count = 0;
    let mut last = None;
    let mut current = queue.head;
    while let Some(node) = current {
        count += 1;
        last = Some(node);
        current = unsafe { node.as_ref() }.next();
    }
    assert_eq!(count, queue.len());
    assert_eq!(last, queue.tail);
    assert_eq!(queue.is_empty(), queue.head.is_none());
}

fn random_strings(rng: &mut StdRng, count: usize, max_len: usize) -> Vec<String> {
    (0..count)
        .map(|_| {
            let len = rng.random_range(0..=max_len);
            (0..len)
                .map(|_| char::from(rng.sample(Alphanumeric)))
                .collect::<String>()
        })
        .collect()
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed_cafe)
}
