//! Test utilities and mock types for chunkwise development.
//!
//! Provides fixed layout [`fixtures`], proptest strategies for element
//! layouts, and [`FixedSizing`], a mock [`ChunkSizing`] that returns
//! caller-chosen counts so container tests do not depend on the real
//! advisor's arithmetic.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::Cell;

use chunkwise_core::{ChunkLayout, ChunkSizing, ElementLayout};
use proptest::prelude::*;

/// Any valid element layout: alignment 1..=64, size up to 32 pages of 4 KiB.
pub fn arb_element_layout() -> impl Strategy<Value = ElementLayout> {
    (0u32..7, 1usize..2048).prop_map(|(align_shift, multiple)| {
        let align = 1usize << align_shift;
        ElementLayout::new(align * multiple, align).unwrap()
    })
}

/// Element layouts that fit comfortably in one 4 KiB page.
pub fn arb_small_element_layout() -> impl Strategy<Value = ElementLayout> {
    (0u32..4, 1usize..64).prop_map(|(align_shift, multiple)| {
        let align = 1usize << align_shift;
        ElementLayout::new(align * multiple, align).unwrap()
    })
}

/// Mock sizing policy returning fixed counts.
///
/// Counts how many times it was consulted so tests can assert that a
/// container asks for advice once, not per push, and records the last
/// overcommit hint it was given.
pub struct FixedSizing {
    pub fast: usize,
    pub bulk: usize,
    calls: Cell<usize>,
    last_hint: Cell<Option<usize>>,
}

impl FixedSizing {
    pub fn new(fast: usize, bulk: usize) -> Self {
        Self {
            fast,
            bulk,
            calls: Cell::new(0),
            last_hint: Cell::new(None),
        }
    }

    /// Number of sizing calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// The hint passed to the most recent bulk call, if any.
    pub fn last_hint(&self) -> Option<usize> {
        self.last_hint.get()
    }
}

impl ChunkSizing for FixedSizing {
    fn fast_chunk_layout(&self, element: ElementLayout) -> ChunkLayout {
        self.calls.set(self.calls.get() + 1);
        ChunkLayout::new(element, self.fast).expect("FixedSizing fast count must be valid")
    }

    fn bulk_chunk_layout(&self, element: ElementLayout, overcommit_hint: usize) -> ChunkLayout {
        self.calls.set(self.calls.get() + 1);
        self.last_hint.set(Some(overcommit_hint));
        ChunkLayout::new(element, self.bulk).expect("FixedSizing bulk count must be valid")
    }
}
