//! Fixed element layouts used across the test suites.

use chunkwise_core::ElementLayout;

const fn layout(size: usize, align: usize) -> ElementLayout {
    match ElementLayout::new(size, align) {
        Ok(l) => l,
        Err(_) => panic!("fixture layout must be valid"),
    }
}

/// One machine word.
pub const WORD: ElementLayout = layout(
    std::mem::size_of::<usize>(),
    std::mem::align_of::<usize>(),
);

/// A 24-byte, 8-aligned record (three `u64`s).
pub const RECORD_24: ElementLayout = layout(24, 8);

/// An element larger than a 4 KiB page.
pub const OVERSIZED_4200: ElementLayout = layout(4200, 8);

/// A cache-line sized and aligned element.
pub const CACHE_LINE: ElementLayout = layout(64, 64);
