//! The chunk sizing capability trait.

use crate::layout::{ChunkLayout, ElementLayout};

/// Advises containers how many elements to place in each contiguous chunk.
///
/// Implementors supply the two sizing policies; the power-of-two and typed
/// variants are provided on top of them. Every method is a pure function
/// of its arguments and the implementor's tuning, so results are
/// deterministic and calls are safe from any thread.
///
/// Implementations must uphold:
/// - every returned count is at least 1;
/// - [`bulk_chunk_layout`](Self::bulk_chunk_layout) is monotone
///   non-decreasing in `overcommit_hint`, and a hint of 0 behaves exactly
///   like a hint of 1.
pub trait ChunkSizing {
    /// Chunk sized for frequent allocate/deallocate cycles: small enough to
    /// stay on an allocator's fast free-list path.
    fn fast_chunk_layout(&self, element: ElementLayout) -> ChunkLayout;

    /// Chunk sized to minimise wasted memory, for a caller that expects to
    /// need roughly `overcommit_hint` elements per chunk.
    fn bulk_chunk_layout(&self, element: ElementLayout, overcommit_hint: usize) -> ChunkLayout;

    /// [`fast_chunk_layout`](Self::fast_chunk_layout) rounded down to a
    /// power-of-two count, returned with its base-2 exponent so callers can
    /// index chunks with shifts and masks.
    fn fast_chunk_layout_pow2(&self, element: ElementLayout) -> (ChunkLayout, u32) {
        round_down_pow2(self.fast_chunk_layout(element))
    }

    /// [`bulk_chunk_layout`](Self::bulk_chunk_layout) rounded down to a
    /// power-of-two count, returned with its base-2 exponent.
    fn bulk_chunk_layout_pow2(
        &self,
        element: ElementLayout,
        overcommit_hint: usize,
    ) -> (ChunkLayout, u32) {
        round_down_pow2(self.bulk_chunk_layout(element, overcommit_hint))
    }

    /// [`fast_chunk_layout`](Self::fast_chunk_layout) for elements of type `T`.
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized.
    fn fast_array_layout<T>(&self) -> ChunkLayout
    where
        Self: Sized,
    {
        self.fast_chunk_layout(element_of::<T>())
    }

    /// [`bulk_chunk_layout`](Self::bulk_chunk_layout) for elements of type `T`.
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized.
    fn bulk_array_layout<T>(&self, overcommit_hint: usize) -> ChunkLayout
    where
        Self: Sized,
    {
        self.bulk_chunk_layout(element_of::<T>(), overcommit_hint)
    }

    /// [`fast_chunk_layout_pow2`](Self::fast_chunk_layout_pow2) for elements
    /// of type `T`.
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized.
    fn fast_array_layout_pow2<T>(&self) -> (ChunkLayout, u32)
    where
        Self: Sized,
    {
        self.fast_chunk_layout_pow2(element_of::<T>())
    }

    /// [`bulk_chunk_layout_pow2`](Self::bulk_chunk_layout_pow2) for elements
    /// of type `T`.
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized.
    fn bulk_array_layout_pow2<T>(&self, overcommit_hint: usize) -> (ChunkLayout, u32)
    where
        Self: Sized,
    {
        self.bulk_chunk_layout_pow2(element_of::<T>(), overcommit_hint)
    }
}

impl<S: ChunkSizing + ?Sized> ChunkSizing for &S {
    fn fast_chunk_layout(&self, element: ElementLayout) -> ChunkLayout {
        (**self).fast_chunk_layout(element)
    }

    fn bulk_chunk_layout(&self, element: ElementLayout, overcommit_hint: usize) -> ChunkLayout {
        (**self).bulk_chunk_layout(element, overcommit_hint)
    }

    fn fast_chunk_layout_pow2(&self, element: ElementLayout) -> (ChunkLayout, u32) {
        (**self).fast_chunk_layout_pow2(element)
    }

    fn bulk_chunk_layout_pow2(
        &self,
        element: ElementLayout,
        overcommit_hint: usize,
    ) -> (ChunkLayout, u32) {
        (**self).bulk_chunk_layout_pow2(element, overcommit_hint)
    }
}

fn element_of<T>() -> ElementLayout {
    match ElementLayout::of::<T>() {
        Ok(layout) => layout,
        Err(e) => panic!(
            "cannot size chunks for {}: {e}",
            std::any::type_name::<T>()
        ),
    }
}

fn round_down_pow2(chunk: ChunkLayout) -> (ChunkLayout, u32) {
    // count >= 1, so ilog2 is defined and 1 << shift <= count.
    let shift = chunk.count().ilog2();
    let rounded = chunk
        .with_count(1 << shift)
        .expect("a smaller non-zero count keeps the footprint in range");
    (rounded, shift)
}
