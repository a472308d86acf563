//! Fixed-capacity chunks and the segmented vector built from them.
//!
//! A [`ChunkedVec`] is a growable list of `Vec<T>` chunks, each created
//! with the advised capacity and never pushed past it. When the last chunk
//! is full a new one is appended; existing chunks are never reallocated.

use std::fmt;
use std::ops::{Index, IndexMut};

use chunkwise_advisor::ChunkAdvisor;
use chunkwise_core::{ChunkLayout, ChunkSizing};
use smallvec::SmallVec;

use crate::policy::ChunkPolicy;

/// Segmented vector with advisor-sized, address-stable chunks.
pub struct ChunkedVec<T> {
    /// Chunk directory. Every chunk but the last live one is full.
    chunks: SmallVec<[Vec<T>; 4]>,
    /// Advice the chunks were sized from (count is `1 << shift`).
    chunk: ChunkLayout,
    shift: u32,
    len: usize,
}

impl<T> ChunkedVec<T> {
    /// Empty vector sized by the default advisor's fast policy.
    ///
    /// No chunk is allocated until the first push.
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized.
    pub fn new() -> Self {
        Self::with_policy(ChunkPolicy::Fast)
    }

    /// Empty vector sized by the default advisor under `policy`.
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized.
    pub fn with_policy(policy: ChunkPolicy) -> Self {
        Self::with_sizing(&ChunkAdvisor::default(), policy)
    }

    /// Empty vector sized by `sizing` under `policy`.
    ///
    /// The advisor is consulted once, here; the vector keeps only the
    /// resulting layout.
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized.
    pub fn with_sizing<S: ChunkSizing>(sizing: &S, policy: ChunkPolicy) -> Self {
        let (chunk, shift) = policy.resolve::<T, S>(sizing);
        Self {
            chunks: SmallVec::new(),
            chunk,
            shift,
            len: 0,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the vector holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Elements per chunk. Always a power of two.
    pub fn chunk_capacity(&self) -> usize {
        1 << self.shift
    }

    /// The advice this vector's chunks were sized from.
    pub fn chunk_layout(&self) -> ChunkLayout {
        self.chunk
    }

    /// Number of chunks currently allocated, including empty ones kept
    /// after `pop` or `clear`.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Bytes reserved for elements across all chunks.
    pub fn memory_bytes(&self) -> usize {
        self.chunks.len() * self.chunk.byte_size()
    }

    fn mask(&self) -> usize {
        self.chunk_capacity() - 1
    }

    /// Append an element, allocating a new chunk if the last one is full.
    pub fn push(&mut self, value: T) {
        let chunk_index = self.len >> self.shift;
        if chunk_index == self.chunks.len() {
            log::trace!(
                "chunked vec: allocating chunk {chunk_index} ({} bytes)",
                self.chunk.byte_size()
            );
            self.chunks.push(Vec::with_capacity(self.chunk_capacity()));
        }
        // The chunk has room: it holds exactly `len & mask` elements.
        self.chunks[chunk_index].push(value);
        self.len += 1;
    }

    /// Remove and return the last element.
    ///
    /// The emptied chunk is kept for reuse; see
    /// [`shrink_to_fit`](Self::shrink_to_fit).
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        self.chunks[self.len >> self.shift].pop()
    }

    /// Shared reference to the element at `index`, or `None` if out of bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.chunks[index >> self.shift].get(index & self.mask())
    }

    /// Mutable reference to the element at `index`, or `None` if out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let mask = self.mask();
        self.chunks[index >> self.shift].get_mut(index & mask)
    }

    /// Last element, if any.
    pub fn last(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Drop every element. The first chunk stays allocated.
    pub fn clear(&mut self) {
        self.chunks.truncate(1);
        if let Some(first) = self.chunks.first_mut() {
            first.clear();
        }
        self.len = 0;
    }

    /// Release chunks that hold no elements.
    pub fn shrink_to_fit(&mut self) {
        let needed = self.len.div_ceil(self.chunk_capacity());
        self.chunks.truncate(needed);
    }

    /// Iterate over elements in push order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.chunks.iter().flat_map(|c| c.iter())
    }

    /// Iterate mutably over elements in push order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.chunks.iter_mut().flat_map(|c| c.iter_mut())
    }

    /// The chunks as slices, in order. Only the last non-empty slice may be
    /// partially filled.
    pub fn chunks(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.chunks
            .iter()
            .map(|c| c.as_slice())
            .filter(|c| !c.is_empty())
    }
}

impl<T> Default for ChunkedVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for ChunkedVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        let len = self.len;
        self.get(index)
            .unwrap_or_else(|| panic!("index {index} out of bounds for ChunkedVec of length {len}"))
    }
}

impl<T> IndexMut<usize> for ChunkedVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        self.get_mut(index)
            .unwrap_or_else(|| panic!("index {index} out of bounds for ChunkedVec of length {len}"))
    }
}

impl<T> Extend<T> for ChunkedVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for ChunkedVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

impl<T: fmt::Debug> fmt::Debug for ChunkedVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
