//! A segmented vector whose chunk size comes from chunkwise advice.
//!
//! [`ChunkedVec`] stores elements in fixed-capacity chunks that are
//! allocated on demand and never reallocated, so element addresses stay
//! stable as the vector grows. Chunk capacity is a power of two taken
//! from a [`ChunkSizing`](chunkwise_core::ChunkSizing) policy, which makes
//! indexing a shift and a mask.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod chunked;
pub mod policy;

pub use chunked::ChunkedVec;
pub use policy::ChunkPolicy;
