//! chunkwise: how many elements should a container put in each chunk?
//!
//! This is the top-level facade crate that re-exports the public API from
//! all chunkwise sub-crates. For most users, adding `chunkwise` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use chunkwise::prelude::*;
//!
//! let advisor = ChunkAdvisor::new(AdvisorConfig {
//!     chunk_overhead: 16,
//!     ..AdvisorConfig::default()
//! })
//! .unwrap();
//!
//! // Latency-sensitive: one page minus bookkeeping.
//! let record = ElementLayout::new(24, 8).unwrap();
//! assert_eq!(advisor.fast_chunk_layout(record).count(), 170);
//!
//! // Space-sensitive: enough pages for ~500 records.
//! let bulk = advisor.bulk_chunk_layout(record, 500);
//! assert!(bulk.count() >= 500);
//!
//! // Power-of-two chunks for shift/mask indexing.
//! let (chunk, shift) = advisor.fast_array_layout_pow2::<[u64; 3]>();
//! assert_eq!(chunk.count(), 1 << shift);
//!
//! // A container that sizes itself from the advice.
//! let mut v: ChunkedVec<u64> = ChunkedVec::with_sizing(&advisor, ChunkPolicy::Fast);
//! v.extend(0..1000);
//! assert_eq!(v[999], 999);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `chunkwise-core` | Layout types, errors, the `ChunkSizing` trait |
//! | [`advisor`] | `chunkwise-advisor` | `ChunkAdvisor` and its `AdvisorConfig` profile |
//! | [`chunked`] | `chunkwise-chunked` | `ChunkedVec`, a segmented vector sized by advice |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Layout types, error types, and the sizing trait (`chunkwise-core`).
pub use chunkwise_core as types;

/// The default page-based sizing policy (`chunkwise-advisor`).
pub use chunkwise_advisor as advisor;

/// Segmented vector sized by chunk advice (`chunkwise-chunked`).
pub use chunkwise_chunked as chunked;

/// Common imports for typical chunkwise usage.
///
/// ```rust
/// use chunkwise::prelude::*;
/// ```
pub mod prelude {
    pub use chunkwise_advisor::{AdvisorConfig, ChunkAdvisor};
    pub use chunkwise_chunked::{ChunkPolicy, ChunkedVec};
    pub use chunkwise_core::{ChunkLayout, ChunkSizing, ConfigError, ElementLayout, LayoutError};
}
