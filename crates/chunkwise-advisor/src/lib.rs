//! Page-based chunk sizing for chunkwise.
//!
//! [`ChunkAdvisor`] is the default [`ChunkSizing`](chunkwise_core::ChunkSizing)
//! policy. It is parameterised by an [`AdvisorConfig`] tuning profile
//! (page size, per-chunk bookkeeping overhead, bulk page cap), so the
//! platform-dependent constants stay configuration rather than law.
//!
//! # Policies
//!
//! - **Fast:** fill one page minus the chunk overhead. Small chunks that
//!   an allocator can recycle from its free lists.
//! - **Bulk:** pick the smallest page multiple that holds the caller's
//!   overcommit hint (capped at `max_bulk_pages`), then fill it.
//!
//! All calls are O(1) integer arithmetic with no allocation or locking.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod advisor;
pub mod config;

pub use advisor::ChunkAdvisor;
pub use config::AdvisorConfig;
