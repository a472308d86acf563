//! Benchmark profiles for chunkwise.
//!
//! - [`reference_layouts`]: element layouts typical of container nodes,
//!   from a single byte up to a multi-page element.
//! - [`reference_advisor`]: the default profile with a fixed 16-byte
//!   overhead so results match across 32- and 64-bit hosts.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use chunkwise_advisor::{AdvisorConfig, ChunkAdvisor};
use chunkwise_core::ElementLayout;

/// Named element layouts used by the benchmarks and the advice table.
pub fn reference_layouts() -> Vec<(&'static str, ElementLayout)> {
    [
        ("u8", 1, 1),
        ("u64", 8, 8),
        ("record24", 24, 8),
        ("cache_line", 64, 64),
        ("btree_node", 392, 8),
        ("page_minus_word", 4088, 8),
        ("oversized", 4200, 8),
        ("huge", 1 << 20, 16),
    ]
    .into_iter()
    .map(|(name, size, align)| {
        let layout = ElementLayout::new(size, align)
            .unwrap_or_else(|e| panic!("reference layout {name} is invalid: {e}"));
        (name, layout)
    })
    .collect()
}

/// The default page profile with a 16-byte chunk overhead.
pub fn reference_advisor() -> ChunkAdvisor {
    ChunkAdvisor::new(AdvisorConfig {
        chunk_overhead: 16,
        ..AdvisorConfig::default()
    })
    .unwrap_or_else(|e| panic!("reference profile is invalid: {e}"))
}
