//! The default page-based chunk sizing policy.

use chunkwise_core::{ChunkLayout, ChunkSizing, ConfigError, ElementLayout};

use crate::config::AdvisorConfig;

/// Computes chunk layouts from a validated [`AdvisorConfig`].
///
/// Stateless apart from its tuning profile: every call is a pure function
/// of the element layout and hint. `Copy`, so it can be embedded in each
/// container that needs advice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChunkAdvisor {
    config: AdvisorConfig,
}

impl ChunkAdvisor {
    /// Build an advisor from a tuning profile.
    ///
    /// Returns an error if the profile fails [`AdvisorConfig::validate`].
    pub fn new(config: AdvisorConfig) -> Result<Self, ConfigError> {
        if let Err(e) = config.validate() {
            log::warn!("rejected chunk advisor profile {config:?}: {e}");
            return Err(e);
        }
        log::debug!(
            "chunk advisor: page {} bytes, overhead {} bytes, bulk cap {} pages",
            config.page_size,
            config.chunk_overhead,
            config.max_bulk_pages
        );
        Ok(Self { config })
    }

    /// The tuning profile this advisor was built from.
    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// Pages needed to hold one element plus the chunk overhead.
    ///
    /// Cannot overflow: size <= isize::MAX and overhead < page_size <= isize::MAX.
    fn min_pages(&self, element: ElementLayout) -> usize {
        (element.size() + self.config.chunk_overhead).div_ceil(self.config.page_size)
    }

    /// Pages needed to hold `count` elements plus the chunk overhead, or
    /// `None` if the byte count overflows.
    fn pages_for(&self, element: ElementLayout, count: usize) -> Option<usize> {
        let bytes = count
            .checked_mul(element.size())?
            .checked_add(self.config.chunk_overhead)?;
        Some(bytes.div_ceil(self.config.page_size))
    }

    /// As many elements as fit in `budget` bytes, and never fewer than one.
    fn fill(element: ElementLayout, budget: usize) -> ChunkLayout {
        let count = (budget / element.size()).max(1);
        ChunkLayout::new(element, count)
            .expect("a page-bounded count keeps the footprint within isize::MAX")
    }
}

impl Default for ChunkAdvisor {
    fn default() -> Self {
        Self {
            config: AdvisorConfig::default(),
        }
    }
}

impl ChunkSizing for ChunkAdvisor {
    fn fast_chunk_layout(&self, element: ElementLayout) -> ChunkLayout {
        Self::fill(element, self.config.budget(1))
    }

    fn bulk_chunk_layout(&self, element: ElementLayout, overcommit_hint: usize) -> ChunkLayout {
        let min_pages = self.min_pages(element);
        let cap = self.config.max_bulk_pages.max(min_pages);
        // A hint of 0 means "no bulk expectation" and degrades to 1.
        let wanted = self
            .pages_for(element, overcommit_hint.max(1))
            .unwrap_or(cap);
        let pages = wanted.clamp(min_pages, cap);
        Self::fill(element, self.config.budget(pages))
    }
}
