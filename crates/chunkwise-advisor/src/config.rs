//! Advisor tuning profile.

use std::mem::size_of;

use chunkwise_core::ConfigError;

/// Tuning profile for a [`ChunkAdvisor`](crate::ChunkAdvisor).
///
/// Controls the assumed virtual-memory page size, the per-chunk
/// bookkeeping overhead subtracted from every chunk budget, and how many
/// pages the bulk policy may span. Validated when an advisor is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AdvisorConfig {
    /// Assumed page size in bytes.
    ///
    /// Default: 4096. Must be a power of two and at least
    /// [`MIN_PAGE_SIZE`](Self::MIN_PAGE_SIZE).
    pub page_size: usize,

    /// Bytes of allocator bookkeeping charged to each chunk.
    ///
    /// Default: two machine words (16 bytes on 64-bit targets). Must be
    /// smaller than `page_size`.
    pub chunk_overhead: usize,

    /// Largest page multiple the bulk policy will consider.
    ///
    /// Default: 64 (256 KiB at the default page size). Elements larger
    /// than this span still get a single-element chunk. Must be at least 1,
    /// and `page_size * max_bulk_pages` must fit in `isize`.
    pub max_bulk_pages: usize,
}

impl AdvisorConfig {
    /// Default page size: 4 KiB.
    pub const DEFAULT_PAGE_SIZE: usize = 4096;

    /// Default per-chunk overhead: two machine words.
    pub const DEFAULT_CHUNK_OVERHEAD: usize = 2 * size_of::<usize>();

    /// Default bulk page cap.
    pub const DEFAULT_MAX_BULK_PAGES: usize = 64;

    /// Smallest accepted page size.
    pub const MIN_PAGE_SIZE: usize = 64;

    /// Create a profile for the given page size with default overhead and
    /// bulk cap.
    pub const fn for_page_size(page_size: usize) -> Self {
        Self {
            page_size,
            chunk_overhead: Self::DEFAULT_CHUNK_OVERHEAD,
            max_bulk_pages: Self::DEFAULT_MAX_BULK_PAGES,
        }
    }

    /// Profile for the compilation target's base page size.
    ///
    /// Apple silicon uses 16 KiB pages; every other target gets the 4 KiB
    /// default. This is a compile-time choice and never queries the OS.
    pub fn host() -> Self {
        let page_size = if cfg!(all(target_vendor = "apple", target_arch = "aarch64")) {
            16 * 1024
        } else {
            Self::DEFAULT_PAGE_SIZE
        };
        log::debug!("host chunk profile: page size {page_size} bytes");
        Self::for_page_size(page_size)
    }

    /// Bytes available to elements in a chunk spanning `pages` pages.
    ///
    /// Callers must pass `pages <= max(max_bulk_pages, pages needed for
    /// one element)`; both products fit in `usize` for a valid profile.
    pub(crate) fn budget(&self, pages: usize) -> usize {
        pages.saturating_mul(self.page_size) - self.chunk_overhead
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.page_size.is_power_of_two() {
            return Err(ConfigError::PageSizeNotPowerOfTwo {
                page_size: self.page_size,
            });
        }
        if self.page_size < Self::MIN_PAGE_SIZE {
            return Err(ConfigError::PageSizeTooSmall {
                page_size: self.page_size,
                min: Self::MIN_PAGE_SIZE,
            });
        }
        if self.chunk_overhead >= self.page_size {
            return Err(ConfigError::OverheadTooLarge {
                overhead: self.chunk_overhead,
                page_size: self.page_size,
            });
        }
        if self.max_bulk_pages == 0 {
            return Err(ConfigError::ZeroBulkPages);
        }
        match self.page_size.checked_mul(self.max_bulk_pages) {
            Some(span) if span <= isize::MAX as usize => Ok(()),
            _ => Err(ConfigError::BulkSpanOverflow {
                page_size: self.page_size,
                max_bulk_pages: self.max_bulk_pages,
            }),
        }
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self::for_page_size(Self::DEFAULT_PAGE_SIZE)
    }
}
