//! Error types for chunkwise.
//!
//! Two classes: malformed element layouts, rejected when an
//! [`ElementLayout`](crate::ElementLayout) is constructed, and malformed
//! tuning profiles, rejected when an advisor is built. The advisory calls
//! themselves are total over valid inputs and have no error type.

use std::error::Error;
use std::fmt;

/// Errors from constructing an [`ElementLayout`](crate::ElementLayout).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// The element size is zero. Zero-sized elements need no chunks.
    ZeroSize,
    /// The alignment is zero or not a power of two.
    AlignNotPowerOfTwo {
        /// The rejected alignment.
        align: usize,
    },
    /// The size is not a multiple of the alignment, so consecutive
    /// elements in a chunk would be misaligned.
    SizeNotMultipleOfAlign {
        /// The element size.
        size: usize,
        /// The element alignment.
        align: usize,
    },
    /// The size exceeds `isize::MAX` once rounded up to the alignment.
    SizeOverflow {
        /// The element size.
        size: usize,
        /// The element alignment.
        align: usize,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize => write!(f, "element size must be non-zero"),
            Self::AlignNotPowerOfTwo { align } => {
                write!(f, "element alignment {align} is not a power of two")
            }
            Self::SizeNotMultipleOfAlign { size, align } => {
                write!(
                    f,
                    "element size {size} is not a multiple of its alignment {align}"
                )
            }
            Self::SizeOverflow { size, align } => {
                write!(
                    f,
                    "element size {size} with alignment {align} exceeds isize::MAX"
                )
            }
        }
    }
}

impl Error for LayoutError {}

/// Errors detected when validating a chunk advisor's tuning profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The page size is zero or not a power of two.
    PageSizeNotPowerOfTwo {
        /// The configured page size.
        page_size: usize,
    },
    /// The page size is below the supported minimum.
    PageSizeTooSmall {
        /// The configured page size.
        page_size: usize,
        /// The smallest accepted page size.
        min: usize,
    },
    /// The per-chunk overhead leaves no room for an element in a page.
    OverheadTooLarge {
        /// The configured per-chunk overhead in bytes.
        overhead: usize,
        /// The configured page size.
        page_size: usize,
    },
    /// `max_bulk_pages` is zero.
    ZeroBulkPages,
    /// `page_size * max_bulk_pages` does not fit in `isize`.
    BulkSpanOverflow {
        /// The configured page size.
        page_size: usize,
        /// The configured bulk page cap.
        max_bulk_pages: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PageSizeNotPowerOfTwo { page_size } => {
                write!(f, "page size {page_size} is not a power of two")
            }
            Self::PageSizeTooSmall { page_size, min } => {
                write!(f, "page size {page_size} is below the minimum of {min}")
            }
            Self::OverheadTooLarge {
                overhead,
                page_size,
            } => {
                write!(
                    f,
                    "per-chunk overhead {overhead} must be smaller than the page size {page_size}"
                )
            }
            Self::ZeroBulkPages => write!(f, "max_bulk_pages must be at least 1"),
            Self::BulkSpanOverflow {
                page_size,
                max_bulk_pages,
            } => {
                write!(
                    f,
                    "bulk span of {max_bulk_pages} pages of {page_size} bytes exceeds isize::MAX"
                )
            }
        }
    }
}

impl Error for ConfigError {}
