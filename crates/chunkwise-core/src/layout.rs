//! Element and chunk layout value types.

use std::alloc::Layout;
use std::fmt;
use std::mem::{align_of, size_of};

use crate::error::LayoutError;

/// Size and alignment of one element stored in a chunk.
///
/// Always satisfies: `size >= 1`, `align` is a power of two, `size` is a
/// multiple of `align`, and `size <= isize::MAX`. These are the same rules
/// `core::alloc::Layout` enforces for a padded array element, plus the
/// non-zero size requirement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementLayout {
    size: usize,
    align: usize,
}

impl ElementLayout {
    /// Build a layout from an explicit size and alignment in bytes.
    pub const fn new(size: usize, align: usize) -> Result<Self, LayoutError> {
        if !align.is_power_of_two() {
            return Err(LayoutError::AlignNotPowerOfTwo { align });
        }
        if size == 0 {
            return Err(LayoutError::ZeroSize);
        }
        if size % align != 0 {
            return Err(LayoutError::SizeNotMultipleOfAlign { size, align });
        }
        if size > isize::MAX as usize - (align - 1) {
            return Err(LayoutError::SizeOverflow { size, align });
        }
        Ok(Self { size, align })
    }

    /// The layout of one `T`.
    ///
    /// Fails only for zero-sized types; Rust guarantees every other type
    /// satisfies the layout rules.
    pub const fn of<T>() -> Result<Self, LayoutError> {
        Self::new(size_of::<T>(), align_of::<T>())
    }

    /// Element size in bytes.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Element alignment in bytes.
    pub const fn align(&self) -> usize {
        self.align
    }

    /// The standard library layout for a single element.
    pub fn to_layout(&self) -> Layout {
        Layout::from_size_align(self.size, self.align)
            .expect("ElementLayout invariants imply a valid Layout")
    }
}

impl TryFrom<Layout> for ElementLayout {
    type Error = LayoutError;

    /// Convert a standard library layout. Call
    /// [`Layout::pad_to_align`] first if the size is not yet a multiple
    /// of the alignment.
    fn try_from(layout: Layout) -> Result<Self, Self::Error> {
        Self::new(layout.size(), layout.align())
    }
}

impl fmt::Display for ElementLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}B align {}", self.size, self.align)
    }
}

/// Advice for one contiguous chunk: the element layout and how many
/// elements to place in it.
///
/// `count` is always at least 1 and `count * element.size()` never exceeds
/// `isize::MAX`. Because the element size is a multiple of its alignment,
/// the byte footprint needs no further padding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChunkLayout {
    element: ElementLayout,
    count: usize,
}

impl ChunkLayout {
    /// Build a chunk layout, returning `None` when `count` is zero or the
    /// footprint would exceed `isize::MAX`.
    pub const fn new(element: ElementLayout, count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        match element.size.checked_mul(count) {
            Some(bytes) if bytes <= isize::MAX as usize => Some(Self { element, count }),
            _ => None,
        }
    }

    /// The same element layout with a different count.
    pub const fn with_count(&self, count: usize) -> Option<Self> {
        Self::new(self.element, count)
    }

    /// Layout of each element in the chunk.
    pub const fn element(&self) -> ElementLayout {
        self.element
    }

    /// Number of elements per chunk.
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Total bytes the chunk's elements occupy (`count * size`).
    pub const fn byte_size(&self) -> usize {
        self.count * self.element.size
    }

    /// The standard library layout for the whole chunk, ready to hand to
    /// an allocator.
    pub fn to_layout(&self) -> Layout {
        Layout::from_size_align(self.byte_size(), self.element.align)
            .expect("ChunkLayout invariants imply a valid Layout")
    }
}

impl fmt::Display for ChunkLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.count, self.element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_standard_layouts() {
        let l = ElementLayout::new(24, 8).unwrap();
        assert_eq!(l.size(), 24);
        assert_eq!(l.align(), 8);
        assert_eq!(l.to_layout(), Layout::from_size_align(24, 8).unwrap());
    }

    #[test]
    fn rejects_zero_size() {
        assert_eq!(ElementLayout::new(0, 1), Err(LayoutError::ZeroSize));
    }

    #[test]
    fn rejects_bad_alignment() {
        assert_eq!(
            ElementLayout::new(12, 3),
            Err(LayoutError::AlignNotPowerOfTwo { align: 3 })
        );
        assert_eq!(
            ElementLayout::new(12, 0),
            Err(LayoutError::AlignNotPowerOfTwo { align: 0 })
        );
    }

    #[test]
    fn rejects_size_not_multiple_of_align() {
        assert_eq!(
            ElementLayout::new(12, 8),
            Err(LayoutError::SizeNotMultipleOfAlign { size: 12, align: 8 })
        );
    }

    #[test]
    fn rejects_oversized_elements() {
        let size = isize::MAX as usize + 1;
        assert_eq!(
            ElementLayout::new(size, 1),
            Err(LayoutError::SizeOverflow { size, align: 1 })
        );
        assert!(ElementLayout::new(isize::MAX as usize, 1).is_ok());
    }

    #[test]
    fn of_matches_type_layout() {
        let l = ElementLayout::of::<u64>().unwrap();
        assert_eq!(l.size(), 8);
        assert_eq!(l.align(), align_of::<u64>());
        let l = ElementLayout::of::<[u16; 3]>().unwrap();
        assert_eq!(l.size(), 6);
        assert_eq!(l.align(), 2);
    }

    #[test]
    fn of_rejects_zst() {
        assert_eq!(ElementLayout::of::<()>(), Err(LayoutError::ZeroSize));
    }

    #[test]
    fn try_from_std_layout() {
        let std = Layout::new::<(u32, u8)>();
        let l = ElementLayout::try_from(std).unwrap();
        assert_eq!(l.size(), 8);
        assert_eq!(l.align(), 4);

        let unpadded = Layout::from_size_align(5, 4).unwrap();
        assert!(ElementLayout::try_from(unpadded).is_err());
        assert!(ElementLayout::try_from(unpadded.pad_to_align()).is_ok());
    }

    #[test]
    fn chunk_layout_rejects_zero_count() {
        let l = ElementLayout::new(8, 8).unwrap();
        assert!(ChunkLayout::new(l, 0).is_none());
    }

    #[test]
    fn chunk_layout_rejects_overflowing_footprint() {
        let l = ElementLayout::new(1 << 20, 8).unwrap();
        assert!(ChunkLayout::new(l, usize::MAX / 2).is_none());
        let max = isize::MAX as usize / (1 << 20);
        assert!(ChunkLayout::new(l, max).is_some());
        assert!(ChunkLayout::new(l, max + 1).is_none());
    }

    #[test]
    fn chunk_layout_footprint() {
        let l = ElementLayout::new(24, 8).unwrap();
        let chunk = ChunkLayout::new(l, 170).unwrap();
        assert_eq!(chunk.byte_size(), 4080);
        assert_eq!(chunk.to_layout().size(), 4080);
        assert_eq!(chunk.to_layout().align(), 8);
        assert_eq!(chunk.with_count(2).unwrap().byte_size(), 48);
    }

    #[test]
    fn structural_equality() {
        let a = ChunkLayout::new(ElementLayout::new(16, 8).unwrap(), 4).unwrap();
        let b = ChunkLayout::new(ElementLayout::new(16, 8).unwrap(), 4).unwrap();
        let c = ChunkLayout::new(ElementLayout::new(16, 16).unwrap(), 4).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn display_formats() {
        let chunk = ChunkLayout::new(ElementLayout::new(24, 8).unwrap(), 170).unwrap();
        assert_eq!(chunk.to_string(), "170 x 24B align 8");
    }

    proptest! {
        #[test]
        fn valid_inputs_always_construct(
            align_shift in 0u32..12,
            multiple in 1usize..4096,
        ) {
            let align = 1usize << align_shift;
            let size = align * multiple;
            let l = ElementLayout::new(size, align).unwrap();
            prop_assert_eq!(l.to_layout().size(), size);
            prop_assert_eq!(l.to_layout().align(), align);
        }

        #[test]
        fn chunk_footprint_never_exceeds_isize(size in 1usize..1 << 16, count in 1usize..usize::MAX) {
            let l = ElementLayout::new(size, 1).unwrap();
            if let Some(chunk) = ChunkLayout::new(l, count) {
                prop_assert!(chunk.byte_size() <= isize::MAX as usize);
            }
        }
    }
}
