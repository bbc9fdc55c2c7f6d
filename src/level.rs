//! Index arithmetic for the implicit min-max tree.
//!
//! Slots are laid out in the usual binary-heap order: the children of `i` are
//! `2i + 1` and `2i + 2`. Nothing about the tree is stored; every relationship
//! is recomputed from the index.
//!
//! # Level parity
//!
//! Depth 0 (the root) is a min level, depth 1 a max level, and so on. The depth
//! of slot `i` is the position of the highest set bit of `i + 1`, so a slot is
//! on a min level exactly when that bit sits at an even position. Masking
//! `i + 1` with every even bit and with every odd bit and comparing the two
//! halves answers that without a `log2`: whichever half contains the highest set
//! bit is the larger one.
//!
//! ```rust
//! use rust_minmax_heap::level::{is_min_level, Level};
//!
//! assert!(is_min_level(0));
//! assert!(!is_min_level(1));
//! assert!(!is_min_level(2));
//! assert!(is_min_level(3));
//! assert_eq!(Level::of(6), Level::Min);
//! ```

/// Every bit at an even position (bits 0, 2, 4, ...).
pub const EVEN_BITS: usize = 0x5555_5555_5555_5555_u64 as usize;

/// Every bit at an odd position (bits 1, 3, 5, ...).
pub const ODD_BITS: usize = 0xAAAA_AAAA_AAAA_AAAA_u64 as usize;

/// The ordering a slot enforces over its descendants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// The slot is no greater than anything below it.
    Min,
    /// The slot is no smaller than anything below it.
    Max,
}

impl Level {
    /// Level of the slot at `index`.
    #[inline]
    pub fn of(index: usize) -> Level {
        if is_min_level(index) {
            Level::Min
        } else {
            Level::Max
        }
    }

    /// The level directly above or below this one.
    #[inline]
    pub fn flip(self) -> Level {
        match self {
            Level::Min => Level::Max,
            Level::Max => Level::Min,
        }
    }
}

/// Returns true if `index` sits on a min level.
#[inline]
pub fn is_min_level(index: usize) -> bool {
    let n = index + 1;
    (n & EVEN_BITS) > (n & ODD_BITS)
}

/// Parent of a non-root slot.
#[inline]
pub fn parent(index: usize) -> usize {
    debug_assert!(index > 0, "the root has no parent");
    (index - 1) / 2
}

/// Grandparent of a slot at depth two or deeper (`index > 2`).
#[inline]
pub fn grandparent(index: usize) -> usize {
    debug_assert!(index > 2, "slots above depth two have no grandparent");
    (parent(index) - 1) / 2
}

/// Left child of `index`. The right child is the next slot.
#[inline]
pub fn first_child(index: usize) -> usize {
    2 * index + 1
}

/// The two children followed by the four grandchildren of `index`, in slot
/// order. Every entry is larger than the one before it, so callers can stop
/// at the first one past the end of the heap.
#[inline]
pub fn descendants(index: usize) -> [usize; 6] {
    let child = first_child(index);
    let grandchild = 4 * index + 3;
    [
        child,
        child + 1,
        grandchild,
        grandchild + 1,
        grandchild + 2,
        grandchild + 3,
    ]
}

/// Returns true if `candidate` is one of the four grandchildren of `index`.
#[inline]
pub fn is_grandchild(index: usize, candidate: usize) -> bool {
    candidate > 2 && grandparent(candidate) == index
}
