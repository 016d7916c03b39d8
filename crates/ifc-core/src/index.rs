//! Index newtypes for addressing records inside partitions.
//!
//! Tagged indices pack a sort tag and a partition offset into one `u32`:
//!
//! ```text
//! | 31 ........................ 8 | 7 ...... 0 |
//! |           offset             |    tag     |
//! ```
//!
//! The tag is kept raw so that values written by a newer producer still
//! decode; [`DeclIndex::sort`] and friends return `None` for tags this
//! reader has no name for.
//!
//! Every category uses the same 8-bit tag. This is the layout of the images
//! this crate reads, not the per-category tag widths of MSVC `.ifc` files.

use crate::sorts::{ChartSort, DeclSort, ExprSort, NameSort, TypeSort};

/// Number of low bits holding the sort tag.
pub const TAG_BITS: u32 = 8;

/// Largest offset a tagged index can carry.
pub const MAX_OFFSET: u32 = u32::MAX >> TAG_BITS;

/// Index construction error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    #[error("offset {0} does not fit in a tagged index (max {MAX_OFFSET})")]
    OffsetOverflow(u32),
}

/// Reduces an index to the raw record offset within its partition.
///
/// Sort tags are dropped here; checking that a tagged index actually
/// addresses the partition it is used with is the caller's job.
pub trait PartitionIndex: Copy {
    fn partition_offset(self) -> u32;
}

impl PartitionIndex for u32 {
    #[inline]
    fn partition_offset(self) -> u32 {
        self
    }
}

macro_rules! tagged_index {
    ($(#[$meta:meta])* $name:ident => $sort:ty) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Null sentinel (raw value 0).
            pub const NULL: Self = Self(0);

            /// Pack a known sort and an offset.
            pub fn new(sort: $sort, offset: u32) -> Result<Self, IndexError> {
                if offset > MAX_OFFSET {
                    return Err(IndexError::OffsetOverflow(offset));
                }
                Ok(Self((offset << TAG_BITS) | sort as u32))
            }

            /// Decode a packed value as stored in a record.
            #[inline]
            pub fn from_raw(raw: u32) -> Self {
                Self(raw)
            }

            /// Packed value as stored in a record.
            #[inline]
            pub fn to_raw(self) -> u32 {
                self.0
            }

            /// Raw sort tag, whether or not it names a known sort.
            #[inline]
            pub fn tag(self) -> u8 {
                (self.0 & 0xFF) as u8
            }

            #[inline]
            pub fn sort(self) -> Option<$sort> {
                <$sort>::from_u8(self.tag())
            }

            #[inline]
            pub fn offset(self) -> u32 {
                self.0 >> TAG_BITS
            }

            #[inline]
            pub fn is_null(self) -> bool {
                self.0 == 0
            }
        }

        impl PartitionIndex for $name {
            #[inline]
            fn partition_offset(self) -> u32 {
                self.offset()
            }
        }
    };
}

tagged_index! {
    /// Index of a declaration, tagged with its [`DeclSort`].
    DeclIndex => DeclSort
}

tagged_index! {
    /// Index of a type, tagged with its [`TypeSort`].
    TypeIndex => TypeSort
}

tagged_index! {
    /// Index of an expression, tagged with its [`ExprSort`].
    ExprIndex => ExprSort
}

tagged_index! {
    /// Index of a name. For [`NameSort::Identifier`] the offset is a
    /// [`TextOffset`] into the string table; for [`NameSort::Operator`] it
    /// addresses the `name.operator` partition.
    NameIndex => NameSort
}

tagged_index! {
    /// Index of a template parameter chart, tagged with its [`ChartSort`].
    ChartIndex => ChartSort
}

impl NameIndex {
    /// Identifier name spelled by the string at `text`.
    pub fn identifier(text: TextOffset) -> Result<Self, IndexError> {
        Self::new(NameSort::Identifier, text.0)
    }
}

/// Byte offset into the string table. Offset 0 is the null string.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[repr(transparent)]
pub struct TextOffset(pub u32);

impl TextOffset {
    pub const NULL: Self = Self(0);

    #[inline]
    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

/// One-based index into the `scope.desc` partition. Zero means the scope has
/// no definition.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[repr(transparent)]
pub struct ScopeIndex(pub u32);

impl ScopeIndex {
    pub const NULL: Self = Self(0);

    /// Scope index addressing the descriptor at `offset`; `None` for
    /// `u32::MAX`, which has no one-based counterpart.
    pub fn from_offset(offset: u32) -> Option<Self> {
        offset.checked_add(1).map(Self)
    }

    #[inline]
    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl PartitionIndex for ScopeIndex {
    /// The null index wraps to `u32::MAX`, which no partition can hold.
    #[inline]
    fn partition_offset(self) -> u32 {
        self.0.wrapping_sub(1)
    }
}

/// Contiguous run `[start, start + cardinality)` within a partition.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Sequence {
    pub start: u32,
    pub cardinality: u32,
}

impl Sequence {
    pub fn new(start: u32, cardinality: u32) -> Self {
        Self { start, cardinality }
    }

    /// One past the last offset, or `None` on overflow.
    #[inline]
    pub fn end(self) -> Option<u32> {
        self.start.checked_add(self.cardinality)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.cardinality == 0
    }
}
