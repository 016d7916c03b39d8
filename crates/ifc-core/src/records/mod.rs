//! Fixed-size record layouts.
//!
//! Every partition holds records of exactly one type. All fields are
//! little-endian; padding bytes are ignored on decode.
//!
//! Partition names follow the IFC convention, but the layouts carry only
//! the fields the presenter reads and are not the MSVC on-disk records.

mod chart;
mod decl;
mod expr;
mod name;
mod types;


pub use chart::UnilevelChart;
pub use decl::{
    AliasDeclaration, DeclReference, Declaration, EnumerationDeclaration, FunctionDeclaration,
    ModuleReference, ParameterDeclaration, ScopeDeclaration, ScopeDescriptor,
    TemplateDeclaration, UsingDeclaration, VariableDeclaration,
};
pub use expr::{NamedDeclExpression, TemplateId, TupleExpression, TypeExpression};
pub use name::OperatorFunctionName;
pub use types::{
    DesignatedType, ExpansionType, ForallType, FunctionType, FundamentalType, LvalueReference,
    QualifiedType, Qualifiers, RvalueReference, SyntacticType, TupleType,
};

use crate::index::{ExprIndex, Sequence, TypeIndex};

/// A record stored in a named partition.
pub trait Record: Sized {
    /// Partition name in the file directory.
    const PARTITION: &'static str;
    /// Encoded size in bytes; must equal the directory's `entry_size`.
    const SIZE: usize;

    /// Decode from exactly [`Self::SIZE`] bytes.
    fn decode(bytes: &[u8]) -> Self;
}

/// Read a little-endian u16 from bytes at the given offset.
#[inline]
pub(crate) fn read_u16_le(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

/// Read a little-endian u32 from bytes at the given offset.
#[inline]
pub(crate) fn read_u32_le(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

#[inline]
pub(crate) fn read_sequence(bytes: &[u8], offset: usize) -> Sequence {
    Sequence::new(read_u32_le(bytes, offset), read_u32_le(bytes, offset + 4))
}

/// Entries of `heap.type`: type lists referenced by tuple types.
impl Record for TypeIndex {
    const PARTITION: &'static str = "heap.type";
    const SIZE: usize = 4;

    fn decode(bytes: &[u8]) -> Self {
        Self::from_raw(read_u32_le(bytes, 0))
    }
}

/// Entries of `heap.expr`: expression lists referenced by tuple expressions.
impl Record for ExprIndex {
    const PARTITION: &'static str = "heap.expr";
    const SIZE: usize = 4;

    fn decode(bytes: &[u8]) -> Self {
        Self::from_raw(read_u32_le(bytes, 0))
    }
}
