//! Expression records.

use super::{Record, read_sequence, read_u32_le};
use crate::index::{DeclIndex, ExprIndex, Sequence, TypeIndex};

/// Expression denoting a type, e.g. a type template argument (8 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypeExpression {
    pub ty: TypeIndex,
    pub denotation: TypeIndex,
}

impl Record for TypeExpression {
    const PARTITION: &'static str = "expr.type";
    const SIZE: usize = 8;

    fn decode(bytes: &[u8]) -> Self {
        Self {
            ty: TypeIndex::from_raw(read_u32_le(bytes, 0)),
            denotation: TypeIndex::from_raw(read_u32_le(bytes, 4)),
        }
    }
}

/// Expression naming a declaration (8 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NamedDeclExpression {
    pub ty: TypeIndex,
    pub resolution: DeclIndex,
}

impl Record for NamedDeclExpression {
    const PARTITION: &'static str = "expr.decl";
    const SIZE: usize = 8;

    fn decode(bytes: &[u8]) -> Self {
        Self {
            ty: TypeIndex::from_raw(read_u32_le(bytes, 0)),
            resolution: DeclIndex::from_raw(read_u32_le(bytes, 4)),
        }
    }
}

/// Ordered list of expressions: a run of `heap.expr` entries (8 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TupleExpression {
    pub seq: Sequence,
}

impl Record for TupleExpression {
    const PARTITION: &'static str = "expr.tuple";
    const SIZE: usize = 8;

    fn decode(bytes: &[u8]) -> Self {
        Self {
            seq: read_sequence(bytes, 0),
        }
    }
}

/// `primary<arguments>` (8 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TemplateId {
    pub primary: ExprIndex,
    pub arguments: ExprIndex,
}

impl Record for TemplateId {
    const PARTITION: &'static str = "expr.template-id";
    const SIZE: usize = 8;

    fn decode(bytes: &[u8]) -> Self {
        Self {
            primary: ExprIndex::from_raw(read_u32_le(bytes, 0)),
            arguments: ExprIndex::from_raw(read_u32_le(bytes, 4)),
        }
    }
}
