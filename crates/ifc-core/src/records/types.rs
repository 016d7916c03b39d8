//! Type records.

use super::{Record, read_sequence, read_u32_le};
use crate::index::{ChartIndex, DeclIndex, ExprIndex, Sequence, TypeIndex};
use crate::sorts::{TypeBasis, TypePrecision, TypeSign};

bitflags::bitflags! {
    /// cv-qualifiers plus `restrict`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Qualifiers: u8 {
        const CONST = 1 << 0;
        const VOLATILE = 1 << 1;
        const RESTRICT = 1 << 2;
    }
}

/// Built-in type (4 bytes): basis, precision, sign, padding.
///
/// Fields are kept raw so unknown tags survive decoding and can be reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FundamentalType {
    basis: u8,
    precision: u8,
    sign: u8,
}

impl FundamentalType {
    pub fn new(basis: TypeBasis, precision: TypePrecision, sign: TypeSign) -> Self {
        Self {
            basis: basis.as_u8(),
            precision: precision.as_u8(),
            sign: sign.as_u8(),
        }
    }

    pub fn basis(&self) -> Option<TypeBasis> {
        TypeBasis::from_u8(self.basis)
    }

    pub fn precision(&self) -> Option<TypePrecision> {
        TypePrecision::from_u8(self.precision)
    }

    pub fn sign(&self) -> Option<TypeSign> {
        TypeSign::from_u8(self.sign)
    }

    pub fn basis_tag(&self) -> u8 {
        self.basis
    }

    pub fn precision_tag(&self) -> u8 {
        self.precision
    }

    pub fn sign_tag(&self) -> u8 {
        self.sign
    }
}

impl Record for FundamentalType {
    const PARTITION: &'static str = "type.fundamental";
    const SIZE: usize = 4;

    fn decode(bytes: &[u8]) -> Self {
        Self {
            basis: bytes[0],
            precision: bytes[1],
            sign: bytes[2],
        }
    }
}

/// Type designated by a declaration, e.g. a class name (4 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DesignatedType {
    pub decl: DeclIndex,
}

impl Record for DesignatedType {
    const PARTITION: &'static str = "type.designated";
    const SIZE: usize = 4;

    fn decode(bytes: &[u8]) -> Self {
        Self {
            decl: DeclIndex::from_raw(read_u32_le(bytes, 0)),
        }
    }
}

/// Type written as an expression, e.g. a dependent template-id (4 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyntacticType {
    pub expr: ExprIndex,
}

impl Record for SyntacticType {
    const PARTITION: &'static str = "type.syntactic";
    const SIZE: usize = 4;

    fn decode(bytes: &[u8]) -> Self {
        Self {
            expr: ExprIndex::from_raw(read_u32_le(bytes, 0)),
        }
    }
}

/// Pack expansion `T...` (8 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpansionType {
    pub pack: TypeIndex,
    pub mode: u8,
}

impl Record for ExpansionType {
    const PARTITION: &'static str = "type.expansion";
    const SIZE: usize = 8;

    fn decode(bytes: &[u8]) -> Self {
        Self {
            pack: TypeIndex::from_raw(read_u32_le(bytes, 0)),
            mode: bytes[4],
        }
    }
}

/// `T&` (4 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LvalueReference {
    pub referee: TypeIndex,
}

impl Record for LvalueReference {
    const PARTITION: &'static str = "type.lvalue-reference";
    const SIZE: usize = 4;

    fn decode(bytes: &[u8]) -> Self {
        Self {
            referee: TypeIndex::from_raw(read_u32_le(bytes, 0)),
        }
    }
}

/// `T&&` (4 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RvalueReference {
    pub referee: TypeIndex,
}

impl Record for RvalueReference {
    const PARTITION: &'static str = "type.rvalue-reference";
    const SIZE: usize = 4;

    fn decode(bytes: &[u8]) -> Self {
        Self {
            referee: TypeIndex::from_raw(read_u32_le(bytes, 0)),
        }
    }
}

/// Function type (8 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FunctionType {
    /// Return type.
    pub target: TypeIndex,
    /// Parameter types, usually a tuple.
    pub source: TypeIndex,
}

impl Record for FunctionType {
    const PARTITION: &'static str = "type.function";
    const SIZE: usize = 8;

    fn decode(bytes: &[u8]) -> Self {
        Self {
            target: TypeIndex::from_raw(read_u32_le(bytes, 0)),
            source: TypeIndex::from_raw(read_u32_le(bytes, 4)),
        }
    }
}

/// Qualified type (8 bytes): unqualified type, qualifier bits, padding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QualifiedType {
    pub unqualified: TypeIndex,
    pub qualifiers: Qualifiers,
}

impl Record for QualifiedType {
    const PARTITION: &'static str = "type.qualified";
    const SIZE: usize = 8;

    fn decode(bytes: &[u8]) -> Self {
        Self {
            unqualified: TypeIndex::from_raw(read_u32_le(bytes, 0)),
            qualifiers: Qualifiers::from_bits_retain(bytes[4]),
        }
    }
}

/// Ordered list of types: a run of `heap.type` entries (8 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TupleType(pub Sequence);

impl Record for TupleType {
    const PARTITION: &'static str = "type.tuple";
    const SIZE: usize = 8;

    fn decode(bytes: &[u8]) -> Self {
        Self(read_sequence(bytes, 0))
    }
}

/// Type parameterized by a template chart (8 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForallType {
    pub chart: ChartIndex,
    pub subject: TypeIndex,
}

impl Record for ForallType {
    const PARTITION: &'static str = "type.forall";
    const SIZE: usize = 8;

    fn decode(bytes: &[u8]) -> Self {
        Self {
            chart: ChartIndex::from_raw(read_u32_le(bytes, 0)),
            subject: TypeIndex::from_raw(read_u32_le(bytes, 4)),
        }
    }
}
