//! Declaration records.

use super::{Record, read_sequence, read_u32_le};
use crate::index::{ChartIndex, DeclIndex, NameIndex, ScopeIndex, Sequence, TextOffset, TypeIndex};
use crate::sorts::ParameterSort;

/// Variable declaration (8 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariableDeclaration {
    pub name: NameIndex,
    pub ty: TypeIndex,
}

impl Record for VariableDeclaration {
    const PARTITION: &'static str = "decl.variable";
    const SIZE: usize = 8;

    fn decode(bytes: &[u8]) -> Self {
        Self {
            name: NameIndex::from_raw(read_u32_le(bytes, 0)),
            ty: TypeIndex::from_raw(read_u32_le(bytes, 4)),
        }
    }
}

/// Class, struct, union, namespace or interface (12 bytes).
///
/// `ty` is a fundamental type whose basis tells which kind of scope this is.
/// A null `initializer` means the scope was declared but never defined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScopeDeclaration {
    pub name: NameIndex,
    pub ty: TypeIndex,
    pub initializer: ScopeIndex,
}

impl Record for ScopeDeclaration {
    const PARTITION: &'static str = "decl.scope";
    const SIZE: usize = 12;

    fn decode(bytes: &[u8]) -> Self {
        Self {
            name: NameIndex::from_raw(read_u32_le(bytes, 0)),
            ty: TypeIndex::from_raw(read_u32_le(bytes, 4)),
            initializer: ScopeIndex(read_u32_le(bytes, 8)),
        }
    }
}

/// Enumeration declaration (8 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnumerationDeclaration {
    pub name: TextOffset,
    /// Underlying type.
    pub base: TypeIndex,
}

impl Record for EnumerationDeclaration {
    const PARTITION: &'static str = "decl.enum";
    const SIZE: usize = 8;

    fn decode(bytes: &[u8]) -> Self {
        Self {
            name: TextOffset(read_u32_le(bytes, 0)),
            base: TypeIndex::from_raw(read_u32_le(bytes, 4)),
        }
    }
}

/// Type alias declaration (8 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AliasDeclaration {
    pub name: TextOffset,
    pub aliasee: TypeIndex,
}

impl Record for AliasDeclaration {
    const PARTITION: &'static str = "decl.alias";
    const SIZE: usize = 8;

    fn decode(bytes: &[u8]) -> Self {
        Self {
            name: TextOffset(read_u32_le(bytes, 0)),
            aliasee: TypeIndex::from_raw(read_u32_le(bytes, 4)),
        }
    }
}

/// Template declaration (12 bytes): a parameter chart wrapped around an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TemplateDeclaration {
    pub name: NameIndex,
    pub chart: ChartIndex,
    /// The parameterized declaration.
    pub entity: DeclIndex,
}

impl Record for TemplateDeclaration {
    const PARTITION: &'static str = "decl.template";
    const SIZE: usize = 12;

    fn decode(bytes: &[u8]) -> Self {
        Self {
            name: NameIndex::from_raw(read_u32_le(bytes, 0)),
            chart: ChartIndex::from_raw(read_u32_le(bytes, 4)),
            entity: DeclIndex::from_raw(read_u32_le(bytes, 8)),
        }
    }
}

/// Function declaration (8 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FunctionDeclaration {
    pub name: NameIndex,
    pub ty: TypeIndex,
}

impl Record for FunctionDeclaration {
    const PARTITION: &'static str = "decl.function";
    const SIZE: usize = 8;

    fn decode(bytes: &[u8]) -> Self {
        Self {
            name: NameIndex::from_raw(read_u32_le(bytes, 0)),
            ty: TypeIndex::from_raw(read_u32_le(bytes, 4)),
        }
    }
}

/// Using-declaration (8 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UsingDeclaration {
    pub name: TextOffset,
    /// Declaration the using-declaration brings into scope.
    pub resolution: DeclIndex,
}

impl Record for UsingDeclaration {
    const PARTITION: &'static str = "decl.using";
    const SIZE: usize = 8;

    fn decode(bytes: &[u8]) -> Self {
        Self {
            name: TextOffset(read_u32_le(bytes, 0)),
            resolution: DeclIndex::from_raw(read_u32_le(bytes, 4)),
        }
    }
}

/// Function or template parameter (12 bytes).
///
/// Layout: name (4), type (4), sort (1), pack (1), padding (2).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParameterDeclaration {
    pub name: TextOffset,
    pub ty: TypeIndex,
    sort: u8,
    pub pack: bool,
}

impl ParameterDeclaration {
    pub fn new(name: TextOffset, ty: TypeIndex, sort: ParameterSort, pack: bool) -> Self {
        Self {
            name,
            ty,
            sort: sort.as_u8(),
            pack,
        }
    }

    /// Parameter sort, `None` for an unknown tag.
    pub fn sort(&self) -> Option<ParameterSort> {
        ParameterSort::from_u8(self.sort)
    }

    /// Raw parameter sort tag.
    pub fn sort_tag(&self) -> u8 {
        self.sort
    }
}

impl Record for ParameterDeclaration {
    const PARTITION: &'static str = "decl.parameter";
    const SIZE: usize = 12;

    fn decode(bytes: &[u8]) -> Self {
        Self {
            name: TextOffset(read_u32_le(bytes, 0)),
            ty: TypeIndex::from_raw(read_u32_le(bytes, 4)),
            sort: bytes[8],
            pack: bytes[9] != 0,
        }
    }
}

/// Names the unit that owns a referenced declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModuleReference {
    /// Module name.
    pub owner: TextOffset,
    /// Partition name, null for the primary interface.
    pub partition: TextOffset,
}

/// Declaration owned by an imported unit (12 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeclReference {
    pub unit: ModuleReference,
    /// Index into the owning unit's partitions.
    pub local_index: DeclIndex,
}

impl Record for DeclReference {
    const PARTITION: &'static str = "decl.reference";
    const SIZE: usize = 12;

    fn decode(bytes: &[u8]) -> Self {
        Self {
            unit: ModuleReference {
                owner: TextOffset(read_u32_le(bytes, 0)),
                partition: TextOffset(read_u32_le(bytes, 4)),
            },
            local_index: DeclIndex::from_raw(read_u32_le(bytes, 8)),
        }
    }
}

/// Scope member entry (4 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub index: DeclIndex,
}

impl Record for Declaration {
    const PARTITION: &'static str = "scope.member";
    const SIZE: usize = 4;

    fn decode(bytes: &[u8]) -> Self {
        Self {
            index: DeclIndex::from_raw(read_u32_le(bytes, 0)),
        }
    }
}

/// Member list of a defined scope: a run of `scope.member` entries (8 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScopeDescriptor(pub Sequence);

impl Record for ScopeDescriptor {
    const PARTITION: &'static str = "scope.desc";
    const SIZE: usize = 8;

    fn decode(bytes: &[u8]) -> Self {
        Self(read_sequence(bytes, 0))
    }
}
