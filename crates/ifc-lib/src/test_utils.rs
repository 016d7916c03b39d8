//! In-memory image builder for tests.
//!
//! [`FileBuilder`] encodes records into per-partition byte tables and lays
//! them out after the string table. Helpers return the tagged index of what
//! they added, so graphs can be wired up the way a producer would.

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;

use ifc_core::{
    AliasDeclaration, ChartIndex, ChartSort, DeclIndex, DeclReference, DeclSort, Declaration,
    DesignatedType, EnumerationDeclaration, ExpansionType, ExprIndex, ExprSort, ForallType,
    FunctionDeclaration, FunctionType, FundamentalType, LvalueReference, ModuleReference,
    NameIndex, NameSort, NamedDeclExpression, OperatorFunctionName, ParameterDeclaration,
    ParameterSort, QualifiedType, Qualifiers, Record, RvalueReference, ScopeDeclaration,
    ScopeDescriptor, ScopeIndex, Sequence, SyntacticType, TemplateDeclaration, TemplateId,
    TextOffset, TupleExpression, TupleType, TypeBasis, TypeExpression, TypeIndex, TypePrecision,
    TypeSign, TypeSort, UnilevelChart, UsingDeclaration, VariableDeclaration,
};

use crate::file::{ByteRange, File, FileImage, ImportTable, PartitionSummary};

/// Little-endian encoding of a record, the inverse of [`Record::decode`].
pub(crate) trait Encode: Record {
    fn encode(&self, out: &mut Vec<u8>);
}

fn put_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

fn put_sequence(out: &mut Vec<u8>, seq: Sequence) {
    put_u32(out, seq.start);
    put_u32(out, seq.cardinality);
}

macro_rules! encode_fields {
    ($($record:ty => |$r:ident, $out:ident| $body:expr;)+) => {
        $(
            impl Encode for $record {
                fn encode(&self, $out: &mut Vec<u8>) {
                    let $r = self;
                    $body
                }
            }
        )+
    };
}

encode_fields! {
    VariableDeclaration => |r, out| {
        put_u32(out, r.name.to_raw());
        put_u32(out, r.ty.to_raw());
    };
    ScopeDeclaration => |r, out| {
        put_u32(out, r.name.to_raw());
        put_u32(out, r.ty.to_raw());
        put_u32(out, r.initializer.0);
    };
    EnumerationDeclaration => |r, out| {
        put_u32(out, r.name.0);
        put_u32(out, r.base.to_raw());
    };
    AliasDeclaration => |r, out| {
        put_u32(out, r.name.0);
        put_u32(out, r.aliasee.to_raw());
    };
    TemplateDeclaration => |r, out| {
        put_u32(out, r.name.to_raw());
        put_u32(out, r.chart.to_raw());
        put_u32(out, r.entity.to_raw());
    };
    FunctionDeclaration => |r, out| {
        put_u32(out, r.name.to_raw());
        put_u32(out, r.ty.to_raw());
    };
    UsingDeclaration => |r, out| {
        put_u32(out, r.name.0);
        put_u32(out, r.resolution.to_raw());
    };
    ParameterDeclaration => |r, out| {
        put_u32(out, r.name.0);
        put_u32(out, r.ty.to_raw());
        out.push(r.sort_tag());
        out.push(r.pack as u8);
    };
    DeclReference => |r, out| {
        put_u32(out, r.unit.owner.0);
        put_u32(out, r.unit.partition.0);
        put_u32(out, r.local_index.to_raw());
    };
    Declaration => |r, out| put_u32(out, r.index.to_raw());
    ScopeDescriptor => |r, out| put_sequence(out, r.0);
    FundamentalType => |r, out| {
        out.extend_from_slice(&[r.basis_tag(), r.precision_tag(), r.sign_tag()]);
    };
    DesignatedType => |r, out| put_u32(out, r.decl.to_raw());
    SyntacticType => |r, out| put_u32(out, r.expr.to_raw());
    ExpansionType => |r, out| {
        put_u32(out, r.pack.to_raw());
        out.push(r.mode);
    };
    LvalueReference => |r, out| put_u32(out, r.referee.to_raw());
    RvalueReference => |r, out| put_u32(out, r.referee.to_raw());
    FunctionType => |r, out| {
        put_u32(out, r.target.to_raw());
        put_u32(out, r.source.to_raw());
    };
    QualifiedType => |r, out| {
        put_u32(out, r.unqualified.to_raw());
        out.push(r.qualifiers.bits());
    };
    TupleType => |r, out| put_sequence(out, r.0);
    ForallType => |r, out| {
        put_u32(out, r.chart.to_raw());
        put_u32(out, r.subject.to_raw());
    };
    TypeIndex => |r, out| put_u32(out, r.to_raw());
    ExprIndex => |r, out| put_u32(out, r.to_raw());
    TypeExpression => |r, out| {
        put_u32(out, r.ty.to_raw());
        put_u32(out, r.denotation.to_raw());
    };
    NamedDeclExpression => |r, out| {
        put_u32(out, r.ty.to_raw());
        put_u32(out, r.resolution.to_raw());
    };
    TupleExpression => |r, out| put_sequence(out, r.seq);
    TemplateId => |r, out| {
        put_u32(out, r.primary.to_raw());
        put_u32(out, r.arguments.to_raw());
    };
    UnilevelChart => |r, out| put_sequence(out, r.0);
    OperatorFunctionName => |r, out| {
        put_u32(out, r.encoded.0);
        out.extend_from_slice(&r.operator.to_le_bytes());
    };
}

#[derive(Debug, Default)]
struct Table {
    entry_size: u32,
    cardinality: u32,
    bytes: Vec<u8>,
}

/// Builds a [`FileImage`] record by record.
#[derive(Debug)]
pub(crate) struct FileBuilder {
    strings: Vec<u8>,
    interned: HashMap<String, TextOffset>,
    tables: IndexMap<String, Table>,
    global_scope: ScopeIndex,
    imports: ImportTable,
}

impl Default for FileBuilder {
    fn default() -> Self {
        Self {
            // Offset 0 is the null string.
            strings: vec![0],
            interned: HashMap::new(),
            tables: IndexMap::new(),
            global_scope: ScopeIndex::NULL,
            imports: ImportTable::new(),
        }
    }
}

impl FileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `text` in the string table.
    pub fn string(&mut self, text: &str) -> TextOffset {
        if let Some(&offset) = self.interned.get(text) {
            return offset;
        }
        let offset = TextOffset(self.strings.len() as u32);
        self.strings.extend_from_slice(text.as_bytes());
        self.strings.push(0);
        self.interned.insert(text.to_owned(), offset);
        offset
    }

    pub fn identifier(&mut self, text: &str) -> NameIndex {
        let offset = self.string(text);
        NameIndex::identifier(offset).expect("string table fits in a name index")
    }

    /// Append a record, returning its offset in the partition.
    pub fn push<T: Encode>(&mut self, record: T) -> u32 {
        let mut bytes = Vec::with_capacity(T::SIZE);
        record.encode(&mut bytes);
        bytes.resize(T::SIZE, 0);
        self.push_raw(T::PARTITION, T::SIZE as u32, &bytes)
    }

    /// Append one raw entry to the partition `name`.
    pub fn push_raw(&mut self, name: &str, entry_size: u32, entry: &[u8]) -> u32 {
        let table = self.tables.entry(name.to_owned()).or_default();
        table.entry_size = entry_size;
        table.bytes.extend_from_slice(entry);
        table.cardinality += 1;
        table.cardinality - 1
    }

    /// Offset the next record of `T` will get.
    pub fn next_offset<T: Record>(&self) -> u32 {
        self.tables
            .get(T::PARTITION)
            .map_or(0, |table| table.cardinality)
    }

    pub fn global(&mut self, members: &[DeclIndex]) -> &mut Self {
        self.global_scope = self.scope_descriptor(members);
        self
    }

    pub fn import(&mut self, key: &str, file: Arc<File>) -> &mut Self {
        self.imports.insert(key, file);
        self
    }

    // Types

    pub fn fundamental(
        &mut self,
        basis: TypeBasis,
        precision: TypePrecision,
        sign: TypeSign,
    ) -> TypeIndex {
        let offset = self.push(FundamentalType::new(basis, precision, sign));
        type_index(TypeSort::Fundamental, offset)
    }

    pub fn basic(&mut self, basis: TypeBasis) -> TypeIndex {
        self.fundamental(basis, TypePrecision::Default, TypeSign::Plain)
    }

    pub fn int(&mut self) -> TypeIndex {
        self.basic(TypeBasis::Int)
    }

    pub fn void(&mut self) -> TypeIndex {
        self.basic(TypeBasis::Void)
    }

    pub fn tuple(&mut self, elements: &[TypeIndex]) -> TypeIndex {
        let start = self.next_offset::<TypeIndex>();
        for &element in elements {
            self.push(element);
        }
        let offset = self.push(TupleType(Sequence::new(start, elements.len() as u32)));
        type_index(TypeSort::Tuple, offset)
    }

    pub fn function_type(&mut self, target: TypeIndex, source: TypeIndex) -> TypeIndex {
        let offset = self.push(FunctionType { target, source });
        type_index(TypeSort::Function, offset)
    }

    pub fn qualified(&mut self, unqualified: TypeIndex, qualifiers: Qualifiers) -> TypeIndex {
        let offset = self.push(QualifiedType {
            unqualified,
            qualifiers,
        });
        type_index(TypeSort::Qualified, offset)
    }

    pub fn lvalue_reference(&mut self, referee: TypeIndex) -> TypeIndex {
        let offset = self.push(LvalueReference { referee });
        type_index(TypeSort::LvalueReference, offset)
    }

    pub fn rvalue_reference(&mut self, referee: TypeIndex) -> TypeIndex {
        let offset = self.push(RvalueReference { referee });
        type_index(TypeSort::RvalueReference, offset)
    }

    pub fn expansion(&mut self, pack: TypeIndex) -> TypeIndex {
        let offset = self.push(ExpansionType { pack, mode: 0 });
        type_index(TypeSort::Expansion, offset)
    }

    pub fn designated(&mut self, decl: DeclIndex) -> TypeIndex {
        let offset = self.push(DesignatedType { decl });
        type_index(TypeSort::Designated, offset)
    }

    pub fn syntactic(&mut self, expr: ExprIndex) -> TypeIndex {
        let offset = self.push(SyntacticType { expr });
        type_index(TypeSort::Syntactic, offset)
    }

    pub fn forall(&mut self, chart: ChartIndex, subject: TypeIndex) -> TypeIndex {
        let offset = self.push(ForallType { chart, subject });
        type_index(TypeSort::Forall, offset)
    }

    // Expressions

    pub fn type_expr(&mut self, denotation: TypeIndex) -> ExprIndex {
        let offset = self.push(TypeExpression {
            ty: TypeIndex::NULL,
            denotation,
        });
        expr_index(ExprSort::Type, offset)
    }

    pub fn named_decl_expr(&mut self, resolution: DeclIndex) -> ExprIndex {
        let offset = self.push(NamedDeclExpression {
            ty: TypeIndex::NULL,
            resolution,
        });
        expr_index(ExprSort::NamedDecl, offset)
    }

    pub fn tuple_expr(&mut self, elements: &[ExprIndex]) -> ExprIndex {
        let start = self.next_offset::<ExprIndex>();
        for &element in elements {
            self.push(element);
        }
        let offset = self.push(TupleExpression {
            seq: Sequence::new(start, elements.len() as u32),
        });
        expr_index(ExprSort::Tuple, offset)
    }

    pub fn template_id(&mut self, primary: ExprIndex, arguments: ExprIndex) -> ExprIndex {
        let offset = self.push(TemplateId { primary, arguments });
        expr_index(ExprSort::TemplateId, offset)
    }

    // Charts and names

    pub fn unilevel_chart(&mut self, parameters: &[ParameterDeclaration]) -> ChartIndex {
        let start = self.next_offset::<ParameterDeclaration>();
        for &parameter in parameters {
            self.push(parameter);
        }
        let offset = self.push(UnilevelChart(Sequence::new(start, parameters.len() as u32)));
        ChartIndex::new(ChartSort::Unilevel, offset).expect("offset fits")
    }

    pub fn parameter(
        &mut self,
        name: &str,
        ty: TypeIndex,
        sort: ParameterSort,
        pack: bool,
    ) -> ParameterDeclaration {
        let name = if name.is_empty() {
            TextOffset::NULL
        } else {
            self.string(name)
        };
        ParameterDeclaration::new(name, ty, sort, pack)
    }

    pub fn operator_name(&mut self, spelling: &str) -> NameIndex {
        let encoded = self.string(spelling);
        let offset = self.push(OperatorFunctionName {
            encoded,
            operator: 0,
        });
        NameIndex::new(NameSort::Operator, offset).expect("offset fits")
    }

    // Declarations

    pub fn variable(&mut self, name: &str, ty: TypeIndex) -> DeclIndex {
        let name = self.identifier(name);
        let offset = self.push(VariableDeclaration { name, ty });
        decl_index(DeclSort::Variable, offset)
    }

    pub fn function(&mut self, name: NameIndex, ty: TypeIndex) -> DeclIndex {
        let offset = self.push(FunctionDeclaration { name, ty });
        decl_index(DeclSort::Function, offset)
    }

    pub fn named_function(&mut self, name: &str, ty: TypeIndex) -> DeclIndex {
        let name = self.identifier(name);
        self.function(name, ty)
    }

    pub fn enumeration(&mut self, name: &str) -> DeclIndex {
        let name = self.string(name);
        let base = self.int();
        let offset = self.push(EnumerationDeclaration { name, base });
        decl_index(DeclSort::Enumeration, offset)
    }

    pub fn alias(&mut self, name: &str, aliasee: TypeIndex) -> DeclIndex {
        let name = self.string(name);
        let offset = self.push(AliasDeclaration { name, aliasee });
        decl_index(DeclSort::Alias, offset)
    }

    pub fn using(&mut self, name: &str, resolution: DeclIndex) -> DeclIndex {
        let name = self.string(name);
        let offset = self.push(UsingDeclaration { name, resolution });
        decl_index(DeclSort::UsingDeclaration, offset)
    }

    pub fn template(&mut self, name: &str, chart: ChartIndex, entity: DeclIndex) -> DeclIndex {
        let name = self.identifier(name);
        let offset = self.push(TemplateDeclaration {
            name,
            chart,
            entity,
        });
        decl_index(DeclSort::Template, offset)
    }

    pub fn parameter_decl(&mut self, parameter: ParameterDeclaration) -> DeclIndex {
        let offset = self.push(parameter);
        decl_index(DeclSort::Parameter, offset)
    }

    /// Member list of a defined scope.
    pub fn scope_descriptor(&mut self, members: &[DeclIndex]) -> ScopeIndex {
        let start = self.next_offset::<Declaration>();
        for &index in members {
            self.push(Declaration { index });
        }
        let offset = self.push(ScopeDescriptor(Sequence::new(start, members.len() as u32)));
        ScopeIndex::from_offset(offset).expect("offset fits")
    }

    /// Scope of kind `basis`; `None` members declares it without a definition.
    pub fn scope(&mut self, basis: TypeBasis, name: &str, members: Option<&[DeclIndex]>) -> DeclIndex {
        let name = self.identifier(name);
        let ty = self.basic(basis);
        let initializer = match members {
            Some(members) => self.scope_descriptor(members),
            None => ScopeIndex::NULL,
        };
        let offset = self.push(ScopeDeclaration {
            name,
            ty,
            initializer,
        });
        decl_index(DeclSort::Scope, offset)
    }

    pub fn reference(&mut self, owner: &str, partition: &str, local_index: DeclIndex) -> DeclIndex {
        let owner = self.string(owner);
        let partition = if partition.is_empty() {
            TextOffset::NULL
        } else {
            self.string(partition)
        };
        let offset = self.push(DeclReference {
            unit: ModuleReference { owner, partition },
            local_index,
        });
        decl_index(DeclSort::Reference, offset)
    }

    /// Lay out the string table at offset 0 followed by every partition.
    pub fn image(&mut self) -> FileImage {
        let names: Vec<String> = self.tables.keys().cloned().collect();
        let name_offsets: Vec<TextOffset> = names.iter().map(|name| self.string(name)).collect();

        let mut bytes = self.strings.clone();
        let string_table = ByteRange::new(0, bytes.len() as u64);
        let mut directory = Vec::with_capacity(self.tables.len());
        for (table, name) in self.tables.values().zip(name_offsets) {
            directory.push(PartitionSummary {
                name,
                offset: bytes.len() as u32,
                cardinality: table.cardinality,
                entry_size: table.entry_size,
            });
            bytes.extend_from_slice(&table.bytes);
        }

        FileImage {
            bytes,
            string_table,
            directory,
            global_scope: self.global_scope,
        }
    }

    pub fn build(&mut self) -> File {
        let image = self.image();
        File::load(image, self.imports.clone()).expect("test image should load")
    }
}

pub(crate) fn decl_index(sort: DeclSort, offset: u32) -> DeclIndex {
    DeclIndex::new(sort, offset).expect("offset fits")
}

pub(crate) fn type_index(sort: TypeSort, offset: u32) -> TypeIndex {
    TypeIndex::new(sort, offset).expect("offset fits")
}

pub(crate) fn expr_index(sort: ExprSort, offset: u32) -> ExprIndex {
    ExprIndex::new(sort, offset).expect("offset fits")
}
