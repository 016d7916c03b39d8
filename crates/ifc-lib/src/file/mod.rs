//! A loaded module interface file.
//!
//! [`File`] owns one decoded record arena per partition, the string table and
//! the import table. It is immutable once [`File::load`] returns and can be
//! shared across threads.

mod imports;
mod load;
mod nodes;


pub use imports::ImportTable;
pub use load::{ByteRange, DirectoryEntry, FileImage, FormatError, PartitionSummary};
pub use nodes::{Chart, Decl, Expr, Name, Type};

use ifc_core::{
    AliasDeclaration, DeclReference, Declaration, DesignatedType, EnumerationDeclaration,
    ExprIndex, ExpansionType, ForallType, FunctionDeclaration, FunctionType, FundamentalType,
    LvalueReference, ModuleReference, NamedDeclExpression, OperatorFunctionName,
    ParameterDeclaration, QualifiedType, Record, RvalueReference, ScopeDeclaration,
    ScopeDescriptor, ScopeIndex, SyntacticType, TemplateDeclaration, TemplateId, TextOffset,
    TupleExpression, TupleType, TypeExpression, TypeIndex, UnilevelChart, UsingDeclaration,
    VariableDeclaration,
};

use crate::partition::{Partition, PartitionError};

/// Lookup error on a loaded file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FileError {
    #[error(transparent)]
    OutOfRange(#[from] PartitionError),
    #[error("unresolved import: '{0}' is not in the import table")]
    UnresolvedImport(String),
    #[error("text offset {0} does not address a valid string")]
    BadString(u32),
}

macro_rules! partitions {
    ($($(#[$meta:meta])* $field:ident: $record:ty),+ $(,)?) => {
        /// Decoded record arenas, one per modeled partition.
        #[derive(Debug, Default)]
        struct Partitions {
            $($field: Vec<$record>,)+
        }

        impl Partitions {
            /// Whether `name` is a partition this reader decodes.
            fn models(name: &str) -> bool {
                [$(<$record as Record>::PARTITION),+].contains(&name)
            }

            fn decode(
                &mut self,
                name: &str,
                bytes: &[u8],
                summary: &PartitionSummary,
            ) -> Result<(), FormatError> {
                $(
                    if name == <$record as Record>::PARTITION {
                        self.$field = load::decode_records(bytes, summary)?;
                        return Ok(());
                    }
                )+
                Ok(())
            }
        }

        impl File {
            $(
                $(#[$meta])*
                pub fn $field(&self) -> Partition<'_, $record> {
                    Partition::new(&self.partitions.$field)
                }
            )+
        }
    };
}

partitions! {
    variables: VariableDeclaration,
    scope_declarations: ScopeDeclaration,
    enumerations: EnumerationDeclaration,
    alias_declarations: AliasDeclaration,
    template_declarations: TemplateDeclaration,
    functions: FunctionDeclaration,
    using_declarations: UsingDeclaration,
    /// Function and template parameters; template charts slice this.
    parameters: ParameterDeclaration,
    /// Declarations owned by imported units.
    decl_references: DeclReference,
    /// Scope members; scope descriptors slice this.
    declarations: Declaration,
    scope_descriptors: ScopeDescriptor,
    fundamental_types: FundamentalType,
    designated_types: DesignatedType,
    syntactic_types: SyntacticType,
    expansion_types: ExpansionType,
    lvalue_references: LvalueReference,
    rvalue_references: RvalueReference,
    function_types: FunctionType,
    qualified_types: QualifiedType,
    tuple_types: TupleType,
    forall_types: ForallType,
    /// Type lists; tuple types slice this.
    type_heap: TypeIndex,
    /// Expression lists; tuple expressions slice this.
    expr_heap: ExprIndex,
    type_expressions: TypeExpression,
    decl_expressions: NamedDeclExpression,
    tuple_expressions: TupleExpression,
    template_ids: TemplateId,
    unilevel_charts: UnilevelChart,
    operator_names: OperatorFunctionName,
}

/// A loaded, validated module interface file.
#[derive(Debug)]
pub struct File {
    strings: Vec<u8>,
    string_table: ByteRange,
    directory: Vec<DirectoryEntry>,
    global_scope: ScopeIndex,
    imports: ImportTable,
    partitions: Partitions,
}

impl File {
    /// String at `offset` in the string table.
    pub fn get_string(&self, offset: TextOffset) -> Result<&str, FileError> {
        let bad = FileError::BadString(offset.0);
        let tail = self.strings.get(offset.0 as usize..).ok_or(bad.clone())?;
        let len = tail.iter().position(|&b| b == 0).ok_or(bad.clone())?;
        std::str::from_utf8(&tail[..len]).map_err(|_| bad)
    }

    /// Import-table key for a module reference: `owner` or `owner:partition`.
    pub fn import_key(&self, unit: &ModuleReference) -> Result<String, FileError> {
        let owner = self.get_string(unit.owner)?;
        if unit.partition.is_null() {
            return Ok(owner.to_owned());
        }
        let partition = self.get_string(unit.partition)?;
        Ok(format!("{owner}:{partition}"))
    }

    /// The file that owns declarations referenced through `unit`.
    pub fn get_imported_module(&self, unit: &ModuleReference) -> Result<&File, FileError> {
        let key = self.import_key(unit)?;
        self.imports
            .get(&key)
            .ok_or(FileError::UnresolvedImport(key))
    }

    pub fn imports(&self) -> &ImportTable {
        &self.imports
    }

    /// Partition directory in file order, including partitions this reader
    /// does not decode.
    pub fn directory(&self) -> &[DirectoryEntry] {
        &self.directory
    }

    /// Directory entry for the partition called `name`.
    pub fn partition_summary(&self, name: &str) -> Option<&PartitionSummary> {
        self.directory
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.summary)
    }

    /// Location of the string table in the loaded byte image.
    pub fn string_table(&self) -> ByteRange {
        self.string_table
    }

    pub fn global_scope(&self) -> ScopeIndex {
        self.global_scope
    }

    /// Members of the scope described by `scope`, in storage order.
    pub fn scope_members(
        &self,
        scope: &ScopeDescriptor,
    ) -> Result<Partition<'_, Declaration>, FileError> {
        Ok(self.declarations().slice(scope.0)?)
    }

    /// Members of the global scope; empty when the file has none.
    pub fn global_members(&self) -> Result<Partition<'_, Declaration>, FileError> {
        if self.global_scope.is_null() {
            return Ok(Partition::new(&[]));
        }
        let scope = self.scope_descriptors().at(self.global_scope)?;
        self.scope_members(scope)
    }
}
